//! Two-phase construction of a [`Digraph`].
//!
//! The builder accumulates nodes and edges into the key-indexed store,
//! deriving every key through the configured extraction functions, then hands
//! the store to the immutable graph. `build` takes the builder by value, so
//! accumulation after construction is rejected by the compiler rather than at
//! run time.

use super::bounds::{EdgeKeyFn, KeyLike, NodeKeyFn};
use super::digraph::Digraph;
use super::store::GraphStore;
use crate::error::DigraphError;

/// Builder for a [`Digraph`] with edge payloads `E` and node payloads `N`,
/// keyed by `Ek` and `Nk`.
///
/// With the default type parameters (`Ek = E`, `Nk = N`) every payload serves
/// as its own key; custom key types are fixed at construction via
/// [`Digraph::builder_with`]. The extraction functions may be swapped
/// mid-build (same key types) with [`id_node_extractor`] /
/// [`id_edge_extractor`]; entries inserted earlier keep the keys computed
/// under the extractor in effect at their insertion time. There is no
/// retroactive re-keying.
///
/// Mutators take `&mut self` and return `&mut Self` for chaining; a failed
/// strict insertion leaves the builder untouched and usable.
///
/// # Example
/// ```rust
/// use keyed_digraph::graph::Digraph;
///
/// let mut builder = Digraph::<&str, u32>::builder();
/// builder.node(1).node(2).edge("1->2", 1, 2);
/// let graph = builder.build();
/// assert_eq!(graph.node_count(), 2);
/// ```
///
/// [`id_node_extractor`]: DigraphBuilder::id_node_extractor
/// [`id_edge_extractor`]: DigraphBuilder::id_edge_extractor
pub struct DigraphBuilder<E, N, Ek = E, Nk = N> {
    node_key: NodeKeyFn<N, Nk>,
    edge_key: EdgeKeyFn<E, Ek>,
    store: GraphStore<E, N, Ek, Nk>,
}

impl<E, N, Ek, Nk> std::fmt::Debug for DigraphBuilder<E, N, Ek, Nk>
where
    E: std::fmt::Debug,
    N: std::fmt::Debug,
    Ek: std::fmt::Debug,
    Nk: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigraphBuilder")
            .field("node_key", &"<fn>")
            .field("edge_key", &"<fn>")
            .field("store", &self.store)
            .finish()
    }
}

impl<E, N> DigraphBuilder<E, N>
where
    E: KeyLike + 'static,
    N: KeyLike + 'static,
{
    /// Creates a builder whose keys are the payloads themselves.
    pub fn new() -> Self {
        Self {
            node_key: Box::new(N::clone),
            edge_key: Box::new(E::clone),
            store: GraphStore::default(),
        }
    }
}

impl<E, N> Default for DigraphBuilder<E, N>
where
    E: KeyLike + 'static,
    N: KeyLike + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, N, Ek, Nk> DigraphBuilder<E, N, Ek, Nk>
where
    Ek: KeyLike,
    Nk: KeyLike,
{
    /// Creates a builder with caller-supplied key extraction functions.
    ///
    /// Both functions must be pure and stable: the same payload always yields
    /// the same key.
    pub fn with_extractors(
        node_key: impl Fn(&N) -> Nk + Send + Sync + 'static,
        edge_key: impl Fn(&E) -> Ek + Send + Sync + 'static,
    ) -> Self {
        Self {
            node_key: Box::new(node_key),
            edge_key: Box::new(edge_key),
            store: GraphStore::default(),
        }
    }

    /// Replaces the node key extraction function.
    ///
    /// Nodes already inserted keep their previously derived keys.
    pub fn id_node_extractor(
        &mut self,
        node_key: impl Fn(&N) -> Nk + Send + Sync + 'static,
    ) -> &mut Self {
        self.node_key = Box::new(node_key);
        self
    }

    /// Replaces the edge key extraction function.
    ///
    /// Edges already inserted keep their previously derived keys.
    pub fn id_edge_extractor(
        &mut self,
        edge_key: impl Fn(&E) -> Ek + Send + Sync + 'static,
    ) -> &mut Self {
        self.edge_key = Box::new(edge_key);
        self
    }

    /// Adds a node, keyed by its derived key.
    ///
    /// Re-adding a key replaces the stored record and discards any incidence
    /// already wired into it.
    pub fn node(&mut self, node: N) -> &mut Self {
        let key = (self.node_key)(&node);
        self.store.insert_node(key, node);
        self
    }

    /// Adds every node from `nodes`.
    pub fn nodes(&mut self, nodes: impl IntoIterator<Item = N>) -> &mut Self {
        for node in nodes {
            self.node(node);
        }
        self
    }

    /// Adds an edge from `source` to `target`, creating endpoint nodes whose
    /// derived keys are not yet present.
    ///
    /// An endpoint key that already exists keeps its stored record; the
    /// payload passed here for that endpoint is dropped.
    pub fn edge(&mut self, edge: E, source: N, target: N) -> &mut Self {
        let source_key = (self.node_key)(&source);
        let target_key = (self.node_key)(&target);
        self.store.ensure_node(source_key.clone(), source);
        self.store.ensure_node(target_key.clone(), target);

        let key = (self.edge_key)(&edge);
        // both endpoints were just ensured
        let _ = self.store.insert_edge(key, edge, source_key, target_key);
        self
    }

    /// Adds every `(edge, source, target)` triple from `edges` permissively.
    pub fn edges(&mut self, edges: impl IntoIterator<Item = (E, N, N)>) -> &mut Self {
        for (edge, source, target) in edges {
            self.edge(edge, source, target);
        }
        self
    }

    /// Adds an edge between nodes that must already be present under
    /// `source_id` and `target_id`.
    ///
    /// Unlike [`edge`](DigraphBuilder::edge), this never creates nodes: a
    /// missing endpoint yields [`DigraphError::MissingEndpoint`] naming the
    /// offending side and id, and the builder state is unchanged.
    pub fn edge_with_node_ids(
        &mut self,
        edge: E,
        source_id: Nk,
        target_id: Nk,
    ) -> Result<&mut Self, DigraphError> {
        let key = (self.edge_key)(&edge);
        self.store.insert_edge(key, edge, source_id, target_id)?;
        Ok(self)
    }

    /// Freezes the accumulated topology into an immutable [`Digraph`].
    ///
    /// Consumes the builder; the store is moved, not copied.
    pub fn build(self) -> Digraph<E, N, Ek, Nk> {
        Digraph::from_parts(self.store, self.node_key, self.edge_key)
    }
}

#[cfg(test)]
mod docs {
    /// A builder cannot accumulate after `build`; the move makes it a
    /// compile-time error.
    ///
    /// ```compile_fail
    /// use keyed_digraph::graph::Digraph;
    /// let mut builder = Digraph::<&str, u32>::builder();
    /// builder.node(1);
    /// let _graph = builder.build();
    /// builder.node(2);
    /// ```
    #[allow(dead_code)]
    fn consumed_on_build() {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EndpointSide;

    #[test]
    fn permissive_edge_creates_missing_endpoints() {
        let mut builder = DigraphBuilder::<&str, u32>::new();
        builder.edge("1->2", 1, 2);
        let graph = builder.build();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn strict_edge_requires_both_endpoints() {
        let mut builder = DigraphBuilder::<&str, u32>::new();
        builder.node(1);
        let err = builder.edge_with_node_ids("1->2", 1, 2).unwrap_err();
        assert_eq!(
            err,
            DigraphError::MissingEndpoint {
                side: EndpointSide::Target,
                id: "2".into(),
            }
        );
        // builder survives the failure
        builder.node(2);
        builder.edge_with_node_ids("1->2", 1, 2).unwrap();
        let graph = builder.build();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn extractor_swap_does_not_rekey_existing_entries() {
        let mut builder =
            DigraphBuilder::<(u32, &str), (u32, &str), u32, u32>::with_extractors(
                |n: &(u32, &str)| n.0,
                |e: &(u32, &str)| e.0,
            );
        builder.node((1, "one"));
        builder.id_node_extractor(|n: &(u32, &str)| n.0 + 100);
        builder.node((2, "two"));
        let graph = builder.build();
        // node (1, ..) keeps key 1; node (2, ..) was keyed under the new extractor
        assert!(graph.find_node_by_id(&1).is_some());
        assert!(graph.find_node_by_id(&102).is_some());
        assert!(graph.find_node_by_id(&2).is_none());
    }

    #[test]
    fn bulk_insertion_matches_single_insertion() {
        let mut builder = DigraphBuilder::<&str, u32>::new();
        builder.nodes([1, 2, 3]);
        builder.edges([("1->2", 1, 2), ("2->3", 2, 3)]);
        let graph = builder.build();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }
}

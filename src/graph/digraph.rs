//! The immutable digraph and its query surface.
//!
//! A [`Digraph`] is a read-only view over the store assembled by a
//! [`DigraphBuilder`]: two key-indexed maps plus the key extraction functions
//! used to derive identities from payloads. Every query is expressed in terms
//! of payload values; the internal records never leak.
//!
//! The read side is total: lookups on unknown ids or unregistered payloads
//! return `None` or an empty iterator, never an error. The strict insertion
//! path on the builder is the only place a missing node is an error.

use std::fmt;

use super::bounds::{EdgeKeyFn, KeyLike, NodeKeyFn};
use super::builder::DigraphBuilder;
use super::edge::EdgeRecord;
use super::node::NodeRecord;
use super::store::GraphStore;
use crate::debug_invariants::DebugInvariants;
use crate::error::DigraphError;

/// An immutable directed graph with edge payloads `E` and node payloads `N`,
/// keyed by `Ek` and `Nk`.
///
/// An edge has a source and a target node; it is an outgoing edge of its
/// source and an incoming edge of its target. All lookups are average O(1)
/// hash probes; incidence queries are linear in the incidence list.
///
/// Once built, the graph never changes. Queries take `&self` and mutate
/// nothing, so a graph handed to other threads (with the usual
/// happens-before edge established by the handoff) may be read concurrently
/// without locking.
///
/// # Example
/// ```rust
/// use keyed_digraph::graph::Digraph;
///
/// let mut builder = Digraph::builder_with(|n: &(u32, &str)| n.0, |e: &(u32, &str)| e.0);
/// builder
///     .edge((12, "a->b"), (1, "a"), (2, "b"))
///     .edge((23, "b->c"), (2, "b"), (3, "c"));
/// let graph = builder.build();
///
/// assert_eq!(graph.find_node_by_id(&2), Some(&(2, "b")));
/// assert_eq!(graph.find_source_node_by_edge(&(23, "b->c")), Some(&(2, "b")));
/// let into_b: Vec<_> = graph.find_incoming_edges_by_node(&(2, "b")).collect();
/// assert_eq!(into_b, vec![&(12, "a->b")]);
/// ```
pub struct Digraph<E, N, Ek = E, Nk = N> {
    store: GraphStore<E, N, Ek, Nk>,
    node_key: NodeKeyFn<N, Nk>,
    edge_key: EdgeKeyFn<E, Ek>,
}

impl<E, N> Digraph<E, N>
where
    E: KeyLike + 'static,
    N: KeyLike + 'static,
{
    /// Creates a builder whose keys are the payloads themselves.
    ///
    /// Payloads then carry their own identity, so they must be
    /// `Clone + Eq + Hash`.
    pub fn builder() -> DigraphBuilder<E, N> {
        DigraphBuilder::new()
    }
}

impl<E, N, Ek, Nk> Digraph<E, N, Ek, Nk>
where
    Ek: KeyLike,
    Nk: KeyLike,
{
    /// Creates a builder with caller-supplied key extraction functions.
    pub fn builder_with(
        node_key: impl Fn(&N) -> Nk + Send + Sync + 'static,
        edge_key: impl Fn(&E) -> Ek + Send + Sync + 'static,
    ) -> DigraphBuilder<E, N, Ek, Nk> {
        DigraphBuilder::with_extractors(node_key, edge_key)
    }

    pub(crate) fn from_parts(
        store: GraphStore<E, N, Ek, Nk>,
        node_key: NodeKeyFn<N, Nk>,
        edge_key: EdgeKeyFn<E, Ek>,
    ) -> Self {
        Self {
            store,
            node_key,
            edge_key,
        }
    }

    /// All node payloads, in no defined order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.store.node_records().map(NodeRecord::payload)
    }

    /// All edge payloads, in no defined order.
    pub fn edges(&self) -> impl Iterator<Item = &E> {
        self.store.edge_records().map(EdgeRecord::payload)
    }

    /// All node keys, in no defined order.
    pub fn node_ids(&self) -> impl Iterator<Item = &Nk> {
        self.store.node_keys()
    }

    /// All edge keys, in no defined order.
    pub fn edge_ids(&self) -> impl Iterator<Item = &Ek> {
        self.store.edge_keys()
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.store.node_count() == 0 && self.store.edge_count() == 0
    }

    pub fn contains_node_id(&self, id: &Nk) -> bool {
        self.store.contains_node(id)
    }

    pub fn contains_edge_id(&self, id: &Ek) -> bool {
        self.store.contains_edge(id)
    }

    /// Finds a node payload by its key.
    pub fn find_node_by_id(&self, id: &Nk) -> Option<&N> {
        self.store.node(id).map(NodeRecord::payload)
    }

    /// Finds an edge payload by its key.
    pub fn find_edge_by_id(&self, id: &Ek) -> Option<&E> {
        self.store.edge(id).map(EdgeRecord::payload)
    }

    /// Finds the source node of `edge`, resolving the edge through its
    /// derived key.
    ///
    /// The key extraction function is applied even when `edge` was never
    /// registered; the lookup then simply misses and returns `None`.
    pub fn find_source_node_by_edge(&self, edge: &E) -> Option<&N> {
        let key = (self.edge_key)(edge);
        let record = self.store.edge(&key)?;
        self.find_node_by_id(record.source())
    }

    /// Finds the target node of `edge`. See
    /// [`find_source_node_by_edge`](Digraph::find_source_node_by_edge).
    pub fn find_target_node_by_edge(&self, edge: &E) -> Option<&N> {
        let key = (self.edge_key)(edge);
        let record = self.store.edge(&key)?;
        self.find_node_by_id(record.target())
    }

    /// Edges whose target is `node`. Empty if `node` is not registered.
    pub fn find_incoming_edges_by_node<'a>(
        &'a self,
        node: &N,
    ) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        let key = (self.node_key)(node);
        Box::new(self.project_incidence(self.store.node(&key).map(|r| r.incoming())))
    }

    /// Edges whose source is `node`. Empty if `node` is not registered.
    pub fn find_outgoing_edges_by_node<'a>(
        &'a self,
        node: &N,
    ) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        let key = (self.node_key)(node);
        Box::new(self.project_incidence(self.store.node(&key).map(|r| r.outgoing())))
    }

    fn project_incidence<'a>(
        &'a self,
        keys: Option<&'a [Ek]>,
    ) -> impl Iterator<Item = &'a E> + 'a {
        keys.unwrap_or(&[])
            .iter()
            .filter_map(|key| self.store.edge(key).map(EdgeRecord::payload))
    }
}

impl<E, N, Ek, Nk> fmt::Debug for Digraph<E, N, Ek, Nk>
where
    Ek: KeyLike,
    Nk: KeyLike,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digraph")
            .field("nodes", &self.store.node_count())
            .field("edges", &self.store.edge_count())
            .finish_non_exhaustive()
    }
}

impl<E, N, Ek, Nk> DebugInvariants for Digraph<E, N, Ek, Nk>
where
    Ek: KeyLike,
    Nk: KeyLike,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "digraph");
    }

    fn validate_invariants(&self) -> Result<(), DigraphError> {
        self.store.validate_invariants()
    }
}

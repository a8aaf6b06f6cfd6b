//! Key-indexed storage backing the digraph.
//!
//! [`GraphStore`] owns the two mappings (node key → node record, edge key →
//! edge record) that back every query. Edge insertion is the single operation
//! that wires incidence: it validates both endpoints *before* any mutation,
//! then registers the edge key in the source's outgoing and the target's
//! incoming lists.
//!
//! Inserting a node or edge under a key already present overwrites the
//! previous record. For nodes this discards any incidence already wired into
//! the replaced record; the store logs the severing but does not reject it.

use hashbrown::HashMap;
use itertools::Itertools;

use super::bounds::KeyLike;
use super::edge::EdgeRecord;
use super::node::NodeRecord;
use crate::debug_invariants::DebugInvariants;
use crate::error::{DigraphError, EndpointSide};

/// Twin-map storage: nodes and edges, each indexed by their derived key.
#[derive(Clone, Debug)]
pub(crate) struct GraphStore<E, N, Ek, Nk> {
    nodes: HashMap<Nk, NodeRecord<N, Ek>>,
    edges: HashMap<Ek, EdgeRecord<E, Nk>>,
}

impl<E, N, Ek, Nk> Default for GraphStore<E, N, Ek, Nk> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }
}

impl<E, N, Ek, Nk> GraphStore<E, N, Ek, Nk>
where
    Ek: KeyLike,
    Nk: KeyLike,
{
    /// Upsert a node record under `key`, replacing any previous record.
    ///
    /// Replacing a record whose incidence lists are non-empty severs that
    /// wiring: edges keep referencing the key, but the fresh record starts
    /// with empty lists.
    pub(crate) fn insert_node(&mut self, key: Nk, payload: N) {
        if let Some(old) = self.nodes.get(&key) {
            if old.is_wired() {
                log::warn!(
                    "node key {key:?} overwritten; {} wired edge reference(s) detached",
                    old.incoming().len() + old.outgoing().len()
                );
            }
        }
        self.nodes.insert(key, NodeRecord::new(payload));
    }

    /// Insert a node record under `key` only if the key is absent.
    ///
    /// Used by permissive edge insertion: an existing record is kept as-is
    /// and `payload` is dropped.
    pub(crate) fn ensure_node(&mut self, key: Nk, payload: N) {
        self.nodes
            .entry(key)
            .or_insert_with(|| NodeRecord::new(payload));
    }

    /// Insert an edge record under `key` and wire incidence at both endpoints.
    ///
    /// Both endpoint keys are checked before anything is touched, so a
    /// [`DigraphError::MissingEndpoint`] leaves the store unchanged. Reusing
    /// an edge key overwrites the previous record.
    pub(crate) fn insert_edge(
        &mut self,
        key: Ek,
        payload: E,
        source: Nk,
        target: Nk,
    ) -> Result<(), DigraphError> {
        if !self.nodes.contains_key(&source) {
            return Err(DigraphError::missing_endpoint(EndpointSide::Source, &source));
        }
        if !self.nodes.contains_key(&target) {
            return Err(DigraphError::missing_endpoint(EndpointSide::Target, &target));
        }
        if self.edges.contains_key(&key) {
            log::debug!("edge key {key:?} overwritten");
        }

        if let Some(rec) = self.nodes.get_mut(&source) {
            rec.attach_outgoing(key.clone());
        }
        if let Some(rec) = self.nodes.get_mut(&target) {
            rec.attach_incoming(key.clone());
        }
        self.edges
            .insert(key, EdgeRecord::new(payload, source, target));

        self.debug_assert_invariants();
        Ok(())
    }

    #[inline]
    pub(crate) fn node(&self, key: &Nk) -> Option<&NodeRecord<N, Ek>> {
        self.nodes.get(key)
    }

    #[inline]
    pub(crate) fn edge(&self, key: &Ek) -> Option<&EdgeRecord<E, Nk>> {
        self.edges.get(key)
    }

    #[inline]
    pub(crate) fn contains_node(&self, key: &Nk) -> bool {
        self.nodes.contains_key(key)
    }

    #[inline]
    pub(crate) fn contains_edge(&self, key: &Ek) -> bool {
        self.edges.contains_key(key)
    }

    pub(crate) fn node_records(&self) -> impl Iterator<Item = &NodeRecord<N, Ek>> {
        self.nodes.values()
    }

    pub(crate) fn edge_records(&self) -> impl Iterator<Item = &EdgeRecord<E, Nk>> {
        self.edges.values()
    }

    pub(crate) fn node_keys(&self) -> impl Iterator<Item = &Nk> {
        self.nodes.keys()
    }

    pub(crate) fn edge_keys(&self) -> impl Iterator<Item = &Ek> {
        self.edges.keys()
    }

    #[inline]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<E, N, Ek, Nk> DebugInvariants for GraphStore<E, N, Ek, Nk>
where
    Ek: KeyLike,
    Nk: KeyLike,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "graph store");
    }

    /// Checks the store invariants that hold for every build sequence:
    /// every edge's endpoints are stored, every incidence entry resolves to a
    /// stored edge, and incidence lists carry no duplicates. Mirror symmetry
    /// is deliberately not asserted: keyed overwrite may sever it.
    fn validate_invariants(&self) -> Result<(), DigraphError> {
        for (key, edge) in &self.edges {
            for (side, endpoint) in [
                (EndpointSide::Source, edge.source()),
                (EndpointSide::Target, edge.target()),
            ] {
                if !self.nodes.contains_key(endpoint) {
                    return Err(DigraphError::DanglingEndpoint {
                        edge: format!("{key:?}"),
                        side,
                        id: format!("{endpoint:?}"),
                    });
                }
            }
        }
        for (key, node) in &self.nodes {
            for (direction, list) in [("incoming", node.incoming()), ("outgoing", node.outgoing())]
            {
                if let Some(missing) = list.iter().find(|ek| !self.edges.contains_key(*ek)) {
                    return Err(DigraphError::OrphanedIncidence {
                        node: format!("{key:?}"),
                        edge: format!("{missing:?}"),
                        direction,
                    });
                }
                if let Some(dup) = list.iter().duplicates().next() {
                    return Err(DigraphError::DuplicateIncidence {
                        node: format!("{key:?}"),
                        edge: format!("{dup:?}"),
                        direction,
                    });
                }
            }
        }
        Ok(())
    }
}

//! # keyed-digraph
//!
//! keyed-digraph is a small Rust library providing an immutable directed-graph
//! ("digraph") container: arbitrary node and edge payloads, wired into a
//! topology and indexed by caller-defined keys for constant-time lookups by
//! identity, by incidence, and by source/target resolution.
//!
//! ## Features
//! - Two-phase construction: a mutable [`DigraphBuilder`] accumulates nodes
//!   and edges, then `build()` freezes them into an immutable [`Digraph`]
//! - Key extraction functions derive node/edge identities from payloads
//!   (payloads serve as their own keys by default)
//! - Permissive edge insertion auto-creates missing endpoints; strict
//!   insertion fails with a precise missing-endpoint error instead
//! - Total read side: queries on unknown ids or payloads return `None` or an
//!   empty iterator, never an error
//! - Debug-build invariant checking via [`DebugInvariants`], with the
//!   `check-invariants`/`strict-invariants` features for release builds
//!
//! Traversal algorithms (reachability, shortest paths, orderings) are out of
//! scope; the graph is a building block, not an algorithms toolkit.
//!
//! ## Usage
//! Add `keyed-digraph` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! keyed-digraph = "0.2"
//! ```
//!
//! ```rust
//! use keyed_digraph::prelude::*;
//!
//! let mut builder = Digraph::<&str, u32>::builder();
//! builder
//!     .edge("1->2", 1, 2)
//!     .edge("2->3", 2, 3);
//! let graph = builder.build();
//!
//! assert_eq!(graph.find_target_node_by_edge(&"1->2"), Some(&2));
//! assert_eq!(graph.find_outgoing_edges_by_node(&2).count(), 1);
//! ```
//!
//! ## Concurrency
//! Construction is single-threaded; a built graph performs no interior
//! mutation and may be read from many threads at once, provided the caller
//! establishes the usual happens-before edge when handing it over.
//!
//! [`DigraphBuilder`]: graph::DigraphBuilder
//! [`Digraph`]: graph::Digraph

pub mod debug_invariants;
pub mod error;
pub mod graph;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::error::{DigraphError, EndpointSide};
    pub use crate::graph::bounds::KeyLike;
    pub use crate::graph::{Digraph, DigraphBuilder};
}

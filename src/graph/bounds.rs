//! Common bound aliases used across the graph code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They are zero-cost and only
//! reduce duplication in `where` clauses.

/// Canonical bound set for node and edge keys.
///
/// Rationale:
/// - `Clone` because keys are duplicated into incidence lists and edge
///   endpoint slots (keys may be heap values such as strings, so `Copy` is
///   deliberately not required)
/// - `Eq + Hash` for the `HashMap`-backed stores
/// - `Debug` for diagnostics, error messages, and invariant checks
pub trait KeyLike: Clone + Eq + std::hash::Hash + std::fmt::Debug {}
impl<T> KeyLike for T where T: Clone + Eq + std::hash::Hash + std::fmt::Debug {}

/// Key-extraction function for node payloads.
///
/// Must be pure and stable: the same payload always yields the same key.
/// `Send + Sync` so a built [`Digraph`](crate::graph::Digraph) can be shared
/// across reader threads.
pub type NodeKeyFn<N, Nk> = Box<dyn Fn(&N) -> Nk + Send + Sync>;

/// Key-extraction function for edge payloads.
pub type EdgeKeyFn<E, Ek> = Box<dyn Fn(&E) -> Ek + Send + Sync>;

//! The digraph container: records, key-indexed store, builder, and the
//! immutable query façade.

pub mod bounds;
pub mod builder;
pub mod digraph;
mod edge;
mod node;
mod store;

pub use builder::DigraphBuilder;
pub use digraph::Digraph;

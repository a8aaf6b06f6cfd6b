//! DigraphError: Unified error type for keyed-digraph public APIs
//!
//! This error type is used throughout the keyed-digraph library to provide
//! robust, non-panicking error handling for all public APIs.

use std::fmt;
use thiserror::Error;

/// Which endpoint of an edge an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointSide {
    Source,
    Target,
}

impl fmt::Display for EndpointSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointSide::Source => f.write_str("source"),
            EndpointSide::Target => f.write_str("target"),
        }
    }
}

/// Unified error type for keyed-digraph operations.
///
/// Offending keys are stringified (via `Debug`) so the error stays
/// `Clone + PartialEq + Eq` without carrying the generic key parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DigraphError {
    /// Strict edge insertion referenced a node id not present in the store.
    #[error("digraph is not well-formed: no {side} node was found under id `{id}`")]
    MissingEndpoint { side: EndpointSide, id: String },
    /// A stored edge references an endpoint node id missing from the store.
    #[error("store error: edge `{edge}` references {side} node `{id}` which is not stored")]
    DanglingEndpoint {
        edge: String,
        side: EndpointSide,
        id: String,
    },
    /// A node's incidence list names an edge id missing from the store.
    #[error("store error: node `{node}` lists {direction} edge `{edge}` which is not stored")]
    OrphanedIncidence {
        node: String,
        edge: String,
        direction: &'static str,
    },
    /// A node's incidence list names the same edge id more than once.
    #[error("store error: node `{node}` lists {direction} edge `{edge}` more than once")]
    DuplicateIncidence {
        node: String,
        edge: String,
        direction: &'static str,
    },
}

impl DigraphError {
    pub(crate) fn missing_endpoint(side: EndpointSide, id: &impl fmt::Debug) -> Self {
        DigraphError::MissingEndpoint {
            side,
            id: format!("{id:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_endpoint_names_side_and_id() {
        let err = DigraphError::missing_endpoint(EndpointSide::Source, &99u32);
        assert_eq!(
            err.to_string(),
            "digraph is not well-formed: no source node was found under id `99`"
        );
        let err = DigraphError::missing_endpoint(EndpointSide::Target, &"b-7");
        assert!(err.to_string().contains("target"));
        assert!(err.to_string().contains("\"b-7\""));
    }

    #[test]
    fn errors_are_comparable() {
        let a = DigraphError::missing_endpoint(EndpointSide::Source, &1u8);
        let b = DigraphError::missing_endpoint(EndpointSide::Source, &1u8);
        assert_eq!(a, b);
        assert_eq!(a.clone(), b);
    }
}

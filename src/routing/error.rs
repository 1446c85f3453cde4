//! Routing error definitions.

use thiserror::Error;

/// Errors raised by route registration and lookup.
///
/// All of them abort the call that triggered them; routes committed by
/// earlier successful registrations are never affected. A lookup that finds
/// no route is not an error, it returns `Ok(None)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Method string is not one of the nine recognized HTTP methods.
    #[error("invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    /// Registration path is empty or normalizes to zero segments.
    #[error("route path has no segments")]
    EmptyPath,

    /// A `:` segment with no parameter name after it.
    #[error("dynamic segment in {0:?} is missing a parameter name")]
    EmptyParamName(String),

    /// A `*` segment anywhere but the final position of a route.
    #[error("wildcard must terminate the route: {0:?}")]
    WildcardNotLast(String),

    /// Two routes name different parameters at the same trie position.
    #[error("conflicting parameter names at segment {position}: :{existing} vs :{conflicting}")]
    ParamConflict {
        /// Zero-based segment index where the names diverge.
        position: usize,
        /// Parameter name already registered at this position.
        existing: String,
        /// Parameter name the rejected registration asked for.
        conflicting: String,
    },
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouteError::InvalidMethod("FETCH".into());
        assert_eq!(err.to_string(), "invalid HTTP method: \"FETCH\"");

        let err = RouteError::WildcardNotLast("/a/*/b".into());
        assert!(err.to_string().contains("/a/*/b"));

        let err = RouteError::ParamConflict {
            position: 1,
            existing: "id".into(),
            conflicting: "name".into(),
        };
        assert_eq!(
            err.to_string(),
            "conflicting parameter names at segment 1: :id vs :name"
        );
    }
}

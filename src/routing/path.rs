//! Path normalization and segment classification.
//!
//! # Design Decisions
//! - Segments separated by `/`; empty segments from leading, trailing or
//!   doubled slashes are dropped (no other trailing-slash semantics)
//! - `:name` marks a dynamic segment capturing one path component
//! - `*` marks a catch-all, legal only as the final segment of a route

/// Marker prefix for dynamic segments.
pub(crate) const PARAM_MARKER: char = ':';

/// The catch-all segment token.
pub(crate) const WILDCARD: &str = "*";

/// Split a path into its non-empty segments, in order.
pub(crate) fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Classification of one normalized path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Matched by text, case-insensitively.
    Literal(&'a str),
    /// Binds the request's segment to the named parameter.
    Dynamic(&'a str),
    /// Catches everything below the current prefix.
    Wildcard,
}

impl<'a> Segment<'a> {
    pub(crate) fn classify(raw: &'a str) -> Segment<'a> {
        if raw == WILDCARD {
            Segment::Wildcard
        } else if let Some(name) = raw.strip_prefix(PARAM_MARKER) {
            Segment::Dynamic(name)
        } else {
            Segment::Literal(raw)
        }
    }
}

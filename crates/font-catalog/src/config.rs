//! Configuration constants for catalog suggestions.

/// Maximum number of suggestions returned for one query.
pub const SUGGESTION_LIMIT: usize = 15;

/// Queries shorter than this (in characters) produce no suggestions.
pub const MIN_QUERY_CHARS: usize = 2;

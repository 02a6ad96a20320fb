//! Frontend tests.

/// Unit tests for integer casts.
pub mod cast;

/// Unit tests for value rendering.
pub mod format;

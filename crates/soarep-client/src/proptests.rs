//! Property-based tests for URL resolution.

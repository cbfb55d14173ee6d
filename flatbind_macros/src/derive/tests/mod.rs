//! Unit tests for the derive pipeline: attribute parsing, type
//! classification, and emitted token content.

mod attrs;

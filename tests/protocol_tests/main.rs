//! Protocol Tests
//!
//! Primitive codec, identifiers, frames and code tables.

mod codes_tests;

//! multini: a multi-value, multi-instance INI configuration store.
//!
//! Parses INI-like text with repeated keys and repeated sections,
//! aggregates multiple files or directory globs into one store, and
//! renders a canonical dump for diff-based regression testing.

pub mod profile;

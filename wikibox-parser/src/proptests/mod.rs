//! Property-based tests for the box parser
//!
//! These tests verify invariants that must hold for ANY input, not just the
//! hand-written cases next to each module.

mod generators;
mod invariants;

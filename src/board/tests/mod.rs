//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts of the legal move tree
//! - `make_unmake.rs` - Make/undo move correctness
//! - `edge_cases.rs` - Check, checkmate, stalemate and pins
//! - `proptest.rs` - Property-based tests

mod make_unmake;

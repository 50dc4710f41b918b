//! End-to-end pipeline
//!
//! Validates input, ranks keywords, groups their evidence and builds the
//! mind map, one traced stage at a time.

pub mod runner;

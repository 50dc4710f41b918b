//! Mind map rendering
//!
//! Turns a topic label and an [`EvidenceMap`](crate::evidence::grouper::EvidenceMap)
//! into a three-level directed graph, and serializes it as DOT, JSON or PNG.

pub mod dot;
pub mod export;
pub mod mindmap;

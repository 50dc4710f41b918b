//! Evidence grouping
//!
//! Collects noun phrases (or whole sentences as a fallback) that mention each
//! keyword, without repeating any text across the map.

pub mod grouper;

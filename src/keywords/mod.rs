//! Keyword ranking
//!
//! Produces the ordered keyword list that seeds evidence grouping.

pub mod ranker;

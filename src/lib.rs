//! # rapid_mindmap
//!
//! Builds a keyword mind map from a short paragraph.
//!
//! 1. **Rank** the most frequent noun lemmas ([`KeywordRanker`]).
//! 2. **Group** noun phrases, or whole sentences as a fallback, that mention
//!    each keyword, never repeating a text ([`EvidenceGrouper`]).
//! 3. **Render** a topic → keyword → evidence graph as DOT, JSON or PNG
//!    ([`MindMap`], [`PngExporter`]).
//!
//! Linguistic analysis sits behind the [`Analyzer`] trait. The bundled
//! [`RuleBasedAnalyzer`] segments with Unicode boundaries, tags with English
//! word lists and suffix rules, and filters stopwords with the `stop-words`
//! English list.
//!
//! ## Example
//!
//! ```
//! use rapid_mindmap::{MindMapConfig, MindMapPipeline, RuleBasedAnalyzer};
//!
//! let analyzer = RuleBasedAnalyzer::default();
//! let config = MindMapConfig::default().with_topic("Robotics");
//! let pipeline = MindMapPipeline::with_config(&analyzer, config);
//!
//! let result = pipeline
//!     .run("Robots assemble cars. Factories use robots for welding.")
//!     .unwrap();
//!
//! assert!(result.keywords.contains(&"robot".to_string()));
//! assert!(result.to_dot().starts_with("digraph {"));
//! ```

pub mod errors;
pub mod evidence;
pub mod keywords;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod render;
pub mod types;

pub use errors::{MindMapError, Result};
pub use evidence::grouper::{EvidenceGrouper, EvidenceMap, GroupingState, SentenceEvidence};
pub use keywords::ranker::KeywordRanker;
pub use nlp::analyzer::{Analyzer, RuleBasedAnalyzer};
pub use pipeline::runner::{MindMapPipeline, MindMapResult};
pub use render::export::{ExportedImage, PngExporter};
pub use render::mindmap::{display_label, MindMap, NodeKind};
pub use types::{
    Document, MindMapConfig, PosTag, Sentence, Token, DEFAULT_TOPIC, EXAMPLE_TEXT,
};

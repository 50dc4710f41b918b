//! Pipeline runner: text → keywords → evidence → mind map.
//!
//! A [`MindMapPipeline`] borrows an [`Analyzer`] that is built once and shared
//! read-only across runs. Each call to [`MindMapPipeline::run`] is synchronous
//! and independent of previous runs.
//!
//! Every stage runs inside an `info_span!("pipeline_stage", stage = …)` so a
//! subscriber can attribute events and timings to it.

use crate::errors::{MindMapError, Result};
use crate::evidence::grouper::{EvidenceGrouper, EvidenceMap};
use crate::keywords::ranker::KeywordRanker;
use crate::nlp::analyzer::Analyzer;
use crate::render::mindmap::MindMap;
use crate::types::MindMapConfig;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Stage names and tracing support
// ---------------------------------------------------------------------------

pub const STAGE_VALIDATE: &str = "validate";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_GROUP: &str = "group";
pub const STAGE_RENDER: &str = "render";

/// Stage names in execution order
pub const STAGES: [&str; 4] = [STAGE_VALIDATE, STAGE_RANK, STAGE_GROUP, STAGE_RENDER];

/// Enter a tracing span for a pipeline stage, held until the end of the
/// enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// MindMapResult
// ============================================================================

/// Everything one pipeline run produces
#[derive(Debug, Clone, Serialize)]
pub struct MindMapResult {
    pub topic: String,
    /// Ranked keywords, most frequent first
    pub keywords: Vec<String>,
    /// Evidence for the keywords that have any
    pub evidence: EvidenceMap,
    pub graph: MindMap,
}

impl MindMapResult {
    /// Graphviz DOT source of the mind map
    pub fn to_dot(&self) -> String {
        self.graph.to_dot()
    }

    /// Pretty-printed JSON with topic, keywords, evidence and graph
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// MindMapPipeline
// ============================================================================

/// Ranks keywords, groups their evidence and builds the mind map
#[derive(Debug, Clone)]
pub struct MindMapPipeline<'a, A: Analyzer + ?Sized> {
    analyzer: &'a A,
    config: MindMapConfig,
    ranker: KeywordRanker,
    grouper: EvidenceGrouper,
}

impl<'a, A: Analyzer + ?Sized> MindMapPipeline<'a, A> {
    /// Create a pipeline with the default configuration
    pub fn new(analyzer: &'a A) -> Self {
        Self::with_config(analyzer, MindMapConfig::default())
    }

    /// Create a pipeline with a custom configuration
    ///
    /// The configuration is validated at the start of every run.
    pub fn with_config(analyzer: &'a A, config: MindMapConfig) -> Self {
        Self {
            analyzer,
            ranker: KeywordRanker::from_config(&config),
            grouper: EvidenceGrouper::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &MindMapConfig {
        &self.config
    }

    /// Run the full pipeline on `text`
    ///
    /// Empty or whitespace-only text is rejected with
    /// [`MindMapError::EmptyInput`] before any analysis happens.
    pub fn run(&self, text: &str) -> Result<MindMapResult> {
        {
            trace_stage!(STAGE_VALIDATE);
            if text.trim().is_empty() {
                tracing::warn!("{}", MindMapError::EmptyInput);
                return Err(MindMapError::EmptyInput);
            }
            self.config.validate()?;
        }

        let keywords = {
            trace_stage!(STAGE_RANK);
            let keywords = self
                .ranker
                .rank(self.analyzer, text, self.config.num_keywords);
            tracing::debug!(count = keywords.len(), ?keywords, "ranked keywords");
            keywords
        };

        let evidence = {
            trace_stage!(STAGE_GROUP);
            self.grouper.group(self.analyzer, text, &keywords)
        };

        let graph = {
            trace_stage!(STAGE_RENDER);
            let graph = MindMap::build(&self.config.topic, &evidence);
            tracing::debug!(
                nodes = graph.num_nodes(),
                edges = graph.num_edges(),
                "built mind map"
            );
            graph
        };

        Ok(MindMapResult {
            topic: self.config.topic.clone(),
            keywords,
            evidence,
            graph,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::analyzer::RuleBasedAnalyzer;
    use crate::render::mindmap::NodeKind;
    use crate::types::{DEFAULT_TOPIC, EXAMPLE_TEXT};

    #[test]
    fn test_stage_order() {
        assert_eq!(STAGES, ["validate", "rank", "group", "render"]);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let analyzer = RuleBasedAnalyzer::default();
        let pipeline = MindMapPipeline::new(&analyzer);

        assert!(matches!(pipeline.run(""), Err(MindMapError::EmptyInput)));
        assert!(matches!(pipeline.run("  \n\t "), Err(MindMapError::EmptyInput)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let analyzer = RuleBasedAnalyzer::default();
        let config = MindMapConfig::default().with_max_per_keyword(0);
        let pipeline = MindMapPipeline::with_config(&analyzer, config);

        assert!(matches!(
            pipeline.run(EXAMPLE_TEXT),
            Err(MindMapError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_example_paragraph_end_to_end() {
        let analyzer = RuleBasedAnalyzer::default();
        let result = MindMapPipeline::new(&analyzer).run(EXAMPLE_TEXT).unwrap();

        assert_eq!(result.topic, DEFAULT_TOPIC);
        assert!(result.keywords.len() <= 6);
        assert!(result.keywords.contains(&"intelligence".to_string()));

        let intelligence = result.evidence.get("intelligence").unwrap();
        assert!(intelligence
            .iter()
            .any(|e| e.to_lowercase().contains("intelligence")));

        let graph = &result.graph;
        assert_eq!(
            graph.num_nodes(),
            1 + result.evidence.len() + result.evidence.total_evidence()
        );
        assert_eq!(graph.num_edges(), graph.num_nodes() - 1);
        assert_eq!(graph.nodes()[0].kind, NodeKind::Topic);
        assert_eq!(graph.nodes()[0].label, "Artificial Intelligence");
    }

    #[test]
    fn test_no_keywords_gives_topic_only_graph() {
        let analyzer = RuleBasedAnalyzer::default();
        let result = MindMapPipeline::new(&analyzer).run("Run! Go! Now!").unwrap();

        assert!(result.keywords.is_empty());
        assert!(result.evidence.is_empty());
        assert_eq!(result.graph.num_nodes(), 1);
    }

    #[test]
    fn test_custom_topic_and_counts() {
        let analyzer = RuleBasedAnalyzer::default();
        let config = MindMapConfig::default()
            .with_topic("Machines")
            .with_num_keywords(2)
            .with_max_per_keyword(1);
        let result = MindMapPipeline::with_config(&analyzer, config)
            .run(EXAMPLE_TEXT)
            .unwrap();

        assert_eq!(result.topic, "Machines");
        assert_eq!(result.keywords.len(), 2);
        assert!(result.graph.node("Machines").is_some());
        assert!(result.to_dot().contains("\"Machines\" [label=\"Machines\" shape=box"));
    }

    #[test]
    fn test_runs_are_independent() {
        let analyzer = RuleBasedAnalyzer::default();
        let pipeline = MindMapPipeline::new(&analyzer);

        let first = pipeline.run(EXAMPLE_TEXT).unwrap();
        let _ = pipeline.run("Robots build cars. Cars need robots.").unwrap();
        let again = pipeline.run(EXAMPLE_TEXT).unwrap();

        assert_eq!(first.keywords, again.keywords);
        assert_eq!(first.evidence, again.evidence);
    }

    #[test]
    fn test_dyn_analyzer() {
        let analyzer: Box<dyn Analyzer> = Box::new(RuleBasedAnalyzer::default());
        let result = MindMapPipeline::new(analyzer.as_ref())
            .run("Robots build cars.")
            .unwrap();
        assert!(!result.keywords.is_empty());
    }

    #[test]
    fn test_json_output() {
        let analyzer = RuleBasedAnalyzer::default();
        let result = MindMapPipeline::new(&analyzer).run(EXAMPLE_TEXT).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

        assert_eq!(value["topic"], DEFAULT_TOPIC);
        assert!(value["keywords"].is_array());
        assert!(value["evidence"]["intelligence"].is_array());
        assert_eq!(value["graph"]["nodes"][0]["kind"], "topic");
    }
}

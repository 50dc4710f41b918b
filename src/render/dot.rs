//! Graphviz DOT serialization

use crate::render::mindmap::{MindMap, MindMapNode};
use std::fmt;

/// Graph-level attributes: left-to-right layout with spline edges
pub const GRAPH_ATTRIBUTES: &[(&str, &str)] = &[("rankdir", "LR"), ("splines", "true")];

/// [`fmt::Display`] adapter writing a [`MindMap`] as a DOT digraph
#[derive(Debug, Clone, Copy)]
pub struct Dot<'a> {
    map: &'a MindMap,
}

impl<'a> Dot<'a> {
    pub fn new(map: &'a MindMap) -> Self {
        Self { map }
    }

    fn write_node(f: &mut fmt::Formatter<'_>, node: &MindMapNode) -> fmt::Result {
        writeln!(
            f,
            "\t{} [label={} shape={} style=filled fillcolor={}]",
            quote(&node.id),
            quote(&node.label),
            node.kind.shape(),
            node.kind.fill_color(),
        )
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;

        let attrs: Vec<String> = GRAPH_ATTRIBUTES
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        writeln!(f, "\tgraph [{}]", attrs.join(" "))?;

        for node in self.map.nodes() {
            Self::write_node(f, node)?;
        }
        for edge in self.map.edges() {
            writeln!(f, "\t{} -> {}", quote(&edge.from), quote(&edge.to))?;
        }

        writeln!(f, "}}")
    }
}

/// Double-quoted DOT string with `"` and `\` escaped
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::grouper::{EvidenceGrouper, GroupingState, SentenceEvidence};
    use crate::render::mindmap::NodeKind;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote(r"a\b"), r#""a\\b""#);
        assert_eq!(quote("two\nlines"), r#""two\nlines""#);
    }

    #[test]
    fn test_dot_layout_and_styles() {
        let grouper = EvidenceGrouper::default();
        let state = grouper.step(
            GroupingState::new(),
            &SentenceEvidence::new("Robots need \"sensors\".", vec!["Robots"]),
            &["robot", "sensor"],
        );
        let map = MindMap::build("AI", &state.into_evidence());
        let dot = map.to_dot();

        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.trim_end().ends_with('}'));
        assert!(dot.contains("\tgraph [rankdir=LR splines=true]\n"));
        assert!(dot.contains(
            "\t\"AI\" [label=\"AI\" shape=box style=filled fillcolor=lightblue]\n"
        ));
        assert!(dot.contains(
            "\t\"robot\" [label=\"robot\" shape=ellipse style=filled fillcolor=lightgreen]\n"
        ));
        assert!(dot.contains(
            "\t\"robot_pt1\" [label=\"Robots\" shape=note style=filled fillcolor=orange]\n"
        ));
        // "sensor" has no phrase, so the sentence itself is the evidence.
        assert!(dot.contains(r#"label="Robots need \"sensors\".""#));
        assert!(dot.contains("\t\"AI\" -> \"robot\"\n"));
        assert!(dot.contains("\t\"robot\" -> \"robot_pt1\"\n"));
    }

    #[test]
    fn test_dot_uses_display_labels() {
        let mut map = MindMap::new("T");
        let long = "x".repeat(95);
        map.get_or_create_node("k", "k", NodeKind::Keyword);
        map.get_or_create_node("k_pt1", &long, NodeKind::Evidence);
        map.add_edge("T", "k");
        map.add_edge("k", "k_pt1");

        let dot = map.to_dot();
        assert!(dot.contains(&format!("label=\"{}...\"", "x".repeat(77))));
        assert!(!dot.contains(&long));
    }
}

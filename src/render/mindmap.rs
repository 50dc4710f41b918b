//! Mind map graph
//!
//! One root node for the topic, one child per keyword and one leaf per
//! evidence entry. Nodes are keyed by id; adding an id twice returns the
//! existing node, the way Graphviz merges nodes that share a name.

use crate::errors::Result;
use crate::evidence::grouper::EvidenceMap;
use crate::render::dot::Dot;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::borrow::Cow;

/// Labels longer than this many characters are shortened
pub const MAX_LABEL_CHARS: usize = 80;

/// Characters kept from a shortened label, before the ellipsis
pub const TRUNCATED_LABEL_CHARS: usize = 77;

const ELLIPSIS: &str = "...";

/// Display form of an evidence string: at most [`MAX_LABEL_CHARS`] characters
pub fn display_label(text: &str) -> Cow<'_, str> {
    if text.chars().count() <= MAX_LABEL_CHARS {
        return Cow::Borrowed(text);
    }
    let mut label: String = text.chars().take(TRUNCATED_LABEL_CHARS).collect();
    label.push_str(ELLIPSIS);
    Cow::Owned(label)
}

/// Level of a node in the mind map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Topic,
    Keyword,
    Evidence,
}

impl NodeKind {
    /// Graphviz node shape
    pub fn shape(&self) -> &'static str {
        match self {
            NodeKind::Topic => "box",
            NodeKind::Keyword => "ellipse",
            NodeKind::Evidence => "note",
        }
    }

    /// Graphviz fill color
    pub fn fill_color(&self) -> &'static str {
        match self {
            NodeKind::Topic => "lightblue",
            NodeKind::Keyword => "lightgreen",
            NodeKind::Evidence => "orange",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MindMapNode {
    pub id: String,
    /// Text shown on the node
    pub label: String,
    /// Full text the node stands for; differs from `label` for long evidence
    pub text: String,
    pub kind: NodeKind,
}

/// Directed edge between two node ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MindMapEdge {
    pub from: String,
    pub to: String,
}

/// Topic → keyword → evidence graph
#[derive(Debug, Clone, Serialize)]
pub struct MindMap {
    topic: String,
    nodes: Vec<MindMapNode>,
    edges: Vec<MindMapEdge>,
    #[serde(skip)]
    id_to_index: FxHashMap<String, usize>,
}

impl MindMap {
    /// Create a graph holding only the topic node
    pub fn new(topic: impl Into<String>) -> Self {
        let topic = topic.into();
        let mut map = Self {
            topic: topic.clone(),
            nodes: Vec::new(),
            edges: Vec::new(),
            id_to_index: FxHashMap::default(),
        };
        map.get_or_create_node(&topic, &topic, NodeKind::Topic);
        map
    }

    /// Build the full graph for a topic and its grouped evidence
    ///
    /// Keywords appear in the map's order; evidence node ids are
    /// `{keyword}_pt{n}` with `n` starting at 1.
    pub fn build(topic: &str, evidence: &EvidenceMap) -> Self {
        let mut map = Self::new(topic);

        for (keyword, entries) in evidence.iter() {
            map.get_or_create_node(keyword, keyword, NodeKind::Keyword);
            map.add_edge(topic, keyword);

            for (i, entry) in entries.iter().enumerate() {
                let id = format!("{keyword}_pt{}", i + 1);
                map.get_or_create_node(&id, entry, NodeKind::Evidence);
                map.add_edge(keyword, &id);
            }
        }

        map
    }

    /// Get or create a node, returning its index
    ///
    /// Evidence labels are shortened with [`display_label`].
    pub fn get_or_create_node(&mut self, id: &str, text: &str, kind: NodeKind) -> usize {
        if let Some(&index) = self.id_to_index.get(id) {
            return index;
        }

        let label = match kind {
            NodeKind::Evidence => display_label(text).into_owned(),
            NodeKind::Topic | NodeKind::Keyword => text.to_string(),
        };

        let index = self.nodes.len();
        self.id_to_index.insert(id.to_string(), index);
        self.nodes.push(MindMapNode {
            id: id.to_string(),
            label,
            text: text.to_string(),
            kind,
        });
        index
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.edges.push(MindMapEdge {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn nodes(&self) -> &[MindMapNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[MindMapEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&MindMapNode> {
        self.id_to_index.get(id).map(|&i| &self.nodes[i])
    }

    /// Nodes reached by an edge leaving `id`, in insertion order
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a MindMapNode> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.from == id)
            .filter_map(move |e| self.node(&e.to))
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Graphviz DOT source
    pub fn to_dot(&self) -> String {
        Dot::new(self).to_string()
    }

    /// Pretty-printed JSON with `topic`, `nodes` and `edges`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

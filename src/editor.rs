//! The graph editing surface: an in-memory working copy of a stack's graph.
//!
//! [`GraphEditor`] owns the mutable nodes/edges a user manipulates and the
//! monotonic counter that mints node ids. The counter belongs to the editor
//! instance, not to module-level state, and is seeded past the highest id
//! already present in the opened document so a reload-then-add sequence
//! cannot collide with previously saved nodes.
//!
//! Gesture classes map to methods:
//!
//! - drop-to-add: [`GraphEditor::drop_node`] / [`GraphEditor::add_node`]
//! - connect: [`GraphEditor::connect`] (no cycle or compatibility check;
//!   validation is the backend executor's concern)
//! - reposition: [`GraphEditor::move_node`] (cosmetic, persisted on save)
//! - configure: [`GraphEditor::set_data`] / [`GraphEditor::update_llm`]
//!   (atomic replacement of the node's data bag)
//!
//! Nothing here talks to the network; an explicit save flushes
//! [`GraphEditor::snapshot`] through [`StackStore`](crate::stacks::StackStore).
//!
//! ```rust
//! use genstack::editor::GraphEditor;
//! use genstack::types::{NodeType, Position};
//!
//! let mut editor = GraphEditor::new();
//! let q = editor.add_node(NodeType::UserQuery, "User Query", Position::new(0.0, 0.0));
//! let out = editor.add_node(NodeType::Output, "Output", Position::new(300.0, 0.0));
//! editor.connect(&q, &out);
//! assert_eq!(editor.snapshot().edges.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{Edge, Graph};
use crate::node::{LlmData, Node, NodeData};
use crate::registry;
use crate::stack::Stack;
use crate::types::{NodeType, Position};

/// Prefix of editor-minted node ids, matching the canvas widget's convention.
const NODE_ID_PREFIX: &str = "dndnode_";

/// The serialized `{nodeType, label}` payload carried by a drag gesture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPayload {
    pub node_type: NodeType,
    pub label: String,
}

impl DropPayload {
    /// Parses the drag payload JSON string. Unknown `nodeType` tags are an
    /// error; the variant set is closed.
    pub fn parse(raw: &str) -> Result<Self, EditorError> {
        serde_json::from_str(raw).map_err(EditorError::Payload)
    }
}

/// Errors raised by editing operations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("invalid drop payload: {0}")]
    Payload(#[source] serde_json::Error),
    #[error("no node with id {id}")]
    NodeNotFound { id: String },
    #[error("node {id} is {found}, expected {expected}")]
    KindMismatch {
        id: String,
        expected: NodeType,
        found: NodeType,
    },
}

/// Mutable working copy of a graph under active editing.
#[derive(Debug, Default)]
pub struct GraphEditor {
    graph: Graph,
    next_id: u64,
}

impl GraphEditor {
    /// An editor over an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a stack's definition (absent definition means empty graph) and
    /// seeds the id counter past any editor-minted ids already present.
    #[must_use]
    pub fn open(stack: &Stack) -> Self {
        Self::from_graph(stack.definition_or_default())
    }

    #[must_use]
    pub fn from_graph(graph: Graph) -> Self {
        let next_id = graph
            .nodes
            .iter()
            .filter_map(|n| n.id.strip_prefix(NODE_ID_PREFIX))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .map(|n| n + 1)
            .max()
            .unwrap_or(0);
        Self { graph, next_id }
    }

    /// The current working copy.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// A clone of the working copy, suitable for serialization on save.
    #[must_use]
    pub fn snapshot(&self) -> Graph {
        self.graph.clone()
    }

    fn mint_id(&mut self) -> String {
        let id = format!("{NODE_ID_PREFIX}{}", self.next_id);
        self.next_id += 1;
        id
    }

    /// Handles a drop gesture carrying a serialized payload, appending one
    /// node with a fresh id and the registry default data for its variant.
    /// Returns the new node's id.
    pub fn drop_node(&mut self, raw_payload: &str, position: Position) -> Result<String, EditorError> {
        let payload = DropPayload::parse(raw_payload)?;
        Ok(self.add_node(payload.node_type, payload.label, position))
    }

    /// Appends a node of the given variant with its registry default data.
    pub fn add_node(
        &mut self,
        node_type: NodeType,
        label: impl Into<String>,
        position: Position,
    ) -> String {
        let id = self.mint_id();
        let data = registry::default_data(node_type, label);
        tracing::debug!(%id, %node_type, "adding node");
        self.graph.nodes.push(Node::new(id.clone(), data, position));
        id
    }

    /// Appends an edge between two nodes, returning the derived edge id.
    /// No cycle or type-compatibility check is performed, and the endpoints
    /// are not required to exist yet; dangling edges are pruned at save time.
    pub fn connect(&mut self, source: &str, target: &str) -> String {
        self.connect_handles(source, target, None, None)
    }

    pub fn connect_handles(
        &mut self,
        source: &str,
        target: &str,
        source_handle: Option<String>,
        target_handle: Option<String>,
    ) -> String {
        let edge = Edge::with_handles(source, target, source_handle, target_handle);
        let id = edge.id.clone();
        tracing::debug!(edge = %id, "adding edge");
        self.graph.edges.push(edge);
        id
    }

    /// Moves a node. Purely cosmetic; persisted only on explicit save.
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), EditorError> {
        let node = self
            .graph
            .node_mut(id)
            .ok_or_else(|| EditorError::NodeNotFound { id: id.to_string() })?;
        node.position = position;
        Ok(())
    }

    /// Atomically replaces a node's configuration bag. The variant may not
    /// change; a mismatch is rejected so a renderer keyed on the node's type
    /// never observes a bag of the wrong shape.
    pub fn set_data(&mut self, id: &str, data: NodeData) -> Result<(), EditorError> {
        let node = self
            .graph
            .node_mut(id)
            .ok_or_else(|| EditorError::NodeNotFound { id: id.to_string() })?;
        if node.node_type() != data.node_type() {
            return Err(EditorError::KindMismatch {
                id: id.to_string(),
                expected: node.node_type(),
                found: data.node_type(),
            });
        }
        node.data = data;
        Ok(())
    }

    /// Applies an immutable update to an `llm` node's configuration.
    ///
    /// ```rust
    /// # use genstack::editor::GraphEditor;
    /// # use genstack::types::{NodeType, Position, Provider};
    /// let mut editor = GraphEditor::new();
    /// let id = editor.add_node(NodeType::Llm, "LLM Engine", Position::default());
    /// editor.update_llm(&id, |data| data.with_provider(Provider::Gemini)).unwrap();
    /// ```
    pub fn update_llm(
        &mut self,
        id: &str,
        f: impl FnOnce(LlmData) -> LlmData,
    ) -> Result<(), EditorError> {
        let node = self
            .graph
            .node_mut(id)
            .ok_or_else(|| EditorError::NodeNotFound { id: id.to_string() })?;
        match &node.data {
            NodeData::Llm(data) => {
                node.data = NodeData::Llm(f(data.clone()));
                Ok(())
            }
            other => Err(EditorError::KindMismatch {
                id: id.to_string(),
                expected: NodeType::Llm,
                found: other.node_type(),
            }),
        }
    }

    /// Removes a node, returning it. Edges referencing it stay in the working
    /// copy (the canvas tolerates them) and are pruned at save time.
    pub fn remove_node(&mut self, id: &str) -> Result<Node, EditorError> {
        let index = self
            .graph
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| EditorError::NodeNotFound { id: id.to_string() })?;
        Ok(self.graph.nodes.remove(index))
    }
}

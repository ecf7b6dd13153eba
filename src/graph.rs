//! Graph definition: the node/edge structure of a workflow.
//!
//! A [`Graph`] is the persistence unit inside a stack's `definition`. Node
//! and edge order is creation order; execution order is derived by the
//! backend executor, not by position in these sequences.
//!
//! The editing surface intentionally allows transiently dangling edges (the
//! canvas widget permits them mid-drag) and does not reject cycles. The
//! invariant that every edge endpoint references an existing node is enforced
//! at save time by [`Graph::prune_dangling_edges`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::Node;

/// A workflow graph: ordered nodes and edges.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Structural problems detected by [`Graph::validate`].
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge references a node id that is not present in the graph.
    #[error("edge {edge} references missing node {node}")]
    DanglingEdge { edge: String, node: String },
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Checks that every edge endpoint references an existing node.
    pub fn validate(&self) -> Result<(), GraphError> {
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !self.contains_node(endpoint) {
                    return Err(GraphError::DanglingEdge {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Removes edges whose source or target no longer exists, returning the
    /// number removed. Called before persisting a working copy.
    pub fn prune_dangling_edges(&mut self) -> usize {
        let before = self.edges.len();
        let nodes = &self.nodes;
        self.edges.retain(|edge| {
            let keep = nodes.iter().any(|n| n.id == edge.source)
                && nodes.iter().any(|n| n.id == edge.target);
            if !keep {
                tracing::warn!(
                    edge = %edge.id,
                    source = %edge.source,
                    target = %edge.target,
                    "pruning edge with missing endpoint before save"
                );
            }
            keep
        });
        before - self.edges.len()
    }
}

/// A directed connection between two nodes.
///
/// The id is derived from the endpoints and handles, matching the canvas
/// widget's convention. `animated` is styling metadata with no execution
/// meaning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(
        default,
        rename = "sourceHandle",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<String>,
    #[serde(
        default,
        rename = "targetHandle",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_handle: Option<String>,
    #[serde(default)]
    pub animated: bool,
}

impl Edge {
    /// Creates an edge between two node ids with no handles.
    #[must_use]
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::with_handles(source, target, None, None)
    }

    /// Creates an edge with optional connection handles, deriving the id the
    /// way the canvas widget does.
    #[must_use]
    pub fn with_handles(
        source: impl Into<String>,
        target: impl Into<String>,
        source_handle: Option<String>,
        target_handle: Option<String>,
    ) -> Self {
        let source = source.into();
        let target = target.into();
        let id = format!(
            "reactflow__edge-{}{}-{}{}",
            source,
            source_handle.as_deref().unwrap_or(""),
            target,
            target_handle.as_deref().unwrap_or("")
        );
        Self {
            id,
            source,
            target,
            source_handle,
            target_handle,
            animated: false,
        }
    }
}

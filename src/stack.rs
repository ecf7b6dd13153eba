//! The workflow document: a named, persisted stack.
//!
//! A [`Stack`] pairs display metadata with an optional graph definition and a
//! [`Persistence`] tag. The tag makes the degraded local-only fallback an
//! explicit state rather than a silently duplicated object shape, so callers
//! can warn the user when edits are not reaching the backend.

use crate::graph::Graph;
use crate::node::{LlmData, Node, NodeData};
use crate::types::Position;

/// Whether a stack has been reconciled with the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Persistence {
    /// Stored by the backend under this server-assigned id.
    Persisted(i64),
    /// Client-local only; creation failed and edits will not survive the
    /// session. Carries a timestamp-derived id for cache keying.
    LocalOnly(i64),
}

impl Persistence {
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        matches!(self, Persistence::Persisted(_))
    }

    /// The server-assigned workflow id, if any.
    #[must_use]
    pub fn workflow_id(&self) -> Option<i64> {
        match self {
            Persistence::Persisted(id) => Some(*id),
            Persistence::LocalOnly(_) => None,
        }
    }
}

/// A named workflow document.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack {
    pub id: Persistence,
    pub name: String,
    pub description: String,
    /// Absent means the empty graph; use [`Self::definition_or_default`].
    pub definition: Option<Graph>,
}

impl Stack {
    #[must_use]
    pub fn new(
        id: Persistence,
        name: impl Into<String>,
        description: impl Into<String>,
        definition: Option<Graph>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            definition,
        }
    }

    /// The graph definition, treating an absent definition as empty.
    #[must_use]
    pub fn definition_or_default(&self) -> Graph {
        self.definition.clone().unwrap_or_default()
    }

    /// The minimal definition supplied on creation: a single language-model
    /// node wired for the mistral provider with no knowledge base or search,
    /// and no edges. Enough for the backend executor to run the stack.
    #[must_use]
    pub fn minimal_definition() -> Graph {
        Graph {
            nodes: vec![Node::new(
                "node-llm-1",
                NodeData::Llm(LlmData::with_label("LLM Engine")),
                Position::default(),
            )],
            edges: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeType, Provider};

    #[test]
    fn missing_definition_reads_as_empty_graph() {
        let stack = Stack::new(Persistence::Persisted(1), "Chat With PDF", "", None);
        assert!(stack.definition_or_default().is_empty());
    }

    #[test]
    fn minimal_definition_is_one_unwired_llm_node() {
        let graph = Stack::minimal_definition();
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());

        let node = &graph.nodes[0];
        assert_eq!(node.node_type(), NodeType::Llm);
        match &node.data {
            NodeData::Llm(data) => {
                assert_eq!(data.llm_provider, Provider::Mistral);
                assert!(!data.use_knowledge_base);
                assert!(!data.use_search);
            }
            other => panic!("expected llm data, got {other:?}"),
        }
    }

    #[test]
    fn persistence_tag_exposes_workflow_id() {
        assert_eq!(Persistence::Persisted(7).workflow_id(), Some(7));
        assert_eq!(Persistence::LocalOnly(123).workflow_id(), None);
        assert!(!Persistence::LocalOnly(123).is_persisted());
    }
}

//! The fixed node-type registry.
//!
//! A closed set of four variants determines the palette offered for dragging
//! and the default configuration attached to each dropped node. There is no
//! open extension mechanism; the variant set is defined by the backend
//! executor, and extending it means touching [`NodeType`],
//! [`NodeData`](crate::node::NodeData), and this palette together.

use crate::node::{KnowledgeBaseData, LlmData, NodeData, OutputData, UserQueryData};
use crate::types::NodeType;

/// One entry of the drag palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub node_type: NodeType,
    pub label: &'static str,
}

/// The palette offered by the editing sidebar, in display order.
pub const PALETTE: [PaletteEntry; 4] = [
    PaletteEntry {
        node_type: NodeType::UserQuery,
        label: "User Query",
    },
    PaletteEntry {
        node_type: NodeType::KnowledgeBase,
        label: "Knowledge Base",
    },
    PaletteEntry {
        node_type: NodeType::Llm,
        label: "LLM Engine",
    },
    PaletteEntry {
        node_type: NodeType::Output,
        label: "Output",
    },
];

/// The default configuration bag for a freshly dropped node.
#[must_use]
pub fn default_data(node_type: NodeType, label: impl Into<String>) -> NodeData {
    match node_type {
        NodeType::UserQuery => NodeData::UserQuery(UserQueryData::with_label(label)),
        NodeType::KnowledgeBase => NodeData::KnowledgeBase(KnowledgeBaseData::with_label(label)),
        NodeType::Llm => NodeData::Llm(LlmData::with_label(label)),
        NodeType::Output => NodeData::Output(OutputData::with_label(label)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_covers_every_variant_once() {
        for ty in NodeType::ALL {
            assert_eq!(
                PALETTE.iter().filter(|e| e.node_type == ty).count(),
                1,
                "variant {ty} must appear exactly once in the palette"
            );
        }
    }

    #[test]
    fn default_data_matches_requested_variant() {
        for entry in PALETTE {
            let data = default_data(entry.node_type, entry.label);
            assert_eq!(data.node_type(), entry.node_type);
            assert_eq!(data.label(), entry.label);
        }
    }
}

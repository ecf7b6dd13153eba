//! Core types for the GenAI Stack workflow model.
//!
//! This module defines the closed set of node variants that can appear on the
//! editing canvas and the language-model providers a workflow can execute
//! against. These are the core domain concepts that define what a workflow
//! *is*; the per-variant configuration bags live in [`crate::node`].
//!
//! # Key Types
//!
//! - [`NodeType`]: Identifies the four fixed node variants
//! - [`Provider`]: Identifies a configured language-model backend
//! - [`Position`]: Presentational canvas coordinate carried by every node
//!
//! # Examples
//!
//! ```rust
//! use genstack::types::{NodeType, Provider};
//!
//! // Wire tags match the editor's drag payloads
//! assert_eq!(NodeType::KnowledgeBase.as_wire(), "knowledgeBase");
//!
//! // Each provider carries a fixed model list and a default
//! assert_eq!(Provider::Openai.default_model(), "gpt-3.5-turbo");
//! assert!(Provider::Mistral.models().contains(&"mistral-large"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the variant of a node on the editing canvas.
///
/// The variant set is closed: it determines the palette offered for dragging,
/// the configuration bag attached to each node instance, and the `type` tag
/// used on the wire. Adding a variant means extending this enum, the
/// [`registry`](crate::registry) palette, and [`crate::node::NodeData`]
/// together.
///
/// Wire tags use the editor's camelCase spelling (`"userQuery"`,
/// `"knowledgeBase"`, `"llm"`, `"output"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    /// Entry point for chat queries.
    UserQuery,
    /// Document store the language model may search for context.
    KnowledgeBase,
    /// Language-model invocation with provider and sampling configuration.
    Llm,
    /// Read-only display of the workflow result.
    Output,
}

impl NodeType {
    /// All node variants, in palette order.
    pub const ALL: [NodeType; 4] = [
        NodeType::UserQuery,
        NodeType::KnowledgeBase,
        NodeType::Llm,
        NodeType::Output,
    ];

    /// The wire tag used in serialized nodes and drag payloads.
    #[must_use]
    pub fn as_wire(&self) -> &'static str {
        match self {
            NodeType::UserQuery => "userQuery",
            NodeType::KnowledgeBase => "knowledgeBase",
            NodeType::Llm => "llm",
            NodeType::Output => "output",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A configured external language-model backend, selectable per `llm` node.
///
/// Each provider owns a fixed model list; changing a node's provider resets
/// its model to that provider's default (see
/// [`LlmData::with_provider`](crate::node::LlmData::with_provider)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Mistral,
    Openai,
    Gemini,
}

impl Provider {
    /// All supported providers.
    pub const ALL: [Provider; 3] = [Provider::Mistral, Provider::Openai, Provider::Gemini];

    /// The lowercase identifier used in wire payloads and endpoint paths.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Mistral => "mistral",
            Provider::Openai => "openai",
            Provider::Gemini => "gemini",
        }
    }

    /// The model selected when switching a node to this provider.
    #[must_use]
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Mistral => "mistral-small",
            Provider::Openai => "gpt-3.5-turbo",
            Provider::Gemini => "gemini-pro",
        }
    }

    /// The fixed model list offered for this provider.
    #[must_use]
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            Provider::Mistral => &["mistral-small", "mistral-large"],
            Provider::Openai => &["gpt-3.5-turbo", "gpt-4"],
            Provider::Gemini => &["gemini-pro"],
        }
    }
}

impl Default for Provider {
    fn default() -> Self {
        Provider::Mistral
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 2D canvas coordinate. Purely presentational; execution ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_type_wire_tags() {
        assert_eq!(NodeType::UserQuery.as_wire(), "userQuery");
        assert_eq!(NodeType::KnowledgeBase.as_wire(), "knowledgeBase");
        assert_eq!(NodeType::Llm.as_wire(), "llm");
        assert_eq!(NodeType::Output.as_wire(), "output");
    }

    #[test]
    fn node_type_serde_matches_wire() {
        for ty in NodeType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_wire()));
            let back: NodeType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn provider_default_models_belong_to_model_list() {
        for provider in Provider::ALL {
            assert!(provider.models().contains(&provider.default_model()));
        }
    }

    #[test]
    fn provider_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Provider::Gemini).unwrap(), "\"gemini\"");
        let p: Provider = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(p, Provider::Openai);
    }

    #[test]
    fn default_provider_is_mistral() {
        assert_eq!(Provider::default(), Provider::Mistral);
        assert_eq!(Provider::default().default_model(), "mistral-small");
    }
}

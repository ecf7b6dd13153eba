//! Node instances and their per-variant configuration bags.
//!
//! A [`Node`] is one element of a workflow graph: a session-scoped id, a
//! variant-specific configuration bag ([`NodeData`]), and a presentational
//! canvas [`Position`]. The wire encoding matches the editor exactly:
//!
//! ```json
//! {
//!   "id": "dndnode_0",
//!   "type": "llm",
//!   "position": { "x": 120.0, "y": 80.0 },
//!   "data": {
//!     "label": "LLM Engine",
//!     "llm_provider": "mistral",
//!     "model": "mistral-small",
//!     "temperature": 0.7,
//!     "use_knowledge_base": false,
//!     "use_search": false
//!   }
//! }
//! ```
//!
//! Configuration updates are immutable-replace: the `with_*` builders on each
//! data bag produce a new value that the editor swaps in atomically, so no
//! renderer can observe a half-updated bag.

use serde::{Deserialize, Serialize};

use crate::types::{NodeType, Position, Provider};

/// A single node in a workflow graph.
///
/// Node ids are minted by the editing session
/// (see [`GraphEditor`](crate::editor::GraphEditor)) and are unique within a
/// graph, not across sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub data: NodeData,
    pub position: Position,
}

impl Node {
    #[must_use]
    pub fn new(id: impl Into<String>, data: NodeData, position: Position) -> Self {
        Self {
            id: id.into(),
            data,
            position,
        }
    }

    /// The variant of this node, derived from its configuration bag.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        self.data.node_type()
    }
}

/// Variant-specific configuration, tagged on the wire as `type` + `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum NodeData {
    UserQuery(UserQueryData),
    KnowledgeBase(KnowledgeBaseData),
    Llm(LlmData),
    Output(OutputData),
}

impl NodeData {
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeData::UserQuery(_) => NodeType::UserQuery,
            NodeData::KnowledgeBase(_) => NodeType::KnowledgeBase,
            NodeData::Llm(_) => NodeType::Llm,
            NodeData::Output(_) => NodeType::Output,
        }
    }

    /// The display label carried by every variant.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            NodeData::UserQuery(d) => &d.label,
            NodeData::KnowledgeBase(d) => &d.label,
            NodeData::Llm(d) => &d.label,
            NodeData::Output(d) => &d.label,
        }
    }
}

/// Configuration for a `userQuery` node: the chat entry point.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct UserQueryData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub query: String,
}

impl UserQueryData {
    /// Placeholder shown when no query text has been entered.
    pub const PLACEHOLDER: &'static str = "Write your query here";

    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            query: String::new(),
        }
    }

    /// The query text, falling back to [`Self::PLACEHOLDER`] when empty.
    #[must_use]
    pub fn query_or_placeholder(&self) -> &str {
        if self.query.is_empty() {
            Self::PLACEHOLDER
        } else {
            &self.query
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}

/// Configuration for a `knowledgeBase` node.
///
/// Only the uploaded file's name travels through this layer; ingestion and
/// embedding happen in the backend. The API key is opaque and not validated
/// client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBaseData {
    #[serde(default)]
    pub label: String,
    #[serde(default = "KnowledgeBaseData::default_embedding_model")]
    pub embedding_model: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl KnowledgeBaseData {
    /// Embedding models offered by the configuration panel.
    pub const EMBEDDING_MODELS: [&'static str; 2] =
        ["text-embedding-3-large", "text-embedding-ada-002"];

    fn default_embedding_model() -> String {
        Self::EMBEDDING_MODELS[0].to_string()
    }

    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_file(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }
}

impl Default for KnowledgeBaseData {
    fn default() -> Self {
        Self {
            label: String::new(),
            embedding_model: Self::default_embedding_model(),
            api_key: String::new(),
            file_name: None,
        }
    }
}

/// Configuration for an `llm` node.
///
/// Wire keys use the backend executor's snake_case spelling
/// (`llm_provider`, `use_knowledge_base`, `use_search`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LlmData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub llm_provider: Provider,
    #[serde(default = "LlmData::default_model")]
    pub model: String,
    #[serde(default = "LlmData::default_temperature")]
    pub temperature: f64,
    #[serde(default)]
    pub use_knowledge_base: bool,
    #[serde(default)]
    pub use_search: bool,
}

impl LlmData {
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;

    fn default_model() -> String {
        Provider::default().default_model().to_string()
    }

    fn default_temperature() -> f64 {
        Self::DEFAULT_TEMPERATURE
    }

    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Switches provider, resetting the model to that provider's default.
    #[must_use]
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.llm_provider = provider;
        self.model = provider.default_model().to_string();
        self
    }

    /// Selects a model. Falls back to the provider's default when the model
    /// does not belong to the provider's fixed list.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        if self.llm_provider.models().contains(&model.as_str()) {
            self.model = model;
        } else {
            tracing::warn!(
                provider = %self.llm_provider,
                %model,
                "model not offered by provider; keeping provider default"
            );
            self.model = self.llm_provider.default_model().to_string();
        }
        self
    }

    /// Sets the sampling temperature, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_knowledge_base(mut self, use_knowledge_base: bool) -> Self {
        self.use_knowledge_base = use_knowledge_base;
        self
    }

    #[must_use]
    pub fn with_search(mut self, use_search: bool) -> Self {
        self.use_search = use_search;
        self
    }
}

impl Default for LlmData {
    fn default() -> Self {
        Self {
            label: String::new(),
            llm_provider: Provider::default(),
            model: Self::default_model(),
            temperature: Self::DEFAULT_TEMPERATURE,
            use_knowledge_base: false,
            use_search: false,
        }
    }
}

/// Configuration for an `output` node. Read-only display; label only.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputData {
    #[serde(default)]
    pub label: String,
}

impl OutputData {
    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_switch_resets_model() {
        let data = LlmData::with_label("LLM Engine");
        assert_eq!(data.model, "mistral-small");

        let data = data.with_provider(Provider::Openai);
        assert_eq!(data.model, "gpt-3.5-turbo");

        let data = data.with_provider(Provider::Gemini);
        assert_eq!(data.model, "gemini-pro");
    }

    #[test]
    fn foreign_model_falls_back_to_provider_default() {
        let data = LlmData::default()
            .with_provider(Provider::Mistral)
            .with_model("gpt-4");
        assert_eq!(data.model, "mistral-small");

        let data = data.with_model("mistral-large");
        assert_eq!(data.model, "mistral-large");
    }

    #[test]
    fn temperature_is_clamped() {
        assert_eq!(LlmData::default().with_temperature(1.7).temperature, 1.0);
        assert_eq!(LlmData::default().with_temperature(-0.2).temperature, 0.0);
        assert_eq!(LlmData::default().with_temperature(0.4).temperature, 0.4);
    }

    #[test]
    fn node_wire_shape_is_type_plus_data() {
        let node = Node::new(
            "dndnode_0",
            NodeData::Output(OutputData::with_label("Output")),
            Position::new(10.0, 20.0),
        );
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "dndnode_0",
                "type": "output",
                "data": { "label": "Output" },
                "position": { "x": 10.0, "y": 20.0 }
            })
        );
    }

    #[test]
    fn sparse_llm_data_deserializes_with_defaults() {
        // The minimal definition the editor persists omits model and temperature.
        let value = json!({
            "id": "node-llm-1",
            "type": "llm",
            "position": { "x": 0.0, "y": 0.0 },
            "data": {
                "label": "LLM Engine",
                "llm_provider": "mistral",
                "use_knowledge_base": false,
                "use_search": false
            }
        });
        let node: Node = serde_json::from_value(value).unwrap();
        match &node.data {
            NodeData::Llm(data) => {
                assert_eq!(data.model, "mistral-small");
                assert_eq!(data.temperature, LlmData::DEFAULT_TEMPERATURE);
            }
            other => panic!("expected llm node, got {other:?}"),
        }
    }

    #[test]
    fn empty_query_yields_placeholder() {
        let data = UserQueryData::with_label("User Query");
        assert_eq!(data.query_or_placeholder(), UserQueryData::PLACEHOLDER);
        let data = data.with_query("what is a stack?");
        assert_eq!(data.query_or_placeholder(), "what is a stack?");
    }
}

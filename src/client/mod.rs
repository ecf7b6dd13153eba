//! HTTP client for the GenAI Stack backend.
//!
//! [`BackendClient`] is a thin, stateless wrapper over the backend's
//! JSON/REST contract: workflow CRUD, workflow execution, knowledge-base
//! queries, document listing, and provider key management. All bodies are
//! UTF-8 JSON with `Content-Type: application/json`; no authentication header
//! is attached, and no retry or timeout policy is layered on top of the
//! transport's own behavior.
//!
//! The client is `Clone` (it shares one connection pool) and safe to use from
//! overlapping requests; whichever response lands last wins, matching the
//! editor's single-context re-entrancy model.
//!
//! ```rust,no_run
//! use genstack::client::BackendClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BackendClient::from_env()?;
//! for workflow in client.list_workflows().await? {
//!     println!("{}: {}", workflow.id, workflow.name);
//! }
//! let answer = client.execute_workflow(1, "What is in my PDF?").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::ClientError;

use reqwest::header::CONTENT_TYPE;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;

use crate::config::{ClientConfig, ConfigError};
use crate::graph::Graph;
use crate::types::Provider;

/// A workflow resource as the backend stores it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub definition: Option<Graph>,
}

/// Which providers have a key configured in the backend environment.
///
/// Providers missing from the mapping read as unconfigured, and the status
/// fetch itself degrades to all-unconfigured on failure — a misleading
/// "not configured" beats a thrown error in the configuration panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiKeyStatus {
    configured: FxHashMap<String, bool>,
}

impl ApiKeyStatus {
    /// The status after a failed fetch: every provider unconfigured.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_configured(&self, provider: Provider) -> bool {
        self.configured.get(provider.as_str()).copied().unwrap_or(false)
    }
}

/// Outcome of a provider key test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyTest {
    /// The backend reached the provider with the configured key.
    Working,
    /// The key was rejected; `detail` is the backend's failure reason,
    /// surfaced inline in the node's configuration panel.
    Failed { detail: String },
}

impl KeyTest {
    #[must_use]
    pub fn is_working(&self) -> bool {
        matches!(self, KeyTest::Working)
    }
}

/// Client for the backend's REST contract.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Default `top_k` for knowledge-base queries.
    pub const DEFAULT_TOP_K: u32 = 3;

    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    /// Builds a client from environment configuration
    /// (see [`ClientConfig::from_env`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|source| ClientError::Endpoint {
                path: path.to_string(),
                source,
            })
    }

    /// Sends a request and maps transport failures and non-2xx statuses onto
    /// [`ClientError`]. The non-2xx body text is captured for the caller.
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%url, %status, "backend returned error status");
            return Err(ClientError::Status { status, body });
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        url: &Url,
    ) -> Result<T, ClientError> {
        response
            .json()
            .await
            .map_err(|source| ClientError::Decode {
                url: url.to_string(),
                source,
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        let response = self.dispatch(self.http.get(url.clone()), &url).await?;
        Self::read_json(response, &url).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        let request = self.http.request(method, url.clone()).json(body);
        let response = self.dispatch(request, &url).await?;
        Self::read_json(response, &url).await
    }

    /// Lists all stored workflows. `GET /api/v1/workflow/`
    pub async fn list_workflows(&self) -> Result<Vec<WorkflowRecord>, ClientError> {
        self.get_json("/api/v1/workflow/").await
    }

    /// Fetches one workflow. `GET /api/v1/workflow/{id}`
    pub async fn get_workflow(&self, id: i64) -> Result<WorkflowRecord, ClientError> {
        self.get_json(&format!("/api/v1/workflow/{id}")).await
    }

    /// Creates a workflow. `POST /api/v1/workflow/`
    ///
    /// A missing definition defaults to the empty graph, so the backend never
    /// stores an absent definition for client-created workflows.
    pub async fn create_workflow(
        &self,
        name: &str,
        definition: Option<&Graph>,
    ) -> Result<WorkflowRecord, ClientError> {
        let default_definition = Graph::new();
        let definition = definition.unwrap_or(&default_definition);
        let body = json!({ "name": name, "definition": definition });
        self.send_json(reqwest::Method::POST, "/api/v1/workflow/", &body)
            .await
    }

    /// Replaces a workflow's name and definition. `PUT /api/v1/workflow/{id}`
    pub async fn update_workflow(
        &self,
        id: i64,
        name: &str,
        definition: &Graph,
    ) -> Result<WorkflowRecord, ClientError> {
        let body = json!({ "name": name, "definition": definition });
        self.send_json(reqwest::Method::PUT, &format!("/api/v1/workflow/{id}"), &body)
            .await
    }

    /// Deletes a workflow, returning the deleted resource.
    /// `DELETE /api/v1/workflow/{id}`
    pub async fn delete_workflow(&self, id: i64) -> Result<WorkflowRecord, ClientError> {
        let url = self.endpoint(&format!("/api/v1/workflow/{id}"))?;
        let request = self
            .http
            .delete(url.clone())
            .header(CONTENT_TYPE, "application/json");
        let response = self.dispatch(request, &url).await?;
        Self::read_json(response, &url).await
    }

    /// Executes a stored workflow against a chat query, returning the
    /// response text. `POST /api/v1/llm/workflow/{id}/execute`
    ///
    /// One request, one response; no streaming, no partial results. The
    /// `response` field is used when present; any other JSON shape is
    /// stringified rather than treated as an error.
    pub async fn execute_workflow(&self, id: i64, query: &str) -> Result<String, ClientError> {
        let body = json!({ "query": query });
        let value: Value = self
            .send_json(
                reqwest::Method::POST,
                &format!("/api/v1/llm/workflow/{id}/execute"),
                &body,
            )
            .await?;
        Ok(match value.get("response").and_then(Value::as_str) {
            Some(text) => text.to_string(),
            None => value.to_string(),
        })
    }

    /// Queries the knowledge base for relevant chunks.
    /// `POST /api/v1/knowledge/query`
    pub async fn query_knowledge_base(
        &self,
        query: &str,
        top_k: Option<u32>,
    ) -> Result<Value, ClientError> {
        let body = json!({
            "query": query,
            "top_k": top_k.unwrap_or(Self::DEFAULT_TOP_K),
        });
        self.send_json(reqwest::Method::POST, "/api/v1/knowledge/query", &body)
            .await
    }

    /// Lists ingested documents. `GET /api/v1/documents/`
    pub async fn list_documents(&self) -> Result<Value, ClientError> {
        self.get_json("/api/v1/documents/").await
    }

    /// Reports which providers have keys configured.
    /// `GET /api/v1/llm/api-key-status`
    ///
    /// Infallible by design: any failure is logged and every provider reads
    /// unconfigured, so the configuration panel disables testing instead of
    /// crashing.
    pub async fn api_key_status(&self) -> ApiKeyStatus {
        match self.try_api_key_status().await {
            Ok(status) => status,
            Err(error) => {
                tracing::warn!(
                    %error,
                    "api key status check failed; treating all providers as unconfigured"
                );
                ApiKeyStatus::unconfigured()
            }
        }
    }

    async fn try_api_key_status(&self) -> Result<ApiKeyStatus, ClientError> {
        self.get_json("/api/v1/llm/api-key-status").await
    }

    /// Tests a provider's configured key.
    /// `POST /api/v1/llm/test-api-key/{provider}`
    ///
    /// A non-2xx answer is not a [`ClientError`] here: the backend reports
    /// key failures through the response status, with the reason in the
    /// body's `detail` field.
    pub async fn test_api_key(&self, provider: Provider) -> Result<KeyTest, ClientError> {
        let url = self.endpoint(&format!("/api/v1/llm/test-api-key/{provider}"))?;
        let response = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })?;
        if response.status().is_success() {
            return Ok(KeyTest::Working);
        }
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(Value::as_str).map(String::from))
            .unwrap_or(body);
        Ok(KeyTest::Failed { detail })
    }
}

//! # GenAI Stack: Workflow Model and Backend Client
//!
//! `genstack` implements the data model and backend contract behind the
//! GenAI Stack visual workflow editor: stacks (persisted workflow documents),
//! the node/edge graph they contain, the editing surface that mutates a
//! working copy of that graph, and the HTTP client that saves and executes
//! workflows against the backend service.
//!
//! Rendering, authentication, document ingestion, embedding search, and
//! language-model inference are external collaborators reached only through
//! the backend's REST contract.
//!
//! ## Core Concepts
//!
//! - **Stack**: a named workflow document with an optional graph definition
//!   and an explicit `Persisted`/`LocalOnly` tag
//! - **Graph**: ordered nodes and edges defining the execution topology
//! - **Node variants**: the closed four-variant set — user query, knowledge
//!   base, language model, output
//! - **Editor**: the in-memory working copy mutated by drag, connect, and
//!   configure gestures, flushed by explicit save
//! - **Client**: one `reqwest`-backed client for the whole REST contract
//!
//! ## Quick Start
//!
//! ### Editing a graph
//!
//! ```
//! use genstack::editor::GraphEditor;
//! use genstack::types::{NodeType, Position, Provider};
//!
//! let mut editor = GraphEditor::new();
//! let query = editor.add_node(NodeType::UserQuery, "User Query", Position::new(0.0, 80.0));
//! let llm = editor.add_node(NodeType::Llm, "LLM Engine", Position::new(300.0, 80.0));
//! let output = editor.add_node(NodeType::Output, "Output", Position::new(600.0, 80.0));
//!
//! editor.connect(&query, &llm);
//! editor.connect(&llm, &output);
//!
//! // Configuration changes replace the node's data atomically.
//! editor
//!     .update_llm(&llm, |data| data.with_provider(Provider::Openai).with_temperature(0.2))
//!     .unwrap();
//!
//! let graph = editor.snapshot();
//! assert_eq!(graph.nodes.len(), 3);
//! assert_eq!(graph.edges.len(), 2);
//! ```
//!
//! ### Saving and executing against the backend
//!
//! ```no_run
//! use genstack::client::BackendClient;
//! use genstack::stacks::StackStore;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BackendClient::from_env()?;
//! let mut store = StackStore::new(client.clone());
//!
//! // Creation falls back to an explicit local-only stack when the backend
//! // is unreachable; the persistence tag carries the distinction.
//! let stack = store.create("Chat With PDF", "Answers questions about a PDF").await;
//! let id = stack.id;
//!
//! let answer = match id.workflow_id() {
//!     Some(workflow_id) => client.execute_workflow(workflow_id, "Summarize page 1").await?,
//!     None => "stack is local-only".to_string(),
//! };
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Guide
//!
//! - [`types`] - Node variants, providers, canvas positions
//! - [`node`] - Node instances and per-variant configuration bags
//! - [`graph`] - The node/edge graph and its save-time invariants
//! - [`stack`] - The workflow document and its persistence tag
//! - [`registry`] - The fixed node-type palette and default configurations
//! - [`editor`] - The gesture-driven editing surface
//! - [`stacks`] - The id-keyed local cache and create/refresh/save flows
//! - [`chat`] - Ephemeral chat sessions over the execute endpoint
//! - [`client`] - The backend REST client
//! - [`config`] - Environment-driven connection settings
//! - [`telemetry`] - Tracing subscriber setup

pub mod chat;
pub mod client;
pub mod config;
pub mod editor;
pub mod graph;
pub mod node;
pub mod registry;
pub mod stack;
pub mod stacks;
pub mod telemetry;
pub mod types;

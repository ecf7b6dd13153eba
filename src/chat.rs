//! Ephemeral chat sessions over a stack's execute endpoint.
//!
//! A [`ChatSession`] holds the message log for one chat dialog. It lives only
//! as long as the dialog; nothing here is persisted. Each send is one
//! synchronous round trip to the backend, and failures are surfaced verbatim
//! as the bot's reply text — visible, but never disruptive and never a
//! dropped turn.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::client::BackendClient;

/// Who authored a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One chat turn. Ids are epoch-millis — unique enough for display keying,
/// not globally unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub text: String,
    pub sender: Sender,
}

/// The in-memory message log for one chat dialog.
///
/// Without a persisted workflow id (a local-only stack) the session answers
/// with a simulated reply instead of calling the backend.
#[derive(Debug)]
pub struct ChatSession {
    stack_name: String,
    workflow_id: Option<i64>,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    #[must_use]
    pub fn new(stack_name: impl Into<String>, workflow_id: Option<i64>) -> Self {
        Self {
            stack_name: stack_name.into(),
            workflow_id,
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sends a query: appends the user turn, executes the workflow, and
    /// appends the bot turn — the response text on success, the error's
    /// display text on failure. Returns the bot turn, or `None` when the
    /// input was blank (blank input is ignored, not an error).
    pub async fn send(
        &mut self,
        client: &BackendClient,
        query: &str,
    ) -> Option<&ChatMessage> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let user_id = Utc::now().timestamp_millis();
        self.messages.push(ChatMessage {
            id: user_id,
            text: query.to_string(),
            sender: Sender::User,
        });

        let text = match self.workflow_id {
            Some(id) => match client.execute_workflow(id, query).await {
                Ok(response) => response,
                Err(error) => {
                    tracing::warn!(%error, workflow_id = id, "workflow execution failed");
                    format!("Error: {error}")
                }
            },
            None => format!(
                "This is a simulated response to your query: \"{query}\". The actual \
                 response would come from executing the '{}' stack.",
                self.stack_name
            ),
        };

        self.messages.push(ChatMessage {
            id: user_id + 1,
            text,
            sender: Sender::Bot,
        });
        self.messages.last()
    }
}

//! The workflow document model: an id-keyed local cache over the backend's
//! workflow resource.
//!
//! [`StackStore`] owns the dashboard's view of all stacks and the
//! create/refresh/save flows. Persistence failures never block the user:
//! creation falls back to an explicitly tagged
//! [`Persistence::LocalOnly`](crate::stack::Persistence) stack, and save is
//! fire-and-forget — errors are logged and reported through
//! [`SaveOutcome`], not retried.

use chrono::Utc;

use crate::client::{BackendClient, ClientError, WorkflowRecord};
use crate::graph::Graph;
use crate::stack::{Persistence, Stack};

/// Description shown for stacks recovered from the backend list, which does
/// not store one.
const SAVED_DESCRIPTION: &str = "Saved workflow";

/// What happened to a save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The backend accepted the update.
    Saved,
    /// The stack was never persisted; edits stay in memory only.
    LocalOnly,
    /// The update failed; the local cache kept the edits, the backend did
    /// not. The session continues.
    Failed,
}

/// Local cache of stacks plus the persistence client.
#[derive(Debug)]
pub struct StackStore {
    client: BackendClient,
    stacks: Vec<Stack>,
}

impl StackStore {
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            stacks: Vec::new(),
        }
    }

    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    #[must_use]
    pub fn find(&self, id: Persistence) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    /// Creates a stack with the minimal runnable definition and attempts
    /// server-side creation. On success the stack carries the server id; on
    /// failure it becomes an explicit local-only fallback — availability over
    /// durability, with the degradation visible in the persistence tag.
    pub async fn create(&mut self, name: &str, description: &str) -> &Stack {
        let definition = Stack::minimal_definition();
        let stack = match self.client.create_workflow(name, Some(&definition)).await {
            Ok(record) => Stack::new(
                Persistence::Persisted(record.id),
                record.name,
                description,
                record.definition.or(Some(definition)),
            ),
            Err(error) => {
                tracing::warn!(%error, name, "workflow creation failed; keeping stack local-only");
                Stack::new(
                    Persistence::LocalOnly(Utc::now().timestamp_millis()),
                    name,
                    description,
                    Some(definition),
                )
            }
        };
        self.stacks.push(stack);
        let last = self.stacks.len() - 1;
        &self.stacks[last]
    }

    /// Reloads the persisted stacks from the backend, replacing the persisted
    /// portion of the cache. Local-only stacks are retained; the backend has
    /// never heard of them.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let records = self.client.list_workflows().await?;
        self.stacks.retain(|s| !s.id.is_persisted());
        let mut persisted: Vec<Stack> = records.into_iter().map(Self::stack_from_record).collect();
        persisted.append(&mut self.stacks);
        self.stacks = persisted;
        Ok(())
    }

    fn stack_from_record(record: WorkflowRecord) -> Stack {
        Stack::new(
            Persistence::Persisted(record.id),
            record.name,
            SAVED_DESCRIPTION,
            record.definition,
        )
    }

    /// Saves an editing surface's working copy into a stack. Dangling edges
    /// are pruned before serialization; the whole current node/edge sequence
    /// is sent as-is otherwise.
    ///
    /// Fire-and-forget: a backend failure is logged and reflected in the
    /// outcome, the local cache keeps the edits either way, and editing can
    /// continue. An id not present in the cache is a [`SaveOutcome::Failed`]
    /// without touching the backend; the update body carries the stack's name,
    /// and a made-up name would clobber the stored one.
    pub async fn save(&mut self, id: Persistence, mut graph: Graph) -> SaveOutcome {
        graph.prune_dangling_edges();

        let Some(name) = self.find(id).map(|s| s.name.clone()) else {
            tracing::warn!(?id, "save requested for a stack not in the cache");
            return SaveOutcome::Failed;
        };

        let outcome = match id.workflow_id() {
            Some(workflow_id) => {
                match self
                    .client
                    .update_workflow(workflow_id, &name, &graph)
                    .await
                {
                    Ok(_) => SaveOutcome::Saved,
                    Err(error) => {
                        tracing::warn!(%error, workflow_id, "workflow save failed");
                        SaveOutcome::Failed
                    }
                }
            }
            None => {
                tracing::warn!("stack is local-only; edits are not persisted");
                SaveOutcome::LocalOnly
            }
        };

        if let Some(stack) = self.stacks.iter_mut().find(|s| s.id == id) {
            stack.definition = Some(graph);
        }
        outcome
    }
}

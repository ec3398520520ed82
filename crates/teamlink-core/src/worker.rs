//! Team member records.

use serde::{Deserialize, Serialize};

/// A worker registered as a member of a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerMember {
    /// Member name, unique within the team.
    pub name: String,

    /// Agent type, used as the member's role.
    pub agent_type: String,

    /// Model the agent runs on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Unix timestamp (milliseconds) when the member joined.
    #[serde(default)]
    pub joined_at: i64,

    /// Terminal pane hosting the worker process.
    #[serde(default, rename = "tmuxPaneId", skip_serializing_if = "Option::is_none")]
    pub pane_id: Option<String>,

    /// Working directory of the worker.
    pub cwd: String,

    /// Process backend (e.g., "tmux", "in-process").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_type: Option<String>,

    /// Message topics the member subscribes to.
    #[serde(default)]
    pub subscriptions: Vec<String>,
}

impl WorkerMember {
    /// Create a new WorkerMember joined now.
    pub fn new(
        name: impl Into<String>,
        agent_type: impl Into<String>,
        cwd: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            agent_type: agent_type.into(),
            model: None,
            joined_at: chrono::Utc::now().timestamp_millis(),
            pane_id: None,
            cwd: cwd.into(),
            backend_type: None,
            subscriptions: Vec::new(),
        }
    }

    /// Builder method to set the pane id.
    pub fn with_pane(mut self, pane_id: impl Into<String>) -> Self {
        self.pane_id = Some(pane_id.into());
        self
    }
}

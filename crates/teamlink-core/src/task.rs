//! Task file records.

use crate::{MetaValue, Metadata, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// A task file as stored by the team orchestrator.
///
/// `blocks` and `blocked_by` are independent lists. Nothing here keeps them
/// consistent with each other or with other tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTask {
    /// Task identifier.
    pub id: TaskId,

    /// Short imperative title.
    pub subject: String,

    /// Full task description.
    #[serde(default)]
    pub description: String,

    /// Current lifecycle status.
    #[serde(default)]
    pub status: TaskStatus,

    /// Worker that owns this task, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Tasks this task unblocks once completed.
    #[serde(default)]
    pub blocks: Vec<TaskId>,

    /// Tasks that must complete before this one can start.
    #[serde(default)]
    pub blocked_by: Vec<TaskId>,

    /// User-visible free-form metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Worker name holding the claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<String>,

    /// Unix timestamp (milliseconds) when the claim was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_at: Option<i64>,

    /// Process id of the claiming worker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_pid: Option<u32>,

    /// Present-continuous label shown while the task runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_form: Option<String>,
}

impl TeamTask {
    /// Create a new pending task with a generated id.
    pub fn new(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            subject: subject.into(),
            description: description.into(),
            status: TaskStatus::Pending,
            owner: None,
            blocks: Vec::new(),
            blocked_by: Vec::new(),
            metadata: None,
            claimed_by: None,
            claimed_at: None,
            claim_pid: None,
            active_form: None,
        }
    }

    /// Builder method to set a specific ID (useful for testing).
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Builder method to set the blocking tasks.
    pub fn with_blocked_by(mut self, ids: Vec<TaskId>) -> Self {
        self.blocked_by = ids;
        self
    }

    /// Builder method to set the tasks this one blocks.
    pub fn with_blocks(mut self, ids: Vec<TaskId>) -> Self {
        self.blocks = ids;
        self
    }

    /// Builder method to set the active form label.
    pub fn with_active_form(mut self, label: impl Into<String>) -> Self {
        self.active_form = Some(label.into());
        self
    }

    /// Builder method to add a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builder method to set the claim fields.
    pub fn with_claim(mut self, worker: impl Into<String>, claimed_at_ms: i64, pid: u32) -> Self {
        self.claimed_by = Some(worker.into());
        self.claimed_at = Some(claimed_at_ms);
        self.claim_pid = Some(pid);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_claim_sets_claim_fields_only() {
        let task = TeamTask::new("Fix build", "cargo fails on CI")
            .with_id("3")
            .with_claim("worker-1", 1_700_000_000_000, 4242);

        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.owner, None);
        assert_eq!(task.claimed_by.as_deref(), Some("worker-1"));
        assert_eq!(task.claimed_at, Some(1_700_000_000_000));
        assert_eq!(task.claim_pid, Some(4242));
    }

    #[test]
    fn test_camel_case_fields() {
        let task = TeamTask::new("a", "b")
            .with_id("1")
            .with_blocked_by(vec![TaskId::new("0")])
            .with_active_form("Doing a");
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["blockedBy"], serde_json::json!(["0"]));
        assert_eq!(json["activeForm"], "Doing a");
        assert!(json.get("owner").is_none());
        assert!(json.get("claimedBy").is_none());
    }

    #[test]
    fn test_minimal_task_file_deserializes() {
        let task: TeamTask =
            serde_json::from_str(r#"{"id":"9","subject":"Write docs"}"#).unwrap();

        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.blocks.is_empty());
        assert!(task.metadata.is_none());
    }
}

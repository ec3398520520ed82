//! Worker heartbeat records.

use crate::{TaskId, WorkerStatus};
use serde::{Deserialize, Serialize};

/// Heartbeat a worker writes on every poll cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heartbeat {
    /// Worker name within the team.
    pub worker_name: String,

    /// Team the worker belongs to.
    pub team_name: String,

    /// CLI provider driving the worker (e.g., "codex", "gemini").
    pub provider: String,

    /// Worker process id.
    pub pid: u32,

    /// RFC 3339 timestamp of the last poll.
    pub last_poll_at: String,

    /// Task currently being executed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_task_id: Option<TaskId>,

    /// Errors seen in a row since the last success.
    #[serde(default)]
    pub consecutive_errors: u32,

    /// Worker status.
    pub status: WorkerStatus,
}

impl Heartbeat {
    /// Create a ready heartbeat stamped with the current time.
    pub fn new(
        worker_name: impl Into<String>,
        team_name: impl Into<String>,
        provider: impl Into<String>,
        pid: u32,
    ) -> Self {
        Self {
            worker_name: worker_name.into(),
            team_name: team_name.into(),
            provider: provider.into(),
            pid,
            last_poll_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            current_task_id: None,
            consecutive_errors: 0,
            status: WorkerStatus::Ready,
        }
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: WorkerStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_fields() {
        let hb = Heartbeat::new("w1", "t1", "gemini", 100).with_status(WorkerStatus::Quarantined);
        let json = serde_json::to_value(&hb).unwrap();

        assert_eq!(json["workerName"], "w1");
        assert_eq!(json["status"], "quarantined");
        assert!(json["lastPollAt"].as_str().unwrap().ends_with('Z'));
    }
}

//! Status enums for task files and worker heartbeats.

use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a task file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task created but not yet claimed.
    #[default]
    Pending,
    /// Task claimed by a worker and being executed.
    InProgress,
    /// Task completed successfully.
    Completed,
    /// Task failed permanently.
    Failed,
}

impl TaskStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(CoreError::UnknownStatus {
                kind: "task",
                value: other.to_string(),
            }),
        }
    }
}

/// Status reported in a worker heartbeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    /// Worker started and is waiting for work.
    #[default]
    Ready,
    /// Worker is polling for a claimable task.
    Polling,
    /// Worker is executing a task.
    Executing,
    /// Worker has shut down.
    Shutdown,
    /// Worker was taken out of rotation after repeated errors.
    Quarantined,
}

impl WorkerStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Polling => "polling",
            Self::Executing => "executing",
            Self::Shutdown => "shutdown",
            Self::Quarantined => "quarantined",
        }
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkerStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ready" => Ok(Self::Ready),
            "polling" => Ok(Self::Polling),
            "executing" => Ok(Self::Executing),
            "shutdown" => Ok(Self::Shutdown),
            "quarantined" => Ok(Self::Quarantined),
            other => Err(CoreError::UnknownStatus {
                kind: "worker",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_status_parse_matches_display() {
        let statuses = [
            WorkerStatus::Ready,
            WorkerStatus::Polling,
            WorkerStatus::Executing,
            WorkerStatus::Shutdown,
            WorkerStatus::Quarantined,
        ];

        for status in statuses {
            let parsed: WorkerStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "sleeping".parse::<WorkerStatus>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownStatus {
                kind: "worker",
                value: "sleeping".to_string()
            }
        );
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_task_status_serde_names() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        assert_eq!("in_progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
    }
}

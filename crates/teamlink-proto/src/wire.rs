//! Wire types of the agent-mail transport.
//!
//! Field names follow the transport's snake_case JSON encoding.

use serde::{Deserialize, Deserializer, Serialize};
use teamlink_core::Metadata;

/// Task status on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// A task as exchanged over agent-mail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Ids of tasks this one depends on. Absent means no dependencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(default)]
    pub version: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub metadata: Metadata,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Coarse message classification on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Status,
    Result,
    Chat,
    Instruction,
}

/// A message as exchanged over agent-mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// Opaque payload, JSON-encoded by the sender.
    pub body: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Worker status on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    #[default]
    Ready,
    Polling,
    Executing,
    Shutdown,
}

/// A worker heartbeat as exchanged over agent-mail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heartbeat {
    pub pid: u32,
    /// RFC 3339 timestamp of the last activity.
    pub last_active: String,
    pub status: WorkerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_task_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub metadata: Metadata,
}

/// A worker entry in the transport's team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerInfo {
    pub name: String,
    pub index: u32,
    pub role: String,
    #[serde(default)]
    pub assigned_tasks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pane_id: Option<String>,
}

/// Accept an explicit `null` metadata map as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Metadata, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Metadata>::deserialize(deserializer)?.unwrap_or_default())
}

//! Worker outbox and inbox message types.

use crate::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of message a worker writes to its outbox.
///
/// Unrecognised kinds are preserved verbatim in [`MessageKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageKind {
    /// Worker finished starting up.
    Ready,
    /// Worker has nothing to do.
    Idle,
    /// Periodic liveness signal.
    Heartbeat,
    /// Acknowledges a shutdown request.
    ShutdownAck,
    /// Acknowledges a drain request.
    DrainAck,
    /// A task finished successfully.
    TaskComplete,
    /// A task finished with an error.
    TaskFailed,
    /// Worker-level error not tied to a task.
    Error,
    /// Any other kind.
    Other(String),
}

impl MessageKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ready => "ready",
            Self::Idle => "idle",
            Self::Heartbeat => "heartbeat",
            Self::ShutdownAck => "shutdown_ack",
            Self::DrainAck => "drain_ack",
            Self::TaskComplete => "task_complete",
            Self::TaskFailed => "task_failed",
            Self::Error => "error",
            Self::Other(kind) => kind,
        }
    }
}

impl From<String> for MessageKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ready" => Self::Ready,
            "idle" => Self::Idle,
            "heartbeat" => Self::Heartbeat,
            "shutdown_ack" => Self::ShutdownAck,
            "drain_ack" => Self::DrainAck,
            "task_complete" => Self::TaskComplete,
            "task_failed" => Self::TaskFailed,
            "error" => Self::Error,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for MessageKind {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<MessageKind> for String {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message a worker writes to its outbox for the team lead.
///
/// There is no sender field: the outbox belongs to exactly one worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    /// Message kind.
    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Task the message refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,

    /// Short result summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Id of the lead request this message answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Unix timestamp (milliseconds) when the message was written.
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
}

impl OutboundMessage {
    /// Create a new message stamped with the current time.
    pub fn new(kind: impl Into<MessageKind>) -> Self {
        Self {
            kind: kind.into(),
            task_id: None,
            summary: None,
            message: None,
            error: None,
            request_id: None,
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Create a task_complete message.
    pub fn task_complete(task_id: impl Into<TaskId>, summary: impl Into<String>) -> Self {
        let mut msg = Self::new(MessageKind::TaskComplete);
        msg.task_id = Some(task_id.into());
        msg.summary = Some(summary.into());
        msg
    }

    /// Create a task_failed message.
    pub fn task_failed(task_id: impl Into<TaskId>, error: impl Into<String>) -> Self {
        let mut msg = Self::new(MessageKind::TaskFailed);
        msg.task_id = Some(task_id.into());
        msg.error = Some(error.into());
        msg
    }

    /// Create an acknowledgement for a lead request.
    pub fn ack(kind: MessageKind, request_id: impl Into<String>) -> Self {
        let mut msg = Self::new(kind);
        msg.request_id = Some(request_id.into());
        msg
    }

    /// Builder method to set the free text.
    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        self.message = Some(text.into());
        self
    }

    /// Builder method to set a specific timestamp (useful for testing).
    pub fn with_timestamp_ms(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }
}

/// Kind of message delivered to a worker's inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InboundKind {
    /// A direct instruction to act on.
    Message,
    /// Background information.
    Context,
}

/// A message delivered to a worker's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Message kind.
    #[serde(rename = "type")]
    pub kind: InboundKind,

    /// Message body.
    pub content: String,

    /// When the message was sent, as written by the sender.
    pub timestamp: String,
}

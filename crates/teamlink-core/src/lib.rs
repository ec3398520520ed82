//! TeamLink Core Domain Types
//!
//! This crate contains the internal team orchestration schema:
//! - Task files with dependency and claim bookkeeping
//! - Worker outbox/inbox messages
//! - Worker heartbeats and team member records
//!
//! Nothing here performs I/O. Records are plain data owned by the caller.

pub mod error;
pub mod heartbeat;
pub mod ids;
pub mod message;
pub mod metadata;
pub mod status;
pub mod task;
pub mod worker;

// Re-export commonly used types
pub use error::CoreError;
pub use heartbeat::Heartbeat;
pub use ids::TaskId;
pub use message::{InboundKind, InboundMessage, MessageKind, OutboundMessage};
pub use metadata::{MetaValue, Metadata};
pub use status::{TaskStatus, WorkerStatus};
pub use task::TeamTask;
pub use worker::WorkerMember;

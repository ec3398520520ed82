//! Agent-mail wire schema and converters for TeamLink.
//!
//! This crate contains:
//! - Wire types of the agent-mail transport
//! - Converters between wire types and the internal team schema
//! - Reserved metadata keys shared by both directions of conversion
//! - The state directory layout helper

pub mod convert;
pub mod paths;
pub mod reserved;
pub mod wire;

// Re-export commonly used items
pub use convert::{
    coarse_type, from_heartbeat, from_message, from_task, to_heartbeat, to_message, to_task,
    to_worker_info,
};
pub use paths::resolve_state_root;

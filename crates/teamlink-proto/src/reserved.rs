//! Reserved metadata keys.
//!
//! Fields with no direct counterpart in the wire schema travel inside the
//! wire record's metadata under these keys. A user metadata entry with the
//! same name is overwritten on the way out and dropped on the way back in.

/// Tasks unblocked by this task (list of task ids).
pub const BLOCKS: &str = "blocks";
/// Active form label (string).
pub const ACTIVE_FORM: &str = "activeForm";
/// Claiming worker name (string).
pub const CLAIMED_BY: &str = "claimedBy";
/// Claim time in Unix milliseconds (integer).
pub const CLAIMED_AT: &str = "claimedAt";
/// Claiming process id (integer).
pub const CLAIM_PID: &str = "claimPid";

/// Keys owned by the task converters.
pub const TASK_RESERVED_KEYS: [&str; 5] = [BLOCKS, ACTIVE_FORM, CLAIMED_BY, CLAIMED_AT, CLAIM_PID];

/// Worker name (string).
pub const WORKER_NAME: &str = "workerName";
/// Team name (string).
pub const TEAM_NAME: &str = "teamName";
/// Worker provider (string).
pub const PROVIDER: &str = "provider";
/// Consecutive error count (integer).
pub const CONSECUTIVE_ERRORS: &str = "consecutiveErrors";
/// Internal worker status, including values the wire cannot express (string).
pub const OMC_STATUS: &str = "omcStatus";

/// Keys owned by the heartbeat converters.
pub const HEARTBEAT_RESERVED_KEYS: [&str; 5] =
    [WORKER_NAME, TEAM_NAME, PROVIDER, CONSECUTIVE_ERRORS, OMC_STATUS];

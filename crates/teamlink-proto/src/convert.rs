//! Converters between wire types and internal team types.
//!
//! Every converter is a pure function of its arguments, apart from the
//! current time in [`to_task`] and the random id suffix in [`to_message`].
//! Malformed input is converted best-effort: fields of the wrong shape fall
//! back to their defaults instead of failing.

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde_json::{Map, Value};
use teamlink_core::{
    Heartbeat, InboundKind, InboundMessage, MessageKind, MetaValue, Metadata, OutboundMessage,
    TaskId, TaskStatus, TeamTask, WorkerMember, WorkerStatus,
};
use tracing::debug;

use crate::reserved;
use crate::wire;

/// Schema version stamped on every outgoing task.
pub const TASK_SCHEMA_VERSION: u32 = 1;

/// Recipient of every outgoing worker message.
pub const LEAD_RECIPIENT: &str = "lead";

/// Provider assumed when a heartbeat does not name one.
pub const DEFAULT_PROVIDER: &str = "codex";

const MESSAGE_ID_SUFFIX_LEN: usize = 6;
const MESSAGE_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// ============================================================================
// TaskStatus conversions
// ============================================================================

impl From<TaskStatus> for wire::TaskStatus {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => wire::TaskStatus::Pending,
            TaskStatus::InProgress => wire::TaskStatus::InProgress,
            TaskStatus::Completed => wire::TaskStatus::Completed,
            TaskStatus::Failed => wire::TaskStatus::Failed,
        }
    }
}

impl From<wire::TaskStatus> for TaskStatus {
    fn from(status: wire::TaskStatus) -> Self {
        match status {
            wire::TaskStatus::Pending => TaskStatus::Pending,
            wire::TaskStatus::InProgress => TaskStatus::InProgress,
            wire::TaskStatus::Completed => TaskStatus::Completed,
            wire::TaskStatus::Failed => TaskStatus::Failed,
        }
    }
}

// ============================================================================
// WorkerStatus conversions
// ============================================================================

impl From<WorkerStatus> for wire::WorkerStatus {
    fn from(status: WorkerStatus) -> Self {
        match status {
            WorkerStatus::Ready => wire::WorkerStatus::Ready,
            WorkerStatus::Polling => wire::WorkerStatus::Polling,
            WorkerStatus::Executing => wire::WorkerStatus::Executing,
            WorkerStatus::Shutdown => wire::WorkerStatus::Shutdown,
            // The wire has no quarantine state.
            WorkerStatus::Quarantined => wire::WorkerStatus::Shutdown,
        }
    }
}

impl From<wire::WorkerStatus> for WorkerStatus {
    fn from(status: wire::WorkerStatus) -> Self {
        match status {
            wire::WorkerStatus::Ready => WorkerStatus::Ready,
            wire::WorkerStatus::Polling => WorkerStatus::Polling,
            wire::WorkerStatus::Executing => WorkerStatus::Executing,
            wire::WorkerStatus::Shutdown => WorkerStatus::Shutdown,
        }
    }
}

// ============================================================================
// Task conversions
// ============================================================================

/// Convert a task file into a wire task.
///
/// `blocks`, `active_form` and the claim fields are stored in metadata under
/// the reserved task keys. `created_at` is always the current time.
pub fn to_task(task: &TeamTask) -> wire::TaskItem {
    let mut metadata = task.metadata.clone().unwrap_or_default();
    for key in reserved::TASK_RESERVED_KEYS {
        metadata.remove(key);
    }

    metadata.insert(
        reserved::BLOCKS.to_string(),
        MetaValue::List(task.blocks.iter().map(|id| id.as_str().to_owned()).collect()),
    );
    if let Some(active_form) = &task.active_form {
        metadata.insert(reserved::ACTIVE_FORM.to_string(), active_form.as_str().into());
    }
    if let Some(claimed_by) = &task.claimed_by {
        metadata.insert(reserved::CLAIMED_BY.to_string(), claimed_by.as_str().into());
    }
    if let Some(claimed_at) = task.claimed_at {
        metadata.insert(reserved::CLAIMED_AT.to_string(), claimed_at.into());
    }
    if let Some(pid) = task.claim_pid {
        metadata.insert(reserved::CLAIM_PID.to_string(), pid.into());
    }

    let depends_on = if task.blocked_by.is_empty() {
        None
    } else {
        Some(
            task.blocked_by
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
        )
    };

    wire::TaskItem {
        id: task.id.as_str().to_owned(),
        subject: task.subject.clone(),
        description: task.description.clone(),
        status: task.status.into(),
        owner: task.owner.clone().filter(|owner| !owner.is_empty()),
        depends_on,
        version: TASK_SCHEMA_VERSION,
        metadata,
        created_at: now_rfc3339(),
    }
}

/// Convert a wire task back into a task file.
///
/// Reserved keys are lifted out of metadata; every other entry stays in the
/// task's user metadata. A missing owner becomes an empty string.
pub fn from_task(item: &wire::TaskItem) -> TeamTask {
    let meta = &item.metadata;

    let blocks = match meta.get(reserved::BLOCKS) {
        Some(value) => match value.as_string_list() {
            Some(ids) => ids.iter().map(|id| TaskId::new(id.as_str())).collect(),
            None => {
                debug!(task_id = %item.id, "Ignoring non-list blocks metadata");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let user_metadata: Metadata = meta
        .iter()
        .filter(|(key, _)| !reserved::TASK_RESERVED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    TeamTask {
        id: TaskId::new(item.id.as_str()),
        subject: item.subject.clone(),
        description: item.description.clone(),
        status: item.status.into(),
        owner: Some(item.owner.clone().unwrap_or_default()),
        blocks,
        blocked_by: item
            .depends_on
            .iter()
            .flatten()
            .map(|id| TaskId::new(id.as_str()))
            .collect(),
        metadata: (!user_metadata.is_empty()).then_some(user_metadata),
        claimed_by: meta_str(meta, reserved::CLAIMED_BY),
        claimed_at: meta.get(reserved::CLAIMED_AT).and_then(MetaValue::as_i64),
        claim_pid: meta
            .get(reserved::CLAIM_PID)
            .and_then(MetaValue::as_i64)
            .and_then(|pid| u32::try_from(pid).ok()),
        active_form: meta_str(meta, reserved::ACTIVE_FORM),
    }
}

// ============================================================================
// Message conversions
// ============================================================================

/// Coarse wire classification of an outbox message kind.
pub fn coarse_type(kind: &MessageKind) -> wire::MessageType {
    match kind {
        MessageKind::Ready
        | MessageKind::Idle
        | MessageKind::Heartbeat
        | MessageKind::ShutdownAck
        | MessageKind::DrainAck
        | MessageKind::Error => wire::MessageType::Status,
        MessageKind::TaskComplete | MessageKind::TaskFailed => wire::MessageType::Result,
        MessageKind::Other(_) => wire::MessageType::Chat,
    }
}

/// Convert an outbox message into a wire message from `sender` to the lead.
///
/// The message id is `<sender>-<timestamp_ms>-<random suffix>`. It is unique
/// on a best-effort basis only.
pub fn to_message(msg: &OutboundMessage, sender: &str) -> wire::Message {
    let mut body = Map::new();
    body.insert("type".to_string(), Value::from(msg.kind.as_str()));
    let fields = [
        ("taskId", msg.task_id.as_ref().map(TaskId::as_str)),
        ("summary", msg.summary.as_deref()),
        ("message", msg.message.as_deref()),
        ("error", msg.error.as_deref()),
        ("requestId", msg.request_id.as_deref()),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            body.insert(key.to_string(), Value::from(value));
        }
    }

    let created_at = DateTime::<Utc>::from_timestamp_millis(msg.timestamp_ms)
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    wire::Message {
        id: format!("{}-{}-{}", sender, msg.timestamp_ms, random_suffix()),
        from: sender.to_string(),
        to: LEAD_RECIPIENT.to_string(),
        kind: coarse_type(&msg.kind),
        body: Value::Object(body).to_string(),
        created_at,
    }
}

/// Convert a wire message into an inbox message.
///
/// Only instructions become [`InboundKind::Message`]; everything else is
/// context. Sender, recipient and id are dropped.
pub fn from_message(msg: &wire::Message) -> InboundMessage {
    let kind = match msg.kind {
        wire::MessageType::Instruction => InboundKind::Message,
        wire::MessageType::Status | wire::MessageType::Result | wire::MessageType::Chat => {
            InboundKind::Context
        }
    };

    InboundMessage {
        kind,
        content: msg.body.clone(),
        timestamp: msg.created_at.clone(),
    }
}

// ============================================================================
// Heartbeat conversions
// ============================================================================

/// Convert a worker heartbeat into a wire heartbeat.
///
/// The internal status is always kept in metadata so a quarantined worker,
/// reported as shut down on the wire, can be restored by [`from_heartbeat`].
pub fn to_heartbeat(hb: &Heartbeat) -> wire::Heartbeat {
    if hb.status == WorkerStatus::Quarantined {
        debug!(worker = %hb.worker_name, "Reporting quarantined worker as shutdown");
    }

    let mut metadata = Metadata::new();
    metadata.insert(reserved::WORKER_NAME.to_string(), hb.worker_name.as_str().into());
    metadata.insert(reserved::TEAM_NAME.to_string(), hb.team_name.as_str().into());
    metadata.insert(reserved::PROVIDER.to_string(), hb.provider.as_str().into());
    metadata.insert(
        reserved::CONSECUTIVE_ERRORS.to_string(),
        hb.consecutive_errors.into(),
    );
    metadata.insert(reserved::OMC_STATUS.to_string(), hb.status.as_str().into());

    wire::Heartbeat {
        pid: hb.pid,
        last_active: hb.last_poll_at.clone(),
        status: hb.status.into(),
        current_task_id: hb.current_task_id.as_ref().map(|id| id.as_str().to_owned()),
        metadata,
    }
}

/// Convert a wire heartbeat into a worker heartbeat.
///
/// Wire heartbeats carry no identity, so `fallback_worker` and
/// `fallback_team` are used when metadata does not name them.
pub fn from_heartbeat(
    hb: &wire::Heartbeat,
    fallback_worker: &str,
    fallback_team: &str,
) -> Heartbeat {
    let meta = &hb.metadata;

    let status: WorkerStatus = match meta.get(reserved::OMC_STATUS).and_then(MetaValue::as_str) {
        Some(raw) => raw.parse::<WorkerStatus>().unwrap_or_else(|err| {
            debug!(error = %err, "Falling back to wire status");
            hb.status.into()
        }),
        None => hb.status.into(),
    };

    Heartbeat {
        worker_name: meta_str(meta, reserved::WORKER_NAME)
            .unwrap_or_else(|| fallback_worker.to_string()),
        team_name: meta_str(meta, reserved::TEAM_NAME)
            .unwrap_or_else(|| fallback_team.to_string()),
        provider: meta_str(meta, reserved::PROVIDER)
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
        pid: hb.pid,
        last_poll_at: hb.last_active.clone(),
        current_task_id: hb.current_task_id.as_deref().map(TaskId::new),
        consecutive_errors: meta
            .get(reserved::CONSECUTIVE_ERRORS)
            .and_then(MetaValue::as_i64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        status,
    }
}

// ============================================================================
// WorkerInfo conversions
// ============================================================================

/// Convert a team member into a wire roster entry.
///
/// The member record has no roster index or task assignments: `index` is
/// always 0 and `assigned_tasks` is always empty. Callers fill both in.
pub fn to_worker_info(member: &WorkerMember) -> wire::WorkerInfo {
    wire::WorkerInfo {
        name: member.name.clone(),
        index: 0,
        role: member.agent_type.clone(),
        assigned_tasks: Vec::new(),
        pane_id: member.pane_id.clone(),
    }
}

fn meta_str(meta: &Metadata, key: &str) -> Option<String> {
    meta.get(key).and_then(MetaValue::as_str).map(str::to_owned)
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..MESSAGE_ID_SUFFIX_LEN)
        .map(|_| MESSAGE_ID_ALPHABET[rng.gen_range(0..MESSAGE_ID_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> TeamTask {
        TeamTask::new("Port parser", "Rewrite the config parser")
            .with_id("12")
            .with_status(TaskStatus::InProgress)
            .with_owner("worker-1")
            .with_blocks(vec![TaskId::new("13"), TaskId::new("14")])
            .with_blocked_by(vec![TaskId::new("11")])
            .with_active_form("Porting parser")
            .with_metadata("priority", "high")
    }

    fn sample_heartbeat(status: WorkerStatus) -> Heartbeat {
        let mut hb = Heartbeat::new("worker-2", "alpha", "gemini", 5150).with_status(status);
        hb.current_task_id = Some(TaskId::new("7"));
        hb.consecutive_errors = 3;
        hb
    }

    #[test]
    fn test_task_status_roundtrip() {
        let statuses = [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Failed,
        ];

        for status in statuses {
            let wire_status: wire::TaskStatus = status.into();
            let back: TaskStatus = wire_status.into();
            assert_eq!(status, back);
        }
    }

    #[test]
    fn test_to_task_omits_empty_dependencies() {
        let task = TeamTask::new("Solo", "No deps").with_id("1");
        let item = to_task(&task);

        assert_eq!(item.depends_on, None);
        assert_eq!(item.owner, None);
        assert_eq!(item.metadata[reserved::BLOCKS], MetaValue::List(Vec::new()));

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("depends_on").is_none());
    }

    #[test]
    fn test_to_task_packs_internal_fields() {
        let task = sample_task().with_claim("worker-1", 1_700_000_000_000, 777);
        let item = to_task(&task);

        assert_eq!(item.id, "12");
        assert_eq!(item.version, TASK_SCHEMA_VERSION);
        assert_eq!(item.depends_on, Some(vec!["11".to_string()]));
        assert_eq!(item.owner.as_deref(), Some("worker-1"));
        assert_eq!(
            item.metadata[reserved::BLOCKS].as_string_list(),
            Some(&["13".to_string(), "14".to_string()][..])
        );
        assert_eq!(item.metadata[reserved::ACTIVE_FORM].as_str(), Some("Porting parser"));
        assert_eq!(item.metadata[reserved::CLAIMED_BY].as_str(), Some("worker-1"));
        assert_eq!(
            item.metadata[reserved::CLAIMED_AT].as_i64(),
            Some(1_700_000_000_000)
        );
        assert_eq!(item.metadata[reserved::CLAIM_PID].as_i64(), Some(777));
        assert_eq!(item.metadata["priority"].as_str(), Some("high"));
        assert!(DateTime::parse_from_rfc3339(&item.created_at).is_ok());
    }

    #[test]
    fn test_to_task_reserved_keys_override_user_metadata() {
        let task = TeamTask::new("a", "b")
            .with_id("1")
            .with_metadata(reserved::BLOCKS, "user value")
            .with_metadata(reserved::ACTIVE_FORM, "stale label");
        let item = to_task(&task);

        assert_eq!(item.metadata[reserved::BLOCKS], MetaValue::List(Vec::new()));
        assert!(!item.metadata.contains_key(reserved::ACTIVE_FORM));
    }

    #[test]
    fn test_task_roundtrip_restores_internal_fields() {
        let task = sample_task().with_claim("worker-1", 1_700_000_000_000, 777);

        let back = from_task(&to_task(&task));

        assert_eq!(back.id, task.id);
        assert_eq!(back.status, task.status);
        assert_eq!(back.owner, task.owner);
        assert_eq!(back.blocks, task.blocks);
        assert_eq!(back.blocked_by, task.blocked_by);
        assert_eq!(back.active_form, task.active_form);
        assert_eq!(back.claimed_by, task.claimed_by);
        assert_eq!(back.claimed_at, task.claimed_at);
        assert_eq!(back.claim_pid, task.claim_pid);
        assert_eq!(back.metadata, task.metadata);
    }

    #[test]
    fn test_from_task_defaults() {
        let item = wire::TaskItem {
            id: "5".to_string(),
            subject: "External".to_string(),
            description: String::new(),
            status: wire::TaskStatus::Pending,
            owner: None,
            depends_on: None,
            version: 1,
            metadata: Metadata::from([(reserved::BLOCKS.to_string(), MetaValue::from("oops"))]),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let task = from_task(&item);

        assert_eq!(task.owner.as_deref(), Some(""));
        assert!(task.blocks.is_empty());
        assert!(task.blocked_by.is_empty());
        assert_eq!(task.metadata, None);
        assert_eq!(task.active_form, None);
        assert_eq!(task.claimed_by, None);
        assert_eq!(task.claim_pid, None);
    }

    #[test]
    fn test_from_task_drops_out_of_shape_claim_and_blocks() {
        let item: wire::TaskItem = serde_json::from_value(serde_json::json!({
            "id": "6",
            "subject": "Foreign",
            "metadata": {
                "blocks": [1, "a"],
                "claimedAt": 1e300,
                "claimPid": 1e300,
                "claimedBy": 42
            },
            "created_at": "2024-01-01T00:00:00.000Z"
        }))
        .unwrap();
        let task = from_task(&item);

        assert!(task.blocks.is_empty());
        assert_eq!(task.claimed_at, None);
        assert_eq!(task.claim_pid, None);
        assert_eq!(task.claimed_by, None);
        assert_eq!(task.metadata, None);
    }

    #[test]
    fn test_owner_roundtrip_is_not_identity_when_unset() {
        let task = TeamTask::new("a", "b").with_id("1");
        let back = from_task(&to_task(&task));

        assert_eq!(task.owner, None);
        assert_eq!(back.owner.as_deref(), Some(""));
    }

    #[test]
    fn test_coarse_type_classification() {
        for kind in ["ready", "idle", "heartbeat", "shutdown_ack", "drain_ack", "error"] {
            assert_eq!(coarse_type(&MessageKind::from(kind)), wire::MessageType::Status, "{kind}");
        }
        for kind in ["task_complete", "task_failed"] {
            assert_eq!(coarse_type(&MessageKind::from(kind)), wire::MessageType::Result, "{kind}");
        }
        for kind in ["progress", "question", ""] {
            assert_eq!(coarse_type(&MessageKind::from(kind)), wire::MessageType::Chat, "{kind}");
        }
    }

    #[test]
    fn test_to_message() {
        let msg = OutboundMessage::task_complete("9", "All tests pass")
            .with_timestamp_ms(1_700_000_000_123);
        let wire_msg = to_message(&msg, "worker-3");

        assert_eq!(wire_msg.from, "worker-3");
        assert_eq!(wire_msg.to, LEAD_RECIPIENT);
        assert_eq!(wire_msg.kind, wire::MessageType::Result);
        assert_eq!(wire_msg.created_at, "2023-11-14T22:13:20.123Z");

        let prefix = "worker-3-1700000000123-";
        assert!(wire_msg.id.starts_with(prefix));
        let suffix = &wire_msg.id[prefix.len()..];
        assert_eq!(suffix.len(), MESSAGE_ID_SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| MESSAGE_ID_ALPHABET.contains(&b)));

        let body: Value = serde_json::from_str(&wire_msg.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "type": "task_complete",
                "taskId": "9",
                "summary": "All tests pass",
            })
        );
    }

    #[test]
    fn test_to_message_recipient_is_always_lead() {
        let kinds = [
            MessageKind::Ready,
            MessageKind::Error,
            MessageKind::Other("lead".to_string()),
        ];

        for kind in kinds {
            let msg = OutboundMessage::ack(kind, "req-1").with_message("hi");
            let wire_msg = to_message(&msg, "lead");
            assert_eq!(wire_msg.to, "lead");
            let body: Value = serde_json::from_str(&wire_msg.body).unwrap();
            assert_eq!(body["requestId"], "req-1");
            assert_eq!(body["message"], "hi");
        }
    }

    #[test]
    fn test_from_message_classification() {
        let make = |kind| wire::Message {
            id: "m1".to_string(),
            from: "lead".to_string(),
            to: "worker-1".to_string(),
            kind,
            body: "{\"text\":\"go\"}".to_string(),
            created_at: "2024-05-01T10:00:00.000Z".to_string(),
        };

        let inbound = from_message(&make(wire::MessageType::Instruction));
        assert_eq!(inbound.kind, InboundKind::Message);
        assert_eq!(inbound.content, "{\"text\":\"go\"}");
        assert_eq!(inbound.timestamp, "2024-05-01T10:00:00.000Z");

        for kind in [
            wire::MessageType::Status,
            wire::MessageType::Result,
            wire::MessageType::Chat,
        ] {
            assert_eq!(from_message(&make(kind)).kind, InboundKind::Context);
        }
    }

    #[test]
    fn test_to_heartbeat_quarantined() {
        let wire_hb = to_heartbeat(&sample_heartbeat(WorkerStatus::Quarantined));

        assert_eq!(wire_hb.status, wire::WorkerStatus::Shutdown);
        assert_eq!(wire_hb.metadata[reserved::OMC_STATUS].as_str(), Some("quarantined"));
        assert_eq!(wire_hb.metadata[reserved::WORKER_NAME].as_str(), Some("worker-2"));
        assert_eq!(wire_hb.metadata[reserved::TEAM_NAME].as_str(), Some("alpha"));
        assert_eq!(wire_hb.metadata[reserved::PROVIDER].as_str(), Some("gemini"));
        assert_eq!(wire_hb.metadata[reserved::CONSECUTIVE_ERRORS].as_i64(), Some(3));
        assert_eq!(wire_hb.metadata.len(), reserved::HEARTBEAT_RESERVED_KEYS.len());
        for key in reserved::HEARTBEAT_RESERVED_KEYS {
            assert!(wire_hb.metadata.contains_key(key), "{key}");
        }
        assert_eq!(wire_hb.pid, 5150);
        assert_eq!(wire_hb.current_task_id.as_deref(), Some("7"));
    }

    #[test]
    fn test_heartbeat_roundtrip_restores_status() {
        let statuses = [
            WorkerStatus::Ready,
            WorkerStatus::Polling,
            WorkerStatus::Executing,
            WorkerStatus::Shutdown,
            WorkerStatus::Quarantined,
        ];

        for status in statuses {
            let hb = sample_heartbeat(status);
            let back = from_heartbeat(&to_heartbeat(&hb), "ignored", "ignored");
            assert_eq!(back, hb);
        }
    }

    #[test]
    fn test_from_heartbeat_fallbacks() {
        let wire_hb = wire::Heartbeat {
            pid: 42,
            last_active: "2024-05-01T10:00:00.000Z".to_string(),
            status: wire::WorkerStatus::Polling,
            current_task_id: None,
            metadata: Metadata::new(),
        };
        let hb = from_heartbeat(&wire_hb, "w1", "t1");

        assert_eq!(hb.worker_name, "w1");
        assert_eq!(hb.team_name, "t1");
        assert_eq!(hb.provider, DEFAULT_PROVIDER);
        assert_eq!(hb.consecutive_errors, 0);
        assert_eq!(hb.status, WorkerStatus::Polling);
        assert_eq!(hb.last_poll_at, "2024-05-01T10:00:00.000Z");
    }

    #[test]
    fn test_from_heartbeat_ignores_unknown_internal_status() {
        let wire_hb = wire::Heartbeat {
            pid: 42,
            last_active: String::new(),
            status: wire::WorkerStatus::Executing,
            current_task_id: None,
            metadata: Metadata::from([(reserved::OMC_STATUS.to_string(), MetaValue::from("zombie"))]),
        };

        assert_eq!(
            from_heartbeat(&wire_hb, "w", "t").status,
            WorkerStatus::Executing
        );
    }

    #[test]
    fn test_to_worker_info() {
        let member = WorkerMember::new("worker-4", "gemini", "/repo").with_pane("%7");
        let info = to_worker_info(&member);

        assert_eq!(info.name, "worker-4");
        assert_eq!(info.role, "gemini");
        assert_eq!(info.index, 0);
        assert!(info.assigned_tasks.is_empty());
        assert_eq!(info.pane_id.as_deref(), Some("%7"));
    }
}

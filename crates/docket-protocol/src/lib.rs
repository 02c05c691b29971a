//! Event types shared between the docket core and its front-end shells.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a workbench session.
pub type SessionId = Uuid;
/// Unique identifier for a chat message.
pub type MessageId = Uuid;

/// Wrapper for events emitted by the workbench core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventMsg {
    /// Unique id for the event.
    pub id: Uuid,
    /// Session id associated with the event.
    pub session_id: SessionId,
    /// Timestamp when the event was created.
    pub created_at: DateTime<Utc>,
    /// Event payload content.
    pub payload: EventPayload,
}

impl EventMsg {
    /// Build an event for a session with a fresh id and timestamp.
    pub fn new(session_id: SessionId, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id,
            created_at: Utc::now(),
            payload,
        }
    }
}

/// All events emitted during workbench operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type", content = "payload")]
pub enum EventPayload {
    /// Assistant reply reveal started.
    ReplyStarted { generation: u64 },
    /// Partial reply content after a reveal tick.
    ReplyProgress { generation: u64, content: String },
    /// Reply reveal finished and the message was finalized.
    ReplyCompleted {
        generation: u64,
        message_id: MessageId,
        content: String,
    },
    /// Reply reveal discarded before completion.
    ReplyCancelled { generation: u64 },
    /// Simulated upload progress stage.
    UploadProgress { file_name: String, percent: u8 },
    /// Simulated upload finished and produced a document record.
    UploadCompleted {
        document_id: String,
        file_name: String,
    },
    /// Simulated download started.
    DownloadStarted { document_id: String },
    /// Simulated download finished.
    DownloadCompleted { document_id: String },
}

/// Sink for events emitted by the core.
pub trait EventSink: Send + Sync {
    /// Emit an event to downstream listeners.
    fn emit(&self, event: EventMsg);
}

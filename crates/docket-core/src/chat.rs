//! Conversation session with a time-paced assistant reply reveal.
//!
//! The reveal advances the visible content of a single in-progress assistant
//! message by one character per tick. Ticks run on a spawned tokio task;
//! cancellation is cooperative through a generation counter so a stale tick
//! from a superseded reveal can never mutate the current transcript.

use crate::error::DocketCoreError;
use crate::types::{Message, Role};
use docket_config::ChatConfig;
use docket_protocol::{EventMsg, EventPayload, EventSink, MessageId, SessionId};
use futures_util::Stream;
use log::{debug, info};
use parking_lot::RwLock;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::UnboundedReceiverStream;
use uuid::Uuid;

/// Boxed stream of partial reply snapshots, one per reveal tick.
pub type RevealStream = Pin<Box<dyn Stream<Item = String> + Send>>;

/// Mutable transcript state shared with the reveal task.
struct SessionState {
    messages: Vec<Message>,
    generation: u64,
    replying: bool,
}

/// Conversation session holding the ordered transcript.
#[derive(Clone)]
pub struct ChatSession {
    id: SessionId,
    state: Arc<RwLock<SessionState>>,
    tick: Duration,
    events: Option<Arc<dyn EventSink>>,
}

/// Handle to a running reveal task.
pub struct RevealHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl RevealHandle {
    /// Generation counter assigned to this reveal.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait for the reveal task to finish or be superseded.
    pub async fn wait(self) {
        let _ = self.task.await;
    }
}

impl ChatSession {
    /// Create a session, seeding the greeting when configured.
    pub fn new(config: &ChatConfig, events: Option<Arc<dyn EventSink>>) -> Self {
        let id = Uuid::new_v4();
        let mut messages = Vec::new();
        if let Some(greeting) = &config.greeting {
            messages.push(Message::new(Role::Assistant, greeting.clone()));
        }
        info!(
            "created chat session (session_id={}, tick_ms={})",
            id, config.tick_ms
        );
        Self {
            id,
            state: Arc::new(RwLock::new(SessionState {
                messages,
                generation: 0,
                replying: false,
            })),
            tick: Duration::from_millis(config.tick_ms),
            events,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Snapshot of the transcript in display order.
    pub fn messages(&self) -> Vec<Message> {
        self.state.read().messages.clone()
    }

    /// Whether a reveal is currently active. Callers must not accept new
    /// user input while this returns true.
    pub fn is_replying(&self) -> bool {
        self.state.read().replying
    }

    /// Append a user-authored message and return its identifier.
    pub fn append_user_message(&self, text: &str) -> Result<MessageId, DocketCoreError> {
        if text.trim().is_empty() {
            return Err(DocketCoreError::EmptyInput);
        }
        let message = Message::new(Role::User, text);
        let message_id = message.id;
        debug!(
            "appending user message (session_id={}, content_len={})",
            self.id,
            text.len()
        );
        self.state.write().messages.push(message);
        Ok(message_id)
    }

    /// Begin an incremental reveal of `full_text` into one assistant message.
    ///
    /// Any reveal already in flight is discarded, partial content included.
    /// Must be called within a tokio runtime.
    pub fn start_assistant_reply(&self, full_text: impl Into<String>) -> RevealHandle {
        self.start_reveal(full_text.into(), None)
    }

    /// Like [`ChatSession::start_assistant_reply`], additionally yielding
    /// each partial snapshot on a stream that ends when the reveal
    /// completes or is cancelled.
    pub fn reply_stream(&self, full_text: impl Into<String>) -> (RevealHandle, RevealStream) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = self.start_reveal(full_text.into(), Some(sender));
        (handle, Box::pin(UnboundedReceiverStream::new(receiver)))
    }

    /// Stop the active reveal and discard its partial message.
    ///
    /// Returns whether a reveal was active.
    pub fn cancel_reply(&self) -> bool {
        let cancelled = {
            let mut state = self.state.write();
            if !state.replying {
                return false;
            }
            let cancelled = state.generation;
            state.generation += 1;
            state.messages.retain(|message| !message.in_progress);
            state.replying = false;
            cancelled
        };
        info!(
            "cancelled reply (session_id={}, generation={})",
            self.id, cancelled
        );
        self.emit(EventPayload::ReplyCancelled {
            generation: cancelled,
        });
        true
    }

    fn start_reveal(
        &self,
        full_text: String,
        updates: Option<mpsc::UnboundedSender<String>>,
    ) -> RevealHandle {
        let (superseded, generation) = {
            let mut state = self.state.write();
            let superseded = state.replying.then_some(state.generation);
            state.generation += 1;
            state.messages.retain(|message| !message.in_progress);
            state.messages.push(Message {
                id: Uuid::new_v4(),
                role: Role::Assistant,
                content: String::new(),
                created_at: chrono::Utc::now(),
                in_progress: true,
            });
            state.replying = true;
            (superseded, state.generation)
        };

        if let Some(old) = superseded {
            info!(
                "superseding reply (session_id={}, generation={})",
                self.id, old
            );
            self.emit(EventPayload::ReplyCancelled { generation: old });
        }
        info!(
            "starting reply reveal (session_id={}, generation={}, content_len={})",
            self.id,
            generation,
            full_text.len()
        );
        self.emit(EventPayload::ReplyStarted { generation });

        let session = self.clone();
        let task = tokio::spawn(async move {
            session.run_reveal(generation, full_text, updates).await;
        });
        RevealHandle { generation, task }
    }

    async fn run_reveal(
        &self,
        generation: u64,
        full_text: String,
        updates: Option<mpsc::UnboundedSender<String>>,
    ) {
        // Prefix end offsets, one per character, so the reveal never splits
        // a UTF-8 sequence.
        let ends: Vec<usize> = full_text
            .char_indices()
            .map(|(idx, ch)| idx + ch.len_utf8())
            .collect();

        for end in ends {
            tokio::time::sleep(self.tick).await;
            {
                let mut state = self.state.write();
                if state.generation != generation {
                    return;
                }
                if let Some(message) = state.messages.iter_mut().find(|m| m.in_progress) {
                    message.content = full_text[..end].to_string();
                }
            }
            debug!(
                "reveal tick (session_id={}, generation={}, revealed={})",
                self.id, generation, end
            );
            if let Some(sender) = &updates {
                let _ = sender.send(full_text[..end].to_string());
            }
            self.emit(EventPayload::ReplyProgress {
                generation,
                content: full_text[..end].to_string(),
            });
        }

        let message_id = Uuid::new_v4();
        {
            let mut state = self.state.write();
            if state.generation != generation {
                return;
            }
            let Some(message) = state.messages.iter_mut().find(|m| m.in_progress) else {
                return;
            };
            message.content = full_text.clone();
            message.in_progress = false;
            // Finalized replies receive a fresh identifier.
            message.id = message_id;
            state.replying = false;
        }
        info!(
            "reply finalized (session_id={}, generation={}, message_id={})",
            self.id, generation, message_id
        );
        self.emit(EventPayload::ReplyCompleted {
            generation,
            message_id,
            content: full_text,
        });
    }

    fn emit(&self, payload: EventPayload) {
        if let Some(sink) = &self.events {
            sink.emit(EventMsg::new(self.id, payload));
        }
    }
}

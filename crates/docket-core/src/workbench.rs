//! Workbench facade wiring the session-owned containers together.

use crate::chat::ChatSession;
use crate::error::DocketCoreError;
use crate::registry::{DocumentRegistry, RequirementBoard};
use crate::seed;
use crate::transfer::TransferSimulator;
use docket_config::DocketConfig;
use docket_protocol::{EventSink, SessionId};
use log::info;
use std::collections::HashMap;
use std::sync::Arc;

/// One user-facing workbench session.
///
/// Owns its chat session, document registry, requirement board, and
/// transfer engine exclusively; nothing is shared across workbenches and
/// nothing survives the process.
pub struct Workbench {
    chat: ChatSession,
    documents: DocumentRegistry,
    requirements: RequirementBoard,
    transfer: TransferSimulator,
}

impl Workbench {
    /// Build a workbench from config, seeding demo data when enabled.
    pub fn new(
        config: &DocketConfig,
        events: Option<Arc<dyn EventSink>>,
    ) -> Result<Self, DocketCoreError> {
        let chat = ChatSession::new(&config.chat, events.clone());
        let (documents, requirements) = if config.seed.demo_data {
            (
                DocumentRegistry::with_records(seed::demo_documents())?,
                RequirementBoard::with_records(seed::demo_requirements())?,
            )
        } else {
            (DocumentRegistry::new(), RequirementBoard::new())
        };
        let transfer = TransferSimulator::new(chat.id(), config.transfer.clone(), events);
        info!("created workbench (session_id={})", chat.id());
        Ok(Self {
            chat,
            documents,
            requirements,
            transfer,
        })
    }

    /// Session identifier shared by all events from this workbench.
    pub fn session_id(&self) -> SessionId {
        self.chat.id()
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn documents(&self) -> &DocumentRegistry {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut DocumentRegistry {
        &mut self.documents
    }

    pub fn requirements(&self) -> &RequirementBoard {
        &self.requirements
    }

    pub fn requirements_mut(&mut self) -> &mut RequirementBoard {
        &mut self.requirements
    }

    pub fn transfer(&self) -> &TransferSimulator {
        &self.transfer
    }

    /// Simulate an upload and register the resulting record.
    ///
    /// Returns the new document id.
    pub async fn upload_document(
        &mut self,
        file_name: &str,
        fields: &HashMap<String, String>,
    ) -> Result<String, DocketCoreError> {
        let record = self.transfer.upload(file_name, fields).await?;
        let id = record.id.clone();
        self.documents.add(record)?;
        Ok(id)
    }
}

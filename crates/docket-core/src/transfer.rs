//! Simulated upload and download transfers.
//!
//! Transfers never touch a backend: progress is staged on a timer and
//! success is unconditional. The metadata bag mirrors the upload form
//! contract: unknown keys are ignored and missing keys stay absent.

use crate::error::DocketCoreError;
use crate::types::{DocumentMetadata, DocumentRecord};
use docket_config::TransferConfig;
use docket_protocol::{EventMsg, EventPayload, EventSink, SessionId};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const FIELD_DOCUMENT_NUMBER: &str = "documentNumber";
const FIELD_CATEGORY: &str = "category";
const FIELD_EFFECTIVE_DATES: &str = "effectiveDates";
const FIELD_AUDIENCE: &str = "audience";
const FIELD_REGIONS: &str = "regions";
const FIELD_BRANDS: &str = "brands";

/// Parsed upload form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadFields {
    /// Free-text category for the record itself.
    pub category: Option<String>,
    /// Remaining metadata stored on the record.
    pub metadata: DocumentMetadata,
}

/// Parse an upload metadata bag.
///
/// `effectiveDates` is newline-delimited and order-preserving; `audience`,
/// `regions`, and `brands` are comma-delimited. Blank values count as
/// missing.
pub fn parse_fields(fields: &HashMap<String, String>) -> UploadFields {
    let text = |key: &str| {
        fields
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string())
    };

    UploadFields {
        category: text(FIELD_CATEGORY),
        metadata: DocumentMetadata {
            document_number: text(FIELD_DOCUMENT_NUMBER),
            effective_dates: split_lines(fields.get(FIELD_EFFECTIVE_DATES)),
            audience: split_commas(fields.get(FIELD_AUDIENCE)),
            regions: split_commas(fields.get(FIELD_REGIONS)),
            brands: split_commas(fields.get(FIELD_BRANDS)),
        },
    }
}

fn split_lines(value: Option<&String>) -> Vec<String> {
    value
        .map(|raw| {
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn split_commas(value: Option<&String>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Simulated transfer engine for one workbench session.
pub struct TransferSimulator {
    session_id: SessionId,
    config: TransferConfig,
    events: Option<Arc<dyn EventSink>>,
}

impl TransferSimulator {
    pub fn new(
        session_id: SessionId,
        config: TransferConfig,
        events: Option<Arc<dyn EventSink>>,
    ) -> Self {
        Self {
            session_id,
            config,
            events,
        }
    }

    /// Simulate uploading a file, producing a draft document record.
    ///
    /// Progress fires at 30, 60, and 100 percent with configured delays in
    /// between. Success is unconditional once the file name validates.
    pub async fn upload(
        &self,
        file_name: &str,
        fields: &HashMap<String, String>,
    ) -> Result<DocumentRecord, DocketCoreError> {
        if file_name.trim().is_empty() {
            return Err(DocketCoreError::Validation(
                "file name is required".to_string(),
            ));
        }
        info!("upload started (file_name={})", file_name);
        self.emit_progress(file_name, 30);

        tokio::time::sleep(Duration::from_millis(self.config.upload_delay_ms)).await;
        self.emit_progress(file_name, 60);

        let parsed = parse_fields(fields);
        let mut record = DocumentRecord::new(
            Uuid::new_v4().to_string(),
            file_name,
            parsed.category.unwrap_or_default(),
        );
        if !parsed.metadata.is_empty() {
            record = record.with_metadata(parsed.metadata);
        }

        self.emit_progress(file_name, 100);
        tokio::time::sleep(Duration::from_millis(self.config.settle_delay_ms)).await;

        info!(
            "upload finished (file_name={}, document_id={})",
            file_name, record.id
        );
        self.emit(EventPayload::UploadCompleted {
            document_id: record.id.clone(),
            file_name: file_name.to_string(),
        });
        Ok(record)
    }

    /// Simulate downloading a document after a fixed delay.
    pub async fn download(&self, record: &DocumentRecord) {
        debug!("download started (document_id={})", record.id);
        self.emit(EventPayload::DownloadStarted {
            document_id: record.id.clone(),
        });
        tokio::time::sleep(Duration::from_millis(self.config.download_delay_ms)).await;
        debug!("download finished (document_id={})", record.id);
        self.emit(EventPayload::DownloadCompleted {
            document_id: record.id.clone(),
        });
    }

    fn emit_progress(&self, file_name: &str, percent: u8) {
        self.emit(EventPayload::UploadProgress {
            file_name: file_name.to_string(),
            percent,
        });
    }

    fn emit(&self, payload: EventPayload) {
        if let Some(sink) = &self.events {
            sink.emit(EventMsg::new(self.session_id, payload));
        }
    }
}

//! Workbench wiring and upload flow integration tests.

use docket_config::{DocketConfig, parse_config};
use docket_core::{DraftRequest, Workbench};
use docket_core::types::{DocumentStatus, Priority};
use docket_protocol::EventPayload;
use docket_test_utils::RecordingSink;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Arc;

fn fast_config(demo_data: bool) -> DocketConfig {
    parse_config(&format!(
        r#"{{
            chat: {{ tick_ms: 1 }},
            transfer: {{ upload_delay_ms: 1, settle_delay_ms: 1, download_delay_ms: 1 }},
            seed: {{ demo_data: {demo_data} }},
        }}"#
    ))
    .expect("config")
}

#[tokio::test(start_paused = true)]
async fn demo_seed_populates_both_containers() {
    let workbench = Workbench::new(&fast_config(true), None).expect("workbench");

    assert_eq!(workbench.documents().len(), 3);
    assert_eq!(workbench.requirements().len(), 3);
    assert_eq!(workbench.documents().stats().published, 2);
    assert_eq!(workbench.requirements().stats().pending, 1);

    // Default greeting from the config seeds the transcript.
    let messages = workbench.chat().messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].content.starts_with("Hello!"));
}

#[tokio::test(start_paused = true)]
async fn upload_registers_a_searchable_draft_record() {
    let sink = Arc::new(RecordingSink::new());
    let mut workbench = Workbench::new(&fast_config(false), Some(sink.clone())).expect("workbench");

    let mut fields = HashMap::new();
    fields.insert("category".to_string(), "Security Bulletin".to_string());
    fields.insert("documentNumber".to_string(), "GLB 11100.5".to_string());
    fields.insert(
        "effectiveDates".to_string(),
        "2025-03-04\n2025-03-24".to_string(),
    );

    let id = workbench
        .upload_document("Compliance Bulletin.pdf", &fields)
        .await
        .expect("upload");

    let record = workbench.documents().get(&id).expect("registered");
    assert_eq!(record.status, DocumentStatus::Draft);
    assert_eq!(record.version, 1);
    assert_eq!(record.category, "Security Bulletin".to_string());
    assert_eq!(
        record
            .metadata
            .as_ref()
            .expect("metadata")
            .effective_dates
            .len(),
        2
    );

    let hits = workbench.documents().search("bulletin");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, id);

    let percents: Vec<u8> = sink
        .payloads()
        .into_iter()
        .filter_map(|payload| match payload {
            EventPayload::UploadProgress { percent, .. } => Some(percent),
            _ => None,
        })
        .collect();
    assert_eq!(percents, vec![30, 60, 100]);
    assert!(
        sink.payloads()
            .iter()
            .any(|payload| matches!(payload, EventPayload::UploadCompleted { .. }))
    );
}

#[tokio::test(start_paused = true)]
async fn blank_file_name_fails_before_any_progress() {
    let sink = Arc::new(RecordingSink::new());
    let mut workbench = Workbench::new(&fast_config(false), Some(sink.clone())).expect("workbench");

    let err = workbench
        .upload_document("  ", &HashMap::new())
        .await
        .expect_err("invalid");
    assert_eq!(
        err.to_string(),
        "validation error: file name is required".to_string()
    );
    assert!(sink.is_empty());
    assert!(workbench.documents().is_empty());
}

#[tokio::test(start_paused = true)]
async fn generated_draft_reveals_into_the_transcript() {
    let config = fast_config(false);
    let workbench = Workbench::new(&config, None).expect("workbench");

    let draft = DraftRequest::new("Support Upgrade", "AI-driven support", Priority::High)
        .with_source_documents(vec!["survey.pdf".to_string()])
        .generate()
        .expect("draft");

    workbench.chat().start_assistant_reply(draft.clone()).wait().await;

    let messages = workbench.chat().messages();
    let last = messages.last().expect("revealed draft");
    assert_eq!(last.content, draft);
    assert_eq!(last.in_progress, false);
}

#[tokio::test(start_paused = true)]
async fn download_emits_start_and_completion() {
    let sink = Arc::new(RecordingSink::new());
    let mut workbench = Workbench::new(&fast_config(false), Some(sink.clone())).expect("workbench");

    let id = workbench
        .upload_document("Manual.docx", &HashMap::new())
        .await
        .expect("upload");
    let record = workbench.documents().get(&id).expect("record").clone();
    workbench.transfer().download(&record).await;

    let downloads: Vec<String> = sink
        .payloads()
        .into_iter()
        .filter_map(|payload| match payload {
            EventPayload::DownloadStarted { document_id } => Some(format!("started:{document_id}")),
            EventPayload::DownloadCompleted { document_id } => {
                Some(format!("completed:{document_id}"))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        downloads,
        vec![format!("started:{id}"), format!("completed:{id}")]
    );
}

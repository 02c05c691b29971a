//! Reveal pacing, ordering, and cancellation integration tests.
//!
//! Timer-paced behavior runs under a paused tokio clock, so assertions are
//! on final content and ordering rather than wall-clock timing.

use docket_config::ChatConfig;
use docket_core::ChatSession;
use docket_protocol::EventPayload;
use docket_test_utils::RecordingSink;
use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn config() -> ChatConfig {
    ChatConfig {
        tick_ms: 1,
        greeting: None,
    }
}

fn progress_contents(sink: &RecordingSink) -> Vec<String> {
    sink.payloads()
        .into_iter()
        .filter_map(|payload| match payload {
            EventPayload::ReplyProgress { content, .. } => Some(content),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn reveal_produces_ordered_prefixes_then_finalizes() {
    let sink = Arc::new(RecordingSink::new());
    let session = ChatSession::new(&config(), Some(sink.clone()));

    session.start_assistant_reply("abcdef").wait().await;

    assert_eq!(
        progress_contents(&sink),
        vec!["a", "ab", "abc", "abcd", "abcde", "abcdef"]
    );

    let messages = session.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "abcdef".to_string());
    assert_eq!(messages[0].in_progress, false);
    assert_eq!(session.is_replying(), false);

    match sink.payloads().last().expect("completed event") {
        EventPayload::ReplyCompleted { content, .. } => assert_eq!(content, "abcdef"),
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn empty_reveal_completes_with_no_ticks() {
    let sink = Arc::new(RecordingSink::new());
    let session = ChatSession::new(&config(), Some(sink.clone()));

    session.start_assistant_reply("").wait().await;

    assert_eq!(progress_contents(&sink), Vec::<String>::new());

    let messages = session.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "".to_string());
    assert_eq!(messages[0].in_progress, false);
}

#[tokio::test(start_paused = true)]
async fn finalized_reply_gets_a_fresh_identifier() {
    let session = ChatSession::new(&config(), None);

    let handle = session.start_assistant_reply("hi");
    let partial_id = session
        .messages()
        .last()
        .expect("in-progress message")
        .id;
    handle.wait().await;

    let finalized = session.messages();
    assert_ne!(finalized.last().expect("finalized message").id, partial_id);
}

#[tokio::test(start_paused = true)]
async fn restarting_a_reveal_discards_the_previous_partial() {
    let sink = Arc::new(RecordingSink::new());
    let session = ChatSession::new(&config(), Some(sink.clone()));

    let first = session.start_assistant_reply("first response that never lands");
    let second = session.start_assistant_reply("second");
    first.wait().await;
    second.wait().await;

    let messages = session.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "second".to_string());

    // No partial content from the superseded generation appears anywhere.
    for content in progress_contents(&sink) {
        assert!("second".starts_with(&content), "leaked partial: {content}");
    }
    assert!(
        sink.payloads()
            .iter()
            .any(|payload| matches!(payload, EventPayload::ReplyCancelled { .. }))
    );
}

#[tokio::test(start_paused = true)]
async fn cancel_discards_the_partial_and_stops_ticks() {
    let sink = Arc::new(RecordingSink::new());
    let session = ChatSession::new(&config(), Some(sink.clone()));

    let handle = session.start_assistant_reply("never finished");
    assert_eq!(session.is_replying(), true);
    assert_eq!(session.cancel_reply(), true);
    handle.wait().await;

    assert_eq!(session.messages().len(), 0);
    assert_eq!(session.is_replying(), false);
    assert_eq!(progress_contents(&sink), Vec::<String>::new());
    assert!(
        !sink
            .payloads()
            .iter()
            .any(|payload| matches!(payload, EventPayload::ReplyCompleted { .. }))
    );
}

#[tokio::test(start_paused = true)]
async fn reply_stream_yields_char_boundary_snapshots() {
    let session = ChatSession::new(&config(), None);

    let (handle, stream) = session.reply_stream("héllo");
    let snapshots: Vec<String> = stream.collect().await;
    handle.wait().await;

    assert_eq!(snapshots, vec!["h", "hé", "hél", "héll", "héllo"]);
}

#[tokio::test(start_paused = true)]
async fn user_input_is_accepted_again_after_the_reveal() {
    let session = ChatSession::new(&config(), None);

    session.start_assistant_reply("done").wait().await;
    assert_eq!(session.is_replying(), false);

    let id = session.append_user_message("follow-up").expect("append");
    assert_eq!(session.messages().last().expect("message").id, id);
}

use std::time::Duration;

use boli_core::types::{AppEvent, ViewUpdate};
use boli_types::{ChapterId, LessonStatus};
use tokio::time::timeout;

use super::fixtures::HarnessBuilder;

#[tokio::test]
async fn test_sync_callback_reaches_event_loop() {
    let harness = HarnessBuilder::new().spawn();
    harness.activate("marathi").await;

    // Shell callbacks are plain closures; they hand the send to the runtime
    let tx = harness.tx.clone();
    let on_card_click = move |id: &str| {
        let tx = tx.clone();
        let id = id.to_string();
        tokio::spawn(async move {
            tx.send(AppEvent::ToggleCategory(id))
                .await
                .expect("send failed");
        });
    };

    on_card_click("food");

    match timeout(Duration::from_secs(2), harness.rx.recv()).await {
        Ok(Ok(ViewUpdate::Categories { expanded, .. })) => {
            assert_eq!(expanded.as_deref(), Some("food"))
        }
        Ok(Ok(other)) => panic!("Wrong update: {:?}", other),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - update never arrived!"),
    }
    harness.stop().await;
}

#[tokio::test]
async fn test_keystroke_burst_is_answered_in_order() {
    let harness = HarnessBuilder::new().spawn();
    harness.activate("marathi").await;

    let tx = harness.tx.clone();
    tokio::spawn(async move {
        for query in ["h", "he", "hel", "hello", ""] {
            tx.send(AppEvent::SearchText(query.to_string()))
                .await
                .expect("send failed");
        }
    });

    let mut answers = Vec::new();
    for _ in 0..5 {
        answers.push(harness.next().await);
    }

    assert!(answers[..4]
        .iter()
        .all(|u| matches!(u, ViewUpdate::SearchResults(_))));
    match &answers[3] {
        ViewUpdate::SearchResults(results) => {
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].item.target_text(), "नमस्कार");
        }
        other => panic!("Wrong update: {:?}", other),
    }
    assert!(matches!(answers[4], ViewUpdate::SearchCleared));
    harness.stop().await;
}

#[test]
fn test_events_parse_from_shell_json() {
    let event: AppEvent =
        serde_json::from_str(r#"{"event": "toggle_chapter", "payload": 3}"#).unwrap();
    assert!(matches!(event, AppEvent::ToggleChapter(ChapterId(3))));

    let event: AppEvent = serde_json::from_str(
        r#"{"event": "open_phrase", "payload": {"category_id": "food", "index": 2}}"#,
    )
    .unwrap();
    assert!(matches!(
        event,
        AppEvent::OpenPhrase { ref category_id, index: 2 } if category_id == "food"
    ));

    let event: AppEvent = serde_json::from_str(r#"{"event": "change_language"}"#).unwrap();
    assert!(matches!(event, AppEvent::ChangeLanguage));
}

#[test]
fn test_updates_serialize_for_shell() {
    let json = serde_json::to_value(ViewUpdate::LessonStatus(LessonStatus::Failed(
        "data.json not found".to_string(),
    )))
    .unwrap();

    assert_eq!(json["view"], "lesson_status");
    assert_eq!(json["payload"]["state"], "failed");
    assert_eq!(json["payload"]["reason"], "data.json not found");

    let json = serde_json::to_value(ViewUpdate::SearchCleared).unwrap();
    assert_eq!(json, serde_json::json!({"view": "search_cleared"}));
}

use std::sync::Arc;

use boli_core::lesson_view::{LessonListView, SubLessonBody};
use boli_core::types::{AppEvent, ViewUpdate};
use boli_types::{BlockTag, ChapterId, LessonStatus};

use super::fixtures::{Harness, HarnessBuilder, MockFetcher, STRUCTURE};

async fn lessons(harness: &Harness) -> LessonListView {
    match harness.next().await {
        ViewUpdate::Lessons(view) => view,
        other => panic!("Wrong update: {:?}", other),
    }
}

async fn open_lessons(harness: &Harness) -> LessonListView {
    harness.send(AppEvent::OpenLessons).await;
    match harness
        .next_matching(|u| matches!(u, ViewUpdate::Lessons(_)))
        .await
    {
        ViewUpdate::Lessons(view) => view,
        _ => unreachable!(),
    }
}

fn expanded_names(view: &LessonListView) -> Vec<(&str, bool)> {
    match view {
        LessonListView::Empty => Vec::new(),
        LessonListView::Lessons(majors) => majors
            .iter()
            .map(|m| (m.name.as_str(), m.expanded))
            .collect(),
    }
}

#[tokio::test]
async fn test_first_open_loads_then_shows_outline() {
    let harness = HarnessBuilder::new().spawn();
    harness.activate("marathi").await;

    harness.send(AppEvent::OpenLessons).await;
    assert!(matches!(
        harness.next().await,
        ViewUpdate::LessonStatus(LessonStatus::Loading)
    ));
    assert!(matches!(
        harness.next().await,
        ViewUpdate::LessonStatus(LessonStatus::Loaded)
    ));

    let view = lessons(&harness).await;
    assert_eq!(
        expanded_names(&view),
        vec![("Alphabet", false), ("Counting", false)]
    );
    assert_eq!(harness.fetcher.calls(), 2);
    harness.stop().await;
}

#[tokio::test]
async fn test_reopening_uses_the_cache() {
    let harness = HarnessBuilder::new().spawn();
    harness.activate("marathi").await;

    open_lessons(&harness).await;
    harness.send(AppEvent::OpenLessons).await;

    // No Loading status the second time
    assert!(matches!(
        harness.next().await,
        ViewUpdate::LessonStatus(LessonStatus::Loaded)
    ));
    lessons(&harness).await;
    assert_eq!(harness.fetcher.calls(), 2);
    harness.stop().await;
}

#[tokio::test]
async fn test_language_without_lessons() {
    let harness = HarnessBuilder::new().spawn();
    harness.activate("tamil").await;

    harness.send(AppEvent::OpenLessons).await;
    assert!(matches!(
        harness.next().await,
        ViewUpdate::LessonStatus(LessonStatus::Unavailable)
    ));
    assert_eq!(harness.fetcher.calls(), 0);

    // Lesson events render an empty list rather than stale data
    harness.send(AppEvent::LessonSearch("vowels".to_string())).await;
    assert_eq!(lessons(&harness).await, LessonListView::Empty);
    harness.stop().await;
}

#[tokio::test]
async fn test_failed_load_reports_and_retry_recovers() {
    let fetcher = Arc::new(MockFetcher::with_lessons());
    fetcher.set("lessons_structure.json", None);
    let harness = HarnessBuilder::new().fetcher(fetcher.clone()).spawn();
    harness.activate("marathi").await;

    harness.send(AppEvent::OpenLessons).await;
    assert!(matches!(
        harness.next().await,
        ViewUpdate::LessonStatus(LessonStatus::Loading)
    ));
    match harness.next().await {
        ViewUpdate::LessonStatus(LessonStatus::Failed(reason)) => {
            assert!(reason.contains("lessons_structure.json"));
        }
        other => panic!("Wrong update: {:?}", other),
    }

    fetcher.set("lessons_structure.json", Some(STRUCTURE));
    let view = open_lessons(&harness).await;
    assert_eq!(expanded_names(&view).len(), 2);
    assert_eq!(fetcher.calls(), 4);
    harness.stop().await;
}

#[tokio::test]
async fn test_expand_major_and_chapter() {
    let harness = HarnessBuilder::new().spawn();
    harness.activate("marathi").await;
    open_lessons(&harness).await;

    harness
        .send(AppEvent::ToggleMajorLesson("Alphabet".to_string()))
        .await;
    let view = lessons(&harness).await;
    let LessonListView::Lessons(majors) = &view else {
        panic!("no lessons");
    };
    let bodies: Vec<&SubLessonBody> = majors[0].sublessons.iter().map(|s| &s.body).collect();
    assert_eq!(
        bodies,
        vec![
            &SubLessonBody::Collapsed,
            &SubLessonBody::Collapsed,
            &SubLessonBody::Placeholder
        ]
    );
    assert!(majors[1].sublessons.is_empty());

    harness.send(AppEvent::ToggleChapter(ChapterId(1))).await;
    let view = lessons(&harness).await;
    let LessonListView::Lessons(majors) = &view else {
        panic!("no lessons");
    };
    match &majors[0].sublessons[0].body {
        SubLessonBody::Expanded { blocks, url } => {
            assert_eq!(url, "https://example.org/1");
            assert_eq!(blocks[0].tag, BlockTag::Heading2);
            assert_eq!(blocks[0].text, "Vowels");
            assert_eq!(blocks[1].text, "अ is <strong>a</strong>");
        }
        other => panic!("Wrong body: {:?}", other),
    }
    harness.stop().await;
}

#[tokio::test]
async fn test_filter_collapses_hidden_lesson() {
    let harness = HarnessBuilder::new().spawn();
    harness.activate("marathi").await;
    open_lessons(&harness).await;

    harness
        .send(AppEvent::ToggleMajorLesson("Alphabet".to_string()))
        .await;
    lessons(&harness).await;
    harness.send(AppEvent::ToggleChapter(ChapterId(1))).await;
    lessons(&harness).await;

    harness
        .send(AppEvent::LessonSearch("  NUMBERS ".to_string()))
        .await;
    let view = lessons(&harness).await;
    assert_eq!(expanded_names(&view), vec![("Counting", false)]);

    // Clearing the filter does not bring the expansion back
    harness.send(AppEvent::LessonSearch(String::new())).await;
    let view = lessons(&harness).await;
    assert_eq!(
        expanded_names(&view),
        vec![("Alphabet", false), ("Counting", false)]
    );
    harness.stop().await;
}

#[tokio::test]
async fn test_language_switch_refetches_lessons() {
    let harness = HarnessBuilder::new().spawn();
    harness.activate("marathi").await;
    open_lessons(&harness).await;

    harness.activate("tamil").await;
    harness.activate("marathi").await;

    // Expansion starts over with the new session
    harness.send(AppEvent::LessonSearch(String::new())).await;
    assert_eq!(lessons(&harness).await, LessonListView::Empty);

    open_lessons(&harness).await;
    assert_eq!(harness.fetcher.calls(), 4);
    harness.stop().await;
}

#[tokio::test]
async fn test_shutdown_while_fetch_is_stalled() {
    let fetcher = Arc::new(MockFetcher::with_lessons());
    fetcher.stall();
    let harness = HarnessBuilder::new().fetcher(fetcher).spawn();
    harness.activate("marathi").await;

    harness.send(AppEvent::OpenLessons).await;
    assert!(matches!(
        harness.next().await,
        ViewUpdate::LessonStatus(LessonStatus::Loading)
    ));
    harness.send(AppEvent::SearchText("hello".to_string())).await;

    // Still fetching, so the search waits its turn
    assert!(
        tokio::time::timeout(std::time::Duration::from_millis(100), harness.rx.recv())
            .await
            .is_err()
    );
    harness.stop().await;
}

use boli_core::types::ViewUpdate;
use boli_lessons::LessonLoader;
use boli_types::{ChapterId, LessonStatus};
use kanal::AsyncSender;

use crate::session::Session;

/// Load lessons for the active language if needed, then show them
pub async fn handle_open_lessons(
    session: &mut Session,
    loader: &mut LessonLoader,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
) -> anyhow::Result<()> {
    let language = session.language().clone();

    if language.has_lessons && loader.cache_for(&language.code).is_none() {
        app_to_ui_tx
            .send(ViewUpdate::LessonStatus(LessonStatus::Loading))
            .await?;
    }

    // Failures are reported through the status, the loop keeps running
    if let Err(e) = loader.ensure_loaded(&language).await {
        tracing::warn!("Lessons unavailable for {}: {}", language.code, e);
    }

    app_to_ui_tx
        .send(ViewUpdate::LessonStatus(loader.status().await))
        .await?;

    if loader.cache_for(&language.code).is_some() {
        send_lessons(session, loader, app_to_ui_tx).await?;
    }

    Ok(())
}

pub async fn handle_lesson_search(
    session: &mut Session,
    loader: &LessonLoader,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    query: String,
) -> anyhow::Result<()> {
    session.set_lesson_query(query);
    send_lessons(session, loader, app_to_ui_tx).await
}

pub async fn handle_toggle_major(
    session: &mut Session,
    loader: &LessonLoader,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    name: &str,
) -> anyhow::Result<()> {
    session.toggle_major_lesson(name);
    send_lessons(session, loader, app_to_ui_tx).await
}

pub async fn handle_toggle_chapter(
    session: &mut Session,
    loader: &LessonLoader,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    id: ChapterId,
) -> anyhow::Result<()> {
    session.toggle_chapter(id);
    send_lessons(session, loader, app_to_ui_tx).await
}

async fn send_lessons(
    session: &mut Session,
    loader: &LessonLoader,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
) -> anyhow::Result<()> {
    let view = session.lesson_view(loader);
    app_to_ui_tx.send(ViewUpdate::Lessons(view)).await?;
    Ok(())
}

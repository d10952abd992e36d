use std::sync::Arc;

use boli_core::types::{AppEvent, ViewUpdate};
use boli_lessons::LessonLoader;
use boli_store::LanguagePreference;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::session::Session;
use crate::state::AppState;

pub mod bookmarks;
pub mod language;
pub mod lessons;
pub mod search;
pub mod speak;

use bookmarks::{handle_remove_saved, handle_toggle_save};
use language::{handle_change_language, handle_select_language, restore_language};
use lessons::{handle_lesson_search, handle_open_lessons, handle_toggle_chapter, handle_toggle_major};
use search::{handle_dictionary_search, handle_open_phrase, handle_search, handle_toggle_category};
use speak::handle_speak;

/// State owned by the event loop task
pub struct EventContext {
    pub session: Option<Session>,
    pub loader: LessonLoader,
    pub preference: LanguagePreference,
}

impl EventContext {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: None,
            loader: LessonLoader::new(state.fetcher.clone()),
            preference: LanguagePreference::new(state.store.clone()),
        }
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<ViewUpdate>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut ctx = EventContext::new(&state);
    restore_language(&state, &mut ctx, &app_to_ui_tx).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
            received = ui_to_app_rx.recv() => match received {
                Ok(event) => event,
                Err(_) => {
                    tracing::info!("[EVENT_LOOP] UI channel closed");
                    return Ok(());
                }
            },
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        // A pending lesson fetch must not hold up shutdown
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled while handling event");
                return Ok(());
            }
            handled = handle_events(&state, &mut ctx, &app_to_ui_tx, event) => handled?,
        }
    }
}

pub async fn handle_events(
    state: &AppState,
    ctx: &mut EventContext,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::SelectLanguage(code) => {
            handle_select_language(state, ctx, app_to_ui_tx, code).await?;
        }
        AppEvent::ChangeLanguage => {
            handle_change_language(ctx, app_to_ui_tx).await?;
        }
        event => {
            // Everything else acts on the active language
            let Some(session) = ctx.session.as_mut() else {
                tracing::warn!("Ignoring {:?}: no active language", event);
                return Ok(());
            };

            match event {
                AppEvent::SearchText(query) => {
                    handle_search(state, session, app_to_ui_tx, &query).await?;
                }
                AppEvent::DictionarySearch(query) => {
                    handle_dictionary_search(session, app_to_ui_tx, &query).await?;
                }
                AppEvent::ToggleCategory(id) => {
                    handle_toggle_category(state, session, app_to_ui_tx, &id).await?;
                }
                AppEvent::OpenPhrase { category_id, index } => {
                    handle_open_phrase(state, session, app_to_ui_tx, &category_id, index).await?;
                }
                AppEvent::ToggleSave(entry) => {
                    handle_toggle_save(session, app_to_ui_tx, &entry).await?;
                }
                AppEvent::RemoveSaved(index) => {
                    handle_remove_saved(session, app_to_ui_tx, index).await?;
                }
                AppEvent::Speak(entry) => {
                    handle_speak(state, session, app_to_ui_tx, &entry).await?;
                }
                AppEvent::OpenLessons => {
                    handle_open_lessons(session, &mut ctx.loader, app_to_ui_tx).await?;
                }
                AppEvent::LessonSearch(query) => {
                    handle_lesson_search(session, &ctx.loader, app_to_ui_tx, query).await?;
                }
                AppEvent::ToggleMajorLesson(name) => {
                    handle_toggle_major(session, &ctx.loader, app_to_ui_tx, &name).await?;
                }
                AppEvent::ToggleChapter(id) => {
                    handle_toggle_chapter(session, &ctx.loader, app_to_ui_tx, id).await?;
                }
                // Handled above
                AppEvent::SelectLanguage(_) | AppEvent::ChangeLanguage => {}
            }
        }
    }

    Ok(())
}

use boli_core::types::ViewUpdate;
use boli_types::CategoryId;
use kanal::AsyncSender;

use crate::session::Session;
use crate::state::AppState;

pub async fn handle_search(
    state: &AppState,
    session: &Session,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    query: &str,
) -> anyhow::Result<()> {
    let limit = state.config.read().await.search.max_results;

    let update = match session.search(query, limit) {
        Some(results) => ViewUpdate::SearchResults(results),
        None => ViewUpdate::SearchCleared,
    };
    app_to_ui_tx.send(update).await?;

    Ok(())
}

pub async fn handle_dictionary_search(
    session: &Session,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    query: &str,
) -> anyhow::Result<()> {
    let entries = session.dictionary(query);
    tracing::debug!("Dictionary '{}': {} entries", query, entries.len());

    app_to_ui_tx.send(ViewUpdate::Dictionary(entries)).await?;
    Ok(())
}

pub async fn handle_toggle_category(
    state: &AppState,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    id: &str,
) -> anyhow::Result<()> {
    let expanded = session.toggle_category(id);
    send_categories(state, session, app_to_ui_tx, expanded).await
}

pub async fn send_categories(
    state: &AppState,
    session: &Session,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    expanded: Option<CategoryId>,
) -> anyhow::Result<()> {
    let categories = {
        let config = state.config.read().await;
        session.categories(&config.assets.twemoji_cdn)
    };

    app_to_ui_tx
        .send(ViewUpdate::Categories {
            categories,
            expanded,
        })
        .await?;
    Ok(())
}

pub async fn handle_open_phrase(
    state: &AppState,
    session: &Session,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    category_id: &str,
    index: usize,
) -> anyhow::Result<()> {
    let similar_count = state.config.read().await.search.similar_count;

    match session.phrase_detail(category_id, index, similar_count) {
        Some(detail) => {
            app_to_ui_tx.send(ViewUpdate::PhraseDetail(detail)).await?;
        }
        None => {
            tracing::warn!("No phrase {} in category {}", index, category_id);
        }
    }

    Ok(())
}

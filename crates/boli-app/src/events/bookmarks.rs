use boli_core::types::ViewUpdate;
use boli_types::PhraseEntry;
use kanal::AsyncSender;

use crate::session::Session;

pub async fn handle_toggle_save(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    entry: &PhraseEntry,
) -> anyhow::Result<()> {
    match session.toggle_save(entry) {
        Ok(outcome) => {
            let notice = if outcome.added {
                "Phrase saved!"
            } else {
                "Removed from saved"
            };
            app_to_ui_tx
                .send(ViewUpdate::Notice(notice.to_string()))
                .await?;
            app_to_ui_tx
                .send(ViewUpdate::Saved(session.saved().to_vec()))
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to update saved phrases: {}", e);
            app_to_ui_tx
                .send(ViewUpdate::Notice("Could not update saved phrases".to_string()))
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_remove_saved(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    index: usize,
) -> anyhow::Result<()> {
    match session.remove_saved(index) {
        Ok(Some(removed)) => {
            tracing::debug!("Removed saved phrase '{}'", removed.source_text);
            app_to_ui_tx
                .send(ViewUpdate::Notice("Removed from saved".to_string()))
                .await?;
            app_to_ui_tx
                .send(ViewUpdate::Saved(session.saved().to_vec()))
                .await?;
        }
        Ok(None) => {
            tracing::warn!("No saved phrase at {}", index);
        }
        Err(e) => {
            tracing::error!("Failed to remove saved phrase: {}", e);
            app_to_ui_tx
                .send(ViewUpdate::Notice("Could not update saved phrases".to_string()))
                .await?;
        }
    }

    Ok(())
}

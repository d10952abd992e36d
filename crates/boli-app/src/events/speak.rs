use boli_core::speech::{SpeechError, SpeechRequest};
use boli_core::types::ViewUpdate;
use boli_types::PhraseEntry;
use kanal::AsyncSender;

use crate::session::Session;
use crate::state::AppState;

pub async fn handle_speak(
    state: &AppState,
    session: &Session,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    entry: &PhraseEntry,
) -> anyhow::Result<()> {
    let (enabled, rate) = {
        let config = state.config.read().await;
        (config.speech.enabled, config.speech.rate)
    };

    let speaker = match &state.speaker {
        Some(speaker) if enabled => speaker,
        _ => {
            app_to_ui_tx
                .send(ViewUpdate::Notice(SpeechError::Unsupported.to_string()))
                .await?;
            return Ok(());
        }
    };

    let Some(request) = SpeechRequest::for_text(&entry.target_text, session.language(), rate)
    else {
        tracing::debug!("Nothing to speak for '{}'", entry.source_text);
        return Ok(());
    };

    let notice = match speaker.speak(&request) {
        Ok(()) => "Playing...".to_string(),
        Err(e) => {
            tracing::warn!("Speech failed: {}", e);
            e.to_string()
        }
    };
    app_to_ui_tx.send(ViewUpdate::Notice(notice)).await?;

    Ok(())
}

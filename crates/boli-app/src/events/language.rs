use boli_core::types::ViewUpdate;
use boli_types::LanguageCode;
use kanal::AsyncSender;

use crate::events::EventContext;
use crate::events::search::send_categories;
use crate::session::Session;
use crate::state::AppState;

/// Reopen the remembered language, or ask for one
pub async fn restore_language(
    state: &AppState,
    ctx: &mut EventContext,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
) -> anyhow::Result<()> {
    match ctx.preference.load() {
        Some(code) => {
            tracing::info!("Restoring language {}", code);
            handle_select_language(state, ctx, app_to_ui_tx, code).await
        }
        None => {
            app_to_ui_tx.send(ViewUpdate::LanguagePicker).await?;
            Ok(())
        }
    }
}

pub async fn handle_select_language(
    state: &AppState,
    ctx: &mut EventContext,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
    code: LanguageCode,
) -> anyhow::Result<()> {
    let Some(language) = state.provider.resolve(Some(&code)) else {
        tracing::error!("No language available for {}", code);
        app_to_ui_tx.send(ViewUpdate::LanguagePicker).await?;
        return Ok(());
    };

    if language.code != code {
        tracing::warn!("Unknown language {}, using {}", code, language.code);
    }

    if let Err(e) = ctx.preference.save(&language.code) {
        tracing::warn!("Failed to remember language {}: {}", language.code, e);
    }

    ctx.loader.invalidate();
    let session = Session::open(language, state.store.clone());
    tracing::info!("Activated {}", session.language().display_name);

    app_to_ui_tx
        .send(ViewUpdate::LanguageActivated(session.summary()))
        .await?;
    send_categories(state, &session, app_to_ui_tx, None).await?;
    app_to_ui_tx
        .send(ViewUpdate::Saved(session.saved().to_vec()))
        .await?;

    ctx.session = Some(session);
    Ok(())
}

pub async fn handle_change_language(
    ctx: &mut EventContext,
    app_to_ui_tx: &AsyncSender<ViewUpdate>,
) -> anyhow::Result<()> {
    if let Err(e) = ctx.preference.clear() {
        tracing::warn!("Failed to forget selected language: {}", e);
    }

    ctx.session = None;
    ctx.loader.invalidate();

    app_to_ui_tx.send(ViewUpdate::LanguagePicker).await?;
    Ok(())
}

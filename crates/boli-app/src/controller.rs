use std::sync::Arc;

use boli_config::Config;
use boli_core::speech::Speaker;
use boli_core::types::{AppEvent, ViewUpdate};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<ViewUpdate>, AsyncReceiver<ViewUpdate>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            // A single event can fan out into several updates
            app_to_ui: kanal::bounded_async(capacity * 4),
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Build the state from `config` and size the channels from it
    pub fn from_config(config: Config, speaker: Option<Arc<dyn Speaker>>) -> anyhow::Result<Self> {
        let capacity = config.channel_capacity;
        let state = AppState::from_config(config, speaker)?;
        Ok(Self::new(Arc::new(state), capacity))
    }

    /// The shell's ends of the channels
    pub fn ui_handles(&self) -> (AsyncSender<AppEvent>, AsyncReceiver<ViewUpdate>) {
        (
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.1.clone(),
        )
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.child_token()
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_lookup::WordLookup;
use lexis_types::{AppEvent, UiEvent};
use tokio::signal;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::{InputSource, watcher_io};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_ui: (AsyncSender<UiEvent>, AsyncReceiver<UiEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64),
            app_to_ui: kanal::bounded_async(64),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    state: Arc<AppState>,
    input: InputSource,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, input: InputSource) -> Self {
        Self {
            state,
            input,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Each channel end is moved into exactly one task, so a finished task
    /// closes its channels and the others wind down.
    pub fn spawn_tasks(&self, lookup: Arc<dyn WordLookup>) -> JoinSet<anyhow::Result<()>> {
        let ChannelSet {
            input_to_app: (input_tx, input_rx),
            app_to_ui: (ui_tx, ui_rx),
        } = ChannelSet::new();
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            input_rx,
            ui_tx,
            lookup,
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(ui_loop(ui_rx, self.state.config.clone()));

        // Input watcher
        tasks.spawn(watcher_io(
            self.input.clone(),
            self.cancel_token.child_token(),
            input_tx,
        ));

        tasks
    }

    /// Run until input is exhausted, the user quits, or Ctrl+C
    pub async fn run(&self, lookup: Arc<dyn WordLookup>) -> anyhow::Result<()> {
        let mut tasks = self.spawn_tasks(lookup);
        let mut first_error = None;

        let ctrl_c = signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                result = &mut ctrl_c, if !self.cancel_token.is_cancelled() => {
                    if let Err(e) = result {
                        tracing::error!("failed to listen for ctrl+c: {e}");
                    }
                    tracing::info!("Shutdown requested");
                    self.shutdown();
                }
                joined = tasks.join_next() => {
                    let Some(joined) = joined else { break };
                    match joined {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => {
                            tracing::error!("task exited with error: {e:#}");
                            self.shutdown();
                            first_error.get_or_insert(e);
                        }
                        Err(e) => {
                            tracing::error!("task panicked: {e}");
                            self.shutdown();
                        }
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

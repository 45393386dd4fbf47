use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_lookup::WordLookup;
use lexis_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::session::SearchSession;
use crate::state::AppState;

pub mod chart;
pub mod search;

use chart::{handle_chart_dump, handle_show_chart};
use search::handle_search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// App's main loop. Handles one event at a time, so at most one lookup is in flight.
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<UiEvent>,
    lookup: Arc<dyn WordLookup>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = {
        let config = state.config.read().await;
        SearchSession::new(&config)
    };

    tracing::info!(
        provider = %lookup.metadata().name,
        max_history = session.history().max_size(),
        "Starting event loop"
    );

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = input_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::debug!("Input channel closed");
                    break;
                }
            },
        };

        tracing::debug!("Event received: {:?}", event);

        let flow = tokio::select! {
            _ = cancel.cancelled() => break,
            flow = handle_events(&mut session, lookup.as_ref(), &app_to_ui_tx, event) => flow?,
        };

        if flow == Flow::Stop {
            break;
        }
    }

    session.stats.log_summary();

    // Every exit path prints the final chart when asked to
    if state.json_on_exit {
        if let Err(e) = handle_chart_dump(&session, &app_to_ui_tx).await {
            tracing::warn!("Failed to print chart on exit: {e:#}");
        }
    }

    let _ = app_to_ui_tx.send(UiEvent::Close).await;

    Ok(())
}

async fn handle_events(
    session: &mut SearchSession,
    lookup: &dyn WordLookup,
    app_to_ui_tx: &AsyncSender<UiEvent>,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    match event {
        AppEvent::Search(raw) => {
            handle_search(session, lookup, app_to_ui_tx, &raw).await?;
        }
        AppEvent::ShowChart => {
            handle_show_chart(session, app_to_ui_tx).await?;
        }
        AppEvent::DumpChart => {
            handle_chart_dump(session, app_to_ui_tx).await?;
        }
        AppEvent::InputClosed => {
            tracing::debug!("Input exhausted");
            return Ok(Flow::Stop);
        }
        AppEvent::Quit => {
            tracing::info!("Quit requested");
            return Ok(Flow::Stop);
        }
    }

    Ok(Flow::Continue)
}

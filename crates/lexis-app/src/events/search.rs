use kanal::AsyncSender;
use lexis_lookup::WordLookup;
use lexis_types::{SearchResult, UiEvent};

use crate::session::SearchSession;

pub async fn handle_search(
    session: &mut SearchSession,
    lookup: &dyn WordLookup,
    app_to_ui_tx: &AsyncSender<UiEvent>,
    raw: &str,
) -> anyhow::Result<()> {
    let Some(word) = session.prepare_query(raw) else {
        tracing::debug!("Empty query, nothing to search");
        return Ok(());
    };

    app_to_ui_tx.send(UiEvent::Loading(word.clone())).await?;

    session.stats.lookups += 1;
    // Failures reach the history as a not-found result
    let result = match lookup.lookup(&word).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Lookup for '{}' failed: {}", word, e);
            session.stats.failures += 1;
            SearchResult::not_found(&word)
        }
    };

    let (outcome, chart) = session.record(&result);
    tracing::debug!("'{}' recorded: {:?}", word, outcome);
    if outcome.changed() {
        session.stats.charted += 1;
    }

    if result.has_definitions() {
        session.stats.found += 1;
        app_to_ui_tx
            .send(UiEvent::ShowResults { result, chart })
            .await?;
    } else {
        session.stats.not_found += 1;
        app_to_ui_tx
            .send(UiEvent::NoResults {
                word: result.word,
                chart,
            })
            .await?;
    }

    Ok(())
}

use anyhow::Context;
use kanal::AsyncSender;
use lexis_types::UiEvent;

use crate::session::SearchSession;

pub async fn handle_show_chart(
    session: &SearchSession,
    app_to_ui_tx: &AsyncSender<UiEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(UiEvent::ShowChart(session.chart())).await?;
    Ok(())
}

pub async fn handle_chart_dump(
    session: &SearchSession,
    app_to_ui_tx: &AsyncSender<UiEvent>,
) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&session.chart_document())
        .context("Failed to serialize chart")?;

    app_to_ui_tx.send(UiEvent::ShowJson(json)).await?;
    Ok(())
}

use std::io::Write;
use std::sync::Arc;

use kanal::AsyncReceiver;
use lexis_config::Config;
use lexis_types::UiEvent;
use tokio::sync::RwLock;

pub mod chart;
pub mod definitions;
pub mod state;

use self::chart::Rgb;
use self::state::{PageState, RenderOptions};

/// Render loop writing to stdout until `UiEvent::Close` or the channel closes
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<UiEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let options = {
        let config = config.read().await;
        let color = if atty::is(atty::Stream::Stdout) {
            Rgb::from_hex(&config.chart.background_color)
        } else {
            None
        };

        RenderOptions {
            chart_width: config.chart.width,
            color,
        }
    };

    render_events(app_to_ui_rx, &options, std::io::stdout()).await
}

pub async fn render_events<W: Write>(
    app_to_ui_rx: AsyncReceiver<UiEvent>,
    options: &RenderOptions,
    mut out: W,
) -> anyhow::Result<()> {
    let mut page = PageState::new();

    while let Ok(event) = app_to_ui_rx.recv().await {
        if matches!(event, UiEvent::Close) {
            tracing::debug!("UI closing");
            break;
        }

        if let Some(text) = page.apply(event, options) {
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use lexis_types::ChartPayload;

    use super::*;

    #[tokio::test]
    async fn renders_until_close() {
        let (tx, rx) = kanal::unbounded_async::<UiEvent>();
        tx.send(UiEvent::Loading("xyz".to_string())).await.unwrap();
        tx.send(UiEvent::NoResults {
            word: "xyz".to_string(),
            chart: ChartPayload::default(),
        })
        .await
        .unwrap();
        tx.send(UiEvent::Close).await.unwrap();
        tx.send(UiEvent::ShowJson("ignored".to_string())).await.unwrap();

        let mut out = Vec::new();
        render_events(rx, &RenderOptions::default(), &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Looking up \"xyz\"...\nNo results found for \"xyz\"\n"
        );
    }

    #[tokio::test]
    async fn stops_when_sender_dropped() {
        let (tx, rx) = kanal::unbounded_async::<UiEvent>();
        drop(tx);

        let mut out = Vec::new();
        render_events(rx, &RenderOptions::default(), &mut out)
            .await
            .unwrap();

        assert!(out.is_empty());
    }
}

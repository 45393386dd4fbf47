use std::sync::Arc;

use kanal::AsyncReceiver;
use lexis_config::Config;
use lexis_types::UiEvent;
use tokio::sync::RwLock;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<UiEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    lexis_ui::ui_loop(app_to_ui_rx, config).await
}

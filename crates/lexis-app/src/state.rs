use std::sync::Arc;

use lexis_config::Config;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Print the chart document once input is exhausted
    pub json_on_exit: bool,
}

impl AppState {
    pub fn new(config: Config, json_on_exit: bool) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            json_on_exit,
        }
    }
}

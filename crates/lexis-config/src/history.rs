use serde::{Deserialize, Serialize};

fn default_max_size() -> usize {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of words kept for the frequency chart
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
        }
    }
}

use serde::{Deserialize, Serialize};

fn default_border_width() -> u32 {
    2
}

fn default_color() -> String {
    "#2b819b".to_string()
}

fn default_max_bar_thickness() -> u32 {
    50
}

fn default_width() -> usize {
    40
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(default = "default_border_width")]
    pub border_width: u32,
    #[serde(default = "default_color")]
    pub background_color: String,
    #[serde(default = "default_max_bar_thickness")]
    pub max_bar_thickness: u32,
    #[serde(default = "default_color")]
    pub grid_color: String,
    /// Terminal columns used by the longest bar
    #[serde(default = "default_width")]
    pub width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            border_width: default_border_width(),
            background_color: default_color(),
            max_bar_thickness: default_max_bar_thickness(),
            grid_color: default_color(),
            width: default_width(),
        }
    }
}

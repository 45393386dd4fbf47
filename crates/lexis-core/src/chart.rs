use lexis_config::chart::ChartConfig;
use lexis_types::{
    AxisOptions, ChartDataset, ChartOptions, ChartPayload, ChartPlugins, ChartScales, GridOptions,
    Toggle,
};

use crate::history::SearchHistory;

/// Presentation constants for the frequency chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub border_width: u32,
    pub background_color: String,
    pub max_bar_thickness: u32,
    pub grid_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&ChartConfig::default())
    }
}

impl From<&ChartConfig> for ChartStyle {
    fn from(config: &ChartConfig) -> Self {
        Self {
            border_width: config.border_width,
            background_color: config.background_color.clone(),
            max_bar_thickness: config.max_bar_thickness,
            grid_color: config.grid_color.clone(),
        }
    }
}

/// Project the history into chart data. Labels and values stay index-aligned.
pub fn chart_payload(history: &SearchHistory, style: &ChartStyle) -> ChartPayload {
    ChartPayload {
        labels: history.words().iter().cloned().collect(),
        datasets: vec![ChartDataset {
            data: history.frequencies().iter().copied().collect(),
            border_width: style.border_width,
            background_color: style.background_color.clone(),
            max_bar_thickness: style.max_bar_thickness,
        }],
    }
}

/// Horizontal bars, no title or legend, colored x grid
pub fn chart_options(style: &ChartStyle) -> ChartOptions {
    ChartOptions {
        index_axis: "y".to_string(),
        plugins: ChartPlugins {
            title: Toggle { display: false },
            legend: Toggle { display: false },
        },
        scales: ChartScales {
            x: AxisOptions {
                grid: GridOptions {
                    color: Some(style.grid_color.clone()),
                },
            },
            y: AxisOptions::default(),
        },
    }
}

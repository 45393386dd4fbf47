use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw query typed by the user or passed on the command line
    Search(String),
    /// Re-render the current chart
    ShowChart,
    /// Print the current chart payload as JSON
    DumpChart,
    /// Input is exhausted, finish pending work and stop
    InputClosed,
    Quit,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Loading(String),
    ShowResults {
        result: SearchResult,
        chart: ChartPayload,
    },
    NoResults {
        word: String,
        chart: ChartPayload,
    },
    ShowChart(ChartPayload),
    ShowJson(String),
    Close,
}

/// Outcome of one lookup attempt
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub word: String,
    #[serde(default)]
    pub results: Vec<DefinitionEntry>,
    #[serde(default)]
    pub frequency: Option<f64>,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub syllables: Vec<String>,
}

impl SearchResult {
    pub fn not_found(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// Found with definitions and carries frequency data
    pub fn is_usable(&self) -> bool {
        !self.results.is_empty() && self.frequency.is_some()
    }

    pub fn has_definitions(&self) -> bool {
        !self.results.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionEntry {
    pub definition: String,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub type_of: Vec<String>,
}

/// Bar chart data in the shape chart.js consumes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartPayload {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartPayload {
    pub fn data(&self) -> &[f64] {
        self.datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub data: Vec<f64>,
    pub border_width: u32,
    pub background_color: String,
    pub max_bar_thickness: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub index_axis: String,
    pub plugins: ChartPlugins,
    pub scales: ChartScales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPlugins {
    pub title: Toggle,
    pub legend: Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Toggle {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisOptions {
    pub grid: GridOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

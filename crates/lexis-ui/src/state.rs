use lexis_types::{ChartPayload, SearchResult, UiEvent};

use crate::chart::{Rgb, render_bar_chart};
use crate::definitions::{render_definitions, render_no_results};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub chart_width: usize,
    /// Bar color, `None` for plain output
    pub color: Option<Rgb>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chart_width: 40,
            color: None,
        }
    }
}

/// What the page currently shows
#[derive(Debug, Default)]
pub struct PageState {
    pub searched_word: String,
    pub data: Option<SearchResult>,
    pub search_attempt: bool,
    pub is_loading: bool,
    pub chart: ChartPayload,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from a backend event and return the text to print, if any
    pub fn apply(&mut self, event: UiEvent, options: &RenderOptions) -> Option<String> {
        match event {
            UiEvent::Loading(word) => {
                self.is_loading = true;
                Some(format!("Looking up \"{}\"...\n", word))
            }
            UiEvent::ShowResults { result, chart } => {
                self.finish(result.word.clone(), Some(result), chart);
                Some(self.render(options))
            }
            UiEvent::NoResults { word, chart } => {
                self.finish(word, None, chart);
                Some(self.render(options))
            }
            UiEvent::ShowChart(chart) => {
                self.chart = chart;
                Some(self.render_chart(options))
            }
            UiEvent::ShowJson(json) => Some(format!("{}\n", json)),
            UiEvent::Close => None,
        }
    }

    fn finish(&mut self, word: String, data: Option<SearchResult>, chart: ChartPayload) {
        self.is_loading = false;
        self.search_attempt = true;
        self.searched_word = word;
        self.data = data;
        self.chart = chart;
    }

    /// Definitions and chart when the last search found something,
    /// otherwise the no-results message once a search was attempted
    pub fn render(&self, options: &RenderOptions) -> String {
        if self.is_loading {
            return String::new();
        }

        match &self.data {
            Some(data) if data.has_definitions() => {
                let mut out = render_definitions(data);
                out.push('\n');
                out.push_str(&self.render_chart(options));
                out
            }
            _ if self.search_attempt => render_no_results(&self.searched_word),
            _ => String::new(),
        }
    }

    pub fn render_chart(&self, options: &RenderOptions) -> String {
        if self.chart.is_empty() {
            return "No word frequencies to compare yet\n".to_string();
        }

        render_bar_chart(&self.chart, options.chart_width, options.color)
    }
}

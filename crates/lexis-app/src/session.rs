use lexis_config::Config;
use lexis_core::{
    ChartStyle, DefaultPreprocessor, Preprocessor, RecordOutcome, SearchHistory, chart_options,
    chart_payload,
};
use lexis_types::{ChartOptions, ChartPayload, SearchResult};
use serde::Serialize;

use crate::status::LookupStats;

/// Chart data plus render options, as printed by `--json` and `:json`
#[derive(Debug, Serialize)]
pub struct ChartDocument {
    pub data: ChartPayload,
    pub options: ChartOptions,
}

/// State owned by the event loop for one run of the program
pub struct SearchSession {
    history: SearchHistory,
    style: ChartStyle,
    preprocessor: DefaultPreprocessor,
    pub stats: LookupStats,
}

impl SearchSession {
    pub fn new(config: &Config) -> Self {
        Self {
            history: SearchHistory::with_max_size(config.history.max_size),
            style: ChartStyle::from(&config.chart),
            preprocessor: DefaultPreprocessor,
            stats: LookupStats::default(),
        }
    }

    /// Normalized query, `None` when there is nothing to search for
    pub fn prepare_query(&self, raw: &str) -> Option<String> {
        let query = self.preprocessor.process(raw);
        (!query.is_empty()).then_some(query)
    }

    /// Update the history and derive the chart from its new state
    pub fn record(&mut self, result: &SearchResult) -> (RecordOutcome, ChartPayload) {
        let outcome = self.history.record_search(result);
        (outcome, self.chart())
    }

    pub fn chart(&self) -> ChartPayload {
        chart_payload(&self.history, &self.style)
    }

    pub fn chart_document(&self) -> ChartDocument {
        ChartDocument {
            data: self.chart(),
            options: chart_options(&self.style),
        }
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }
}

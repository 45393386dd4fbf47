pub mod chart;
pub mod history;
pub mod preprocess;

pub use chart::{ChartStyle, chart_options, chart_payload};
pub use history::{RecordOutcome, SearchHistory};
pub use preprocess::{DefaultPreprocessor, Preprocessor};

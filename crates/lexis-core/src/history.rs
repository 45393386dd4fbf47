//! Bounded recency buffer of looked-up words and their frequencies.
//!
//! Words and frequencies are kept as two parallel sequences, oldest first.
//! Both always have the same length and never hold more than `max_size`
//! entries once an update returns.

use std::collections::VecDeque;

use lexis_types::SearchResult;

pub const DEFAULT_MAX_SIZE: usize = 10;

/// What `record_search` did with a result
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// Not found or missing frequency data
    Skipped,
    /// Word is already tracked, window left as is
    Duplicate,
    Appended,
    /// Appended and the oldest word was dropped
    Evicted { word: String },
}

impl RecordOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, RecordOutcome::Appended | RecordOutcome::Evicted { .. })
    }
}

#[derive(Debug, Clone)]
pub struct SearchHistory {
    words: VecDeque<String>,
    frequencies: VecDeque<f64>,
    max_size: usize,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_MAX_SIZE)
    }

    /// A capacity of zero is raised to one
    pub fn with_max_size(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            words: VecDeque::with_capacity(max_size + 1),
            frequencies: VecDeque::with_capacity(max_size + 1),
            max_size,
        }
    }

    /// Track the word of a successful lookup.
    ///
    /// Results without definitions or without a frequency are ignored. A word
    /// that is already tracked keeps its position and its first frequency.
    pub fn record_search(&mut self, result: &SearchResult) -> RecordOutcome {
        let Some(frequency) = result.frequency.filter(|_| result.is_usable()) else {
            tracing::debug!("'{}' has no definitions or frequency, skipping", result.word);
            return RecordOutcome::Skipped;
        };

        if self.contains(&result.word) {
            tracing::debug!("'{}' already tracked", result.word);
            return RecordOutcome::Duplicate;
        }

        self.words.push_back(result.word.clone());
        self.frequencies.push_back(frequency);

        if self.words.len() > self.max_size {
            self.frequencies.pop_front();
            if let Some(word) = self.words.pop_front() {
                tracing::debug!("History full, evicted '{}'", word);
                return RecordOutcome::Evicted { word };
            }
        }

        RecordOutcome::Appended
    }

    pub fn words(&self) -> &VecDeque<String> {
        &self.words
    }

    pub fn frequencies(&self) -> &VecDeque<f64> {
        &self.frequencies
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use lexis_types::DefinitionEntry;

    use super::*;

    fn found(word: &str, frequency: f64) -> SearchResult {
        SearchResult {
            word: word.to_string(),
            results: vec![DefinitionEntry {
                definition: format!("definition of {word}"),
                ..Default::default()
            }],
            frequency: Some(frequency),
            ..Default::default()
        }
    }

    fn assert_paired(history: &SearchHistory) {
        assert_eq!(history.words().len(), history.frequencies().len());
        assert!(history.len() <= history.max_size());
    }

    #[test]
    fn first_word_is_appended() {
        let mut history = SearchHistory::new();

        let outcome = history.record_search(&found("cat", 5.0));

        assert_eq!(outcome, RecordOutcome::Appended);
        assert_eq!(*history.words(), ["cat"]);
        assert_eq!(*history.frequencies(), [5.0]);
    }

    #[test]
    fn new_word_goes_last() {
        let mut history = SearchHistory::new();
        history.record_search(&found("cat", 5.0));

        history.record_search(&found("dog", 3.0));

        assert_eq!(*history.words(), ["cat", "dog"]);
        assert_eq!(*history.frequencies(), [5.0, 3.0]);
    }

    #[test]
    fn duplicate_keeps_first_frequency_and_position() {
        let mut history = SearchHistory::new();
        history.record_search(&found("cat", 5.0));
        history.record_search(&found("dog", 3.0));

        let outcome = history.record_search(&found("cat", 99.0));

        assert_eq!(outcome, RecordOutcome::Duplicate);
        assert!(!outcome.changed());
        assert_eq!(*history.words(), ["cat", "dog"]);
        assert_eq!(*history.frequencies(), [5.0, 3.0]);
    }

    #[test]
    fn duplicate_match_is_case_sensitive() {
        let mut history = SearchHistory::new();
        history.record_search(&found("cat", 5.0));

        history.record_search(&found("Cat", 5.0));

        assert_eq!(history.len(), 2);
    }

    #[test]
    fn eleventh_word_evicts_the_oldest() {
        let mut history = SearchHistory::new();
        for i in 1..=10 {
            history.record_search(&found(&format!("w{i}"), i as f64));
        }
        assert_eq!(history.len(), 10);

        let outcome = history.record_search(&found("w11", 1.0));

        assert_eq!(
            outcome,
            RecordOutcome::Evicted {
                word: "w1".to_string()
            }
        );
        assert_eq!(history.len(), 10);
        assert!(!history.contains("w1"));
        let expected: Vec<String> = (2..=11).map(|i| format!("w{i}")).collect();
        assert_eq!(*history.words(), expected);
        assert_eq!(history.frequencies().front(), Some(&2.0));
        assert_eq!(history.frequencies().back(), Some(&1.0));
    }

    #[test]
    fn stays_full_once_capacity_is_reached() {
        let mut history = SearchHistory::with_max_size(3);
        for i in 0..20 {
            history.record_search(&found(&format!("w{i}"), i as f64));
            assert_paired(&history);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(*history.words(), ["w17", "w18", "w19"]);
        assert_eq!(*history.frequencies(), [17.0, 18.0, 19.0]);
    }

    #[test]
    fn unusable_results_never_change_the_window() {
        let mut history = SearchHistory::new();
        history.record_search(&found("cat", 5.0));

        let no_definitions = SearchResult {
            word: "xyz".to_string(),
            results: vec![],
            frequency: Some(2.0),
            ..Default::default()
        };
        let mut no_frequency = found("dog", 1.0);
        no_frequency.frequency = None;

        assert_eq!(history.record_search(&no_definitions), RecordOutcome::Skipped);
        assert_eq!(history.record_search(&no_frequency), RecordOutcome::Skipped);
        assert_eq!(
            history.record_search(&SearchResult::not_found("xyz")),
            RecordOutcome::Skipped
        );

        assert_eq!(*history.words(), ["cat"]);
        assert_eq!(*history.frequencies(), [5.0]);
    }

    #[test]
    fn unusable_result_on_empty_window() {
        let mut history = SearchHistory::new();

        history.record_search(&SearchResult::not_found("xyz"));

        assert!(history.is_empty());
        assert!(history.frequencies().is_empty());
    }

    #[test]
    fn zero_frequency_is_still_defined() {
        let mut history = SearchHistory::new();

        assert_eq!(history.record_search(&found("qwerty", 0.0)), RecordOutcome::Appended);
        assert_eq!(*history.frequencies(), [0.0]);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut history = SearchHistory::with_max_size(0);
        history.record_search(&found("cat", 5.0));
        history.record_search(&found("dog", 3.0));

        assert_eq!(history.max_size(), 1);
        assert_eq!(*history.words(), ["dog"]);
    }

    #[test]
    fn full_window_ignores_duplicates_and_unusable_results() {
        let mut history = SearchHistory::new();
        for i in 1..=10 {
            history.record_search(&found(&format!("w{i}"), i as f64));
        }
        let words_before = history.words().clone();
        let frequencies_before = history.frequencies().clone();

        let mut no_frequency = found("fresh", 1.0);
        no_frequency.frequency = None;

        assert_eq!(history.record_search(&found("w5", 42.0)), RecordOutcome::Duplicate);
        assert_eq!(history.record_search(&no_frequency), RecordOutcome::Skipped);
        assert_eq!(
            history.record_search(&SearchResult::not_found("xyz")),
            RecordOutcome::Skipped
        );

        assert_eq!(history.len(), 10);
        assert_eq!(*history.words(), words_before);
        assert_eq!(*history.frequencies(), frequencies_before);
        assert_paired(&history);
    }

    #[test]
    fn only_appends_count_as_changes() {
        assert!(RecordOutcome::Appended.changed());
        assert!(
            RecordOutcome::Evicted {
                word: "w1".to_string()
            }
            .changed()
        );
        assert!(!RecordOutcome::Duplicate.changed());
        assert!(!RecordOutcome::Skipped.changed());
    }
}

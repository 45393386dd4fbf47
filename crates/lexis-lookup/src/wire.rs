use std::collections::BTreeMap;

use lexis_types::{DefinitionEntry, SearchResult};
use serde::Deserialize;

/// Body of `GET /words/{word}`
#[derive(Debug, Deserialize)]
pub(crate) struct WordResponse {
    #[serde(default)]
    results: Vec<DefinitionEntry>,
    #[serde(default)]
    frequency: Option<Frequency>,
    #[serde(default)]
    pronunciation: Option<Pronunciation>,
    #[serde(default)]
    syllables: Option<Syllables>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Frequency {
    Score(f64),
    Detail { zipf: Option<f64> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Pronunciation {
    Plain(String),
    ByPart(BTreeMap<String, String>),
}

#[derive(Debug, Deserialize)]
struct Syllables {
    #[serde(default)]
    list: Vec<String>,
}

impl WordResponse {
    /// `word` is the query as entered, not the headword the service echoes
    pub(crate) fn into_search_result(self, word: &str) -> SearchResult {
        let frequency = match self.frequency {
            Some(Frequency::Score(score)) => Some(score),
            Some(Frequency::Detail { zipf }) => zipf,
            None => None,
        };

        let pronunciation = match self.pronunciation {
            Some(Pronunciation::Plain(text)) => Some(text),
            Some(Pronunciation::ByPart(mut parts)) => parts
                .remove("all")
                .or_else(|| parts.into_values().next()),
            None => None,
        };

        SearchResult {
            word: word.to_string(),
            results: self.results,
            frequency,
            pronunciation,
            syllables: self.syllables.map(|s| s.list).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str, word: &str) -> SearchResult {
        serde_json::from_str::<WordResponse>(json)
            .unwrap()
            .into_search_result(word)
    }

    #[test]
    fn full_response() {
        let result = parse(
            r#"{
                "word": "cat",
                "results": [
                    {
                        "definition": "feline mammal usually having thick soft fur",
                        "partOfSpeech": "noun",
                        "synonyms": ["true cat"],
                        "typeOf": ["feline", "felid"],
                        "examples": ["the cat sat"]
                    },
                    { "definition": "a spiteful woman gossip", "partOfSpeech": "noun" }
                ],
                "syllables": { "count": 1, "list": ["cat"] },
                "pronunciation": { "all": "kæt" },
                "frequency": 4.73
            }"#,
            "cat",
        );

        assert_eq!(result.word, "cat");
        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results[0].part_of_speech.as_deref(), Some("noun"));
        assert_eq!(result.results[0].type_of, vec!["feline", "felid"]);
        assert_eq!(result.results[0].examples, vec!["the cat sat"]);
        assert!(result.results[1].synonyms.is_empty());
        assert_eq!(result.frequency, Some(4.73));
        assert_eq!(result.pronunciation.as_deref(), Some("kæt"));
        assert_eq!(result.syllables, vec!["cat"]);
        assert!(result.is_usable());
    }

    #[test]
    fn word_without_frequency() {
        let result = parse(
            r#"{ "word": "zyzzyva", "results": [{ "definition": "a weevil" }] }"#,
            "zyzzyva",
        );

        assert!(result.has_definitions());
        assert_eq!(result.frequency, None);
        assert!(!result.is_usable());
    }

    #[test]
    fn word_without_results() {
        let result = parse(r#"{ "word": "hmm", "frequency": 2.1 }"#, "hmm");

        assert!(result.results.is_empty());
        assert!(!result.is_usable());
    }

    #[test]
    fn frequency_detail_object() {
        let result = parse(
            r#"{
                "results": [{ "definition": "x" }],
                "frequency": { "zipf": 3.2, "perMillion": 1.5, "diversity": 0.1 }
            }"#,
            "x",
        );

        assert_eq!(result.frequency, Some(3.2));
    }

    #[test]
    fn plain_and_per_part_pronunciation() {
        let plain = parse(r#"{ "pronunciation": "ə'bʌv" }"#, "above");
        assert_eq!(plain.pronunciation.as_deref(), Some("ə'bʌv"));

        let by_part = parse(
            r#"{ "pronunciation": { "noun": "'rɛkərd", "verb": "rɪ'kɔrd" } }"#,
            "record",
        );
        assert_eq!(by_part.pronunciation.as_deref(), Some("'rɛkərd"));
    }

    #[test]
    fn keeps_query_case() {
        let result = parse(r#"{ "word": "paris", "results": [] }"#, "Paris");
        assert_eq!(result.word, "Paris");
    }
}

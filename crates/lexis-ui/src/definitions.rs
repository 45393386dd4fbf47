use std::fmt::Write;

use lexis_types::SearchResult;

/// Headword line followed by a numbered definition list
pub fn render_definitions(result: &SearchResult) -> String {
    let mut out = String::new();

    let _ = write!(out, "{}", result.word);
    if let Some(pronunciation) = &result.pronunciation {
        let _ = write!(out, "  /{}/", pronunciation);
    }
    if result.syllables.len() > 1 {
        let _ = write!(out, "  ({})", result.syllables.join("·"));
    }
    if let Some(frequency) = result.frequency {
        let _ = write!(out, "  frequency {:.2}", frequency);
    }
    out.push('\n');

    for (i, entry) in result.results.iter().enumerate() {
        let _ = write!(out, "{:>3}. ", i + 1);
        if let Some(pos) = &entry.part_of_speech {
            let _ = write!(out, "({}) ", pos);
        }
        let _ = writeln!(out, "{}", entry.definition);

        if !entry.synonyms.is_empty() {
            let _ = writeln!(out, "     synonyms: {}", entry.synonyms.join(", "));
        }
        for example in &entry.examples {
            let _ = writeln!(out, "     e.g. \"{}\"", example);
        }
    }

    out
}

pub fn render_no_results(word: &str) -> String {
    format!("No results found for \"{}\"\n", word)
}

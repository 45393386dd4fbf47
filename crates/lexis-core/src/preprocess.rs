pub trait Preprocessor {
    /// Default query preprocessor, case is kept as entered
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        text.replace(['\n', '\r'], "").trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_case() {
        assert_eq!(DefaultPreprocessor.process("  Serendipity \n"), "Serendipity");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(DefaultPreprocessor.process(" \t\r\n"), "");
    }

    #[test]
    fn strips_embedded_newlines() {
        assert_eq!(DefaultPreprocessor.process("ca\nt"), "cat");
    }
}

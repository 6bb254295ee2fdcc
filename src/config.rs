use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::lorem::{MAX_UNITS_PER_BLOCK, MIN_TEXT_LENGTH};
use crate::utils::{LoremError, Result};

/// Configuration options for lorem generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoremConfig {
    /// Number of units produced by `chars`, `words`, `sentences` and
    /// `paragraphs` when no count is given
    pub default_count: usize,
    /// Words per sentence when no count is given
    pub words_per_sentence: usize,
    /// Randomize the default words per sentence around `words_per_sentence`
    pub variable_words: bool,
    /// Sentences per paragraph when no count is given
    pub sentences_per_paragraph: usize,
    /// Randomize the default sentences per paragraph
    pub variable_sentences: bool,
    /// Maximum length of `text` when none is given
    pub text_max_length: usize,
    /// Relative weights of random word lengths 1, 2, 3 and 4
    pub word_length_weights: [u32; 4],
    /// Separator between paragraphs returned as text
    pub paragraph_separator: String,
    /// Characters replacing the built-in catalog
    pub catalog: Option<String>,
}

impl Default for LoremConfig {
    fn default() -> Self {
        LoremConfig {
            default_count: 3,
            words_per_sentence: 6,
            variable_words: true,
            sentences_per_paragraph: 3,
            variable_sentences: true,
            text_max_length: 200,
            word_length_weights: [10, 60, 10, 20],
            paragraph_separator: "\n\n".to_string(),
            catalog: None,
        }
    }
}

impl LoremConfig {
    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load a configuration from a JSON string; missing fields take their
    /// default values
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoremConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.word_length_weights.iter().all(|w| *w == 0) {
            return Err(LoremError::InvalidConfig(
                "word_length_weights must not all be zero".to_string(),
            ));
        }
        if !(1..=MAX_UNITS_PER_BLOCK).contains(&self.words_per_sentence) {
            return Err(LoremError::InvalidConfig(format!(
                "words_per_sentence must be between 1 and {}, got {}",
                MAX_UNITS_PER_BLOCK, self.words_per_sentence
            )));
        }
        if !(1..=MAX_UNITS_PER_BLOCK).contains(&self.sentences_per_paragraph) {
            return Err(LoremError::InvalidConfig(format!(
                "sentences_per_paragraph must be between 1 and {}, got {}",
                MAX_UNITS_PER_BLOCK, self.sentences_per_paragraph
            )));
        }
        if self.text_max_length < MIN_TEXT_LENGTH {
            return Err(LoremError::InvalidConfig(format!(
                "text_max_length must be at least {}, got {}",
                MIN_TEXT_LENGTH, self.text_max_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = LoremConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.word_length_weights, [10, 60, 10, 20]);
        assert_eq!(config.text_max_length, 200);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LoremConfig::from_json_str(r#"{ "words_per_sentence": 10 }"#).unwrap();
        assert_eq!(config.words_per_sentence, 10);
        assert_eq!(config.sentences_per_paragraph, 3);
        assert!(config.variable_words);
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = LoremConfig::from_json_str(r#"{ "word_length_weights": [0, 0, 0, 0] }"#)
            .unwrap_err();
        assert!(matches!(err, LoremError::InvalidConfig(_)));

        assert!(LoremConfig::from_json_str(r#"{ "text_max_length": 1 }"#).is_err());
        assert!(LoremConfig::from_json_str(r#"{ "words_per_sentence": 0 }"#).is_err());
        assert!(LoremConfig::from_json_str(r#"{ "sentences_per_paragraph": 0 }"#).is_err());
    }

    #[test]
    fn test_oversized_counts_rejected() {
        let err = LoremConfig::from_json_str(r#"{ "words_per_sentence": 184467440737095516 }"#)
            .unwrap_err();
        assert!(matches!(err, LoremError::InvalidConfig(_)));

        assert!(LoremConfig::from_json_str(r#"{ "sentences_per_paragraph": 1001 }"#).is_err());
        assert!(LoremConfig::from_json_str(r#"{ "words_per_sentence": 1000 }"#).is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let err = LoremConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LoremError::Json(_)));
    }

    #[test]
    fn test_json_file_round_trip() {
        let config = LoremConfig {
            variable_words: false,
            catalog: Some("天地人".to_string()),
            ..LoremConfig::default()
        };

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(config.to_json().unwrap().as_bytes()).unwrap();

        let loaded = LoremConfig::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = LoremConfig::from_json_file("/nonexistent/lorem.json").unwrap_err();
        assert!(matches!(err, LoremError::Io(_)));
    }
}

use std::sync::Arc;

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::WordCatalog;
use crate::config::LoremConfig;
use crate::provider::{Generated, LoremProvider};
use crate::utils::{LoremError, Result, TERMINATOR, char_len};

/// Largest length accepted by `word`
pub const MAX_WORD_LENGTH: usize = 7;
/// Smallest maximum length accepted by `text`
pub const MIN_TEXT_LENGTH: usize = 2;
/// Largest configurable words per sentence or sentences per paragraph
pub const MAX_UNITS_PER_BLOCK: usize = 1000;
/// Locale served by the generator
pub const LOCALE: &str = "zh_CN";

// Random word lengths, paired with `LoremConfig::word_length_weights`.
const RANDOM_WORD_LENGTHS: [usize; 4] = [1, 2, 3, 4];
const FALLBACK_WORD_LENGTH: usize = 2;

/// The unit `text` is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextUnit {
    Word,
    Sentence,
    Paragraph,
}

impl TextUnit {
    /// Pick the unit for a text of at most `max_length` characters
    pub fn for_max_length(max_length: usize) -> Self {
        if max_length < 25 {
            TextUnit::Word
        } else if max_length < 100 {
            TextUnit::Sentence
        } else {
            TextUnit::Paragraph
        }
    }

    /// The next smaller unit, if any
    pub fn smaller(self) -> Option<Self> {
        match self {
            TextUnit::Paragraph => Some(TextUnit::Sentence),
            TextUnit::Sentence => Some(TextUnit::Word),
            TextUnit::Word => None,
        }
    }
}

/// Chinese lorem-ipsum generator.
///
/// Holds a catalog of single characters and composes words, sentences,
/// paragraphs and texts out of them. Generation is stateless: every call
/// draws from the supplied random number generator and nothing is cached.
///
/// # Example
///
/// ```rust
/// use zh_lorem::{Lorem, LoremProvider};
///
/// let lorem = Lorem::new();
/// let text = lorem.text(Some(5)).unwrap();
/// assert!(text.chars().count() <= 5);
/// assert!(text.ends_with('。'));
/// ```
#[derive(Debug, Clone)]
pub struct Lorem {
    catalog: Arc<WordCatalog>,
    config: LoremConfig,
}

impl Lorem {
    /// Create a generator over the built-in catalog with default settings
    pub fn new() -> Self {
        Lorem {
            catalog: WordCatalog::builtin(),
            config: LoremConfig::default(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: LoremConfig) -> Result<Self> {
        LoremBuilder::new().config(config).build()
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &LoremConfig {
        &self.config
    }

    /// One catalog entry chosen uniformly at random
    pub fn char_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.catalog.choose(rng).to_string()
    }

    pub fn chars_with_rng<R: Rng + ?Sized>(&self, nb: Option<usize>, rng: &mut R) -> Vec<String> {
        let nb = nb.unwrap_or(self.config.default_count);
        (0..nb).map(|_| self.char_with_rng(rng)).collect()
    }

    /// A word of `length` catalog entries, or of a random length when
    /// `length` is `None`.
    ///
    /// Random lengths range over 1 to 4, weighted by
    /// `LoremConfig::word_length_weights`. An explicit length must lie in
    /// `1..=MAX_WORD_LENGTH`.
    pub fn word_with_rng<R: Rng + ?Sized>(
        &self,
        length: Option<usize>,
        rng: &mut R,
    ) -> Result<String> {
        match length {
            None => Ok(self.random_word(rng)),
            Some(length) if (1..=MAX_WORD_LENGTH).contains(&length) => {
                Ok(self.word_of_length(length, rng))
            }
            Some(length) => Err(LoremError::InvalidArgument(format!(
                "word length must be between 1 and {}, got {}",
                MAX_WORD_LENGTH, length
            ))),
        }
    }

    pub fn words_with_rng<R: Rng + ?Sized>(&self, nb: Option<usize>, rng: &mut R) -> Vec<String> {
        let nb = nb.unwrap_or(self.config.default_count);
        (0..nb).map(|_| self.random_word(rng)).collect()
    }

    /// Words concatenated without separator and closed with the terminator.
    ///
    /// A count of zero or less yields an empty string. Without a count the
    /// configured default is used, randomized when `variable_words` is set.
    pub fn sentence_with_rng<R: Rng + ?Sized>(
        &self,
        nb_words: Option<isize>,
        rng: &mut R,
    ) -> String {
        let nb_words = match nb_words {
            Some(nb) if nb <= 0 => return String::new(),
            Some(nb) => nb as usize,
            None => self.default_count(
                self.config.words_per_sentence,
                self.config.variable_words,
                rng,
            ),
        };

        let mut sentence: String = (0..nb_words).map(|_| self.random_word(rng)).collect();
        sentence.push(TERMINATOR);
        sentence
    }

    pub fn sentences_with_rng<R: Rng + ?Sized>(
        &self,
        nb: Option<usize>,
        rng: &mut R,
    ) -> Vec<String> {
        let nb = nb.unwrap_or(self.config.default_count);
        (0..nb).map(|_| self.sentence_with_rng(None, rng)).collect()
    }

    /// Sentences concatenated without separator.
    ///
    /// A count of zero or less yields an empty string. Without a count the
    /// configured default is used, randomized when `variable_sentences` is
    /// set.
    pub fn paragraph_with_rng<R: Rng + ?Sized>(
        &self,
        nb_sentences: Option<isize>,
        rng: &mut R,
    ) -> String {
        let nb_sentences = match nb_sentences {
            Some(nb) if nb <= 0 => return String::new(),
            Some(nb) => nb as usize,
            None => self.default_count(
                self.config.sentences_per_paragraph,
                self.config.variable_sentences,
                rng,
            ),
        };

        (0..nb_sentences)
            .map(|_| self.sentence_with_rng(None, rng))
            .collect()
    }

    pub fn paragraphs_with_rng<R: Rng + ?Sized>(
        &self,
        nb: Option<usize>,
        rng: &mut R,
    ) -> Vec<String> {
        let nb = nb.unwrap_or(self.config.default_count);
        (0..nb).map(|_| self.paragraph_with_rng(None, rng)).collect()
    }

    /// A block of at most `max_length` characters ending with the
    /// terminator.
    ///
    /// Short texts are built from words, medium ones from sentences and long
    /// ones from paragraphs. Units are appended while they fit; when not even
    /// one fits, the next smaller unit is used instead.
    pub fn text_with_rng<R: Rng + ?Sized>(
        &self,
        max_length: Option<usize>,
        rng: &mut R,
    ) -> Result<String> {
        let max_length = max_length.unwrap_or(self.config.text_max_length);
        if max_length < MIN_TEXT_LENGTH {
            return Err(LoremError::InvalidArgument(format!(
                "text length must be at least {}, got {}",
                MIN_TEXT_LENGTH, max_length
            )));
        }

        Ok(self.build_text(max_length, rng))
    }

    // `max_length` must be at least MIN_TEXT_LENGTH.
    pub(crate) fn build_text<R: Rng + ?Sized>(&self, max_length: usize, rng: &mut R) -> String {
        let mut unit = TextUnit::for_max_length(max_length);
        let text = loop {
            let text = match unit {
                TextUnit::Word => self.fill_words(max_length, rng),
                TextUnit::Sentence => {
                    self.fill_units(max_length, rng, |rng| self.sentence_with_rng(None, rng))
                }
                TextUnit::Paragraph => {
                    self.fill_units(max_length, rng, |rng| self.paragraph_with_rng(None, rng))
                }
            };

            match unit.smaller() {
                Some(smaller) if text.is_empty() => {
                    debug!(
                        "no {:?} fits in {} characters, falling back to {:?}",
                        unit, max_length, smaller
                    );
                    unit = smaller;
                }
                _ => break text,
            }
        };

        trace!("generated text of {}/{} characters", char_len(&text), max_length);
        text
    }

    pub(crate) fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let length = self.random_word_length(rng);
        self.word_of_length(length, rng)
    }

    fn random_word_length<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let weights = &self.config.word_length_weights;
        let table: [(usize, u32); 4] =
            std::array::from_fn(|i| (RANDOM_WORD_LENGTHS[i], weights[i]));
        table
            .choose_weighted(rng, |(_, weight)| *weight)
            .map(|(length, _)| *length)
            .unwrap_or(FALLBACK_WORD_LENGTH)
    }

    fn word_of_length<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
        (0..length).map(|_| self.catalog.choose(rng)).collect()
    }

    // Faker's randomizeNbElements: nb * [60%, 140%] + 1
    fn default_count<R: Rng + ?Sized>(&self, nb: usize, variable: bool, rng: &mut R) -> usize {
        if variable {
            nb.saturating_mul(rng.gen_range(60..=140usize)) / 100 + 1
        } else {
            nb
        }
    }

    fn fill_units<R, F>(&self, max_length: usize, rng: &mut R, mut next: F) -> String
    where
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> String,
    {
        let mut text = String::new();
        let mut length = 0;
        loop {
            let unit = next(rng);
            let unit_length = char_len(&unit);
            if length + unit_length > max_length {
                break;
            }
            length += unit_length;
            text.push_str(&unit);
        }
        text
    }

    fn fill_words<R: Rng + ?Sized>(&self, max_length: usize, rng: &mut R) -> String {
        // one character is kept for the terminator
        let budget = max_length - 1;
        let mut text = self.fill_units(budget, rng, |rng| self.random_word(rng));
        if text.is_empty() {
            let length = budget.min(RANDOM_WORD_LENGTHS.len());
            text = self.word_of_length(length, rng);
        }
        text.push(TERMINATOR);
        text
    }
}

impl Default for Lorem {
    fn default() -> Self {
        Lorem::new()
    }
}

impl LoremProvider for Lorem {
    fn locale(&self) -> &str {
        LOCALE
    }

    fn char(&self) -> String {
        self.char_with_rng(&mut rand::thread_rng())
    }

    fn chars(&self, nb: Option<usize>, as_text: bool) -> Generated {
        let chars = self.chars_with_rng(nb, &mut rand::thread_rng());
        Generated::from_units(chars, as_text, "")
    }

    fn word(&self, length: Option<usize>) -> Result<String> {
        self.word_with_rng(length, &mut rand::thread_rng())
    }

    fn words(&self, nb: Option<usize>, as_text: bool) -> Generated {
        let words = self.words_with_rng(nb, &mut rand::thread_rng());
        Generated::from_units(words, as_text, "")
    }

    fn sentence(&self, nb_words: Option<isize>) -> String {
        self.sentence_with_rng(nb_words, &mut rand::thread_rng())
    }

    fn sentences(&self, nb: Option<usize>, as_text: bool) -> Generated {
        let sentences = self.sentences_with_rng(nb, &mut rand::thread_rng());
        Generated::from_units(sentences, as_text, "")
    }

    fn paragraph(&self, nb_sentences: Option<isize>) -> String {
        self.paragraph_with_rng(nb_sentences, &mut rand::thread_rng())
    }

    fn paragraphs(&self, nb: Option<usize>, as_text: bool) -> Generated {
        let paragraphs = self.paragraphs_with_rng(nb, &mut rand::thread_rng());
        Generated::from_units(paragraphs, as_text, &self.config.paragraph_separator)
    }

    fn text(&self, max_length: Option<usize>) -> Result<String> {
        self.text_with_rng(max_length, &mut rand::thread_rng())
    }
}

/// Builder for constructing Lorem instances
#[derive(Debug, Default)]
pub struct LoremBuilder {
    config: LoremConfig,
    catalog: Option<WordCatalog>,
}

impl LoremBuilder {
    /// Create a new builder with default config
    pub fn new() -> Self {
        LoremBuilder::default()
    }

    /// Set the configuration
    pub fn config(mut self, config: LoremConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom catalog; takes precedence over `LoremConfig::catalog`
    pub fn catalog(mut self, catalog: WordCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn words_per_sentence(mut self, nb: usize, variable: bool) -> Self {
        self.config.words_per_sentence = nb;
        self.config.variable_words = variable;
        self
    }

    pub fn sentences_per_paragraph(mut self, nb: usize, variable: bool) -> Self {
        self.config.sentences_per_paragraph = nb;
        self.config.variable_sentences = variable;
        self
    }

    pub fn word_length_weights(mut self, weights: [u32; 4]) -> Self {
        self.config.word_length_weights = weights;
        self
    }

    /// Validate the configuration and build the generator
    pub fn build(self) -> Result<Lorem> {
        self.config.validate()?;

        let catalog = match (self.catalog, &self.config.catalog) {
            (Some(catalog), _) => Arc::new(catalog),
            (None, Some(chars)) => Arc::new(WordCatalog::from_chars(chars)?),
            (None, None) => WordCatalog::builtin(),
        };

        debug!(
            "built lorem generator with {} catalog entries, weights {:?}",
            catalog.len(),
            self.config.word_length_weights
        );

        Ok(Lorem {
            catalog,
            config: self.config,
        })
    }
}

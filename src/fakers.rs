//! Fakers plugging the Chinese generator into the `fake` crate.
//!
//! ```rust
//! use fake::Fake;
//! use zh_lorem::fakers::{Sentence, Words};
//!
//! let words: Vec<String> = Words(3..5).fake();
//! assert!((3..5).contains(&words.len()));
//!
//! let sentence: String = Sentence(4..8).fake();
//! assert!(sentence.ends_with('。'));
//! ```
//!
//! Wrapping a faker in [`WithLorem`] generates with a configured [`Lorem`]
//! instead of the default one:
//!
//! ```rust
//! use fake::Fake;
//! use zh_lorem::fakers::{WithLorem, Word};
//! use zh_lorem::{Lorem, LoremConfig};
//!
//! let config = LoremConfig {
//!     catalog: Some("天".to_string()),
//!     ..LoremConfig::default()
//! };
//! let lorem = Lorem::with_config(config).unwrap();
//!
//! let word: String = WithLorem(&lorem, Word).fake();
//! assert!(word.chars().all(|c| c == '天'));
//! ```

use std::ops::Range;
use std::sync::LazyLock;

use fake::Dummy;
use rand::Rng;

use crate::lorem::{Lorem, MIN_TEXT_LENGTH};

static LOREM: LazyLock<Lorem> = LazyLock::new(Lorem::new);

/// A single catalog character
pub struct Char;
/// A list of characters, count drawn from the range
pub struct Chars(pub Range<usize>);
/// A word of random length
pub struct Word;
/// A list of words, count drawn from the range
pub struct Words(pub Range<usize>);
/// A sentence, word count drawn from the range
pub struct Sentence(pub Range<usize>);
/// A list of sentences, count drawn from the range
pub struct Sentences(pub Range<usize>);
/// A paragraph, sentence count drawn from the range
pub struct Paragraph(pub Range<usize>);
/// A list of paragraphs, count drawn from the range
pub struct Paragraphs(pub Range<usize>);
/// A text of at most this many characters; values below 2 are raised to 2
pub struct Text(pub usize);

/// Any faker above, generated with the given generator
pub struct WithLorem<'a, F>(pub &'a Lorem, pub F);

// Empty ranges yield their start.
fn pick_count<R: Rng + ?Sized>(range: &Range<usize>, rng: &mut R) -> usize {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range.clone())
    }
}

fn pick_signed_count<R: Rng + ?Sized>(range: &Range<usize>, rng: &mut R) -> isize {
    isize::try_from(pick_count(range, rng)).unwrap_or(isize::MAX)
}

trait LoremFaker {
    type Output;

    fn generate<R: Rng + ?Sized>(&self, lorem: &Lorem, rng: &mut R) -> Self::Output;
}

impl LoremFaker for Char {
    type Output = String;

    fn generate<R: Rng + ?Sized>(&self, lorem: &Lorem, rng: &mut R) -> String {
        lorem.char_with_rng(rng)
    }
}

impl LoremFaker for Chars {
    type Output = Vec<String>;

    fn generate<R: Rng + ?Sized>(&self, lorem: &Lorem, rng: &mut R) -> Vec<String> {
        let nb = pick_count(&self.0, rng);
        lorem.chars_with_rng(Some(nb), rng)
    }
}

impl LoremFaker for Word {
    type Output = String;

    fn generate<R: Rng + ?Sized>(&self, lorem: &Lorem, rng: &mut R) -> String {
        lorem.random_word(rng)
    }
}

impl LoremFaker for Words {
    type Output = Vec<String>;

    fn generate<R: Rng + ?Sized>(&self, lorem: &Lorem, rng: &mut R) -> Vec<String> {
        let nb = pick_count(&self.0, rng);
        lorem.words_with_rng(Some(nb), rng)
    }
}

impl LoremFaker for Sentence {
    type Output = String;

    fn generate<R: Rng + ?Sized>(&self, lorem: &Lorem, rng: &mut R) -> String {
        let nb_words = pick_signed_count(&self.0, rng);
        lorem.sentence_with_rng(Some(nb_words), rng)
    }
}

impl LoremFaker for Sentences {
    type Output = Vec<String>;

    fn generate<R: Rng + ?Sized>(&self, lorem: &Lorem, rng: &mut R) -> Vec<String> {
        let nb = pick_count(&self.0, rng);
        lorem.sentences_with_rng(Some(nb), rng)
    }
}

impl LoremFaker for Paragraph {
    type Output = String;

    fn generate<R: Rng + ?Sized>(&self, lorem: &Lorem, rng: &mut R) -> String {
        let nb_sentences = pick_signed_count(&self.0, rng);
        lorem.paragraph_with_rng(Some(nb_sentences), rng)
    }
}

impl LoremFaker for Paragraphs {
    type Output = Vec<String>;

    fn generate<R: Rng + ?Sized>(&self, lorem: &Lorem, rng: &mut R) -> Vec<String> {
        let nb = pick_count(&self.0, rng);
        lorem.paragraphs_with_rng(Some(nb), rng)
    }
}

impl LoremFaker for Text {
    type Output = String;

    fn generate<R: Rng + ?Sized>(&self, lorem: &Lorem, rng: &mut R) -> String {
        lorem.build_text(self.0.max(MIN_TEXT_LENGTH), rng)
    }
}

macro_rules! impl_dummy {
    ($($faker:ty => $output:ty),* $(,)?) => {
        $(
            impl Dummy<$faker> for $output {
                fn dummy_with_rng<R: Rng + ?Sized>(config: &$faker, rng: &mut R) -> Self {
                    config.generate(&LOREM, rng)
                }
            }

            impl<'a> Dummy<WithLorem<'a, $faker>> for $output {
                fn dummy_with_rng<R: Rng + ?Sized>(
                    config: &WithLorem<'a, $faker>,
                    rng: &mut R,
                ) -> Self {
                    config.1.generate(config.0, rng)
                }
            }
        )*
    };
}

impl_dummy! {
    Char => String,
    Chars => Vec<String>,
    Word => String,
    Words => Vec<String>,
    Sentence => String,
    Sentences => Vec<String>,
    Paragraph => String,
    Paragraphs => Vec<String>,
    Text => String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorem::LoremBuilder;
    use crate::utils::{TERMINATOR, char_len};
    use crate::WordCatalog;
    use fake::Fake;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_char_and_word() {
        let c: String = Char.fake();
        assert!(LOREM.catalog().contains(&c));

        let word: String = Word.fake();
        assert!((1..=4).contains(&char_len(&word)));
        assert!(LOREM.catalog().is_composed_of(&word));
    }

    #[test]
    fn test_counts_within_range() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let chars: Vec<String> = Chars(2..5).fake_with_rng(&mut rng);
            assert!((2..5).contains(&chars.len()));

            let sentences: Vec<String> = Sentences(1..3).fake_with_rng(&mut rng);
            assert!((1..3).contains(&sentences.len()));
            assert!(sentences.iter().all(|s| s.ends_with(TERMINATOR)));

            let paragraphs: Vec<String> = Paragraphs(1..2).fake_with_rng(&mut rng);
            assert_eq!(paragraphs.len(), 1);
        }
    }

    #[test]
    fn test_empty_ranges() {
        let words: Vec<String> = Words(0..0).fake();
        assert!(words.is_empty());

        let sentence: String = Sentence(0..0).fake();
        assert_eq!(sentence, "");

        let paragraph: String = Paragraph(2..2).fake();
        assert_eq!(paragraph.matches(TERMINATOR).count(), 2);
    }

    #[test]
    fn test_text_is_clamped() {
        let text: String = Text(0).fake();
        assert_eq!(char_len(&text), 2);
        assert!(text.ends_with(TERMINATOR));

        let text: String = Text(60).fake();
        assert!(char_len(&text) <= 60);
        assert!(text.ends_with(TERMINATOR));
    }

    #[test]
    fn test_with_configured_lorem() {
        let lorem = LoremBuilder::new()
            .catalog(WordCatalog::from_chars("山水").unwrap())
            .word_length_weights([0, 0, 0, 1])
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let word: String = WithLorem(&lorem, Word).fake_with_rng(&mut rng);
        assert_eq!(char_len(&word), 4);
        assert!(lorem.catalog().is_composed_of(&word));

        let words: Vec<String> = WithLorem(&lorem, Words(3..4)).fake_with_rng(&mut rng);
        assert_eq!(words.len(), 3);
        assert!(words.iter().all(|w| char_len(w) == 4));

        let text: String = WithLorem(&lorem, Text(1)).fake_with_rng(&mut rng);
        assert_eq!(char_len(&text), 2);
        assert!(lorem.catalog().is_composed_of(text.trim_end_matches(TERMINATOR)));
    }
}

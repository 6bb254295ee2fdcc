use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::lorem::Lorem;
use crate::utils::{LoremError, OptionExt, Result};

/// Output of the collection operations: a list of units, or the units
/// joined into one string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    List(Vec<String>),
    Text(String),
}

impl Generated {
    /// Wrap `units` as a list, or join them with `separator` when `as_text`
    pub fn from_units(units: Vec<String>, as_text: bool, separator: &str) -> Self {
        if as_text {
            Generated::Text(units.join(separator))
        } else {
            Generated::List(units)
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Generated::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Generated::Text(text) => Some(text),
            Generated::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Generated::List(units) => Some(units),
            Generated::Text(_) => None,
        }
    }

    /// Flatten into lines: a list yields its units, a text yields itself
    pub fn into_list(self) -> Vec<String> {
        match self {
            Generated::List(units) => units,
            Generated::Text(text) => vec![text],
        }
    }
}

/// Names of the operations a provider exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formatter {
    Char,
    Chars,
    Word,
    Words,
    Sentence,
    Sentences,
    Paragraph,
    Paragraphs,
    Text,
}

impl Formatter {
    pub const ALL: [Formatter; 9] = [
        Formatter::Char,
        Formatter::Chars,
        Formatter::Word,
        Formatter::Words,
        Formatter::Sentence,
        Formatter::Sentences,
        Formatter::Paragraph,
        Formatter::Paragraphs,
        Formatter::Text,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Formatter::Char => "char",
            Formatter::Chars => "chars",
            Formatter::Word => "word",
            Formatter::Words => "words",
            Formatter::Sentence => "sentence",
            Formatter::Sentences => "sentences",
            Formatter::Paragraph => "paragraph",
            Formatter::Paragraphs => "paragraphs",
            Formatter::Text => "text",
        }
    }
}

impl FromStr for Formatter {
    type Err = LoremError;

    fn from_str(s: &str) -> Result<Self> {
        Formatter::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| LoremError::UnknownFormatter(s.to_string()))
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The operations a lorem provider offers to a fake-data host.
///
/// `None` arguments select the provider's defaults.
pub trait LoremProvider: Send + Sync + fmt::Debug {
    /// Locale this provider generates text for
    fn locale(&self) -> &str;

    fn char(&self) -> String;

    fn chars(&self, nb: Option<usize>, as_text: bool) -> Generated;

    /// Fails when `length` is outside the accepted range
    fn word(&self, length: Option<usize>) -> Result<String>;

    fn words(&self, nb: Option<usize>, as_text: bool) -> Generated;

    /// Empty for counts of zero or less
    fn sentence(&self, nb_words: Option<isize>) -> String;

    fn sentences(&self, nb: Option<usize>, as_text: bool) -> Generated;

    /// Empty for counts of zero or less
    fn paragraph(&self, nb_sentences: Option<isize>) -> String;

    fn paragraphs(&self, nb: Option<usize>, as_text: bool) -> Generated;

    /// Fails when `max_length` is too small to hold any text
    fn text(&self, max_length: Option<usize>) -> Result<String>;

    /// Run an operation with its default arguments
    fn format(&self, formatter: Formatter) -> Result<Generated> {
        let generated = match formatter {
            Formatter::Char => Generated::Text(self.char()),
            Formatter::Chars => self.chars(None, false),
            Formatter::Word => Generated::Text(self.word(None)?),
            Formatter::Words => self.words(None, false),
            Formatter::Sentence => Generated::Text(self.sentence(None)),
            Formatter::Sentences => self.sentences(None, false),
            Formatter::Paragraph => Generated::Text(self.paragraph(None)),
            Formatter::Paragraphs => self.paragraphs(None, false),
            Formatter::Text => Generated::Text(self.text(None)?),
        };
        Ok(generated)
    }

    /// Run an operation looked up by name
    fn format_by_name(&self, name: &str) -> Result<Generated> {
        self.format(name.parse()?)
    }
}

/// Registry of providers keyed by locale
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<(String, Arc<dyn LoremProvider>)>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ProviderRegistry {
            providers: Vec::new(),
        }
    }

    /// Register a provider under its locale, replacing any previous one
    pub fn register<P: LoremProvider + 'static>(&mut self, provider: P) -> &mut Self {
        let locale = provider.locale().to_string();
        self.providers.retain(|(l, _)| *l != locale);
        self.providers.push((locale, Arc::new(provider)));
        self
    }

    /// Get a provider by locale
    pub fn get(&self, locale: &str) -> Option<Arc<dyn LoremProvider>> {
        self.providers
            .iter()
            .find(|(l, _)| l == locale)
            .map(|(_, p)| Arc::clone(p))
    }

    /// Like `get`, failing for unknown locales
    pub fn resolve(&self, locale: &str) -> Result<Arc<dyn LoremProvider>> {
        self.get(locale).ok_or_locale_err(|| locale.to_string())
    }

    /// Get a list of all registered locales
    pub fn locales(&self) -> Vec<String> {
        self.providers.iter().map(|(l, _)| l.clone()).collect()
    }
}

/// Create a registry holding the built-in Chinese provider
pub fn default_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.register(Lorem::new());
    registry
}

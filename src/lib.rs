//! zh-lorem generates Chinese lorem-ipsum text for fake data.
//!
//! Words are one to four characters drawn from a fixed catalog of common
//! Simplified Chinese characters, sentences are words closed with a
//! full-width period (`。`), and paragraphs are runs of sentences. Nothing
//! is separated by whitespace.
//!
//! # Example
//!
//! ```rust
//! use zh_lorem::{Lorem, LoremProvider};
//!
//! let lorem = Lorem::new();
//!
//! let word = lorem.word(Some(2)).unwrap();
//! assert_eq!(word.chars().count(), 2);
//!
//! let sentence = lorem.sentence(Some(5));
//! assert!(sentence.ends_with('。'));
//!
//! let words = lorem.words(Some(3), false);
//! assert_eq!(words.as_list().unwrap().len(), 3);
//! ```

pub mod catalog;
pub mod config;
pub mod fakers;
pub mod lorem;
pub mod provider;
pub mod utils;

pub use catalog::WordCatalog;
pub use config::LoremConfig;
pub use lorem::{Lorem, LoremBuilder, TextUnit};
pub use provider::{Formatter, Generated, LoremProvider, ProviderRegistry, default_registry};
pub use utils::{LoremError, Result, TERMINATOR};

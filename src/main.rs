use clap::{Args, Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use zh_lorem::{Generated, Lorem, LoremConfig};

/// Chinese lorem-ipsum generator
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of times to run the command
    #[arg(short, long, default_value_t = 1, global = true)]
    repeat: usize,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the commands producing several units
#[derive(Args)]
struct ListArgs {
    /// Number of units to generate
    #[arg(short, long)]
    nb: Option<usize>,

    /// Join the units into a single text
    #[arg(long)]
    as_text: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// A single character
    Char,
    /// Several characters
    Chars(ListArgs),
    /// A word of one to seven characters
    Word {
        /// Exact number of characters
        #[arg(short, long)]
        length: Option<usize>,
    },
    /// Several words
    Words(ListArgs),
    /// A sentence closed with a full-width period
    Sentence {
        /// Number of words; zero or less gives an empty sentence
        #[arg(short, long, allow_negative_numbers = true)]
        nb_words: Option<isize>,
    },
    /// Several sentences
    Sentences(ListArgs),
    /// A paragraph of sentences
    Paragraph {
        /// Number of sentences; zero or less gives an empty paragraph
        #[arg(short, long, allow_negative_numbers = true)]
        nb_sentences: Option<isize>,
    },
    /// Several paragraphs
    Paragraphs(ListArgs),
    /// A text of bounded length
    Text {
        /// Maximum number of characters
        #[arg(short, long)]
        max_length: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let lorem = match &cli.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            Lorem::with_config(LoremConfig::from_json_file(path)?)?
        }
        None => Lorem::new(),
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..cli.repeat {
        for line in run(&lorem, &cli.command, &mut rng)?.into_list() {
            println!("{}", line);
        }
    }

    Ok(())
}

fn run<R: Rng>(lorem: &Lorem, command: &Commands, rng: &mut R) -> zh_lorem::Result<Generated> {
    let generated = match command {
        Commands::Char => Generated::Text(lorem.char_with_rng(rng)),
        Commands::Chars(args) => {
            Generated::from_units(lorem.chars_with_rng(args.nb, rng), args.as_text, "")
        }
        Commands::Word { length } => Generated::Text(lorem.word_with_rng(*length, rng)?),
        Commands::Words(args) => {
            Generated::from_units(lorem.words_with_rng(args.nb, rng), args.as_text, "")
        }
        Commands::Sentence { nb_words } => {
            Generated::Text(lorem.sentence_with_rng(*nb_words, rng))
        }
        Commands::Sentences(args) => {
            Generated::from_units(lorem.sentences_with_rng(args.nb, rng), args.as_text, "")
        }
        Commands::Paragraph { nb_sentences } => {
            Generated::Text(lorem.paragraph_with_rng(*nb_sentences, rng))
        }
        Commands::Paragraphs(args) => Generated::from_units(
            lorem.paragraphs_with_rng(args.nb, rng),
            args.as_text,
            &lorem.config().paragraph_separator,
        ),
        Commands::Text { max_length } => Generated::Text(lorem.text_with_rng(*max_length, rng)?),
    };
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zh_lorem::{LoremError, TERMINATOR};

    fn run_args(args: &[&str]) -> zh_lorem::Result<Generated> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut rng = StdRng::seed_from_u64(cli.seed.unwrap_or(0));
        run(&Lorem::new(), &cli.command, &mut rng)
    }

    #[test]
    fn test_list_commands() {
        let words = run_args(&["lorem-zh", "words", "--nb", "4"]).unwrap();
        assert_eq!(words.as_list().unwrap().len(), 4);

        let sentences = run_args(&["lorem-zh", "sentences", "-n", "2", "--as-text"]).unwrap();
        let text = sentences.as_text().unwrap();
        assert_eq!(text.matches(TERMINATOR).count(), 2);
        assert!(!text.chars().any(char::is_whitespace));

        let paragraphs = run_args(&["lorem-zh", "paragraphs", "-n", "3", "--as-text"]).unwrap();
        assert_eq!(paragraphs.as_text().unwrap().split("\n\n").count(), 3);
    }

    #[test]
    fn test_single_unit_commands() {
        let word = run_args(&["lorem-zh", "word", "--length", "6"]).unwrap();
        assert_eq!(word.as_text().unwrap().chars().count(), 6);

        let sentence = run_args(&["lorem-zh", "sentence", "--nb-words", "-1"]).unwrap();
        assert_eq!(sentence.as_text(), Some(""));

        let text = run_args(&["lorem-zh", "text", "-m", "10"]).unwrap();
        assert!(text.as_text().unwrap().chars().count() <= 10);
    }

    #[test]
    fn test_invalid_arguments_propagate() {
        assert!(matches!(
            run_args(&["lorem-zh", "word", "--length", "8"]),
            Err(LoremError::InvalidArgument(_))
        ));
        assert!(matches!(
            run_args(&["lorem-zh", "text", "--max-length", "1"]),
            Err(LoremError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let args = ["lorem-zh", "paragraph", "--seed", "9"];
        assert_eq!(run_args(&args).unwrap(), run_args(&args).unwrap());
    }
}

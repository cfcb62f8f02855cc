// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `preview`, `generate` and
// `interactive`, and all their flags.
//
// The question count is range-checked by clap itself, so the
// application layer only ever sees a value in 3..=15.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::application::quiz_use_case::{QuizConfig, DEFAULT_QUESTIONS};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a PDF's text and print the preview
    Preview(PreviewArgs),

    /// Extract a PDF's text and generate quiz questions from it
    Generate(GenerateArgs),

    /// Load PDFs and generate question sets in a prompt loop
    Interactive(InteractiveArgs),
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Path to the .pdf file
    pub pdf: PathBuf,

    /// Print the whole extracted text instead of the preview
    #[arg(long)]
    pub full: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the .pdf file
    pub pdf: PathBuf,

    /// Number of questions to generate (3 to 15)
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_QUESTIONS,
        value_parser = clap::value_parser!(u16).range(3..=15)
    )]
    pub count: u16,

    /// Seed for reproducible questions
    #[arg(long)]
    pub seed: Option<u64>,

    /// CoNLL-U treebank used to extend the tagger's vocabulary
    #[arg(long)]
    pub treebank: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip printing the extracted-text preview
    #[arg(long)]
    pub no_preview: bool,
}

impl From<&GenerateArgs> for QuizConfig {
    fn from(a: &GenerateArgs) -> Self {
        QuizConfig {
            count:    a.count,
            seed:     a.seed,
            treebank: a.treebank.clone(),
            ..QuizConfig::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Seed for reproducible questions
    #[arg(long)]
    pub seed: Option<u64>,

    /// CoNLL-U treebank used to extend the tagger's vocabulary
    #[arg(long)]
    pub treebank: Option<PathBuf>,

    /// Load this PDF first instead of asking for a path
    #[arg(long)]
    pub pdf: Option<PathBuf>,
}

impl From<&InteractiveArgs> for QuizConfig {
    fn from(a: &InteractiveArgs) -> Self {
        QuizConfig {
            seed:     a.seed,
            treebank: a.treebank.clone(),
            ..QuizConfig::default()
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["pdf-quiz", "generate", "notes.pdf"]).unwrap();
        let Commands::Generate(args) = cli.command else { panic!("wrong command") };
        assert_eq!(args.count, 5);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.no_preview);

        let config = QuizConfig::from(&args);
        assert_eq!(config.count, 5);
        assert_eq!(config.preview_chars, 1000);
    }

    #[test]
    fn test_count_bounds() {
        for ok in ["3", "15"] {
            assert!(Cli::try_parse_from(["pdf-quiz", "generate", "a.pdf", "-n", ok]).is_ok());
        }
        for bad in ["2", "16", "five"] {
            assert!(Cli::try_parse_from(["pdf-quiz", "generate", "a.pdf", "-n", bad]).is_err());
        }
    }

    #[test]
    fn test_interactive_args_into_config() {
        let cli = Cli::try_parse_from(["pdf-quiz", "interactive", "--seed", "42"]).unwrap();
        let Commands::Interactive(args) = cli.command else { panic!("wrong command") };
        let config = QuizConfig::from(&args);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.count, 5);
    }
}

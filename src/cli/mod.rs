// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction, parsed with clap.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `preview`     — extract a PDF and show its text
//   2. `generate`    — extract a PDF and print a quiz
//   3. `interactive` — upload / generate in a prompt loop
//
// Quiz output goes to stdout; logs go to stderr.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

/// Terminal and JSON formatting of previews and questions
pub mod render;

/// The interactive prompt loop
pub mod session;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use commands::{Commands, GenerateArgs, InteractiveArgs, OutputFormat, PreviewArgs};

use crate::application::quiz_use_case::{load_document, QuizConfig, QuizUseCase};
use crate::data::loader::PdfLoader;
use crate::data::preview::preview;
use crate::infra::model_store;
use session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "pdf-quiz",
    version = "0.1.0",
    about = "Extract the text of a PDF and generate quiz questions from it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Preview(args)     => run_preview(args),
            Commands::Generate(args)    => run_generate(args),
            Commands::Interactive(args) => run_interactive(args),
        }
    }
}

fn run_preview(args: PreviewArgs) -> Result<()> {
    let doc = load_document(&PdfLoader::new(), &args.pdf)?;
    let mut out = io::stdout().lock();

    if args.full {
        writeln!(out, "{}", doc.text)?;
    } else {
        let config = QuizConfig::default();
        render::write_preview(&mut out, &doc, &preview(&doc.text, config.preview_chars))?;
    }
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = QuizConfig::from(&args);
    let model  = model_store::init(config.treebank.as_deref())?;
    let mut quiz = QuizUseCase::new(model, config);

    let doc = quiz.load(&args.pdf)?;
    let mut out = io::stdout().lock();

    match args.format {
        OutputFormat::Json => {
            let report = quiz.report(&doc);
            render::write_json(&mut out, &report)?;
        }
        OutputFormat::Text => {
            if !args.no_preview {
                render::write_preview(&mut out, &doc, &quiz.preview(&doc))?;
            }
            let questions = quiz.generate(&doc, args.count);
            writeln!(out, "Questions Generated Successfully!")?;
            render::write_questions(&mut out, &questions)?;
        }
    }
    Ok(())
}

fn run_interactive(args: InteractiveArgs) -> Result<()> {
    let config = QuizConfig::from(&args);
    let model  = model_store::init(config.treebank.as_deref())?;
    let quiz   = QuizUseCase::new(model, config);

    let stdin = io::stdin();
    let mut session = Session::new(quiz, stdin.lock(), io::stdout().lock());
    if let Some(pdf) = &args.pdf {
        session.open(pdf)?;
    }
    session.run()
}

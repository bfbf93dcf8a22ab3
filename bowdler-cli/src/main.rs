//! Command-line frontend for the bowdler profanity engine

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bowdler_engine::{
    BuiltinDictionaries, ContextConfig, DictionaryProvider, ProfanityEngine,
    DEFAULT_WORD_PLACEHOLDER,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bowdler",
    version,
    about = "Detect and redact profanity in multilingual text"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Exit non-zero when the text contains profanity
    Check(CheckArgs),
    /// Print the text with profanity redacted
    Clean(CleanArgs),
    /// Print the full detection result as JSON
    Detect(CheckArgs),
    /// List available language dictionaries
    Languages,
}

#[derive(Args)]
struct CheckArgs {
    /// Text to inspect; reads stdin when omitted
    text: Option<String>,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Args)]
struct CleanArgs {
    /// Text to redact; reads stdin when omitted
    text: Option<String>,

    /// Redaction placeholder (first char is used)
    #[arg(short, long, default_value = "*")]
    placeholder: String,

    /// Replace whole words with this token instead of per-char redaction
    #[arg(long, value_name = "TOKEN", num_args = 0..=1, require_equals = true,
          default_missing_value = DEFAULT_WORD_PLACEHOLDER)]
    words: Option<String>,

    #[command(flatten)]
    engine: EngineArgs,
}

/// Options shared by every scanning subcommand
#[derive(Args)]
struct EngineArgs {
    /// Additional language dictionaries to load
    #[arg(short, long, value_name = "LANGUAGE")]
    language: Vec<String>,

    /// Disable the leet-speak normalization pass
    #[arg(long)]
    no_leet: bool,

    /// Match case-sensitively
    #[arg(long)]
    case_sensitive: bool,

    /// Require strict separator-class word boundaries
    #[arg(long)]
    strict: bool,

    /// Accept partial-word matches
    #[arg(long)]
    partial: bool,

    /// Enable context-aware false-positive reduction
    #[arg(long)]
    context: bool,

    /// Scan with the Aho-Corasick automaton
    #[arg(long)]
    automaton: bool,
}

impl EngineArgs {
    fn build(&self) -> Result<ProfanityEngine> {
        let mut builder = ProfanityEngine::builder()
            .leet_speak(!self.no_leet)
            .case_sensitive(self.case_sensitive)
            .strict_mode(self.strict)
            .detect_partial_words(self.partial)
            .use_automaton(self.automaton)
            .languages(self.language.iter().cloned());
        if self.context {
            builder = builder.context(ContextConfig::default());
        }
        builder.build().context("failed to build engine")
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Check(args) => {
            let text = read_text(args.text)?;
            let engine = args.engine.build()?;
            if engine.check(&text) {
                println!("profane");
                Ok(ExitCode::from(1))
            } else {
                println!("clean");
                Ok(ExitCode::SUCCESS)
            }
        }
        Command::Clean(args) => {
            let text = read_text(args.text)?;
            let mut engine = args.engine.build()?;
            engine
                .set_placeholder_str(&args.placeholder)
                .context("invalid placeholder")?;
            let cleaned = match &args.words {
                Some(token) => engine.clean_with_placeholder(&text, token),
                None => engine.clean(&text),
            };
            println!("{cleaned}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Detect(args) => {
            let text = read_text(args.text)?;
            let engine = args.engine.build()?;
            let result = engine.detect(&text);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Languages => {
            for language in BuiltinDictionaries.languages() {
                println!("{language}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Positional text, or stdin when omitted
fn read_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer.trim_end_matches('\n').to_string())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

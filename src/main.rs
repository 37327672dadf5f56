//! legal-sentiment: sentence-level sentiment for legal documents.

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand};
use legal_sentiment::core::config::{DEFAULT_MODEL_ID, DEFAULT_REVISION};
use legal_sentiment::core::limit_compute_threads;
use legal_sentiment::AnalyzerConfig;
use std::net::IpAddr;
use std::path::PathBuf;

mod commands;
mod logging;

use commands::{cmd_analyze, cmd_serve};
use logging::init_logging;

const DEFAULT_OUTPUT: &str = "sentiment_analysis_results.csv";

#[derive(Parser)]
#[command(name = "legal-sentiment")]
#[command(about = "Sentence-level sentiment analysis for legal documents")]
struct Cli {
    #[command(flatten)]
    model: ModelArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct ModelArgs {
    /// Hugging Face repository of the FLAN-T5 checkpoint
    #[arg(long, global = true, env = "LEGAL_SENTIMENT_MODEL", default_value = DEFAULT_MODEL_ID)]
    model_id: String,
    /// Git revision (branch, tag, commit hash) of the checkpoint
    #[arg(long, global = true, env = "LEGAL_SENTIMENT_REVISION", default_value = DEFAULT_REVISION)]
    revision: String,
    /// Run the model on CPU even if CUDA is available
    #[arg(
        long,
        global = true,
        env = "LEGAL_SENTIMENT_CPU",
        value_parser = FalseyValueParser::new()
    )]
    cpu: bool,
}

impl ModelArgs {
    fn into_config(self) -> AnalyzerConfig {
        AnalyzerConfig {
            model_id: self.model_id,
            revision: self.revision,
            cpu: self.cpu,
            ..AnalyzerConfig::default()
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a text or CSV file (prompts for the path when omitted)
    Analyze {
        /// Input file; CSV input needs a `text` column
        path: Option<PathBuf>,
        /// Where to write the per-sentence results
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

fn main() -> Result<()> {
    // Before any thread exists.
    limit_compute_threads();
    init_logging();

    let cli = Cli::parse();
    let config = cli.model.into_config();

    match cli.command {
        Some(Command::Analyze { path, output }) => cmd_analyze(config, path, &output)?,
        None => cmd_analyze(config, None, &PathBuf::from(DEFAULT_OUTPUT))?,
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port)?,
    }

    Ok(())
}

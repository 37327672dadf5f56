//! Subcommand implementations.

use anyhow::{Context, Result};
use legal_sentiment::server::{self, AppState};
use legal_sentiment::{Analysis, AnalyzerConfig, LegalSentimentAnalyzer};
use std::io::{BufRead, Write};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

const PROMPT: &str = "Enter the path to the legal document (text or CSV): ";
const PREVIEW_ROWS: usize = 5;

/// Analyze one file and write the per-sentence CSV, talking to the terminal.
pub fn cmd_analyze(config: AnalyzerConfig, path: Option<PathBuf>, output: &Path) -> Result<()> {
    let analyzer = LegalSentimentAnalyzer::from_config(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_analyze(&analyzer, path, output, &mut stdin.lock(), &mut stdout)
        .context("failed to write to the terminal")
}

/// Interactive analysis over arbitrary input and output streams.
///
/// Analysis failures are written as `Error: <message>`; they do not change
/// the exit status. Only I/O errors on `out` are returned.
fn run_analyze<R: BufRead, W: Write>(
    analyzer: &LegalSentimentAnalyzer,
    path: Option<PathBuf>,
    output: &Path,
    input: &mut R,
    out: &mut W,
) -> std::io::Result<()> {
    let path = match path {
        Some(path) => path,
        None => match prompt_for_path(input, out) {
            Ok(path) => path,
            Err(e) => return writeln!(out, "Error: {e}"),
        },
    };

    match analyze_to_csv(analyzer, &path, output) {
        Ok(analysis) => {
            writeln!(out, "\nResults saved to {}", output.display())?;
            writeln!(out, "\n{}", analysis.summary)?;
            writeln!(out, "\nSample Results (first {PREVIEW_ROWS} segments):")?;
            writeln!(out, "{}", analysis.preview(PREVIEW_ROWS))?;
        }
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    out.flush()
}

fn analyze_to_csv(
    analyzer: &LegalSentimentAnalyzer,
    path: &Path,
    output: &Path,
) -> legal_sentiment::Result<Analysis> {
    let analysis = analyzer.process_file(path)?;
    analysis.write_csv(output)?;
    Ok(analysis)
}

fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> std::io::Result<PathBuf> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

/// Run the HTTP API until the process is stopped.
pub fn cmd_serve(config: AnalyzerConfig, host: IpAddr, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let state = AppState::new(LegalSentimentAnalyzer::from_config(config));
    let addr = SocketAddr::new(host, port);
    runtime
        .block_on(server::serve(addr, state))
        .with_context(|| format!("server on {addr} stopped"))
}

mod fetch;
mod model;
mod parser;
mod store;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "teardown_scraper", about = "Teardown scripting API manual to JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the manual, parse it, persist when the version changed
    Run {
        /// Output directory for api.json and version.txt
        #[arg(short, long, default_value = "data")]
        out: PathBuf,
    },
    /// Parse a local copy of the manual (no network)
    Parse {
        /// Path to a saved api.html
        #[arg(short, long)]
        input: PathBuf,
        /// Persist to this directory instead of only printing a summary
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Functions overview table from the persisted output
    Overview {
        /// Directory holding api.json
        #[arg(short, long, default_value = "data")]
        out: PathBuf,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { out } => {
            let html = fetch::fetch_document(fetch::API_URL).await?;
            let doc = parser::parse_document(&html)?;
            summarize(&doc);
            let outcome = store::persist(&out, &doc)?;
            report_outcome(&doc, outcome)
        }
        Commands::Parse { input, out } => {
            let html = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let doc = parser::parse_document(&html)?;
            summarize(&doc);
            match out {
                Some(dir) => {
                    let outcome = store::persist(&dir, &doc)?;
                    report_outcome(&doc, outcome)
                }
                None => Ok(()),
            }
        }
        Commands::Overview { out, limit } => overview(&out, limit),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn summarize(doc: &model::Document) {
    println!(
        "Parsed version {}: {} functions, {} categories.",
        doc.version,
        doc.functions.len(),
        doc.categories.len()
    );
}

fn report_outcome(doc: &model::Document, outcome: store::Outcome) -> Result<()> {
    let changed = outcome == store::Outcome::Written;
    match outcome {
        store::Outcome::Written => println!("Wrote api.json (version {}).", doc.version),
        store::Outcome::Unchanged => {
            println!("Version {} unchanged, nothing written.", doc.version)
        }
    }
    emit_ci_outputs(&doc.version, changed)
}

/// Append version/changed output variables for downstream CI steps when
/// running under GitHub Actions.
fn emit_ci_outputs(version: &str, changed: bool) -> Result<()> {
    use std::io::Write;

    let Ok(path) = std::env::var("GITHUB_OUTPUT") else {
        return Ok(());
    };
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path))?;
    writeln!(file, "version={}", version)?;
    writeln!(file, "changed={}", changed)?;
    Ok(())
}

fn overview(dir: &Path, limit: usize) -> Result<()> {
    let (version, functions) = store::load_functions(dir)?;
    if functions.is_empty() {
        println!("No functions stored.");
        return Ok(());
    }

    println!(
        "{:>3} | {:<28} | {:>4} | {:>4} | {:<7} | {:<40}",
        "#", "Function", "Args", "Rets", "Example", "Description"
    );
    println!("{}", "-".repeat(100));

    for (i, f) in functions.iter().take(limit).enumerate() {
        let desc = truncate(f.description.lines().next().unwrap_or(""), 40);
        let example = if f.examples.is_empty() { "" } else { "yes" };
        println!(
            "{:>3} | {:<28} | {:>4} | {:>4} | {:<7} | {:<40}",
            i + 1,
            truncate(&f.name, 28),
            f.arguments.len(),
            f.returns.len(),
            example,
            desc
        );
    }

    println!("\n{} functions | version {}", functions.len(), version);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

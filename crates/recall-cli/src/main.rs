//! recall — resolve natural-language date references from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Full resolution result as JSON
//! recall resolve "I met Sarah 3 days ago" --reference 2024-03-15
//!
//! # Cleaned text only, for pipelines
//! echo "call them tomorrow about the quote" | recall strip -
//! ```

use std::io::Read;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use recall_engine::{resolve_temporal_reference_str, ResolutionResult};

/// Resolve and strip natural-language date references in text.
#[derive(Parser)]
#[command(
    name = "recall",
    version,
    about = "Resolve natural-language date references against an anchor date"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full resolution result as JSON
    Resolve(InputArgs),
    /// Print only the text with the matched phrase removed
    Strip(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Text to scan; use '-' to read stdin
    text: String,

    /// Anchor date (RFC 3339 or YYYY-MM-DD); defaults to the current UTC date
    #[arg(short, long)]
    reference: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Resolve(args) => {
            let result = run(&args)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Strip(args) => {
            let result = run(&args)?;
            println!("{}", result.cleaned_text);
        }
    }
    Ok(())
}

fn run(args: &InputArgs) -> Result<ResolutionResult> {
    let text = read_text(&args.text)?;
    // The wall clock stays at this outermost edge; the library always takes
    // an explicit reference.
    let reference = match &args.reference {
        Some(r) => r.clone(),
        None => Utc::now().date_naive().format("%Y-%m-%d").to_string(),
    };
    resolve_temporal_reference_str(&text, &reference).context("resolving temporal reference")
}

fn read_text(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf.trim_end_matches('\n').to_string())
    } else {
        Ok(arg.to_string())
    }
}

//! Main entry point for the `mapleads` terminal shell.
//!
//! One-shot `url`/`text` subcommands for scripting, plus an interactive
//! session that accumulates results across extractions and exports them to
//! a spreadsheet.

mod export;
mod interactive;
mod table;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mapleads::ai::GeminiModel;
use mapleads::{ExtractionRequest, Extractor, ModelClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mapleads", about = "Extract business leads from Google Maps listings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract businesses reachable from a Google Maps URL
    Url {
        /// Google Maps URL to extract from
        url: String,

        /// Write the results to an .xlsx file
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,
    },

    /// Extract businesses from text copied off a Maps page
    Text {
        /// File containing the pasted text; reads stdin when omitted
        file: Option<PathBuf>,

        /// Write the results to an .xlsx file
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,
    },

    /// Interactive session: accumulate, review, and export results
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,mapleads=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let model = GeminiModel::from_env().context("failed to configure the Gemini client")?;
    let extractor = Extractor::new(model);

    match cli.command {
        Command::Url { url, export } => {
            run_once(&extractor, ExtractionRequest::Url(url), export).await
        }
        Command::Text { file, export } => {
            let text = read_text(file)?;
            run_once(&extractor, ExtractionRequest::Text(text), export).await
        }
        Command::Interactive => interactive::run(&extractor).await,
    }
}

async fn run_once<M: ModelClient>(
    extractor: &Extractor<M>,
    request: ExtractionRequest,
    export: Option<PathBuf>,
) -> Result<()> {
    let records = extractor.extract(&request).await?;

    if records.is_empty() {
        println!("No business details could be extracted. Try another URL or page of results.");
        return Ok(());
    }

    table::print_records(&records);

    if let Some(path) = export {
        export::write_workbook(&records, &path)?;
        println!("Wrote {} records to {}", records.len(), path.display());
    }

    Ok(())
}

fn read_text(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

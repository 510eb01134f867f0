//! Interactive extraction session.
//!
//! Accumulates results across extractions (most recent first), renders them
//! on demand, exports to a spreadsheet, and clears only behind an explicit
//! confirmation. The menu is disabled for the duration of an in-flight call
//! simply because the loop awaits it; there is no background work.

use std::path::Path;

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Editor, Input, Select};
use mapleads::{ExtractionRequest, Extractor, ModelClient, Session};

use crate::{export, table};

const MENU: [&str; 6] = [
    "Extract from URL",
    "Extract from pasted text",
    "Show results",
    "Export to spreadsheet",
    "Clear all results",
    "Quit",
];

pub async fn run<M: ModelClient>(extractor: &Extractor<M>) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut session = Session::new();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt(format!("{} results accumulated", session.len()))
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let url: String = Input::with_theme(&theme)
                    .with_prompt("Google Maps URL")
                    .interact_text()?;
                run_extraction(extractor, ExtractionRequest::Url(url), &mut session).await;
            }
            1 => {
                let Some(text) = Editor::new().edit("Paste the text copied from Google Maps here")?
                else {
                    continue;
                };
                run_extraction(extractor, ExtractionRequest::Text(text), &mut session).await;
            }
            2 => {
                if session.is_empty() {
                    println!("No results yet.");
                } else {
                    table::print_records(session.results());
                }
            }
            3 => {
                if session.is_empty() {
                    println!("Nothing to export yet.");
                    continue;
                }
                let path: String = Input::with_theme(&theme)
                    .with_prompt("Output file")
                    .default(export::DEFAULT_FILE_NAME.to_string())
                    .interact_text()?;
                export::write_workbook(session.results(), Path::new(&path))?;
                println!(
                    "{}",
                    style(format!("Wrote {} records to {path}", session.len())).green()
                );
            }
            4 => {
                let confirmed = Confirm::with_theme(&theme)
                    .with_prompt("Are you sure you want to clear all extracted data?")
                    .default(false)
                    .interact()?;
                if confirmed {
                    session.clear();
                }
            }
            _ => break,
        }
    }

    Ok(())
}

async fn run_extraction<M: ModelClient>(
    extractor: &Extractor<M>,
    request: ExtractionRequest,
    session: &mut Session,
) {
    match extractor.extract(&request).await {
        Ok(records) if records.is_empty() => {
            println!(
                "{}",
                style("No business details could be extracted. Try the next page of results.")
                    .yellow()
            );
        }
        Ok(records) => {
            println!(
                "{}",
                style(format!("Extracted {} new records", records.len())).green()
            );
            session.prepend(records);
        }
        Err(err) => {
            // A failed call contributes nothing; prior results stay.
            eprintln!("{}", style(format!("Error: {err}")).red());
        }
    }
}

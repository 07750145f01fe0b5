use std::io::Write;

use anyhow::{Context, Result};
use pharmafind_core::parser::TEMPLATE_FILE_NAME;
use pharmafind_core::{InventoryStore, PharmaFind, TEMPLATE};
use tracing::{info, warn};

use crate::commands::Commands;
use crate::output;

/// Run one subcommand against the session, writing user-facing text to `out`.
pub fn run<S: InventoryStore>(
    command: Commands,
    app: &mut PharmaFind<S>,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Upload { file } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let summary = app.upload(&contents)?;
            for skipped in &summary.skipped {
                warn!(
                    "Skipped line {} ({:?}): {}",
                    skipped.line, skipped.reason, skipped.content
                );
            }
            writeln!(
                out,
                "Inventory updated successfully! {} medicines, {} with alternatives.",
                summary.medicines, summary.with_alternatives
            )?;
        }
        Commands::Search { query, json } => {
            let outcome = app.search(&query);
            output::print_search(out, &outcome, json)?;
        }
        Commands::Lookup { name } => match app.lookup(&name) {
            Some(quantity) => writeln!(out, "{name}: {quantity}")?,
            None => writeln!(out, "{name}: unknown")?,
        },
        Commands::Reset => {
            app.reset()?;
            writeln!(out, "Inventory has been reset.")?;
        }
        Commands::Template { output } => {
            output::emit(out, TEMPLATE, output.as_deref())?;
            if output.is_none() {
                info!("save this as {TEMPLATE_FILE_NAME} and edit it before uploading");
            }
        }
        Commands::Export { output } => {
            output::emit(out, &app.export(), output.as_deref())?;
        }
    }
    Ok(())
}

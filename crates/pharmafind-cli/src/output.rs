use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use pharmafind_core::SearchOutcome;

/// Write `contents` to `path`, or to `out` when no path is given.
pub fn emit(out: &mut impl Write, contents: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, contents)
            .with_context(|| format!("writing {}", path.display()))?,
        None => write!(out, "{contents}")?,
    }
    Ok(())
}

pub fn print_search(out: &mut impl Write, outcome: &SearchOutcome, json: bool) -> Result<()> {
    if json {
        let report = serde_json::to_string_pretty(outcome).context("serializing results")?;
        writeln!(out, "{report}")?;
    } else {
        match outcome {
            SearchOutcome::NoInput => {}
            SearchOutcome::NoResults => writeln!(out, "{outcome}")?,
            SearchOutcome::Hits(_) => write!(out, "{outcome}")?,
        }
    }
    Ok(())
}

//! Checklist command implementation

use coverage_core::prelude::*;
use serde::Serialize;

use super::{Context, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct ChecklistEntry {
    item: ChecklistItem,
    label: &'static str,
    done: bool,
}

/// Run the checklist command
pub fn run(ctx: &Context, format: OutputFormat) -> Result<()> {
    println!("{}", render(ctx, format)?);
    Ok(())
}

/// Render the readiness checklist
pub fn render(ctx: &Context, format: OutputFormat) -> Result<String> {
    let entries: Vec<ChecklistEntry> = ctx
        .state
        .checklist()
        .into_iter()
        .map(|(item, done)| ChecklistEntry {
            item,
            label: item.label(),
            done,
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
        OutputFormat::Table => Ok(entries
            .iter()
            .map(|e| format!("[{}] {}", if e.done { "x" } else { " " }, e.label))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

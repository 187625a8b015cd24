//! Text and JSON rendering of fetched records.

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde_json::Value;

use crate::models::JsonRecord;

/// Output format for `list` and `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per record: id, name, icon, then remaining fields
    #[default]
    Table,
    /// Pretty-printed JSON, exactly the fields the source served
    Json,
}

/// Render a whole collection.
pub fn render_records(records: &[JsonRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(records).context("Failed to serialize records")
        }
        OutputFormat::Table if records.is_empty() => Ok("No records.".to_string()),
        OutputFormat::Table => {
            Ok(records.iter().map(render_line).collect::<Vec<_>>().join("\n"))
        }
    }
}

/// Render a single record.
pub fn render_record(record: &JsonRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(record).context("Failed to serialize record")
        }
        OutputFormat::Table => Ok(render_line(record)),
    }
}

fn render_line(record: &JsonRecord) -> String {
    let mut parts = vec![format!("#{}", record.id).cyan().bold().to_string()];

    if let Some(name) = record.str_field("name") {
        parts.push(name.to_string());
    }
    if let Some(icon) = record.str_field("icon") {
        parts.push(icon.dimmed().to_string());
    }

    parts.extend(
        record
            .fields
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "name" | "icon"))
            .map(|(key, value)| format!("{key}={}", display_value(value))),
    );

    parts.join("  ")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

//! `catalog list` - fetch a source and print every record.

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::render::{OutputFormat, render_records};
use crate::accessor::CollectionAccessor;
use crate::config::GlobalConfig;
use crate::models::JsonRecord;

/// Fetch a source and print all of its records in source order.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Configured source name or URL
    source: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ListCommand {
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        let url = config.resolve_source(&self.source)?;
        let accessor = CollectionAccessor::<JsonRecord>::from_settings(url, &config.http)?;

        let records = accessor.fetch_all().await?;
        info!("Fetched {} records from {}", records.len(), accessor.source_url());

        println!("{}", render_records(&records, self.format)?);
        Ok(())
    }
}

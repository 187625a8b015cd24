//! `catalog show` - fetch a source and print one record by id.

use anyhow::Result;
use clap::Args;

use super::render::{OutputFormat, render_record};
use crate::accessor::CollectionAccessor;
use crate::config::GlobalConfig;
use crate::core::{CatalogError, RecordId};
use crate::models::JsonRecord;

/// Fetch a source and print the first record with the given id.
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Configured source name or URL
    source: String,

    /// Record id to look up
    #[arg(allow_negative_numbers = true)]
    id: RecordId,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ShowCommand {
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        let url = config.resolve_source(&self.source)?;
        let accessor = CollectionAccessor::<JsonRecord>::from_settings(url, &config.http)?;

        accessor.fetch_all().await?;

        let record = accessor.find_by_id(self.id).ok_or_else(|| CatalogError::RecordNotFound {
            id: self.id,
            source_url: accessor.source_url().to_string(),
        })?;

        println!("{}", render_record(&record, self.format)?);
        Ok(())
    }
}

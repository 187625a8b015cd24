//! Command-line interface for catalog.
//!
//! # Commands
//!
//! - `list <SOURCE>` - fetch a source and print all of its records
//! - `show <SOURCE> <ID>` - fetch a source and print one record
//! - `config` - manage the global configuration (named sources, HTTP settings)
//!
//! `SOURCE` is either a name from the `[sources]` table of the config file or
//! a full URL.
//!
//! # Global Options
//!
//! - `--verbose` - debug logging on stderr
//! - `--quiet` - errors only
//! - `--config <PATH>` - config file to use instead of `~/.catalog/config.toml`
//! - `--no-color` - plain output
//!
//! # Example
//!
//! ```bash
//! catalog config add-source products https://example.com/api/products.json
//! catalog list products
//! catalog show products 10 --format json
//! catalog --verbose list https://example.com/api/customers.json
//! ```

mod config;
mod list;
mod render;
mod show;

pub use render::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::GlobalConfig;

/// Top-level command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "catalog",
    about = "Fetch, cache and look up remote JSON record collections",
    version,
    long_about = "catalog reads a JSON array of records (objects with a numeric `id`) from a URL \
                  or a named source and prints the collection or a single record."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to the config file
    #[arg(short, long, global = true, env = crate::config::CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a source and print all of its records
    List(list::ListCommand),

    /// Fetch a source and print the record with the given id
    Show(show::ShowCommand),

    /// Manage the global configuration
    Config(config::ConfigCommand),
}

impl Cli {
    /// Log level used when `RUST_LOG` is not set.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Run the selected command.
    pub async fn execute(self) -> Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        match self.command {
            Commands::Config(cmd) => cmd.execute(self.config).await,
            Commands::List(cmd) => {
                let config = GlobalConfig::load_with_optional(self.config).await?;
                cmd.execute(&config).await
            }
            Commands::Show(cmd) => {
                let config = GlobalConfig::load_with_optional(self.config).await?;
                cmd.execute(&config).await
            }
        }
    }
}

//! `catalog config` - manage the global configuration file.
//!
//! ```bash
//! catalog config init                       # write an example config
//! catalog config show                       # print the effective config (default)
//! catalog config add-source products https://example.com/api/products.json
//! catalog config remove-source products
//! catalog config list-sources
//! catalog config path                       # print the config file location
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::GlobalConfig;

/// Manage the global catalog configuration.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommands {
    /// Write an example configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Add or replace a named source
    AddSource {
        /// Source name
        name: String,

        /// URL serving the JSON array of records
        url: String,
    },

    /// Remove a named source
    RemoveSource {
        /// Source name
        name: String,
    },

    /// List configured sources
    ListSources,

    /// Print the configuration file location
    Path,
}

impl ConfigCommand {
    pub async fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        let config_path = match config_path {
            Some(path) => path,
            None => GlobalConfig::default_path()?,
        };

        match self.command {
            Some(ConfigSubcommands::Init {
                force,
            }) => Self::init(force, &config_path).await,
            Some(ConfigSubcommands::Show) | None => Self::show(&config_path).await,
            Some(ConfigSubcommands::AddSource {
                name,
                url,
            }) => Self::add_source(name, url, &config_path).await,
            Some(ConfigSubcommands::RemoveSource {
                name,
            }) => Self::remove_source(&name, &config_path).await,
            Some(ConfigSubcommands::ListSources) => Self::list_sources(&config_path).await,
            Some(ConfigSubcommands::Path) => {
                println!("{}", config_path.display());
                Ok(())
            }
        }
    }

    async fn init(force: bool, config_path: &Path) -> Result<()> {
        if config_path.exists() && !force {
            println!("❌ Config already exists at: {}", config_path.display());
            println!("   Use --force to overwrite");
            return Ok(());
        }

        let config = GlobalConfig::init_example();
        config.save_to(config_path).await?;

        println!("✅ Created config at: {}", config_path.display());
        println!("\n{}", "Example configuration:".bold());
        println!("{}", toml::to_string_pretty(&config)?);
        println!("{}", "Next steps:".yellow());
        println!("  Replace the example URLs with the sources you want to read");

        Ok(())
    }

    async fn show(config_path: &Path) -> Result<()> {
        let config = GlobalConfig::load_with_optional(Some(config_path.to_path_buf())).await?;

        println!("{}", "Catalog Configuration".bold());
        println!("Location: {}\n", config_path.display());
        println!("{}", toml::to_string_pretty(&config)?);

        if config.sources.is_empty() {
            println!("{}", "Tip:".yellow());
            println!("  Run 'catalog config add-source <NAME> <URL>' to name a source");
        }

        Ok(())
    }

    async fn add_source(name: String, url: String, config_path: &Path) -> Result<()> {
        let mut config = GlobalConfig::load_with_optional(Some(config_path.to_path_buf())).await?;

        if let Some(previous) = config.add_source(name.clone(), url.clone()) {
            println!("⚠️  Source '{name}' already existed");
            println!("   Previous URL: {previous}");
        }
        config.save_to(config_path).await?;

        println!("✅ Added source '{name}': {url}");
        Ok(())
    }

    async fn remove_source(name: &str, config_path: &Path) -> Result<()> {
        let mut config = GlobalConfig::load_with_optional(Some(config_path.to_path_buf())).await?;

        if config.remove_source(name) {
            config.save_to(config_path).await?;
            println!("✅ Removed source '{name}'");
        } else {
            println!("❌ Source '{name}' not found");
        }

        Ok(())
    }

    async fn list_sources(config_path: &Path) -> Result<()> {
        let config = GlobalConfig::load_with_optional(Some(config_path.to_path_buf())).await?;

        if config.sources.is_empty() {
            println!("No sources configured.");
            return Ok(());
        }

        let width = config.sources.keys().map(String::len).max().unwrap_or(0);
        for (name, url) in &config.sources {
            println!("{}  {}", format!("{name:<width$}").bold(), url);
        }

        Ok(())
    }
}

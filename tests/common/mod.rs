//! Shared helpers for the integration suite.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runs the `catalog` binary against an isolated config file.
pub struct CatalogRunner {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    config_path: PathBuf,
}

impl CatalogRunner {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let config_path = temp_dir.path().join("catalog").join("config.toml");
        Ok(Self {
            _temp_dir: temp_dir,
            config_path,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Run `catalog` with `args`, plain output, no `RUST_LOG` from the caller.
    pub async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_catalog"))
            .args(args)
            .arg("--no-color")
            .env("CATALOG_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .await
            .context("Failed to run catalog")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Captured output of a `catalog` run.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            self.code, self.stdout, self.stderr
        );
        self
    }

    pub fn assert_failure(&self) -> &Self {
        assert!(!self.success, "expected failure\nstdout:\n{}", self.stdout);
        assert_eq!(self.code, Some(1));
        self
    }
}

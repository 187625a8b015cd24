//! Integration test suite for catalog
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **accessor_http**: `CollectionAccessor` against a local HTTP server
//! - **cli**: the `catalog` binary end to end
//! - **config_commands**: `catalog config` subcommands

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod accessor_http;
mod cli;

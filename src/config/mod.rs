//! Configuration for catalog
//!
//! A single TOML file holds named sources and HTTP client settings; see
//! [`GlobalConfig`] for the format and location rules. The library's
//! [`CollectionAccessor`](crate::accessor::CollectionAccessor) never reads it
//! on its own: callers pass [`HttpSettings`] explicitly.

mod global;

pub use global::{CONFIG_PATH_ENV, GlobalConfig};

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("catalog/", env!("CARGO_PKG_VERSION")).to_string()
}

/// HTTP client settings (`[http]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds; `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

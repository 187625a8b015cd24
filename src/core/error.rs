//! Error handling for catalog
//!
//! Two layers of errors live here:
//! - [`AccessorError`] - the failures a [`CollectionAccessor`](crate::accessor::CollectionAccessor)
//!   surfaces from `fetch_all`: the request could not complete, or the body was
//!   not an array of records.
//! - [`CatalogError`] - application-level failures of the `catalog` binary
//!   (unknown source names, missing records, bad configuration), with
//!   [`AccessorError`] folded in transparently.
//!
//! [`ErrorContext`] pairs a [`CatalogError`] with details and a suggestion for
//! display on the terminal, and [`user_friendly_error`] builds one from any
//! [`anyhow::Error`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use catalog_cli::core::{CatalogError, user_friendly_error};
//!
//! let err = anyhow::Error::from(CatalogError::SourceNotFound {
//!     name: "products".to_string(),
//! });
//! let ctx = user_friendly_error(err);
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::core::RecordId;

/// Failure of a single `fetch_all` call.
///
/// Neither variant is retried by the accessor. When either is returned the
/// accessor's cache is exactly what it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessorError {
    /// The request could not be completed.
    ///
    /// Covers DNS failures, refused connections, timeouts, failures while
    /// reading the body, and responses with a non-2xx status.
    #[error("Failed to fetch {url}: {reason}")]
    Transport {
        /// The URL that was requested
        url: String,
        /// HTTP status of the response, when one was received
        status: Option<u16>,
        /// Description of what went wrong
        reason: String,
    },

    /// The response body could not be interpreted as an array of records.
    ///
    /// Covers invalid JSON, a JSON value that is not an array, an element that
    /// does not decode into the record type, and a record rejected by the
    /// accessor's validator.
    #[error("Unexpected response from {url}: {reason}")]
    Format {
        /// The URL whose body was rejected
        url: String,
        /// Description of the shape mismatch
        reason: String,
    },
}

impl AccessorError {
    /// Transport failure without a response status.
    pub fn transport(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            status: None,
            reason: reason.into(),
        }
    }

    /// Transport failure caused by a non-2xx response.
    pub fn status(url: impl Into<String>, status: u16, reason: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            status: Some(status),
            reason: reason.into(),
        }
    }

    /// Format failure.
    pub fn format(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is a [`AccessorError::Transport`] failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether this is a [`AccessorError::Format`] failure.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// The URL the failing request was sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Format { url, .. } => url,
        }
    }

    /// The HTTP status that caused a transport failure, if any.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            Self::Format { .. } => None,
        }
    }
}

/// The main error type for catalog operations.
///
/// Library callers mostly deal with [`AccessorError`] directly; this enum adds
/// the failures that only exist once sources are named in configuration and
/// records are requested from the command line.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// A fetch failed
    #[error(transparent)]
    Accessor(#[from] AccessorError),

    /// The given source is neither a configured name nor a URL
    #[error("Source not found: {name}")]
    SourceNotFound {
        /// The name that was looked up
        name: String,
    },

    /// The fetched collection has no record with the requested id
    #[error("Record not found: #{id} in {source_url}")]
    RecordNotFound {
        /// The identifier that was looked up
        id: RecordId,
        /// The source the collection was fetched from
        source_url: String,
    },

    /// The configuration file could not be used
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// A [`CatalogError`] with optional details and a suggestion for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CatalogError,
    /// What the user can try next
    pub suggestion: Option<String>,
    /// More information about the failure
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error without details or suggestion.
    #[must_use]
    pub const fn new(error: CatalogError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for terminal output.
///
/// Known error types get a tailored suggestion. Anything else is reported as
/// [`CatalogError::Other`] with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(catalog_error) = error.downcast_ref::<CatalogError>() {
        return create_error_context(catalog_error.clone());
    }

    if let Some(accessor_error) = error.downcast_ref::<AccessorError>() {
        return create_error_context(CatalogError::Accessor(accessor_error.clone()));
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(CatalogError::Other {
        message,
    })
}

fn create_error_context(error: CatalogError) -> ErrorContext {
    match &error {
        CatalogError::Accessor(AccessorError::Transport {
            status: Some(status),
            ..
        }) => {
            let status = *status;
            let ctx = ErrorContext::new(error)
                .with_details(format!("The source answered with HTTP status {status}"));
            if status == 404 {
                ctx.with_suggestion("Check that the source URL points at an existing collection")
            } else if status >= 500 {
                ctx.with_suggestion("The source is failing; try again later")
            } else {
                ctx.with_suggestion("Check that the source URL is correct and publicly readable")
            }
        }
        CatalogError::Accessor(AccessorError::Transport { .. }) => ErrorContext::new(error)
            .with_suggestion("Check your network connection and that the source host is reachable")
            .with_details("The request could not be completed; no data was received"),
        CatalogError::Accessor(AccessorError::Format { .. }) => ErrorContext::new(error)
            .with_suggestion(
                "The source must serve a JSON array of objects, each with a numeric `id` field",
            ),
        CatalogError::SourceNotFound { name } => {
            let suggestion = format!(
                "Add it with 'catalog config add-source {name} <URL>' or pass a full URL instead"
            );
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        CatalogError::RecordNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Run 'catalog list <SOURCE>' to see the available ids"),
        CatalogError::ConfigError { .. } => ErrorContext::new(error)
            .with_suggestion("Run 'catalog config path' to locate the config file and fix it"),
        CatalogError::Other { .. } => ErrorContext::new(error),
    }
}

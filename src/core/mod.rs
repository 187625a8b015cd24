//! Core types shared across catalog
//!
//! - [`Record`] and [`RecordId`] - the capability every cached value provides,
//!   [`deserialize_id`] for reading ids from any integral JSON number
//! - [`Validator`] - optional caller-supplied record check
//! - [`AccessorError`] - fetch failures (transport or format)
//! - [`CatalogError`], [`ErrorContext`] and [`user_friendly_error`] - error
//!   reporting for the command-line interface

pub mod error;
mod record;

pub use error::{AccessorError, CatalogError, ErrorContext, user_friendly_error};
pub use record::{Record, RecordId, Validator, deserialize_id};

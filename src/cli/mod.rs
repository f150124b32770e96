//! CLI support for igqloo
//!
//! Provides the operations behind the `igqloo` binary so other tools can
//! build and send shorthand queries without shelling out.

mod build;
mod fetch;

pub use build::{build_query, read_fields, BuildOptions};
pub use fetch::{execute_fetch, FetchOptions, FetchResult};

use crate::transport::TransportError;
use crate::ParseError;
use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Request error: {0}")]
    Transport(#[from] TransportError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Neither arguments nor piped stdin named a field
    #[error("No fields provided. Pass shorthand fields as arguments or pipe them to stdin, one per line.")]
    NoFields,
}

//! Error types for the Arbor CLI.
//!
//! [`CliError`] wraps I/O, input decoding, configuration, and engine
//! errors. It implements [`miette::Diagnostic`] so `main` can render rich
//! terminal reports.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use arbor::ArborError;

use crate::config::ConfigError;

/// The error surface of the CLI.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(arbor::io))]
    Io(#[from] io::Error),

    #[error("failed to parse input JSON: {0}")]
    #[diagnostic(
        code(arbor::input),
        help(
            "expected a nested {{\"id\", \"children\"}} object or a flat array of {{\"id\", \"parent\"}} records"
        )
    )]
    Input(#[source] serde_json::Error),

    #[error("flat input has no root record (every record names a parent)")]
    #[diagnostic(code(arbor::input))]
    MissingRoot,

    #[error("failed to encode the layout document: {0}")]
    #[diagnostic(code(arbor::output))]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(arbor::layout))]
    Layout(#[from] ArborError),

    #[error(transparent)]
    #[diagnostic(code(arbor::config))]
    Config(#[from] ConfigError),
}

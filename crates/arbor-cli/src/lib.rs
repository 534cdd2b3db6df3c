//! CLI logic for the Arbor layout tool.
//!
//! Reads a JSON tree (nested or flat form), computes its left-to-right
//! layout, and writes the positioned result as JSON.

pub mod config;

mod args;
mod error;
mod input;
mod output;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::info;

use input::TreeDocument;

/// Run the Arbor CLI application
///
/// This function processes the input file through the layout pipeline and
/// writes the resulting JSON document to the output file.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input decoding errors
/// - Layout errors (missing extractors, duplicate identifiers)
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Computing layout"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and decode the input tree
    let source = fs::read_to_string(&args.input)?;
    let document: TreeDocument = serde_json::from_str(&source).map_err(CliError::Input)?;

    let json = match &document {
        TreeDocument::Nested(tree) => {
            info!("Input is a nested tree");
            let layout = input::nested_engine()?.layout(tree)?;
            info!(nodes_count = layout.len(), deep = layout.deep(); "Layout calculated");
            output::render(&layout, app_config.output(), args.links)?
        }
        TreeDocument::Flat(records) => {
            info!(records_count = records.len(); "Input is a flat record list");
            let layout = input::flat_engine(records)?.layout(records)?;
            info!(nodes_count = layout.len(), deep = layout.deep(); "Layout calculated");
            output::render(&layout, app_config.output(), args.links)?
        }
    };

    fs::write(&args.output, json)?;

    info!(output_file = args.output; "Layout written");

    Ok(())
}

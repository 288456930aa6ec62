//! CLI logic for the DMN modeler.
//!
//! The CLI creates a new decision document from the starter template, running
//! it through the modeler's import pipeline before writing it out.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info, warn};

use dmn_modeler::{Modeler, ModelerError, template::INITIAL_TEMPLATE};

/// Run the modeler CLI application
///
/// # Errors
///
/// Returns `ModelerError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid identifier policies
pub fn run(args: &Args) -> Result<(), ModelerError> {
    info!(output_path = args.output; "Creating decision document");

    let config = config::load_config(args.config.as_ref())?;
    let mut modeler = Modeler::new(config)?;

    let outcome = modeler.create_document();
    for warning in outcome.warnings() {
        warn!(warning:% = warning; "Import warning");
    }
    for (id, owner) in modeler.ids().iter() {
        debug!(id:% = id, kind:% = owner.kind(); "Claimed identifier");
    }
    info!(identifiers = modeler.ids().len(); "Starter document loaded");

    fs::write(&args.output, INITIAL_TEMPLATE)?;

    info!(output_file = args.output; "Document written");

    Ok(())
}

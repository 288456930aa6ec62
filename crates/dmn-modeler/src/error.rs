//! Error types for modeler operations.
//!
//! This module provides the main error type [`ModelerError`]. Identifier
//! bookkeeping and view synchronization never fail; errors only arise at the
//! host boundary (loading documents, addressing decisions, configuration).

use std::io;

use thiserror::Error;

use dmn_modeler_core::{identifier::Id, ids::IdPolicyError};

use crate::import::ParseError;

/// The main error type for modeler operations.
#[derive(Debug, Error)]
pub enum ModelerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse document: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] IdPolicyError),

    #[error("Configuration file error: {0}")]
    ConfigFile(String),

    #[error("No document is loaded")]
    NoDocument,

    #[error("Unknown decision: {0}")]
    UnknownDecision(Id),
}

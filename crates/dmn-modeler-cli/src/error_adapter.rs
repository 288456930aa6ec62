//! Error adapter for converting ModelerError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use dmn_modeler::ModelerError;

/// Adapter rendering a [`ModelerError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a ModelerError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            ModelerError::Io(_) => "dmn_modeler::io",
            ModelerError::Parse(_) => "dmn_modeler::parse",
            ModelerError::Config(_) => "dmn_modeler::config",
            ModelerError::ConfigFile(_) => "dmn_modeler::config_file",
            ModelerError::NoDocument => "dmn_modeler::no_document",
            ModelerError::UnknownDecision(_) => "dmn_modeler::unknown_decision",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            ModelerError::Config(_) => Some(Box::new(
                "identifier base must be 2-36; bits and expand_by must be between 1 and 256",
            )),
            ModelerError::ConfigFile(_) => Some(Box::new(
                "check the path passed with --config and the TOML syntax of the file",
            )),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`ModelerError`] for rendering.
pub fn to_reportable(err: &ModelerError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

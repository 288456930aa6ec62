//! Document import pipeline types.
//!
//! Parsing the DMN XML format is left to external code implementing
//! [`DocumentParser`]. Whatever produced the [`Definitions`], importing indexes
//! every identified element into a [`ParseContext`], which is what the
//! parse-complete lifecycle event carries.

use indexmap::{IndexMap, map::Entry};
use log::warn;
use thiserror::Error;

use dmn_modeler_core::{
    identifier::Id,
    semantic::{Definitions, ElementRef},
};

/// Error reported by a [`DocumentParser`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Turns source text into a semantic document.
pub trait DocumentParser {
    /// Parse `source` into definitions.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when `source` is not a valid document.
    fn parse(&self, source: &str) -> Result<Definitions, ParseError>;
}

/// Non-fatal problem found while importing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportWarning {
    #[error("duplicate ID <{}> on {duplicate}, already used by {first}", .first.id())]
    DuplicateId {
        first: ElementRef,
        duplicate: ElementRef,
    },
}

/// Element index of a parsed document.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    elements_by_id: IndexMap<Id, ElementRef>,
    warnings: Vec<ImportWarning>,
}

impl ParseContext {
    /// Index every identified element of `definitions`.
    ///
    /// The first element using an identifier keeps it; later ones are
    /// reported as [`ImportWarning::DuplicateId`].
    pub fn from_definitions(definitions: &Definitions) -> Self {
        let mut context = Self::default();

        for element in definitions.elements() {
            match context.elements_by_id.entry(element.id()) {
                Entry::Vacant(entry) => {
                    entry.insert(element);
                }
                Entry::Occupied(entry) => {
                    let first = *entry.get();
                    warn!(
                        id:% = element.id(),
                        first:% = first,
                        duplicate:% = element;
                        "Duplicate element ID"
                    );
                    context.warnings.push(ImportWarning::DuplicateId {
                        first,
                        duplicate: element,
                    });
                }
            }
        }

        context
    }

    /// Borrow the element index, in document order.
    pub fn elements_by_id(&self) -> &IndexMap<Id, ElementRef> {
        &self.elements_by_id
    }

    pub fn warnings(&self) -> &[ImportWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ImportWarning> {
        self.warnings
    }
}

/// Summary of a successful import.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    warnings: Vec<ImportWarning>,
    drawn_shapes: usize,
}

impl ImportOutcome {
    pub(crate) fn new(warnings: Vec<ImportWarning>, drawn_shapes: usize) -> Self {
        Self {
            warnings,
            drawn_shapes,
        }
    }

    /// Warnings collected while indexing the document.
    pub fn warnings(&self) -> &[ImportWarning] {
        &self.warnings
    }

    /// Number of decisions drawn on the canvas from existing DI.
    pub fn drawn_shapes(&self) -> usize {
        self.drawn_shapes
    }
}

#[cfg(test)]
mod tests {
    use dmn_modeler_core::semantic::{Decision, DecisionTable, ElementKind};

    use super::*;

    #[test]
    fn test_index_all_elements() {
        let definitions = Definitions::new(Id::new("defs"), "Definitions", "ns").with_decision(
            Decision::new(Id::new("dish"), "Dish")
                .with_decision_table(DecisionTable::new(Id::new("dishTable"))),
        );

        let context = ParseContext::from_definitions(&definitions);
        let keys: Vec<String> = context
            .elements_by_id()
            .keys()
            .map(ToString::to_string)
            .collect();

        assert_eq!(keys, vec!["defs", "dish", "dishTable"]);
        assert!(context.warnings().is_empty());
        assert_eq!(
            context.elements_by_id()[&Id::new("dishTable")].kind(),
            ElementKind::DecisionTable
        );
    }

    #[test]
    fn test_duplicate_ids_keep_first_and_warn() {
        let definitions = Definitions::new(Id::new("defs"), "Definitions", "ns")
            .with_decision(Decision::new(Id::new("twin"), "First"))
            .with_decision(
                Decision::new(Id::new("other"), "Other")
                    .with_decision_table(DecisionTable::new(Id::new("twin"))),
            );

        let context = ParseContext::from_definitions(&definitions);

        assert_eq!(context.elements_by_id().len(), 3);
        assert_eq!(
            context.elements_by_id()[&Id::new("twin")].kind(),
            ElementKind::Decision
        );
        assert_eq!(
            context.warnings(),
            &[ImportWarning::DuplicateId {
                first: ElementRef::new(Id::new("twin"), ElementKind::Decision),
                duplicate: ElementRef::new(Id::new("twin"), ElementKind::DecisionTable),
            }]
        );
        assert_eq!(
            context.warnings()[0].to_string(),
            "duplicate ID <twin> on dmn:DecisionTable#twin, already used by dmn:Decision#twin"
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::new("unexpected end of input");
        assert_eq!(err.message(), "unexpected end of input");
        assert_eq!(err.to_string(), "unexpected end of input");
    }
}

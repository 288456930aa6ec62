//! Semantic model of a decision document.
//!
//! The model mirrors the parts of a DMN document the modeler works with: a
//! [`Definitions`] root owning [`Decision`]s, each with an optional
//! [`DecisionTable`] and optional [`ExtensionElements`] holding diagram
//! interchange data ([`DiBounds`]).
//!
//! Decisions are shared between the document, the table view and the canvas,
//! so they are handed out as [`DecisionRef`] (`Rc<RefCell<Decision>>`).

mod definitions;
mod extension;

use std::fmt;

use crate::identifier::Id;

pub use definitions::{
    Decision, DecisionRef, DecisionTable, Definitions, HitPolicy, InputClause, LiteralExpression,
    OutputClause,
};
pub use extension::{DiBounds, ExtensionElements, ExtensionValue, Parent};

/// The kind of a semantic element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Definitions,
    Decision,
    DecisionTable,
    InputClause,
    LiteralExpression,
    OutputClause,
}

impl ElementKind {
    /// Returns the qualified DMN type name, e.g. `dmn:Decision`.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Definitions => "dmn:Definitions",
            Self::Decision => "dmn:Decision",
            Self::DecisionTable => "dmn:DecisionTable",
            Self::InputClause => "dmn:InputClause",
            Self::LiteralExpression => "dmn:LiteralExpression",
            Self::OutputClause => "dmn:OutputClause",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Lightweight handle naming one element of a document.
///
/// Used as the owner recorded in the identifier registry and as the value of
/// the element index produced on import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    id: Id,
    kind: ElementKind,
}

impl ElementRef {
    pub fn new(id: Id, kind: ElementKind) -> Self {
        Self { id, kind }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kind_type_name() {
        assert_eq!(ElementKind::Decision.type_name(), "dmn:Decision");
        assert_eq!(ElementKind::OutputClause.to_string(), "dmn:OutputClause");
    }

    #[test]
    fn test_element_ref_display() {
        let element = ElementRef::new(Id::new("decision"), ElementKind::Decision);
        assert_eq!(element.to_string(), "dmn:Decision#decision");
        assert_eq!(element.id(), "decision");
        assert_eq!(element.kind(), ElementKind::Decision);
    }
}

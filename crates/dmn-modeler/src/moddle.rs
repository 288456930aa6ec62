//! The document-model instance.
//!
//! [`Moddle`] lives for a whole editing session. It owns the identifier
//! registry of the currently loaded document and creates new model elements
//! with identifiers that do not collide with it.

use log::debug;

use dmn_modeler_core::{
    ids::{IdPolicy, Ids},
    semantic::{Decision, DecisionTable, ElementKind, ElementRef},
};

#[derive(Debug, Clone)]
pub struct Moddle {
    ids: Ids<ElementRef>,
}

impl Moddle {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            ids: Ids::new(policy),
        }
    }

    /// Borrow the identifier registry of the current document.
    pub fn ids(&self) -> &Ids<ElementRef> {
        &self.ids
    }

    pub fn ids_mut(&mut self) -> &mut Ids<ElementRef> {
        &mut self.ids
    }

    /// Create a decision with an empty decision table.
    ///
    /// Both elements receive fresh identifiers, which are claimed right away.
    pub fn create_decision(&mut self, name: &str) -> Decision {
        let table_id = self.ids.next_prefixed_with("DecisionTable_", |id| {
            ElementRef::new(id, ElementKind::DecisionTable)
        });
        let decision_id = self.ids.next_prefixed_with("Decision_", |id| {
            ElementRef::new(id, ElementKind::Decision)
        });
        debug!(decision:% = decision_id, table:% = table_id; "Created decision");

        Decision::new(decision_id, name).with_decision_table(DecisionTable::new(table_id))
    }
}

impl Default for Moddle {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

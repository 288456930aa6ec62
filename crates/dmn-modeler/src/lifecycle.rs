//! Reactions of the modeler to document lifecycle events.
//!
//! | Event          | Reaction                                              |
//! |----------------|-------------------------------------------------------|
//! | parse-complete | re-collect identifiers, unless parsing failed         |
//! | destroy        | clear the identifier registry                         |
//! | view-switch    | synchronize the table with the diagram ([`crate::sync`]) |

use log::{debug, info};

use dmn_modeler_core::{ids::Ids, semantic::ElementRef};

use crate::{
    events::{DestroyEvent, ParseCompleteEvent, ViewSwitchEvent},
    import::ParseContext,
    sync::{SyncCapabilities, SyncOutcome, ViewSyncController},
};

/// Clear `ids` and claim every identifier of `context`'s element index.
///
/// Afterwards the claimed set equals the index's key set. Duplicates were
/// already resolved while indexing, so every claim is for a distinct id.
pub fn collect_ids(ids: &mut Ids<ElementRef>, context: &ParseContext) {
    ids.clear();

    for (&id, &element) in context.elements_by_id() {
        ids.claim(id, element);
    }

    debug!(count = ids.len(); "Identifiers collected");
}

#[derive(Debug, Clone, Copy)]
pub struct DocumentLifecycleHooks {
    view_sync: ViewSyncController,
}

impl DocumentLifecycleHooks {
    pub fn new(view_sync: ViewSyncController) -> Self {
        Self { view_sync }
    }

    /// Re-collect identifiers after a successful parse.
    ///
    /// A failed parse leaves `ids` untouched so the previously loaded
    /// document's identifiers stay claimed. Returns whether identifiers were
    /// re-collected.
    pub fn parse_complete(
        &self,
        ids: &mut Ids<ElementRef>,
        event: &ParseCompleteEvent<'_>,
    ) -> bool {
        if let Some(err) = event.error() {
            info!(err:% = err; "Parse failed, keeping claimed identifiers");
            return false;
        }

        collect_ids(ids, event.context());
        true
    }

    pub fn destroy(&self, ids: &mut Ids<ElementRef>, _event: &DestroyEvent) {
        ids.clear();
    }

    pub fn view_switch(&self, event: &ViewSwitchEvent, caps: SyncCapabilities<'_>) -> SyncOutcome {
        self.view_sync.sync(event, caps)
    }
}

//! DMN Modeler - a decision table modeler with a decision requirements diagram.
//!
//! The [`Modeler`] hosts one document at a time. It keeps the document's
//! identifier registry in sync with what was loaded, and materializes diagram
//! shapes for decisions that so far only existed in the table view.

pub mod canvas;
pub mod config;
pub mod events;
pub mod factory;
pub mod import;
pub mod lifecycle;
pub mod moddle;
pub mod sync;
pub mod template;

mod error;

pub use dmn_modeler_core::{draw, geometry, identifier, ids, semantic};

pub use error::ModelerError;

use std::rc::Rc;

use log::{debug, info, trace};

use dmn_modeler_core::{
    identifier::Id,
    ids::Ids,
    semantic::{DecisionRef, Definitions, ElementKind, ElementRef},
};

use canvas::Canvas;
use config::ModelerConfig;
use events::{DestroyEvent, EventBus, ParseCompleteEvent, ViewSwitchEvent};
use factory::{DrdFactory, ElementFactory};
use import::{DocumentParser, ImportOutcome, ParseContext};
use lifecycle::DocumentLifecycleHooks;
use moddle::Moddle;
use sync::{ShapeFactory, SyncCapabilities, SyncOutcome, ViewSyncController};

/// Host for one decision document and its diagram.
///
/// # Examples
///
/// ```
/// use dmn_modeler::{Modeler, identifier::Id, sync::SyncOutcome};
///
/// let mut modeler = Modeler::default();
/// modeler.create_document();
/// assert!(modeler.ids().is_claimed(Id::new("decision")));
///
/// // Switching from the table puts the decision on the diagram.
/// let outcome = modeler
///     .switch_view(Id::new("decision"), true)
///     .expect("decision exists");
/// assert!(matches!(outcome, SyncOutcome::Materialized { .. }));
/// assert_eq!(modeler.canvas().len(), 1);
///
/// modeler.destroy();
/// assert!(modeler.ids().is_empty());
/// ```
#[derive(Debug)]
pub struct Modeler {
    config: ModelerConfig,
    moddle: Moddle,
    canvas: Canvas,
    events: EventBus,
    hooks: DocumentLifecycleHooks,
    element_factory: ElementFactory,
    drd_factory: DrdFactory,
    definitions: Option<Definitions>,
}

impl Default for Modeler {
    fn default() -> Self {
        Self::from_valid_config(ModelerConfig::default())
    }
}

impl Modeler {
    /// Create a modeler with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::Config`] if the identifier policy is invalid.
    pub fn new(config: ModelerConfig) -> Result<Self, ModelerError> {
        config.ids().validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ModelerConfig) -> Self {
        let view_sync = ViewSyncController::new(config.placement().origin());
        Self {
            moddle: Moddle::new(config.ids()),
            canvas: Canvas::new(),
            events: EventBus::new(),
            hooks: DocumentLifecycleHooks::new(view_sync),
            element_factory: ElementFactory,
            drd_factory: DrdFactory,
            definitions: None,
            config,
        }
    }

    pub fn config(&self) -> &ModelerConfig {
        &self.config
    }

    /// Borrow the identifier registry of the loaded document.
    pub fn ids(&self) -> &Ids<ElementRef> {
        self.moddle.ids()
    }

    /// Borrow the document-model instance.
    pub fn moddle(&self) -> &Moddle {
        &self.moddle
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Borrow the loaded document, if any.
    pub fn definitions(&self) -> Option<&Definitions> {
        self.definitions.as_ref()
    }

    /// Register listeners for lifecycle events.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Load the canonical starter document.
    ///
    /// See [`template::INITIAL_TEMPLATE`] for its contents.
    pub fn create_document(&mut self) -> ImportOutcome {
        info!("Creating new document");
        self.import_definitions(template::starter_definitions())
    }

    /// Parse `source` with `parser` and import the result.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::Parse`] if parsing fails. The parse-complete
    /// event still fires, carrying the error, and the currently loaded
    /// document stays in place.
    pub fn import_source(
        &mut self,
        parser: &dyn DocumentParser,
        source: &str,
    ) -> Result<ImportOutcome, ModelerError> {
        info!(len = source.len(); "Parsing document");

        match parser.parse(source) {
            Ok(definitions) => Ok(self.import_definitions(definitions)),
            Err(err) => {
                let context = ParseContext::default();
                self.emit_parse_complete(&ParseCompleteEvent::failed(&err, &context));
                Err(err.into())
            }
        }
    }

    /// Import an already parsed document, replacing the current one.
    ///
    /// Every identifier of the document is claimed, and decisions that own
    /// diagram-interchange bounds are drawn on the canvas.
    pub fn import_definitions(&mut self, definitions: Definitions) -> ImportOutcome {
        self.canvas.clear();

        let context = ParseContext::from_definitions(&definitions);
        self.emit_parse_complete(&ParseCompleteEvent::succeeded(&definitions, &context));

        let mut drawn_shapes = 0;
        for decision in definitions.decisions() {
            let Some(di) = decision.borrow().di_bounds().cloned() else {
                continue;
            };
            let shape = self
                .element_factory
                .create_shape(ElementKind::Decision, Rc::clone(decision))
                .with_position(di.bounds().min_point())
                .with_size(di.bounds().to_size());
            self.canvas.add_shape(shape);
            drawn_shapes += 1;
        }

        info!(
            elements = context.elements_by_id().len(),
            warnings = context.warnings().len(),
            shapes = drawn_shapes;
            "Document imported"
        );

        self.definitions = Some(definitions);
        ImportOutcome::new(context.into_warnings(), drawn_shapes)
    }

    /// Switch the decision `decision_id` between table and diagram view.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::NoDocument`] if nothing is loaded and
    /// [`ModelerError::UnknownDecision`] if the document has no such decision.
    pub fn switch_view(
        &mut self,
        decision_id: Id,
        from_table: bool,
    ) -> Result<SyncOutcome, ModelerError> {
        let decision = self
            .definitions
            .as_ref()
            .ok_or(ModelerError::NoDocument)?
            .decision(decision_id)
            .ok_or(ModelerError::UnknownDecision(decision_id))?;

        Ok(self.handle_view_switch(&ViewSwitchEvent::new(decision, from_table)))
    }

    /// Dispatch a view-switch event for a decision of the loaded document.
    fn handle_view_switch(&mut self, event: &ViewSwitchEvent) -> SyncOutcome {
        debug!(
            decision:% = event.decision().borrow().id(),
            from_table = event.from_table();
            "View switch"
        );

        let caps = SyncCapabilities {
            shapes: &self.element_factory,
            di: &self.drd_factory,
            canvas: &mut self.canvas,
            notifier: &mut self.events,
        };
        let outcome = self.hooks.view_switch(event, caps);

        self.events.fire_view_switch(event);
        outcome
    }

    /// Add a new decision, shown only in the table view until synchronized.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::NoDocument`] if nothing is loaded.
    pub fn add_decision(&mut self, name: &str) -> Result<DecisionRef, ModelerError> {
        let definitions = self
            .definitions
            .as_mut()
            .ok_or(ModelerError::NoDocument)?;

        let decision = self.moddle.create_decision(name).into_ref();
        definitions.add_decision(Rc::clone(&decision));

        info!(decision:% = decision.borrow().id(); "Decision added");
        Ok(decision)
    }

    /// Tear down the loaded document.
    pub fn destroy(&mut self) {
        info!("Destroying document");

        let event = DestroyEvent;
        self.hooks.destroy(self.moddle.ids_mut(), &event);
        self.canvas.clear();
        self.definitions = None;

        self.events.fire_destroy(&event);
    }

    fn emit_parse_complete(&mut self, event: &ParseCompleteEvent<'_>) {
        let recollected = self.hooks.parse_complete(self.moddle.ids_mut(), event);
        trace!(recollected, claimed = self.moddle.ids().len(); "Parse complete handled");

        self.events.fire_parse_complete(event);
    }
}

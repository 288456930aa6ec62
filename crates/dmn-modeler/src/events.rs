//! Typed lifecycle events and their listeners.
//!
//! Each event kind has its own payload type and its own listener list on the
//! [`EventBus`]; there is no string-keyed dispatch. Listeners run
//! synchronously, in registration order, after the modeler's own handlers.

use std::fmt;

use log::trace;

use dmn_modeler_core::{
    draw::DiagramShape,
    semantic::{DecisionRef, DiBounds, Definitions},
};

use crate::{
    import::{ParseContext, ParseError},
    sync::Notifier,
};

/// Emitted once parsing of a document finished, successfully or not.
#[derive(Debug, Clone, Copy)]
pub struct ParseCompleteEvent<'a> {
    error: Option<&'a ParseError>,
    definitions: Option<&'a Definitions>,
    context: &'a ParseContext,
}

impl<'a> ParseCompleteEvent<'a> {
    /// A successful parse of `definitions`.
    pub fn succeeded(definitions: &'a Definitions, context: &'a ParseContext) -> Self {
        Self {
            error: None,
            definitions: Some(definitions),
            context,
        }
    }

    /// A failed parse.
    pub fn failed(error: &'a ParseError, context: &'a ParseContext) -> Self {
        Self {
            error: Some(error),
            definitions: None,
            context,
        }
    }

    pub fn error(&self) -> Option<&'a ParseError> {
        self.error
    }

    pub fn definitions(&self) -> Option<&'a Definitions> {
        self.definitions
    }

    pub fn context(&self) -> &'a ParseContext {
        self.context
    }
}

/// Emitted when the loaded document is torn down.
#[derive(Debug, Clone, Copy, Default)]
pub struct DestroyEvent;

/// Emitted when the user switches between the table and the diagram view.
#[derive(Debug, Clone)]
pub struct ViewSwitchEvent {
    decision: DecisionRef,
    from_table: bool,
}

impl ViewSwitchEvent {
    /// `from_table` is true when the switch started in the table view.
    pub fn new(decision: DecisionRef, from_table: bool) -> Self {
        Self {
            decision,
            from_table,
        }
    }

    pub fn decision(&self) -> &DecisionRef {
        &self.decision
    }

    pub fn from_table(&self) -> bool {
        self.from_table
    }
}

/// Emitted after a new diagram element was added to the canvas.
#[derive(Debug, Clone)]
pub struct ElementAddedEvent {
    shape: DiagramShape,
    di: DiBounds,
}

impl ElementAddedEvent {
    pub fn new(shape: DiagramShape, di: DiBounds) -> Self {
        Self { shape, di }
    }

    pub fn shape(&self) -> &DiagramShape {
        &self.shape
    }

    pub fn di(&self) -> &DiBounds {
        &self.di
    }
}

type ParseCompleteListener = Box<dyn FnMut(&ParseCompleteEvent<'_>)>;
type DestroyListener = Box<dyn FnMut(&DestroyEvent)>;
type ViewSwitchListener = Box<dyn FnMut(&ViewSwitchEvent)>;
type ElementAddedListener = Box<dyn FnMut(&ElementAddedEvent)>;

/// Listener registry, one list per event kind.
#[derive(Default)]
pub struct EventBus {
    parse_complete: Vec<ParseCompleteListener>,
    destroy: Vec<DestroyListener>,
    view_switch: Vec<ViewSwitchListener>,
    element_added: Vec<ElementAddedListener>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("parse_complete", &self.parse_complete.len())
            .field("destroy", &self.destroy.len())
            .field("view_switch", &self.view_switch.len())
            .field("element_added", &self.element_added.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_parse_complete(&mut self, listener: impl FnMut(&ParseCompleteEvent<'_>) + 'static) {
        self.parse_complete.push(Box::new(listener));
    }

    pub fn on_destroy(&mut self, listener: impl FnMut(&DestroyEvent) + 'static) {
        self.destroy.push(Box::new(listener));
    }

    pub fn on_view_switch(&mut self, listener: impl FnMut(&ViewSwitchEvent) + 'static) {
        self.view_switch.push(Box::new(listener));
    }

    pub fn on_element_added(&mut self, listener: impl FnMut(&ElementAddedEvent) + 'static) {
        self.element_added.push(Box::new(listener));
    }

    pub fn fire_parse_complete(&mut self, event: &ParseCompleteEvent<'_>) {
        trace!(listeners = self.parse_complete.len(); "Firing parse complete");
        for listener in &mut self.parse_complete {
            listener(event);
        }
    }

    pub fn fire_destroy(&mut self, event: &DestroyEvent) {
        trace!(listeners = self.destroy.len(); "Firing destroy");
        for listener in &mut self.destroy {
            listener(event);
        }
    }

    pub fn fire_view_switch(&mut self, event: &ViewSwitchEvent) {
        trace!(listeners = self.view_switch.len(); "Firing view switch");
        for listener in &mut self.view_switch {
            listener(event);
        }
    }

    pub fn fire_element_added(&mut self, event: &ElementAddedEvent) {
        trace!(listeners = self.element_added.len(); "Firing element added");
        for listener in &mut self.element_added {
            listener(event);
        }
    }
}

impl Notifier for EventBus {
    fn element_added(&mut self, event: ElementAddedEvent) {
        self.fire_element_added(&event);
    }
}

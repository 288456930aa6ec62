//! Table to diagram synchronization.
//!
//! A decision edited in the table view may not have diagram-interchange (DI)
//! data yet, and only decisions with DI can be drawn. When the user switches
//! from the table to the diagram, [`ViewSyncController`] creates the missing
//! shape and DI bounds so both views describe the same decision.
//!
//! The controller reaches its collaborators through the traits in this module,
//! bundled into [`SyncCapabilities`] at the call site.

use std::rc::Rc;

use log::{debug, info};

use dmn_modeler_core::{
    draw::DiagramShape,
    geometry::{Bounds, Point},
    identifier::Id,
    semantic::{DecisionRef, DiBounds, ElementKind, ExtensionElements, ExtensionValue, Parent},
};

use crate::events::{ElementAddedEvent, ViewSwitchEvent};

/// Creates canvas shapes for semantic elements.
pub trait ShapeFactory {
    /// Create a shape of `kind` at the origin with its natural size.
    fn create_shape(&self, kind: ElementKind, business_object: DecisionRef) -> DiagramShape;
}

/// Creates diagram-interchange records.
pub trait DiFactory {
    fn create_di_bounds(&self, bounds: Bounds) -> DiBounds;
}

/// Receives shapes added to the diagram.
pub trait ShapeSink {
    fn add_shape(&mut self, shape: DiagramShape);
}

/// Announces diagram changes to interested collaborators.
pub trait Notifier {
    fn element_added(&mut self, event: ElementAddedEvent);
}

/// Collaborators used by one synchronization run.
pub struct SyncCapabilities<'a> {
    pub shapes: &'a dyn ShapeFactory,
    pub di: &'a dyn DiFactory,
    pub canvas: &'a mut dyn ShapeSink,
    pub notifier: &'a mut dyn Notifier,
}

/// Result of handling a view switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The switch did not start in the table view.
    NotFromTable,
    /// The decision already owns extension elements.
    AlreadySynchronized,
    /// A shape with this identifier and its DI bounds were created.
    Materialized { shape: Id },
}

/// Materializes diagram shapes for decisions coming from the table view.
#[derive(Debug, Clone, Copy)]
pub struct ViewSyncController {
    origin: Point,
}

impl ViewSyncController {
    /// New shapes are placed with their top-left corner at `origin`.
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Handle a view switch.
    ///
    /// Only a switch from the table for a decision without extension elements
    /// changes anything. The DI structure is fully built and attached to the
    /// decision before the shape reaches the canvas, and the canvas insertion
    /// happens before the added-element notification.
    pub fn sync(&self, event: &ViewSwitchEvent, caps: SyncCapabilities<'_>) -> SyncOutcome {
        if !event.from_table() {
            return SyncOutcome::NotFromTable;
        }

        let decision = event.decision();
        if decision.borrow().has_extension_elements() {
            debug!(decision:% = decision.borrow().id(); "Decision already has DI");
            return SyncOutcome::AlreadySynchronized;
        }

        let shape = caps
            .shapes
            .create_shape(ElementKind::Decision, Rc::clone(decision))
            .with_position(self.origin);
        let decision_id = shape.id();

        let mut di = caps.di.create_di_bounds(shape.bounds());

        let mut extension_elements = ExtensionElements::new();
        extension_elements.set_parent(Parent::Decision(decision_id));
        di.set_parent(Parent::ExtensionElements {
            decision: decision_id,
        });

        extension_elements.push(ExtensionValue::Bounds(di.clone()));
        decision
            .borrow_mut()
            .set_extension_elements(extension_elements);

        caps.canvas.add_shape(shape.clone());
        caps.notifier.element_added(ElementAddedEvent::new(shape, di));

        info!(
            decision:% = decision_id,
            x = self.origin.x(),
            y = self.origin.y();
            "Decision added to diagram"
        );

        SyncOutcome::Materialized { shape: decision_id }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use float_cmp::assert_approx_eq;

    use dmn_modeler_core::{draw::default_size, geometry::Size, semantic::Decision};

    use super::*;

    /// Records the order in which collaborators are used.
    #[derive(Default)]
    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
        shapes: Vec<DiagramShape>,
        events: Vec<ElementAddedEvent>,
    }

    struct Factory;

    impl ShapeFactory for Factory {
        fn create_shape(&self, kind: ElementKind, business_object: DecisionRef) -> DiagramShape {
            DiagramShape::new(kind, business_object, default_size(kind))
        }
    }

    impl DiFactory for Factory {
        fn create_di_bounds(&self, bounds: Bounds) -> DiBounds {
            DiBounds::new(bounds)
        }
    }

    struct CanvasRecorder<'a>(&'a mut Recorder);

    impl ShapeSink for CanvasRecorder<'_> {
        fn add_shape(&mut self, shape: DiagramShape) {
            let decision = shape.business_object().borrow();
            let di = decision.di_bounds().expect("DI attached before canvas insert");
            assert_eq!(
                di.parent(),
                Some(Parent::ExtensionElements {
                    decision: decision.id()
                })
            );
            self.0.log.borrow_mut().push("canvas".to_string());
            drop(decision);
            self.0.shapes.push(shape);
        }
    }

    struct NotifierRecorder(Rc<RefCell<Vec<String>>>, Vec<ElementAddedEvent>);

    impl Notifier for NotifierRecorder {
        fn element_added(&mut self, event: ElementAddedEvent) {
            self.0.borrow_mut().push("notify".to_string());
            self.1.push(event);
        }
    }

    fn run(controller: &ViewSyncController, event: &ViewSwitchEvent) -> (SyncOutcome, Recorder) {
        let mut recorder = Recorder::default();
        let mut notifier = NotifierRecorder(Rc::clone(&recorder.log), Vec::new());
        let outcome = {
            let mut canvas = CanvasRecorder(&mut recorder);
            controller.sync(
                event,
                SyncCapabilities {
                    shapes: &Factory,
                    di: &Factory,
                    canvas: &mut canvas,
                    notifier: &mut notifier,
                },
            )
        };
        recorder.events = notifier.1;
        (outcome, recorder)
    }

    fn controller() -> ViewSyncController {
        ViewSyncController::new(Point::new(200.0, 200.0))
    }

    #[test]
    fn test_materializes_decision_without_di() {
        let decision = Decision::new(Id::new("decision"), "Decision 1").into_ref();
        let event = ViewSwitchEvent::new(Rc::clone(&decision), true);

        let (outcome, recorder) = run(&controller(), &event);

        assert_eq!(
            outcome,
            SyncOutcome::Materialized {
                shape: Id::new("decision")
            }
        );
        assert_eq!(recorder.shapes.len(), 1);
        assert_eq!(recorder.events.len(), 1);
        assert_eq!(*recorder.log.borrow(), vec!["canvas", "notify"]);

        let shape = &recorder.shapes[0];
        assert!(shape.represents(&decision));
        assert_eq!(shape.kind(), ElementKind::Decision);
        assert_eq!(shape.position(), Point::new(200.0, 200.0));
        assert_eq!(shape.size(), Size::new(180.0, 80.0));

        let decision = decision.borrow();
        let extension_elements = decision.extension_elements().unwrap();
        assert_eq!(
            extension_elements.parent(),
            Some(Parent::Decision(Id::new("decision")))
        );
        assert_eq!(extension_elements.values().len(), 1);
        let ExtensionValue::Bounds(di) = &extension_elements.values()[0] else {
            panic!("Expected DI bounds");
        };
        assert_approx_eq!(f32, di.x(), 200.0);
        assert_approx_eq!(f32, di.y(), 200.0);
        assert_approx_eq!(f32, di.width(), 180.0);
        assert_approx_eq!(f32, di.height(), 80.0);

        let added = &recorder.events[0];
        assert_eq!(added.shape().id(), "decision");
        assert_eq!(added.di(), di);
    }

    #[test]
    fn test_skips_decision_with_extension_elements() {
        let decision = Decision::new(Id::new("shown"), "Shown")
            .with_extension_elements(ExtensionElements::new())
            .into_ref();
        let before = decision.borrow().clone();

        let (outcome, recorder) = run(
            &controller(),
            &ViewSwitchEvent::new(Rc::clone(&decision), true),
        );

        assert_eq!(outcome, SyncOutcome::AlreadySynchronized);
        assert!(recorder.shapes.is_empty());
        assert!(recorder.events.is_empty());
        assert_eq!(*decision.borrow(), before);
    }

    #[test]
    fn test_skips_switch_not_from_table() {
        let decision = Decision::new(Id::new("fresh"), "Fresh").into_ref();

        let (outcome, recorder) = run(
            &controller(),
            &ViewSwitchEvent::new(Rc::clone(&decision), false),
        );

        assert_eq!(outcome, SyncOutcome::NotFromTable);
        assert!(recorder.shapes.is_empty());
        assert!(!decision.borrow().has_extension_elements());
    }

    #[test]
    fn test_second_switch_is_noop() {
        let decision = Decision::new(Id::new("again"), "Again").into_ref();
        let event = ViewSwitchEvent::new(Rc::clone(&decision), true);

        let (first, _) = run(&controller(), &event);
        let (second, recorder) = run(&controller(), &event);

        assert!(matches!(first, SyncOutcome::Materialized { .. }));
        assert_eq!(second, SyncOutcome::AlreadySynchronized);
        assert!(recorder.shapes.is_empty());
        assert_eq!(
            decision
                .borrow()
                .extension_elements()
                .map(|ext| ext.values().len()),
            Some(1)
        );
    }

    #[test]
    fn test_custom_origin() {
        let decision = Decision::new(Id::new("placed"), "Placed").into_ref();
        let controller = ViewSyncController::new(Point::new(40.0, 60.0));

        let (_, recorder) = run(&controller, &ViewSwitchEvent::new(decision, true));

        assert_eq!(recorder.shapes[0].position(), Point::new(40.0, 60.0));
    }
}

//! Graphical shapes shown on the decision requirements canvas.
//!
//! A [`DiagramShape`] is the canvas-side proxy of a semantic element. It keeps
//! a back-reference to its business object and its own position and size; the
//! element itself only owns the diagram-interchange data describing the shape.

use std::{fmt, rc::Rc};

use crate::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
    semantic::{DecisionRef, ElementKind},
};

/// Natural size of a freshly created shape of the given kind.
///
/// Decisions are drawn as 180 x 80 boxes; everything else falls back to
/// 100 x 80.
pub fn default_size(kind: ElementKind) -> Size {
    match kind {
        ElementKind::Decision => Size::new(180.0, 80.0),
        _ => Size::new(100.0, 80.0),
    }
}

/// A shape on the canvas, backed by a decision.
#[derive(Debug, Clone)]
pub struct DiagramShape {
    id: Id,
    kind: ElementKind,
    business_object: DecisionRef,
    position: Point,
    size: Size,
}

impl DiagramShape {
    /// Create a shape at the origin.
    ///
    /// The shape takes its identifier from the business object.
    pub fn new(kind: ElementKind, business_object: DecisionRef, size: Size) -> Self {
        let id = business_object.borrow().id();
        Self {
            id,
            kind,
            business_object,
            position: Point::default(),
            size,
        }
    }

    /// Set the top-left position (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Override the size (builder style).
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn business_object(&self) -> &DecisionRef {
        &self.business_object
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position, self.size)
    }

    /// Returns true if this shape represents `decision`.
    pub fn represents(&self, decision: &DecisionRef) -> bool {
        Rc::ptr_eq(&self.business_object, decision)
    }
}

impl fmt::Display for DiagramShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.id)
    }
}

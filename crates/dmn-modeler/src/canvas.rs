//! The shared drawing surface.
//!
//! [`Canvas`] owns every shape currently displayed on the decision
//! requirements diagram, keyed by shape identifier in insertion order.

use indexmap::IndexMap;
use log::{debug, warn};

use dmn_modeler_core::{draw::DiagramShape, identifier::Id};

use crate::sync::ShapeSink;

#[derive(Debug, Default)]
pub struct Canvas {
    shapes: IndexMap<Id, DiagramShape>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape, replacing any shape with the same identifier.
    pub fn add_shape(&mut self, shape: DiagramShape) {
        let id = shape.id();
        if self.shapes.insert(id, shape).is_some() {
            warn!(shape:% = id; "Replaced existing shape on canvas");
        } else {
            debug!(shape:% = id; "Shape added to canvas");
        }
    }

    pub fn shape(&self, id: Id) -> Option<&DiagramShape> {
        self.shapes.get(&id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Iterate over shapes in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &DiagramShape> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl ShapeSink for Canvas {
    fn add_shape(&mut self, shape: DiagramShape) {
        Canvas::add_shape(self, shape);
    }
}

#[cfg(test)]
mod tests {
    use dmn_modeler_core::{
        draw::default_size,
        geometry::Point,
        semantic::{Decision, ElementKind},
    };

    use super::*;

    fn shape(id: &str, position: Point) -> DiagramShape {
        let decision = Decision::new(Id::new(id), id).into_ref();
        DiagramShape::new(
            ElementKind::Decision,
            decision,
            default_size(ElementKind::Decision),
        )
        .with_position(position)
    }

    #[test]
    fn test_add_and_lookup() {
        let mut canvas = Canvas::new();
        canvas.add_shape(shape("a", Point::default()));
        canvas.add_shape(shape("b", Point::default()));

        assert_eq!(canvas.len(), 2);
        assert!(canvas.contains(Id::new("a")));
        assert!(canvas.shape(Id::new("c")).is_none());

        let order: Vec<String> = canvas.shapes().map(|s| s.id().to_string()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_same_id_replaces() {
        let mut canvas = Canvas::new();
        canvas.add_shape(shape("a", Point::new(0.0, 0.0)));
        canvas.add_shape(shape("a", Point::new(5.0, 5.0)));

        assert_eq!(canvas.len(), 1);
        assert_eq!(
            canvas.shape(Id::new("a")).map(DiagramShape::position),
            Some(Point::new(5.0, 5.0))
        );
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new();
        canvas.add_shape(shape("a", Point::default()));
        canvas.clear();

        assert!(canvas.is_empty());
    }

    #[test]
    fn test_shape_sink_delegates() {
        let mut canvas = Canvas::new();
        ShapeSink::add_shape(&mut canvas, shape("sink", Point::default()));

        assert!(canvas.contains(Id::new("sink")));
    }
}

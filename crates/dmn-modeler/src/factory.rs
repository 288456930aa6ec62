//! Default factories for shapes and diagram-interchange records.

use dmn_modeler_core::{
    draw::{DiagramShape, default_size},
    geometry::Bounds,
    semantic::{DecisionRef, DiBounds, ElementKind},
};

use crate::sync::{DiFactory, ShapeFactory};

/// Creates shapes sized by element kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementFactory;

impl ShapeFactory for ElementFactory {
    fn create_shape(&self, kind: ElementKind, business_object: DecisionRef) -> DiagramShape {
        DiagramShape::new(kind, business_object, default_size(kind))
    }
}

/// Creates diagram-interchange records for the decision requirements diagram.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrdFactory;

impl DiFactory for DrdFactory {
    fn create_di_bounds(&self, bounds: Bounds) -> DiBounds {
        DiBounds::new(bounds)
    }
}

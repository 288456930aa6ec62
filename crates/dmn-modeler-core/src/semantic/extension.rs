//! Extension elements and diagram-interchange bounds.

use crate::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

/// Containment link from an auxiliary element to the element holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// Held directly by the decision with this id.
    Decision(Id),
    /// Held by the extension elements container of the decision with this id.
    ExtensionElements { decision: Id },
}

/// Geometry record describing where a decision is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct DiBounds {
    bounds: Bounds,
    parent: Option<Parent>,
}

impl DiBounds {
    /// Creates detached bounds.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            parent: None,
        }
    }

    /// Creates detached bounds from a top-left position and a size.
    pub fn from_position(position: Point, size: Size) -> Self {
        Self::new(Bounds::new_from_top_left(position, size))
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn x(&self) -> f32 {
        self.bounds.min_x()
    }

    pub fn y(&self) -> f32 {
        self.bounds.min_y()
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    pub fn parent(&self) -> Option<Parent> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Parent) {
        self.parent = Some(parent);
    }
}

/// One entry of an [`ExtensionElements`] container.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionValue {
    Bounds(DiBounds),
    /// Auxiliary data the modeler carries along without interpreting it.
    Opaque { element: String },
}

/// Open container for auxiliary, non-core data attached to a decision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionElements {
    parent: Option<Parent>,
    values: Vec<ExtensionValue>,
}

impl ExtensionElements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent(&self) -> Option<Parent> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Parent) {
        self.parent = Some(parent);
    }

    pub fn values(&self) -> &[ExtensionValue] {
        &self.values
    }

    pub fn push(&mut self, value: ExtensionValue) {
        self.values.push(value);
    }

    /// Returns the first diagram-interchange bounds in the container.
    pub fn bounds(&self) -> Option<&DiBounds> {
        self.values.iter().find_map(|value| match value {
            ExtensionValue::Bounds(bounds) => Some(bounds),
            ExtensionValue::Opaque { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_di_bounds_geometry() {
        let di = DiBounds::from_position(Point::new(200.0, 200.0), Size::new(180.0, 80.0));

        assert_approx_eq!(f32, di.x(), 200.0);
        assert_approx_eq!(f32, di.y(), 200.0);
        assert_approx_eq!(f32, di.width(), 180.0);
        assert_approx_eq!(f32, di.height(), 80.0);
        assert_eq!(di.parent(), None);
    }

    #[test]
    fn test_bounds_skips_opaque_values() {
        let mut container = ExtensionElements::new();
        container.push(ExtensionValue::Opaque {
            element: "camunda:properties".to_string(),
        });
        assert!(container.bounds().is_none());

        let di = DiBounds::from_position(Point::new(1.0, 2.0), Size::new(3.0, 4.0));
        container.push(ExtensionValue::Bounds(di.clone()));

        assert_eq!(container.bounds(), Some(&di));
        assert_eq!(container.values().len(), 2);
    }

    #[test]
    fn test_parent_links() {
        let decision = Id::new("decision");
        let mut container = ExtensionElements::new();
        container.set_parent(Parent::Decision(decision));

        let mut di = DiBounds::new(Bounds::default());
        di.set_parent(Parent::ExtensionElements { decision });

        assert_eq!(container.parent(), Some(Parent::Decision(decision)));
        assert_eq!(di.parent(), Some(Parent::ExtensionElements { decision }));
    }
}

//! Configuration types for the modeler.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as TOML files.
//!
//! # Overview
//!
//! - [`ModelerConfig`] - Top-level configuration combining the sections below.
//! - [`IdPolicy`] - Length policy of generated identifiers (`[ids]` section).
//! - [`PlacementConfig`] - Where decisions first appear on the canvas (`[placement]` section).
//!
//! # Example
//!
//! ```
//! # use dmn_modeler::config::ModelerConfig;
//! let config = ModelerConfig::default();
//! assert_eq!(config.placement().origin().x(), 200.0);
//! assert!(config.ids().validate().is_ok());
//! ```

use serde::Deserialize;

use dmn_modeler_core::geometry::Point;

pub use dmn_modeler_core::ids::IdPolicy;

/// Top-level modeler configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelerConfig {
    /// Identifier generation section.
    #[serde(default)]
    ids: IdPolicy,

    /// Shape placement section.
    #[serde(default)]
    placement: PlacementConfig,
}

impl ModelerConfig {
    /// Creates a new [`ModelerConfig`] from its sections.
    pub fn new(ids: IdPolicy, placement: PlacementConfig) -> Self {
        Self { ids, placement }
    }

    /// Returns the identifier generation policy.
    pub fn ids(&self) -> IdPolicy {
        self.ids
    }

    /// Returns the placement configuration.
    pub fn placement(&self) -> &PlacementConfig {
        &self.placement
    }
}

/// Placement of decisions materialized from the table view.
///
/// Every decision switched from the table to the diagram lands at the same
/// top-left `origin`; there is no automatic layout.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacementConfig {
    #[serde(default = "default_origin")]
    origin: Point,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

impl PlacementConfig {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Returns the top-left position of newly materialized shapes.
    pub fn origin(&self) -> Point {
        self.origin
    }
}

fn default_origin() -> Point {
    Point::new(200.0, 200.0)
}

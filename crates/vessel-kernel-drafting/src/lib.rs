#![warn(missing_docs)]

//! 2D drafting for the vessel kernel.
//!
//! This crate turns radius/height profiles into flat drafting entities:
//!
//! - **Side view**: the profile silhouette, its mirror across the axis,
//!   a centerline and cross ties
//! - **Top view**: concentric circles at a separate anchor point
//! - **Annotations**: stacked text labels
//!
//! Entities are collected in a [`Drawing`], which a CAD writer serializes.
//!
//! # Example
//!
//! ```
//! use vessel_kernel_drafting::{Drawing, Point2D, ProfileProjector};
//! use vessel_kernel_math::Profile;
//!
//! let profile = Profile::from_pairs(&[(40.0, 0.0), (55.0, 40.0), (42.0, 120.0)]);
//! let projector = ProfileProjector::default();
//!
//! let mut drawing = Drawing::new();
//! drawing.extend(projector.side_view(&profile));
//! drawing.extend(projector.top_view(Point2D::new(200.0, 60.0), &[55.0, 42.0]));
//! assert_eq!(drawing.len(), 2 + 2 + 3 + 2);
//! ```

pub mod projection;
pub mod types;

pub use projection::{polyline, ProfileProjector, ProjectorOptions};
pub use types::{DraftEntity, Layer, Point2D};

/// An ordered collection of drafting entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    entities: Vec<DraftEntity>,
}

impl Drawing {
    /// Create an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entity.
    pub fn push(&mut self, entity: DraftEntity) {
        self.entities.push(entity);
    }

    /// Entities in emission order.
    pub fn entities(&self) -> &[DraftEntity] {
        &self.entities
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities on `layer`.
    pub fn count_on(&self, layer: Layer) -> usize {
        self.entities.iter().filter(|e| e.layer() == layer).count()
    }
}

impl Extend<DraftEntity> for Drawing {
    fn extend<I: IntoIterator<Item = DraftEntity>>(&mut self, iter: I) {
        self.entities.extend(iter);
    }
}

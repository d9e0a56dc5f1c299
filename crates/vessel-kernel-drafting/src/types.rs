//! Core types for 2D drafting output.

use serde::{Deserialize, Serialize};
use vessel_kernel_math::ProfilePoint;

/// A 2D drawing-plane point.
///
/// Plain `f64` pair so entities serialize without nalgebra's serde feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflect across the vertical (Y) axis.
    pub fn mirrored(&self) -> Self {
        Self::new(-self.x, self.y)
    }
}

/// Side-view position of a profile station: radius on X, axial on Y.
impl From<&ProfilePoint> for Point2D {
    fn from(p: &ProfilePoint) -> Self {
        Self {
            x: p.radius,
            y: p.axial,
        }
    }
}

/// Fixed drawing layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Side-view silhouette and cross ties.
    Side,
    /// Axis of revolution.
    Center,
    /// Top-view circles.
    Top,
    /// Text annotations.
    Annotation,
}

impl Layer {
    /// Layer name as written to the CAD stream.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Side => "SIDE",
            Layer::Center => "CENTER",
            Layer::Top => "TOP",
            Layer::Annotation => "ANNOT",
        }
    }
}

/// One drafting entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DraftEntity {
    /// Straight segment.
    Line {
        /// Start point.
        start: Point2D,
        /// End point.
        end: Point2D,
        /// Layer.
        layer: Layer,
    },
    /// Full circle.
    Circle {
        /// Centre.
        center: Point2D,
        /// Radius.
        radius: f64,
        /// Layer.
        layer: Layer,
    },
    /// Single-line text label.
    Text {
        /// Insertion point.
        position: Point2D,
        /// Glyph height.
        height: f64,
        /// Label text.
        text: String,
        /// Layer.
        layer: Layer,
    },
}

impl DraftEntity {
    /// Layer the entity lives on.
    pub fn layer(&self) -> Layer {
        match self {
            DraftEntity::Line { layer, .. }
            | DraftEntity::Circle { layer, .. }
            | DraftEntity::Text { layer, .. } => *layer,
        }
    }
}

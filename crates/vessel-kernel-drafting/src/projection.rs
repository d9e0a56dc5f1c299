//! Projection of revolved profiles into 2D views.
//!
//! The side view lays the profile in the drawing plane with radius on X and
//! axial position on Y, mirrors it across the axis for the opposite
//! silhouette and adds a centerline plus top/bottom cross ties. The top view
//! is a set of concentric circles at a separate anchor.

use vessel_kernel_math::Profile;

use crate::types::{DraftEntity, Layer, Point2D};

/// Options controlling side-view decoration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectorOptions {
    /// How far the centerline runs below the first station.
    pub centerline_below: f64,
    /// How far the centerline runs above the last station.
    pub centerline_above: f64,
}

impl Default for ProjectorOptions {
    fn default() -> Self {
        Self {
            centerline_below: 8.0,
            centerline_above: 12.0,
        }
    }
}

/// Projects profiles into drafting entities.
#[derive(Debug, Clone, Default)]
pub struct ProfileProjector {
    options: ProjectorOptions,
}

impl ProfileProjector {
    /// Create a projector with the given options.
    pub fn new(options: ProjectorOptions) -> Self {
        Self { options }
    }

    /// Right-hand silhouette points `(radius, axial)`.
    pub fn silhouette(profile: &Profile) -> Vec<Point2D> {
        profile.iter().map(Point2D::from).collect()
    }

    /// Side view of a profile.
    ///
    /// Emits, in order: the right silhouette polyline, its mirror image, the
    /// centerline, then the bottom and top cross ties. A profile with fewer
    /// than two stations yields no entities.
    pub fn side_view(&self, profile: &Profile) -> Vec<DraftEntity> {
        let (Some(first), Some(last)) = (profile.first(), profile.last()) else {
            return Vec::new();
        };
        if profile.len() < 2 {
            return Vec::new();
        }

        let right = Self::silhouette(profile);
        let left: Vec<Point2D> = right.iter().map(Point2D::mirrored).collect();

        let mut entities = Vec::with_capacity(2 * (right.len() - 1) + 3);
        entities.extend(polyline(&right, Layer::Side));
        entities.extend(polyline(&left, Layer::Side));

        entities.push(DraftEntity::Line {
            start: Point2D::new(0.0, first.axial - self.options.centerline_below),
            end: Point2D::new(0.0, last.axial + self.options.centerline_above),
            layer: Layer::Center,
        });
        entities.push(cross_tie(first.radius, first.axial));
        entities.push(cross_tie(last.radius, last.axial));

        entities
    }

    /// Top view: one circle per radius around `anchor`, in the given order.
    pub fn top_view(&self, anchor: Point2D, radii: &[f64]) -> Vec<DraftEntity> {
        radii
            .iter()
            .map(|&radius| DraftEntity::Circle {
                center: anchor,
                radius,
                layer: Layer::Top,
            })
            .collect()
    }

    /// Stack of annotation lines starting at `origin` and running downward
    /// by `spacing`.
    pub fn text_block<S: AsRef<str>>(
        &self,
        origin: Point2D,
        lines: &[S],
        height: f64,
        spacing: f64,
    ) -> Vec<DraftEntity> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| DraftEntity::Text {
                position: Point2D::new(origin.x, origin.y - spacing * i as f64),
                height,
                text: line.as_ref().to_string(),
                layer: Layer::Annotation,
            })
            .collect()
    }
}

/// Open polyline as consecutive line segments.
pub fn polyline(points: &[Point2D], layer: Layer) -> Vec<DraftEntity> {
    points
        .windows(2)
        .map(|w| DraftEntity::Line {
            start: w[0],
            end: w[1],
            layer,
        })
        .collect()
}

fn cross_tie(radius: f64, axial: f64) -> DraftEntity {
    DraftEntity::Line {
        start: Point2D::new(-radius, axial),
        end: Point2D::new(radius, axial),
        layer: Layer::Side,
    }
}

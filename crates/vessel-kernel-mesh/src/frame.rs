//! Local orthonormal frames for orienting tube cross-sections along a poly-line.

use vessel_kernel_math::{normalize_or_keep, Point3, Vec3};

/// Above this |tangent · up|, the reference up vector switches axis.
pub const PARALLEL_THRESHOLD: f64 = 0.92;

/// A frame at one station of a tube path.
///
/// - **Tangent**: direction of travel along the path
/// - **Normal**: `tangent × up`, normalized
/// - **Binormal**: `tangent × normal`
///
/// The cross-section circle lies in the normal/binormal plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeFrame {
    /// Station position.
    pub position: Point3,
    /// Unit tangent (zero only for a fully degenerate path).
    pub tangent: Vec3,
    /// Unit normal.
    pub normal: Vec3,
    /// Binormal, perpendicular to tangent and normal.
    pub binormal: Vec3,
}

impl TubeFrame {
    /// Build the frame at `position` for a (not necessarily unit) tangent.
    ///
    /// The reference up vector is +Z, or +Y when the tangent is within
    /// [`PARALLEL_THRESHOLD`] of +Z, so the cross product never collapses.
    pub fn from_tangent(position: Point3, tangent: Vec3) -> Self {
        let tangent = normalize_or_keep(tangent);

        let up = if tangent.z.abs() > PARALLEL_THRESHOLD {
            Vec3::y()
        } else {
            Vec3::z()
        };

        let normal = normalize_or_keep(tangent.cross(&up));
        let binormal = tangent.cross(&normal);

        Self {
            position,
            tangent,
            normal,
            binormal,
        }
    }

    /// Map a point of the cross-section plane to world coordinates.
    ///
    /// `(u, v)` are coordinates along the normal and binormal.
    pub fn transform_point(&self, u: f64, v: f64) -> Point3 {
        self.position + u * self.normal + v * self.binormal
    }
}

/// Tangent at station `idx` of `points`.
///
/// Forward difference at the first point, backward difference at the last,
/// central difference `next − previous` elsewhere. Not normalized.
pub fn station_tangent(points: &[Point3], idx: usize) -> Vec3 {
    let last = points.len().saturating_sub(1);
    if points.len() < 2 {
        return Vec3::zeros();
    }
    if idx == 0 {
        points[1] - points[0]
    } else if idx >= last {
        points[last] - points[last - 1]
    } else {
        points[idx + 1] - points[idx - 1]
    }
}

/// Frames for every station of a poly-line.
pub fn path_frames(points: &[Point3]) -> Vec<TubeFrame> {
    if points.len() < 2 {
        return Vec::new();
    }
    (0..points.len())
        .map(|i| TubeFrame::from_tangent(points[i], station_tangent(points, i)))
        .collect()
}

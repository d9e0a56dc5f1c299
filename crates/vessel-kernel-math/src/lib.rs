#![warn(missing_docs)]

//! Math types for the vessel geometry kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types
//! for revolved vessel geometry: points and vectors, radius clamping,
//! radius/height profiles and the closed-form measures of the solids
//! those profiles describe.

use nalgebra::Vector3;

pub mod profile;
pub mod solids;

pub use profile::{Profile, ProfilePoint};
pub use solids::{
    annulus_area, cylinder_volume, disc_area, frustum_lateral_area, frustum_volume, torus_volume,
};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Smallest radius any working radius is clamped to, in mm.
///
/// Wall-reduced radii below this would produce non-physical or singular
/// geometry.
pub const RADIUS_FLOOR_MM: f64 = 1.0;

/// Clamp a radius to [`RADIUS_FLOOR_MM`].
pub fn floor_radius(r: f64) -> f64 {
    r.max(RADIUS_FLOOR_MM)
}

/// Divide a vector by its length, treating a zero length as 1.0.
///
/// A zero vector therefore comes back unchanged instead of turning into NaN.
pub fn normalize_or_keep(v: Vec3) -> Vec3 {
    let len = v.norm();
    if len > 0.0 {
        v / len
    } else {
        v
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

//! Closed-form measures of the solids a vessel is decomposed into.
//!
//! All lengths in mm, areas in mm², volumes in mm³.

use std::f64::consts::PI;

/// Volume of a conical frustum with end radii `r1`, `r2` and height `h`.
///
/// `π·h·(r1² + r1·r2 + r2²) / 3`; equals `π·r²·h` when `r1 == r2`.
pub fn frustum_volume(r1: f64, r2: f64, h: f64) -> f64 {
    PI * h * (r1 * r1 + r1 * r2 + r2 * r2) / 3.0
}

/// Lateral (side) surface area of a conical frustum.
///
/// `π·(r1 + r2)·slant`, where the slant length is `√((r1 − r2)² + h²)`.
pub fn frustum_lateral_area(r1: f64, r2: f64, h: f64) -> f64 {
    let slant = ((r1 - r2).powi(2) + h * h).sqrt();
    PI * (r1 + r2) * slant
}

/// Volume of a right circular cylinder.
pub fn cylinder_volume(r: f64, h: f64) -> f64 {
    PI * r * r * h
}

/// Volume of a torus with major radius `major` and tube radius `minor`.
pub fn torus_volume(major: f64, minor: f64) -> f64 {
    2.0 * PI * PI * major * minor * minor
}

/// Area of a disc of the given diameter.
pub fn disc_area(diameter: f64) -> f64 {
    PI * diameter * diameter / 4.0
}

/// Area of a flat ring between two diameters.
pub fn annulus_area(outer_diameter: f64, inner_diameter: f64) -> f64 {
    PI * (outer_diameter * outer_diameter - inner_diameter * inner_diameter) / 4.0
}

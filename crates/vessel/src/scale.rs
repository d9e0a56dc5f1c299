//! Uniform scaling of the baseline vessel to a target capacity.

use tracing::debug;
use vessel_ir::Dimensions;
use vessel_kernel_math::round_to;

use crate::capacity::estimate_capacity_ml;

/// Millilitres per US customary cup.
pub const US_CUP_TO_ML: f64 = 236.588;

/// Convert US cups to millilitres.
pub fn cups_to_ml(cups: f64) -> f64 {
    cups * US_CUP_TO_ML
}

/// Linear factor that scales `baseline` to `target_ml`, assuming volume
/// grows with the cube of length.
pub fn linear_scale_factor(baseline: &Dimensions, target_ml: f64) -> f64 {
    (target_ml / estimate_capacity_ml(baseline)).cbrt()
}

/// Multiply every linear field by `scale`, rounding each to 0.01 mm.
///
/// `overall_height_mm` is rebuilt from the scaled parts rather than scaled
/// itself. Targets and the capacity estimate are left untouched.
pub fn scale_dimensions(dimensions: &Dimensions, scale: f64) -> Dimensions {
    let mut scaled = dimensions.clone();
    for field in scaled.linear_fields_mut() {
        *field = round_to(*field * scale, 2);
    }
    scaled.overall_height_mm = round_to(scaled.stacked_height(), 2);
    scaled
}

/// Baseline vessel scaled to hold `cups` US cups.
///
/// This is a single cube-root step: the estimated capacity of the result is
/// close to, but not exactly, the target. `capacity_target_ml` is the exact
/// figure; `estimated_capacity_ml` is informational.
pub fn create_default_dimensions(cups: f64) -> Dimensions {
    let base = Dimensions::default();
    let target_ml = cups_to_ml(cups);
    let scale = linear_scale_factor(&base, target_ml);

    let mut scaled = scale_dimensions(&base, scale);
    scaled.cups_target = round_to(cups, 2);
    scaled.capacity_target_ml = round_to(target_ml, 1);
    scaled.estimated_capacity_ml = estimate_capacity_ml(&scaled);

    debug!(
        cups,
        scale,
        target_ml = scaled.capacity_target_ml,
        estimated_ml = scaled.estimated_capacity_ml,
        "scaled baseline dimensions"
    );
    scaled
}

//! Building and recomputing blueprint documents.
//!
//! [`recompute`] is the only path that turns a possibly client-edited
//! document into a consistent one. It never edits its input.

use tracing::debug;
use vessel_ir::{Blueprint, MaterialSuggestion};
use vessel_kernel_math::round_to;

use crate::bom::generate_bom;
use crate::capacity::estimate_capacity_ml;
use crate::error::{Result, VesselError};
use crate::materials::merge_materials;
use crate::scale::create_default_dimensions;

/// Smallest cup count accepted by [`build_blueprint`].
pub const MIN_CUPS: f64 = 1.0;

/// Largest cup count accepted by [`build_blueprint`].
pub const MAX_CUPS: f64 = 12.0;

/// Fresh blueprint for a vessel holding `cups` US cups.
///
/// Dimensions come from the scaled baseline, materials from merging
/// `suggestions` against the default table, and the BOM from both.
pub fn build_blueprint(
    cups: f64,
    suggestions: &[MaterialSuggestion],
    analysis_notes: Vec<String>,
) -> Result<Blueprint> {
    if !(MIN_CUPS..=MAX_CUPS).contains(&cups) {
        return Err(VesselError::InvalidCups(cups));
    }

    let dimensions = create_default_dimensions(cups);
    let materials = merge_materials(suggestions);
    let bom = generate_bom(&dimensions, &materials);

    let mut blueprint = Blueprint::new(dimensions);
    blueprint.materials = materials;
    blueprint.bom = bom;
    blueprint.analysis_notes = analysis_notes;

    debug!(
        cups,
        parts = blueprint.bom.len(),
        materials = blueprint.materials.len(),
        "built blueprint"
    );
    Ok(blueprint)
}

/// Validate `blueprint` and return a consistent copy.
///
/// Rebuilds the overall height and capacity estimate, re-merges the
/// materials and regenerates the BOM. Idempotent:
/// `recompute(&recompute(b)?)? == recompute(b)?`.
pub fn recompute(blueprint: &Blueprint) -> Result<Blueprint> {
    blueprint.validate()?;

    let mut updated = blueprint.clone();
    let d = &mut updated.dimensions;
    d.overall_height_mm = round_to(d.stacked_height(), 2);
    d.estimated_capacity_ml = estimate_capacity_ml(d);

    updated.materials = merge_materials(&blueprint.materials);
    updated.bom = generate_bom(&updated.dimensions, &updated.materials);

    debug!(
        overall_height_mm = updated.dimensions.overall_height_mm,
        estimated_capacity_ml = updated.dimensions.estimated_capacity_ml,
        "recomputed blueprint"
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vessel_ir::{Dimensions, ValidationError};

    #[test]
    fn test_build_defaults() {
        let bp = build_blueprint(4.0, &[], Vec::new()).unwrap();
        assert_eq!(bp.title, "Curved-Head Teapot Blueprint");
        assert_eq!(bp.design_version, "v1");
        assert_eq!(bp.units, "mm");
        assert_eq!(bp.materials.len(), 6);
        assert_eq!(bp.bom.len(), 6);
        assert!(bp.analysis_notes.is_empty());
    }

    #[test]
    fn test_build_rejects_cups_out_of_range() {
        assert!(matches!(
            build_blueprint(0.5, &[], Vec::new()),
            Err(VesselError::InvalidCups(c)) if c == 0.5
        ));
        assert!(build_blueprint(12.5, &[], Vec::new()).is_err());
        assert!(build_blueprint(f64::NAN, &[], Vec::new()).is_err());
        assert!(build_blueprint(1.0, &[], Vec::new()).is_ok());
        assert!(build_blueprint(12.0, &[], Vec::new()).is_ok());
    }

    #[test]
    fn test_recompute_fixes_stale_fields() {
        let mut bp = build_blueprint(4.0, &[], vec!["note".to_string()]).unwrap();
        bp.dimensions.body_height_mm = 130.0;
        bp.dimensions.overall_height_mm = 1.0;
        bp.bom.clear();

        let fixed = recompute(&bp).unwrap();
        let d = &fixed.dimensions;
        assert_eq!(d.overall_height_mm, round_to(d.stacked_height(), 2));
        assert_eq!(d.estimated_capacity_ml, estimate_capacity_ml(d));
        assert_eq!(fixed.bom.len(), 6);
        assert_eq!(fixed.analysis_notes, vec!["note".to_string()]);
        // input untouched
        assert_eq!(bp.dimensions.overall_height_mm, 1.0);
    }

    #[test]
    fn test_recompute_idempotent() {
        let bp = build_blueprint(6.0, &[MaterialSuggestion::keyed("gasket", 0.4)], Vec::new()).unwrap();
        let once = recompute(&bp).unwrap();
        let twice = recompute(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_recompute_rejects_invalid() {
        let mut bp = Blueprint::new(Dimensions::default());
        bp.dimensions.wall_thickness_mm = -0.2;
        match recompute(&bp) {
            Err(VesselError::Validation(ValidationError::BelowMinimum { field, .. })) => {
                assert_eq!(field, "wall_thickness_mm");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_recompute_rejects_crossed_fields() {
        let mut bp = build_blueprint(4.0, &[], Vec::new()).unwrap();
        bp.dimensions.insert_outer_diameter_mm = 20.0;
        bp.dimensions.insert_inner_diameter_mm = 200.0;
        assert!(matches!(
            recompute(&bp),
            Err(VesselError::Validation(ValidationError::NotLessThan {
                field: "insert_inner_diameter_mm",
                ..
            }))
        ));

        let mut bp = build_blueprint(4.0, &[], Vec::new()).unwrap();
        bp.dimensions.head_neck_overlap_mm = 200.0;
        assert!(matches!(
            recompute(&bp),
            Err(VesselError::Validation(ValidationError::NotLessThan {
                field: "head_neck_overlap_mm",
                ..
            }))
        ));
    }

    #[test]
    fn test_recompute_rejects_other_units() {
        let mut bp = build_blueprint(4.0, &[], Vec::new()).unwrap();
        bp.units = "in".to_string();
        assert!(matches!(
            recompute(&bp),
            Err(VesselError::Validation(ValidationError::Units { .. }))
        ));
    }
}

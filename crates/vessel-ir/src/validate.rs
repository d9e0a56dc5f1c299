//! Range checks for documents arriving from clients.

use thiserror::Error;

use crate::{Blueprint, Dimensions, MaterialSuggestion, UNITS_MM};

/// A document field outside its declared range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Offending field.
        field: &'static str,
    },

    /// Value is below the field's lower bound.
    #[error("{field} = {value} is below the minimum of {min}")]
    BelowMinimum {
        /// Offending field.
        field: &'static str,
        /// Supplied value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
    },

    /// Value is above the field's upper bound.
    #[error("{field} = {value} is above the maximum of {max}")]
    AboveMaximum {
        /// Offending field.
        field: &'static str,
        /// Supplied value.
        value: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// Two related fields out of order.
    #[error("{field} = {value} must be less than {limit_field} = {limit}")]
    NotLessThan {
        /// Field that must be the smaller one.
        field: &'static str,
        /// Its supplied value.
        value: f64,
        /// Field bounding it from above.
        limit_field: &'static str,
        /// Value of the bounding field.
        limit: f64,
    },

    /// Document claims a length unit other than millimetres.
    #[error("units '{units}' are not supported (values are always in mm)")]
    Units {
        /// Supplied unit string.
        units: String,
    },

    /// Material confidence outside `[0, 1]`.
    #[error("confidence {value} for material '{part_key}' must lie in [0, 1]")]
    Confidence {
        /// Part the suggestion belongs to.
        part_key: String,
        /// Supplied confidence.
        value: f64,
    },
}

/// `(field, value, min, max)` for every validated dimension field.
///
/// `estimated_capacity_ml` and `overall_height_mm` are derived and
/// overwritten on recompute, so they are not listed.
fn dimension_bounds(d: &Dimensions) -> [(&'static str, f64, f64, Option<f64>); 21] {
    [
        ("cups_target", d.cups_target, 1.0, Some(12.0)),
        ("capacity_target_ml", d.capacity_target_ml, 100.0, None),
        ("wall_thickness_mm", d.wall_thickness_mm, 0.4, Some(3.0)),
        ("manufacturing_tolerance_mm", d.manufacturing_tolerance_mm, 0.05, Some(1.0)),
        ("body_height_mm", d.body_height_mm, 50.0, None),
        ("body_max_diameter_mm", d.body_max_diameter_mm, 60.0, None),
        ("body_bottom_diameter_mm", d.body_bottom_diameter_mm, 40.0, None),
        ("neck_diameter_mm", d.neck_diameter_mm, 40.0, None),
        ("head_height_mm", d.head_height_mm, 20.0, None),
        ("head_top_diameter_mm", d.head_top_diameter_mm, 60.0, None),
        ("head_neck_overlap_mm", d.head_neck_overlap_mm, 0.0, None),
        ("handle_length_mm", d.handle_length_mm, 40.0, None),
        ("handle_drop_mm", d.handle_drop_mm, 20.0, None),
        ("handle_offset_mm", d.handle_offset_mm, 5.0, None),
        ("handle_thickness_mm", d.handle_thickness_mm, 6.0, None),
        ("insert_outer_diameter_mm", d.insert_outer_diameter_mm, 20.0, None),
        ("insert_inner_diameter_mm", d.insert_inner_diameter_mm, 10.0, None),
        ("insert_height_mm", d.insert_height_mm, 8.0, None),
        ("gasket_cross_section_mm", d.gasket_cross_section_mm, 1.0, None),
        ("base_cap_height_mm", d.base_cap_height_mm, 2.0, None),
        ("base_cap_diameter_mm", d.base_cap_diameter_mm, 30.0, None),
    ]
}

fn check(field: &'static str, value: f64, min: f64, max: Option<f64>) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < min {
        return Err(ValidationError::BelowMinimum { field, value, min });
    }
    match max {
        Some(max) if value > max => Err(ValidationError::AboveMaximum { field, value, max }),
        _ => Ok(()),
    }
}

/// `(field, value, limit_field, limit)` pairs where `value < limit` must hold.
///
/// The insert opening has to fit inside its collar, and the head must rise
/// above the neck so the stacked height stays above the body height.
fn ordered_pairs(d: &Dimensions) -> [(&'static str, f64, &'static str, f64); 2] {
    [
        (
            "insert_inner_diameter_mm",
            d.insert_inner_diameter_mm,
            "insert_outer_diameter_mm",
            d.insert_outer_diameter_mm,
        ),
        (
            "head_neck_overlap_mm",
            d.head_neck_overlap_mm,
            "head_height_mm",
            d.head_height_mm,
        ),
    ]
}

impl Dimensions {
    /// Check every client-supplied field against its range, then the
    /// fields that constrain each other.
    ///
    /// Returns the first violation in declaration order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value, min, max) in dimension_bounds(self) {
            check(field, value, min, max)?;
        }
        for (field, value, limit_field, limit) in ordered_pairs(self) {
            if value >= limit {
                return Err(ValidationError::NotLessThan {
                    field,
                    value,
                    limit_field,
                    limit,
                });
            }
        }
        Ok(())
    }
}

impl MaterialSuggestion {
    /// Check the confidence range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ValidationError::Confidence {
                part_key: self.part_key.clone(),
                value: self.confidence,
            });
        }
        Ok(())
    }
}

impl Blueprint {
    /// Validate units, dimensions and material suggestions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.units != UNITS_MM {
            return Err(ValidationError::Units {
                units: self.units.clone(),
            });
        }
        self.dimensions.validate()?;
        self.materials.iter().try_for_each(MaterialSuggestion::validate)
    }
}

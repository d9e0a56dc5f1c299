//! Document representation for the vessel blueprint pipeline.
//!
//! This crate defines the JSON document exchanged with clients: the
//! dimension model, material suggestions, bill of materials and the
//! blueprint that aggregates them.
//!
//! The IR is purely declarative: no geometry, only the inputs and the
//! derived numbers. Derivation (capacity, BOM, exports) lives in the
//! `vessel` crate.

use serde::{Deserialize, Serialize};

mod validate;

pub use validate::ValidationError;

/// Number of linear (length-valued) dimension fields.
pub const LINEAR_FIELD_COUNT: usize = 19;

/// Linear measurements and capacity targets of the vessel, in mm and mL.
///
/// Missing fields deserialize to the baseline defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// Requested capacity in US cups.
    pub cups_target: f64,
    /// Requested capacity in mL (exact).
    pub capacity_target_ml: f64,
    /// Capacity estimated from the geometry (informational).
    pub estimated_capacity_ml: f64,

    /// Sheet wall thickness.
    pub wall_thickness_mm: f64,
    /// Manufacturing tolerance.
    pub manufacturing_tolerance_mm: f64,

    /// Lower body height.
    pub body_height_mm: f64,
    /// Widest body diameter.
    pub body_max_diameter_mm: f64,
    /// Body diameter at the floor.
    pub body_bottom_diameter_mm: f64,
    /// Diameter where body meets head.
    pub neck_diameter_mm: f64,

    /// Head height, including the overlap into the body.
    pub head_height_mm: f64,
    /// Head rim diameter.
    pub head_top_diameter_mm: f64,
    /// Axial overlap of head and body at the neck.
    pub head_neck_overlap_mm: f64,

    /// Handle path length.
    pub handle_length_mm: f64,
    /// Vertical drop of the handle.
    pub handle_drop_mm: f64,
    /// Gap between head rim and handle.
    pub handle_offset_mm: f64,
    /// Handle cross-section thickness.
    pub handle_thickness_mm: f64,

    /// Insert collar outer diameter.
    pub insert_outer_diameter_mm: f64,
    /// Insert opening diameter.
    pub insert_inner_diameter_mm: f64,
    /// Insert collar height.
    pub insert_height_mm: f64,

    /// Gasket cord diameter.
    pub gasket_cross_section_mm: f64,
    /// Base cap height.
    pub base_cap_height_mm: f64,
    /// Base cap diameter.
    pub base_cap_diameter_mm: f64,

    /// `body_height + head_height − head_neck_overlap`.
    pub overall_height_mm: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            cups_target: 4.0,
            capacity_target_ml: 946.0,
            estimated_capacity_ml: 980.0,
            wall_thickness_mm: 0.9,
            manufacturing_tolerance_mm: 0.25,
            body_height_mm: 125.0,
            body_max_diameter_mm: 116.0,
            body_bottom_diameter_mm: 90.0,
            neck_diameter_mm: 84.0,
            head_height_mm: 58.0,
            head_top_diameter_mm: 150.0,
            head_neck_overlap_mm: 10.0,
            handle_length_mm: 92.0,
            handle_drop_mm: 66.0,
            handle_offset_mm: 20.0,
            handle_thickness_mm: 14.0,
            insert_outer_diameter_mm: 56.0,
            insert_inner_diameter_mm: 36.0,
            insert_height_mm: 26.0,
            gasket_cross_section_mm: 3.0,
            base_cap_height_mm: 6.0,
            base_cap_diameter_mm: 88.0,
            overall_height_mm: 173.0,
        }
    }
}

impl Dimensions {
    /// Create the baseline dimension set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unrounded stacked height of body and head.
    pub fn stacked_height(&self) -> f64 {
        self.body_height_mm + self.head_height_mm - self.head_neck_overlap_mm
    }

    /// Every length-valued field by name.
    ///
    /// Excludes the dimensionless/target fields and `overall_height_mm`,
    /// which is derived from the others.
    pub fn linear_fields(&self) -> [(&'static str, f64); LINEAR_FIELD_COUNT] {
        [
            ("wall_thickness_mm", self.wall_thickness_mm),
            ("body_height_mm", self.body_height_mm),
            ("body_max_diameter_mm", self.body_max_diameter_mm),
            ("body_bottom_diameter_mm", self.body_bottom_diameter_mm),
            ("neck_diameter_mm", self.neck_diameter_mm),
            ("head_height_mm", self.head_height_mm),
            ("head_top_diameter_mm", self.head_top_diameter_mm),
            ("head_neck_overlap_mm", self.head_neck_overlap_mm),
            ("handle_length_mm", self.handle_length_mm),
            ("handle_drop_mm", self.handle_drop_mm),
            ("handle_offset_mm", self.handle_offset_mm),
            ("handle_thickness_mm", self.handle_thickness_mm),
            ("insert_outer_diameter_mm", self.insert_outer_diameter_mm),
            ("insert_inner_diameter_mm", self.insert_inner_diameter_mm),
            ("insert_height_mm", self.insert_height_mm),
            ("gasket_cross_section_mm", self.gasket_cross_section_mm),
            ("base_cap_height_mm", self.base_cap_height_mm),
            ("base_cap_diameter_mm", self.base_cap_diameter_mm),
            ("manufacturing_tolerance_mm", self.manufacturing_tolerance_mm),
        ]
    }

    /// Mutable access to every length-valued field, in the same order as
    /// [`linear_fields`](Self::linear_fields).
    pub fn linear_fields_mut(&mut self) -> [&mut f64; LINEAR_FIELD_COUNT] {
        [
            &mut self.wall_thickness_mm,
            &mut self.body_height_mm,
            &mut self.body_max_diameter_mm,
            &mut self.body_bottom_diameter_mm,
            &mut self.neck_diameter_mm,
            &mut self.head_height_mm,
            &mut self.head_top_diameter_mm,
            &mut self.head_neck_overlap_mm,
            &mut self.handle_length_mm,
            &mut self.handle_drop_mm,
            &mut self.handle_offset_mm,
            &mut self.handle_thickness_mm,
            &mut self.insert_outer_diameter_mm,
            &mut self.insert_inner_diameter_mm,
            &mut self.insert_height_mm,
            &mut self.gasket_cross_section_mm,
            &mut self.base_cap_height_mm,
            &mut self.base_cap_diameter_mm,
            &mut self.manufacturing_tolerance_mm,
        ]
    }
}

fn default_confidence() -> f64 {
    0.5
}

fn default_quantity() -> u32 {
    1
}

/// A material recommendation for one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSuggestion {
    /// Part identifier (e.g. `"body_shell"`).
    pub part_key: String,
    /// Human-readable part name.
    #[serde(default)]
    pub part_name: String,
    /// Recommended material.
    #[serde(default)]
    pub recommended: String,
    /// Ranked alternatives.
    #[serde(default)]
    pub alternatives: Vec<String>,
    /// Client override of the recommendation.
    #[serde(default)]
    pub selected: Option<String>,
    /// Confidence in `[0, 1]`.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl MaterialSuggestion {
    /// A bare suggestion carrying only a key and a confidence.
    pub fn keyed(part_key: impl Into<String>, confidence: f64) -> Self {
        Self {
            part_key: part_key.into(),
            part_name: String::new(),
            recommended: String::new(),
            alternatives: Vec::new(),
            selected: None,
            confidence,
            notes: String::new(),
        }
    }

    /// The material in effect: a non-empty selection, else the recommendation.
    pub fn effective_material(&self) -> &str {
        match self.selected.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => self.recommended.trim(),
        }
    }
}

/// One row of the bill of materials. Always derived, never hand-edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    /// Part identifier.
    pub part_key: String,
    /// Human-readable part name.
    pub part_name: String,
    /// Material in effect.
    pub material: String,
    /// Manufacturing process label.
    pub process: String,
    /// Sheet or section thickness.
    #[serde(default)]
    pub thickness_mm: f64,
    /// Units per vessel.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Estimated mass.
    #[serde(default)]
    pub mass_estimate_g: f64,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

fn default_title() -> String {
    "Curved-Head Teapot Blueprint".to_string()
}

fn default_version() -> String {
    "v1".to_string()
}

/// The only length unit documents are expressed in.
pub const UNITS_MM: &str = "mm";

fn default_units() -> String {
    UNITS_MM.to_string()
}

/// The blueprint document, aggregate root of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Design version tag.
    #[serde(default = "default_version")]
    pub design_version: String,
    /// Length units (always `"mm"`).
    #[serde(default = "default_units")]
    pub units: String,
    /// Dimension model.
    pub dimensions: Dimensions,
    /// Material suggestions, one per part.
    #[serde(default)]
    pub materials: Vec<MaterialSuggestion>,
    /// Derived bill of materials.
    #[serde(default)]
    pub bom: Vec<BomItem>,
    /// Notes supplied by upstream analysis.
    #[serde(default)]
    pub analysis_notes: Vec<String>,
}

impl Blueprint {
    /// A document around `dimensions` with default header fields and no
    /// materials, BOM or notes.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            title: default_title(),
            design_version: default_version(),
            units: default_units(),
            dimensions,
            materials: Vec::new(),
            bom: Vec::new(),
            analysis_notes: Vec::new(),
        }
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

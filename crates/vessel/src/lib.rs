#![warn(missing_docs)]

//! vessel: parametric blueprints for a curved-head teapot.
//!
//! Scales a baseline vessel to a cup count, merges material suggestions
//! against a built-in table, derives a bill of materials and exports the
//! result as JSON, DXF, OBJ or a text report.
//!
//! # Example
//!
//! ```rust
//! use vessel::{build_blueprint, export, ExportFormat, ExportSettings};
//!
//! let blueprint = build_blueprint(4.0, &[], Vec::new())?;
//! assert_eq!(blueprint.bom.len(), 6);
//!
//! let format: ExportFormat = "dxf".parse()?;
//! let artifact = export(&blueprint, format, &ExportSettings::default())?;
//! assert!(artifact.bytes.ends_with(b"EOF\n"));
//! # Ok::<(), vessel::VesselError>(())
//! ```

pub mod blueprint;
pub mod bom;
pub mod capacity;
pub mod drawing;
pub mod error;
pub mod export;
pub mod geometry;
pub mod materials;
pub mod scale;
pub mod settings;

pub use blueprint::{build_blueprint, recompute};
pub use bom::{generate_bom, total_mass_g};
pub use capacity::estimate_capacity_ml;
pub use error::{Result, VesselError};
pub use export::{export, ExportArtifact, ExportFormat};
pub use materials::{default_materials, density_g_cm3, merge_materials, PartKey};
pub use scale::{cups_to_ml, create_default_dimensions, scale_dimensions, US_CUP_TO_ML};
pub use settings::ExportSettings;

pub use vessel_ir::{Blueprint, BomItem, Dimensions, MaterialSuggestion, ValidationError};

//! Export settings loaded from TOML.
//!
//! ```toml
//! [mesh]
//! body_segments = 96
//!
//! [output]
//! directory = "out"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tessellation density of the exported mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshSettings {
    /// Angular segments for body and head lathes.
    pub body_segments: usize,
    /// Angular segments for the insert collar and top ring.
    pub insert_segments: usize,
    /// Radial segments of the handle tube.
    pub handle_radial_segments: usize,
    /// Smallest handle tube radius in mm.
    pub min_handle_radius: f64,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            body_segments: 64,
            insert_segments: 44,
            handle_radial_segments: 14,
            min_handle_radius: 1.5,
        }
    }
}

/// Layout of the 2D drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// X position of the top-view centre.
    pub top_view_anchor_x: f64,
    /// Y position of the top-view centre as a fraction of overall height.
    pub top_view_anchor_height_ratio: f64,
    /// Annotation glyph height in mm.
    pub text_height: f64,
    /// Decimal places for coordinates.
    pub coordinate_precision: usize,
    /// Centerline overrun below the floor in mm.
    pub centerline_below: f64,
    /// Centerline overrun above the rim in mm.
    pub centerline_above: f64,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            top_view_anchor_x: 280.0,
            top_view_anchor_height_ratio: 0.60,
            text_height: 3.2,
            coordinate_precision: 4,
            centerline_below: 8.0,
            centerline_above: 12.0,
        }
    }
}

/// Where the CLI writes artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Target directory.
    pub directory: String,
    /// File name stem; a timestamp and extension are appended.
    pub file_stem: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: "exports".to_string(),
            file_stem: "vessel_blueprint".to_string(),
        }
    }
}

/// All export settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// `[mesh]` section.
    pub mesh: MeshSettings,
    /// `[drawing]` section.
    pub drawing: DrawingSettings,
    /// `[output]` section.
    pub output: OutputSettings,
}

impl ExportSettings {
    /// Parse settings from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VesselError;

    #[test]
    fn test_empty_is_default() {
        let s = ExportSettings::from_toml_str("").unwrap();
        assert_eq!(s, ExportSettings::default());
    }

    #[test]
    fn test_partial_sections() {
        let s = ExportSettings::from_toml_str(
            r#"
            [mesh]
            body_segments = 96

            [output]
            directory = "out"
            "#,
        )
        .unwrap();
        assert_eq!(s.mesh.body_segments, 96);
        assert_eq!(s.mesh.insert_segments, 44);
        assert_eq!(s.output.directory, "out");
        assert_eq!(s.output.file_stem, "vessel_blueprint");
        assert_eq!(s.drawing, DrawingSettings::default());
    }

    #[test]
    fn test_drawing_section() {
        let s = ExportSettings::from_toml_str("[drawing]\ncenterline_above = 20.0").unwrap();
        assert_eq!(s.drawing.centerline_above, 20.0);
        assert_eq!(s.drawing.centerline_below, 8.0);
        assert_eq!(s.drawing.coordinate_precision, 4);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = ExportSettings::from_toml_str("[mesh]\nbody_segments = \"many\"").unwrap_err();
        assert!(matches!(err, VesselError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ExportSettings::load("/nonexistent/vessel.toml").unwrap_err();
        assert!(matches!(err, VesselError::Io(_)));
    }
}

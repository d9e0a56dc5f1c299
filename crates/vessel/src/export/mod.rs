//! Export of blueprints to files.
//!
//! Supported formats:
//! - **JSON**: the blueprint document itself
//! - **DXF**: ASCII two-view drawing (side profile, top view, annotations)
//! - **OBJ**: triangle mesh of the assembled vessel
//! - **Report**: plain-text summary with material and BOM tables
//!
//! [`export`] always recomputes the blueprint first, so artifacts reflect a
//! consistent document even when the input was edited by hand.

pub mod dxf;
pub mod json;
pub mod obj;
pub mod report;

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use vessel_ir::Blueprint;

use crate::blueprint::recompute;
use crate::error::{Result, VesselError};
use crate::settings::ExportSettings;

/// Artifact formats understood by [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Blueprint document as pretty-printed JSON.
    Json,
    /// Two-view ASCII drawing.
    Dxf,
    /// Wavefront OBJ mesh.
    Obj,
    /// Plain-text report.
    Report,
}

impl ExportFormat {
    /// Every format, in selector order.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Json,
        ExportFormat::Dxf,
        ExportFormat::Obj,
        ExportFormat::Report,
    ];

    /// Selector string.
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Dxf => "dxf",
            ExportFormat::Obj => "obj",
            ExportFormat::Report => "report",
        }
    }

    /// All selector strings.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(ExportFormat::name).collect()
    }

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Dxf => "dxf",
            ExportFormat::Obj => "obj",
            ExportFormat::Report => "txt",
        }
    }

    /// MIME type of the artifact.
    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Dxf => "application/dxf",
            ExportFormat::Obj | ExportFormat::Report => "text/plain",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = VesselError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| VesselError::UnsupportedFormat {
                format: s.to_string(),
            })
    }
}

/// Rendered export, ready to be written or sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// Format the bytes are in.
    pub format: ExportFormat,
    /// Artifact content.
    pub bytes: Vec<u8>,
    /// Suggested file name, `<stem>.<ext>`.
    pub file_name: String,
    /// MIME type.
    pub media_type: &'static str,
}

impl ExportArtifact {
    /// File name with a caller-chosen stamp: `<stem>_<stamp>.<ext>`.
    pub fn stamped_file_name(&self, stamp: &str) -> String {
        let ext = self.format.extension();
        let stem = self
            .file_name
            .strip_suffix(ext)
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(&self.file_name);
        format!("{stem}_{stamp}.{ext}")
    }
}

/// Recompute `blueprint` and render it in `format`.
pub fn export(
    blueprint: &Blueprint,
    format: ExportFormat,
    settings: &ExportSettings,
) -> Result<ExportArtifact> {
    let blueprint = recompute(blueprint)?;

    let bytes = match format {
        ExportFormat::Json => json::export_json(&blueprint)?,
        ExportFormat::Dxf => dxf::export_dxf(&blueprint, &settings.drawing)?,
        ExportFormat::Obj => obj::export_obj(&blueprint, &settings.mesh)?,
        ExportFormat::Report => report::export_report(&blueprint).into_bytes(),
    };

    debug!(%format, bytes = bytes.len(), "rendered export");
    Ok(ExportArtifact {
        format,
        bytes,
        file_name: format!("{}.{}", settings.output.file_stem, format.extension()),
        media_type: format.media_type(),
    })
}

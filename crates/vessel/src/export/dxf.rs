//! DXF export of the two-view vessel drawing.
//!
//! Writes a minimal ASCII DXF: an empty HEADER, an empty TABLES section and
//! an ENTITIES section of LINE, CIRCLE and TEXT records, then EOF. Layers
//! are referenced by name only:
//! - `SIDE` - side silhouette and cross ties
//! - `CENTER` - axis of revolution
//! - `TOP` - top-view circles
//! - `ANNOT` - text

use std::io::Write;

use vessel_ir::Blueprint;
use vessel_kernel_drafting::{DraftEntity, Drawing, Point2D};

use crate::drawing::vessel_drawing;
use crate::error::Result;
use crate::settings::DrawingSettings;

/// DXF document builder around a finished [`Drawing`].
pub struct DxfDocument<'a> {
    drawing: &'a Drawing,
    precision: usize,
}

impl<'a> DxfDocument<'a> {
    /// Wrap `drawing`, writing coordinates with `precision` decimals.
    pub fn new(drawing: &'a Drawing, precision: usize) -> Self {
        Self { drawing, precision }
    }

    /// Write the DXF stream.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write_section_start(writer, "HEADER")?;
        writeln!(writer, "0")?;
        writeln!(writer, "ENDSEC")?;

        write_section_start(writer, "TABLES")?;
        writeln!(writer, "0")?;
        writeln!(writer, "ENDSEC")?;

        write_section_start(writer, "ENTITIES")?;
        for entity in self.drawing.entities() {
            match entity {
                DraftEntity::Line { start, end, layer } => {
                    self.write_line(writer, start, end, layer.name())?;
                }
                DraftEntity::Circle {
                    center,
                    radius,
                    layer,
                } => {
                    self.write_circle(writer, center, *radius, layer.name())?;
                }
                DraftEntity::Text {
                    position,
                    height,
                    text,
                    layer,
                } => {
                    self.write_text(writer, position, *height, text, layer.name())?;
                }
            }
        }
        writeln!(writer, "0")?;
        writeln!(writer, "ENDSEC")?;

        // End of file
        writeln!(writer, "0")?;
        writeln!(writer, "EOF")?;

        Ok(())
    }

    fn write_point<W: Write>(&self, writer: &mut W, x_code: u8, p: &Point2D) -> std::io::Result<()> {
        let prec = self.precision;
        writeln!(writer, "{}", x_code)?;
        writeln!(writer, "{:.*}", prec, p.x)?;
        writeln!(writer, "{}", x_code + 10)?;
        writeln!(writer, "{:.*}", prec, p.y)?;
        writeln!(writer, "{}", x_code + 20)?;
        writeln!(writer, "0.0")?;
        Ok(())
    }

    fn write_line<W: Write>(
        &self,
        writer: &mut W,
        start: &Point2D,
        end: &Point2D,
        layer: &str,
    ) -> std::io::Result<()> {
        writeln!(writer, "0")?;
        writeln!(writer, "LINE")?;
        writeln!(writer, "8")?;
        writeln!(writer, "{}", layer)?;
        self.write_point(writer, 10, start)?;
        self.write_point(writer, 11, end)?;
        Ok(())
    }

    fn write_circle<W: Write>(
        &self,
        writer: &mut W,
        center: &Point2D,
        radius: f64,
        layer: &str,
    ) -> std::io::Result<()> {
        writeln!(writer, "0")?;
        writeln!(writer, "CIRCLE")?;
        writeln!(writer, "8")?;
        writeln!(writer, "{}", layer)?;
        self.write_point(writer, 10, center)?;
        writeln!(writer, "40")?;
        writeln!(writer, "{:.*}", self.precision, radius)?;
        Ok(())
    }

    fn write_text<W: Write>(
        &self,
        writer: &mut W,
        position: &Point2D,
        height: f64,
        text: &str,
        layer: &str,
    ) -> std::io::Result<()> {
        writeln!(writer, "0")?;
        writeln!(writer, "TEXT")?;
        writeln!(writer, "8")?;
        writeln!(writer, "{}", layer)?;
        self.write_point(writer, 10, position)?;
        writeln!(writer, "40")?;
        writeln!(writer, "{:.*}", self.precision, height)?;
        writeln!(writer, "1")?;
        // ASCII stream: drop anything a legacy reader could choke on
        writeln!(writer, "{}", text.replace(|c: char| !c.is_ascii(), ""))?;
        Ok(())
    }
}

fn write_section_start<W: Write>(writer: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "SECTION")?;
    writeln!(writer, "2")?;
    writeln!(writer, "{}", name)?;
    Ok(())
}

/// DXF bytes of the vessel drawing for `blueprint`.
pub fn export_dxf(blueprint: &Blueprint, settings: &DrawingSettings) -> Result<Vec<u8>> {
    let drawing = vessel_drawing(&blueprint.dimensions, settings);
    let mut out = Vec::new();
    DxfDocument::new(&drawing, settings.coordinate_precision).write_to(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vessel_ir::Dimensions;
    use vessel_kernel_drafting::Layer;

    fn baseline_dxf() -> String {
        let bp = Blueprint::new(Dimensions::default());
        String::from_utf8(export_dxf(&bp, &DrawingSettings::default()).unwrap()).unwrap()
    }

    #[test]
    fn test_dxf_structure() {
        let content = baseline_dxf();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(&lines[..6], ["0", "SECTION", "2", "HEADER", "0", "ENDSEC"]);
        assert_eq!(&lines[6..12], ["0", "SECTION", "2", "TABLES", "0", "ENDSEC"]);
        assert_eq!(&lines[12..16], ["0", "SECTION", "2", "ENTITIES"]);
        assert_eq!(&lines[lines.len() - 4..], ["0", "ENDSEC", "0", "EOF"]);
        assert!(content.ends_with("EOF\n"));
    }

    #[test]
    fn test_entity_counts() {
        let content = baseline_dxf();
        let count = |kind: &str| content.lines().filter(|l| *l == kind).count();
        assert_eq!(count("LINE"), 13);
        assert_eq!(count("CIRCLE"), 4);
        assert_eq!(count("TEXT"), 4);
    }

    #[test]
    fn test_line_record_layout() {
        let mut drawing = Drawing::new();
        drawing.push(DraftEntity::Line {
            start: Point2D::new(0.0, -8.0),
            end: Point2D::new(0.0, 185.0),
            layer: Layer::Center,
        });
        let mut out = Vec::new();
        DxfDocument::new(&drawing, 4).write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(
            "0\nLINE\n8\nCENTER\n10\n0.0000\n20\n-8.0000\n30\n0.0\n11\n0.0000\n21\n185.0000\n31\n0.0\n"
        ));
    }

    #[test]
    fn test_circle_and_text_records() {
        let mut drawing = Drawing::new();
        drawing.push(DraftEntity::Circle {
            center: Point2D::new(280.0, 103.8),
            radius: 75.0,
            layer: Layer::Top,
        });
        drawing.push(DraftEntity::Text {
            position: Point2D::new(-95.0, 187.0),
            height: 3.2,
            text: "Overall Height: 173.0 mm".to_string(),
            layer: Layer::Annotation,
        });
        let mut out = Vec::new();
        DxfDocument::new(&drawing, 4).write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("0\nCIRCLE\n8\nTOP\n10\n280.0000\n20\n103.8000\n30\n0.0\n40\n75.0000\n"));
        assert!(text.contains(
            "0\nTEXT\n8\nANNOT\n10\n-95.0000\n20\n187.0000\n30\n0.0\n40\n3.2000\n1\nOverall Height: 173.0 mm\n"
        ));
    }

    #[test]
    fn test_precision_setting() {
        let bp = Blueprint::new(Dimensions::default());
        let settings = DrawingSettings {
            coordinate_precision: 2,
            ..DrawingSettings::default()
        };
        let content = String::from_utf8(export_dxf(&bp, &settings).unwrap()).unwrap();
        assert!(content.contains("\n280.00\n"));
        assert!(!content.contains("\n280.0000\n"));
    }
}

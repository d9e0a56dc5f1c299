//! Plain-text blueprint report.
//!
//! Three sections: a summary of targets and key dimensions, the material
//! suggestion table and the bill of materials with a total mass line.

use tabled::{builder::Builder, settings::Style};
use vessel_ir::Blueprint;

use crate::bom::total_mass_g;

const MM_PER_INCH: f64 = 25.4;

/// Analysis notes shown in the summary.
const MAX_NOTES: usize = 6;

fn mm_and_inches(label: &str, mm: f64) -> String {
    format!("{label}: {mm:.1} mm ({:.2} in)", mm / MM_PER_INCH)
}

/// Render the report as markdown-flavoured text.
pub fn export_report(blueprint: &Blueprint) -> String {
    let d = &blueprint.dimensions;
    let mut output = String::new();

    output.push_str(&format!("# {} ({})\n", blueprint.title, blueprint.design_version));
    output.push_str("\n## Summary\n\n");
    output.push_str(&format!(
        "Target: {:.1} cups ({:.0} ml)\n",
        d.cups_target, d.capacity_target_ml
    ));
    output.push_str(&format!(
        "Estimated Capacity: {:.0} ml\n",
        d.estimated_capacity_ml
    ));
    output.push_str(&format!("{}\n", mm_and_inches("Overall Height", d.overall_height_mm)));
    output.push_str(&format!("{}\n", mm_and_inches("Body Max Dia", d.body_max_diameter_mm)));
    output.push_str(&format!("{}\n", mm_and_inches("Head Top Dia", d.head_top_diameter_mm)));

    if !blueprint.analysis_notes.is_empty() {
        output.push_str("\n### Design Notes\n\n");
        for note in blueprint.analysis_notes.iter().take(MAX_NOTES) {
            output.push_str(&format!("- {}\n", note));
        }
    }

    output.push_str("\n## Material Suggestions\n\n");
    let mut materials = Builder::default();
    materials.push_record(["Part", "Selected Material", "Recommended", "Confidence", "Notes"]);
    for m in &blueprint.materials {
        let part = if m.part_name.is_empty() {
            m.part_key.clone()
        } else {
            m.part_name.clone()
        };
        materials.push_record([
            part,
            m.effective_material().to_string(),
            m.recommended.clone(),
            format!("{:.0}%", m.confidence * 100.0),
            m.notes.clone(),
        ]);
    }
    output.push_str(&materials.build().with(Style::markdown()).to_string());
    output.push('\n');

    output.push_str("\n## Manufacturing Bill of Materials\n\n");
    let mut bom = Builder::default();
    bom.push_record(["Part", "Material", "Process", "Thk (mm)", "Qty", "Mass (g)"]);
    for item in &blueprint.bom {
        bom.push_record([
            item.part_name.clone(),
            item.material.clone(),
            item.process.clone(),
            format!("{:.2}", item.thickness_mm),
            item.quantity.to_string(),
            format!("{:.1}", item.mass_estimate_g),
        ]);
    }
    output.push_str(&bom.build().with(Style::markdown()).to_string());
    output.push('\n');

    output.push_str(&format!("\nTotal mass: {:.1} g\n", total_mass_g(&blueprint.bom)));
    output
}

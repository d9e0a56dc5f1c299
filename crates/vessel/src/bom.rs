//! Bill of materials: per-part material, process, thickness and mass.

use std::collections::HashMap;

use vessel_ir::{BomItem, Dimensions, MaterialSuggestion};
use vessel_kernel_math::{annulus_area, disc_area, round_to, torus_volume};

use crate::capacity::{body_surface_area_mm2, head_surface_area_mm2};
use crate::materials::{density_g_cm3, PartKey};

/// Handle sweep length relative to `handle_length_mm`.
const HANDLE_PATH_FACTOR: f64 = 1.25;

/// Handle mass is computed as a hollow shell of this fraction of its
/// section thickness.
const HANDLE_SHELL_FRACTION: f64 = 0.35;

/// How a part's mass is derived.
enum MassModel {
    /// Area in mm² times a shell thickness in mm.
    Shell { area_mm2: f64, thickness_mm: f64 },
    /// Solid volume in mm³.
    Solid { volume_mm3: f64 },
}

impl MassModel {
    fn grams(&self, density_g_cm3: f64) -> f64 {
        let volume_mm3 = match *self {
            MassModel::Shell {
                area_mm2,
                thickness_mm,
            } => area_mm2 * thickness_mm,
            MassModel::Solid { volume_mm3 } => volume_mm3,
        };
        round_to(volume_mm3 / 1000.0 * density_g_cm3, 1)
    }
}

fn process_label(key: PartKey) -> &'static str {
    match key {
        PartKey::BodyShell => "Deep draw + neck reduction + brushing",
        PartKey::CurvedHead => "Spin forming + lip trim",
        PartKey::InsertFilter => "Stamp + draw + mesh spot weld",
        PartKey::Handle => "Injection mold + fastener insert",
        PartKey::Gasket => "Compression mold",
        PartKey::BaseCap => "Stamp + trim",
    }
}

fn bom_note(key: PartKey) -> &'static str {
    match key {
        PartKey::BodyShell => "TIG seam only if split blank is used.",
        PartKey::CurvedHead => "Interference-fit at neck with gasket.",
        PartKey::InsertFilter => "Inner opening sized for pour stability.",
        PartKey::Handle => "Thermal isolation target < 45C at grip.",
        PartKey::Gasket => "Food-contact compliant elastomer required.",
        PartKey::BaseCap => "Protective and structural base reinforcement.",
    }
}

/// Reported thickness and mass model for one part.
fn part_geometry(key: PartKey, d: &Dimensions) -> (f64, MassModel) {
    let t = d.wall_thickness_mm;
    match key {
        PartKey::BodyShell => (
            t,
            MassModel::Shell {
                area_mm2: body_surface_area_mm2(d),
                thickness_mm: t,
            },
        ),
        PartKey::CurvedHead => (
            t,
            MassModel::Shell {
                area_mm2: head_surface_area_mm2(d),
                thickness_mm: t,
            },
        ),
        PartKey::InsertFilter => {
            let collar_t = (t * 0.8).max(0.6);
            let ring = annulus_area(d.insert_outer_diameter_mm, d.insert_inner_diameter_mm);
            let wall = std::f64::consts::PI * d.insert_outer_diameter_mm * d.insert_height_mm;
            (
                collar_t,
                MassModel::Shell {
                    area_mm2: ring + wall,
                    thickness_mm: collar_t,
                },
            )
        }
        PartKey::Handle => {
            let sweep = d.handle_length_mm * HANDLE_PATH_FACTOR;
            (
                d.handle_thickness_mm,
                MassModel::Shell {
                    area_mm2: std::f64::consts::PI * d.handle_thickness_mm * sweep,
                    thickness_mm: d.handle_thickness_mm * HANDLE_SHELL_FRACTION,
                },
            )
        }
        PartKey::Gasket => {
            let major = d.neck_diameter_mm * 0.5;
            let minor = (d.gasket_cross_section_mm * 0.5).max(0.5);
            (
                d.gasket_cross_section_mm,
                MassModel::Solid {
                    volume_mm3: torus_volume(major, minor),
                },
            )
        }
        PartKey::BaseCap => {
            let cap_t = t.max(1.0);
            (
                cap_t,
                MassModel::Shell {
                    area_mm2: disc_area(d.base_cap_diameter_mm),
                    thickness_mm: cap_t,
                },
            )
        }
    }
}

/// Material in effect per part key. Later entries win on duplicate keys.
fn materials_by_key(materials: &[MaterialSuggestion]) -> HashMap<&str, &str> {
    materials
        .iter()
        .map(|m| (m.part_key.as_str(), m.effective_material()))
        .filter(|(_, material)| !material.is_empty())
        .collect()
}

/// Derive the six BOM rows from dimensions and (merged) materials.
///
/// Parts without a usable material entry fall back to
/// [`PartKey::fallback_material`]. Unknown material names use the fallback
/// density class; this function cannot fail.
pub fn generate_bom(d: &Dimensions, materials: &[MaterialSuggestion]) -> Vec<BomItem> {
    let mats = materials_by_key(materials);

    PartKey::ALL
        .into_iter()
        .map(|key| {
            let material = mats
                .get(key.as_str())
                .copied()
                .unwrap_or_else(|| key.fallback_material());
            let (thickness, mass) = part_geometry(key, d);
            BomItem {
                part_key: key.as_str().to_string(),
                part_name: key.part_name().to_string(),
                material: material.to_string(),
                process: process_label(key).to_string(),
                thickness_mm: round_to(thickness, 2),
                quantity: 1,
                mass_estimate_g: mass.grams(density_g_cm3(material)),
                notes: bom_note(key).to_string(),
            }
        })
        .collect()
}

/// Sum of `mass_estimate_g × quantity` over all rows.
pub fn total_mass_g(bom: &[BomItem]) -> f64 {
    bom.iter()
        .map(|item| item.mass_estimate_g * f64::from(item.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::default_materials;
    use approx::assert_relative_eq;

    fn row<'a>(bom: &'a [BomItem], key: &str) -> &'a BomItem {
        bom.iter()
            .find(|b| b.part_key == key)
            .unwrap_or_else(|| panic!("missing {key}"))
    }

    #[test]
    fn test_baseline_bom() {
        let bom = generate_bom(&Dimensions::default(), &default_materials());
        let keys: Vec<_> = bom.iter().map(|b| b.part_key.as_str()).collect();
        assert_eq!(
            keys,
            ["body_shell", "curved_head", "insert_filter", "handle", "gasket", "base_cap"]
        );

        let expected = [
            ("body_shell", 0.9, 307.4),
            ("curved_head", 0.9, 148.8),
            ("insert_filter", 0.72, 34.2),
            ("handle", 14.0, 33.5),
            ("gasket", 3.0, 2.1),
            ("base_cap", 1.0, 48.0),
        ];
        for (key, thickness, mass) in expected {
            let item = row(&bom, key);
            assert_relative_eq!(item.thickness_mm, thickness, epsilon = 1e-9);
            assert_relative_eq!(item.mass_estimate_g, mass, epsilon = 0.11);
            assert_eq!(item.quantity, 1);
        }
    }

    #[test]
    fn test_labels_and_materials() {
        let bom = generate_bom(&Dimensions::default(), &default_materials());
        let body = row(&bom, "body_shell");
        assert_eq!(body.process, "Deep draw + neck reduction + brushing");
        assert_eq!(body.material, "Stainless Steel 304 (0.9 mm)");
        assert_eq!(row(&bom, "gasket").material, "Food-grade Silicone (Shore A 50-60)");
        assert_eq!(row(&bom, "handle").notes, "Thermal isolation target < 45C at grip.");
    }

    #[test]
    fn test_missing_materials_fall_back() {
        let bom = generate_bom(&Dimensions::default(), &[]);
        assert_eq!(row(&bom, "handle").material, "Glass-filled Nylon 66");
        assert_eq!(row(&bom, "gasket").material, "Food-grade Silicone");
        assert_eq!(row(&bom, "base_cap").material, "Stainless Steel 304 (1.0 mm)");
    }

    #[test]
    fn test_selection_drives_density() {
        let mut mats = default_materials();
        let heavy = generate_bom(&Dimensions::default(), &mats);
        for m in mats.iter_mut().filter(|m| m.part_key == "body_shell") {
            m.selected = Some("Mystery alloy".to_string());
        }
        let light = generate_bom(&Dimensions::default(), &mats);
        let ratio = row(&light, "body_shell").mass_estimate_g / row(&heavy, "body_shell").mass_estimate_g;
        assert_relative_eq!(ratio, 1.10 / 7.9, epsilon = 1e-3);
        assert_eq!(row(&light, "body_shell").material, "Mystery alloy");
    }

    #[test]
    fn test_thin_wall_thickness_floors() {
        let d = Dimensions {
            wall_thickness_mm: 0.5,
            ..Dimensions::default()
        };
        let bom = generate_bom(&d, &default_materials());
        assert_eq!(row(&bom, "insert_filter").thickness_mm, 0.6);
        assert_eq!(row(&bom, "base_cap").thickness_mm, 1.0);
        assert_eq!(row(&bom, "body_shell").thickness_mm, 0.5);
    }

    #[test]
    fn test_total_mass() {
        let bom = generate_bom(&Dimensions::default(), &default_materials());
        let total = total_mass_g(&bom);
        assert_relative_eq!(total, 307.4 + 148.8 + 34.2 + 33.5 + 2.1 + 48.0, epsilon = 0.5);
    }
}

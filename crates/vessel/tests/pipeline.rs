//! End-to-end checks over the public blueprint API.

use approx::assert_relative_eq;
use vessel::geometry::{head_profile, side_profile};
use vessel::{
    build_blueprint, create_default_dimensions, cups_to_ml, default_materials, estimate_capacity_ml,
    export, merge_materials, recompute, scale_dimensions, Blueprint, Dimensions, ExportFormat,
    ExportSettings, MaterialSuggestion, ValidationError, VesselError,
};
use vessel_kernel_math::{cylinder_volume, frustum_volume, round_to, Profile};
use vessel_kernel_mesh::lathe_mesh;

#[test]
fn overall_height_is_additive_after_recompute() {
    for cups in [1.0, 2.5, 4.0, 8.0, 12.0] {
        let mut bp = build_blueprint(cups, &[], Vec::new()).unwrap();
        bp.dimensions.head_neck_overlap_mm += 1.5;
        let bp = recompute(&bp).unwrap();
        let d = &bp.dimensions;
        assert_relative_eq!(
            d.overall_height_mm,
            d.body_height_mm + d.head_height_mm - d.head_neck_overlap_mm,
            epsilon = 0.005
        );
    }
}

#[test]
fn scaled_fields_follow_factor_and_survive_serialization() {
    let base = Dimensions::default();
    for s in [0.6, 0.85, 1.0, 1.2, 1.7] {
        let scaled = scale_dimensions(&base, s);
        for ((name, orig), (_, new)) in base.linear_fields().iter().zip(scaled.linear_fields()) {
            assert!((orig * s - new).abs() <= 0.005 + 1e-9, "{name} at scale {s}");
        }

        let json = serde_json::to_string(&scaled).unwrap();
        let back: Dimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(round_to(back.stacked_height(), 2), scaled.overall_height_mm);
    }
}

/// Every client-editable field at its lower bound.
fn lower_bound_dimensions() -> Dimensions {
    Dimensions {
        cups_target: 1.0,
        capacity_target_ml: 100.0,
        wall_thickness_mm: 0.4,
        manufacturing_tolerance_mm: 0.05,
        body_height_mm: 50.0,
        body_max_diameter_mm: 60.0,
        body_bottom_diameter_mm: 40.0,
        neck_diameter_mm: 40.0,
        head_height_mm: 20.0,
        head_top_diameter_mm: 60.0,
        head_neck_overlap_mm: 0.0,
        handle_length_mm: 40.0,
        handle_drop_mm: 20.0,
        handle_offset_mm: 5.0,
        handle_thickness_mm: 6.0,
        insert_outer_diameter_mm: 20.0,
        insert_inner_diameter_mm: 10.0,
        insert_height_mm: 8.0,
        gasket_cross_section_mm: 1.0,
        base_cap_height_mm: 2.0,
        base_cap_diameter_mm: 30.0,
        ..Dimensions::default()
    }
}

#[test]
fn valid_documents_recompute_to_physical_values() {
    let bases = [
        lower_bound_dimensions(),
        Dimensions::default(),
        create_default_dimensions(12.0),
    ];
    for base in &bases {
        for wall in [0.4, 3.0] {
            for overlap_frac in [0.0, 0.5, 0.999] {
                for inner_frac in [0.5, 0.999] {
                    let mut d = base.clone();
                    d.wall_thickness_mm = wall;
                    d.head_neck_overlap_mm = d.head_height_mm * overlap_frac;
                    d.insert_inner_diameter_mm = (d.insert_outer_diameter_mm * inner_frac).max(10.0);

                    let bp = recompute(&Blueprint::new(d)).unwrap();
                    let d = &bp.dimensions;
                    assert!(d.overall_height_mm > d.body_height_mm);
                    assert!(d.estimated_capacity_ml >= 100.0);
                    assert_eq!(bp.bom.len(), 6);
                    for item in &bp.bom {
                        assert!(item.mass_estimate_g >= 0.0, "{} mass", item.part_name);
                        assert!(item.thickness_mm > 0.0, "{} thickness", item.part_name);
                    }
                    assert!(side_profile(d).is_monotonic());
                    assert!(head_profile(d).is_monotonic());
                }
            }
        }
    }
}

#[test]
fn crossed_fields_are_rejected_before_bom() {
    let mut bp = build_blueprint(4.0, &[], Vec::new()).unwrap();
    bp.dimensions.insert_outer_diameter_mm = 20.0;
    bp.dimensions.insert_inner_diameter_mm = 200.0;
    match recompute(&bp) {
        Err(VesselError::Validation(ValidationError::NotLessThan { field, limit_field, .. })) => {
            assert_eq!(field, "insert_inner_diameter_mm");
            assert_eq!(limit_field, "insert_outer_diameter_mm");
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(export(&bp, ExportFormat::Json, &ExportSettings::default()).is_err());

    let mut bp = build_blueprint(4.0, &[], Vec::new()).unwrap();
    bp.dimensions.head_neck_overlap_mm = 200.0;
    assert!(recompute(&bp).is_err());
    assert!(export(&bp, ExportFormat::Dxf, &ExportSettings::default()).is_err());
}

#[test]
fn capacity_monotonic_in_body_max_and_height() {
    let base = create_default_dimensions(4.0);
    let caps: Vec<_> = (0..15)
        .map(|i| {
            estimate_capacity_ml(&Dimensions {
                body_max_diameter_mm: base.body_max_diameter_mm + i as f64 * 4.0,
                ..base.clone()
            })
        })
        .collect();
    assert!(caps.windows(2).all(|w| w[1] >= w[0]));

    let caps: Vec<_> = (0..15)
        .map(|i| {
            estimate_capacity_ml(&Dimensions {
                body_height_mm: base.body_height_mm + i as f64 * 4.0,
                ..base.clone()
            })
        })
        .collect();
    assert!(caps.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn frustum_reduces_to_cylinder() {
    for (r, h) in [(1.0, 1.0), (42.0, 125.0), (0.5, 300.0)] {
        assert_relative_eq!(frustum_volume(r, r, h), cylinder_volume(r, h), max_relative = 1e-12);
    }
}

#[test]
fn lathe_counts_and_index_range() {
    let profile = Profile::from_pairs(&[(45.0, 0.0), (58.0, 37.5), (56.8, 85.0), (42.0, 125.0)]);
    for segments in [3, 16, 64] {
        let mesh = lathe_mesh(&profile, segments, true, true);
        let n = profile.len();
        assert_eq!(mesh.num_vertices(), n * segments + 2);
        assert_eq!(mesh.num_triangles(), 2 * (n - 1) * segments + 2 * segments);

        // 1-based in the exported form
        let count = mesh.num_vertices() as u32;
        for face in mesh.faces() {
            assert!(face.iter().all(|&i| (1..=count).contains(&(i + 1))));
        }
    }
}

#[test]
fn document_json_roundtrip() {
    let mut incoming = MaterialSuggestion::keyed("gasket", 0.55);
    incoming.selected = Some("EPDM food-grade".to_string());
    let bp = build_blueprint(
        5.5,
        &[incoming],
        vec!["Curved lip detected.".to_string(), "Brushed steel.".to_string()],
    )
    .unwrap();

    let json = bp.to_json().unwrap();
    assert_eq!(Blueprint::from_json(&json).unwrap(), bp);
}

#[test]
fn recompute_is_idempotent() {
    let mut bp = build_blueprint(4.0, &[MaterialSuggestion::keyed("handle", 0.9)], Vec::new()).unwrap();
    bp.dimensions.body_max_diameter_mm = 120.0;
    bp.dimensions.wall_thickness_mm = 1.1;
    bp.materials.retain(|m| m.part_key != "base_cap");

    let once = recompute(&bp).unwrap();
    assert_eq!(recompute(&once).unwrap(), once);
}

#[test]
fn four_cup_scenario() {
    let d = create_default_dimensions(4.0);
    assert_relative_eq!(cups_to_ml(4.0), 946.352, epsilon = 1e-9);
    assert_eq!(d.capacity_target_ml, 946.4);
    assert!(d.estimated_capacity_ml >= 100.0);
    assert!(d.overall_height_mm > 0.0);
}

#[test]
fn handle_only_merge_scenario() {
    let merged = merge_materials(&[MaterialSuggestion::keyed("handle", 0.9)]);
    assert_eq!(merged.len(), 6);

    let handle = merged.iter().find(|m| m.part_key == "handle").unwrap();
    assert_eq!(handle.confidence, 0.9);

    let defaults = default_materials();
    let others: Vec<_> = merged.iter().filter(|m| m.part_key != "handle").collect();
    assert_eq!(others.len(), 5);
    for m in others {
        assert!(defaults.contains(m), "{} was modified", m.part_key);
    }
}

#[test]
fn merged_defaults_are_independent_copies() {
    let mut first = merge_materials(&[]);
    first[0].recommended = "Titanium".to_string();
    first[0].alternatives.clear();
    let second = merge_materials(&[]);
    assert_eq!(second, default_materials());
    assert_ne!(second[0].recommended, "Titanium");
}

#[test]
fn unsupported_format_rejected() {
    let err = "stl".parse::<ExportFormat>().unwrap_err();
    match err {
        VesselError::UnsupportedFormat { format } => assert_eq!(format, "stl"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn every_format_exports() {
    let bp = build_blueprint(4.0, &[], vec!["note".to_string()]).unwrap();
    let settings = ExportSettings::default();

    let json = export(&bp, ExportFormat::Json, &settings).unwrap();
    assert!(json.bytes.starts_with(b"{"));

    let dxf = export(&bp, ExportFormat::Dxf, &settings).unwrap();
    let dxf_text = String::from_utf8(dxf.bytes).unwrap();
    assert!(dxf_text.contains("ENTITIES"));
    assert!(dxf_text.is_ascii());

    let obj = export(&bp, ExportFormat::Obj, &settings).unwrap();
    let obj_text = String::from_utf8(obj.bytes).unwrap();
    assert!(obj_text.lines().any(|l| l.starts_with("f ")));

    let report = export(&bp, ExportFormat::Report, &settings).unwrap();
    assert!(String::from_utf8(report.bytes).unwrap().contains("Total mass"));
}

#[test]
fn settings_change_mesh_density() {
    let bp = build_blueprint(4.0, &[], Vec::new()).unwrap();
    let coarse = ExportSettings::from_toml_str("[mesh]\nbody_segments = 16\ninsert_segments = 8").unwrap();
    let fine = ExportSettings::default();

    let count_vertices = |s: &ExportSettings| {
        let artifact = export(&bp, ExportFormat::Obj, s).unwrap();
        String::from_utf8(artifact.bytes)
            .unwrap()
            .lines()
            .filter(|l| l.starts_with("v "))
            .count()
    };
    assert!(count_vertices(&coarse) < count_vertices(&fine));
}

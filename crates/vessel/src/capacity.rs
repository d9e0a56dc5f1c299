//! Capacity and shell-area estimates from the dimension model.
//!
//! The vessel is decomposed into five frusta: three body segments split at
//! 30/38/32 % of the body height and two head segments split at 45/55 % of
//! the effective head height. Volume uses wall-reduced (inner) radii, area
//! uses the nominal outer radii.

use vessel_ir::Dimensions;
use vessel_kernel_math::{cylinder_volume, floor_radius, frustum_lateral_area, frustum_volume, round_to};

/// Fractions of the body height spanned by each body segment.
pub const BODY_SPLITS: [f64; 3] = [0.30, 0.38, 0.32];

/// Fractions of the effective head height spanned by each head segment.
pub const HEAD_SPLITS: [f64; 2] = [0.45, 0.55];

/// Radius ratio at the top of the body's middle segment.
pub const BELLY_TAPER: f64 = 0.98;

/// Radius ratio of the head flare relative to the neck.
pub const HEAD_FLARE: f64 = 1.18;

/// Lower bound on the effective head height.
pub const MIN_HEAD_HEIGHT_MM: f64 = 8.0;

/// Lower bound on the reported capacity.
pub const MIN_CAPACITY_ML: f64 = 100.0;

/// One revolved segment: bottom radius, top radius, height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Radius at the lower end.
    pub r1: f64,
    /// Radius at the upper end.
    pub r2: f64,
    /// Axial height.
    pub h: f64,
}

impl Frustum {
    fn volume(&self) -> f64 {
        frustum_volume(self.r1, self.r2, self.h)
    }

    fn lateral_area(&self) -> f64 {
        frustum_lateral_area(self.r1, self.r2, self.h)
    }
}

/// Head height above the neck joint, floored at [`MIN_HEAD_HEIGHT_MM`].
pub fn effective_head_height(d: &Dimensions) -> f64 {
    (d.head_height_mm - d.head_neck_overlap_mm).max(MIN_HEAD_HEIGHT_MM)
}

/// Body segments for the given bottom, max and neck radii.
pub fn body_segments(r_bottom: f64, r_max: f64, r_neck: f64, body_h: f64) -> [Frustum; 3] {
    [
        Frustum {
            r1: r_bottom,
            r2: r_max,
            h: body_h * BODY_SPLITS[0],
        },
        Frustum {
            r1: r_max,
            r2: r_max * BELLY_TAPER,
            h: body_h * BODY_SPLITS[1],
        },
        Frustum {
            r1: r_max * BELLY_TAPER,
            r2: r_neck,
            h: body_h * BODY_SPLITS[2],
        },
    ]
}

/// Head segments for the given neck and rim radii.
pub fn head_segments(r_neck: f64, r_head: f64, head_h: f64) -> [Frustum; 2] {
    [
        Frustum {
            r1: r_neck,
            r2: r_neck * HEAD_FLARE,
            h: head_h * HEAD_SPLITS[0],
        },
        Frustum {
            r1: r_neck * HEAD_FLARE,
            r2: r_head,
            h: head_h * HEAD_SPLITS[1],
        },
    ]
}

/// Estimated liquid capacity in mL, rounded to one decimal.
///
/// Inner radii are `diameter / 2 − wall`, floored at 1 mm. The insert collar
/// is subtracted as a solid cylinder of its outer radius. The result never
/// drops below [`MIN_CAPACITY_ML`].
pub fn estimate_capacity_ml(d: &Dimensions) -> f64 {
    let t = d.wall_thickness_mm;
    let inner = |diameter: f64| floor_radius(diameter * 0.5 - t);

    let r_bottom = inner(d.body_bottom_diameter_mm);
    let r_max = inner(d.body_max_diameter_mm);
    let r_neck = inner(d.neck_diameter_mm);
    let r_head = inner(d.head_top_diameter_mm);

    let total_mm3: f64 = body_segments(r_bottom, r_max, r_neck, d.body_height_mm)
        .iter()
        .chain(head_segments(r_neck, r_head, effective_head_height(d)).iter())
        .map(Frustum::volume)
        .sum();

    let insert_r = inner(d.insert_outer_diameter_mm);
    let intrusion_mm3 = cylinder_volume(insert_r, d.insert_height_mm.max(1.0));

    let capacity_ml = (total_mm3 - intrusion_mm3) / 1000.0;
    round_to(capacity_ml.max(MIN_CAPACITY_ML), 1)
}

/// Outer lateral area of the lower body shell in mm².
pub fn body_surface_area_mm2(d: &Dimensions) -> f64 {
    body_segments(
        d.body_bottom_diameter_mm * 0.5,
        d.body_max_diameter_mm * 0.5,
        d.neck_diameter_mm * 0.5,
        d.body_height_mm,
    )
    .iter()
    .map(Frustum::lateral_area)
    .sum()
}

/// Outer lateral area of the curved head in mm².
pub fn head_surface_area_mm2(d: &Dimensions) -> f64 {
    head_segments(
        d.neck_diameter_mm * 0.5,
        d.head_top_diameter_mm * 0.5,
        effective_head_height(d),
    )
    .iter()
    .map(Frustum::lateral_area)
    .sum()
}

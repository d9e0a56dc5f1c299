//! Vessel shape: outer profiles, handle path and the assembled mesh.

use tracing::debug;
use vessel_ir::Dimensions;
use vessel_kernel_math::{Point3, Profile};
use vessel_kernel_mesh::{MeshBuilder, TriangleMesh};

use crate::capacity::{BELLY_TAPER, BODY_SPLITS, HEAD_FLARE, HEAD_SPLITS};
use crate::settings::MeshSettings;

/// Outer radii of the revolved sections, in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterRadii {
    /// Body radius at the floor.
    pub bottom: f64,
    /// Widest body radius.
    pub max: f64,
    /// Neck radius.
    pub neck: f64,
    /// Head rim radius.
    pub head: f64,
    /// Insert collar outer radius.
    pub insert_outer: f64,
    /// Insert opening radius.
    pub insert_inner: f64,
}

impl OuterRadii {
    /// Half of each nominal diameter.
    pub fn from_dimensions(d: &Dimensions) -> Self {
        Self {
            bottom: d.body_bottom_diameter_mm * 0.5,
            max: d.body_max_diameter_mm * 0.5,
            neck: d.neck_diameter_mm * 0.5,
            head: d.head_top_diameter_mm * 0.5,
            insert_outer: d.insert_outer_diameter_mm * 0.5,
            insert_inner: d.insert_inner_diameter_mm * 0.5,
        }
    }
}

/// Axial positions of the two body breakpoints (30 % and 68 % of the body).
fn body_breaks(body_h: f64) -> (f64, f64) {
    let first = body_h * BODY_SPLITS[0];
    (first, first + body_h * BODY_SPLITS[1])
}

/// Lower body profile from the floor up to the neck.
pub fn body_profile(d: &Dimensions) -> Profile {
    let r = OuterRadii::from_dimensions(d);
    let h = d.body_height_mm;
    let (y1, y2) = body_breaks(h);
    Profile::from_pairs(&[
        (r.bottom, 0.0),
        (r.max, y1),
        (r.max * BELLY_TAPER, y2),
        (r.neck, h),
    ])
}

/// Head profile from `head_start` up to the rim at the overall height.
fn head_profile_from(d: &Dimensions, head_start: f64) -> Profile {
    let r = OuterRadii::from_dimensions(d);
    let top = d.overall_height_mm;
    Profile::from_pairs(&[
        (r.neck, head_start),
        (r.neck * HEAD_FLARE, head_start + (top - head_start) * HEAD_SPLITS[0]),
        (r.head, top),
    ])
}

/// Head profile for the mesh; it starts inside the body by the overlap.
pub fn head_profile(d: &Dimensions) -> Profile {
    head_profile_from(d, d.body_height_mm - d.head_neck_overlap_mm)
}

/// Full outer silhouette for the side view: the body followed by the head
/// starting at the neck.
pub fn side_profile(d: &Dimensions) -> Profile {
    let mut profile = body_profile(d);
    for p in head_profile_from(d, d.body_height_mm).iter().skip(1) {
        profile.push(p.radius, p.axial);
    }
    profile
}

/// Centreline of the handle tube, in the XY plane beside the head rim.
pub fn handle_path(d: &Dimensions) -> [Point3; 4] {
    let r = OuterRadii::from_dimensions(d);
    let top = d.overall_height_mm;
    let len = d.handle_length_mm;
    let x = r.head + d.handle_offset_mm;
    [
        Point3::new(x, top * 0.84, 0.0),
        Point3::new(x + len * 0.45, top * 0.72, 0.0),
        Point3::new(x + len * 0.38, top * 0.46, 0.0),
        Point3::new(x + len * 0.12, top * 0.34 - d.handle_drop_mm * 0.08, 0.0),
    ]
}

/// Assemble the vessel mesh.
///
/// Parts, in emission order: body lathe (closed floor), head lathe, insert
/// outer and inner cylinders, the insert's top ring, and the handle tube.
/// All parts share one vertex buffer but are not welded together.
pub fn vessel_mesh(d: &Dimensions, settings: &MeshSettings) -> TriangleMesh {
    let r = OuterRadii::from_dimensions(d);
    let top = d.overall_height_mm;
    let mut mesh = MeshBuilder::new();

    mesh.add_lathe(&body_profile(d), settings.body_segments, true, false);
    mesh.add_lathe(&head_profile(d), settings.body_segments, false, false);

    let insert_h = d.insert_height_mm;
    let insert_y0 = top - insert_h;
    mesh.add_cylinder(r.insert_outer, insert_h, insert_y0, settings.insert_segments, false, false);
    mesh.add_cylinder(r.insert_inner, insert_h, insert_y0, settings.insert_segments, false, false);

    // flat annulus at the rim; outer -> inner so it faces +Y
    let ring = Profile::from_pairs(&[(r.insert_outer, top), (r.insert_inner, top)]);
    mesh.add_lathe(&ring, settings.insert_segments, false, false);

    let tube_r = (d.handle_thickness_mm * 0.5).max(settings.min_handle_radius);
    mesh.add_tube_path(&handle_path(d), tube_r, settings.handle_radial_segments);

    let mesh = mesh.finish();
    debug!(
        vertices = mesh.num_vertices(),
        triangles = mesh.num_triangles(),
        "built vessel mesh"
    );
    mesh
}

//! OBJ export of the assembled vessel mesh.

use vessel_ir::Blueprint;
use vessel_kernel_mesh::write_obj;

use crate::error::Result;
use crate::geometry::vessel_mesh;
use crate::settings::MeshSettings;

const OBJ_HEADER: &str = "Curved-head teapot OBJ export";
const OBJ_OBJECT: &str = "teapot";

/// OBJ text of the vessel described by `blueprint`.
pub fn export_obj(blueprint: &Blueprint, settings: &MeshSettings) -> Result<Vec<u8>> {
    let mesh = vessel_mesh(&blueprint.dimensions, settings);
    let mut out = Vec::new();
    write_obj(&mesh, OBJ_HEADER, OBJ_OBJECT, &mut out)?;
    Ok(out)
}

//! JSON export of the blueprint document.

use vessel_ir::Blueprint;

use crate::error::Result;

/// Pretty-printed JSON bytes of `blueprint`.
pub fn export_json(blueprint: &Blueprint) -> Result<Vec<u8>> {
    Ok(blueprint.to_json()?.into_bytes())
}

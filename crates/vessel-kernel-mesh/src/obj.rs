//! Wavefront OBJ text output.

use std::io::Write;

use crate::TriangleMesh;

/// Write `mesh` as OBJ text.
///
/// Layout: one `#` header comment, one `o <object>` line, a `v x y z` line
/// per vertex with 6 decimals, then an `f i j k` line per triangle with
/// 1-based indices into the emitted vertex order.
pub fn write_obj(
    mesh: &TriangleMesh,
    header: &str,
    object: &str,
    mut writer: impl Write,
) -> std::io::Result<()> {
    writeln!(writer, "# {}", header)?;
    writeln!(writer, "o {}", object)?;

    for v in mesh.vertices() {
        writeln!(writer, "v {:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
    }

    for [a, b, c] in mesh.faces() {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }

    Ok(())
}

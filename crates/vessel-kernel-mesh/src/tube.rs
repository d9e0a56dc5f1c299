//! Tube paths: a circular cross-section swept along a poly-line.

use tracing::trace;
use vessel_kernel_math::Point3;

use crate::frame::path_frames;
use crate::MeshBuilder;

impl MeshBuilder {
    /// Sweep a circle of `radius` along `points`.
    ///
    /// One ring of `radial_segments` vertices per point, placed at
    /// `point + radius·(cos θ·normal + sin θ·binormal)` in the point's
    /// [`TubeFrame`](crate::TubeFrame). Rings are stitched like lathe rings.
    /// The tube is left open at both ends.
    ///
    /// Fewer than two points, or fewer than three radial segments, add nothing.
    pub fn add_tube_path(&mut self, points: &[Point3], radius: f64, radial_segments: usize) {
        if points.len() < 2 || radial_segments < 3 {
            trace!(
                points = points.len(),
                radial_segments,
                "skipping degenerate tube path"
            );
            return;
        }

        let rings: Vec<_> = path_frames(points)
            .iter()
            .map(|frame| {
                self.add_ring(radial_segments, |theta| {
                    let (s, c) = theta.sin_cos();
                    frame.transform_point(radius * c, radius * s)
                })
            })
            .collect();

        for pair in rings.windows(2) {
            self.stitch_rings(&pair[0], &pair[1]);
        }
    }
}

//! Lathe: surfaces of revolution around the Y axis.

use tracing::trace;
use vessel_kernel_math::{Point3, Profile};

use crate::{ring_point, MeshBuilder};

impl MeshBuilder {
    /// Revolve a radius/height profile around the Y axis.
    ///
    /// Each station becomes a ring of `segments` vertices at
    /// `(r·cos θ, y, r·sin θ)`. Consecutive rings are stitched with two
    /// triangles per angular step, wound so normals face away from the axis.
    ///
    /// `close_bottom` / `close_top` add a centre vertex at the first / last
    /// station and fan it to that ring; the two fans use opposite vertex
    /// order so both face outward.
    ///
    /// Profiles with fewer than two stations, or fewer than three segments,
    /// add nothing.
    pub fn add_lathe(
        &mut self,
        profile: &Profile,
        segments: usize,
        close_bottom: bool,
        close_top: bool,
    ) {
        if profile.len() < 2 || segments < 3 {
            trace!(
                stations = profile.len(),
                segments,
                "skipping degenerate lathe"
            );
            return;
        }

        let rings: Vec<_> = profile
            .iter()
            .map(|st| self.add_ring(segments, |theta| ring_point(st.radius, st.axial, theta)))
            .collect();

        for pair in rings.windows(2) {
            self.stitch_rings(&pair[0], &pair[1]);
        }

        if let (true, Some(first), Some(ring)) = (close_bottom, profile.first(), rings.first()) {
            let center = self.add_vertex(Point3::new(0.0, first.axial, 0.0));
            for i in 0..segments {
                let i2 = (i + 1) % segments;
                self.add_face(center, ring[i], ring[i2]);
            }
        }

        if let (true, Some(last), Some(ring)) = (close_top, profile.last(), rings.last()) {
            let center = self.add_vertex(Point3::new(0.0, last.axial, 0.0));
            for i in 0..segments {
                let i2 = (i + 1) % segments;
                self.add_face(center, ring[i2], ring[i]);
            }
        }
    }

    /// Open or capped cylinder of `height` starting at `y0`.
    ///
    /// A lathe of the two-station profile `[(r, y0), (r, y0 + height)]`.
    pub fn add_cylinder(
        &mut self,
        radius: f64,
        height: f64,
        y0: f64,
        segments: usize,
        close_bottom: bool,
        close_top: bool,
    ) {
        let profile = Profile::from_pairs(&[(radius, y0), (radius, y0 + height)]);
        self.add_lathe(&profile, segments, close_bottom, close_top);
    }
}

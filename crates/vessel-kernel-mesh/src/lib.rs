#![warn(missing_docs)]

//! Triangle mesh construction for the vessel kernel.
//!
//! Meshes are accumulated in an append-only [`MeshBuilder`]:
//! 1. Vertices are pushed and receive a stable [`VertexId`]
//! 2. Faces reference those ids immediately after the vertices exist
//! 3. [`MeshBuilder::finish`] hands back an immutable [`TriangleMesh`]
//!
//! Two generators feed the builder: [`MeshBuilder::add_lathe`] revolves a
//! radius/height [`Profile`] into quad-strip rings, and
//! [`MeshBuilder::add_tube_path`] sweeps a circle along a poly-line.

use vessel_kernel_math::{Point3, Profile};

pub mod frame;
mod lathe;
pub mod obj;
mod tube;

pub use frame::TubeFrame;
pub use obj::write_obj;

/// Index of a vertex inside one mesh (0-based, never renumbered).
pub type VertexId = u32;

/// Output triangle mesh for export and inspection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Point3>,
    faces: Vec<[VertexId; 3]>,
}

impl TriangleMesh {
    /// Vertex positions in emission order.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Triangles as 0-based vertex index triples.
    pub fn faces(&self) -> &[[VertexId; 3]] {
        &self.faces
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.faces.len()
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn triangle(&self, face: &[VertexId; 3]) -> [Point3; 3] {
        [
            self.vertices[face[0] as usize],
            self.vertices[face[1] as usize],
            self.vertices[face[2] as usize],
        ]
    }

    /// Signed volume enclosed by the mesh (divergence theorem).
    ///
    /// Positive when the faces of a closed mesh wind outward.
    pub fn signed_volume(&self) -> f64 {
        let vol: f64 = self
            .faces
            .iter()
            .map(|f| {
                let [v0, v1, v2] = self.triangle(f);
                v0.coords.dot(&v1.coords.cross(&v2.coords))
            })
            .sum();
        vol / 6.0
    }

    /// Total surface area of all triangles.
    pub fn surface_area(&self) -> f64 {
        self.faces
            .iter()
            .map(|f| {
                let [v0, v1, v2] = self.triangle(f);
                (v1 - v0).cross(&(v2 - v0)).norm() / 2.0
            })
            .sum()
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3, Point3)> {
        let first = *self.vertices.first()?;
        let (min, max) = self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (
                Point3::new(lo.x.min(v.x), lo.y.min(v.y), lo.z.min(v.z)),
                Point3::new(hi.x.max(v.x), hi.y.max(v.y), hi.z.max(v.z)),
            )
        });
        Some((min, max))
    }
}

/// Append-only mesh accumulator.
///
/// Owned by exactly one build; ids handed out by [`add_vertex`](Self::add_vertex)
/// stay valid for the lifetime of the builder and of the finished mesh.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: TriangleMesh,
}

impl MeshBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a vertex and return its id.
    pub fn add_vertex(&mut self, p: Point3) -> VertexId {
        self.mesh.vertices.push(p);
        (self.mesh.vertices.len() - 1) as VertexId
    }

    /// Push a triangle referencing previously added vertices.
    pub fn add_face(&mut self, a: VertexId, b: VertexId, c: VertexId) {
        debug_assert!(
            [a, b, c]
                .iter()
                .all(|&i| (i as usize) < self.mesh.vertices.len()),
            "face references a vertex that has not been added"
        );
        self.mesh.faces.push([a, b, c]);
    }

    /// Emit the two triangles of the quad `a b c d` (`a,b,c` and `a,c,d`).
    pub(crate) fn add_quad(&mut self, a: VertexId, b: VertexId, c: VertexId, d: VertexId) {
        self.add_face(a, b, c);
        self.add_face(a, c, d);
    }

    /// Stitch two equally sized rings with quads.
    ///
    /// For each angular step `i`, `a`/`d` are the current ring's vertices
    /// `i` and `i+1`, `b`/`c` the next ring's.
    pub(crate) fn stitch_rings(&mut self, cur: &[VertexId], nxt: &[VertexId]) {
        let n = cur.len().min(nxt.len());
        for i in 0..n {
            let i2 = (i + 1) % n;
            self.add_quad(cur[i], nxt[i], nxt[i2], cur[i2]);
        }
    }

    /// Number of vertices so far.
    pub fn num_vertices(&self) -> usize {
        self.mesh.num_vertices()
    }

    /// Number of triangles so far.
    pub fn num_triangles(&self) -> usize {
        self.mesh.num_triangles()
    }

    /// Emit `segments` vertices at angles `θ_i = 2π·i/segments`, placed by
    /// `place(θ)`, returning the ids in angular order.
    pub(crate) fn add_ring(
        &mut self,
        segments: usize,
        mut place: impl FnMut(f64) -> Point3,
    ) -> Vec<VertexId> {
        (0..segments)
            .map(|i| {
                let theta = std::f64::consts::TAU * i as f64 / segments as f64;
                let p = place(theta);
                self.add_vertex(p)
            })
            .collect()
    }

    /// Finish building and return the immutable mesh.
    pub fn finish(self) -> TriangleMesh {
        self.mesh
    }
}

/// Convenience: lathe a single profile into its own mesh.
pub fn lathe_mesh(
    profile: &Profile,
    segments: usize,
    close_bottom: bool,
    close_top: bool,
) -> TriangleMesh {
    let mut builder = MeshBuilder::new();
    builder.add_lathe(profile, segments, close_bottom, close_top);
    builder.finish()
}

/// Convenience: sweep a single tube into its own mesh.
pub fn tube_mesh(points: &[Point3], radius: f64, radial_segments: usize) -> TriangleMesh {
    let mut builder = MeshBuilder::new();
    builder.add_tube_path(points, radius, radial_segments);
    builder.finish()
}

/// Point on a circle of `radius` around the Y axis at height `y`.
pub(crate) fn ring_point(radius: f64, y: f64, theta: f64) -> Point3 {
    let (s, c) = theta.sin_cos();
    Point3::new(radius * c, y, radius * s)
}

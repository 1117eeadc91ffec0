//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, normals, and triangle indices.

use crate::error::MeshError;
use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;
use std::collections::HashMap;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use boxgrid_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            normals: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Sets vertex normals.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) {
        self.normals = Some(normals);
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            // Check indices are valid
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            // Check for degenerate triangles
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            // Check for zero-area triangles
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < DEGENERATE_AREA_EPSILON {
                return false;
            }
        }

        true
    }

    /// Returns true if every undirected edge implied by the index list is
    /// shared by exactly two triangles.
    pub fn is_closed(&self) -> bool {
        let mut edges: HashMap<(u32, u32), u32> =
            HashMap::with_capacity(self.triangles.len() * 3 / 2);

        for tri in &self.triangles {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = if a < b { (a, b) } else { (b, a) };
                *edges.entry(key).or_insert(0) += 1;
            }
        }

        edges.values().all(|&count| count == 2)
    }

    /// Signed volume enclosed by the triangle list, via the divergence
    /// theorem. Positive when all triangles wind outward.
    pub fn signed_volume(&self) -> f64 {
        let mut six_volumes = 0.0;

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            six_volumes += v0.dot(v1.cross(v2));
        }

        six_volumes / 6.0
    }

    /// Runs the full diagnostic suite and reports the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::ValidationFailed`] when the index list references
    /// missing vertices, contains a degenerate triangle, or leaves a boundary
    /// edge open.
    pub fn check(&self) -> Result<(), MeshError> {
        if !self.validate() {
            return Err(MeshError::validation_failed(
                "index list references missing vertices or degenerate triangles",
            ));
        }
        if !self.is_closed() {
            return Err(MeshError::validation_failed(
                "mesh has boundary edges and is not watertight",
            ));
        }
        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.push(tri[0]);
            result.push(tri[1]);
            result.push(tri[2]);
        }
        result
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            let mut result = Vec::with_capacity(normals.len() * 3);
            for n in normals {
                result.push(n.x as f32);
                result.push(n.y as f32);
                result.push(n.z as f32);
            }
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tetrahedron with outward winding, volume 1/6.
    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_vertex(DVec3::Z);
        mesh.add_triangle(0, 2, 1);
        mesh.add_triangle(0, 1, 3);
        mesh.add_triangle(0, 3, 2);
        mesh.add_triangle(1, 2, 3);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        assert!(mesh.validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2); // Invalid indices
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_degenerate_triangle() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0)); // Collinear
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_tetrahedron_is_closed() {
        assert!(tetrahedron().is_closed());
    }

    #[test]
    fn test_open_mesh_is_not_closed() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.is_closed());
    }

    #[test]
    fn test_tetrahedron_signed_volume() {
        let volume = tetrahedron().signed_volume();
        assert!((volume - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_reversed_winding_negates_volume() {
        let mut mesh = tetrahedron();
        let reversed: Vec<[u32; 3]> = mesh
            .triangles()
            .iter()
            .map(|t| [t[0], t[2], t[1]])
            .collect();
        mesh.triangles.clear();
        for t in reversed {
            mesh.add_triangle(t[0], t[1], t[2]);
        }
        assert!((mesh.signed_volume() + 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_check_reports_open_mesh() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        let err = mesh.check().unwrap_err();
        assert!(err.to_string().contains("watertight"));
    }

    #[test]
    fn test_check_accepts_tetrahedron() {
        assert!(tetrahedron().check().is_ok());
    }

    #[test]
    fn test_mesh_vertices_f32() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        let f32_verts = mesh.vertices_f32();
        assert_eq!(f32_verts, vec![1.0f32, 2.0, 3.0]);
    }

    #[test]
    fn test_mesh_normals_f32() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        assert!(mesh.normals_f32().is_none());
        mesh.set_normals(vec![DVec3::Y]);
        assert_eq!(mesh.normals_f32().unwrap(), vec![0.0f32, 1.0, 0.0]);
    }
}

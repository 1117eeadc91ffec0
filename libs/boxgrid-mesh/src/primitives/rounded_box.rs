//! # Rounded Box Primitive
//!
//! Generates the filleted-cuboid mesh: eight one-eighth-sphere corner
//! patches joined by twelve edge bands and six flat faces.
//!
//! Only the `(+,+,+)` octant is tessellated trigonometrically; the other
//! seven corners are component-wise sign reflections of it. A reflection
//! with an even number of negative components preserves triangle
//! orientation, so winding is decided per region from the octant sign
//! vector rather than from a lookup table.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{
    DEFAULT_BOX_EXTENT, DEFAULT_CORNER_RADIUS, MAX_CORNER_SEGMENTS, MAX_INDEXED_VERTICES,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Octant sign vectors. The top four corners run counterclockwise from
/// `(+X, +Z)`, the bottom four mirror them below the XZ plane. Corner-major
/// vertex layout, face quads, and edge-band pairings all index into this
/// order.
const CORNER_LAYOUT: [DVec3; 8] = [
    DVec3::new(1.0, 1.0, 1.0),
    DVec3::new(1.0, 1.0, -1.0),
    DVec3::new(-1.0, 1.0, -1.0),
    DVec3::new(-1.0, 1.0, 1.0),
    DVec3::new(1.0, -1.0, 1.0),
    DVec3::new(1.0, -1.0, -1.0),
    DVec3::new(-1.0, -1.0, -1.0),
    DVec3::new(-1.0, -1.0, 1.0),
];

/// Closed-form vertex count for a tessellation level: eight corners, each a
/// `segments x (segments + 1)` grid plus one apex.
///
/// # Examples
///
/// ```rust
/// use boxgrid_mesh::primitives::total_vertex_count;
///
/// assert_eq!(total_vertex_count(1), 24);
/// assert_eq!(total_vertex_count(2), 56);
/// ```
pub fn total_vertex_count(segments: u32) -> usize {
    let s = segments as usize;
    8 * (s * (s + 1) + 1)
}

/// Closed-form triangle count for a tessellation level.
///
/// # Examples
///
/// ```rust
/// use boxgrid_mesh::primitives::total_triangle_count;
///
/// assert_eq!(total_triangle_count(1), 44);
/// ```
pub fn total_triangle_count(segments: u32) -> usize {
    let s = segments as usize;
    16 * s * s + 16 * s + 12
}

/// Normalized rounded-box parameters, as actually used by the generator.
///
/// Construction substitutes defaults for non-finite inputs, rejects
/// out-of-range finite inputs, and clamps the fillet radius to half the
/// shortest extent. The resulting snapshot is what the renderer reads back,
/// so it serializes.
///
/// # Example
///
/// ```rust
/// use boxgrid_mesh::RoundedBoxParams;
///
/// let params = RoundedBoxParams::new(1.0, 1.0, 1.0, 10.0, 2).unwrap();
/// assert_eq!(params.radius, 0.5); // clamped to half the shortest extent
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedBoxParams {
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
    /// Extent along Z
    pub depth: f64,
    /// Fillet radius, already clamped
    pub radius: f64,
    /// Tessellation level along each corner's latitude and longitude
    pub segments: u32,
}

impl RoundedBoxParams {
    /// Normalizes and validates rounded-box parameters.
    ///
    /// Non-finite extents fall back to [`DEFAULT_BOX_EXTENT`] and a
    /// non-finite radius to [`DEFAULT_CORNER_RADIUS`]; finite values are
    /// validated strictly.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidParameter`] for a non-positive extent, a
    ///   negative radius, or a zero segment count
    /// - [`MeshError::TooManyVertices`] when the closed-form vertex count
    ///   would overflow a 16-bit index buffer
    pub fn new(
        width: f64,
        height: f64,
        depth: f64,
        radius: f64,
        segments: u32,
    ) -> Result<Self, MeshError> {
        let width = if width.is_finite() { width } else { DEFAULT_BOX_EXTENT };
        let height = if height.is_finite() { height } else { DEFAULT_BOX_EXTENT };
        let depth = if depth.is_finite() { depth } else { DEFAULT_BOX_EXTENT };
        let radius = if radius.is_finite() { radius } else { DEFAULT_CORNER_RADIUS };

        if width <= 0.0 {
            return Err(MeshError::invalid_parameter(
                "width",
                format!("extent must be positive: {}", width),
            ));
        }
        if height <= 0.0 {
            return Err(MeshError::invalid_parameter(
                "height",
                format!("extent must be positive: {}", height),
            ));
        }
        if depth <= 0.0 {
            return Err(MeshError::invalid_parameter(
                "depth",
                format!("extent must be positive: {}", depth),
            ));
        }
        if radius < 0.0 {
            return Err(MeshError::invalid_parameter(
                "radius",
                format!("radius must be non-negative: {}", radius),
            ));
        }
        if segments < 1 {
            return Err(MeshError::invalid_parameter(
                "segments",
                format!("segment count must be at least 1: {}", segments),
            ));
        }
        if segments > MAX_CORNER_SEGMENTS {
            return Err(MeshError::TooManyVertices {
                count: total_vertex_count(segments),
                max: MAX_INDEXED_VERTICES,
            });
        }

        // The fillet can never exceed half the shortest extent.
        let radius = radius.min(width.min(height).min(depth) / 2.0);

        Ok(Self {
            width,
            height,
            depth,
            radius,
            segments,
        })
    }

    /// Offset of each corner-sphere center from the origin.
    pub fn edge_half_extents(&self) -> DVec3 {
        DVec3::new(
            self.width / 2.0 - self.radius,
            self.height / 2.0 - self.radius,
            self.depth / 2.0 - self.radius,
        )
    }

    /// Builds the mesh. Infallible once parameters are normalized; buffers
    /// are pre-sized from the closed-form counts and every element is
    /// written exactly once.
    pub fn build(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(
            total_vertex_count(self.segments),
            total_triangle_count(self.segments),
        );

        emit_vertices(self, &mut mesh);
        weave_corners(self.segments, &mut mesh);
        weave_faces(self.segments, &mut mesh);
        weave_height_edges(self.segments, &mut mesh);
        weave_depth_edges(self.segments, &mut mesh);
        weave_width_edges(self.segments, &mut mesh);

        mesh
    }
}

/// Creates a rounded-box mesh centered at the origin.
///
/// # Arguments
///
/// * `size` - Extents [width, height, depth]
/// * `radius` - Fillet radius (clamped to half the shortest extent)
/// * `segments` - Corner tessellation level (>= 1)
///
/// # Returns
///
/// A closed mesh with `8 * (segments * (segments + 1) + 1)` vertices,
/// analytic unit normals, and outward-wound triangles.
///
/// # Example
///
/// ```rust
/// use boxgrid_mesh::primitives::create_rounded_box;
/// use glam::DVec3;
///
/// let mesh = create_rounded_box(DVec3::splat(1.0), 0.2, 2).unwrap();
/// assert_eq!(mesh.vertex_count(), 56);
/// assert!(mesh.is_closed());
/// ```
pub fn create_rounded_box(size: DVec3, radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    Ok(RoundedBoxParams::new(size.x, size.y, size.z, radius, segments)?.build())
}

/// Tessellates the `(+,+,+)` one-eighth sphere and reflects it into all
/// eight corners, filling the vertex and normal pools corner-major.
///
/// Latitude `y` runs pole-ward over `segments + 1` steps; every row except
/// the pole holds `segments + 1` longitude samples, and the pole collapses
/// to a single apex vertex. Positions are the unit-sphere points scaled by
/// the radius and offset to the corner-sphere center; normals are the unit
/// points themselves.
fn emit_vertices(params: &RoundedBoxParams, mesh: &mut Mesh) {
    let s = params.segments;
    let corner_offset = params.edge_half_extents();

    let mut octant_positions = Vec::with_capacity(total_vertex_count(s) / 8);
    let mut octant_normals = Vec::with_capacity(total_vertex_count(s) / 8);

    for y in 0..=s {
        if y == s {
            // pole row collapses to the apex
            let unit = DVec3::Y;
            octant_positions.push(unit * params.radius + corner_offset);
            octant_normals.push(unit);
            continue;
        }

        let va = f64::from(y) / f64::from(s) * FRAC_PI_2;
        let (sin_va, cos_va) = va.sin_cos();

        for x in 0..=s {
            let ha = f64::from(x) / f64::from(s) * FRAC_PI_2;
            let unit = DVec3::new(cos_va * ha.cos(), sin_va, cos_va * ha.sin());
            octant_positions.push(unit * params.radius + corner_offset);
            octant_normals.push(unit);
        }
    }

    let mut normals = Vec::with_capacity(total_vertex_count(s));
    for signs in CORNER_LAYOUT {
        for (position, normal) in octant_positions.iter().zip(&octant_normals) {
            mesh.add_vertex(*position * signs);
            normals.push(*normal * signs);
        }
    }
    mesh.set_normals(normals);
}

/// The raw `(a, b, c)` grid order winds inward on the base octant, so any
/// corner reached by an even number of sign flips must reverse it.
fn corner_winding_flipped(signs: DVec3) -> bool {
    signs.x * signs.y * signs.z > 0.0
}

/// Vertical bands join a top corner to the bottom corner directly below it
/// along their first grid rows.
fn height_winding_flipped(signs: DVec3) -> bool {
    signs.x * signs.z < 0.0
}

/// Depth bands pair corners across the Z axis through each row's first
/// column.
fn depth_winding_flipped(signs: DVec3) -> bool {
    signs.y > 0.0
}

/// Width bands pair corners across the X axis through each row's last
/// column.
fn width_winding_flipped(signs: DVec3) -> bool {
    signs.y * signs.z < 0.0
}

/// Emits one quad as two triangles, mirroring the winding when `flipped`.
fn push_quad(mesh: &mut Mesh, a: u32, b: u32, c: u32, d: u32, flipped: bool) {
    if flipped {
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(b, c, d);
    } else {
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(b, d, c);
    }
}

/// Triangulates the eight corner patches: quad rows for `segments - 1` row
/// pairs, then a fan from the last grid row to the apex.
fn weave_corners(segments: u32, mesh: &mut Mesh) {
    let s = segments;
    let rs1 = s + 1;
    let corner = s * rs1 + 1;
    let apex = s * rs1;
    let last_row = rs1 * (s - 1);

    for (i, signs) in CORNER_LAYOUT.iter().enumerate() {
        let offset = corner * i as u32;
        let flipped = corner_winding_flipped(*signs);

        for v in 0..s - 1 {
            let r1 = v * rs1;
            let r2 = (v + 1) * rs1;

            for u in 0..s {
                let a = offset + r1 + u;
                let b = a + 1;
                let c = offset + r2 + u;
                let d = c + 1;
                push_quad(mesh, a, b, c, d, flipped);
            }
        }

        for u in 0..s {
            let a = offset + last_row + u;
            let b = a + 1;
            let c = offset + apex;

            if flipped {
                mesh.add_triangle(a, c, b);
            } else {
                mesh.add_triangle(a, b, c);
            }
        }
    }
}

/// Triangulates the six flat faces. Each face is one quad over statically
/// known boundary vertices: the apexes for the Y faces, each corner's grid
/// vertex 0 for the X faces, and grid vertex `segments` for the Z faces.
fn weave_faces(segments: u32, mesh: &mut Mesh) {
    let s = segments;
    let corner = s * (s + 1) + 1;
    let apex = s * (s + 1);

    // +Y face (apexes of corners 0-3)
    let a = apex;
    let b = apex + corner;
    let c = apex + corner * 2;
    let d = apex + corner * 3;
    mesh.add_triangle(a, b, c);
    mesh.add_triangle(a, c, d);

    // -Y face (apexes of corners 4-7)
    let a = apex + corner * 4;
    let b = apex + corner * 5;
    let c = apex + corner * 6;
    let d = apex + corner * 7;
    mesh.add_triangle(a, c, b);
    mesh.add_triangle(a, d, c);

    // +X face (corners 0, 1, 4, 5)
    let a = 0;
    let b = corner;
    let c = corner * 4;
    let d = corner * 5;
    mesh.add_triangle(a, c, b);
    mesh.add_triangle(b, c, d);

    // -X face (corners 2, 3, 6, 7)
    let a = corner * 2;
    let b = corner * 3;
    let c = corner * 6;
    let d = corner * 7;
    mesh.add_triangle(a, c, b);
    mesh.add_triangle(b, c, d);

    // +Z face (corners 0, 3, 4, 7)
    let a = s;
    let b = s + corner * 3;
    let c = s + corner * 4;
    let d = s + corner * 7;
    mesh.add_triangle(a, b, c);
    mesh.add_triangle(b, d, c);

    // -Z face (corners 1, 2, 5, 6)
    let a = s + corner;
    let b = s + corner * 2;
    let c = s + corner * 5;
    let d = s + corner * 6;
    mesh.add_triangle(a, c, b);
    mesh.add_triangle(b, c, d);
}

/// Weaves the four vertical edge bands: top corner `i` to bottom corner
/// `i + 4`, one quad strip along their first grid rows.
fn weave_height_edges(segments: u32, mesh: &mut Mesh) {
    let s = segments;
    let corner = s * (s + 1) + 1;

    for i in 0..4u32 {
        let top = corner * i;
        let bottom = corner * (i + 4);
        let flipped = height_winding_flipped(CORNER_LAYOUT[i as usize]);

        for u in 0..s {
            let a = top + u;
            let b = a + 1;
            let c = bottom + u;
            let d = c + 1;
            push_quad(mesh, a, b, c, d, flipped);
        }
    }
}

/// Weaves the four edge bands along the depth axis through each row's first
/// column. The final step lands on the apex, which doubles as the missing
/// last row.
fn weave_depth_edges(segments: u32, mesh: &mut Mesh) {
    let s = segments;
    let rs1 = s + 1;
    let corner = s * rs1 + 1;

    const STARTS: [u32; 4] = [0, 2, 4, 6];
    const ENDS: [u32; 4] = [1, 3, 5, 7];

    for i in 0..4 {
        let start = corner * STARTS[i];
        let end = corner * ENDS[i];
        let flipped = depth_winding_flipped(CORNER_LAYOUT[STARTS[i] as usize]);

        for u in 0..s {
            let a = start + u * rs1;
            let b = start + (u + 1) * rs1;
            let c = end + u * rs1;
            let d = end + (u + 1) * rs1;
            push_quad(mesh, a, b, c, d, flipped);
        }
    }
}

/// Weaves the four edge bands along the width axis through each row's last
/// column, jumping to the apex on the final step.
fn weave_width_edges(segments: u32, mesh: &mut Mesh) {
    let s = segments;
    let rs1 = s + 1;
    let corner = s * rs1 + 1;
    let apex = s * rs1;

    const STARTS: [u32; 4] = [0, 1, 4, 5];
    const ENDS: [u32; 4] = [3, 2, 7, 6];

    for i in 0..4 {
        let start = corner * STARTS[i];
        let end = corner * ENDS[i];
        let flipped = width_winding_flipped(CORNER_LAYOUT[STARTS[i] as usize]);

        for u in 0..s {
            let row = s + u * rs1;
            let next = if u + 1 == s { apex } else { s + (u + 1) * rs1 };
            push_quad(mesh, start + row, start + next, end + row, end + next, flipped);
        }
    }
}

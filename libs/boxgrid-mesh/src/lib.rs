//! # Boxgrid Mesh
//!
//! Browser-safe rounded-box mesh generation for the box grid renderer.
//! Produces the vertex, normal, and index buffers that the JavaScript layer
//! uploads to its GPU renderer.
//!
//! ## Architecture
//!
//! ```text
//! boxgrid-mesh (Mesh) → boxgrid-wasm (buffers) → renderer
//! ```
//!
//! ## Algorithm
//!
//! The rounded box is a cuboid with spherically-filleted edges and corners:
//! one corner octant is tessellated as a one-eighth sphere and reflected
//! into the other seven, then corner patches, flat faces, and edge bands
//! are woven into a single watertight index list. All buffers are pre-sized
//! from closed-form counts; generation is pure and deterministic.
//!
//! ## Usage
//!
//! ```rust
//! use boxgrid_mesh::build_rounded_box;
//!
//! let mesh = build_rounded_box(1.0, 1.0, 1.0, 0.2, 2).unwrap();
//! assert_eq!(mesh.vertex_count(), 56);
//! ```

pub mod error;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use mesh::Mesh;
pub use primitives::{create_rounded_box, RoundedBoxParams};

/// Builds a rounded-box mesh centered at the origin.
///
/// This is the main entry point for the mesh generation pipeline. Non-finite
/// extents and radius fall back to the shared defaults; finite out-of-range
/// values are rejected.
///
/// # Arguments
///
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
/// * `radius` - Fillet radius (clamped to half the shortest extent)
/// * `segments` - Corner tessellation level (>= 1)
///
/// # Returns
///
/// A mesh containing positions, analytic unit normals, and triangle indices.
///
/// # Example
///
/// ```rust
/// use boxgrid_mesh::build_rounded_box;
///
/// let mesh = build_rounded_box(1.0, 1.0, 1.0, 0.2, 2).unwrap();
/// assert!(mesh.is_closed());
/// assert!(mesh.signed_volume() > 0.0);
/// ```
pub fn build_rounded_box(
    width: f64,
    height: f64,
    depth: f64,
    radius: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    Ok(RoundedBoxParams::new(width, height, depth, radius, segments)?.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rounded_box() {
        let mesh = build_rounded_box(1.0, 1.0, 1.0, 0.2, 2).unwrap();
        assert_eq!(mesh.vertex_count(), 56);
        assert_eq!(mesh.triangle_count(), 108);
        assert!(mesh.check().is_ok());
    }

    #[test]
    fn test_build_rejects_bad_extent() {
        assert!(build_rounded_box(-1.0, 1.0, 1.0, 0.2, 2).is_err());
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = build_rounded_box(1.0, 1.0, 0.0, 0.2, 2).unwrap_err();
        assert!(err.to_string().contains("depth"));
    }
}

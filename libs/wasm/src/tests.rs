//! Tests for the WASM-facing pipeline helpers.

use super::*;
use boxgrid_mesh::primitives::{total_triangle_count, total_vertex_count};

/// Confirms the internal helper produces the closed-form buffer sizes.
#[test]
fn build_produces_expected_counts() {
    let mesh = build_rounded_box_internal(1.0, 1.0, 1.0, 0.04, 1).expect("generation succeeds");

    assert_eq!(mesh.vertex_count(), total_vertex_count(1));
    assert_eq!(mesh.triangle_count(), total_triangle_count(1));
    assert_eq!(mesh.positions().len(), mesh.vertex_count() * 3);
    assert_eq!(mesh.normals().len(), mesh.vertex_count() * 3);
    assert_eq!(mesh.indices().len(), mesh.triangle_count() * 3);
}

/// Ensures invalid parameters surface explicit errors.
#[test]
fn build_rejects_invalid_parameters() {
    let err = build_rounded_box_internal(0.0, 1.0, 1.0, 0.1, 1).unwrap_err();
    assert!(err.to_string().contains("width"));

    assert!(build_rounded_box_internal(1.0, 1.0, 1.0, 0.1, 0).is_err());
}

/// Tests that mesh buffers contain valid data.
#[test]
fn build_mesh_buffers_valid() {
    let mesh = build_rounded_box_internal(2.0, 2.0, 2.0, 0.3, 3).expect("generation succeeds");

    // Verify all buffer values are finite
    for &v in &mesh.positions() {
        assert!(v.is_finite(), "Position value should be finite");
    }
    for &n in &mesh.normals() {
        assert!(n.is_finite(), "Normal value should be finite");
    }

    // Verify all indices are in range
    let vertex_count = mesh.vertex_count() as u32;
    for &idx in &mesh.indices() {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }
}

/// The parameter echo reflects normalization: defaults substituted and the
/// radius clamped.
#[test]
fn parameter_echo_reflects_normalization() {
    let mesh = build_rounded_box_internal(1.0, 1.0, 1.0, 10.0, 2).expect("generation succeeds");

    let params = mesh.parameters();
    assert_eq!(params.radius, 0.5);

    let json = mesh.parameters_json();
    assert!(json.contains("\"radius\":0.5"));
    assert!(json.contains("\"segments\":2"));
}

/// Constant echoes match the shared configuration.
#[test]
fn default_echoes_match_config() {
    assert_eq!(default_corner_radius(), DEFAULT_CORNER_RADIUS);
    assert_eq!(default_corner_segments(), DEFAULT_CORNER_SEGMENTS);
}

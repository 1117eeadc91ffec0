//! WASM-facing entry points for the box grid mesh pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helper
//! `build_rounded_box_internal` to avoid depending on a JS host.
//!
//! ```
//! let mesh = boxgrid_wasm::build_rounded_box_internal(1.0, 1.0, 1.0, 0.2, 1).unwrap();
//! assert_eq!(mesh.vertex_count(), 24);
//! ```

use boxgrid_mesh::{MeshError, RoundedBoxParams};
use config::constants::{DEFAULT_CORNER_RADIUS, DEFAULT_CORNER_SEGMENTS};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "boxgrid-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default fillet radius used when the caller passes a
/// non-finite value. This is a thin wrapper around a shared constant.
///
/// # Examples
/// ```
/// let radius = boxgrid_wasm::default_corner_radius();
/// assert!(radius > 0.0);
/// ```
#[wasm_bindgen]
pub fn default_corner_radius() -> f64 {
    DEFAULT_CORNER_RADIUS
}

/// Returns the default corner tessellation level.
///
/// # Examples
/// ```
/// let segments = boxgrid_wasm::default_corner_segments();
/// assert!(segments >= 1);
/// ```
#[wasm_bindgen]
pub fn default_corner_segments() -> u32 {
    DEFAULT_CORNER_SEGMENTS
}

/// Mesh handle returned from generation.
///
/// Carries the GPU-ready buffers for one rounded box plus the normalized
/// parameters that produced them.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = build_rounded_box(1, 1, 1, 0.04, 1);
/// // geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// // geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// // geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    vertex_count: usize,
    triangle_count: usize,
    positions: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u32>,
    parameters: RoundedBoxParams,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Returns the position buffer as a Float32Array.
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the normal buffer as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the index buffer as a Uint32Array. Vertex counts stay under
    /// 65536, so the renderer may downcast to Uint16Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the normalized parameters (defaults substituted, radius
    /// clamped) as a JSON string.
    pub fn parameters_json(&self) -> String {
        serde_json::to_string(&self.parameters).unwrap_or_default()
    }
}

impl MeshHandle {
    /// Returns the normalized parameter snapshot.
    pub fn parameters(&self) -> RoundedBoxParams {
        self.parameters
    }
}

/// Generates a rounded-box mesh and returns its GPU buffers.
///
/// This is the main entry point used from JavaScript. For Rust tests,
/// prefer [`build_rounded_box_internal`], which exposes Rust error types
/// directly.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when parameter validation fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const mesh = build_rounded_box(1, 1, 1, 0.04, 1);
/// ```
#[wasm_bindgen]
pub fn build_rounded_box(
    width: f64,
    height: f64,
    depth: f64,
    radius: f64,
    segments: u32,
) -> Result<MeshHandle, JsValue> {
    build_rounded_box_internal(width, height, depth, radius, segments)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that generates a rounded-box mesh and packages its
/// buffers.
///
/// # Examples
/// ```
/// let mesh = boxgrid_wasm::build_rounded_box_internal(1.0, 1.0, 1.0, 0.2, 2).unwrap();
/// assert_eq!(mesh.vertex_count(), 56);
/// ```
pub fn build_rounded_box_internal(
    width: f64,
    height: f64,
    depth: f64,
    radius: f64,
    segments: u32,
) -> Result<MeshHandle, MeshError> {
    let params = RoundedBoxParams::new(width, height, depth, radius, segments)?;
    let mesh = params.build();

    Ok(MeshHandle {
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        positions: mesh.vertices_f32(),
        normals: mesh.normals_f32().unwrap_or_default(),
        indices: mesh.indices_u32(),
        parameters: params,
    })
}

#[cfg(test)]
mod tests;

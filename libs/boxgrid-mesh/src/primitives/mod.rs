//! # Primitives
//!
//! Mesh generation for the box grid renderer's primitives.

pub mod rounded_box;

pub use rounded_box::{create_rounded_box, total_triangle_count, total_vertex_count, RoundedBoxParams};

//! # Config Crate
//!
//! Centralized configuration constants for the box grid mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_CORNER_RADIUS};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1.0e-11; // smaller than EPSILON_TOLERANCE (1e-9)
//! let is_zero = value.abs() < EPSILON_TOLERANCE;
//! assert!(is_zero);
//!
//! // Fall back to the default fillet radius when none is supplied
//! let requested = f64::NAN;
//! let radius = if requested.is_finite() { requested } else { DEFAULT_CORNER_RADIUS };
//! assert_eq!(radius, DEFAULT_CORNER_RADIUS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Renderer Compatible**: Limits keep index buffers 16-bit addressable

pub mod constants;

//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.corner_segments >= 1);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 4).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 0).unwrap_err(),
        ConfigError::InvalidSegments(0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, MAX_CORNER_SEGMENTS + 1).unwrap_err(),
        ConfigError::InvalidSegments(MAX_CORNER_SEGMENTS + 1)
    );
}

/// The segment cap is exactly the largest level addressable by 16-bit
/// indices.
#[test]
fn segment_cap_saturates_index_budget() {
    let s = MAX_CORNER_SEGMENTS as usize;
    assert!(8 * (s * (s + 1) + 1) <= MAX_INDEXED_VERTICES);
    assert!(8 * ((s + 1) * (s + 2) + 1) > MAX_INDEXED_VERTICES);
}

#[test]
fn degenerate_epsilon_below_tolerance() {
    assert!(DEGENERATE_AREA_EPSILON < EPSILON_TOLERANCE);
}

#[test]
fn defaults_match_renderer_expectations() {
    assert_eq!(DEFAULT_BOX_EXTENT, 1.0);
    assert_eq!(DEFAULT_CORNER_RADIUS, 0.15);
    assert_eq!(DEFAULT_CORNER_SEGMENTS, 1);
}

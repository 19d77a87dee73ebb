//! Tests for the centralized tolerance constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::ToleranceConfig;
/// let cfg = ToleranceConfig::default();
/// assert!(cfg.epsilon > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = ToleranceConfig::default();
    assert!(cfg.epsilon > 0.0);
    assert!(cfg.max_relative > 0.0);
    assert!(DEFAULT_MAX_ULPS > 0);
}

#[test]
fn default_matches_constants() {
    let cfg = ToleranceConfig::default();
    assert_eq!(cfg.epsilon, EPSILON_TOLERANCE);
    assert_eq!(cfg.max_relative, MAX_RELATIVE_TOLERANCE);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::ToleranceConfig;
/// assert!(ToleranceConfig::new(0.0, 1.0e-9).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ToleranceConfig::new(0.0, 1.0e-9).unwrap_err(),
        ConfigError::InvalidEpsilon(0.0)
    );
    assert_eq!(
        ToleranceConfig::new(1.0e-9, -1.0).unwrap_err(),
        ConfigError::InvalidMaxRelative(-1.0)
    );
    assert_eq!(
        ToleranceConfig::new(f64::INFINITY, 1.0e-9).unwrap_err(),
        ConfigError::InvalidEpsilon(f64::INFINITY)
    );
}

#[test]
fn new_rejects_nan() {
    assert!(matches!(
        ToleranceConfig::new(1.0e-9, f64::NAN),
        Err(ConfigError::InvalidMaxRelative(v)) if v.is_nan()
    ));
}

#[test]
fn error_display_names_field() {
    let err = ConfigError::InvalidEpsilon(-1.0);
    assert!(err.to_string().contains("epsilon"));
    let err = ConfigError::InvalidMaxRelative(0.0);
    assert!(err.to_string().contains("max_relative"));
}

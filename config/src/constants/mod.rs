//! Numeric tolerances shared across the vector3d workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Absolute tolerance used when comparing vector components.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Relative tolerance used when comparing vector components whose magnitude
/// makes an absolute bound meaningless.
///
/// # Examples
/// ```
/// use config::constants::MAX_RELATIVE_TOLERANCE;
///
/// let a = 1.0e12_f64;
/// let b = a + 1.0;
/// assert!((a - b).abs() <= a.abs().max(b.abs()) * MAX_RELATIVE_TOLERANCE);
/// ```
pub const MAX_RELATIVE_TOLERANCE: f64 = 1.0e-9;

/// Number of units in the last place two components may differ by and still
/// compare equal.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAX_ULPS;
/// assert!(DEFAULT_MAX_ULPS >= 1);
/// ```
pub const DEFAULT_MAX_ULPS: u32 = 4;

/// Immutable snapshot of the tolerances used for approximate comparison.
///
/// # Examples
/// ```
/// use config::constants::ToleranceConfig;
/// let config = ToleranceConfig::default();
/// assert!(config.epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConfig {
    /// Largest absolute difference accepted between two components.
    pub epsilon: f64,
    /// Largest difference accepted relative to the larger component.
    pub max_relative: f64,
}

impl ToleranceConfig {
    /// Builds a tolerance snapshot, rejecting bounds that are zero, negative
    /// or not finite.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToleranceConfig;
    /// let cfg = ToleranceConfig::new(1.0e-6, 1.0e-4).expect("valid config");
    /// assert_eq!(cfg.max_relative, 1.0e-4);
    /// ```
    pub fn new(epsilon: f64, max_relative: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        if !max_relative.is_finite() || max_relative <= 0.0 {
            return Err(ConfigError::InvalidMaxRelative(max_relative));
        }
        Ok(Self {
            epsilon,
            max_relative,
        })
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON_TOLERANCE,
            max_relative: MAX_RELATIVE_TOLERANCE,
        }
    }
}

/// Error returned when invalid tolerance values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the absolute tolerance is not a positive finite number.
    InvalidEpsilon(f64),
    /// Raised when the relative tolerance is not a positive finite number.
    InvalidMaxRelative(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEpsilon(value) => {
                write!(f, "epsilon must be positive and finite: {value}")
            }
            ConfigError::InvalidMaxRelative(value) => {
                write!(f, "max_relative must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;

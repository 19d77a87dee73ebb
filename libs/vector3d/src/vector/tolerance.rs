//! Approximate comparison of [`Vector3D`] values.
//!
//! `approx` traits compare component-wise; their default tolerances come from
//! [`config::constants`].

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use config::constants::{
    ToleranceConfig, DEFAULT_MAX_ULPS, EPSILON_TOLERANCE, MAX_RELATIVE_TOLERANCE,
};

use super::Vector3D;

impl Vector3D {
    /// True when every component of `self` and `other` is within
    /// `tolerance.epsilon` absolutely or `tolerance.max_relative` relatively.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToleranceConfig;
    /// use vector3d::Vector3D;
    ///
    /// let a = Vector3D::new(0.1, 0.2, 0.3);
    /// let b = Vector3D::new(0.1 + 1e-7, 0.2, 0.3);
    /// let loose = ToleranceConfig::new(1e-6, 1e-6).unwrap();
    /// assert!(a.approx_eq_with(b, &loose));
    /// assert!(!a.approx_eq_with(b, &ToleranceConfig::default()));
    /// ```
    pub fn approx_eq_with(self, other: Self, tolerance: &ToleranceConfig) -> bool {
        self.relative_eq(&other, tolerance.epsilon, tolerance.max_relative)
    }
}

impl AbsDiffEq for Vector3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3D {
    fn default_max_relative() -> f64 {
        MAX_RELATIVE_TOLERANCE
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3D {
    fn default_max_ulps() -> u32 {
        DEFAULT_MAX_ULPS
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

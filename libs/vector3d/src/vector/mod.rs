//! The [`Vector3D`] value type.
//!
//! Every operation takes its operands by value and returns a new value;
//! nothing here mutates `self`. Operator overloads live in `ops`, text
//! formatting and parsing in `text`, approximate comparison in `tolerance`.

mod ops;
mod text;
mod tolerance;

pub use text::format;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A point or displacement in 3-dimensional real space.
///
/// Fields are public and carry no invariant: NaN and infinities are stored
/// as given and propagate through arithmetic by IEEE-754 rules.
///
/// # Examples
/// ```
/// use vector3d::Vector3D;
///
/// let v = Vector3D::new(4.0, 3.0, 0.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(Vector3D::default(), Vector3D::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3D {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a vector from its three components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates `(x, 0, 0)`.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    /// assert_eq!(Vector3D::from_x(2.0), Vector3D::new(2.0, 0.0, 0.0));
    /// ```
    pub const fn from_x(x: f64) -> Self {
        Self::new(x, 0.0, 0.0)
    }

    /// Creates `(x, y, 0)`.
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Component-wise sum. Same as `self + other`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise difference. Same as `self - other`.
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Cross product `self × other`. Same as `self * other`.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    ///
    /// let x = Vector3D::new(1.0, 0.0, 0.0);
    /// let y = Vector3D::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(y), Vector3D::new(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Dot product truncated toward zero to an `i32`. Same as `self % other`.
    ///
    /// The sum is computed in `f64` and then cast, so fractional parts are
    /// discarded: `(0.5, 0, 0) · (1, 0, 0)` is `0`. Results outside the `i32`
    /// range saturate and NaN becomes `0`. Use [`Vector3D::dot_exact`] to
    /// keep the full value.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    ///
    /// let a = Vector3D::new(1.0, 2.0, 3.0);
    /// let b = Vector3D::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(b), 32);
    ///
    /// let c = Vector3D::new(1.5, 0.0, 0.0);
    /// assert_eq!(c.dot(Vector3D::new(1.0, 0.0, 0.0)), 1);
    /// ```
    pub fn dot(self, other: Self) -> i32 {
        self.dot_exact(other) as i32
    }

    /// Dot product without integer truncation.
    pub fn dot_exact(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length `sqrt(x² + y² + z²)`.
    pub fn magnitude(self) -> f64 {
        self.dot_exact(self).sqrt()
    }

    /// Adds `scalar` to every component. Same as `self + scalar`.
    pub fn add_scalar(self, scalar: f64) -> Self {
        Self::new(self.x + scalar, self.y + scalar, self.z + scalar)
    }

    /// Multiplies every component by `scalar`. Same as `self * scalar`.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    ///
    /// // Unit vector composed from magnitude and scaling.
    /// let v = Vector3D::new(0.0, 3.0, 4.0);
    /// let unit = v.scale(1.0 / v.magnitude());
    /// approx::assert_relative_eq!(unit, Vector3D::new(0.0, 0.6, 0.8));
    /// ```
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Returns `[x, y, z]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(v: Vector3D) -> Self {
        v.to_array()
    }
}

impl From<DVec3> for Vector3D {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D> for DVec3 {
    fn from(v: Vector3D) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

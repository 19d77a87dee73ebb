//! # Vector3D
//!
//! A three-component `f64` vector value type and its operator set.
//!
//! ## Operators
//!
//! | Expression | Method | Result |
//! |---|---|---|
//! | `a + b` | [`Vector3D::add`] | component-wise sum |
//! | `a - b` | [`Vector3D::subtract`] | component-wise difference |
//! | `a * b` | [`Vector3D::cross`] | cross product |
//! | `a % b` | [`Vector3D::dot`] | dot product truncated to `i32` |
//! | - | [`Vector3D::magnitude`] | Euclidean length |
//! | `a + s` | [`Vector3D::add_scalar`] | `s` added to each component |
//! | `a * s` | [`Vector3D::scale`] | each component multiplied by `s` |
//! | `a.to_string()` | [`format`] | `"(x, y, z)"` |
//!
//! ## Example
//!
//! ```rust
//! use vector3d::Vector3D;
//!
//! let a = Vector3D::new(1.0, 2.0, 3.0);
//! let b = Vector3D::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a + b, Vector3D::new(5.0, 7.0, 9.0));
//! assert_eq!(a * b, Vector3D::new(-3.0, 6.0, -3.0));
//! assert_eq!(a % b, 32);
//! assert_eq!(a.to_string(), "(1, 2, 3)");
//! ```

pub mod error;
pub mod vector;

// Re-export public API
pub use error::ParseVectorError;
pub use vector::{format, Vector3D};

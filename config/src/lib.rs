//! # Config Crate
//!
//! Centralized numeric tolerances for the vector3d workspace.
//! Every magic number used for approximate floating-point comparison is
//! defined here so that library code and tests agree on what "close enough"
//! means.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ToleranceConfig, EPSILON_TOLERANCE};
//!
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//!
//! let tolerance = ToleranceConfig::default();
//! assert_eq!(tolerance.epsilon, EPSILON_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All tolerances defined once, used everywhere
//! - **No Dependencies**: Plain constants and a small validated snapshot

pub mod constants;

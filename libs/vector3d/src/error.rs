//! # Error Types
//!
//! Arithmetic on [`Vector3D`](crate::Vector3D) never fails. The only fallible
//! entry point is parsing the `"(x, y, z)"` text form back into a value.

use std::num::ParseFloatError;

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while parsing a vector from text.
///
/// ## Example
///
/// ```rust
/// use vector3d::{ParseVectorError, Vector3D};
///
/// match "(1, 2)".parse::<Vector3D>() {
///     Ok(v) => println!("parsed {v}"),
///     Err(ParseVectorError::ComponentCount(n)) => eprintln!("got {n} components"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseVectorError {
    /// Input was empty or only whitespace.
    #[error("Empty vector text")]
    Empty,

    /// Input was not wrapped in `(` and `)`.
    ///
    /// Contains the trimmed input.
    #[error("Vector text must be wrapped in parentheses: {0:?}")]
    MissingParens(String),

    /// Input did not hold exactly three comma-separated components.
    #[error("Expected 3 components, found {0}")]
    ComponentCount(usize),

    /// A component could not be parsed as an `f64`.
    #[error("Invalid {axis} component: {source}")]
    InvalidComponent {
        /// Axis of the offending component (`'x'`, `'y'` or `'z'`)
        axis: char,
        /// Underlying float parse failure
        source: ParseFloatError,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = ParseVectorError::ComponentCount(2);
        assert!(err.to_string().contains("found 2"));

        let err = ParseVectorError::MissingParens("1, 2, 3".to_string());
        assert!(err.to_string().contains("parentheses"));
        assert!(err.to_string().contains("1, 2, 3"));
    }

    /// Test the float error is exposed as the source.
    #[test]
    fn test_invalid_component_has_source() {
        use std::error::Error as _;

        let source = "abc".parse::<f64>().unwrap_err();
        let err = ParseVectorError::InvalidComponent { axis: 'y', source };
        assert!(err.to_string().contains("y component"));
        assert!(err.source().is_some());
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParseVectorError>();
    }
}

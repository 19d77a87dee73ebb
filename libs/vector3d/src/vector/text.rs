//! `"(x, y, z)"` text form of [`Vector3D`].

use std::fmt;
use std::str::FromStr;

use super::Vector3D;
use crate::error::ParseVectorError;

const AXES: [char; 3] = ['x', 'y', 'z'];

/// Renders `v` as `"(x, y, z)"`.
///
/// Components use the default `f64` formatting, so whole numbers print
/// without a fractional part.
///
/// # Examples
/// ```
/// use vector3d::{format, Vector3D};
///
/// assert_eq!(format(&Vector3D::new(1.0, 2.0, 3.0)), "(1, 2, 3)");
/// assert_eq!(format(&Vector3D::new(0.5, -2.0, 1e21)), "(0.5, -2, 1000000000000000000000)");
/// ```
pub fn format(v: &Vector3D) -> String {
    v.to_string()
}

/// A precision given to the formatter (`{:.2}`) is applied to every component.
impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

/// Parses the text produced by [`format`].
///
/// Whitespace around the whole input and around each component is ignored.
///
/// # Examples
/// ```
/// use vector3d::Vector3D;
///
/// let v: Vector3D = " ( 1, -2.5,3e2 ) ".parse().unwrap();
/// assert_eq!(v, Vector3D::new(1.0, -2.5, 300.0));
/// assert!("1, 2, 3".parse::<Vector3D>().is_err());
/// ```
impl FromStr for Vector3D {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components(s).map_err(|err| {
            log::debug!("rejected vector text {s:?}: {err}");
            err
        })
    }
}

fn parse_components(s: &str) -> Result<Vector3D, ParseVectorError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseVectorError::Empty);
    }

    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ParseVectorError::MissingParens(trimmed.to_string()))?;

    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != AXES.len() {
        return Err(ParseVectorError::ComponentCount(parts.len()));
    }

    let mut components = [0.0; 3];
    for ((component, part), axis) in components.iter_mut().zip(&parts).zip(AXES) {
        *component = part
            .trim()
            .parse()
            .map_err(|source| ParseVectorError::InvalidComponent { axis, source })?;
    }

    Ok(Vector3D::from(components))
}

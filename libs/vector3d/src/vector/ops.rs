//! Operator overloads for [`Vector3D`].
//!
//! Each operator delegates to the named method of the same contract. By-value
//! impls are written out once; `forward_ref_binop!` derives the `&a op b`,
//! `a op &b` and `&a op &b` forms from them.

use std::ops::{Add, Mul, Rem, Sub};

use super::Vector3D;

macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl $imp<$u> for &$t {
            type Output = <$t as $imp<$u>>::Output;

            #[inline]
            fn $method(self, other: $u) -> Self::Output {
                $imp::$method(*self, other)
            }
        }

        impl $imp<&$u> for $t {
            type Output = <$t as $imp<$u>>::Output;

            #[inline]
            fn $method(self, other: &$u) -> Self::Output {
                $imp::$method(self, *other)
            }
        }

        impl $imp<&$u> for &$t {
            type Output = <$t as $imp<$u>>::Output;

            #[inline]
            fn $method(self, other: &$u) -> Self::Output {
                $imp::$method(*self, *other)
            }
        }
    };
}

impl Add for Vector3D {
    type Output = Vector3D;

    #[inline]
    fn add(self, other: Vector3D) -> Vector3D {
        Vector3D::add(self, other)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    #[inline]
    fn sub(self, other: Vector3D) -> Vector3D {
        self.subtract(other)
    }
}

/// `a * b` is the cross product.
impl Mul for Vector3D {
    type Output = Vector3D;

    #[inline]
    fn mul(self, other: Vector3D) -> Vector3D {
        self.cross(other)
    }
}

/// `a % b` is the dot product truncated to `i32`.
impl Rem for Vector3D {
    type Output = i32;

    #[inline]
    fn rem(self, other: Vector3D) -> i32 {
        self.dot(other)
    }
}

impl Add<f64> for Vector3D {
    type Output = Vector3D;

    #[inline]
    fn add(self, scalar: f64) -> Vector3D {
        self.add_scalar(scalar)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    #[inline]
    fn mul(self, scalar: f64) -> Vector3D {
        self.scale(scalar)
    }
}

forward_ref_binop!(impl Add, add for Vector3D, Vector3D);
forward_ref_binop!(impl Sub, sub for Vector3D, Vector3D);
forward_ref_binop!(impl Mul, mul for Vector3D, Vector3D);
forward_ref_binop!(impl Rem, rem for Vector3D, Vector3D);
forward_ref_binop!(impl Add, add for Vector3D, f64);
forward_ref_binop!(impl Mul, mul for Vector3D, f64);

//! # 3D Vector Dot Product
//!
//! The dot product (also known as scalar product) of two 3-component vectors:
//!
//! `dot(a, b) = a.x * b.x + a.y * b.y + a.z * b.z`
//!
//! Evaluated with plain IEEE-754 double arithmetic. There is no compensation
//! for cancellation or overflow: components near `f64::MAX` overflow to
//! infinity and the result is returned as is.


use std::ops::Neg;

/// A 3-component real vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Compute the dot product with `other`.
    ///
    /// # Example
    /// ```
    /// use vector_dot_bench::math::vector3d::Vector3D;
    ///
    /// let a = Vector3D::new(1.0, 2.0, 3.0);
    /// let b = Vector3D::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

/// Free-function form of [`Vector3D::dot`].
#[inline]
pub fn dot(a: &Vector3D, b: &Vector3D) -> f64 {
    a.dot(b)
}

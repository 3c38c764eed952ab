//! 2D point.
//!
//! `Point2` is an immutable 2D coordinate pair forming the additive group
//! (R², +). It is the variable type for planar landmarks and image
//! features. Once constructed, a point never changes; every operation
//! returns a new value.

use crate::geometry::{LiePoint, PointError, PointResult, Testable};
use nalgebra::{DVector, Matrix2};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An immutable 2D point (x, y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    x: f64,
    y: f64,
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

impl Point2 {
    /// Create a point from explicit coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Create a point from a coordinate vector in field order (x, y).
    ///
    /// Fails with [`PointError::InvalidDimension`] unless `v.len() == 2`.
    pub fn from_vector(v: &DVector<f64>) -> PointResult<Self> {
        if v.len() != Self::DIM {
            return Err(PointError::InvalidDimension {
                expected: Self::DIM,
                actual: v.len(),
            });
        }
        Ok(Point2::new(v[0], v[1]))
    }

    /// Get x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean length of the coordinate vector.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point. Symmetric, non-negative, and
    /// zero iff the points are equal.
    pub fn dist(&self, other: &Point2) -> f64 {
        (*other - *self).norm()
    }
}

impl Testable for Point2 {
    fn equals(&self, other: &Self, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }
}

impl LiePoint for Point2 {
    const DIM: usize = 2;

    fn identity() -> Self {
        Point2::new(0.0, 0.0)
    }

    fn inverse(&self) -> Self {
        -*self
    }

    fn compose(&self, other: &Self) -> Self {
        *self + *other
    }

    fn expmap(v: &DVector<f64>) -> PointResult<Self> {
        Point2::from_vector(v)
    }

    fn logmap(&self) -> DVector<f64> {
        DVector::from_vec(vec![self.x, self.y])
    }

    fn random() -> Self {
        Point2::new(rand::random::<f64>() * 2.0 - 1.0, rand::random::<f64>() * 2.0 - 1.0)
    }
}

impl Add for Point2 {
    type Output = Point2;
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point2 {
    type Output = Point2;
    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;
    fn mul(self, s: f64) -> Point2 {
        Point2::new(self.x * s, self.y * s)
    }
}

impl Mul<Point2> for f64 {
    type Output = Point2;
    fn mul(self, p: Point2) -> Point2 {
        p * self
    }
}

impl Div<f64> for Point2 {
    type Output = Point2;

    /// Component-wise scalar division. Division by zero follows IEEE
    /// semantics and yields infinite or NaN components.
    fn div(self, s: f64) -> Point2 {
        Point2::new(self.x / s, self.y / s)
    }
}

/// Composition `p ∘ q = p + q`.
///
/// # Arguments
/// * `jacobian_p` - Optional Jacobian ∂(p + q)/∂p
/// * `jacobian_q` - Optional Jacobian ∂(p + q)/∂q
///
/// Addition is linear in both operands, so both Jacobians are the 2x2
/// identity for any input pair.
pub fn compose(
    p: &Point2,
    q: &Point2,
    jacobian_p: Option<&mut Matrix2<f64>>,
    jacobian_q: Option<&mut Matrix2<f64>>,
) -> Point2 {
    if let Some(jac_p) = jacobian_p {
        *jac_p = Matrix2::identity();
    }
    if let Some(jac_q) = jacobian_q {
        *jac_q = Matrix2::identity();
    }
    p.compose(q)
}

/// Relative point `between(p, q) = q - p` ("q relative to p").
///
/// # Arguments
/// * `jacobian_p` - Optional Jacobian ∂(q - p)/∂p = -I
/// * `jacobian_q` - Optional Jacobian ∂(q - p)/∂q = I
pub fn between(
    p: &Point2,
    q: &Point2,
    jacobian_p: Option<&mut Matrix2<f64>>,
    jacobian_q: Option<&mut Matrix2<f64>>,
) -> Point2 {
    if let Some(jac_p) = jacobian_p {
        *jac_p = -Matrix2::identity();
    }
    if let Some(jac_q) = jacobian_q {
        *jac_q = Matrix2::identity();
    }
    *q - *p
}

//! Rectified stereo image point.
//!
//! `StereoPoint2` models a measurement in a rectified stereo pair: the
//! horizontal pixel coordinate in the left image (`uL`), the horizontal
//! pixel coordinate in the right image (`uR`), and the vertical coordinate
//! (`v`) shared by both images after rectification. Algebraically it is
//! the additive group (R³, +), the same flat structure as `Point3`.

use crate::geometry::point2::Point2;
use crate::geometry::{LiePoint, PointError, PointResult, Testable};
use nalgebra::{DVector, Matrix3};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An immutable rectified stereo point (uL, uR, v).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoPoint2 {
    u_l: f64,
    u_r: f64,
    v: f64,
}

impl fmt::Display for StereoPoint2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.u_l, self.u_r, self.v)
    }
}

impl StereoPoint2 {
    /// Create a stereo point from explicit coordinates.
    pub fn new(u_l: f64, u_r: f64, v: f64) -> Self {
        StereoPoint2 { u_l, u_r, v }
    }

    /// Create a stereo point from a coordinate vector in field order
    /// (uL, uR, v).
    ///
    /// Fails with [`PointError::InvalidDimension`] unless `v.len() == 3`.
    pub fn from_vector(v: &DVector<f64>) -> PointResult<Self> {
        if v.len() != Self::DIM {
            return Err(PointError::InvalidDimension {
                expected: Self::DIM,
                actual: v.len(),
            });
        }
        Ok(StereoPoint2::new(v[0], v[1], v[2]))
    }

    /// Get the left-image horizontal coordinate.
    pub fn ul(&self) -> f64 {
        self.u_l
    }

    /// Get the right-image horizontal coordinate.
    pub fn ur(&self) -> f64 {
        self.u_r
    }

    /// Get the shared vertical coordinate.
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Project to the monocular left-image point (uL, v), discarding the
    /// right-image coordinate.
    pub fn point2(&self) -> Point2 {
        Point2::new(self.u_l, self.v)
    }
}

impl Testable for StereoPoint2 {
    fn equals(&self, other: &Self, tol: f64) -> bool {
        (self.u_l - other.u_l).abs() <= tol
            && (self.u_r - other.u_r).abs() <= tol
            && (self.v - other.v).abs() <= tol
    }
}

impl LiePoint for StereoPoint2 {
    const DIM: usize = 3;

    fn identity() -> Self {
        StereoPoint2::new(0.0, 0.0, 0.0)
    }

    fn inverse(&self) -> Self {
        -*self
    }

    fn compose(&self, other: &Self) -> Self {
        *self + *other
    }

    fn expmap(v: &DVector<f64>) -> PointResult<Self> {
        StereoPoint2::from_vector(v)
    }

    fn logmap(&self) -> DVector<f64> {
        DVector::from_vec(vec![self.u_l, self.u_r, self.v])
    }

    fn random() -> Self {
        StereoPoint2::new(
            rand::random::<f64>() * 2.0 - 1.0,
            rand::random::<f64>() * 2.0 - 1.0,
            rand::random::<f64>() * 2.0 - 1.0,
        )
    }
}

impl Add for StereoPoint2 {
    type Output = StereoPoint2;
    fn add(self, rhs: StereoPoint2) -> StereoPoint2 {
        StereoPoint2::new(self.u_l + rhs.u_l, self.u_r + rhs.u_r, self.v + rhs.v)
    }
}

impl Sub for StereoPoint2 {
    type Output = StereoPoint2;
    fn sub(self, rhs: StereoPoint2) -> StereoPoint2 {
        StereoPoint2::new(self.u_l - rhs.u_l, self.u_r - rhs.u_r, self.v - rhs.v)
    }
}

impl Neg for StereoPoint2 {
    type Output = StereoPoint2;
    fn neg(self) -> StereoPoint2 {
        StereoPoint2::new(-self.u_l, -self.u_r, -self.v)
    }
}

impl Mul<f64> for StereoPoint2 {
    type Output = StereoPoint2;
    fn mul(self, s: f64) -> StereoPoint2 {
        StereoPoint2::new(self.u_l * s, self.u_r * s, self.v * s)
    }
}

impl Mul<StereoPoint2> for f64 {
    type Output = StereoPoint2;
    fn mul(self, p: StereoPoint2) -> StereoPoint2 {
        p * self
    }
}

impl Div<f64> for StereoPoint2 {
    type Output = StereoPoint2;

    /// Component-wise scalar division. Division by zero follows IEEE
    /// semantics and yields infinite or NaN components.
    fn div(self, s: f64) -> StereoPoint2 {
        StereoPoint2::new(self.u_l / s, self.u_r / s, self.v / s)
    }
}

/// Composition `p ∘ q = p + q`; both Jacobians are the 3x3 identity.
pub fn compose(
    p: &StereoPoint2,
    q: &StereoPoint2,
    jacobian_p: Option<&mut Matrix3<f64>>,
    jacobian_q: Option<&mut Matrix3<f64>>,
) -> StereoPoint2 {
    if let Some(jac_p) = jacobian_p {
        *jac_p = Matrix3::identity();
    }
    if let Some(jac_q) = jacobian_q {
        *jac_q = Matrix3::identity();
    }
    p.compose(q)
}

/// Relative point `between(p, q) = q - p`; Jacobians -I and I.
pub fn between(
    p: &StereoPoint2,
    q: &StereoPoint2,
    jacobian_p: Option<&mut Matrix3<f64>>,
    jacobian_q: Option<&mut Matrix3<f64>>,
) -> StereoPoint2 {
    if let Some(jac_p) = jacobian_p {
        *jac_p = -Matrix3::identity();
    }
    if let Some(jac_q) = jacobian_q {
        *jac_q = Matrix3::identity();
    }
    *q - *p
}

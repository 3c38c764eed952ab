//! 3D point.
//!
//! `Point3` is an immutable 3D coordinate triple forming the additive group
//! (R³, +), with the cross/dot/norm surface needed by projection and
//! triangulation factors. Every free function below carries optional
//! Jacobian output slots; the Jacobians are derived from the operation
//! itself (identity for addition, skew-symmetric for cross, gradient rows
//! for dot and norm), never hardcoded placeholders.

use crate::geometry::{LiePoint, PointError, PointResult, Testable};
use nalgebra::{DVector, Matrix3, RowVector3};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An immutable 3D point (x, y, z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl Point3 {
    /// Create a point from explicit coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// Create a point from a coordinate vector in field order (x, y, z).
    ///
    /// Fails with [`PointError::InvalidDimension`] unless `v.len() == 3`.
    pub fn from_vector(v: &DVector<f64>) -> PointResult<Self> {
        if v.len() != Self::DIM {
            return Err(PointError::InvalidDimension {
                expected: Self::DIM,
                actual: v.len(),
            });
        }
        Ok(Point3::new(v[0], v[1], v[2]))
    }

    /// Get x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Get z coordinate.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean length of the coordinate vector.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to another point. Symmetric, non-negative, and
    /// zero iff the points are equal.
    pub fn dist(&self, other: &Point3) -> f64 {
        (*other - *self).norm()
    }
}

impl Testable for Point3 {
    fn equals(&self, other: &Self, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }
}

impl LiePoint for Point3 {
    const DIM: usize = 3;

    fn identity() -> Self {
        Point3::new(0.0, 0.0, 0.0)
    }

    fn inverse(&self) -> Self {
        -*self
    }

    fn compose(&self, other: &Self) -> Self {
        *self + *other
    }

    fn expmap(v: &DVector<f64>) -> PointResult<Self> {
        Point3::from_vector(v)
    }

    fn logmap(&self) -> DVector<f64> {
        DVector::from_vec(vec![self.x, self.y, self.z])
    }

    fn random() -> Self {
        Point3::new(
            rand::random::<f64>() * 2.0 - 1.0,
            rand::random::<f64>() * 2.0 - 1.0,
            rand::random::<f64>() * 2.0 - 1.0,
        )
    }
}

impl Add for Point3 {
    type Output = Point3;
    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;
    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point3 {
    type Output = Point3;
    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;
    fn mul(self, s: f64) -> Point3 {
        Point3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Point3> for f64 {
    type Output = Point3;
    fn mul(self, p: Point3) -> Point3 {
        p * self
    }
}

impl Div<f64> for Point3 {
    type Output = Point3;

    /// Component-wise scalar division. Division by zero follows IEEE
    /// semantics and yields infinite or NaN components.
    fn div(self, s: f64) -> Point3 {
        Point3::new(self.x / s, self.y / s, self.z / s)
    }
}

/// Skew-symmetric (hat) matrix `[p]ₓ` such that `[p]ₓ q = p × q`.
pub fn skew(p: &Point3) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -p.z, p.y, //
        p.z, 0.0, -p.x, //
        -p.y, p.x, 0.0,
    )
}

/// Composition `p ∘ q = p + q`.
///
/// # Arguments
/// * `jacobian_p` - Optional Jacobian ∂(p + q)/∂p
/// * `jacobian_q` - Optional Jacobian ∂(p + q)/∂q
///
/// Addition is linear in both operands, so both Jacobians are the 3x3
/// identity for any input pair.
pub fn compose(
    p: &Point3,
    q: &Point3,
    jacobian_p: Option<&mut Matrix3<f64>>,
    jacobian_q: Option<&mut Matrix3<f64>>,
) -> Point3 {
    if let Some(jac_p) = jacobian_p {
        *jac_p = Matrix3::identity();
    }
    if let Some(jac_q) = jacobian_q {
        *jac_q = Matrix3::identity();
    }
    p.compose(q)
}

/// Relative point `between(p, q) = q - p` ("q relative to p").
///
/// # Arguments
/// * `jacobian_p` - Optional Jacobian ∂(q - p)/∂p = -I
/// * `jacobian_q` - Optional Jacobian ∂(q - p)/∂q = I
pub fn between(
    p: &Point3,
    q: &Point3,
    jacobian_p: Option<&mut Matrix3<f64>>,
    jacobian_q: Option<&mut Matrix3<f64>>,
) -> Point3 {
    if let Some(jac_p) = jacobian_p {
        *jac_p = -Matrix3::identity();
    }
    if let Some(jac_q) = jacobian_q {
        *jac_q = Matrix3::identity();
    }
    *q - *p
}

/// Sum `p + q` with Jacobians ∂(p+q)/∂p = ∂(p+q)/∂q = I.
pub fn add(
    p: &Point3,
    q: &Point3,
    jacobian_p: Option<&mut Matrix3<f64>>,
    jacobian_q: Option<&mut Matrix3<f64>>,
) -> Point3 {
    if let Some(jac_p) = jacobian_p {
        *jac_p = Matrix3::identity();
    }
    if let Some(jac_q) = jacobian_q {
        *jac_q = Matrix3::identity();
    }
    *p + *q
}

/// Difference `p - q` with Jacobians ∂(p-q)/∂p = I, ∂(p-q)/∂q = -I.
pub fn sub(
    p: &Point3,
    q: &Point3,
    jacobian_p: Option<&mut Matrix3<f64>>,
    jacobian_q: Option<&mut Matrix3<f64>>,
) -> Point3 {
    if let Some(jac_p) = jacobian_p {
        *jac_p = Matrix3::identity();
    }
    if let Some(jac_q) = jacobian_q {
        *jac_q = -Matrix3::identity();
    }
    *p - *q
}

/// Cross product `p × q`.
///
/// Anti-commutative, and zero iff p and q are parallel (including either
/// being zero).
///
/// # Arguments
/// * `jacobian_p` - Optional Jacobian ∂(p × q)/∂p = -[q]ₓ
/// * `jacobian_q` - Optional Jacobian ∂(p × q)/∂q = [p]ₓ
pub fn cross(
    p: &Point3,
    q: &Point3,
    jacobian_p: Option<&mut Matrix3<f64>>,
    jacobian_q: Option<&mut Matrix3<f64>>,
) -> Point3 {
    if let Some(jac_p) = jacobian_p {
        *jac_p = -skew(q);
    }
    if let Some(jac_q) = jacobian_q {
        *jac_q = skew(p);
    }
    Point3::new(
        p.y * q.z - p.z * q.y,
        p.z * q.x - p.x * q.z,
        p.x * q.y - p.y * q.x,
    )
}

/// Inner product `p · q`. Bilinear and symmetric.
///
/// # Arguments
/// * `jacobian_p` - Optional gradient ∂(p·q)/∂p = qᵀ
/// * `jacobian_q` - Optional gradient ∂(p·q)/∂q = pᵀ
pub fn dot(
    p: &Point3,
    q: &Point3,
    jacobian_p: Option<&mut RowVector3<f64>>,
    jacobian_q: Option<&mut RowVector3<f64>>,
) -> f64 {
    if let Some(jac_p) = jacobian_p {
        *jac_p = RowVector3::new(q.x, q.y, q.z);
    }
    if let Some(jac_q) = jacobian_q {
        *jac_q = RowVector3::new(p.x, p.y, p.z);
    }
    p.x * q.x + p.y * q.y + p.z * q.z
}

/// Euclidean norm `‖p‖`.
///
/// # Arguments
/// * `jacobian` - Optional gradient ∂‖p‖/∂p = pᵀ/‖p‖. The gradient is
///   undefined at the origin; a zero row is written there.
pub fn norm(p: &Point3, jacobian: Option<&mut RowVector3<f64>>) -> f64 {
    let n = p.norm();
    if let Some(jac) = jacobian {
        *jac = if n > 0.0 {
            RowVector3::new(p.x / n, p.y / n, p.z / n)
        } else {
            RowVector3::zeros()
        };
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    // Finite-difference check of an R³ → R³ map against an analytic
    // Jacobian.
    fn assert_jacobian3(
        f: impl Fn(&Point3) -> Point3,
        at: &Point3,
        analytic: &Matrix3<f64>,
        eps: f64,
    ) {
        let h = 1e-6;
        for col in 0..3 {
            let mut dv = [0.0; 3];
            dv[col] = h;
            let dp = Point3::new(dv[0], dv[1], dv[2]);
            let fwd = f(&(*at + dp));
            let bwd = f(&(*at - dp));
            let d = (fwd - bwd) / (2.0 * h);
            assert!((d.x() - analytic[(0, col)]).abs() < eps);
            assert!((d.y() - analytic[(1, col)]).abs() < eps);
            assert!((d.z() - analytic[(2, col)]).abs() < eps);
        }
    }

    #[test]
    fn test_accessors_and_vector_order() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.z(), 3.0);
        let v = p.vector();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_vector_dimension_check() {
        let good = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            Point3::from_vector(&good).unwrap(),
            Point3::new(1.0, 2.0, 3.0)
        );

        let bad = DVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(
            Point3::from_vector(&bad),
            Err(PointError::InvalidDimension {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_subtraction_cancels_exactly() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p - p, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_scalar_operators() {
        let p = Point3::new(1.0, -2.0, 4.0);
        assert_eq!(p * 0.5, Point3::new(0.5, -1.0, 2.0));
        assert_eq!(0.5 * p, p * 0.5);
        assert_eq!(p / 2.0, Point3::new(0.5, -1.0, 2.0));
        assert_eq!(-p, Point3::new(-1.0, 2.0, -4.0));

        let q = p / 0.0;
        assert!(q.x().is_infinite() && q.y().is_infinite() && q.z().is_infinite());
    }

    #[test]
    fn test_compose_inverse_identity() {
        let p = Point3::new(5.0, -2.0, 9.0);
        assert_eq!(p.compose(&p.inverse()), Point3::identity());
    }

    #[test]
    fn test_expmap_logmap_identity_embedding() {
        let v = DVector::from_vec(vec![0.1, -0.2, 0.3]);
        let p = Point3::expmap(&v).unwrap();
        assert_eq!(p.logmap(), v);
        assert_eq!(Point3::expmap(&p.logmap()).unwrap(), p);
    }

    #[test]
    fn test_add_sub_jacobians() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(-4.0, 5.0, 0.5);

        let mut j1 = Matrix3::zeros();
        let mut j2 = Matrix3::zeros();
        let s = add(&p, &q, Some(&mut j1), Some(&mut j2));
        assert_eq!(s, p + q);
        assert_eq!(j1, Matrix3::identity());
        assert_eq!(j2, Matrix3::identity());

        let d = sub(&p, &q, Some(&mut j1), Some(&mut j2));
        assert_eq!(d, p - q);
        assert_eq!(j1, Matrix3::identity());
        assert_eq!(j2, -Matrix3::identity());
    }

    #[test]
    fn test_compose_jacobians_hold_for_any_operands() {
        // The identity Jacobian follows from linearity of addition, so it
        // must hold away from the identity point as well.
        for _ in 0..5 {
            let p = Point3::random();
            let q = Point3::random();
            let mut jac_p = Matrix3::zeros();
            let mut jac_q = Matrix3::zeros();
            compose(&p, &q, Some(&mut jac_p), Some(&mut jac_q));
            assert_eq!(jac_p, Matrix3::identity());
            assert_eq!(jac_q, Matrix3::identity());

            assert_jacobian3(|x| compose(x, &q, None, None), &p, &jac_p, 1e-8);
            assert_jacobian3(|x| compose(&p, x, None, None), &q, &jac_q, 1e-8);
        }
    }

    #[test]
    fn test_cross_product() {
        let ex = Point3::new(1.0, 0.0, 0.0);
        let ey = Point3::new(0.0, 1.0, 0.0);
        let ez = Point3::new(0.0, 0.0, 1.0);

        assert_eq!(cross(&ex, &ey, None, None), ez);
        // Anti-commutative.
        assert_eq!(cross(&ey, &ex, None, None), -ez);
        // Parallel operands give zero.
        assert_eq!(cross(&ex, &(ex * 3.0), None, None), Point3::identity());
    }

    #[test]
    fn test_cross_jacobians() {
        let p = Point3::new(0.3, -1.2, 0.7);
        let q = Point3::new(2.0, 0.4, -0.9);
        let mut jac_p = Matrix3::zeros();
        let mut jac_q = Matrix3::zeros();
        cross(&p, &q, Some(&mut jac_p), Some(&mut jac_q));
        assert_eq!(jac_p, -skew(&q));
        assert_eq!(jac_q, skew(&p));

        assert_jacobian3(|x| cross(x, &q, None, None), &p, &jac_p, 1e-7);
        assert_jacobian3(|x| cross(&p, x, None, None), &q, &jac_q, 1e-7);
    }

    #[test]
    fn test_dot_product_and_gradients() {
        let ex = Point3::new(1.0, 0.0, 0.0);
        let ey = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(dot(&ex, &ey, None, None), 0.0);

        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(-1.0, 0.5, 2.0);
        let mut grad_p = RowVector3::zeros();
        let mut grad_q = RowVector3::zeros();
        let d = dot(&p, &q, Some(&mut grad_p), Some(&mut grad_q));
        assert!((d - (p.x() * q.x() + p.y() * q.y() + p.z() * q.z())).abs() < TOLERANCE);
        assert_eq!(grad_p, RowVector3::new(q.x(), q.y(), q.z()));
        assert_eq!(grad_q, RowVector3::new(p.x(), p.y(), p.z()));

        // Symmetric.
        assert_eq!(dot(&p, &q, None, None), dot(&q, &p, None, None));
    }

    #[test]
    fn test_norm_and_gradient() {
        let p = Point3::new(2.0, 3.0, 6.0);
        let mut grad = RowVector3::zeros();
        let n = norm(&p, Some(&mut grad));
        assert!((n - 7.0).abs() < TOLERANCE);
        assert!((grad - RowVector3::new(2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0)).norm() < TOLERANCE);

        // Gradient at the origin is written as a zero row, not NaN.
        let n0 = norm(&Point3::identity(), Some(&mut grad));
        assert_eq!(n0, 0.0);
        assert_eq!(grad, RowVector3::zeros());
    }

    #[test]
    fn test_dist_properties() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(4.0, 6.0, 3.0);
        assert!((p.dist(&q) - 5.0).abs() < TOLERANCE);
        assert_eq!(p.dist(&q), q.dist(&p));
        assert_eq!(p.dist(&p), 0.0);
    }
}

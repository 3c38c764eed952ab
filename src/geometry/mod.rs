//! Flat manifold point types used as optimization variables.
//!
//! This module provides the point types commonly used as state variables in
//! factor-graph estimation:
//! - **Point2**: 2D point (landmark position, image feature)
//! - **Point3**: 3D point (landmark position, map point)
//! - **StereoPoint2**: rectified stereo observation (uL, uR, v)
//!
//! Lie group M,°  | dim | X ∈ M            | Identity | Comp. | Exp(v)
//! -------------- | --- | ---------------- | -------- | ----- | ------
//! Point2 (R²,+)  | 2   | (x, y)           | (0, 0)   | p + q | v
//! Point3 (R³,+)  | 3   | (x, y, z)        | (0,0,0)  | p + q | v
//! StereoPoint2   | 3   | (uL, uR, v)      | (0,0,0)  | p + q | v
//!
//! All three groups are flat: the manifold is isomorphic to its tangent
//! space under component-wise addition, so `expmap` and `logmap` are exact
//! identity embeddings rather than general manifold charts. Composition is
//! commutative and associative, inverse is negation, and every Jacobian of
//! `compose`/`between` is ±identity regardless of the operands.
//!
//! Each composite operation takes optional Jacobian output slots
//! (`Option<&mut Matrix>`); a Jacobian is computed only when its slot is
//! passed, keeping the optimizer's linearization hot path free of
//! unrequested matrix construction.

use nalgebra::DVector;
use std::fmt;
use thiserror::Error;

pub mod point2;
pub mod point3;
pub mod stereo_point2;

/// Errors that can occur constructing a point from coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointError {
    /// Coordinate vector length does not match the point's dimension
    #[error("invalid coordinate dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },
}

/// Result type for point construction.
pub type PointResult<T> = Result<T, PointError>;

/// Testable capability: printing and tolerance-based equality.
///
/// Tolerance equality is component-wise (`|a - b| <= tol` for every field),
/// symmetric and reflexive for any `tol >= 0`. With `tol = 0` it degenerates
/// to exact equality.
pub trait Testable: fmt::Display {
    /// Log this value with a label prefix.
    fn print(&self, label: &str) {
        tracing::info!("{label}{self}");
    }

    /// Component-wise equality within an absolute tolerance.
    fn equals(&self, other: &Self, tol: f64) -> bool;
}

/// Lie element capability satisfied by every flat point type.
///
/// This is the contract the optimizer linearizes against: downstream code
/// depends only on this trait, never on a concrete point type.
pub trait LiePoint: Testable + Clone + fmt::Debug + PartialEq + Sized {
    /// Tangent space dimension.
    const DIM: usize;

    /// Dimension of the tangent space. Always `Self::DIM`, never
    /// data-dependent.
    fn dim(&self) -> usize {
        Self::DIM
    }

    /// The all-zero group identity.
    fn identity() -> Self;

    /// Group inverse: component-wise negation, so that
    /// `p.compose(&p.inverse())` is the identity.
    fn inverse(&self) -> Self;

    /// Group composition: component-wise addition.
    fn compose(&self, other: &Self) -> Self;

    /// Exponential map at the identity: embed a coordinate vector as a
    /// point. Fails with [`PointError::InvalidDimension`] if the vector
    /// length is not `Self::DIM`.
    fn expmap(v: &DVector<f64>) -> PointResult<Self>;

    /// Logarithmic map at the identity: the point's coordinate vector.
    /// Exact inverse of [`LiePoint::expmap`].
    fn logmap(&self) -> DVector<f64>;

    /// Coordinate vector in canonical field order.
    fn vector(&self) -> DVector<f64> {
        self.logmap()
    }

    /// Relative point: `other` expressed relative to `self`, i.e.
    /// `other ∘ self⁻¹` (equals `other - self` for these additive groups).
    fn between(&self, other: &Self) -> Self {
        other.compose(&self.inverse())
    }

    /// Manifold plus: `self ∘ exp(delta)`.
    fn plus(&self, delta: &DVector<f64>) -> PointResult<Self> {
        Ok(self.compose(&Self::expmap(delta)?))
    }

    /// Manifold minus: `log(other⁻¹ ∘ self)`.
    fn minus(&self, other: &Self) -> DVector<f64> {
        other.inverse().compose(self).logmap()
    }

    /// Random point, useful for tests and initialization.
    fn random() -> Self;
}

//! Flat manifold point types for factor-graph optimization.
//!
//! `Point2`, `Point3` and `StereoPoint2` are immutable value types that act
//! as optimization variables: each carries the additive group structure of
//! its coordinate space together with exponential/logarithmic maps and
//! analytic Jacobians for every composite operation.

pub mod error;
pub mod geometry;
pub mod io;
pub mod logger;

pub use error::{ApexPointsError, ApexPointsResult};
pub use geometry::{LiePoint, PointError, PointResult, Testable};
pub use geometry::{point2::Point2, point3::Point3, stereo_point2::StereoPoint2};
pub use logger::{init_logger, init_logger_with_level};

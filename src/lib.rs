pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, PlaneCurveError, Result};
pub use geometry::{Circle, Curve, CurveKind};
pub use math::Point2D;

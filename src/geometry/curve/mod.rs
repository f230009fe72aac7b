mod circle;

pub use circle::Circle;

use std::fmt;

use crate::math::Point2D;

/// Tag identifying which variant a [`Curve`] is.
///
/// `Ellipse` and `Helix` are reserved; no curve type reports them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

impl CurveKind {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Ellipse => "Ellipse",
            Self::Helix => "Helix",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trait for parametric curves in the plane.
///
/// Every curve type implements all three methods; there are no defaults.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2D;

    /// Slope of the tangent line at the point for parameter `t`.
    ///
    /// Returns [`f64::INFINITY`] when the tangent is vertical.
    fn tangent_slope_at(&self, t: f64) -> f64;

    /// Returns the variant tag of this curve.
    fn kind(&self) -> CurveKind;
}

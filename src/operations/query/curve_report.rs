use crate::geometry::curve::Curve;
use crate::math::Point2D;

/// Evaluates any [`Curve`] at a fixed parameter.
///
/// Generic over the curve type, so the call is statically dispatched.
pub struct CurveReport<'a, C: Curve> {
    curve: &'a C,
    t: f64,
}

impl<'a, C: Curve> CurveReport<'a, C> {
    /// Creates a new `CurveReport` query.
    #[must_use]
    pub fn new(curve: &'a C, t: f64) -> Self {
        Self { curve, t }
    }

    /// Tangent slope of the curve at the parameter.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.curve.tangent_slope_at(self.t)
    }

    /// Point on the curve at the parameter.
    #[must_use]
    pub fn point(&self) -> Point2D {
        self.curve.point_at(self.t)
    }
}

/// Formats the tangent slope of `curve` at `t`.
#[must_use]
pub fn derivative_report<C: Curve>(curve: &C, t: f64) -> String {
    format!("GetDerivative: {}", CurveReport::new(curve, t).slope())
}

/// Formats the point of `curve` at `t`, labelled with its kind.
#[must_use]
pub fn point_report<C: Curve>(curve: &C, t: f64) -> String {
    let report = CurveReport::new(curve, t);
    format!("{} point at t={t}: {}", curve.kind(), report.point())
}

use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::{Point2D, EPS};

use super::{Curve, CurveKind};

/// A circle in the plane.
///
/// `P(t) = center + radius * (cos(t), sin(t))`, with trigonometric
/// components below [`EPS`] snapped to zero before scaling.
///
/// The radius is not validated by [`Circle::new`]; use [`Circle::try_new`]
/// to reject negative or non-finite input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Circle {
    center: Point2D,
    radius: f64,
}

impl Circle {
    /// Creates a circle with the given center and radius.
    #[must_use]
    pub const fn new(center: Point2D, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Creates a circle centered at the origin.
    #[must_use]
    pub const fn with_radius(radius: f64) -> Self {
        Self::new(Point2D::ORIGIN, radius)
    }

    /// Creates a circle, validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the center or radius is not finite, or if the
    /// radius is negative.
    pub fn try_new(center: Point2D, radius: f64) -> Result<Self> {
        if !center.is_finite() {
            let value = if center.x().is_finite() {
                center.y()
            } else {
                center.x()
            };
            return Err(GeometryError::NonFinite {
                parameter: "center",
                value,
            }
            .into());
        }
        if !radius.is_finite() {
            return Err(GeometryError::NonFinite {
                parameter: "radius",
                value: radius,
            }
            .into());
        }
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius { radius }.into());
        }
        Ok(Self::new(center, radius))
    }

    /// Returns the center of the circle.
    #[must_use]
    pub const fn center(&self) -> Point2D {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

fn snap(component: f64) -> f64 {
    if component.abs() < EPS {
        0.0
    } else {
        component
    }
}

impl Curve for Circle {
    fn point_at(&self, t: f64) -> Point2D {
        let local = Point2D::new(self.radius * snap(t.cos()), self.radius * snap(t.sin()));
        self.center + local
    }

    // The tangent at p is the line A*x + B*y + C = 0 whose normal (A, B) is
    // the radius vector from the center to p.
    fn tangent_slope_at(&self, t: f64) -> f64 {
        let p = self.point_at(t);
        let radial = p.offset_from(&self.center);
        let (a, b) = (radial.x, radial.y);
        let c = -a * p.x() - b * p.y();

        if b.abs() < EPS {
            trace!(t, "vertical tangent");
            return f64::INFINITY;
        }
        if a.abs() < EPS {
            trace!(t, "horizontal tangent");
            return 0.0;
        }
        if c.abs() > EPS {
            // Intercepts on the X and Y axes.
            let x_icpt = -c / a;
            let y_icpt = -c / b;
            trace!(t, x_icpt, y_icpt, "tangent from axis intercepts");
            if (x_icpt > 0.0 && y_icpt > 0.0) || (x_icpt < 0.0 && y_icpt < 0.0) {
                return -y_icpt / x_icpt;
            }
            return y_icpt / x_icpt;
        }
        trace!(t, "tangent through origin");
        -a / b
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Circle
    }
}

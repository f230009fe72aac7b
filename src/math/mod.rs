use std::fmt;
use std::ops::Add;

/// 2D point type used for interop with linear algebra code.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Snap tolerance for trigonometric components and tangent-line coefficients.
///
/// Values whose magnitude falls below this are treated as exactly zero.
pub const EPS: f64 = 1e-15;

/// An immutable point in the plane.
///
/// Supports translation via `+` and renders as `{X, Y}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    /// The origin `{0, 0}`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the X coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        nalgebra::distance(&Point2::from(*self), &Point2::from(*other))
    }

    /// Vector from `origin` to this point.
    #[must_use]
    pub fn offset_from(&self, origin: &Self) -> Vector2 {
        Point2::from(*self) - Point2::from(*origin)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<Point2> for Point2D {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2D> for Point2 {
    fn from(p: Point2D) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.x, self.y)
    }
}

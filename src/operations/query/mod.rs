mod curve_report;

pub use curve_report::{derivative_report, point_report, CurveReport};

//! Prints sample evaluations for a couple of circles.
//!
//! ```text
//! cargo run --example curves
//! RUST_LOG=planecurve=trace cargo run --example curves
//! ```

use std::f64::consts::{FRAC_PI_4, FRAC_PI_6};

use planecurve::operations::query::derivative_report;
use planecurve::{Circle, Curve, Point2D, Result};
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the demo and planecurve.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curves=info".parse().unwrap_or_default())
        .add_directive("planecurve=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let unit = Circle::with_radius(1.0);
    println!("R=1, (0.0; 0.0), pi/6: {}", unit.point_at(FRAC_PI_6));

    let shifted = Circle::try_new(Point2D::new(5.0, 5.0), 5.0)?;
    info!(kind = %shifted.kind(), radius = shifted.radius(), "constructed circle");
    println!("R=5, (5.0; 5.0), pi/6: {}", shifted.point_at(FRAC_PI_6));
    println!("{}", derivative_report(&shifted, FRAC_PI_4));

    Ok(())
}

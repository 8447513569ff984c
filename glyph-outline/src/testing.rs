//! Helpers for unit testing

use crate::{ContourPoint, FontContext, Path};

pub struct TestFont {
    units_per_em: u16,
}

impl TestFont {
    pub fn new(units_per_em: u16) -> Self {
        Self { units_per_em }
    }
}

impl FontContext for TestFont {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A 10 unit square starting at the origin.
pub fn square_path() -> Path {
    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.line_to(10.0, 0.0);
    path.line_to(10.0, 10.0);
    path.line_to(0.0, 10.0);
    path.close();
    path
}

/// One of each command kind, with a fractional coordinate and a negative
/// control point.
pub fn mixed_path() -> Path {
    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.line_to(100.0, 0.0);
    path.quad_to(150.0, 50.0, 100.0, 100.0);
    path.curve_to(80.5, 120.0, -20.0, 120.25, 0.0, 100.0);
    path.close();
    path
}

/// A quadratic contour of four points followed by a triangle.
pub fn two_contour_points() -> Vec<ContourPoint> {
    vec![
        ContourPoint::new(0.0, 0.0, true),
        ContourPoint::new(50.0, 100.0, false),
        ContourPoint::new(100.0, 0.0, true),
        ContourPoint::new(50.0, -20.0, false).ending_contour(),
        ContourPoint::new(200.0, 0.0, true),
        ContourPoint::new(300.0, 0.0, true),
        ContourPoint::new(250.0, 80.0, true).ending_contour(),
    ]
}

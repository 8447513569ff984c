//! Bounding box and side bearings derived from an outline.
//!
//! The bounding box computed here is the *control box*: the extents of every
//! point in the outline, including off-curve control points. It always
//! contains the rendered shape but may be larger than it when a curve bulges
//! less than its control points. Finding the true extrema of each curve is
//! not attempted.

use crate::{BoundingBox, Command, Pen, Point};

/// Geometric metrics for an outline.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    /// Always zero: the outline carries no information about where its
    /// origin sits relative to the font's layout origin.
    pub left_side_bearing: f64,
    /// `advance_width - left_side_bearing - (x_max - x_min)`.
    pub right_side_bearing: f64,
}

impl Metrics {
    /// The extents as a bounding box.
    pub fn bounds(&self) -> BoundingBox<f64> {
        BoundingBox {
            x_min: self.x_min,
            y_min: self.y_min,
            x_max: self.x_max,
            y_max: self.y_max,
        }
    }
}

/// Computes metrics for the given commands and advance width.
///
/// Every coordinate pair contributes: the end point of each move, line and
/// curve as well as the control points of quadratic and cubic curves. Close
/// commands contribute nothing.
///
/// Returns `None` when no command carries coordinates. There is no
/// meaningful bounding box for such an outline, so callers must decide how
/// to treat empty glyphs.
pub fn compute_metrics(commands: &[Command], advance_width: f64) -> Option<Metrics> {
    let mut pen = ControlBoundsPen::default();
    for command in commands {
        command.apply_to(&mut pen);
    }
    let bounds = pen.bounds()?;
    let left_side_bearing = 0.0;
    Some(Metrics {
        x_min: bounds.x_min,
        y_min: bounds.y_min,
        x_max: bounds.x_max,
        y_max: bounds.y_max,
        left_side_bearing,
        right_side_bearing: advance_width - left_side_bearing - bounds.width(),
    })
}

/// Pen that accumulates the bounds of every point it receives.
///
/// ControlBoundsPen in Python terms.
/// <https://github.com/fonttools/fonttools/blob/78e10d8b42095b709cd4125e592d914d3ed1558e/Lib/fontTools/pens/boundsPen.py#L8>
#[derive(Copy, Clone, Default, Debug)]
pub struct ControlBoundsPen {
    bounds: Option<BoundingBox<f64>>,
}

impl ControlBoundsPen {
    /// Returns the accumulated bounds, or `None` if no points were seen.
    pub fn bounds(&self) -> Option<BoundingBox<f64>> {
        self.bounds
    }

    fn add(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        match &mut self.bounds {
            Some(bounds) => bounds.add_point(point),
            None => self.bounds = Some(BoundingBox::from_point(point)),
        }
    }
}

impl Pen for ControlBoundsPen {
    fn move_to(&mut self, x: f64, y: f64) {
        self.add(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.add(x, y);
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.add(cx0, cy0);
        self.add(x, y);
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.add(cx0, cy0);
        self.add(cx1, cy1);
        self.add(x, y);
    }

    fn close(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn square() {
        let path = testing::square_path();
        let metrics = compute_metrics(path.commands(), 12.0).unwrap();
        assert_eq!(
            metrics,
            Metrics {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 10.0,
                y_max: 10.0,
                left_side_bearing: 0.0,
                right_side_bearing: 2.0,
            }
        );
    }

    #[test]
    fn control_points_count() {
        let mut commands = vec![Command::MoveTo { x: 0.0, y: 0.0 }];
        commands.push(Command::CurveTo {
            cx0: -5.0,
            cy0: 30.0,
            cx1: 25.0,
            cy1: -8.0,
            x: 20.0,
            y: 0.0,
        });
        let metrics = compute_metrics(&commands, 20.0).unwrap();
        assert_eq!(
            metrics.bounds(),
            BoundingBox {
                x_min: -5.0,
                y_min: -8.0,
                x_max: 25.0,
                y_max: 30.0,
            }
        );
        // the box is wider than the advance
        assert_eq!(metrics.right_side_bearing, -10.0);
    }

    #[test]
    fn no_coordinates_no_metrics() {
        assert_eq!(compute_metrics(&[], 500.0), None);
        assert_eq!(compute_metrics(&[Command::Close, Command::Close], 500.0), None);
    }
}

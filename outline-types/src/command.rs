use crate::{Pen, Point};

/// A single drawing instruction in an outline.
///
/// Each variant carries exactly the coordinates it needs. All coordinates are
/// absolute.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Begin a new subpath at (x, y).
    MoveTo { x: f64, y: f64 },
    /// Draw a line from the current point to (x, y).
    LineTo { x: f64, y: f64 },
    /// Draw a quadratic bezier from the current point with a control point at
    /// (cx0, cy0) and ending at (x, y).
    QuadTo { cx0: f64, cy0: f64, x: f64, y: f64 },
    /// Draw a cubic bezier from the current point with control points at
    /// (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    CurveTo {
        cx0: f64,
        cy0: f64,
        cx1: f64,
        cy1: f64,
        x: f64,
        y: f64,
    },
    /// Close the current subpath.
    ///
    /// This carries no coordinates and does not move the current point.
    Close,
}

impl Command {
    /// The letter used for this command in SVG path data.
    pub fn letter(&self) -> char {
        match self {
            Command::MoveTo { .. } => 'M',
            Command::LineTo { .. } => 'L',
            Command::QuadTo { .. } => 'Q',
            Command::CurveTo { .. } => 'C',
            Command::Close => 'Z',
        }
    }

    /// The point this command ends at, or `None` for [`Command::Close`].
    pub fn end_point(&self) -> Option<Point<f64>> {
        match *self {
            Command::MoveTo { x, y }
            | Command::LineTo { x, y }
            | Command::QuadTo { x, y, .. }
            | Command::CurveTo { x, y, .. } => Some(Point::new(x, y)),
            Command::Close => None,
        }
    }

    /// The off-curve control points of this command, in declaration order.
    pub fn control_points(&self) -> impl Iterator<Item = Point<f64>> {
        let (first, second) = match *self {
            Command::QuadTo { cx0, cy0, .. } => (Some(Point::new(cx0, cy0)), None),
            Command::CurveTo {
                cx0, cy0, cx1, cy1, ..
            } => (Some(Point::new(cx0, cy0)), Some(Point::new(cx1, cy1))),
            _ => (None, None),
        };
        first.into_iter().chain(second)
    }

    /// All coordinate pairs of this command: control points first, then the
    /// end point, matching the order they appear in path data.
    pub fn points(&self) -> impl Iterator<Item = Point<f64>> {
        self.control_points().chain(self.end_point())
    }

    /// Returns a new command of the same kind with `f` applied to every
    /// coordinate pair.
    pub fn map_points(self, mut f: impl FnMut(Point<f64>) -> Point<f64>) -> Self {
        let mut map = |x, y| {
            let p = f(Point::new(x, y));
            (p.x, p.y)
        };
        match self {
            Command::MoveTo { x, y } => {
                let (x, y) = map(x, y);
                Command::MoveTo { x, y }
            }
            Command::LineTo { x, y } => {
                let (x, y) = map(x, y);
                Command::LineTo { x, y }
            }
            Command::QuadTo { cx0, cy0, x, y } => {
                let (cx0, cy0) = map(cx0, cy0);
                let (x, y) = map(x, y);
                Command::QuadTo { cx0, cy0, x, y }
            }
            Command::CurveTo {
                cx0,
                cy0,
                cx1,
                cy1,
                x,
                y,
            } => {
                let (cx0, cy0) = map(cx0, cy0);
                let (cx1, cy1) = map(cx1, cy1);
                let (x, y) = map(x, y);
                Command::CurveTo {
                    cx0,
                    cy0,
                    cx1,
                    cy1,
                    x,
                    y,
                }
            }
            Command::Close => Command::Close,
        }
    }

    /// Invoke the matching callback on the given pen.
    pub fn apply_to<P: Pen + ?Sized>(&self, pen: &mut P) {
        match *self {
            Command::MoveTo { x, y } => pen.move_to(x, y),
            Command::LineTo { x, y } => pen.line_to(x, y),
            Command::QuadTo { cx0, cy0, x, y } => pen.quad_to(cx0, cy0, x, y),
            Command::CurveTo {
                cx0,
                cy0,
                cx1,
                cy1,
                x,
                y,
            } => pen.curve_to(cx0, cy0, cx1, cy1, x, y),
            Command::Close => pen.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> Command {
        Command::CurveTo {
            cx0: 1.0,
            cy0: 2.0,
            cx1: 3.0,
            cy1: 4.0,
            x: 5.0,
            y: 6.0,
        }
    }

    #[test]
    fn end_points() {
        assert_eq!(
            Command::MoveTo { x: 1.0, y: 2.0 }.end_point(),
            Some(Point::new(1.0, 2.0))
        );
        assert_eq!(curve().end_point(), Some(Point::new(5.0, 6.0)));
        assert_eq!(Command::Close.end_point(), None);
    }

    #[test]
    fn points_in_path_data_order() {
        let points: Vec<_> = curve().points().collect();
        assert_eq!(
            points,
            [
                Point::new(1.0, 2.0),
                Point::new(3.0, 4.0),
                Point::new(5.0, 6.0)
            ]
        );
        let quad = Command::QuadTo {
            cx0: 7.0,
            cy0: 8.0,
            x: 9.0,
            y: 10.0,
        };
        assert_eq!(quad.control_points().count(), 1);
        assert_eq!(Command::LineTo { x: 0.0, y: 0.0 }.control_points().count(), 0);
        assert_eq!(Command::Close.points().count(), 0);
    }

    #[test]
    fn map_points_keeps_variant() {
        let mapped = curve().map_points(|p| Point::new(p.x * 2.0, -p.y));
        assert_eq!(
            mapped,
            Command::CurveTo {
                cx0: 2.0,
                cy0: -2.0,
                cx1: 6.0,
                cy1: -4.0,
                x: 10.0,
                y: -6.0,
            }
        );
        assert_eq!(Command::Close.map_points(|p| p), Command::Close);
    }

    #[test]
    fn letters() {
        let letters: String = [
            Command::MoveTo { x: 0.0, y: 0.0 },
            Command::LineTo { x: 0.0, y: 0.0 },
            Command::QuadTo {
                cx0: 0.0,
                cy0: 0.0,
                x: 0.0,
                y: 0.0,
            },
            curve(),
            Command::Close,
        ]
        .iter()
        .map(Command::letter)
        .collect();
        assert_eq!(letters, "MLQCZ");
    }
}

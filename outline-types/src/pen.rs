use crate::Command;

/// Interface for accepting a sequence of path commands.
///
/// This is a general abstraction to unify output for processes that build,
/// transform or serialize outlines. Coordinates are passed in whatever space
/// the producer works in; pens do not assume a y direction.
///
/// AbstractPen in Python terms.
/// <https://github.com/fonttools/fonttools/blob/78e10d8b42095b709cd4125e592d914d3ed1558e/Lib/fontTools/pens/basePen.py#L54>
pub trait Pen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f64, y: f64);

    /// Emit a quadratic bezier segment from the current point with a control
    /// point at (cx0, cy0) and ending at (x, y).
    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64);

    /// Emit a cubic bezier segment from the current point with control
    /// points at (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64);

    /// Emit a command to close the current subpath.
    fn close(&mut self);
}

impl<P: Pen + ?Sized> Pen for &mut P {
    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        (**self).quad_to(cx0, cy0, x, y)
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        (**self).curve_to(cx0, cy0, cx1, cy1, x, y)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

impl Pen for Vec<Command> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push(Command::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(Command::LineTo { x, y })
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.push(Command::QuadTo { cx0, cy0, x, y })
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.push(Command::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(Command::Close)
    }
}

/// Pen that drops all drawing output into the ether.
#[derive(Copy, Clone, Default, Debug)]
pub struct NullPen;

impl Pen for NullPen {
    fn move_to(&mut self, _x: f64, _y: f64) {}
    fn line_to(&mut self, _x: f64, _y: f64) {}
    fn quad_to(&mut self, _cx0: f64, _cy0: f64, _x: f64, _y: f64) {}
    fn curve_to(&mut self, _cx0: f64, _cy0: f64, _cx1: f64, _cy1: f64, _x: f64, _y: f64) {}
    fn close(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_pen_records_in_order() {
        let mut commands = Vec::new();
        commands.move_to(0.0, 1.0);
        commands.line_to(2.0, 3.0);
        commands.quad_to(4.0, 5.0, 6.0, 7.0);
        commands.curve_to(8.0, 9.0, 10.0, 11.0, 12.0, 13.0);
        commands.close();
        assert_eq!(
            commands,
            [
                Command::MoveTo { x: 0.0, y: 1.0 },
                Command::LineTo { x: 2.0, y: 3.0 },
                Command::QuadTo {
                    cx0: 4.0,
                    cy0: 5.0,
                    x: 6.0,
                    y: 7.0
                },
                Command::CurveTo {
                    cx0: 8.0,
                    cy0: 9.0,
                    cx1: 10.0,
                    cy1: 11.0,
                    x: 12.0,
                    y: 13.0
                },
                Command::Close,
            ]
        );
    }

    #[test]
    fn mut_ref_forwards() {
        fn draw_dot(mut pen: impl Pen) {
            pen.move_to(1.0, 1.0);
            pen.close();
        }
        let mut commands = Vec::new();
        draw_dot(&mut commands);
        draw_dot(NullPen);
        assert_eq!(commands.len(), 2);
    }
}

//! The interface to drawing surfaces.

use crate::{Color, Command, NullPen, Pen};

/// Distance from the origin at which diagnostic metric lines start and end.
///
/// Metric lines are meant to span the whole visible surface.
pub const METRIC_LINE_EXTENT: f64 = 10_000.0;

/// Radius of the markers drawn for outline points.
pub const MARKER_RADIUS: f64 = 2.0;

/// A drawing surface that outlines and diagnostics are replayed into.
///
/// The path primitives come from [`Pen`]; the methods here paint the path
/// built so far and draw standalone diagnostics. Implementations might
/// rasterize immediately or build up a retained vector document. Callers
/// issue the same sequence of calls in either case.
///
/// A path is complete once it has been painted: the first path primitive
/// after a [`fill`](Self::fill) or [`stroke`](Self::stroke) begins a new,
/// empty path. Consecutive paints apply to the same path.
pub trait RenderAdapter: Pen {
    /// Fill the current path with the given color.
    fn fill(&mut self, color: &Color);

    /// Stroke the current path with the given color and line width.
    fn stroke(&mut self, color: &Color, width: f64);

    /// Draw a standalone straight line from (x1, y1) to (x2, y2).
    ///
    /// This does not affect the current path.
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &Color);

    /// Draw a filled circular marker centered at (cx, cy).
    ///
    /// This does not affect the current path.
    fn draw_marker(&mut self, cx: f64, cy: f64, radius: f64, color: &Color);
}

impl<R: RenderAdapter + ?Sized> RenderAdapter for &mut R {
    fn fill(&mut self, color: &Color) {
        (**self).fill(color)
    }

    fn stroke(&mut self, color: &Color, width: f64) {
        (**self).stroke(color, width)
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &Color) {
        (**self).draw_line(x1, y1, x2, y2, color)
    }

    fn draw_marker(&mut self, cx: f64, cy: f64, radius: f64, color: &Color) {
        (**self).draw_marker(cx, cy, radius, color)
    }
}

impl RenderAdapter for NullPen {
    fn fill(&mut self, _color: &Color) {}
    fn stroke(&mut self, _color: &Color, _width: f64) {}
    fn draw_line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, _color: &Color) {}
    fn draw_marker(&mut self, _cx: f64, _cy: f64, _radius: f64, _color: &Color) {}
}

/// A single call made on a [`RenderAdapter`].
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCall {
    /// One of the path primitives.
    Path(Command),
    Fill(Color),
    Stroke {
        color: Color,
        width: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    },
    Marker {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
    },
}

/// Adapter that records every call it receives, in order.
#[derive(Clone, Default, Debug)]
pub struct RecordingAdapter {
    calls: Vec<DrawCall>,
}

impl RecordingAdapter {
    /// The calls received so far.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Consumes the adapter and returns the recorded calls.
    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Returns only the recorded path primitives.
    pub fn path_commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Path(command) => Some(*command),
            _ => None,
        })
    }
}

impl Pen for RecordingAdapter {
    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::Path(Command::MoveTo { x, y }));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::Path(Command::LineTo { x, y }));
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.calls
            .push(DrawCall::Path(Command::QuadTo { cx0, cy0, x, y }));
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.calls.push(DrawCall::Path(Command::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        }));
    }

    fn close(&mut self) {
        self.calls.push(DrawCall::Path(Command::Close));
    }
}

impl RenderAdapter for RecordingAdapter {
    fn fill(&mut self, color: &Color) {
        self.calls.push(DrawCall::Fill(color.clone()));
    }

    fn stroke(&mut self, color: &Color, width: f64) {
        self.calls.push(DrawCall::Stroke {
            color: color.clone(),
            width,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &Color) {
        self.calls.push(DrawCall::Line {
            x1,
            y1,
            x2,
            y2,
            color: color.clone(),
        });
    }

    fn draw_marker(&mut self, cx: f64, cy: f64, radius: f64, color: &Color) {
        self.calls.push(DrawCall::Marker {
            cx,
            cy,
            radius,
            color: color.clone(),
        });
    }
}

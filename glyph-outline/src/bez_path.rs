//! Interop with [`kurbo`].

use kurbo::{BezPath, Circle, PathEl, Shape};

use crate::{Color, Path, Pen, RenderAdapter};

/// Tolerance used when flattening marker circles to bezier paths.
const MARKER_TOLERANCE: f64 = 0.1;

fn as_kurbo_point(x: f64, y: f64) -> kurbo::Point {
    kurbo::Point { x, y }
}

impl Path {
    /// Converts the commands to a [`kurbo::BezPath`]. The style is dropped.
    pub fn to_bez_path(&self) -> BezPath {
        let mut pen = BezPathPen::new();
        for command in self.commands() {
            command.apply_to(&mut pen);
        }
        pen.into_inner()
    }
}

impl From<&BezPath> for Path {
    fn from(value: &BezPath) -> Self {
        let mut path = Path::new();
        for el in value.elements() {
            match *el {
                PathEl::MoveTo(p) => path.move_to(p.x, p.y),
                PathEl::LineTo(p) => path.line_to(p.x, p.y),
                PathEl::QuadTo(c0, p) => path.quad_to(c0.x, c0.y, p.x, p.y),
                PathEl::CurveTo(c0, c1, p) => path.curve_to(c0.x, c0.y, c1.x, c1.y, p.x, p.y),
                PathEl::ClosePath => path.close(),
            }
        }
        path
    }
}

/// Pen that builds a [`kurbo::BezPath`].
#[derive(Clone, Default, Debug)]
pub struct BezPathPen {
    path: BezPath,
}

impl BezPathPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// The path drawn so far.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Consumes the pen, returning the path.
    pub fn into_inner(self) -> BezPath {
        self.path
    }
}

impl Pen for BezPathPen {
    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(as_kurbo_point(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(as_kurbo_point(x, y));
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.path
            .quad_to(as_kurbo_point(cx0, cy0), as_kurbo_point(x, y));
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.path.curve_to(
            as_kurbo_point(cx0, cy0),
            as_kurbo_point(cx1, cy1),
            as_kurbo_point(x, y),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// How a [`PaintedPath`] is painted.
#[derive(Clone, PartialEq, Debug)]
pub enum Paint {
    Fill(Color),
    Stroke { color: Color, width: f64 },
}

/// A path together with the paint applied to it.
#[derive(Clone, PartialEq, Debug)]
pub struct PaintedPath {
    pub path: BezPath,
    pub paint: Paint,
}

/// Render adapter that builds a list of painted [`BezPath`]s.
///
/// Path commands accumulate into a current path. Each fill or stroke records
/// a copy of the current path with its paint. The current path is kept until
/// the next path primitive arrives, so a fill may be followed by a stroke of
/// the same shape, and then a new path is started.
/// Diagnostic lines become stroked one pixel paths and markers become filled
/// circles.
#[derive(Clone, Default, Debug)]
pub struct BezPathAdapter {
    current: BezPathPen,
    // set once the current path has been painted
    painted_current: bool,
    painted: Vec<PaintedPath>,
}

impl BezPathAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The path currently being built, or the most recently painted one if
    /// no path primitive has arrived since.
    pub fn current_path(&self) -> &BezPath {
        self.current.path()
    }

    /// Everything painted so far, in paint order.
    pub fn painted(&self) -> &[PaintedPath] {
        &self.painted
    }

    /// Consumes the adapter, returning the painted paths.
    pub fn into_painted(self) -> Vec<PaintedPath> {
        self.painted
    }

    fn pen(&mut self) -> &mut BezPathPen {
        if self.painted_current {
            self.current = BezPathPen::new();
            self.painted_current = false;
        }
        &mut self.current
    }

    fn paint(&mut self, paint: Paint) {
        self.painted.push(PaintedPath {
            path: self.current.path().clone(),
            paint,
        });
        self.painted_current = true;
    }
}

impl Pen for BezPathAdapter {
    fn move_to(&mut self, x: f64, y: f64) {
        Pen::move_to(self.pen(), x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        Pen::line_to(self.pen(), x, y);
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        Pen::quad_to(self.pen(), cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        Pen::curve_to(self.pen(), cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        Pen::close(self.pen());
    }
}

impl RenderAdapter for BezPathAdapter {
    fn fill(&mut self, color: &Color) {
        self.paint(Paint::Fill(color.clone()));
    }

    fn stroke(&mut self, color: &Color, width: f64) {
        self.paint(Paint::Stroke {
            color: color.clone(),
            width,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &Color) {
        let mut path = BezPath::new();
        path.move_to(as_kurbo_point(x1, y1));
        path.line_to(as_kurbo_point(x2, y2));
        self.painted.push(PaintedPath {
            path,
            paint: Paint::Stroke {
                color: color.clone(),
                width: 1.0,
            },
        });
    }

    fn draw_marker(&mut self, cx: f64, cy: f64, radius: f64, color: &Color) {
        let path = Circle::new(as_kurbo_point(cx, cy), radius).to_path(MARKER_TOLERANCE);
        self.painted.push(PaintedPath {
            path,
            paint: Paint::Fill(color.clone()),
        });
    }
}

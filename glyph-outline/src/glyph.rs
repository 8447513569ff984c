//! A glyph: one outline plus the metadata needed to place it.

use core::fmt;

use indexmap::IndexSet;

use crate::{
    error::OutlineError,
    metrics::{compute_metrics, Metrics},
    path::Path,
    render::{RenderAdapter, MARKER_RADIUS, METRIC_LINE_EXTENT},
    settings::RenderSettings,
    transform::RenderTransform,
    BoundingBox, Color, GlyphId, Point,
};

/// Font level information a glyph needs at draw time.
///
/// This is implemented by whatever owns the loaded font. The glyph only
/// borrows it, so the font must outlive its glyphs.
pub trait FontContext {
    /// Number of font design units per em unit.
    fn units_per_em(&self) -> u16;
}

/// A bare units per em value is the simplest font context.
impl FontContext for u16 {
    fn units_per_em(&self) -> u16 {
        *self
    }
}

/// A point in a flat, externally supplied outline point list.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContourPoint {
    /// Horizontal position in font units.
    pub x: f64,
    /// Vertical position in font units, y-up.
    pub y: f64,
    /// True if the outline passes through this point, false for a bezier
    /// control point.
    pub on_curve: bool,
    /// True if this is the final point of its contour.
    pub last_point_of_contour: bool,
}

impl ContourPoint {
    /// Creates a point that does not end its contour.
    pub fn new(x: f64, y: f64, on_curve: bool) -> Self {
        Self {
            x,
            y,
            on_curve,
            last_point_of_contour: false,
        }
    }

    /// Builder style method to mark this point as ending its contour.
    pub fn ending_contour(mut self) -> Self {
        self.last_point_of_contour = true;
        self
    }
}

/// A single closed loop of points.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour(Vec<ContourPoint>);

impl Contour {
    /// The points of the contour in input order. The last one is flagged as
    /// ending the contour.
    pub fn points(&self) -> &[ContourPoint] {
        &self.0
    }

    /// Number of points in the contour.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for contours produced by [`partition_contours`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContourPoint> {
        self.0.iter()
    }
}

impl From<Contour> for Vec<ContourPoint> {
    fn from(value: Contour) -> Self {
        value.0
    }
}

/// Splits a flat point list into contours.
///
/// Points are scanned in order and a contour ends at each point flagged as
/// the last of its contour. Every point must belong to a terminated contour:
/// trailing points after the final flagged point mean the point data is
/// inconsistent, and an error is returned instead of any contours.
pub fn partition_contours(points: &[ContourPoint]) -> Result<Vec<Contour>, OutlineError> {
    let mut contours = Vec::new();
    let mut current = Vec::new();
    for point in points {
        current.push(*point);
        if point.last_point_of_contour {
            contours.push(Contour(core::mem::take(&mut current)));
        }
    }
    if !current.is_empty() {
        return Err(OutlineError::UnterminatedContour {
            pending: current.len(),
        });
    }
    log::debug!(
        "partitioned {} points into {} contours",
        points.len(),
        contours.len()
    );
    Ok(contours)
}

/// A glyph outline with its metadata.
///
/// The outline is stored in font units with the y axis pointing up. A glyph
/// is created once by a loader; afterwards only its paint style and its
/// unicode mapping change.
#[derive(Clone)]
pub struct Glyph<'a> {
    font: &'a dyn FontContext,
    index: GlyphId,
    name: Option<String>,
    unicode: Option<u32>,
    unicodes: IndexSet<u32>,
    bounds: Option<BoundingBox<f64>>,
    advance_width: f64,
    outline: Path,
    points: Option<Vec<ContourPoint>>,
}

impl<'a> Glyph<'a> {
    /// Creates an empty glyph for the given font.
    pub fn new(font: &'a dyn FontContext, index: GlyphId) -> Self {
        Self {
            font,
            index,
            name: None,
            unicode: None,
            unicodes: IndexSet::new(),
            bounds: None,
            advance_width: 0.0,
            outline: Path::new(),
            points: None,
        }
    }

    /// Builder style method to set the glyph name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder style method to add a unicode mapping.
    ///
    /// See [`Glyph::add_unicode`].
    pub fn with_unicode(mut self, code_point: u32) -> Self {
        self.add_unicode(code_point);
        self
    }

    /// Builder style method to set the stored bounding box.
    pub fn with_bounds(mut self, bounds: BoundingBox<f64>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Builder style method to set the advance width in font units.
    pub fn with_advance_width(mut self, advance_width: f64) -> Self {
        self.advance_width = advance_width;
        self
    }

    /// Builder style method to set the outline, in font units.
    pub fn with_outline(mut self, outline: Path) -> Self {
        self.outline = outline;
        self
    }

    /// Builder style method to attach the flat point list the outline was
    /// decoded from.
    pub fn with_points(mut self, points: Vec<ContourPoint>) -> Self {
        self.points = Some(points);
        self
    }

    /// The glyph's position in its font.
    pub fn index(&self) -> GlyphId {
        self.index
    }

    /// The glyph name, if the font provides one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The primary code point for this glyph: the first one added.
    pub fn unicode(&self) -> Option<u32> {
        self.unicode
    }

    /// All code points mapped to this glyph, in the order they were added.
    pub fn unicodes(&self) -> &IndexSet<u32> {
        &self.unicodes
    }

    /// The bounding box supplied by the loader, if any.
    pub fn bounds(&self) -> Option<BoundingBox<f64>> {
        self.bounds
    }

    /// Horizontal advance in font units.
    pub fn advance_width(&self) -> f64 {
        self.advance_width
    }

    /// Units per em of the owning font, read on every call.
    pub fn units_per_em(&self) -> u16 {
        self.font.units_per_em()
    }

    /// The stored outline in font units.
    pub fn outline(&self) -> &Path {
        &self.outline
    }

    /// The flat point list, if the loader supplied one.
    pub fn points(&self) -> Option<&[ContourPoint]> {
        self.points.as_deref()
    }

    /// Mutable access to the outline's paint style.
    pub fn style_mut(&mut self) -> &mut crate::PathStyle {
        self.outline.style_mut()
    }

    /// Maps another code point to this glyph.
    ///
    /// The first code point added becomes the primary [`unicode`](Self::unicode);
    /// later ones only extend [`unicodes`](Self::unicodes). Adding a code point
    /// that is already mapped has no effect.
    pub fn add_unicode(&mut self, code_point: u32) {
        if self.unicodes.is_empty() {
            self.unicode = Some(code_point);
        }
        self.unicodes.insert(code_point);
    }

    /// Returns the transform from this glyph's font units to surface units.
    ///
    /// Units per em are read from the font on every call.
    pub fn transform(&self, settings: RenderSettings) -> RenderTransform {
        settings.transform(self.units_per_em())
    }

    /// Returns a new path ready to be drawn on a y-down surface.
    ///
    /// Every point `(x, y)` of the outline becomes
    /// `(origin_x + x * scale, origin_y - y * scale)` where scale is the font
    /// size divided by units per em. The result has the same commands in the
    /// same order and owns its data.
    pub fn render_path(&self, settings: RenderSettings) -> Path {
        self.outline.transformed(self.transform(settings))
    }

    /// Draws the glyph into the given adapter.
    pub fn draw<R: RenderAdapter + ?Sized>(&self, sink: &mut R, settings: RenderSettings) {
        self.render_path(settings).render(sink);
    }

    /// Computes the control box and side bearings of the stored outline.
    ///
    /// Returns `None` for a glyph with an empty outline.
    pub fn metrics(&self) -> Option<Metrics> {
        compute_metrics(self.outline.commands(), self.advance_width)
    }

    /// Splits the glyph's point list into contours.
    ///
    /// A glyph without a point list has no contours. See
    /// [`partition_contours`] for the failure case.
    pub fn contours(&self) -> Result<Vec<Contour>, OutlineError> {
        match &self.points {
            Some(points) => partition_contours(points),
            None => Ok(Vec::new()),
        }
    }

    /// Draws diagnostic lines for the glyph's metrics.
    ///
    /// This draws, with the same placement as [`render_path`](Self::render_path):
    /// * a black cross-hair through the origin;
    /// * blue lines at the bounding box edges;
    /// * a green line at the advance width.
    ///
    /// A glyph without a stored bounding box draws its box edges at zero.
    pub fn draw_metrics<R: RenderAdapter + ?Sized>(&self, sink: &mut R, settings: RenderSettings) {
        let transform = self.transform(settings);
        let origin = settings.origin();
        vertical_line(sink, origin.x, &Color::BLACK);
        horizontal_line(sink, origin.y, &Color::BLACK);

        let bounds = self.bounds.unwrap_or_default();
        vertical_line(sink, transform.apply_x(bounds.x_min), &Color::BLUE);
        vertical_line(sink, transform.apply_x(bounds.x_max), &Color::BLUE);
        horizontal_line(sink, transform.apply_y(bounds.y_min), &Color::BLUE);
        horizontal_line(sink, transform.apply_y(bounds.y_max), &Color::BLUE);

        vertical_line(sink, transform.apply_x(self.advance_width), &Color::GREEN);
    }

    /// Draws a marker at every point of the outline.
    ///
    /// End points are drawn first, in blue, then control points, in red. In
    /// each group points appear in the order of the commands they belong to.
    pub fn draw_points<R: RenderAdapter + ?Sized>(&self, sink: &mut R, settings: RenderSettings) {
        let transform = self.transform(settings);
        let commands = self.outline.commands();
        let on_curve = commands.iter().filter_map(|command| command.end_point());
        draw_markers(sink, transform, on_curve, &Color::BLUE);
        let off_curve = commands.iter().flat_map(|command| command.control_points());
        draw_markers(sink, transform, off_curve, &Color::RED);
    }
}

fn vertical_line<R: RenderAdapter + ?Sized>(sink: &mut R, x: f64, color: &Color) {
    sink.draw_line(x, -METRIC_LINE_EXTENT, x, METRIC_LINE_EXTENT, color);
}

fn horizontal_line<R: RenderAdapter + ?Sized>(sink: &mut R, y: f64, color: &Color) {
    sink.draw_line(-METRIC_LINE_EXTENT, y, METRIC_LINE_EXTENT, y, color);
}

fn draw_markers<R: RenderAdapter + ?Sized>(
    sink: &mut R,
    transform: RenderTransform,
    points: impl Iterator<Item = Point<f64>>,
    color: &Color,
) {
    for point in points {
        let point = transform.apply(point);
        sink.draw_marker(point.x, point.y, MARKER_RADIUS, color);
    }
}

impl fmt::Debug for Glyph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Glyph")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("unicode", &self.unicode)
            .field("unicodes", &self.unicodes)
            .field("bounds", &self.bounds)
            .field("advance_width", &self.advance_width)
            .field("units_per_em", &self.units_per_em())
            .field("outline", &self.outline)
            .field("points", &self.points)
            .finish()
    }
}

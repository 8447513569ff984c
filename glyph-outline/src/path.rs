//! Ordered sequences of drawing commands.

use core::fmt;

use crate::{
    error::MalformedPath,
    render::RenderAdapter,
    settings::DEFAULT_DECIMAL_PLACES,
    svg::{self, PathDataPen},
    transform::{RenderTransform, TransformPen},
    BoundingBox, Color, Command, Pen,
};

/// Paint applied when a path is rendered or serialized.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStyle {
    /// Fill color, or `None` for no fill. Defaults to black.
    pub fill: Option<Color>,
    /// Stroke color, or `None` for no stroke. Defaults to `None`.
    pub stroke: Option<Color>,
    /// Width of the stroke, only used when a stroke is set. Defaults to 1.
    pub stroke_width: f64,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::BLACK),
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

/// An append-only sequence of drawing commands with a paint style.
///
/// Commands are stored exactly as they are appended. No ordering is enforced
/// when appending: a path may begin with something other than a move, or
/// continue drawing after a close. Use [`Path::validate`] to check that a
/// path is well formed.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    commands: Vec<Command>,
    style: PathStyle,
}

impl Path {
    /// Creates an empty path with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from existing commands with the default style.
    pub fn from_commands(commands: Vec<Command>) -> Self {
        Self {
            commands,
            style: PathStyle::default(),
        }
    }

    /// Builder style method to set the paint style.
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the commands in the order they were appended.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the paint style used when rendering and serializing.
    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    /// Mutable access to the paint style. The commands cannot be changed
    /// through this.
    pub fn style_mut(&mut self) -> &mut PathStyle {
        &mut self.style
    }

    /// Sets the fill color. `None` means the path is not filled.
    pub fn set_fill(&mut self, fill: Option<Color>) {
        self.style.fill = fill;
    }

    /// Sets the stroke color. `None` means the path is not stroked.
    pub fn set_stroke(&mut self, stroke: Option<Color>) {
        self.style.stroke = stroke;
    }

    /// Sets the stroke width, in the units of the path's coordinates.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.style.stroke_width = width;
    }

    /// Begins a new subpath at (x, y).
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::MoveTo { x, y });
    }

    /// Adds a line from the current point to (x, y).
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::LineTo { x, y });
    }

    /// Adds a quadratic bezier with a control point at (cx0, cy0) ending at
    /// (x, y).
    pub fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.commands.push(Command::QuadTo { cx0, cy0, x, y });
    }

    /// Adds a cubic bezier with control points at (cx0, cy0) and (cx1, cy1)
    /// ending at (x, y).
    pub fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.commands.push(Command::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        });
    }

    /// Closes the current subpath.
    pub fn close(&mut self) {
        self.commands.push(Command::Close);
    }

    /// Replays this path into the given adapter.
    ///
    /// Commands are replayed in their original order. Afterwards the path is
    /// filled if it has a fill color and then stroked if it has a stroke
    /// color. The sequence of calls depends only on the path, never on the
    /// adapter.
    pub fn render<R: RenderAdapter + ?Sized>(&self, sink: &mut R) {
        for command in &self.commands {
            command.apply_to(sink);
        }
        if let Some(fill) = &self.style.fill {
            sink.fill(fill);
        }
        if let Some(stroke) = &self.style.stroke {
            sink.stroke(stroke, self.style.stroke_width);
        }
    }

    /// Returns a new path with every coordinate mapped through `transform`.
    ///
    /// The result has the same commands, in the same order, and a copy of
    /// this path's style.
    pub fn transformed(&self, transform: RenderTransform) -> Path {
        let mut commands = Vec::with_capacity(self.commands.len());
        let mut pen = TransformPen::new(&mut commands, transform);
        for command in &self.commands {
            command.apply_to(&mut pen);
        }
        Path {
            commands,
            style: self.style.clone(),
        }
    }

    /// Serializes the commands as SVG path data.
    ///
    /// Fractional values are printed with `decimal_places` digits after the
    /// decimal point. See the [`svg`] module for the exact format.
    pub fn to_path_data(&self, decimal_places: usize) -> String {
        let mut pen = PathDataPen::with_precision(decimal_places);
        for command in &self.commands {
            command.apply_to(&mut pen);
        }
        pen.into_string()
    }

    /// Serializes the path as an SVG `<path/>` element including its style.
    pub fn to_svg(&self, decimal_places: usize) -> String {
        svg::path_element(&self.to_path_data(decimal_places), &self.style)
    }

    /// Returns the bounding box of every on- and off-curve point in the path.
    ///
    /// This is the control box: it contains the rendered outline but is not
    /// necessarily tight around curves. Returns `None` if the path has no
    /// points.
    pub fn control_bounds(&self) -> Option<BoundingBox<f64>> {
        BoundingBox::from_points(self.commands.iter().flat_map(|command| command.points()))
    }

    /// Checks that every subpath begins with a move.
    ///
    /// Appending never validates, so this is the only place where a path
    /// that draws before its first move, or after a close without a new
    /// move, is rejected.
    pub fn validate(&self) -> Result<(), MalformedPath> {
        let mut open = false;
        for (index, command) in self.commands.iter().enumerate() {
            match command {
                Command::MoveTo { .. } => open = true,
                _ if !open => {
                    log::debug!("rejecting path: {command:?} at index {index} has no open subpath");
                    return Err(MalformedPath::MissingMove { index });
                }
                Command::Close => open = false,
                _ => (),
            }
        }
        Ok(())
    }
}

impl Pen for Path {
    fn move_to(&mut self, x: f64, y: f64) {
        Path::move_to(self, x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        Path::line_to(self, x, y)
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        Path::quad_to(self, cx0, cy0, x, y)
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        Path::curve_to(self, cx0, cy0, cx1, cy1, x, y)
    }

    fn close(&mut self) {
        Path::close(self)
    }
}

impl Extend<Command> for Path {
    fn extend<T: IntoIterator<Item = Command>>(&mut self, iter: T) {
        self.commands.extend(iter)
    }
}

impl<'a> Extend<&'a Command> for Path {
    fn extend<T: IntoIterator<Item = &'a Command>>(&mut self, iter: T) {
        self.commands.extend(iter.into_iter().copied())
    }
}

impl FromIterator<Command> for Path {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self::from_commands(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Command;
    type IntoIter = core::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl From<Vec<Command>> for Path {
    fn from(value: Vec<Command>) -> Self {
        Self::from_commands(value)
    }
}

/// Writes the path data with the default number of decimal places.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_data(DEFAULT_DECIMAL_PLACES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{testing, DrawCall, RecordingAdapter};
    use pretty_assertions::assert_eq;

    #[test]
    fn appends_in_order() {
        let path = testing::mixed_path();
        let letters: String = path.commands().iter().map(Command::letter).collect();
        assert_eq!(letters, "MLQCZ");
        assert_eq!(path.len(), 5);
        assert!(!path.is_empty());
        assert!(Path::new().is_empty());
    }

    #[test]
    fn default_style() {
        let style = Path::new().style().clone();
        assert_eq!(style.fill, Some(Color::BLACK));
        assert_eq!(style.stroke, None);
        assert_eq!(style.stroke_width, 1.0);
    }

    #[test]
    fn extend_preserves_order() {
        let mut path = testing::square_path();
        let other = testing::mixed_path();
        path.extend(&other);
        assert_eq!(path.len(), 10);
        assert_eq!(&path.commands()[5..], other.commands());
        path.extend([Command::MoveTo { x: 1.0, y: 1.0 }]);
        assert_eq!(path.commands().last(), Some(&Command::MoveTo { x: 1.0, y: 1.0 }));
    }

    #[test]
    fn render_fill_then_stroke() {
        let mut path = testing::square_path();
        path.set_fill(Some(Color::RED));
        path.set_stroke(Some(Color::BLUE));
        path.set_stroke_width(3.0);
        let mut sink = RecordingAdapter::default();
        path.render(&mut sink);
        let calls = sink.into_calls();
        assert_eq!(calls.len(), 7);
        assert_eq!(calls[0], DrawCall::Path(Command::MoveTo { x: 0.0, y: 0.0 }));
        assert_eq!(calls[4], DrawCall::Path(Command::Close));
        assert_eq!(calls[5], DrawCall::Fill(Color::RED));
        assert_eq!(
            calls[6],
            DrawCall::Stroke {
                color: Color::BLUE,
                width: 3.0
            }
        );
    }

    #[test]
    fn render_without_paint() {
        let mut path = testing::square_path();
        path.set_fill(None);
        let mut sink = RecordingAdapter::default();
        path.render(&mut sink);
        assert!(sink
            .calls()
            .iter()
            .all(|call| matches!(call, DrawCall::Path(_))));
    }

    #[test]
    fn path_data() {
        assert_eq!(testing::square_path().to_path_data(2), "M0 0L10 0L10 10L0 10Z");
        assert_eq!(
            testing::mixed_path().to_path_data(2),
            "M0 0L100 0Q150 50 100 100C80.50 120-20 120.25 0 100Z"
        );
        assert_eq!(
            testing::mixed_path().to_path_data(0),
            "M0 0L100 0Q150 50 100 100C81 120-20 120 0 100Z"
        );
        assert_eq!(Path::new().to_path_data(2), "");
    }

    #[test]
    fn display_uses_two_decimal_places() {
        let path = testing::mixed_path();
        assert_eq!(path.to_string(), path.to_path_data(2));
    }

    #[test]
    fn svg_fragment() {
        let mut path = testing::square_path();
        assert_eq!(path.to_svg(2), r#"<path d="M0 0L10 0L10 10L0 10Z"/>"#);
        path.set_fill(None);
        path.set_stroke(Some(Color::new("#333")));
        path.set_stroke_width(0.5);
        assert_eq!(
            path.to_svg(2),
            r##"<path d="M0 0L10 0L10 10L0 10Z" fill="none" stroke="#333" stroke-width="0.5"/>"##
        );
    }

    #[test]
    fn transformed_is_independent() {
        let path = testing::square_path();
        let transformed = path.transformed(RenderTransform::flip_y());
        assert_eq!(transformed.len(), path.len());
        assert_eq!(
            transformed.commands()[2],
            Command::LineTo { x: 10.0, y: -10.0 }
        );
        // the source is untouched
        assert_eq!(path.commands()[2], Command::LineTo { x: 10.0, y: 10.0 });
    }

    #[test]
    fn control_bounds_include_control_points() {
        let bounds = testing::mixed_path().control_bounds().unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                x_min: -20.0,
                y_min: 0.0,
                x_max: 150.0,
                y_max: 120.25,
            }
        );
        assert_eq!(Path::new().control_bounds(), None);
    }

    #[test]
    fn validate_accepts_well_formed() {
        let mut path = testing::square_path();
        path.extend(&testing::mixed_path());
        assert_eq!(path.validate(), Ok(()));
        assert_eq!(Path::new().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_missing_move() {
        testing::init_logging();
        let mut path = Path::new();
        path.line_to(1.0, 1.0);
        assert_eq!(path.validate(), Err(MalformedPath::MissingMove { index: 0 }));

        let mut path = testing::square_path();
        path.line_to(5.0, 5.0);
        assert_eq!(path.validate(), Err(MalformedPath::MissingMove { index: 5 }));

        let mut path = testing::square_path();
        path.close();
        assert_eq!(path.validate(), Err(MalformedPath::MissingMove { index: 5 }));
    }

    #[test]
    fn path_is_a_pen() {
        let mut path = Path::new();
        for command in testing::mixed_path().commands() {
            command.apply_to(&mut path);
        }
        assert_eq!(path, testing::mixed_path());
    }
}

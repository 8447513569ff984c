use crate::Point;

/// Axis aligned extents of an outline or a set of points.
///
/// Outlines are stored y-up, so `y_min` is the bottom edge until the box is
/// mapped onto a drawing surface.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    pub x_min: T,
    pub y_min: T,
    pub x_max: T,
    pub y_max: T,
}

impl BoundingBox<f64> {
    /// Creates a degenerate box containing only the given point.
    pub fn from_point(point: Point<f64>) -> Self {
        Self {
            x_min: point.x,
            y_min: point.y,
            x_max: point.x,
            y_max: point.y,
        }
    }

    /// Computes the smallest box containing every point in the iterator.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points(points: impl IntoIterator<Item = Point<f64>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, |mut bbox, point| {
            bbox.add_point(point);
            bbox
        }))
    }

    /// Grows the box, if necessary, to contain the given point.
    pub fn add_point(&mut self, point: Point<f64>) {
        self.x_min = self.x_min.min(point.x);
        self.y_min = self.y_min.min(point.y);
        self.x_max = self.x_max.max(point.x);
        self.y_max = self.y_max.max(point.y);
    }

    /// Horizontal extent of the box.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

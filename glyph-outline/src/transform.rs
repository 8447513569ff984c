//! Mapping outline coordinates onto a drawing surface.

use crate::{Pen, Point};

/// Maps points from font units (y-up) to surface units (y-down).
///
/// A point `(x, y)` maps to `(origin.x + x * scale, origin.y - y * scale)`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RenderTransform {
    origin: Point<f64>,
    scale: f64,
}

impl RenderTransform {
    /// Creates a new transform with the given surface origin and scale.
    pub fn new(origin: Point<f64>, scale: f64) -> Self {
        Self { origin, scale }
    }

    /// The transform that only flips the y axis.
    pub fn flip_y() -> Self {
        Self::new(Point::new(0.0, 0.0), 1.0)
    }

    pub fn origin(&self) -> Point<f64> {
        self.origin
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a single point.
    #[inline]
    pub fn apply(&self, point: Point<f64>) -> Point<f64> {
        self.origin + Point::new(point.x, -point.y) * self.scale
    }

    /// Maps a horizontal position. The y axis plays no part.
    #[inline]
    pub fn apply_x(&self, x: f64) -> f64 {
        self.origin.x + x * self.scale
    }

    /// Maps a vertical position, flipping its direction.
    #[inline]
    pub fn apply_y(&self, y: f64) -> f64 {
        self.origin.y - y * self.scale
    }

    /// The equivalent [`kurbo::Affine`].
    #[cfg(feature = "kurbo")]
    pub fn to_affine(&self) -> kurbo::Affine {
        kurbo::Affine::new([
            self.scale,
            0.0,
            0.0,
            -self.scale,
            self.origin.x,
            self.origin.y,
        ])
    }
}

/// A pen that maps every coordinate through a [`RenderTransform`] before
/// passing it to an inner pen.
pub struct TransformPen<'a, T: Pen + ?Sized> {
    inner_pen: &'a mut T,
    transform: RenderTransform,
}

impl<'a, T: Pen + ?Sized> TransformPen<'a, T> {
    pub fn new(inner_pen: &'a mut T, transform: RenderTransform) -> TransformPen<'a, T> {
        TransformPen {
            inner_pen,
            transform,
        }
    }

    fn map_point(&self, x: f64, y: f64) -> (f64, f64) {
        let pt = self.transform.apply(Point::new(x, y));
        (pt.x, pt.y)
    }
}

impl<T: Pen + ?Sized> Pen for TransformPen<'_, T> {
    fn move_to(&mut self, x: f64, y: f64) {
        let (x, y) = self.map_point(x, y);
        self.inner_pen.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let (x, y) = self.map_point(x, y);
        self.inner_pen.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        let (cx0, cy0) = self.map_point(cx0, cy0);
        let (x, y) = self.map_point(x, y);
        self.inner_pen.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        let (cx0, cy0) = self.map_point(cx0, cy0);
        let (cx1, cy1) = self.map_point(cx1, cy1);
        let (x, y) = self.map_point(x, y);
        self.inner_pen.curve_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.inner_pen.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;

    #[test]
    fn maps_and_flips() {
        let transform = RenderTransform::new(Point::new(10.0, 20.0), 0.5);
        assert_eq!(transform.apply(Point::new(4.0, 6.0)), Point::new(12.0, 17.0));
        assert_eq!(transform.apply_x(4.0), 12.0);
        assert_eq!(transform.apply_y(6.0), 17.0);
    }

    #[test]
    fn pen_maps_every_coordinate() {
        let mut commands: Vec<Command> = Vec::new();
        let mut pen = TransformPen::new(&mut commands, RenderTransform::flip_y());
        pen.move_to(1.0, 2.0);
        pen.curve_to(3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        pen.close();
        assert_eq!(
            commands,
            [
                Command::MoveTo { x: 1.0, y: -2.0 },
                Command::CurveTo {
                    cx0: 3.0,
                    cy0: -4.0,
                    cx1: 5.0,
                    cy1: -6.0,
                    x: 7.0,
                    y: -8.0
                },
                Command::Close,
            ]
        );
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn affine_matches_apply() {
        let transform = RenderTransform::new(Point::new(10.0, 20.0), 0.25);
        let mapped = transform.to_affine() * kurbo::Point::new(8.0, 16.0);
        let expected = transform.apply(Point::new(8.0, 16.0));
        assert_eq!((mapped.x, mapped.y), (expected.x, expected.y));
    }
}

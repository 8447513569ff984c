//! Settings for placing an outline on a drawing surface.

use crate::{transform::RenderTransform, Point};

/// Font size, in pixels per em, used when none is given.
pub const DEFAULT_FONT_SIZE: f64 = 72.0;

/// Number of digits printed after the decimal point for fractional values
/// in path data when none is given.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Where, and how large, to draw a glyph.
///
/// The origin is the position of the glyph's baseline origin on the target
/// surface, in surface units. The font size is in pixels per em and is
/// divided by the font's units per em to produce the scale factor.
///
/// The default places the glyph at `(0, 0)` at 72 pixels per em.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSettings {
    origin: Point<f64>,
    font_size: f64,
}

impl RenderSettings {
    /// Creates settings for the given origin and font size.
    pub fn new(origin_x: f64, origin_y: f64, font_size: f64) -> Self {
        Self {
            origin: Point::new(origin_x, origin_y),
            font_size,
        }
    }

    /// Creates settings for the given origin at the default font size.
    pub fn at(origin_x: f64, origin_y: f64) -> Self {
        Self::new(origin_x, origin_y, DEFAULT_FONT_SIZE)
    }

    /// Builder style method to set the font size in pixels per em.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Builder style method to set the origin.
    pub fn with_origin(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin = Point::new(origin_x, origin_y);
        self
    }

    /// Returns the origin on the target surface.
    pub fn origin(&self) -> Point<f64> {
        self.origin
    }

    /// Returns the font size in pixels per em.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Computes the linear scale factor for a font with the given units
    /// per em.
    ///
    /// A units per em value of zero cannot be scaled; in that case a warning
    /// is logged and the outline is left in font units (a scale of 1.0).
    pub fn scale_for(&self, units_per_em: u16) -> f64 {
        if units_per_em == 0 {
            log::warn!("units per em is zero, drawing in font units");
            return 1.0;
        }
        self.font_size / units_per_em as f64
    }

    /// Returns the transform from font units to surface units for a font
    /// with the given units per em.
    pub fn transform(&self, units_per_em: u16) -> RenderTransform {
        RenderTransform::new(self.origin, self.scale_for(units_per_em))
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

//! Glyph outlines as ordered sequences of drawing commands.
//!
//! An outline loader fills in a [`Glyph`] with a [`Path`] in font units.
//! From there this crate can:
//!
//! * produce a render-ready [`Path`] at a given origin and font size with
//!   [`Glyph::render_path`], flipping the y axis from the font's y-up space to
//!   a y-down drawing surface;
//! * replay any path into a [`RenderAdapter`] with [`Path::render`];
//! * serialize a path as SVG path data ([`Path::to_path_data`]) or as a styled
//!   `<path/>` element ([`Path::to_svg`]);
//! * compute control-point bounds and side bearings ([`compute_metrics`]).
//!
//! Nothing here knows about a concrete drawing surface; callers supply one by
//! implementing [`RenderAdapter`].

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Expose the leaf type crate.
pub extern crate outline_types as types;

#[cfg(feature = "kurbo")]
mod bez_path;
mod error;
mod glyph;
mod metrics;
mod path;
mod render;
mod settings;
pub mod svg;
mod transform;

#[cfg(all(test, feature = "serde"))]
mod serde_test;
#[cfg(test)]
mod testing;

#[cfg(feature = "kurbo")]
pub use bez_path::{BezPathAdapter, BezPathPen, Paint, PaintedPath};
pub use error::{MalformedPath, OutlineError};
pub use glyph::{partition_contours, Contour, ContourPoint, FontContext, Glyph};
pub use metrics::{compute_metrics, ControlBoundsPen, Metrics};
pub use path::{Path, PathStyle};
pub use render::{DrawCall, RecordingAdapter, RenderAdapter, MARKER_RADIUS, METRIC_LINE_EXTENT};
pub use settings::{RenderSettings, DEFAULT_DECIMAL_PLACES, DEFAULT_FONT_SIZE};
pub use transform::{RenderTransform, TransformPen};

pub use types::{BoundingBox, Color, Command, GlyphId, NullPen, Pen, Point};

//! Common data types used by glyph outlines.
//!
//! These are the leaf types of the workspace: they carry no behavior beyond
//! simple geometric helpers and are shared between path building, rendering
//! and serialization.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bbox;
mod color;
mod command;
mod glyph_id;
mod pen;
mod point;


pub use bbox::BoundingBox;
pub use color::Color;
pub use command::Command;
pub use glyph_id::GlyphId;
pub use pen::{NullPen, Pen};
pub use point::Point;

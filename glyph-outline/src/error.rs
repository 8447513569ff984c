//! Error types associated with outlines.

use thiserror::Error;

/// Errors that may occur when working with glyph outlines.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OutlineError {
    /// The point list ended while a contour was still open.
    ///
    /// `pending` is the number of points seen after the last point flagged
    /// as the end of a contour.
    #[error("{pending} trailing point(s) are not terminated by an end of contour flag")]
    UnterminatedContour { pending: usize },
    /// The command sequence is not well formed.
    #[error(transparent)]
    MalformedPath(#[from] MalformedPath),
}

/// An error if a command sequence is malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MalformedPath {
    /// The command at this index draws (or closes) without an open subpath.
    ///
    /// Every subpath must begin with a move, including the first one and
    /// any subpath that follows a close.
    #[error("command at index {index} has no open subpath; expected a move first")]
    MissingMove { index: usize },
}

//! Shape masks and the rotation rules shared by masks and point offsets.
//!
//! Both the occupancy mask of an item and its linked-slot offsets are rotated
//! through [`Rotation`], so a footprint and its linked-slot lookups can never
//! disagree about where a cell ended up.

mod mask;
mod rotation;

pub use mask::ShapeMask;
pub use rotation::Rotation;

use crate::error::{BagError, ErrorSeverity};

/// Errors raised while building a [`ShapeMask`] or decoding a rotation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// Width or height is zero.
    #[error("shape must be at least 1x1 (got {width}x{height})")]
    Empty { width: u32, height: u32 },

    /// Cell buffer length does not match `width * height`.
    #[error("shape {width}x{height} expects {expected} cells, got {actual}")]
    CellCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Rows of a textual shape have different lengths.
    #[error("shape row {row} has length {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Unknown glyph in a textual shape (only `#` and `.` are allowed).
    #[error("invalid shape glyph {glyph:?} at ({x}, {y})")]
    InvalidGlyph { glyph: char, x: usize, y: usize },

    /// Angle is not one of 0, 90, 180, 270.
    #[error("invalid rotation angle {0} (expected 0, 90, 180 or 270)")]
    InvalidRotation(u16),
}

impl BagError for ShapeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ShapeError::*;
        match self {
            Empty { .. } => "SHAPE_EMPTY",
            CellCountMismatch { .. } => "SHAPE_CELL_COUNT_MISMATCH",
            RaggedRow { .. } => "SHAPE_RAGGED_ROW",
            InvalidGlyph { .. } => "SHAPE_INVALID_GLYPH",
            InvalidRotation(_) => "SHAPE_INVALID_ROTATION",
        }
    }
}

//! Row/column positions inside a line-oriented buffer.
//!
//! Rows are zero-based line indices; columns are zero-based byte offsets
//! within the line. The engine only ever edits a single row at a time, so
//! replacement ranges are expressed as [`LineRange`].

use serde::{Deserialize, Serialize};

/// A cursor position in a buffer.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    /// Zero-based line index
    pub row: u32,
    /// Zero-based byte offset within the line
    pub column: u32,
}

impl Position {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// A half-open column range `[start_column, end_column)` on one row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRange {
    pub row: u32,
    pub start_column: u32,
    pub end_column: u32,
}

impl LineRange {
    /// Create a range, normalizing reversed column bounds.
    pub fn new(row: u32, start_column: u32, end_column: u32) -> Self {
        if end_column < start_column {
            Self {
                row,
                start_column: end_column,
                end_column: start_column,
            }
        } else {
            Self {
                row,
                start_column,
                end_column,
            }
        }
    }

    /// A range of `len` columns starting at `start_column`.
    pub fn with_len(row: u32, start_column: u32, len: u32) -> Self {
        Self::new(row, start_column, start_column.saturating_add(len))
    }

    pub fn start(&self) -> Position {
        Position::new(self.row, self.start_column)
    }

    pub fn end(&self) -> Position {
        Position::new(self.row, self.end_column)
    }

    pub fn len(&self) -> u32 {
        self.end_column - self.start_column
    }

    pub fn is_empty(&self) -> bool {
        self.start_column == self.end_column
    }

    /// Whether `pos` falls inside the range (end exclusive).
    pub fn contains(&self, pos: Position) -> bool {
        pos.row == self.row && pos.column >= self.start_column && pos.column < self.end_column
    }

    /// Shrink the end of the range so it does not extend past `end_column`.
    pub fn clamp_end(&self, end_column: u32) -> Self {
        Self::new(
            self.row,
            self.start_column,
            self.end_column.min(end_column.max(self.start_column)),
        )
    }
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod position_tests;

//! The editor surface a completion session drives.

use acomp_common::{LineRange, Position};
use acomp_scanner::Document;

/// What a completion session needs from the editor it is attached to.
pub trait EditorHost {
    fn cursor_position(&self) -> Position;

    /// The buffer, tokenized.
    fn document(&self) -> &Document;

    fn use_soft_tabs(&self) -> bool;

    fn set_use_soft_tabs(&mut self, enabled: bool);

    /// Replace the text of `range` with `text`; returns the position just
    /// after the inserted text.
    fn replace(&mut self, range: LineRange, text: &str) -> Position;
}

/// An in-memory editor: a document, a cursor and a soft-tab flag.
#[derive(Clone, Debug)]
pub struct MemoryEditor {
    document: Document,
    cursor: Position,
    soft_tabs: bool,
}

impl MemoryEditor {
    /// An editor holding `text` with the cursor at the end of the buffer.
    pub fn new(text: &str) -> Self {
        let document = Document::new(text);
        let row = document.line_count().saturating_sub(1);
        let column = document.line(row).map_or(0, |line| line.len() as u32);
        Self {
            document,
            cursor: Position::new(row, column),
            soft_tabs: true,
        }
    }

    pub fn with_cursor(mut self, row: u32, column: u32) -> Self {
        self.set_cursor(Position::new(row, column));
        self
    }

    pub fn with_soft_tabs(mut self, enabled: bool) -> Self {
        self.soft_tabs = enabled;
        self
    }

    pub fn set_cursor(&mut self, position: Position) {
        self.cursor = position;
    }

    /// Insert `text` at the cursor and move the cursor past it.
    pub fn type_text(&mut self, text: &str) {
        let at = self.cursor;
        self.cursor = self
            .document
            .replace(LineRange::new(at.row, at.column, at.column), text);
    }

    pub fn text(&self) -> String {
        self.document.text()
    }
}

impl EditorHost for MemoryEditor {
    fn cursor_position(&self) -> Position {
        self.cursor
    }

    fn document(&self) -> &Document {
        &self.document
    }

    fn use_soft_tabs(&self) -> bool {
        self.soft_tabs
    }

    fn set_use_soft_tabs(&mut self, enabled: bool) {
        self.soft_tabs = enabled;
    }

    fn replace(&mut self, range: LineRange, text: &str) -> Position {
        let end = self.document.replace(range, text);
        self.cursor = end;
        end
    }
}

#[cfg(test)]
#[path = "../tests/host_tests.rs"]
mod host_tests;

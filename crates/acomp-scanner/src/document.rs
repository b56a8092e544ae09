//! A tokenized, line-oriented text buffer.
//!
//! `Document` keeps the buffer rows together with their tokens and the
//! scanner state at the start of each row, so an edit only re-scans from the
//! edited row downwards.

use crate::scanner::ScannerState;
use crate::scope::ScopeState;
use crate::token::Token;
use acomp_common::{LineRange, Position};
use tracing::trace;

#[derive(Clone, Debug, Default)]
pub struct Document {
    lines: Vec<String>,
    tokens: Vec<Vec<Token>>,
    /// Scanner state at the start of each row.
    line_states: Vec<ScannerState>,
    /// Scanner state after the last row.
    end_state: ScannerState,
}

impl Document {
    /// Build a document from text. `\r\n` and `\n` both end a row.
    pub fn new(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self::from_lines(lines)
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        let mut doc = Self {
            lines,
            ..Self::default()
        };
        if doc.lines.is_empty() {
            doc.lines.push(String::new());
        }
        doc.rescan_from(0);
        doc
    }

    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn line(&self, row: u32) -> Option<&str> {
        self.lines.get(row as usize).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Tokens of `row`, in column order. Empty for rows out of range.
    pub fn tokens(&self, row: u32) -> &[Token] {
        self.tokens.get(row as usize).map_or(&[], Vec::as_slice)
    }

    /// Scope in effect at the start of `row`.
    pub fn scope_at_row_start(&self, row: u32) -> ScopeState {
        match self.line_states.get(row as usize) {
            Some(state) => state.scope().clone(),
            None => self.end_state.scope().clone(),
        }
    }

    /// Scope in effect at `pos`: the scope of the token ending at or
    /// containing `pos.column - 1`, else the scope at the start of the row.
    pub fn scope_at(&self, pos: Position) -> ScopeState {
        match self.raw_token_at(pos.row, pos.column) {
            Some(token) => token.scope.clone(),
            None => self.scope_at_row_start(pos.row),
        }
    }

    /// The token ending at or containing `column - 1`, i.e. the token with
    /// `start < column <= end`. Column 0 has no such token.
    pub fn raw_token_at(&self, row: u32, column: u32) -> Option<&Token> {
        if column == 0 {
            return None;
        }
        let tokens = self.tokens(row);
        let idx = tokens.partition_point(|t| t.end < column);
        tokens.get(idx).filter(|t| t.start < column)
    }

    /// The last non-trivia token that ends at or before `pos`, scanning into
    /// earlier rows when the current row has none.
    pub fn significant_token_before(&self, pos: Position) -> Option<&Token> {
        let mut row = pos.row.min(self.line_count().saturating_sub(1));
        let mut column = if row == pos.row { pos.column } else { u32::MAX };
        loop {
            let found = self
                .tokens(row)
                .iter()
                .rev()
                .find(|t| !t.trivia && t.end <= column);
            if found.is_some() {
                return found;
            }
            if row == 0 {
                return None;
            }
            row -= 1;
            column = u32::MAX;
        }
    }

    /// Replace the text of `range` with `text` and re-scan affected rows.
    ///
    /// Columns past the end of the row are clamped. `text` may contain
    /// newlines. Returns the position just after the inserted text.
    pub fn replace(&mut self, range: LineRange, text: &str) -> Position {
        let row = range.row as usize;
        if row >= self.lines.len() {
            self.lines.resize(row + 1, String::new());
        }
        let line = &self.lines[row];
        let start = clamp_to_char_boundary(line, range.start_column as usize);
        let end = clamp_to_char_boundary(line, range.end_column as usize).max(start);

        let mut joined = String::with_capacity(line.len() + text.len());
        joined.push_str(&line[..start]);
        joined.push_str(text);
        let cursor_offset = joined.len();
        joined.push_str(&line[end..]);

        let replacement: Vec<String> = joined.split('\n').map(str::to_string).collect();
        let inserted_rows = replacement.len();
        self.lines.splice(row..=row, replacement);

        trace!(
            row = range.row,
            start,
            end,
            inserted_rows,
            "document replace"
        );
        // Rows padded in by `resize` have no scanner state yet.
        self.rescan_from(row.min(self.line_states.len()));

        let before_cursor = &joined[..cursor_offset];
        let newlines = before_cursor.matches('\n').count();
        let column = before_cursor
            .rfind('\n')
            .map_or(cursor_offset, |nl| cursor_offset - nl - 1);
        Position::new(range.row + newlines as u32, column as u32)
    }

    fn rescan_from(&mut self, row: usize) {
        self.tokens.truncate(row);
        self.line_states.truncate(row);
        let mut state = if row == 0 {
            ScannerState::new()
        } else {
            self.rescan_state_after(row - 1)
        };
        for (idx, line) in self.lines.iter().enumerate().skip(row) {
            self.line_states.push(state.clone());
            self.tokens.push(state.scan_line(idx as u32, line));
        }
        self.end_state = state;
    }

    /// Scanner state after `row`, recomputed from the row's start state.
    fn rescan_state_after(&self, row: usize) -> ScannerState {
        let mut state = self.line_states[row].clone();
        state.scan_line(row as u32, &self.lines[row]);
        state
    }
}

fn clamp_to_char_boundary(line: &str, column: usize) -> usize {
    let mut column = column.min(line.len());
    while !line.is_char_boundary(column) {
        column -= 1;
    }
    column
}

#[cfg(test)]
#[path = "../tests/document_tests.rs"]
mod document_tests;

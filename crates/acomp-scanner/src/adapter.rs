//! Adapts raw scanner tokens into the token the completion engine works on.

use crate::document::Document;
use crate::scanner::is_word_byte;
use crate::token::{Token, TokenKind};
use acomp_common::Position;

/// Whether `text` is empty or made only of identifier characters
/// (`[A-Za-z0-9_$]*`).
pub fn is_word_text(text: &str) -> bool {
    text.bytes().all(is_word_byte)
}

/// The token the cursor at (`row`, `column`) is completing.
///
/// Returns the raw token ending at or containing `column - 1` when its text
/// is word-like. Otherwise returns an empty token at the cursor, classified
/// [`TokenKind::Property`] when the character just before the cursor is `.`
/// and [`TokenKind::Other`] otherwise. Columns past the end of the row are
/// clamped to the row length.
pub fn token_at(document: &Document, row: u32, column: u32) -> Token {
    let line = document.line(row).unwrap_or("");
    let column = column.min(line.len() as u32);

    if let Some(raw) = document.raw_token_at(row, column)
        && !raw.trivia
        && is_word_text(&raw.text)
    {
        return raw.clone();
    }

    let kind = if column > 0 && line.as_bytes()[column as usize - 1] == b'.' {
        TokenKind::Property
    } else {
        TokenKind::Other
    };
    Token::empty_at(
        kind,
        row,
        column,
        document.scope_at(Position::new(row, column)),
    )
}

#[cfg(test)]
#[path = "../tests/adapter_tests.rs"]
mod adapter_tests;

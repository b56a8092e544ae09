//! Line-oriented JavaScript scanner.
//!
//! The scanner works one row at a time and carries a [`ScannerState`] across
//! rows so that block comments, template literals, and lexical scope survive
//! line breaks. It is deliberately forgiving: any byte sequence produces
//! tokens, and nothing here can fail.
//!
//! Besides classifying tokens it tracks declarations well enough to answer
//! "which local names are visible here":
//! - `var` / `let` / `const` declare the identifiers that follow them
//! - `function name(a, b) { ... }` declares `name` outside and `a`, `b` inside
//! - `catch (e)` declares `e`

use crate::scope::ScopeState;
use crate::token::{Token, TokenKind};
use memchr::{memchr2, memmem};

/// Reserved words classified as [`TokenKind::Other`].
pub const KEYWORDS: &[&str] = &[
    "async",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "return",
    "super",
    "switch",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Literal keywords classified as [`TokenKind::Atom`].
pub const ATOMS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

/// Characters that may appear in an identifier after the first.
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'=' | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'<'
            | b'>'
            | b'!'
            | b'&'
            | b'|'
            | b'^'
            | b'~'
            | b'?'
            | b':'
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct VarDecl {
    /// Bracket and brace nesting of the `var` keyword.
    depth: u32,
    /// The next identifier at `depth` is a declared name.
    expect_name: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Binding {
    #[default]
    None,
    /// After `function`, before its parameter list.
    FunctionHead,
    /// Inside a parameter list; `depth` is the bracket depth inside the parens.
    Params { depth: u32 },
    /// After `catch`, before its `(`.
    CatchHead,
    CatchParam { depth: u32 },
}

/// Scanner state carried from one row to the next.
#[derive(Clone, Debug, Default)]
pub struct ScannerState {
    scope: ScopeState,
    vars: Option<VarDecl>,
    binding: Binding,
    brace_depth: u32,
    /// Combined depth of `(` and `[`.
    bracket_depth: u32,
    /// A function's parameter list closed and its `{` has not been seen yet.
    awaiting_body: bool,
    after_dot: bool,
    in_block_comment: bool,
    in_template: bool,
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> &ScopeState {
        &self.scope
    }

    /// Tokenize one row, advancing the state past it.
    pub fn scan_line(&mut self, row: u32, line: &str) -> Vec<Token> {
        let bytes = line.as_bytes();
        let len = bytes.len();
        let mut tokens = Vec::new();
        let mut pos = 0;

        if self.in_block_comment && len > 0 {
            pos = self.scan_block_comment_body(bytes, 0);
            tokens.push(self.trivia(line, row, 0, pos));
        }
        if self.in_template && pos < len {
            let end = self.scan_template_body(bytes, pos);
            tokens.push(self.significant(line, row, pos, end, TokenKind::String));
            pos = end;
        }

        while pos < len {
            let start = pos;
            let ch = bytes[pos];

            if ch.is_ascii_whitespace() {
                while pos < len && bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                tokens.push(self.trivia(line, row, start, pos));
                continue;
            }

            if ch == b'/' && pos + 1 < len && bytes[pos + 1] == b'/' {
                tokens.push(self.trivia(line, row, start, len));
                break;
            }

            if ch == b'/' && pos + 1 < len && bytes[pos + 1] == b'*' {
                self.in_block_comment = true;
                pos = self.scan_block_comment_body(bytes, pos + 2);
                tokens.push(self.trivia(line, row, start, pos));
                continue;
            }

            if ch == b'"' || ch == b'\'' {
                pos = scan_string(bytes, pos + 1, ch);
                tokens.push(self.significant(line, row, start, pos, TokenKind::String));
                continue;
            }

            if ch == b'`' {
                self.in_template = true;
                pos = self.scan_template_body(bytes, pos + 1);
                tokens.push(self.significant(line, row, start, pos, TokenKind::String));
                continue;
            }

            if ch.is_ascii_digit()
                || (ch == b'.' && pos + 1 < len && bytes[pos + 1].is_ascii_digit())
            {
                pos = scan_number(bytes, pos);
                tokens.push(self.significant(line, row, start, pos, TokenKind::Number));
                continue;
            }

            if is_word_start(ch) {
                while pos < len && is_word_byte(bytes[pos]) {
                    pos += 1;
                }
                let kind = self.classify_word(&line[start..pos]);
                tokens.push(self.significant(line, row, start, pos, kind));
                continue;
            }

            if !ch.is_ascii() {
                let width = line[pos..].chars().next().map_or(1, char::len_utf8);
                pos += width;
                tokens.push(self.significant(line, row, start, pos, TokenKind::Other));
                continue;
            }

            pos = scan_punctuation(bytes, pos);
            let token = self.significant(line, row, start, pos, TokenKind::Operator);
            self.observe_punctuation(&token.text);
            tokens.push(token);
        }

        tokens
    }

    fn trivia(&self, line: &str, row: u32, start: usize, end: usize) -> Token {
        Token::new(
            &line[start..end],
            TokenKind::Other,
            row,
            start as u32,
            end as u32,
            self.scope.clone(),
        )
        .trivia()
    }

    /// Build a non-trivia token. The scope snapshot is taken before the
    /// token's own effects, so a declaration never sees itself.
    fn significant(
        &mut self,
        line: &str,
        row: u32,
        start: usize,
        end: usize,
        kind: TokenKind,
    ) -> Token {
        let token = Token::new(
            &line[start..end],
            kind,
            row,
            start as u32,
            end as u32,
            self.scope_before(kind, &line[start..end]),
        );
        self.after_dot = token.is_member_dot();
        token
    }

    fn scope_before(&mut self, kind: TokenKind, text: &str) -> ScopeState {
        let snapshot = self.scope.clone();
        if kind == TokenKind::Word {
            self.declare_word(text);
        }
        snapshot
    }

    fn classify_word(&mut self, word: &str) -> TokenKind {
        if self.after_dot {
            return TokenKind::Property;
        }
        if ATOMS.contains(&word) {
            return TokenKind::Atom;
        }
        if KEYWORDS.contains(&word) {
            self.observe_keyword(word);
            return TokenKind::Other;
        }
        if self.awaiting_body {
            self.scope.abandon_pending_function();
            self.awaiting_body = false;
        }
        TokenKind::Word
    }

    fn observe_keyword(&mut self, word: &str) {
        match word {
            "var" | "let" | "const" => {
                self.vars = Some(VarDecl {
                    depth: self.nesting(),
                    expect_name: true,
                });
            }
            "function" => self.binding = Binding::FunctionHead,
            "catch" => self.binding = Binding::CatchHead,
            _ => {}
        }
    }

    fn nesting(&self) -> u32 {
        self.bracket_depth + self.brace_depth
    }

    fn declare_word(&mut self, name: &str) {
        match self.binding {
            Binding::FunctionHead => {
                self.scope.declare(name);
                return;
            }
            Binding::Params { depth } | Binding::CatchParam { depth }
                if depth == self.bracket_depth =>
            {
                self.scope.declare(name);
                return;
            }
            _ => {}
        }
        if let Some(decl) = self.vars.as_mut()
            && decl.expect_name
            && decl.depth == self.bracket_depth + self.brace_depth
        {
            decl.expect_name = false;
            self.scope.declare(name);
        }
    }

    fn observe_punctuation(&mut self, op: &str) {
        if self.awaiting_body && op != "{" {
            self.scope.abandon_pending_function();
            self.awaiting_body = false;
        }
        match op {
            "(" => {
                self.bracket_depth += 1;
                match self.binding {
                    Binding::FunctionHead => {
                        self.scope.enter_function();
                        self.binding = Binding::Params {
                            depth: self.bracket_depth,
                        };
                    }
                    Binding::CatchHead => {
                        self.binding = Binding::CatchParam {
                            depth: self.bracket_depth,
                        };
                    }
                    _ => {}
                }
            }
            ")" => {
                match self.binding {
                    Binding::Params { depth } if depth == self.bracket_depth => {
                        self.binding = Binding::None;
                        self.awaiting_body = true;
                    }
                    Binding::CatchParam { depth } if depth == self.bracket_depth => {
                        self.binding = Binding::None;
                    }
                    _ => {}
                }
                self.bracket_depth = self.bracket_depth.saturating_sub(1);
            }
            "[" => self.bracket_depth += 1,
            "]" => self.bracket_depth = self.bracket_depth.saturating_sub(1),
            "{" => {
                self.brace_depth += 1;
                if self.awaiting_body {
                    self.scope.open_body(self.brace_depth);
                    self.awaiting_body = false;
                }
            }
            "}" => {
                self.brace_depth = self.brace_depth.saturating_sub(1);
                while self.scope.close_brace(self.brace_depth) {}
            }
            "," => {
                if let Some(decl) = self.vars.as_mut()
                    && decl.depth == self.bracket_depth + self.brace_depth
                {
                    decl.expect_name = true;
                }
            }
            ";" => self.vars = None,
            _ => {}
        }
    }

    /// Scan to the end of a block comment starting at `pos` (inside it).
    fn scan_block_comment_body(&mut self, bytes: &[u8], pos: usize) -> usize {
        match memmem::find(&bytes[pos..], b"*/") {
            Some(offset) => {
                self.in_block_comment = false;
                pos + offset + 2
            }
            None => bytes.len(),
        }
    }

    /// Scan to the closing backtick of a template literal (inside it).
    /// Templates may span rows; the state remembers an open one.
    fn scan_template_body(&mut self, bytes: &[u8], pos: usize) -> usize {
        let end = scan_string(bytes, pos, b'`');
        if end > pos && bytes[end - 1] == b'`' && !is_escaped(bytes, end - 1) {
            self.in_template = false;
        }
        end
    }
}

/// Scan a quoted string body starting just after the opening quote.
/// Unterminated strings end at the end of the row.
fn scan_string(bytes: &[u8], mut pos: usize, quote: u8) -> usize {
    while pos < bytes.len() {
        match memchr2(quote, b'\\', &bytes[pos..]) {
            Some(offset) => {
                let at = pos + offset;
                if bytes[at] == b'\\' {
                    pos = (at + 2).min(bytes.len());
                } else {
                    return at + 1;
                }
            }
            None => return bytes.len(),
        }
    }
    bytes.len()
}

fn is_escaped(bytes: &[u8], at: usize) -> bool {
    let mut backslashes = 0;
    let mut i = at;
    while i > 0 && bytes[i - 1] == b'\\' {
        backslashes += 1;
        i -= 1;
    }
    backslashes % 2 == 1
}

/// Scan a numeric literal. A `.` is only consumed when a digit follows, so
/// `1.` scans as the number `1` followed by a member-access dot.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    let len = bytes.len();
    if bytes[pos] == b'0'
        && pos + 1 < len
        && matches!(bytes[pos + 1], b'x' | b'X' | b'b' | b'B' | b'o' | b'O')
    {
        pos += 2;
        while pos < len && (bytes[pos].is_ascii_hexdigit() || bytes[pos] == b'_') {
            pos += 1;
        }
        if pos < len && bytes[pos] == b'n' {
            pos += 1;
        }
        return pos;
    }

    let digits = |bytes: &[u8], mut pos: usize| {
        while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'_') {
            pos += 1;
        }
        pos
    };

    pos = digits(bytes, pos);
    if pos + 1 < len && bytes[pos] == b'.' && bytes[pos + 1].is_ascii_digit() {
        pos = digits(bytes, pos + 1);
    }
    if pos < len && matches!(bytes[pos], b'e' | b'E') {
        let mut exp = pos + 1;
        if exp < len && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        if exp < len && bytes[exp].is_ascii_digit() {
            pos = digits(bytes, exp);
        }
    }
    if pos < len && bytes[pos] == b'n' {
        pos += 1;
    }
    pos
}

/// Scan one punctuation token. Brackets, `,`, `;`, and dots are always
/// single tokens (`?.` and `...` excepted); other operator characters group
/// into runs such as `===` or `=>`.
fn scan_punctuation(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let ch = bytes[pos];
    if ch == b'?' && pos + 1 < len && bytes[pos + 1] == b'.' {
        let digit_follows = pos + 2 < len && bytes[pos + 2].is_ascii_digit();
        if !digit_follows {
            return pos + 2;
        }
    }
    if ch == b'.' {
        if pos + 2 < len && bytes[pos + 1] == b'.' && bytes[pos + 2] == b'.' {
            return pos + 3;
        }
        return pos + 1;
    }
    if is_operator_byte(ch) {
        let mut end = pos + 1;
        while end < len && is_operator_byte(bytes[end]) {
            // Stop before a comment opener or an optional-chaining dot.
            if bytes[end] == b'/' && end + 1 < len && matches!(bytes[end + 1], b'/' | b'*') {
                break;
            }
            if bytes[end] == b'?' && end + 1 < len && bytes[end + 1] == b'.' {
                break;
            }
            end += 1;
        }
        return end;
    }
    pos + 1
}

#[cfg(test)]
#[path = "../tests/scanner_tests.rs"]
mod scanner_tests;

//! Token types for the toylang lexer.

use std::fmt;

use thiserror::Error;

/// Token kinds for the toylang language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Operators
    Plus,
    Minus,
    Mult,
    Div,
    Mod,

    // Literals
    Number,
    String,
    Ident,

    // Keywords
    True,
    False,
    Let,
    Nil,

    // Special
    EndOfFile,
    Error,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 14] = [
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Mult,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Ident,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Let,
        TokenKind::Nil,
        TokenKind::EndOfFile,
        TokenKind::Error,
    ];

    /// Canonical lowercase name of the kind, as used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Mult => "mult",
            TokenKind::Div => "div",
            TokenKind::Mod => "mod",
            TokenKind::Number => "num",
            TokenKind::String => "string",
            TokenKind::Ident => "ident",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Let => "let",
            TokenKind::Nil => "nil",
            TokenKind::EndOfFile => "eof",
            TokenKind::Error => "error",
        }
    }

    /// Returns true for the keyword kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::True | TokenKind::False | TokenKind::Let | TokenKind::Nil
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Look up an identifier to see if it's a keyword.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    match ident {
        "nil" => TokenKind::Nil,
        "let" => TokenKind::Let,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        _ => TokenKind::Ident,
    }
}

/// Returns true if `text` is spelled exactly like a keyword.
pub fn is_keyword(text: &str) -> bool {
    lookup_identifier(text) != TokenKind::Ident
}

/// Errors from resolving a span against a source buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    #[error("span {start}..{end} is out of bounds for source of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("span {start}..{end} does not fall on character boundaries")]
    NotCharBoundary { start: usize, end: usize },
}

/// Location of a lexeme in the source it was scanned from.
///
/// Offsets are in bytes. `line` and `column` are 1-based, and the column
/// counts characters, so a tab or a multi-byte character is one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first byte of the lexeme.
    pub start: usize,
    /// Length of the lexeme in bytes.
    pub len: usize,
    /// Line the lexeme starts on.
    pub line: usize,
    /// Column the lexeme starts at.
    pub column: usize,
}

impl Span {
    /// Create a new Span.
    pub fn new(start: usize, len: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            len,
            line,
            column,
        }
    }

    /// Byte offset one past the end of the lexeme, saturating at
    /// `usize::MAX` for spans that fit no buffer.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolve this span against `source`.
    ///
    /// A span is only meaningful for the exact buffer that produced it. Any
    /// other buffer, or the same buffer after modification, may yield a
    /// different substring or an error.
    pub fn view<'s>(&self, source: &'s str) -> Result<&'s str, SpanError> {
        let end = self.end();
        if end > source.len() {
            return Err(SpanError::OutOfBounds {
                start: self.start,
                end,
                len: source.len(),
            });
        }
        source
            .get(self.start..end)
            .ok_or(SpanError::NotCharBoundary {
                start: self.start,
                end,
            })
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0, 1, 1)
    }
}

/// A token produced by the scanner.
///
/// Tokens hold no text of their own; use [`Token::raw`] with the scanned
/// source to get at the lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Where the lexeme sits in the source.
    pub span: Span,
}

impl Token {
    /// Create a new Token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The lexeme text of this token within `source`.
    pub fn raw<'s>(&self, source: &'s str) -> Result<&'s str, SpanError> {
        self.span.view(source)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

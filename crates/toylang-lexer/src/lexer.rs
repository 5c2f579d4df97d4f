//! Scanner for toylang source code.

use log::{debug, trace};
use thiserror::Error;

use crate::token::{Span, Token, TokenKind, is_keyword, lookup_identifier};

/// Diagnostics recorded alongside `Error` tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("{file}:{line}:{column}: unexpected character {ch:?}")]
    UnexpectedCharacter {
        file: String,
        ch: char,
        line: usize,
        column: usize,
    },

    #[error("{file}:{line}:{column}: unterminated string literal")]
    UnterminatedString {
        file: String,
        line: usize,
        column: usize,
    },
}

impl LexError {
    /// 1-based line the offending lexeme starts on.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
            LexError::UnterminatedString { line, .. } => *line,
        }
    }

    /// 1-based column the offending lexeme starts at.
    pub fn column(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { column, .. } => *column,
            LexError::UnterminatedString { column, .. } => *column,
        }
    }
}

/// Scanner tokenizes toylang source code, one token per call.
///
/// The scanner borrows its source for its whole lifetime. Tokens it hands out
/// carry only offsets, so they stay valid exactly as long as that buffer is
/// kept unchanged.
pub struct Scanner<'a> {
    name: &'a str,
    source: &'a str,
    current: usize,
    line: usize,
    column: usize,
    start: usize,
    start_line: usize,
    start_column: usize,
    errors: Vec<LexError>,
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner. `name` is only used in diagnostics.
    pub fn new(name: &'a str, source: &'a str) -> Self {
        Self {
            name,
            source,
            current: 0,
            line: 1,
            column: 1,
            start: 0,
            start_line: 1,
            start_column: 1,
            errors: Vec::new(),
            finished: false,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.current
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Diagnostics for every `Error` token produced so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the next token.
    ///
    /// Once the input is exhausted every call returns `EndOfFile`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start_token();

        if self.is_at_end() {
            return self.make_token(TokenKind::EndOfFile);
        }

        let ch = self.advance();
        let token = match ch {
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Mult),
            '/' => self.make_token(TokenKind::Div),
            '%' => self.make_token(TokenKind::Mod),
            '"' | '\'' => self.read_string(ch),
            c if c.is_ascii_digit() => self.read_number(),
            c if is_letter(c) => self.read_identifier(),
            c => self.error_token(LexError::UnexpectedCharacter {
                file: self.name.to_string(),
                ch: c,
                line: self.start_line,
                column: self.start_column,
            }),
        };

        trace!(
            "{}:{}:{}: {} {:?}",
            self.name,
            token.span.line,
            token.span.column,
            token.kind,
            &self.source[self.start..self.current]
        );
        token
    }

    /// Returns true if the token's text is spelled like a keyword.
    ///
    /// This re-reads the token's text from the source. Tokens coming from
    /// this scanner are already classified, so this is only useful for tokens
    /// of unknown origin.
    pub fn is_keyword(&self, token: &Token) -> bool {
        token.raw(self.source).map(is_keyword).unwrap_or(false)
    }

    /// The full source line containing the start of `span`, without its
    /// line terminator. Returns `None` for a span that does not fit this
    /// source.
    pub fn line_text(&self, span: &Span) -> Option<&'a str> {
        if span.start > self.source.len() || !self.source.is_char_boundary(span.start) {
            return None;
        }
        let line_start = self.source[..span.start]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let line_end = self.source[span.start..]
            .find('\n')
            .map(|i| span.start + i)
            .unwrap_or(self.source.len());
        let text = &self.source[line_start..line_end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Read a number literal: digits, optionally followed by `.` and digits.
    fn read_number(&mut self) -> Token {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A '.' only belongs to the number if a digit follows it.
        if self.check('.') && self.peek_ahead().is_ascii_digit() {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    /// Read an identifier or keyword.
    fn read_identifier(&mut self) -> Token {
        while is_letter(self.peek()) || self.peek().is_ascii_digit() {
            self.advance();
        }
        let kind = lookup_identifier(&self.source[self.start..self.current]);
        self.make_token(kind)
    }

    /// Read a quoted string literal. The opening quote is already consumed.
    fn read_string(&mut self, quote: char) -> Token {
        while !self.is_at_end() && !self.check(quote) && !self.check('\n') {
            self.advance();
        }

        if !self.match_char(quote) {
            return self.error_token(LexError::UnterminatedString {
                file: self.name.to_string(),
                line: self.start_line,
                column: self.start_column,
            });
        }

        self.make_token(TokenKind::String)
    }

    /// Skip spaces, tabs, carriage returns and newlines.
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.handle_newline();
                }
                _ => return,
            }
        }
    }

    fn handle_newline(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Start tracking a new token.
    fn start_token(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// Create a token spanning from the token start to the cursor.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            Span::new(
                self.start,
                self.current - self.start,
                self.start_line,
                self.start_column,
            ),
        )
    }

    fn error_token(&mut self, error: LexError) -> Token {
        debug!("{}", error);
        self.errors.push(error);
        self.make_token(TokenKind::Error)
    }

    /// Consume and return the next character, or `'\0'` at end of input.
    fn advance(&mut self) -> char {
        match self.source[self.current..].chars().next() {
            Some(ch) => {
                self.current += ch.len_utf8();
                self.column += 1;
                ch
            }
            None => '\0',
        }
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    /// Peek one character past the next one.
    fn peek_ahead(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn check(&self, ch: char) -> bool {
        !self.is_at_end() && self.peek() == ch
    }

    /// Consume the next character if it is `ch`.
    fn match_char(&mut self, ch: char) -> bool {
        if self.check(ch) {
            self.advance();
            return true;
        }
        false
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `EndOfFile`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfFile {
            self.finished = true;
        }
        Some(token)
    }
}

/// Check if a character can start an identifier.
fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Tokenize an input string into a vector of tokens ending in `EndOfFile`.
///
/// Fails with the first diagnostic if any `Error` token was produced. Use
/// [`Scanner`] directly to keep going past bad input.
pub fn tokenize(name: &str, source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(name, source);
    let tokens: Vec<Token> = scanner.by_ref().collect();
    match scanner.errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(tokens),
    }
}

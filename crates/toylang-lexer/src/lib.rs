//! Toylang lexer - tokenization for the toylang scripting language.
//!
//! This crate provides the scanner for toylang, which converts source text
//! into tokens one at a time. Tokens carry spans into the source rather than
//! copies of their text.
//!
//! # Example
//!
//! ```
//! use toylang_lexer::{Scanner, TokenKind};
//!
//! let source = "let x 3.5";
//! let mut scanner = Scanner::new("<doc>", source);
//! let token = scanner.next_token();
//! assert_eq!(token.kind, TokenKind::Let);
//!
//! let token = scanner.next_token();
//! assert_eq!(token.kind, TokenKind::Ident);
//! assert_eq!(token.raw(source).unwrap(), "x");
//! ```

pub mod lexer;
pub mod names;
pub mod token;

pub use lexer::{LexError, Scanner, tokenize};
pub use names::KindNames;
pub use token::{Span, SpanError, Token, TokenKind, is_keyword, lookup_identifier};

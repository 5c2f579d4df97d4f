//! Bidirectional table between token kinds and their canonical names.

use std::collections::HashMap;

use crate::token::TokenKind;

/// Immutable lookup table from [`TokenKind`] to name and back.
///
/// Build one at startup and share it by reference; nothing here is global.
#[derive(Debug, Clone)]
pub struct KindNames {
    names: Vec<&'static str>,
    kinds: HashMap<&'static str, TokenKind>,
}

impl KindNames {
    pub fn new() -> Self {
        let names: Vec<&'static str> = TokenKind::ALL.iter().map(|k| k.name()).collect();
        let kinds = TokenKind::ALL.iter().map(|k| (k.name(), *k)).collect();
        Self { names, kinds }
    }

    /// Name of `kind`.
    pub fn to_str(&self, kind: TokenKind) -> &'static str {
        self.names
            .get(kind as usize)
            .copied()
            .unwrap_or_else(|| kind.name())
    }

    /// Kind named `name`, or `fallback` if the name is unknown.
    ///
    /// Unknown names are not an error here; callers decide whether they are
    /// fatal.
    pub fn to_kind(&self, name: &str, fallback: TokenKind) -> TokenKind {
        self.kinds.get(name).copied().unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate `(name, kind)` pairs in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.names
            .iter()
            .zip(TokenKind::ALL.iter())
            .map(|(name, kind)| (*name, *kind))
    }
}

impl Default for KindNames {
    fn default() -> Self {
        Self::new()
    }
}

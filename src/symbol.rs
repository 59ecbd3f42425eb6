//! Symbols and symbol sequences.
//!
//! A [`Symbol`] is one character of the system's alphabet. Sequences are stored as
//! `Vec<Symbol>` rather than `String` so that indexing is O(1) and appending a
//! replacement never has to re-validate UTF-8 boundaries.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// A single symbol of an L-System alphabet. Identity is exact match only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered, append-friendly list of [`Symbol`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolSequence(Vec<Symbol>);

impl SymbolSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.0.get(index).copied()
    }

    pub fn push(&mut self, symbol: Symbol) {
        self.0.push(symbol);
    }

    /// Appends every symbol of `other`, in order.
    pub fn extend_from(&mut self, other: &SymbolSequence) {
        self.0.extend_from_slice(&other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of occurrences of `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }
}

impl From<&str> for SymbolSequence {
    fn from(s: &str) -> Self {
        s.chars().map(Symbol).collect()
    }
}

impl FromStr for SymbolSequence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<Vec<Symbol>> for SymbolSequence {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl FromIterator<Symbol> for SymbolSequence {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Symbol> for SymbolSequence {
    fn extend<I: IntoIterator<Item = Symbol>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SymbolSequence {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for SymbolSequence {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Symbol {
        &self.0[index]
    }
}

impl fmt::Display for SymbolSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_without_loss() {
        let seq: SymbolSequence = "F[+F]F".parse().unwrap();
        assert_eq!(seq.len(), 6);
        assert_eq!(seq[1], Symbol('['));
        assert_eq!(seq.to_string(), "F[+F]F");
    }

    #[test]
    fn count_matches_exact_symbols_only() {
        let seq = SymbolSequence::from("FfFF");
        assert_eq!(seq.count(Symbol('F')), 3);
        assert_eq!(seq.count(Symbol('f')), 1);
        assert_eq!(seq.count(Symbol('X')), 0);
    }
}

//! Production rules: one replacement sequence per symbol.

use crate::symbol::{Symbol, SymbolSequence};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An insertion-ordered mapping from a symbol to its replacement.
///
/// Symbols without an entry are copied through unchanged by the rewriting engine.
/// Redefining a symbol replaces its replacement in place (last write wins) and
/// keeps the symbol's original position in iteration order. A replacement may be
/// empty, which deletes the symbol on expansion.
///
/// Serializes as a list of `(symbol, replacement)` pairs. Deserializing goes through
/// [`insert`](Self::insert), so repeated symbols collapse with the same rules.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(
    from = "Vec<(Symbol, SymbolSequence)>",
    into = "Vec<(Symbol, SymbolSequence)>"
)]
pub struct RuleTable {
    entries: Vec<(Symbol, SymbolSequence)>,
    index: HashMap<Symbol, usize>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(symbol, replacement)` pairs, e.g. `[('F', "F+F--F+F")]`.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, &'a str)>,
    {
        let mut table = Self::new();
        for (symbol, replacement) in pairs {
            table.insert(Symbol(symbol), SymbolSequence::from(replacement));
        }
        table
    }

    /// Defines (or redefines) the replacement for `symbol`.
    pub fn insert(&mut self, symbol: Symbol, replacement: SymbolSequence) {
        match self.index.get(&symbol) {
            Some(&slot) => self.entries[slot].1 = replacement,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, replacement));
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_rule(mut self, symbol: char, replacement: &str) -> Self {
        self.insert(Symbol(symbol), SymbolSequence::from(replacement));
        self
    }

    pub fn get(&self, symbol: Symbol) -> Option<&SymbolSequence> {
        self.lookup(symbol)
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.lookup(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &SymbolSequence)> {
        self.entries.iter().map(|(s, r)| (*s, r))
    }

    /// Largest `replacement.len()` across all rules, or 1 if every symbol passes through.
    ///
    /// After `n` generations a sequence of length `l` is at most `l * k^n` long.
    pub fn max_growth_factor(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, r)| r.len())
            .max()
            .unwrap_or(1)
            .max(1)
    }

    fn lookup(&self, symbol: Symbol) -> Option<&SymbolSequence> {
        self.index.get(&symbol).map(|&slot| &self.entries[slot].1)
    }
}

impl From<Vec<(Symbol, SymbolSequence)>> for RuleTable {
    fn from(pairs: Vec<(Symbol, SymbolSequence)>) -> Self {
        let mut table = Self::new();
        for (symbol, replacement) in pairs {
            table.insert(symbol, replacement);
        }
        table
    }
}

impl From<RuleTable> for Vec<(Symbol, SymbolSequence)> {
    fn from(table: RuleTable) -> Self {
        table.entries
    }
}

impl PartialEq for RuleTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, replacement) in &self.entries {
            writeln!(f, "{symbol} -> {replacement}")?;
        }
        Ok(())
    }
}

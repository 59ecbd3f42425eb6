//! The rewriting engine.
//!
//! Each generation materializes a complete new sequence before the next one starts,
//! so every symbol of generation `n` is rewritten exactly once using only the rules,
//! never symbols produced earlier in the same pass.

use crate::rules::RuleTable;
use crate::symbol::SymbolSequence;

/// Applies `rules` to `sequence` for `generations` generations.
///
/// Symbols with a rule are replaced by their replacement (possibly nothing); all others
/// are copied unchanged. Zero generations returns the input as-is. There is no cycle
/// detection or size limit: length can grow exponentially, so pick bounded counts.
pub fn expand(sequence: &SymbolSequence, rules: &RuleTable, generations: u32) -> SymbolSequence {
    let mut current = sequence.clone();
    for generation in 0..generations {
        current = rewrite_once(&current, rules);
        tracing::trace!(generation = generation + 1, len = current.len(), "rewrote generation");
    }
    current
}

/// Runs a single generation of rewriting.
pub fn rewrite_once(sequence: &SymbolSequence, rules: &RuleTable) -> SymbolSequence {
    if rules.is_empty() {
        return sequence.clone();
    }

    let mut output = SymbolSequence::with_capacity(sequence.len());
    for symbol in sequence.iter() {
        match rules.get(symbol) {
            Some(replacement) => output.extend_from(replacement),
            None => output.push(symbol),
        }
    }
    output
}

//! An L-System: rules, an immutable seed and a working buffer.

use crate::error::LSystemError;
use crate::interpreter::{EscapeHook, RenderConfig, TurtleInterpreter};
use crate::primitive::DrawingBackend;
use crate::rewrite::expand;
use crate::rules::RuleTable;
use crate::symbol::SymbolSequence;
use crate::turtle::TurtleState;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Owns a [`RuleTable`], the generation-0 seed and the current state.
///
/// The seed never changes after construction. The current state is the working buffer:
/// [`evaluate`](Self::evaluate) rewrites it in place, so calling it twice compounds the
/// expansion. Call [`reset`](Self::reset) first (or use [`draw`](Self::draw), which does)
/// to get the same result for the same generation count every time.
///
/// Not meant for concurrent use: give each task its own instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LSystem {
    rules: RuleTable,
    seed: SymbolSequence,
    state: SymbolSequence,
}

impl LSystem {
    pub fn new(rules: RuleTable, seed: SymbolSequence) -> Self {
        let state = seed.clone();
        Self { rules, seed, state }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn seed(&self) -> &SymbolSequence {
        &self.seed
    }

    /// The working buffer as left by the last [`evaluate`](Self::evaluate) or [`reset`](Self::reset).
    pub fn state(&self) -> &SymbolSequence {
        &self.state
    }

    /// Replaces the working buffer with a fresh copy of the seed.
    pub fn reset(&mut self) {
        self.state.clone_from(&self.seed);
    }

    /// Rewrites the *current state* (not the seed) for `generations` more generations.
    pub fn evaluate(&mut self, generations: u32) -> &SymbolSequence {
        self.state = expand(&self.state, &self.rules, generations);
        tracing::debug!(generations, len = self.state.len(), "evaluated l-system");
        &self.state
    }

    /// Full draw cycle: reset, evaluate `generations`, then render with a fresh turtle.
    ///
    /// Returns the number of symbols the interpreter processed.
    ///
    /// # Errors
    /// [`LSystemError::InvalidArgument`] if `config` fails validation. Nothing is
    /// rewritten or emitted in that case.
    pub fn draw(
        &mut self,
        generations: u32,
        interpreter: &TurtleInterpreter,
        config: &RenderConfig,
        rng: &mut impl Rng,
        backend: &mut impl DrawingBackend,
        escape: &mut impl EscapeHook,
    ) -> Result<usize, LSystemError> {
        let mut turtle = TurtleState::new(config)?;
        self.reset();
        self.evaluate(generations);
        Ok(interpreter.render(&self.state, &mut turtle, rng, backend, escape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn koch() -> LSystem {
        LSystem::new(
            RuleTable::from_pairs([('F', "F+F--F+F")]),
            SymbolSequence::from("F"),
        )
    }

    #[test]
    fn evaluate_compounds_without_reset() {
        let mut system = koch();
        system.evaluate(1);
        system.evaluate(1);
        let twice = system.state().clone();

        system.reset();
        assert_eq!(system.state(), system.seed());
        system.evaluate(2);
        assert_eq!(system.state(), &twice);
    }

    #[test]
    fn seed_is_never_mutated() {
        let mut system = koch();
        system.evaluate(3);
        assert_eq!(system.seed().to_string(), "F");
    }
}

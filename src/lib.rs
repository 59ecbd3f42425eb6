//! # symbios-fractal
//!
//! Recursive fractal patterns from Lindenmayer systems.
//!
//! A [`RuleTable`] and a seed [`SymbolSequence`] are expanded for N generations by the
//! rewriting engine ([`expand`]). The result is walked once by a [`TurtleInterpreter`],
//! which keeps a [`TurtleState`] and emits [`Primitive`]s to any [`DrawingBackend`].
//! Rasterizing, file formats and previews are left to the backend.
//!
//! ## Standard symbols
//!
//! | Symbol | Effect |
//! |---|---|
//! | `F`, `G` | step forward, drawing |
//! | `B`, `V` | draw a step backwards, heading unchanged |
//! | `f` / `b` | half step forward / turn around and half step |
//! | `u` / `d` | pen up / pen down |
//! | `+` / `-` | turn by ±`turn_angle` |
//! | `@` / `&` | turn by ±5° |
//! | `?` | pick `turn_angle` from {10, 15, 30, 45, 60}° and turn |
//! | `c` / `h` | random hue / hue +5° |
//! | `s` / `o` | random saturation / random opacity |
//! | `1`..`9`, `n` | pen width 1..9, 0.5 |
//! | `>` / `<` | step length ±1 |
//! | `O` / `Q` | circle / square of size step/4 |
//! | `[` / `]` | push / pop position and heading |
//! | `*` | call the escape hook |
//!
//! Everything else is ignored by the interpreter, so rules may use structural symbols
//! such as `X` and `Y` freely.

pub mod error;
pub mod interpreter;
pub mod lsystem;
pub mod presets;
pub mod primitive;
pub mod rewrite;
pub mod rules;
pub mod symbol;
pub mod turtle;

pub use error::*;
pub use interpreter::*;
pub use lsystem::*;
pub use primitive::*;
pub use rewrite::*;
pub use rules::*;
pub use symbol::*;
pub use turtle::*;

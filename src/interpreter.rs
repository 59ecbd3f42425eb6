//! Interpreter that walks a symbol sequence and drives a [`DrawingBackend`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure a [`RenderConfig`], build the
//! starting [`TurtleState`] from it, register symbol-to-operation mappings via
//! [`TurtleInterpreter::set_op`] or [`TurtleInterpreter::populate_standard_symbols`],
//! then call [`TurtleInterpreter::render`].

use crate::error::LSystemError;
use crate::primitive::{DrawingBackend, Primitive};
use crate::symbol::{Symbol, SymbolSequence};
use crate::turtle::{
    DEFAULT_MAX_STACK_DEPTH, FINE_TURN, HUE_STEP, PenColor, RANDOM_TURN_ANGLES, TurtleOp,
    TurtleState,
};
use bevy_math::primitives::{Circle, Rectangle};
use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Render parameters for one draw pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Length of a full forward step. Must be positive.
    pub step_length: f32,
    /// Angle in degrees used by `+` and `-`.
    pub turn_angle: f32,
    /// Starting position.
    pub origin: Vec2,
    /// Starting heading in degrees.
    pub heading: f32,
    /// Starting pen colour.
    pub color: PenColor,
    /// Starting stroke width. Must be positive.
    pub width: f32,
    /// Maximum stack depth for push/pop operations, copied into the turtle.
    pub max_stack_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            step_length: 10.0,
            turn_angle: 90.0,
            origin: Vec2::ZERO,
            heading: 0.0,
            color: PenColor::default(),
            width: 1.0,
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Rejects parameters that would make the turtle meaningless.
    ///
    /// # Errors
    /// [`LSystemError::InvalidArgument`] for a non-positive or non-finite step length or
    /// width, or a non-finite angle or origin.
    pub fn validate(&self) -> Result<(), LSystemError> {
        if !(self.step_length.is_finite() && self.step_length > 0.0) {
            return Err(LSystemError::invalid(
                "step_length",
                format!("must be positive and finite, got {}", self.step_length),
            ));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(LSystemError::invalid(
                "width",
                format!("must be positive and finite, got {}", self.width),
            ));
        }
        if !self.turn_angle.is_finite() {
            return Err(LSystemError::invalid("turn_angle", "must be finite"));
        }
        if !self.heading.is_finite() {
            return Err(LSystemError::invalid("heading", "must be finite"));
        }
        if !self.origin.is_finite() {
            return Err(LSystemError::invalid("origin", "must be finite"));
        }
        Ok(())
    }
}

/// Caller-supplied behaviour for the escape symbol.
///
/// Any `FnMut(&mut TurtleState)` closure works; [`NoEscape`] ignores the symbol.
pub trait EscapeHook {
    fn on_escape(&mut self, turtle: &mut TurtleState);
}

impl<F> EscapeHook for F
where
    F: FnMut(&mut TurtleState),
{
    fn on_escape(&mut self, turtle: &mut TurtleState) {
        self(turtle);
    }
}

/// An escape hook that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEscape;

impl EscapeHook for NoEscape {
    fn on_escape(&mut self, _turtle: &mut TurtleState) {}
}

/// Maps symbols to [`TurtleOp`]s and executes sequences against a turtle.
///
/// Holds only the symbol table; every render parameter comes from the [`TurtleState`]
/// passed to [`render`](Self::render).
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    op_map: HashMap<Symbol, TurtleOp>,
}

impl TurtleInterpreter {
    /// Creates an interpreter with an empty symbol map.
    ///
    /// Register operations with [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols) before rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with the standard alphabet already registered.
    pub fn standard() -> Self {
        let mut interpreter = Self::new();
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<Symbol, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: impl Into<Symbol>, op: TurtleOp) {
        self.op_map.insert(symbol.into(), op);
    }

    /// The operation a symbol dispatches to. Unmapped symbols are [`TurtleOp::Ignore`].
    pub fn op(&self, symbol: Symbol) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Every registered mapping, sorted by symbol.
    pub fn ops(&self) -> Vec<(Symbol, TurtleOp)> {
        let mut ops: Vec<_> = self.op_map.iter().map(|(s, op)| (*s, *op)).collect();
        ops.sort_by_key(|(s, _)| *s);
        ops
    }

    /// Registers the conventional symbol-to-operation mappings.
    ///
    /// See the crate documentation for the full symbol table.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            // Movement
            ('F', TurtleOp::Forward),
            ('G', TurtleOp::Forward),
            ('B', TurtleOp::Backward),
            ('V', TurtleOp::Backward),
            ('f', TurtleOp::HalfForward),
            ('b', TurtleOp::HalfBackward),
            ('u', TurtleOp::PenUp),
            ('d', TurtleOp::PenDown),
            // Rotation
            ('+', TurtleOp::Turn(1.0)),
            ('-', TurtleOp::Turn(-1.0)),
            ('@', TurtleOp::TurnFixed(FINE_TURN)),
            ('&', TurtleOp::TurnFixed(-FINE_TURN)),
            ('?', TurtleOp::RandomTurn),
            // Pen style
            ('c', TurtleOp::RandomHue),
            ('h', TurtleOp::ShiftHue(HUE_STEP)),
            ('s', TurtleOp::RandomSaturation),
            ('o', TurtleOp::RandomOpacity),
            ('n', TurtleOp::SetWidth(0.5)),
            ('>', TurtleOp::GrowStep),
            ('<', TurtleOp::ShrinkStep),
            // Shapes
            ('O', TurtleOp::Circle),
            ('Q', TurtleOp::Square),
            // Flow
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
            ('*', TurtleOp::Escape),
        ];

        for (c, op) in mappings {
            self.set_op(c, op);
        }
        for digit in 1..=9u8 {
            self.set_op(char::from(b'0' + digit), TurtleOp::SetWidth(f32::from(digit)));
        }
    }

    /// Interprets `sequence` once, mutating `turtle` and emitting primitives to `backend`.
    ///
    /// Random commands draw from `rng`; the escape symbol calls `escape`. Unmapped
    /// symbols are skipped and pops on an empty stack do nothing. Returns the number of
    /// symbols processed.
    ///
    /// A `MoveTo` is emitted lazily before the first stroke, and again whenever
    /// the turtle moved without drawing, so an empty sequence emits nothing.
    pub fn render(
        &self,
        sequence: &SymbolSequence,
        turtle: &mut TurtleState,
        rng: &mut impl Rng,
        backend: &mut impl DrawingBackend,
        escape: &mut impl EscapeHook,
    ) -> usize {
        let mut pass = RenderPass {
            turtle,
            backend,
            cursor_synced: false,
            emitted: 0,
        };
        let mut processed = 0;

        for symbol in sequence.iter() {
            processed += 1;
            match self.op(symbol) {
                // --- MOVEMENT ---
                TurtleOp::Forward => {
                    let step = pass.turtle.step_length;
                    pass.step(step);
                }
                TurtleOp::Backward => {
                    let step = pass.turtle.step_length;
                    pass.turtle.turn(180.0);
                    pass.step(step);
                    pass.turtle.turn(180.0);
                }
                TurtleOp::HalfForward => {
                    let step = pass.turtle.step_length / 2.0;
                    pass.step(step);
                }
                TurtleOp::HalfBackward => {
                    let step = pass.turtle.step_length / 2.0;
                    pass.turtle.turn(180.0);
                    pass.step(step);
                }
                TurtleOp::PenUp => {
                    if pass.turtle.pen_down {
                        pass.turtle.pen_down = false;
                        pass.emit(Primitive::PenUp);
                    }
                }
                TurtleOp::PenDown => {
                    if !pass.turtle.pen_down {
                        pass.turtle.pen_down = true;
                        pass.emit(Primitive::PenDown);
                    }
                }

                // --- ROTATION ---
                TurtleOp::Turn(sign) => {
                    let angle = pass.turtle.turn_angle * sign;
                    pass.turtle.turn(angle);
                }
                TurtleOp::TurnFixed(degrees) => pass.turtle.turn(degrees),
                TurtleOp::RandomTurn => {
                    if let Some(&angle) = RANDOM_TURN_ANGLES.choose(rng) {
                        pass.turtle.turn_angle = angle;
                        pass.turtle.turn(angle);
                    }
                }

                // --- PEN STYLE ---
                TurtleOp::RandomHue => {
                    pass.turtle.color.hue = rng.gen_range(0.0..360.0);
                    pass.emit_color();
                }
                TurtleOp::ShiftHue(degrees) => {
                    pass.turtle.color.shift_hue(degrees);
                    pass.emit_color();
                }
                TurtleOp::RandomSaturation => {
                    pass.turtle.color.saturation = rng.gen_range(0.0..1.0);
                    pass.emit_color();
                }
                TurtleOp::RandomOpacity => {
                    pass.turtle.color.opacity = rng.gen_range(0.0..1.0);
                    pass.emit_color();
                }
                TurtleOp::SetWidth(width) => {
                    pass.turtle.width = width;
                    pass.emit(Primitive::SetLineWidth(width));
                }
                TurtleOp::GrowStep => pass.turtle.step_length += 1.0,
                TurtleOp::ShrinkStep => {
                    // The step length must stay positive.
                    if pass.turtle.step_length > 1.0 {
                        pass.turtle.step_length -= 1.0;
                    }
                }

                // --- SHAPES ---
                TurtleOp::Circle => {
                    let center = pass.turtle.position;
                    let radius = pass.turtle.step_length / 4.0;
                    pass.emit(Primitive::Circle {
                        center,
                        shape: Circle::new(radius),
                    });
                }
                TurtleOp::Square => {
                    let center = pass.turtle.position;
                    let side = pass.turtle.step_length / 4.0;
                    pass.emit(Primitive::Rectangle {
                        center,
                        shape: Rectangle::new(side, side),
                    });
                }

                // --- FLOW ---
                TurtleOp::Push => {
                    if !pass.turtle.push() {
                        tracing::trace!(
                            depth = pass.turtle.max_stack_depth,
                            "stack full, dropping push"
                        );
                    }
                }
                TurtleOp::Pop => {
                    if pass.turtle.pop() {
                        pass.cursor_synced = false;
                    }
                }
                TurtleOp::Escape => {
                    let pen_down = pass.turtle.pen_down;
                    escape.on_escape(pass.turtle);
                    pass.cursor_synced = false;
                    match (pen_down, pass.turtle.pen_down) {
                        (true, false) => pass.emit(Primitive::PenUp),
                        (false, true) => pass.emit(Primitive::PenDown),
                        _ => {}
                    }
                }
                TurtleOp::Ignore => {}
            }
        }

        tracing::debug!(
            symbols = processed,
            primitives = pass.emitted,
            "rendered sequence"
        );
        processed
    }
}

/// Per-call bookkeeping for [`TurtleInterpreter::render`].
struct RenderPass<'a, B: DrawingBackend> {
    turtle: &'a mut TurtleState,
    backend: &'a mut B,
    /// Whether the backend's current point equals the turtle's position.
    cursor_synced: bool,
    emitted: usize,
}

impl<B: DrawingBackend> RenderPass<'_, B> {
    fn emit(&mut self, primitive: Primitive) {
        self.emitted += 1;
        self.backend.emit(primitive);
    }

    fn emit_color(&mut self) {
        let color = self.turtle.color;
        self.emit(Primitive::SetPenColor(color));
    }

    fn sync_cursor(&mut self) {
        if !self.cursor_synced {
            let position = self.turtle.position;
            self.emit(Primitive::MoveTo(position));
            self.cursor_synced = true;
        }
    }

    /// Advances the turtle, stroking the segment if the pen is down.
    fn step(&mut self, distance: f32) {
        if self.turtle.pen_down {
            self.sync_cursor();
            let to = self.turtle.advance(distance);
            self.emit(Primitive::LineTo(to));
        } else {
            self.turtle.advance(distance);
            self.cursor_synced = false;
        }
    }
}

//! Turtle state and operations for 2D fractal drawing.

use crate::error::LSystemError;
use crate::interpreter::RenderConfig;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pen colour as hue (degrees, `[0, 360)`), saturation and opacity (both `[0, 1]`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PenColor {
    pub hue: f32,
    pub saturation: f32,
    pub opacity: f32,
}

impl Default for PenColor {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            opacity: 1.0,
        }
    }
}

impl PenColor {
    /// Adds `degrees` to the hue, wrapping into `[0, 360)`.
    pub fn shift_hue(&mut self, degrees: f32) {
        self.hue = wrap_degrees(self.hue + degrees);
    }
}

/// Wraps an angle into `[0, 360)`.
///
/// `rem_euclid` alone rounds tiny negative angles up to exactly `360.0` in `f32`.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// The part of the turtle saved by push and restored by pop.
///
/// Colour, width and step length are not saved.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedPose {
    pub position: Vec2,
    pub heading: f32,
}

/// The state of the drawing turtle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the pen.
    pub position: Vec2,

    /// Current heading in degrees. `0` points along +X; positive turns are counter-clockwise.
    pub heading: f32,

    pub color: PenColor,

    /// Stroke width for subsequent segments.
    pub width: f32,

    /// Length of a full forward step. Changed by grow/shrink.
    pub step_length: f32,

    /// Angle in degrees used by `+` and `-`. Random-turn overwrites it for the rest of the pass.
    pub turn_angle: f32,

    /// Whether forward steps draw.
    pub pen_down: bool,

    /// Saved poses, most recent last.
    pub stack: Vec<SavedPose>,

    /// Pushes beyond this depth are dropped.
    pub max_stack_depth: usize,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
            color: PenColor::default(),
            width: 1.0,
            step_length: 10.0,
            turn_angle: 90.0,
            pen_down: true,
            stack: Vec::new(),
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
        }
    }
}

impl TurtleState {
    /// Builds the initial turtle for a render pass, rejecting invalid parameters.
    pub fn new(config: &RenderConfig) -> Result<Self, LSystemError> {
        config.validate()?;
        Ok(Self {
            position: config.origin,
            heading: config.heading,
            color: config.color,
            width: config.width,
            step_length: config.step_length,
            turn_angle: config.turn_angle,
            pen_down: true,
            stack: Vec::new(),
            max_stack_depth: config.max_stack_depth,
        })
    }

    /// Unit vector along the current heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading.to_radians())
    }

    /// Rotates the heading by `degrees`, keeping it in `[0, 360)`.
    pub fn turn(&mut self, degrees: f32) {
        self.heading = wrap_degrees(self.heading + degrees);
    }

    /// Moves `distance` along the heading and returns the new position.
    pub fn advance(&mut self, distance: f32) -> Vec2 {
        self.position += self.direction() * distance;
        self.position
    }

    pub fn pose(&self) -> SavedPose {
        SavedPose {
            position: self.position,
            heading: self.heading,
        }
    }

    /// Saves position and heading. Returns `false` if the stack is already
    /// `max_stack_depth` deep.
    pub fn push(&mut self) -> bool {
        if self.stack.len() >= self.max_stack_depth {
            return false;
        }
        self.stack.push(self.pose());
        true
    }

    /// Restores the last saved pose. An empty stack leaves the turtle untouched.
    pub fn pop(&mut self) -> bool {
        match self.stack.pop() {
            Some(pose) => {
                self.position = pose.position;
                self.heading = pose.heading;
                true
            }
            None => false,
        }
    }
}

/// Operations the turtle can perform. Symbols are mapped to these by the interpreter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleOp {
    // --- Movement ---
    /// Step forward by the step length.
    Forward,
    /// Draw a step backwards and end up facing the original heading.
    Backward,
    /// Step forward by half the step length.
    HalfForward,
    /// Turn around and step half the step length. The heading stays reversed.
    HalfBackward,
    PenUp,
    PenDown,

    // --- Rotation ---
    /// Turn by `sign * turn_angle`.
    Turn(f32),
    /// Turn by a fixed number of degrees, ignoring `turn_angle`.
    TurnFixed(f32),
    /// Pick a new `turn_angle` from [`RANDOM_TURN_ANGLES`] and turn by it.
    RandomTurn,

    // --- Pen style ---
    RandomHue,
    /// Add a fixed number of degrees to the hue.
    ShiftHue(f32),
    RandomSaturation,
    RandomOpacity,
    /// Set the stroke width.
    SetWidth(f32),
    GrowStep,
    ShrinkStep,

    // --- Shapes ---
    /// Circle of radius `step_length / 4` at the turtle.
    Circle,
    /// Square of side `step_length / 4` centred on the turtle.
    Square,

    // --- Flow ---
    Push,
    Pop,
    /// Hand the turtle to the caller's escape hook.
    Escape,
    /// No-op: symbol has no drawing meaning.
    Ignore,
}

/// Candidate angles (degrees) for [`TurtleOp::RandomTurn`].
pub const RANDOM_TURN_ANGLES: [f32; 5] = [10.0, 15.0, 30.0, 45.0, 60.0];

/// Stack depth used when no [`RenderConfig`] sets one.
pub const DEFAULT_MAX_STACK_DEPTH: usize = 4096;

/// Hue increment (degrees) of the standard hue-shift symbol.
pub const HUE_STEP: f32 = 5.0;

/// Fixed turn (degrees) of the standard `@` / `&` symbols.
pub const FINE_TURN: f32 = 5.0;

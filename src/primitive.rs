//! Drawing primitives emitted by the interpreter and the backend seam that receives them.

use crate::turtle::PenColor;
use bevy_math::Rect;
use bevy_math::primitives::{Circle, Rectangle};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One drawing command in the order the turtle produced it.
///
/// `LineTo` continues from the backend's current point, which is the target of the
/// last `MoveTo` or `LineTo`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Move the current point without drawing.
    MoveTo(Vec2),
    /// Stroke a segment from the current point.
    LineTo(Vec2),
    SetLineWidth(f32),
    SetPenColor(PenColor),
    /// A circle centred at `center`.
    Circle { center: Vec2, shape: Circle },
    /// An axis-aligned rectangle centred at `center`.
    Rectangle { center: Vec2, shape: Rectangle },
    PenUp,
    PenDown,
}

/// Receives the primitive stream. Rasterizing, file encoding and previews live behind this.
pub trait DrawingBackend {
    fn emit(&mut self, primitive: Primitive);
}

impl DrawingBackend for Vec<Primitive> {
    fn emit(&mut self, primitive: Primitive) {
        self.push(primitive);
    }
}

/// A backend that records every primitive, for tests or for replaying into another backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Drawing {
    pub primitives: Vec<Primitive>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of stroked segments.
    pub fn line_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::LineTo(_)))
            .count()
    }

    /// Sends every recorded primitive to `backend`, in order.
    pub fn replay(&self, backend: &mut impl DrawingBackend) {
        for primitive in &self.primitives {
            backend.emit(*primitive);
        }
    }

    /// Axis-aligned extents of every point and shape in the drawing.
    ///
    /// Returns `None` for a drawing with no positional primitives. Backends use this to
    /// fit the image to the canvas.
    pub fn bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        let mut include = |rect: Rect| {
            bounds = Some(match bounds {
                Some(b) => b.union(rect),
                None => rect,
            });
        };

        for primitive in &self.primitives {
            match *primitive {
                Primitive::MoveTo(p) | Primitive::LineTo(p) => include(Rect::from_corners(p, p)),
                Primitive::Circle { center, shape } => {
                    include(Rect::from_center_half_size(center, Vec2::splat(shape.radius)));
                }
                Primitive::Rectangle { center, shape } => {
                    include(Rect::from_center_half_size(center, shape.half_size));
                }
                Primitive::SetLineWidth(_)
                | Primitive::SetPenColor(_)
                | Primitive::PenUp
                | Primitive::PenDown => {}
            }
        }
        bounds
    }
}

impl DrawingBackend for Drawing {
    fn emit(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}

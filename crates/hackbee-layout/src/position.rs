//! 2D positions and the positionable capability.

use serde::{Deserialize, Serialize};

/// A point on the layout canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Anything that carries a replaceable [`Position`].
pub trait Positioned {
    /// Current position.
    fn position(&self) -> Position;

    /// Replace the position in place.
    fn set_position(&mut self, position: Position);

    /// Return `self` with its position replaced.
    fn with_position(mut self, position: Position) -> Self
    where
        Self: Sized,
    {
        self.set_position(position);
        self
    }
}

/// Generic carrier pairing arbitrary data with a position.
///
/// On the wire the data's fields sit next to `position`:
/// `{"position": {"x": 0, "y": 0}, "id": 1}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode<D> {
    #[serde(default)]
    pub position: Position,
    #[serde(flatten)]
    pub data: D,
}

impl<D> PositionedNode<D> {
    /// Wrap `data` at the origin.
    pub fn new(data: D) -> Self {
        Self {
            position: Position::default(),
            data,
        }
    }
}

impl<D> Positioned for PositionedNode<D> {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

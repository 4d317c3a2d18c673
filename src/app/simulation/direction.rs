//! Drive direction of the rotor shaft, applied as the sign of the
//! angular velocity.

use strum_macros::EnumIter;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, EnumIter)]
pub enum Direction {
    Clockwise,
    Anticlockwise,
}

impl Direction {
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::Anticlockwise => -1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Clockwise => "Clockwise",
            Direction::Anticlockwise => "Anticlockwise",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Clockwise
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

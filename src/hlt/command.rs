use crate::hlt::direction::Direction;
use crate::hlt::position::Position;

/// One order for one of my squares.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub position: Position,
    pub direction: Direction,
}

impl Move {
    pub fn new(position: Position, direction: Direction) -> Move {
        Move {
            position,
            direction,
        }
    }

    /// `x y d` with `d` in the environment's numbering.
    pub fn encode(&self) -> String {
        format!(
            "{} {} {}",
            self.position.x,
            self.position.y,
            self.direction.to_wire()
        )
    }
}

pub fn encode_frame(moves: &[Move]) -> String {
    moves.iter().map(Move::encode).collect::<Vec<String>>().join(" ")
}

use crate::hlt::position::Position;
use crate::hlt::{PlayerId, ENVIRONMENT_ID};

/// One board square for the current frame.
///
/// Deliberately not `PartialEq`: two snapshots of the same coordinate are the
/// same square. Compare `position` when identity matters.
#[derive(Clone, Debug)]
pub struct Cell {
    pub position: Position,
    pub owner: PlayerId,
    pub strength: usize,
    pub production: usize,
}

impl Cell {
    pub fn is_mine(&self, me: PlayerId) -> bool {
        self.owner == me
    }

    pub fn is_environment(&self) -> bool {
        self.owner == ENVIRONMENT_ID
    }

    pub fn is_other_player(&self, me: PlayerId) -> bool {
        !self.is_environment() && !self.is_mine(me)
    }

    /// Neutral square emptied by a fight this frame.
    pub fn is_combat(&self) -> bool {
        self.is_environment() && self.strength == 0
    }
}

use crate::hlt::direction::Direction;

/// Grid coordinate. This is the identity of a cell: maps, sets and the
/// propagation markers are all keyed by position, never by cell contents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Raw offset, not wrapped. Use `GameMap::normalize` before indexing.
    pub fn directional_offset(&self, d: Direction) -> Position {
        let (dx, dy) = d.offset();

        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn get_surrounding_cardinals(&self) -> Vec<Position> {
        Direction::get_all_cardinals()
            .into_iter()
            .map(|d| self.directional_offset(d))
            .collect()
    }
}

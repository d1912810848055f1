/// Internal direction enumeration. The discriminant is the neighbor index:
/// `GameMap::neighbors` lists cardinals in exactly this order, so the
/// position of a neighbor in that list is the direction that reaches it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    Still = 4,
}

const ALL: [Direction; 5] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::Still,
];

impl Direction {
    pub fn get_all_cardinals() -> Vec<Direction> {
        vec![
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::Still => (0, 0),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Direction {
        match ALL.get(index) {
            Some(d) => *d,
            None => panic!("direction index {} out of range", index),
        }
    }

    /// Environment numbering: Still=0, North=1, East=2, South=3, West=4.
    pub fn to_wire(self) -> usize {
        (self.index() + 1) % 5
    }

    pub fn from_wire(code: usize) -> Direction {
        assert!(code < 5, "wire direction {} out of range", code);
        Direction::from_index((code + 4) % 5)
    }
}

use crate::hlt::game_map::GameMap;
use crate::hlt::position::Position;
use std::fmt;

/// Per-square scalar potential for one turn. Every square starts at the
/// `unreached` sentinel; builders lower values while propagating.
pub struct Field {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    unreached: usize,
    values: Vec<usize>,
}

impl Field {
    pub fn new(name: &'static str, map: &GameMap, unreached: usize) -> Field {
        Field {
            name,
            width: map.width,
            height: map.height,
            unreached,
            values: vec![unreached; map.cell_count()],
        }
    }

    fn index(&self, position: &Position) -> usize {
        let width = self.width as i32;
        let height = self.height as i32;
        let x = ((position.x % width) + width) % width;
        let y = ((position.y % height) + height) % height;
        y as usize * self.width + x as usize
    }

    pub fn at_position(&self, position: &Position) -> usize {
        self.values[self.index(position)]
    }

    pub fn set(&mut self, position: &Position, value: usize) {
        let index = self.index(position);
        self.values[index] = value.min(self.unreached);
    }

    pub fn is_reached(&self, position: &Position) -> bool {
        self.at_position(position) < self.unreached
    }

    pub fn unreached(&self) -> usize {
        self.unreached
    }
}

fn cell_text(value: impl fmt::Display) -> String {
    let text = value.to_string();
    let clipped: String = text.chars().take(3).collect();
    format!("{:<4}", clipped)
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header: Vec<String> = (0..self.width).map(|x| cell_text(x)).collect();
        writeln!(f, "{}", self.name)?;
        writeln!(f, "     {}", header.join(" "))?;
        for y in 0..self.height {
            let row: Vec<String> = self.values[y * self.width..(y + 1) * self.width]
                .iter()
                .map(|v| cell_text(*v))
                .collect();
            writeln!(f, "{}{} {}", cell_text(y), row.join(" "), y)?;
        }
        write!(f, "     {}", header.join(" "))
    }
}

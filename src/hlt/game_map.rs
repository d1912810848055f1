use crate::hlt::cell::Cell;
use crate::hlt::direction::Direction;
use crate::hlt::error::ProtocolError;
use crate::hlt::position::Position;
use crate::hlt::{PlayerId, ENVIRONMENT_ID};
use std::collections::HashSet;
use std::iter;

/// Toroidal board for the current frame. Cells are stored row-major so a
/// position's linear index doubles as the key for per-turn marker arrays.
pub struct GameMap {
    pub width: usize,
    pub height: usize,
    production: Vec<usize>,
    cells: Vec<Cell>,
}

impl GameMap {
    /// Production is fixed for the whole game; owners and strengths arrive
    /// with every frame through `update_frame`.
    pub fn new(width: usize, height: usize, production: Vec<usize>) -> Result<GameMap, ProtocolError> {
        if width == 0 || height == 0 {
            return Err(ProtocolError::InvalidDimensions(format!("{} {}", width, height)));
        }
        let expected = width * height;
        if production.len() != expected {
            return Err(ProtocolError::ProductionCount {
                expected,
                got: production.len(),
            });
        }

        let cells = production
            .iter()
            .enumerate()
            .map(|(i, &production)| Cell {
                position: Position::new((i % width) as i32, (i / width) as i32),
                owner: ENVIRONMENT_ID,
                strength: 0,
                production,
            })
            .collect();

        Ok(GameMap {
            width,
            height,
            production,
            cells,
        })
    }

    /// Replaces every cell from one frame: `(count, owner)` runs covering the
    /// board row-major, followed by one strength per cell.
    pub fn update_frame(&mut self, tokens: &[usize]) -> Result<(), ProtocolError> {
        let expected = self.width * self.height;
        let mut owners: Vec<usize> = Vec::with_capacity(expected);
        let mut i = 0;

        while owners.len() < expected {
            if i + 1 >= tokens.len() {
                return Err(ProtocolError::OwnerCount {
                    expected,
                    got: owners.len(),
                });
            }
            let (count, owner) = (tokens[i], tokens[i + 1]);
            i += 2;
            if owners.len() + count > expected {
                return Err(ProtocolError::OwnerCount {
                    expected,
                    got: owners.len() + count,
                });
            }
            owners.extend(iter::repeat(owner).take(count));
        }

        let strengths = &tokens[i..];
        if strengths.len() != expected {
            return Err(ProtocolError::StrengthCount {
                expected,
                got: strengths.len(),
            });
        }

        let width = self.width;
        self.cells = (0..expected)
            .map(|idx| Cell {
                position: Position::new((idx % width) as i32, (idx / width) as i32),
                owner: PlayerId(owners[idx]),
                strength: strengths[idx],
                production: self.production[idx],
            })
            .collect();

        Ok(())
    }

    pub fn normalize(&self, position: &Position) -> Position {
        let width = self.width as i32;
        let height = self.height as i32;
        let x = ((position.x % width) + width) % width;
        let y = ((position.y % height) + height) % height;
        Position { x, y }
    }

    pub fn index(&self, position: &Position) -> usize {
        let normalized = self.normalize(position);
        normalized.y as usize * self.width + normalized.x as usize
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn at_position(&self, position: &Position) -> &Cell {
        &self.cells[self.index(position)]
    }

    pub fn at_index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// For `n == 1` the four cardinals in North, East, South, West order (and
    /// the cell itself last when `include_self`). For larger `n`, every
    /// offset in the Manhattan ball of radius `n`, rows first. Wrapped offsets
    /// landing on the same square are not deduplicated.
    pub fn neighbors(&self, position: &Position, n: usize, include_self: bool) -> Vec<&Cell> {
        assert!(n > 0, "neighbor radius must be positive");

        let offsets: Vec<(i32, i32)> = if n == 1 {
            let mut combos: Vec<(i32, i32)> = Direction::get_all_cardinals()
                .into_iter()
                .map(|d| d.offset())
                .collect();
            combos.push(Direction::Still.offset());
            combos
        } else {
            let n = n as i32;
            let mut combos = Vec::new();
            for dy in -n..=n {
                for dx in -n..=n {
                    if dx.abs() + dy.abs() <= n {
                        combos.push((dx, dy));
                    }
                }
            }
            combos
        };

        offsets
            .into_iter()
            .filter(|&(dx, dy)| include_self || dx != 0 || dy != 0)
            .map(|(dx, dy)| self.at_position(&Position::new(position.x + dx, position.y + dy)))
            .collect()
    }

    /// The four cardinal neighbors; the slot index is the `Direction` index.
    pub fn cardinals(&self, position: &Position) -> [&Cell; 4] {
        [
            self.get_target(position, Direction::North),
            self.get_target(position, Direction::East),
            self.get_target(position, Direction::South),
            self.get_target(position, Direction::West),
        ]
    }

    pub fn get_target(&self, position: &Position, direction: Direction) -> &Cell {
        self.at_position(&position.directional_offset(direction))
    }

    /// Manhattan distance on the torus.
    pub fn distance(&self, a: &Position, b: &Position) -> usize {
        let a = self.normalize(a);
        let b = self.normalize(b);
        let (width, height) = (self.width as i32, self.height as i32);

        let dx = (a.x - b.x).abs().min(a.x + width - b.x).min(b.x + width - a.x);
        let dy = (a.y - b.y).abs().min(a.y + height - b.y).min(b.y + height - a.y);

        (dx + dy) as usize
    }

    /// Mine, touching something that is not.
    pub fn is_inner_border(&self, cell: &Cell, me: PlayerId) -> bool {
        cell.is_mine(me) && self.cardinals(&cell.position).iter().any(|n| !n.is_mine(me))
    }

    /// Not mine, touching something that is.
    pub fn is_outer_border(&self, cell: &Cell, me: PlayerId) -> bool {
        !cell.is_mine(me) && self.cardinals(&cell.position).iter().any(|n| n.is_mine(me))
    }

    /// Distinct non-environment owners on the board.
    pub fn player_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| !c.is_environment())
            .map(|c| c.owner)
            .collect::<HashSet<PlayerId>>()
            .len()
    }

    #[cfg(test)]
    pub fn from_grid(
        width: usize,
        height: usize,
        owners: &[usize],
        strengths: &[usize],
        production: &[usize],
    ) -> GameMap {
        let mut map = GameMap::new(width, height, production.to_vec()).unwrap();
        let mut tokens = Vec::new();
        for &owner in owners {
            tokens.push(1);
            tokens.push(owner);
        }
        tokens.extend_from_slice(strengths);
        map.update_frame(&tokens).unwrap();
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn random_map(rng: &mut SmallRng) -> GameMap {
        let width = rng.gen_range(3..12);
        let height = rng.gen_range(3..12);
        let n = width * height;
        let owners: Vec<usize> = (0..n).map(|_| rng.gen_range(0..3)).collect();
        let strengths: Vec<usize> = (0..n).map(|_| rng.gen_range(0..256)).collect();
        let production: Vec<usize> = (0..n).map(|_| rng.gen_range(0..16)).collect();
        GameMap::from_grid(width, height, &owners, &strengths, &production)
    }

    #[test]
    fn frame_decodes_run_lengths_row_major() {
        let mut map = GameMap::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        map.update_frame(&[2, 1, 3, 0, 1, 2, 10, 11, 12, 13, 14, 15])
            .unwrap();

        let owners: Vec<usize> = map.cells().map(|c| c.owner.0).collect();
        assert_eq!(owners, vec![1, 1, 0, 0, 0, 2]);
        let c = map.at_position(&Position::new(2, 1));
        assert_eq!((c.strength, c.production), (15, 6));
    }

    #[test]
    fn frame_with_short_owner_runs_is_rejected() {
        let mut map = GameMap::new(2, 2, vec![0; 4]).unwrap();
        match map.update_frame(&[3, 1]) {
            Err(ProtocolError::OwnerCount { expected: 4, got: 3 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn frame_with_overshooting_owner_runs_is_rejected() {
        let mut map = GameMap::new(2, 2, vec![0; 4]).unwrap();
        match map.update_frame(&[3, 1, 2, 0, 1, 1, 1, 1]) {
            Err(ProtocolError::OwnerCount { expected: 4, got: 5 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn frame_with_wrong_strength_count_is_rejected() {
        let mut map = GameMap::new(2, 2, vec![0; 4]).unwrap();
        match map.update_frame(&[4, 1, 9, 9, 9]) {
            Err(ProtocolError::StrengthCount { expected: 4, got: 3 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn production_must_cover_board() {
        assert!(GameMap::new(3, 3, vec![1; 8]).is_err());
        assert!(GameMap::new(0, 3, vec![]).is_err());
    }

    #[test]
    fn cardinal_neighbors_wrap_in_fixed_order() {
        let map = GameMap::from_grid(3, 3, &[0; 9], &[0; 9], &[0; 9]);
        let around: Vec<Position> = map
            .neighbors(&Position::new(0, 0), 1, false)
            .iter()
            .map(|c| c.position)
            .collect();
        assert_eq!(
            around,
            vec![
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(2, 0),
            ]
        );

        let with_self = map.neighbors(&Position::new(0, 0), 1, true);
        assert_eq!(with_self.len(), 5);
        assert_eq!(with_self[4].position, Position::new(0, 0));
    }

    #[test]
    fn radius_two_ball() {
        let map = GameMap::from_grid(7, 7, &[0; 49], &[0; 49], &[0; 49]);
        let centre = Position::new(3, 3);
        let ball = map.neighbors(&centre, 2, false);
        assert_eq!(ball.len(), 12);
        assert!(ball.iter().all(|c| map.distance(&c.position, &centre) <= 2));
        assert_eq!(map.neighbors(&centre, 2, true).len(), 13);
    }

    #[test]
    #[should_panic]
    fn zero_radius_is_a_contract_violation() {
        let map = GameMap::from_grid(3, 3, &[0; 9], &[0; 9], &[0; 9]);
        map.neighbors(&Position::new(1, 1), 0, false);
    }

    #[test]
    fn distance_properties_on_random_boards() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let map = random_map(&mut rng);
            let bound = map.width / 2 + map.height / 2;
            for a in map.cells() {
                assert_eq!(map.distance(&a.position, &a.position), 0);
                for b in map.cells() {
                    let d = map.distance(&a.position, &b.position);
                    assert_eq!(d, map.distance(&b.position, &a.position));
                    assert!(d <= bound);
                    if a.position != b.position {
                        assert!(d > 0);
                    }
                }
            }
        }
    }

    #[test]
    fn neighbor_index_matches_direction() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..20 {
            let map = random_map(&mut rng);
            for cell in map.cells() {
                let around = map.neighbors(&cell.position, 1, false);
                assert_eq!(around.len(), 4);
                let distinct: HashSet<Position> = around.iter().map(|c| c.position).collect();
                assert_eq!(distinct.len(), 4);
                for (i, n) in around.iter().enumerate() {
                    let target = map.get_target(&cell.position, Direction::from_index(i));
                    assert_eq!(target.position, n.position);
                    assert_eq!(map.distance(&cell.position, &n.position), 1);
                }
                assert_eq!(
                    map.get_target(&cell.position, Direction::Still).position,
                    cell.position
                );
            }
        }
    }

    #[test]
    fn border_predicates() {
        // 1 1 0
        // 1 1 2
        // 1 1 1
        let map = GameMap::from_grid(3, 3, &[1, 1, 0, 1, 1, 2, 1, 1, 1], &[1; 9], &[1; 9]);
        let me = PlayerId(1);
        let inner: Vec<bool> = map.cells().map(|c| map.is_inner_border(c, me)).collect();
        assert_eq!(inner, vec![true, true, false, true, true, false, false, false, true]);
        assert!(map.is_outer_border(map.at_position(&Position::new(2, 0)), me));
        assert!(!map.is_outer_border(map.at_position(&Position::new(0, 0)), me));
        assert_eq!(map.player_count(), 2);
    }
}

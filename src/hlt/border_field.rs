//! Cost for each of my squares to reach the productive edge of my territory.

use crate::hlt::cell::Cell;
use crate::hlt::field::Field;
use crate::hlt::game_map::GameMap;
use crate::hlt::position::Position;
use crate::hlt::propagation::{bfs, ClosedSet};
use crate::hlt::PlayerId;

pub fn build(map: &GameMap, me: PlayerId, unreached: usize) -> Field {
    let mut field = Field::new("cells_to_border", map, unreached);
    propagate(map, me, &mut field);
    field
}

/// Total production of the neutral squares around `cell`.
pub fn neutral_production(map: &GameMap, cell: &Cell) -> usize {
    map.cardinals(&cell.position)
        .iter()
        .filter(|n| n.is_environment())
        .map(|n| n.production)
        .sum()
}

/// Inner border square with something worth taking next to it.
pub fn is_productive_edge(map: &GameMap, cell: &Cell, me: PlayerId) -> bool {
    map.is_inner_border(cell, me)
        && map
            .cardinals(&cell.position)
            .iter()
            .any(|n| n.is_environment() && n.production > 0)
}

/// Inner border squares, least neutral production first. The sort is stable
/// so equal squares keep row-major order.
fn seeds(map: &GameMap, me: PlayerId) -> Vec<Position> {
    let mut seeds: Vec<(Position, usize)> = map
        .cells()
        .filter(|c| map.is_inner_border(c, me))
        .map(|c| (c.position, neutral_production(map, c)))
        .collect();
    seeds.sort_by_key(|&(_, production)| production);
    seeds.into_iter().map(|(position, _)| position).collect()
}

fn propagate(map: &GameMap, me: PlayerId, field: &mut Field) -> ClosedSet {
    bfs(map, &seeds(map, me), |cell, closed| {
        let around = map.cardinals(&cell.position);

        let value = if is_productive_edge(map, cell, me) {
            0
        } else {
            let nearest = around
                .iter()
                .filter(|n| n.is_mine(me) && closed.contains(n))
                .map(|n| field.at_position(&n.position))
                .min();
            let current = field.at_position(&cell.position);
            match nearest {
                Some(nearest) => current.min((1 + cell.production).saturating_add(nearest)),
                None => current,
            }
        };
        field.set(&cell.position, value);

        around
            .iter()
            .filter(|n| n.is_mine(me))
            .map(|n| n.position)
            .collect::<Vec<Position>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashMap;

    const ME: PlayerId = PlayerId(1);

    #[test]
    fn interior_counts_production_back_to_the_edge() {
        // column 0 and 4 neutral with production 3, columns 1..=3 mine
        let width = 5;
        let height = 3;
        let mut owners = Vec::new();
        let mut production = Vec::new();
        for _ in 0..height {
            owners.extend_from_slice(&[0, 1, 1, 1, 0]);
            production.extend_from_slice(&[3, 2, 2, 2, 3]);
        }
        let map = GameMap::from_grid(width, height, &owners, &vec![1; 15], &production);
        let field = build(&map, ME, 9999);

        for y in 0..3 {
            assert_eq!(field.at_position(&Position::new(1, y)), 0);
            assert_eq!(field.at_position(&Position::new(3, y)), 0);
            assert_eq!(field.at_position(&Position::new(2, y)), 3);
            assert_eq!(field.at_position(&Position::new(0, y)), 9999);
        }
    }

    #[test]
    fn barren_border_never_becomes_a_zero_seed() {
        // 3x3 all mine except (0,0), a neutral square without production
        let mut owners = vec![1; 9];
        owners[0] = 0;
        let mut production = vec![1; 9];
        production[0] = 0;
        let map = GameMap::from_grid(3, 3, &owners, &vec![1; 9], &production);
        let field = build(&map, ME, 9999);

        for cell in map.cells().filter(|c| c.is_mine(ME)) {
            assert_ne!(field.at_position(&cell.position), 0);
        }
    }

    #[test]
    fn seeds_are_ordered_by_neutral_production() {
        // (0,0) neutral prod 5, (2,0) neutral prod 1, rest mine
        let owners = [0, 1, 0, 1, 1, 1, 1, 1, 1];
        let production = [5, 0, 1, 0, 0, 0, 0, 0, 0];
        let map = GameMap::from_grid(3, 3, &owners, &[1; 9], &production);
        let order = seeds(&map, ME);
        let sums: Vec<usize> = order
            .iter()
            .map(|p| neutral_production(&map, map.at_position(p)))
            .collect();
        let mut sorted = sums.clone();
        sorted.sort();
        assert_eq!(sums, sorted);
        assert_eq!(order.len(), 5);
    }

    #[test]
    fn invariants_hold_on_random_boards() {
        let mut rng = SmallRng::seed_from_u64(19);
        for _ in 0..30 {
            let width = rng.gen_range(3..10);
            let height = rng.gen_range(3..10);
            let n = width * height;
            let owners: Vec<usize> = (0..n).map(|_| rng.gen_range(0..3)).collect();
            let production: Vec<usize> = (0..n).map(|_| rng.gen_range(0..4)).collect();
            let map = GameMap::from_grid(width, height, &owners, &vec![1; n], &production);

            let mut field = Field::new("t", &map, 9999);
            let closed = propagate(&map, ME, &mut field);

            let rank: HashMap<Position, usize> = closed
                .order()
                .iter()
                .enumerate()
                .map(|(i, p)| (*p, i))
                .collect();

            for cell in map.cells() {
                let value = field.at_position(&cell.position);
                if !cell.is_mine(ME) {
                    assert_eq!(value, 9999);
                    assert!(!rank.contains_key(&cell.position));
                    continue;
                }
                if is_productive_edge(&map, cell, ME) {
                    assert_eq!(value, 0);
                    continue;
                }
                let Some(&my_rank) = rank.get(&cell.position) else {
                    assert_eq!(value, 9999);
                    continue;
                };
                let earlier = map
                    .cardinals(&cell.position)
                    .iter()
                    .filter(|n| n.is_mine(ME))
                    .filter_map(|n| rank.get(&n.position).filter(|&&r| r < my_rank).map(|_| n))
                    .map(|n| field.at_position(&n.position))
                    .min();
                let expected = match earlier {
                    Some(m) => (1 + cell.production + m).min(9999),
                    None => 9999,
                };
                assert_eq!(value, expected, "at {:?}", cell.position);
            }
        }
    }
}

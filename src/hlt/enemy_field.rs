//! Cost for each passable square to reach the nearest opponent square.

use crate::hlt::cell::Cell;
use crate::hlt::field::Field;
use crate::hlt::game_map::GameMap;
use crate::hlt::position::Position;
use crate::hlt::propagation::{bfs, ClosedSet};
use crate::hlt::PlayerId;

pub fn build(map: &GameMap, me: PlayerId, unreached: usize) -> Field {
    let mut field = Field::new("cells_to_enemy", map, unreached);
    propagate(map, me, &mut field);
    field
}

/// Neutral square still holding strength: entering it means a fight the
/// field does not model, so propagation never queues it.
pub fn is_impassable(cell: &Cell) -> bool {
    cell.is_environment() && !cell.is_combat()
}

fn propagate(map: &GameMap, me: PlayerId, field: &mut Field) -> ClosedSet {
    let seeds: Vec<Position> = map
        .cells()
        .filter(|c| c.is_other_player(me))
        .map(|c| c.position)
        .collect();

    bfs(map, &seeds, |cell, closed| {
        let around = map.cardinals(&cell.position);

        let value = if cell.is_other_player(me) {
            0
        } else {
            let nearest = around
                .iter()
                .filter(|n| closed.contains(n))
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
            .filter(|n| !is_impassable(n))
            .map(|n| n.position)
            .collect::<Vec<Position>>()
    })
}

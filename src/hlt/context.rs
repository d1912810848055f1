use crate::hlt::border_field;
use crate::hlt::cell::Cell;
use crate::hlt::constants::Constants;
use crate::hlt::enemy_field;
use crate::hlt::field::Field;
use crate::hlt::game_map::GameMap;
use crate::hlt::PlayerId;

/// Everything the move policy may look at for one turn. Built from scratch
/// each turn and dropped once the moves are sent.
pub struct TurnContext<'a> {
    pub map: &'a GameMap,
    pub me: PlayerId,
    pub border: Field,
    pub enemy: Field,
}

impl<'a> TurnContext<'a> {
    pub fn new(map: &'a GameMap, me: PlayerId, constants: &Constants) -> TurnContext<'a> {
        let border = border_field::build(map, me, constants.unreached);
        let enemy = enemy_field::build(map, me, constants.unreached);

        TurnContext {
            map,
            me,
            border,
            enemy,
        }
    }

    /// My squares, row-major.
    pub fn my_cells(&self) -> impl Iterator<Item = &'a Cell> + 'a {
        let me = self.me;
        self.map.cells().filter(move |c| c.is_mine(me))
    }
}

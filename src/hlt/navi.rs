use crate::hlt::cell::Cell;
use crate::hlt::command::Move;
use crate::hlt::constants::Constants;
use crate::hlt::context::TurnContext;
use crate::hlt::direction::Direction;
use crate::hlt::field::Field;
use crate::hlt::log::Log;

/// Which rule produced a move. Only used for the per-turn tally in the log
/// and by tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reason {
    Idle,
    Attack,
    Grow,
    Advance,
    Reinforce,
    Hold,
}

pub struct Navi {
    pub growth_factor: usize,
}

impl Navi {
    pub fn new(constants: &Constants) -> Navi {
        Navi {
            growth_factor: constants.growth_factor,
        }
    }

    /// One move for every square I own, row-major.
    pub fn plan(&self, ctx: &TurnContext) -> Vec<Move> {
        let mut tally = [0usize; 6];
        let moves: Vec<Move> = ctx
            .my_cells()
            .map(|cell| {
                let (direction, reason) = self.decide(ctx, cell);
                tally[reason as usize] += 1;
                Move::new(cell.position, direction)
            })
            .collect();

        Log::log(&format!(
            "moves {}: idle {} attack {} grow {} advance {} reinforce {} hold {}",
            moves.len(),
            tally[0],
            tally[1],
            tally[2],
            tally[3],
            tally[4],
            tally[5]
        ));

        moves
    }

    /// First rule that applies wins.
    pub fn decide(&self, ctx: &TurnContext, cell: &Cell) -> (Direction, Reason) {
        if cell.strength == 0 {
            return (Direction::Still, Reason::Idle);
        }

        if let Some(direction) = Navi::attack_move(ctx, cell) {
            return (direction, Reason::Attack);
        }

        if cell.strength < cell.production * self.growth_factor {
            return (Direction::Still, Reason::Grow);
        }

        if ctx.enemy.is_reached(&cell.position) {
            return (Navi::downhill(ctx, &ctx.enemy, cell), Reason::Advance);
        }

        if !ctx.map.is_inner_border(cell, ctx.me) {
            return (Navi::downhill(ctx, &ctx.border, cell), Reason::Reinforce);
        }

        (Direction::Still, Reason::Hold)
    }

    /// Best foreign neighbor by `attack_value`; taken only if it is weaker
    /// than `cell` and produces something. Ties keep the earlier direction.
    fn attack_move(ctx: &TurnContext, cell: &Cell) -> Option<Direction> {
        let mut best: Option<(f64, Direction, &Cell)> = None;

        for (i, neighbor) in ctx.map.cardinals(&cell.position).iter().enumerate() {
            if neighbor.is_mine(ctx.me) {
                continue;
            }
            let value = Navi::attack_value(ctx, neighbor);
            let better = match best {
                Some((best_value, _, _)) => value > best_value,
                None => true,
            };
            if better {
                best = Some((value, Direction::from_index(i), *neighbor));
            }
        }

        let (_, direction, target) = best?;
        if target.strength < cell.strength && target.production > 0 {
            Some(direction)
        } else {
            None
        }
    }

    /// Defended neutral squares are rated production per strength. Anything
    /// else (opponents, emptied neutral squares) is rated by the opponent
    /// strength around it, i.e. the damage landing there would spill onto.
    pub fn attack_value(ctx: &TurnContext, target: &Cell) -> f64 {
        if target.is_environment() && target.strength > 0 {
            target.production as f64 / target.strength as f64
        } else {
            ctx.map
                .cardinals(&target.position)
                .iter()
                .filter(|n| n.is_other_player(ctx.me))
                .map(|n| n.strength)
                .sum::<usize>() as f64
        }
    }

    /// Cardinal step to the lowest field value; ties go North, East, South, West.
    fn downhill(ctx: &TurnContext, field: &Field, cell: &Cell) -> Direction {
        let (_, index) = ctx
            .map
            .cardinals(&cell.position)
            .iter()
            .enumerate()
            .map(|(i, n)| (field.at_position(&n.position), i))
            .min()
            .unwrap_or((field.unreached(), Direction::Still.index()));
        Direction::from_index(index)
    }
}

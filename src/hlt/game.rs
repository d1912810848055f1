use crate::hlt::command::{encode_frame, Move};
use crate::hlt::constants::Constants;
use crate::hlt::context::TurnContext;
use crate::hlt::error::ProtocolError;
use crate::hlt::game_map::GameMap;
use crate::hlt::input::Input;
use crate::hlt::log::Log;
use crate::hlt::navi::Navi;
use crate::hlt::PlayerId;
use std::io::{BufRead, Write};

pub struct Game {
    pub my_id: PlayerId,
    pub map: GameMap,
    pub constants: Constants,
    pub turn_number: usize,
    navi: Navi,
}

impl Game {
    pub fn new<R: BufRead>(input: &mut Input<R>) -> Result<Game, ProtocolError> {
        Game::with_constants(input, Constants::default())
    }

    /// Reads the handshake: player id, `width height`, the production line
    /// and the opening frame.
    pub fn with_constants<R: BufRead>(
        input: &mut Input<R>,
        constants: Constants,
    ) -> Result<Game, ProtocolError> {
        input.read_line("player id")?;
        let my_id = PlayerId(input.next_usize("player id")?);

        input.read_line("board size")?;
        let size = input.rest_of_line("board size")?;
        if size.len() != 2 {
            return Err(ProtocolError::InvalidDimensions(input.line()));
        }
        let (width, height) = (size[0], size[1]);

        input.read_line("production")?;
        let production = input.rest_of_line("production")?;
        let mut map = GameMap::new(width, height, production)?;

        input.read_line("opening frame")?;
        map.update_frame(&input.rest_of_line("opening frame")?)?;

        Log::log(&format!(
            "player {} on a {}x{} board with {} players",
            my_id.0,
            width,
            height,
            map.player_count()
        ));

        let navi = Navi::new(&constants);
        Ok(Game {
            my_id,
            map,
            constants,
            turn_number: 0,
            navi,
        })
    }

    pub fn ready<W: Write>(out: &mut W, name: &str) -> Result<(), ProtocolError> {
        writeln!(out, "{}", name)?;
        out.flush()?;
        Ok(())
    }

    /// Reads the next frame. `Ok(false)` when the environment has closed the
    /// pipe between turns, which is how a game ends.
    pub fn update_frame<R: BufRead>(&mut self, input: &mut Input<R>) -> Result<bool, ProtocolError> {
        if !input.try_read_line()? {
            return Ok(false);
        }
        self.map.update_frame(&input.rest_of_line("frame")?)?;
        self.turn_number += 1;
        Ok(true)
    }

    pub fn play_turn(&self) -> Vec<Move> {
        let ctx = TurnContext::new(&self.map, self.my_id, &self.constants);

        Log::log(&format!(
            "turn {}: {} squares",
            self.turn_number,
            ctx.my_cells().count()
        ));
        Log::log(&ctx.border.to_string());
        Log::log(&ctx.enemy.to_string());

        self.navi.plan(&ctx)
    }

    pub fn end_turn<W: Write>(out: &mut W, moves: &[Move]) -> Result<(), ProtocolError> {
        writeln!(out, "{}", encode_frame(moves))?;
        out.flush()?;
        Ok(())
    }
}

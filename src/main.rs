#[macro_use]
extern crate lazy_static;

use hlt::game::Game;
use hlt::input::Input;
use hlt::log::Log;
use std::io;
use std::time::Instant;

mod hlt;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = Input::new(stdin.lock());
    let mut out = stdout.lock();

    let mut game = match Game::new(&mut input) {
        Ok(game) => game,
        Err(e) => Log::panic(&format!("handshake failed: {}", e)),
    };
    Log::open(game.my_id.0);

    if let Err(e) = Game::ready(&mut out, &game.constants.bot_name) {
        Log::panic(&format!("could not send bot name: {}", e));
    }

    Log::log(&format!(
        "Successfully created bot! My Player ID is {}.",
        game.my_id.0
    ));

    loop {
        let now = Instant::now();
        match game.update_frame(&mut input) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => Log::panic(&format!("turn {}: {}", game.turn_number + 1, e)),
        }

        let moves = game.play_turn();
        if let Err(e) = Game::end_turn(&mut out, &moves) {
            Log::panic(&format!("turn {}: could not send moves: {}", game.turn_number, e));
        }

        Log::log(&format!("seconds: {}", now.elapsed().as_secs_f64()));
    }

    Log::log(&format!("input closed after turn {}", game.turn_number));
    Log::flush();
}

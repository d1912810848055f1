pub mod border_field;
pub mod cell;
pub mod command;
pub mod constants;
pub mod context;
pub mod direction;
pub mod enemy_field;
pub mod error;
pub mod field;
pub mod game;
pub mod game_map;
pub mod input;
pub mod log;
pub mod navi;
pub mod position;
pub mod propagation;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub usize);

/// Owner id of neutral territory.
pub const ENVIRONMENT_ID: PlayerId = PlayerId(0);

/// Tuning knobs. The environment sends no constants of its own in this game,
/// so these are fixed at build time.
#[derive(Clone, Debug)]
pub struct Constants {
    /// Sent once during the handshake.
    pub bot_name: String,
    /// A cell holds still until its strength reaches `growth_factor * production`.
    pub growth_factor: usize,
    /// Field value of a square no propagation reached.
    pub unreached: usize,
}

impl Default for Constants {
    fn default() -> Constants {
        Constants {
            bot_name: String::from("MyRustBot"),
            growth_factor: 5,
            unreached: 9999,
        }
    }
}

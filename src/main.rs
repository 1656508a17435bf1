//! Grid Snake entry point
//!
//! Opens the window and runs the game loop until the player quits.

use grid_snake::SnakeError;
use grid_snake::game;
use grid_snake::platform::{self, FixedRateClock};
use grid_snake::settings::Settings;
use grid_snake::sim::GameState;

fn main() -> Result<(), SnakeError> {
    env_logger::init();
    log::info!("Grid Snake starting...");

    let settings = Settings::load()?;
    let seed = settings.seed.unwrap_or_else(rand::random);

    let (mut input, mut renderer) = platform::open(&settings)?;
    let mut pacer = FixedRateClock::new(settings.speed);
    let mut state = GameState::new(settings.grid(), seed);

    game::run(
        &mut state,
        &mut input,
        &mut renderer,
        &mut pacer,
        &settings.palette,
    )?;

    log::info!("Bye");
    Ok(())
}

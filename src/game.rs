//! Game loop controller
//!
//! Strictly sequential per tick: wait, poll input, advance the simulation,
//! hand the frame to the renderer. Quit is only observed at the top of a
//! tick, never mid-update.

use crate::error::SnakeError;
use crate::platform::{InputSource, Pacer};
use crate::renderer::{Renderer, render_frame};
use crate::settings::Palette;
use crate::sim::{GameState, tick};

/// Run until the input source asks to quit
pub fn run<I, R, P>(
    state: &mut GameState,
    input: &mut I,
    renderer: &mut R,
    pacer: &mut P,
    palette: &Palette,
) -> Result<(), SnakeError>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
    P: Pacer + ?Sized,
{
    log::info!("Game loop started (seed {})", state.seed);

    while state.is_running() {
        pacer.wait_next_tick();

        let report = tick(state, input.poll());
        if report.terminated {
            break;
        }

        render_frame(renderer, &state.frame(), palette)?;
    }

    log::info!(
        "Game loop finished after {} ticks, best length {}",
        state.time_ticks,
        state.best_length
    );
    Ok(())
}

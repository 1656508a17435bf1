//! Rendering
//!
//! The game only ever draws flat colored grid cells. `Renderer` is the seam
//! between the loop and whatever owns the pixels; `render_frame` is the
//! per-tick hand-off.

pub mod canvas;
pub mod window;

pub use canvas::Canvas;
pub use window::PixelsRenderer;

use glam::IVec2;

use crate::error::SnakeError;
use crate::settings::{Palette, Rgb};
use crate::sim::Frame;

/// Render collaborator
pub trait Renderer {
    /// Fill the whole board with one color
    fn clear(&mut self, color: Rgb);

    /// Draw one grid cell, optionally outlined
    fn draw_cell(&mut self, cell: IVec2, fill: Rgb, border: Option<Rgb>);

    /// Flush the frame to the screen
    fn present(&mut self) -> Result<(), SnakeError>;
}

/// Draw one frame: background, erased tail, snake, food, then present
pub fn render_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    frame: &Frame<'_>,
    palette: &Palette,
) -> Result<(), SnakeError> {
    renderer.clear(palette.background);

    // Erase first so a head that moved into the old tail cell stays visible
    if let Some(cell) = frame.erase {
        renderer.draw_cell(cell, palette.background, None);
    }

    for &cell in frame.snake {
        renderer.draw_cell(cell, palette.snake, Some(palette.border));
    }
    renderer.draw_cell(frame.food, palette.food, Some(palette.border));

    renderer.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(Rgb),
        Cell(IVec2, Rgb, Option<Rgb>),
        Present,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Renderer for Recorder {
        fn clear(&mut self, color: Rgb) {
            self.calls.push(Call::Clear(color));
        }

        fn draw_cell(&mut self, cell: IVec2, fill: Rgb, border: Option<Rgb>) {
            self.calls.push(Call::Cell(cell, fill, border));
        }

        fn present(&mut self) -> Result<(), SnakeError> {
            self.calls.push(Call::Present);
            Ok(())
        }
    }

    #[test]
    fn test_render_frame_order() {
        let palette = Palette::default();
        let snake: VecDeque<IVec2> = [IVec2::new(40, 0), IVec2::new(20, 0)].into_iter().collect();
        let frame = Frame {
            snake: &snake,
            erase: Some(IVec2::new(0, 0)),
            food: IVec2::new(100, 100),
        };

        let mut recorder = Recorder::default();
        render_frame(&mut recorder, &frame, &palette).expect("render");

        assert_eq!(
            recorder.calls,
            vec![
                Call::Clear(palette.background),
                Call::Cell(IVec2::new(0, 0), palette.background, None),
                Call::Cell(IVec2::new(40, 0), palette.snake, Some(palette.border)),
                Call::Cell(IVec2::new(20, 0), palette.snake, Some(palette.border)),
                Call::Cell(IVec2::new(100, 100), palette.food, Some(palette.border)),
                Call::Present,
            ]
        );
    }

    #[test]
    fn test_render_frame_without_erase() {
        let palette = Palette::default();
        let snake: VecDeque<IVec2> = [IVec2::new(40, 0)].into_iter().collect();
        let frame = Frame {
            snake: &snake,
            erase: None,
            food: IVec2::new(0, 0),
        };

        let mut recorder = Recorder::default();
        render_frame(&mut recorder, &frame, &palette).expect("render");
        assert_eq!(recorder.calls.len(), 4);
    }
}

//! Window renderer backed by a `pixels` framebuffer

use glam::IVec2;
use pixels::Pixels;
use winit::window::Window;

use super::{Canvas, Renderer};
use crate::error::SnakeError;
use crate::settings::Rgb;

/// Draws cells into the window's framebuffer and presents via wgpu
pub struct PixelsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
    cell_size: i32,
    // Surface must not outlive the window
    _window: Window,
}

impl PixelsRenderer {
    pub fn new(window: Window, pixels: Pixels, width: u32, height: u32, cell_size: u32) -> Self {
        Self {
            pixels,
            width,
            height,
            cell_size: cell_size as i32,
            _window: window,
        }
    }

    fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(self.pixels.frame_mut(), self.width, self.height)
    }
}

impl Renderer for PixelsRenderer {
    fn clear(&mut self, color: Rgb) {
        self.canvas().clear(color);
    }

    fn draw_cell(&mut self, cell: IVec2, fill: Rgb, border: Option<Rgb>) {
        let cell_size = self.cell_size;
        self.canvas().draw_cell(cell, cell_size, fill, border);
    }

    fn present(&mut self) -> Result<(), SnakeError> {
        self.pixels.render()?;
        Ok(())
    }
}

//! Software rasterizer for flat grid cells over an RGBA8 framebuffer

use glam::IVec2;

use crate::settings::Rgb;

/// Borrowed RGBA8 framebuffer, row-major, `width * height` pixels
pub struct Canvas<'a> {
    pixels: &'a mut [[u8; 4]],
    width: i32,
    height: i32,
}

impl<'a> Canvas<'a> {
    /// Wrap a raw RGBA byte buffer (4 bytes per pixel)
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(frame);
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            pixels,
            width: width as i32,
            height: height as i32,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Fill the whole buffer
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(rgba(color));
    }

    /// Read back one pixel (None if out of bounds)
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| {
            let [r, g, b, _] = self.pixels[i];
            [r, g, b]
        })
    }

    /// Fill an axis-aligned rectangle, clipped to the buffer
    pub fn fill_rect(&mut self, origin: IVec2, size: IVec2, color: Rgb) {
        let x0 = origin.x.max(0);
        let y0 = origin.y.max(0);
        let x1 = (origin.x + size.x).min(self.width);
        let y1 = (origin.y + size.y).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let color = rgba(color);
        for y in y0..y1 {
            let row = (y * self.width) as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    /// 1px rectangle outline
    pub fn stroke_rect(&mut self, origin: IVec2, size: IVec2, color: Rgb) {
        if size.x <= 0 || size.y <= 0 {
            return;
        }
        self.fill_rect(origin, IVec2::new(size.x, 1), color);
        self.fill_rect(origin + IVec2::new(0, size.y - 1), IVec2::new(size.x, 1), color);
        self.fill_rect(origin, IVec2::new(1, size.y), color);
        self.fill_rect(origin + IVec2::new(size.x - 1, 0), IVec2::new(1, size.y), color);
    }

    /// Draw one square cell with an optional outline
    pub fn draw_cell(&mut self, cell: IVec2, cell_size: i32, fill: Rgb, border: Option<Rgb>) {
        let size = IVec2::splat(cell_size);
        self.fill_rect(cell, size, fill);
        if let Some(border) = border {
            self.stroke_rect(cell, size, border);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }
}

#[inline]
fn rgba([r, g, b]: Rgb) -> [u8; 4] {
    [r, g, b, 0xff]
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = [255, 0, 0];
    const CYAN: Rgb = [93, 216, 228];
    const BLACK: Rgb = [0, 0, 0];

    #[test]
    fn test_clear_and_read_back() {
        let mut buf = vec![0u8; 8 * 4 * 4];
        let mut canvas = Canvas::new(&mut buf, 8, 4);
        canvas.clear(RED);
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(7, 3), Some(RED));
        assert_eq!(canvas.pixel(8, 0), None);
        // Alpha is opaque
        assert_eq!(buf[3], 0xff);
    }

    #[test]
    fn test_draw_cell_with_border() {
        let mut buf = vec![0u8; 40 * 40 * 4];
        let mut canvas = Canvas::new(&mut buf, 40, 40);
        canvas.clear(BLACK);
        canvas.draw_cell(IVec2::new(20, 20), 20, RED, Some(CYAN));

        // Outline
        assert_eq!(canvas.pixel(20, 20), Some(CYAN));
        assert_eq!(canvas.pixel(39, 39), Some(CYAN));
        assert_eq!(canvas.pixel(30, 20), Some(CYAN));
        // Interior
        assert_eq!(canvas.pixel(30, 30), Some(RED));
        // Untouched neighbour cell
        assert_eq!(canvas.pixel(10, 10), Some(BLACK));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        let mut canvas = Canvas::new(&mut buf, 10, 10);
        canvas.fill_rect(IVec2::new(-5, 5), IVec2::new(20, 20), RED);
        assert_eq!(canvas.pixel(0, 5), Some(RED));
        assert_eq!(canvas.pixel(9, 9), Some(RED));
        assert_eq!(canvas.pixel(0, 4), Some(BLACK));
    }
}

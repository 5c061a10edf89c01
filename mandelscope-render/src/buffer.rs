use rayon::prelude::*;

use mandelscope_core::Grid;

use crate::colour_map::ColourMap;

/// An RGBA pixel buffer representing a rendered image.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

impl RenderBuffer {
    /// Create a new buffer filled with black (opaque).
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        for chunk in pixels.chunks_exact_mut(4) {
            chunk[3] = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Colour every cell of `grid` with `map`, one row per task.
    ///
    /// The grid's own iteration cap decides what counts as inside, so the
    /// colours always match the data even if the view has moved on.
    pub fn colorize(grid: &Grid, map: &dyn ColourMap) -> Self {
        let mut buf = Self::new(grid.width(), grid.height());
        let max_iterations = grid.max_iterations();
        let width = grid.width() as usize;
        if buf.pixels.is_empty() {
            return buf;
        }
        buf.pixels
            .par_chunks_mut(width * 4)
            .zip(grid.as_slice().par_chunks(width))
            .for_each(|(out, row)| {
                for (px, &n) in out.chunks_exact_mut(4).zip(row) {
                    px.copy_from_slice(&map.map(n, max_iterations).to_rgba());
                }
            });
        buf
    }

    /// RGBA value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[i..i + 4]);
        Some(px)
    }
}

#[cfg(test)]
mod tests {
    use mandelscope_core::{compute, ViewBounds};

    use super::*;
    use crate::colour_map::{BlackWhite, Rainbow, Rgb};

    #[test]
    fn new_buffer_is_black_opaque() {
        let buf = RenderBuffer::new(4, 4);
        assert_eq!(buf.pixels.len(), 4 * 4 * 4);
        for chunk in buf.pixels.chunks_exact(4) {
            assert_eq!(chunk, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn colorize_follows_grid_cells() {
        let bounds = ViewBounds::new(-2.5, 1.0, -1.5, 1.5).unwrap();
        let grid = compute(35, 30, &bounds, 60, 4.0);
        let buf = RenderBuffer::colorize(&grid, &BlackWhite);
        assert_eq!(buf.pixels.len(), 35 * 30 * 4);
        for y in 0..30 {
            for x in 0..35 {
                let n = grid.get(x, y).unwrap();
                let expected = if n == 60 { Rgb::BLACK } else { Rgb::WHITE };
                assert_eq!(buf.pixel(x, y), Some(expected.to_rgba()));
            }
        }
    }

    #[test]
    fn colorize_empty_grid() {
        let grid = compute(0, 3, &ViewBounds::INITIAL, 50, 4.0);
        let buf = RenderBuffer::colorize(&grid, &Rainbow);
        assert!(buf.pixels.is_empty());
        assert_eq!(buf.pixel(0, 0), None);
    }
}

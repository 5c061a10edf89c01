use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::complex::Complex;
use crate::grid::Grid;
use crate::viewport::ViewBounds;

/// Count escape-time iterations for a single point `c`.
///
/// Starting from `z = 0`, the step `z ← z² + c` is applied while fewer than
/// `max_iterations` steps have been taken and `|z|² <= bailout_radius_sq`.
/// The returned count equals `max_iterations` for points that stayed
/// bounded; a point with `|c|² > bailout_radius_sq` escapes with count 1.
#[inline]
pub fn escape_time(c: Complex, max_iterations: u32, bailout_radius_sq: f64) -> u32 {
    let mut z = Complex::ZERO;
    let mut n = 0;
    while n < max_iterations && z.norm_sq() <= bailout_radius_sq {
        z = z.square_add(c);
        n += 1;
    }
    n
}

/// Compute the escape-time grid for `bounds` at `width × height` pixels.
///
/// Pixel `(x, y)` samples the point returned by
/// [`ViewBounds::pixel_to_complex`]. Rows are independent and filled in
/// parallel; the grid is returned only once every row is complete.
/// A zero dimension yields an empty grid.
pub fn compute(
    width: u32,
    height: u32,
    bounds: &ViewBounds,
    max_iterations: u32,
    bailout_radius_sq: f64,
) -> Grid {
    let start = Instant::now();
    let mut data = vec![0u32; width as usize * height as usize];

    if !data.is_empty() {
        data.par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(py, row)| {
                for (px, cell) in row.iter_mut().enumerate() {
                    let c = bounds.pixel_to_complex(px as f64, py as f64, width, height);
                    *cell = escape_time(c, max_iterations, bailout_radius_sq);
                }
            });
    }

    debug!(
        width,
        height,
        max_iterations,
        elapsed_ms = start.elapsed().as_millis(),
        "Computed escape-time grid"
    );
    Grid::from_raw(width, height, max_iterations, data)
}

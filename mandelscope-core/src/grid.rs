/// Per-pixel escape iteration counts for a full frame.
///
/// Row-major, `width × height` cells. A cell equal to
/// [`max_iterations`](Self::max_iterations) means the point never escaped.
/// Grids are produced whole by [`compute`](crate::engine::compute) and never
/// edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    max_iterations: u32,
    data: Vec<u32>,
}

impl Grid {
    pub(crate) fn from_raw(width: u32, height: u32, max_iterations: u32, data: Vec<u32>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            max_iterations,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The iteration cap the grid was computed with.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Iteration count at pixel `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// One row of cells, top row first.
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.data[start..start + w])
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // `chunks_exact(0)` panics; an empty grid simply has no rows.
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Number of cells that reached the iteration cap.
    pub fn bounded_count(&self) -> usize {
        self.data.iter().filter(|&&n| n == self.max_iterations).count()
    }

    /// Cell values as `int[height][width]`.
    pub fn to_nested(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }
}

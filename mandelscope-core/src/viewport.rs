use crate::complex::Complex;
use crate::error::CoreError;

/// Real-axis lower bound of the initial view.
pub const INITIAL_MIN_RE: f64 = -2.0;
/// Real-axis upper bound of the initial view.
pub const INITIAL_MAX_RE: f64 = 0.7;
/// Imaginary-axis lower bound of the initial view.
pub const INITIAL_MIN_IM: f64 = -1.25;
/// Imaginary-axis upper bound of the initial view.
pub const INITIAL_MAX_IM: f64 = 1.25;
pub const INITIAL_MAX_ITERATIONS: u32 = 50;

/// Smallest iteration cap accepted by [`Viewport::with_max_iterations`].
pub const MIN_ITERATIONS: u32 = 10;
/// Largest iteration cap; bounds the cost of a single recomputation.
pub const MAX_ITERATIONS: u32 = 5000;

/// `|z|²` threshold used by the explorer (escape radius 2).
pub const DEFAULT_BAILOUT_RADIUS_SQ: f64 = 4.0;

/// Rectangular region of the complex plane.
///
/// Always satisfies `min_re < max_re` and `min_im < max_im` with finite
/// bounds; the only way to obtain one is through a validating constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl ViewBounds {
    /// The view shown at start-up and after a reset.
    pub const INITIAL: Self = Self {
        min_re: INITIAL_MIN_RE,
        max_re: INITIAL_MAX_RE,
        min_im: INITIAL_MIN_IM,
        max_im: INITIAL_MAX_IM,
    };

    pub fn new(min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> crate::Result<Self> {
        let finite = [min_re, max_re, min_im, max_im].iter().all(|v| v.is_finite());
        // `!(a < b)` also rejects NaN.
        if !finite || !(min_re < max_re) || !(min_im < max_im) {
            return Err(CoreError::InvalidBounds {
                min_re,
                max_re,
                min_im,
                max_im,
            });
        }
        Ok(Self {
            min_re,
            max_re,
            min_im,
            max_im,
        })
    }

    #[inline]
    pub fn min_re(&self) -> f64 {
        self.min_re
    }

    #[inline]
    pub fn max_re(&self) -> f64 {
        self.max_re
    }

    #[inline]
    pub fn min_im(&self) -> f64 {
        self.min_im
    }

    #[inline]
    pub fn max_im(&self) -> f64 {
        self.max_im
    }

    pub fn real_span(&self) -> f64 {
        self.max_re - self.min_re
    }

    pub fn imag_span(&self) -> f64 {
        self.max_im - self.min_im
    }

    /// Map (possibly fractional) pixel coordinates to the complex plane.
    ///
    /// `(0, 0)` is the top-left pixel and maps to `(min_re, min_im)`; the
    /// imaginary part grows with pixel-y.
    #[inline]
    pub fn pixel_to_complex(&self, px: f64, py: f64, width: u32, height: u32) -> Complex {
        Complex::new(
            self.min_re + px * self.real_span() / width as f64,
            self.min_im + py * self.imag_span() / height as f64,
        )
    }

    /// Shift all four bounds by the same delta.
    ///
    /// Fails if the result is non-finite or collapses in `f64` (a huge offset
    /// applied to a very narrow window).
    pub fn translated(&self, d_re: f64, d_im: f64) -> crate::Result<Self> {
        Self::new(
            self.min_re + d_re,
            self.max_re + d_re,
            self.min_im + d_im,
            self.max_im + d_im,
        )
    }

    /// Bounds covered by `rect` when this view fills a
    /// `panel_width × panel_height` panel.
    pub fn zoomed_to(
        &self,
        rect: PixelRect,
        panel_width: u32,
        panel_height: u32,
    ) -> crate::Result<Self> {
        if panel_width == 0 || panel_height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: panel_width,
                height: panel_height,
            });
        }
        let re_per_px = self.real_span() / panel_width as f64;
        let im_per_px = self.imag_span() / panel_height as f64;
        Self::new(
            self.min_re + rect.x as f64 * re_per_px,
            self.min_re + (rect.x as f64 + rect.width as f64) * re_per_px,
            self.min_im + rect.y as f64 * im_per_px,
            self.min_im + (rect.y as f64 + rect.height as f64) * im_per_px,
        )
    }
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Check an iteration cap against `[MIN_ITERATIONS, MAX_ITERATIONS]`.
///
/// Takes `i64` so that negative values read from documents are reported as
/// out of range rather than as parse errors.
pub fn validate_max_iterations(value: i64) -> crate::Result<u32> {
    match u32::try_from(value) {
        Ok(n) if (MIN_ITERATIONS..=MAX_ITERATIONS).contains(&n) => Ok(n),
        _ => Err(CoreError::InvalidIterations {
            value,
            min: MIN_ITERATIONS,
            max: MAX_ITERATIONS,
        }),
    }
}

/// The full set of parameters that determine a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: ViewBounds,
    max_iterations: u32,
    bailout_radius_sq: f64,
}

impl Viewport {
    /// Initial bounds, iteration cap and bailout.
    pub fn initial() -> Self {
        Self {
            bounds: ViewBounds::INITIAL,
            max_iterations: INITIAL_MAX_ITERATIONS,
            bailout_radius_sq: DEFAULT_BAILOUT_RADIUS_SQ,
        }
    }

    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn bailout_radius_sq(&self) -> f64 {
        self.bailout_radius_sq
    }

    /// Return a copy covering `bounds`.
    pub fn with_bounds(self, bounds: ViewBounds) -> Self {
        Self { bounds, ..self }
    }

    /// Return a copy with a validated iteration cap.
    pub fn with_max_iterations(self, max_iterations: u32) -> crate::Result<Self> {
        let max_iterations = validate_max_iterations(i64::from(max_iterations))?;
        Ok(Self {
            max_iterations,
            ..self
        })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::initial()
    }
}

/// Axis-aligned pixel rectangle on the display panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanned by two drag corners, in either order.
    pub fn from_corners(a: (u32, u32), b: (u32, u32)) -> Self {
        Self {
            x: a.0.min(b.0),
            y: a.1.min(b.1),
            width: a.0.abs_diff(b.0),
            height: a.1.abs_diff(b.1),
        }
    }

    /// `true` when the rectangle has no area (a click rather than a drag).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

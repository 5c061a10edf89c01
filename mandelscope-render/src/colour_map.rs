//! Strategies for turning iteration counts into colours.

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert hue / saturation / brightness (each nominally in `0..=1`; the
    /// hue wraps) to RGB, rounding each channel to the nearest byte.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let to_byte = |v: f32| (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8;
        if saturation == 0.0 {
            let v = to_byte(brightness);
            return Self::new(v, v, v);
        }
        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));
        let (r, g, b) = match h as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self::new(to_byte(r), to_byte(g), to_byte(b))
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Maps an escape count to a colour.
///
/// `iterations >= max_iterations` means the point is inside the set.
/// Implementations must cope with `max_iterations == 0`.
pub trait ColourMap: Send + Sync {
    /// Name shown to users and stored in saved documents.
    fn name(&self) -> &'static str;

    fn map(&self, iterations: u32, max_iterations: u32) -> Rgb;
}

/// Escape progress in `0..=1`, or 0 when there is no cap to divide by.
#[inline]
fn escape_ratio(iterations: u32, max_iterations: u32) -> f32 {
    if max_iterations == 0 {
        0.0
    } else {
        iterations as f32 / max_iterations as f32
    }
}

/// Inside black, outside white.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackWhite;

impl ColourMap for BlackWhite {
    fn name(&self) -> &'static str {
        "Black & White"
    }

    fn map(&self, iterations: u32, max_iterations: u32) -> Rgb {
        if iterations >= max_iterations {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

/// Hue sweep from blue (fast escape) towards red (slow escape).
#[derive(Debug, Clone, Copy, Default)]
pub struct Blue;

impl ColourMap for Blue {
    fn name(&self) -> &'static str {
        "Blue"
    }

    fn map(&self, iterations: u32, max_iterations: u32) -> Rgb {
        if iterations >= max_iterations {
            return Rgb::BLACK;
        }
        let ratio = escape_ratio(iterations, max_iterations);
        Rgb::from_hsb(0.66 - 0.66 * ratio, 0.9, 1.0)
    }
}

/// Full hue circle over the escape range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rainbow;

impl ColourMap for Rainbow {
    fn name(&self) -> &'static str {
        "Rainbow"
    }

    fn map(&self, iterations: u32, max_iterations: u32) -> Rgb {
        if iterations >= max_iterations {
            return Rgb::BLACK;
        }
        Rgb::from_hsb(escape_ratio(iterations, max_iterations), 1.0, 1.0)
    }
}

/// All built-in colour maps, default first.
pub fn builtin_colour_maps() -> Vec<Box<dyn ColourMap>> {
    vec![Box::new(BlackWhite), Box::new(Blue), Box::new(Rainbow)]
}

/// Look up a built-in colour map by its [`name`](ColourMap::name).
pub fn colour_map_by_name(name: &str) -> Option<Box<dyn ColourMap>> {
    builtin_colour_maps().into_iter().find(|m| m.name() == name)
}

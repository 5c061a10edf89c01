pub mod buffer;
pub mod colour_map;
pub mod error;
pub mod export;

pub use buffer::RenderBuffer;
pub use colour_map::{
    builtin_colour_maps, colour_map_by_name, BlackWhite, Blue, ColourMap, Rainbow, Rgb,
};
pub use error::RenderError;
pub use export::{export_png, ExportMetadata};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;

//! PNG export with embedded view metadata (tEXt chunks).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use mandelscope_core::Explorer;

use crate::buffer::RenderBuffer;
use crate::error::RenderError;

/// Metadata to embed in an exported PNG as tEXt chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportMetadata {
    pub min_re: f64,
    pub max_re: f64,
    pub min_im: f64,
    pub max_im: f64,
    pub max_iterations: u32,
    pub colour_map: String,
    pub width: u32,
    pub height: u32,
}

impl ExportMetadata {
    /// Describe the explorer's current view.
    pub fn from_explorer(explorer: &Explorer) -> Self {
        let b = explorer.bounds();
        Self {
            min_re: b.min_re(),
            max_re: b.max_re(),
            min_im: b.min_im(),
            max_im: b.max_im(),
            max_iterations: explorer.max_iterations(),
            colour_map: explorer.colour_map_name().to_string(),
            width: explorer.width(),
            height: explorer.height(),
        }
    }

    fn description(&self) -> String {
        format!(
            "Mandelbrot - Real: [{}, {}], Imaginary: [{}, {}], Iterations: {}",
            self.min_re, self.max_re, self.min_im, self.max_im, self.max_iterations,
        )
    }

    fn pairs(&self) -> Vec<(String, String)> {
        vec![
            ("Mandelscope.MinReal".into(), self.min_re.to_string()),
            ("Mandelscope.MaxReal".into(), self.max_re.to_string()),
            ("Mandelscope.MinImag".into(), self.min_im.to_string()),
            ("Mandelscope.MaxImag".into(), self.max_im.to_string()),
            ("Mandelscope.MaxIterations".into(), self.max_iterations.to_string()),
            ("Mandelscope.ColorMap".into(), self.colour_map.clone()),
            ("Mandelscope.Resolution".into(), format!("{}x{}", self.width, self.height)),
        ]
    }
}

/// Write `buffer` to `path` as an RGBA PNG with `metadata` in tEXt chunks.
///
/// Uses the `png` crate directly so the custom chunks are readable by
/// exiftool and most image viewers.
pub fn export_png(
    buffer: &RenderBuffer,
    path: &Path,
    metadata: &ExportMetadata,
) -> crate::Result<()> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(RenderError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    }

    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "mandelscope".to_string())?;
    encoder.add_text_chunk("Description".to_string(), metadata.description())?;
    for (key, value) in metadata.pairs() {
        add_text(&mut encoder, key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.pixels)?;
    png_writer.finish()?;

    debug!(
        width = buffer.width,
        height = buffer.height,
        path = %path.display(),
        "Exported PNG"
    );
    Ok(())
}

/// tEXt only holds Latin-1; anything else (e.g. a colour-map name from a
/// foreign document) goes into a UTF-8 iTXt chunk.
fn add_text<W: Write>(
    encoder: &mut png::Encoder<'_, W>,
    key: String,
    value: String,
) -> Result<(), png::EncodingError> {
    if value.chars().all(|c| u32::from(c) <= 0xFF) {
        encoder.add_text_chunk(key, value)
    } else {
        encoder.add_itxt_chunk(key, value)
    }
}

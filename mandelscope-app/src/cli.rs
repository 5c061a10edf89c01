use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mandelscope", version, about = "Headless Mandelbrot set explorer")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Apply view changes to a fresh explorer, then export and/or save.
    Render(RenderArgs),
    /// Validate a saved document and print its fields.
    Info {
        /// Document to inspect.
        path: PathBuf,
    },
    /// List the available colour maps.
    ColourMaps,
}

/// Steps run in a fixed order: load, view, zoom, pan, iterations, colour map,
/// undo.
#[derive(Debug, Args)]
pub(crate) struct RenderArgs {
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Start from a saved document.
    #[arg(long)]
    pub load: Option<PathBuf>,

    /// Show this region of the complex plane.
    #[arg(
        long,
        num_args = 4,
        value_names = ["MIN_RE", "MAX_RE", "MIN_IM", "MAX_IM"],
        allow_negative_numbers = true
    )]
    pub view: Option<Vec<f64>>,

    /// Zoom into a pixel rectangle of the current view.
    #[arg(long, num_args = 4, value_names = ["X", "Y", "W", "H"])]
    pub zoom: Option<Vec<u32>>,

    /// Translate the view by a complex-plane delta.
    #[arg(long, num_args = 2, value_names = ["D_RE", "D_IM"], allow_negative_numbers = true)]
    pub pan: Option<Vec<f64>>,

    #[arg(long)]
    pub iterations: Option<u32>,

    /// Colour map name, e.g. "Blue".
    #[arg(long)]
    pub colour_map: Option<String>,

    /// Number of steps to undo after everything else.
    #[arg(long, default_value_t = 0)]
    pub undo: u32,

    /// Write the rendered image here (PNG).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the resulting view here (JSON document).
    #[arg(long)]
    pub save: Option<PathBuf>,
}

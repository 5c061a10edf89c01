mod cli;
mod document_store;
mod error;
mod session;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use mandelscope_core::Explorer;
use mandelscope_render::builtin_colour_maps;

use cli::{Cli, Command};
use error::AppError;

/// Load and validate a document, then print it.
fn info_command(path: &std::path::Path) -> Result<(), AppError> {
    let doc = document_store::load(path)?;
    // Applying to a scratch explorer runs the same validation a real load does.
    let mut explorer = Explorer::new(1, 1)?;
    explorer.load_document(&doc)?;

    let b = explorer.bounds();
    println!("real:       [{}, {}]", b.min_re(), b.max_re());
    println!("imaginary:  [{}, {}]", b.min_im(), b.max_im());
    println!("iterations: {}", explorer.max_iterations());
    println!("colour map: {}", explorer.colour_map_name());
    println!("zoom:       {:.3e}", explorer.magnification());
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!("Starting mandelscope");

    let result = match &cli.command {
        Command::Render(args) => session::run(args).map(|_| ()),
        Command::Info { path } => info_command(path),
        Command::ColourMaps => {
            for map in builtin_colour_maps() {
                println!("{}", map.name());
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

//! Drives an [`Explorer`] through the steps requested on the command line.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use mandelscope_core::{Explorer, PixelRect};
use mandelscope_render::{
    colour_map_by_name, export_png, BlackWhite, ColourMap, ExportMetadata, RenderBuffer,
};

use crate::cli::RenderArgs;
use crate::document_store;
use crate::error::AppError;

/// Run every step in `args`, returning the explorer in its final state.
pub(crate) fn run(args: &RenderArgs) -> Result<Explorer, AppError> {
    let mut explorer = Explorer::new(args.width, args.height)?;

    // Stand-in for a rendering surface: count how often it would redraw.
    let redraws = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&redraws);
    let subscription = explorer.subscribe(move || {
        counter.set(counter.get() + 1);
        Ok(())
    });

    if let Some(path) = &args.load {
        let doc = document_store::load(path)?;
        explorer.load_document(&doc)?;
    }
    if let Some(&[min_re, max_re, min_im, max_im]) = args.view.as_deref() {
        explorer.set_view_window(min_re, max_re, min_im, max_im)?;
    }
    if let Some(&[x, y, w, h]) = args.zoom.as_deref() {
        let (pw, ph) = (explorer.width(), explorer.height());
        explorer.zoom_to(PixelRect::new(x, y, w, h), pw, ph)?;
    }
    if let Some(&[d_re, d_im]) = args.pan.as_deref() {
        explorer.pan(d_re, d_im)?;
    }
    if let Some(n) = args.iterations {
        explorer.set_max_iterations(n)?;
    }
    if let Some(name) = &args.colour_map {
        if colour_map_by_name(name).is_none() {
            return Err(AppError::UnknownColourMap(name.clone()));
        }
        explorer.set_colour_map_name(Some(name))?;
    }
    for _ in 0..args.undo {
        if !explorer.undo()? {
            warn!("Nothing left to undo");
            break;
        }
    }

    explorer.unsubscribe(subscription);
    let b = explorer.bounds();
    info!(
        min_re = b.min_re(),
        max_re = b.max_re(),
        min_im = b.min_im(),
        max_im = b.max_im(),
        max_iterations = explorer.max_iterations(),
        magnification = explorer.magnification(),
        redraws = redraws.get(),
        "View ready"
    );

    if let Some(path) = &args.output {
        let map = resolve_colour_map(explorer.colour_map_name());
        let buffer = RenderBuffer::colorize(explorer.grid(), map.as_ref());
        export_png(&buffer, path, &ExportMetadata::from_explorer(&explorer))?;
        info!("Wrote image to {}", path.display());
    }
    if let Some(path) = &args.save {
        document_store::save(path, &explorer.to_document())?;
        info!("Saved view to {}", path.display());
    }
    Ok(explorer)
}

/// Built-in map with this name, or the default for names saved by other
/// front ends.
fn resolve_colour_map(name: &str) -> Box<dyn ColourMap> {
    colour_map_by_name(name).unwrap_or_else(|| {
        debug!("No built-in colour map named {name:?}, using the default");
        Box::new(BlackWhite)
    })
}

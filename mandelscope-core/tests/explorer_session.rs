use std::cell::RefCell;
use std::rc::Rc;

use mandelscope_core::{
    compute, document, CoreError, Document, Explorer, PixelRect, ViewBounds, ViewSnapshot,
    MAX_ITERATIONS, MIN_ITERATIONS,
};

/// A scripted gesture, as a GUI would issue it.
#[derive(Clone, Copy)]
enum Step {
    View(f64, f64, f64, f64),
    Iterations(u32),
    Pan(f64, f64),
    Zoom(PixelRect),
}

fn apply(ex: &mut Explorer, step: Step) {
    let (w, h) = (ex.width(), ex.height());
    match step {
        Step::View(a, b, c, d) => ex.set_view_window(a, b, c, d),
        Step::Iterations(n) => ex.set_max_iterations(n),
        Step::Pan(dr, di) => ex.pan(dr, di),
        Step::Zoom(rect) => ex.zoom_to(rect, w, h),
    }
    .unwrap();
}

fn script() -> Vec<Step> {
    vec![
        Step::Zoom(PixelRect::from_corners((30, 20), (10, 5))),
        Step::Iterations(400),
        Step::Pan(0.01, -0.02),
        Step::View(-0.75, -0.73, 0.1, 0.12),
        Step::Iterations(MIN_ITERATIONS),
        Step::Pan(-0.001, 0.0),
        Step::Zoom(PixelRect::new(4, 4, 16, 12)),
        Step::Iterations(MAX_ITERATIONS),
    ]
}

#[test]
fn n_mutations_then_n_undos_restore_start() {
    let mut ex = Explorer::new(40, 30).unwrap();
    let start = ex.snapshot();
    let steps = script();

    for &step in &steps {
        apply(&mut ex, step);
    }
    assert_eq!(ex.history().undo_depth(), steps.len());

    for _ in &steps {
        assert!(ex.undo().unwrap());
    }
    assert_eq!(ex.snapshot(), start);
    assert!(!ex.can_undo());
    assert_eq!(ex.history().redo_depth(), steps.len());
}

#[test]
fn undo_redo_is_bit_identical_at_every_depth() {
    let mut ex = Explorer::new(32, 24).unwrap();
    for step in script() {
        apply(&mut ex, step);
        let before = ex.snapshot();
        let grid_before = ex.grid_handle();
        ex.undo().unwrap();
        ex.redo().unwrap();
        assert_eq!(ex.snapshot(), before);
        assert_eq!(*ex.grid(), *grid_before);
    }
}

#[test]
fn new_gesture_after_undo_drops_all_redo_states() {
    let mut ex = Explorer::new(32, 24).unwrap();
    for step in script() {
        apply(&mut ex, step);
    }
    for _ in 0..3 {
        ex.undo().unwrap();
    }
    assert_eq!(ex.history().redo_depth(), 3);

    ex.pan(0.0001, 0.0).unwrap();
    assert!(!ex.can_redo());
    assert!(!ex.redo().unwrap());
}

#[test]
fn grid_matches_direct_computation() {
    let mut ex = Explorer::new(35, 30).unwrap();
    ex.set_view_window(-2.5, 1.0, -1.5, 1.5).unwrap();
    ex.set_max_iterations(100).unwrap();

    let expected = compute(35, 30, &ViewBounds::new(-2.5, 1.0, -1.5, 1.5).unwrap(), 100, 4.0);
    assert_eq!(*ex.grid(), expected);
    assert_eq!(ex.grid().get(0, 0), Some(1));
    assert!(ex.grid().as_slice().iter().all(|&n| n <= 100));
}

#[test]
fn save_then_load_into_fresh_explorer() {
    let mut original = Explorer::new(64, 48).unwrap();
    original.set_view_window(-1.4, -0.6, -0.2, 0.4).unwrap();
    original.set_max_iterations(MIN_ITERATIONS + 40).unwrap();
    original.set_colour_map_name(Some("Rainbow")).unwrap();

    let json = serde_json::to_string_pretty(&original.to_document()).unwrap();
    let doc: Document = serde_json::from_str(&json).unwrap();

    let mut reloaded = Explorer::new(64, 48).unwrap();
    reloaded.load_document(&doc).unwrap();
    assert_eq!(reloaded.snapshot(), original.snapshot());
    assert_eq!(reloaded.colour_map_name(), original.colour_map_name());
    assert_eq!(*reloaded.grid(), *original.grid());
}

#[test]
fn malformed_document_is_rejected_whole() {
    let mut ex = Explorer::new(32, 32).unwrap();
    let before: ViewSnapshot = ex.snapshot();

    let doc: Document = [
        ("minReal", "-1.0"),
        ("maxReal", "-0.5"),
        ("minImag", "-0.3"),
        ("maxImag", "0.1"),
        ("maxIterations", "notANumber"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let err = ex.load_document(&doc).unwrap_err();
    assert!(matches!(err, CoreError::CorruptDocument(_)));
    assert_eq!(ex.snapshot(), before);
    assert!(!ex.can_undo());

    let mut missing = ex.to_document();
    missing.remove(document::KEY_MAX_IM);
    assert!(ex.load_document(&missing).is_err());
    assert_eq!(ex.snapshot(), before);
}

#[test]
fn renderer_pulls_grid_after_notification() {
    let mut ex = Explorer::new(20, 20).unwrap();
    let dirty = Rc::new(RefCell::new(0u32));
    let flag = Rc::clone(&dirty);
    let sub = ex.subscribe(move || {
        *flag.borrow_mut() += 1;
        Ok(())
    });

    ex.zoom_to(PixelRect::new(5, 5, 10, 10), 20, 20).unwrap();
    assert_eq!(*dirty.borrow(), 1);
    let published = ex.grid_handle();
    assert_eq!(published.width(), 20);

    ex.undo().unwrap();
    ex.redo().unwrap();
    assert_eq!(*dirty.borrow(), 3);
    assert_eq!(*ex.grid(), *published);

    assert!(ex.unsubscribe(sub));
}

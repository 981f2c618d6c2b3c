//! Window-level event wiring: pointer tracking for the camera rig, canvas
//! resize, and the hidden keyboard sequence.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::{PointerState, SequenceDetector, SequenceStep};
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::celebrate;
use crate::dom;
use crate::motion::Motion;

/// Track the pointer offset from the viewport center. The camera rig reads
/// the shared state every frame.
pub fn wire_pointer_tracking(pointer: Rc<RefCell<PointerState>>) {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (vw, vh) = dom::viewport_size();
            let mut p = pointer.borrow_mut();
            p.dx = ev.client_x() as f32 - vw / 2.0;
            p.dy = ev.client_y() as f32 - vh / 2.0;
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the canvas backing size in sync with the window.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let canvas_resize = canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Single letters compare case-insensitively; named keys must match exactly.
fn normalize_key(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_ascii_lowercase()
    } else {
        key.to_string()
    }
}

/// Feed every keydown into the sequence detector; completion fires the
/// confetti celebration.
pub fn wire_secret_sequence(
    detector: Rc<RefCell<SequenceDetector>>,
    motion: Motion,
    rng: Rc<RefCell<StdRng>>,
) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let key = normalize_key(&ev.key());
                if detector.borrow_mut().feed(&key) == SequenceStep::Completed {
                    log::info!("[egg] secret sequence completed");
                    if let Some(document) = dom::window_document() {
                        celebrate::burst(&document, &motion, &mut rng.borrow_mut());
                    }
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

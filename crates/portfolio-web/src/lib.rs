#![cfg(target_arch = "wasm32")]

//! Portfolio front-end: content-table rendering, pointer effects and the
//! WebGPU starfield, bootstrapped from the wasm module start hook. Setup
//! failures log and leave the static page usable.

mod celebrate;
mod dom;
mod effects;
mod events;
mod frame;
mod motion;
mod render;
mod reveal;

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use portfolio_core::{
    particle_count_for_viewport, CameraRig, PointerState, SequenceDetector, StarField,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Fixed seed, so the sky looks the same on every visit.
const STARFIELD_SEED: u64 = 42;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(spawn_init) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        spawn_init();
    }
    Ok(())
}

fn spawn_init() {
    spawn_local(async {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Content first, so the effect wiring below sees the rendered nodes.
    dom::render_page(&document);

    let motion = motion::Motion::new();
    let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(js_sys::Date::now() as u64)));

    reveal::hero_entrance(&document, &motion);
    let card_handles = effects::attach_project_cards(&document, &motion, &rng);
    reveal::reveal_on_scroll(&document, &motion, &card_handles);
    effects::attach_magnetic_buttons(&document, &motion);
    effects::attach_hero_title(&document, &motion);

    let detector = Rc::new(RefCell::new(SequenceDetector::new()));
    events::wire_secret_sequence(detector, motion.clone(), rng.clone());

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointer_tracking(pointer.clone());

    start_starfield(&document, pointer).await;

    log::info!("portfolio ready");
    Ok(())
}

/// Bring up the starfield behind the page. A missing canvas or failed GPU
/// init disables the background without touching the rest of the page.
async fn start_starfield(document: &web::Document, pointer: Rc<RefCell<PointerState>>) {
    let Some(canvas) = dom::canvas_by_id(document, "bg-canvas") else {
        log::warn!("[stars] missing #bg-canvas; background disabled");
        return;
    };
    dom::sync_canvas_backing_size(&canvas);
    events::wire_canvas_resize(&canvas);

    let (viewport_w, _) = dom::viewport_size();
    let count = particle_count_for_viewport(viewport_w);
    let Some(gpu) = frame::init_gpu(&canvas, count).await else {
        return;
    };

    let ctx = frame::FrameContext {
        field: StarField::new(count, STARFIELD_SEED),
        rig: CameraRig::new(),
        pointer,
        canvas,
        gpu,
        instances: Vec::with_capacity(count),
        last_instant: Instant::now(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    log::info!("[stars] running with {count} stars");
}

//! Per-frame driver for the starfield: advance the simulation and camera
//! rig, then hand the instance buffer to the GPU.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use portfolio_core::{CameraRig, PointerState, StarField, StarInstance};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

pub struct FrameContext {
    pub field: StarField,
    pub rig: CameraRig,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'static>,
    pub instances: Vec<StarInstance>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let pointer = *self.pointer.borrow();
        self.rig.step(pointer, dt);
        self.field.step(dt);
        self.field.fill_instances(&mut self.instances);

        let width = self.canvas.width();
        let height = self.canvas.height();
        self.gpu.resize_if_needed(width, height);
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let camera = self.rig.camera(aspect);
        if let Err(e) = self.gpu.render(&camera, &self.instances) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

//! Bridges the tween bank to element styles.
//!
//! Elements register for a `u32` handle; tween updates land in a per-element
//! value slot and get written back as one composed `transform`/`opacity`
//! style per frame. The ticker drives the bank from requestAnimationFrame
//! and parks itself whenever the bank drains, so an idle page schedules no
//! animation frames. Any `begin` kicks it awake again.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use portfolio_core::tween::{Prop, TweenBank, TweenDone, TweenSpec, TweenUpdate};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Slot {
    el: web::Element,
    /// Style attribute at registration time; composed values append to it.
    base_style: String,
    values: [f32; Prop::ALL.len()],
}

impl Slot {
    fn new(el: web::Element) -> Self {
        let base_style = el.get_attribute("style").unwrap_or_default();
        let mut values = [0.0; Prop::ALL.len()];
        for prop in Prop::ALL {
            values[prop.index()] = prop.identity();
        }
        Self { el, base_style, values }
    }

    fn apply(&self) {
        let v = &self.values;
        let style = format!(
            "{base}{sep}transform: perspective(600px) \
             translate3d({tx:.2}px, {ty:.2}px, 0) rotate({rot:.2}deg) \
             rotateX({rx:.2}deg) rotateY({ry:.2}deg) scale({s:.4}); \
             opacity: {o:.4}",
            base = self.base_style,
            sep = if self.base_style.is_empty() { "" } else { "; " },
            tx = v[Prop::TranslateX.index()],
            ty = v[Prop::TranslateY.index()],
            rot = v[Prop::Rotate.index()],
            rx = v[Prop::RotateX.index()],
            ry = v[Prop::RotateY.index()],
            s = v[Prop::Scale.index()],
            o = v[Prop::Opacity.index()],
        );
        let _ = self.el.set_attribute("style", &style);
    }
}

struct MotionState {
    bank: TweenBank,
    /// Handle is the index; removed elements leave a hole.
    slots: Vec<Option<Slot>>,
    /// Handles whose element leaves the document once their tweens drain.
    doomed: Vec<u32>,
    ticking: bool,
    last_instant: Instant,
}

impl MotionState {
    fn new() -> Self {
        Self {
            bank: TweenBank::new(),
            slots: Vec::new(),
            doomed: Vec::new(),
            ticking: false,
            last_instant: Instant::now(),
        }
    }

    fn register(&mut self, el: &web::Element) -> u32 {
        let handle = self.slots.len() as u32;
        self.slots.push(Some(Slot::new(el.clone())));
        handle
    }

    fn set(&mut self, handle: u32, prop: Prop, value: f32) {
        if let Some(Some(slot)) = self.slots.get_mut(handle as usize) {
            slot.values[prop.index()] = value;
            slot.apply();
        }
    }

    fn begin(&mut self, handle: u32, spec: TweenSpec, delay: f32) {
        let Some(Some(slot)) = self.slots.get(handle as usize) else {
            return;
        };
        let from = slot.values[spec.prop.index()];
        self.bank.begin_spec(handle, from, spec, delay);
    }

    /// Advance the bank one frame. Returns false once the bank has drained
    /// and the ticker should park.
    fn tick_frame(
        &mut self,
        updates: &mut Vec<TweenUpdate>,
        completed: &mut Vec<TweenDone>,
    ) -> bool {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        updates.clear();
        completed.clear();
        self.bank.step(dt, updates, completed);

        for u in updates.iter() {
            if let Some(Some(slot)) = self.slots.get_mut(u.target as usize) {
                slot.values[u.prop.index()] = u.value;
            }
        }
        // One style write per touched element, not per touched property.
        let mut touched: Vec<u32> = Vec::new();
        for u in updates.iter() {
            if !touched.contains(&u.target) {
                touched.push(u.target);
            }
        }
        for target in touched {
            if let Some(Some(slot)) = self.slots.get(target as usize) {
                slot.apply();
            }
        }

        for done in completed.iter() {
            if self.doomed.contains(&done.target) && !self.bank.has_target(done.target) {
                if let Some(slot) = self
                    .slots
                    .get_mut(done.target as usize)
                    .and_then(Option::take)
                {
                    slot.el.remove();
                }
                self.doomed.retain(|t| *t != done.target);
            }
        }

        if self.bank.is_empty() {
            self.ticking = false;
            return false;
        }
        true
    }
}

/// Shared animation driver handed to every effect module.
#[derive(Clone)]
pub struct Motion {
    state: Rc<RefCell<MotionState>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Motion {
    pub fn new() -> Self {
        let state = Rc::new(RefCell::new(MotionState::new()));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let state_tick = state.clone();
        let mut updates: Vec<TweenUpdate> = Vec::new();
        let mut completed: Vec<TweenDone> = Vec::new();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let keep_going = state_tick
                .borrow_mut()
                .tick_frame(&mut updates, &mut completed);
            if keep_going {
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
            }
        }) as Box<dyn FnMut()>));
        Self { state, tick }
    }

    /// Track `el` and return its animation handle. The element's current
    /// inline style becomes the base every animated style builds on.
    pub fn register(&self, el: &web::Element) -> u32 {
        self.state.borrow_mut().register(el)
    }

    /// Set a property immediately, outside any tween. Used to pre-hide
    /// elements before a reveal.
    pub fn set(&self, handle: u32, prop: Prop, value: f32) {
        self.state.borrow_mut().set(handle, prop, value);
    }

    /// Animate `handle` from its current value per `spec`, after `delay`
    /// seconds. Replaces an in-flight tween on the same property.
    pub fn begin(&self, handle: u32, spec: TweenSpec, delay: f32) {
        self.state.borrow_mut().begin(handle, spec, delay);
        self.kick();
    }

    pub fn begin_specs(&self, handle: u32, specs: &[TweenSpec], delay: f32) {
        {
            let mut state = self.state.borrow_mut();
            for &spec in specs {
                state.begin(handle, spec, delay);
            }
        }
        self.kick();
    }

    /// Remove the element from the document once every tween on `handle`
    /// finishes. Throwaway nodes (confetti, sparks) use this to clean up.
    pub fn remove_when_done(&self, handle: u32) {
        let mut state = self.state.borrow_mut();
        if !state.doomed.contains(&handle) {
            state.doomed.push(handle);
        }
    }

    /// Wake the ticker if it parked. Resets the frame clock so the parked
    /// gap never counts as elapsed animation time.
    fn kick(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.ticking || state.bank.is_empty() {
                return;
            }
            state.ticking = true;
            state.last_instant = Instant::now();
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            );
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}

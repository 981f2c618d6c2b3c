//! Entrance choreography: the hero sequence on load and the one-shot scroll
//! reveals driven by IntersectionObserver.

use portfolio_core::constants::{
    ENTRANCE_RISE_PX, HERO_PILL_DELAY_SEC, HERO_PILL_SEC, HERO_PILL_STAGGER_SEC,
    HERO_SUBTITLE_DELAY_SEC, HERO_SUBTITLE_SEC, HERO_TITLE_DELAY_SEC, HERO_TITLE_SEC,
    REVEAL_CARD_SEC, REVEAL_CARD_STAGGER_SEC, REVEAL_RISE_PX, REVEAL_SHIFT_PX, REVEAL_TECH_SEC,
    REVEAL_TECH_STAGGER_SEC,
};
use portfolio_core::tween::{Easing, Prop, TweenSpec};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::motion::Motion;

fn fade_rise(motion: &Motion, handle: u32, rise_px: f32, duration: f32, delay: f32) {
    motion.set(handle, Prop::Opacity, 0.0);
    motion.set(handle, Prop::TranslateY, rise_px);
    motion.begin(
        handle,
        TweenSpec { prop: Prop::Opacity, to: 1.0, duration, easing: Easing::QuadOut },
        delay,
    );
    motion.begin(
        handle,
        TweenSpec { prop: Prop::TranslateY, to: 0.0, duration, easing: Easing::QuadOut },
        delay,
    );
}

/// Hero intro on page load: title, then subtitle, then the pills popping in
/// one after another.
pub fn hero_entrance(document: &web::Document, motion: &Motion) {
    if let Some(title) = document.get_element_by_id("hero-title") {
        let handle = motion.register(&title);
        fade_rise(motion, handle, ENTRANCE_RISE_PX, HERO_TITLE_SEC, HERO_TITLE_DELAY_SEC);
    }
    if let Some(subtitle) = document.get_element_by_id("hero-subtitle") {
        let handle = motion.register(&subtitle);
        fade_rise(
            motion,
            handle,
            ENTRANCE_RISE_PX,
            HERO_SUBTITLE_SEC,
            HERO_SUBTITLE_DELAY_SEC,
        );
    }
    if let Some(pills) = document.get_element_by_id("hero-pills") {
        let kids = pills.children();
        for i in 0..kids.length() {
            let Some(pill) = kids.item(i) else {
                continue;
            };
            let handle = motion.register(&pill);
            motion.set(handle, Prop::Scale, 0.0);
            motion.set(handle, Prop::Opacity, 0.0);
            let delay = HERO_PILL_DELAY_SEC + i as f32 * HERO_PILL_STAGGER_SEC;
            motion.begin(
                handle,
                TweenSpec {
                    prop: Prop::Scale,
                    to: 1.0,
                    duration: HERO_PILL_SEC,
                    easing: Easing::BackOut,
                },
                delay,
            );
            motion.begin(
                handle,
                TweenSpec {
                    prop: Prop::Opacity,
                    to: 1.0,
                    duration: HERO_PILL_SEC,
                    easing: Easing::QuadOut,
                },
                delay,
            );
        }
    }
}

/// Observe `target` and run `on_enter` the first time it scrolls into view.
/// `root_margin` shrinks the viewport edge the way a scroll trigger start
/// offset would.
fn observe_once(target: &web::Element, root_margin: &str, on_enter: impl FnOnce() + 'static) {
    let mut fire = Some(on_enter);
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let hit = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<web::IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if hit {
                if let Some(f) = fire.take() {
                    f();
                }
                observer.disconnect();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    match web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer.observe(target),
        Err(e) => log::warn!("IntersectionObserver error: {:?}", e),
    }
    closure.forget();
}

/// Pre-hide the project cards and tech stack, then reveal each section once
/// when it first scrolls into view.
pub fn reveal_on_scroll(document: &web::Document, motion: &Motion, card_handles: &[u32]) {
    if let Some(grid) = document.get_element_by_id("projects-grid") {
        for &handle in card_handles {
            motion.set(handle, Prop::Opacity, 0.0);
            motion.set(handle, Prop::TranslateY, REVEAL_RISE_PX);
        }
        let handles = card_handles.to_vec();
        let motion_cards = motion.clone();
        observe_once(&grid, "0px 0px -20% 0px", move || {
            for (i, &handle) in handles.iter().enumerate() {
                let delay = i as f32 * REVEAL_CARD_STAGGER_SEC;
                motion_cards.begin(
                    handle,
                    TweenSpec {
                        prop: Prop::Opacity,
                        to: 1.0,
                        duration: REVEAL_CARD_SEC,
                        easing: Easing::CubicOut,
                    },
                    delay,
                );
                motion_cards.begin(
                    handle,
                    TweenSpec {
                        prop: Prop::TranslateY,
                        to: 0.0,
                        duration: REVEAL_CARD_SEC,
                        easing: Easing::CubicOut,
                    },
                    delay,
                );
            }
        });
    }

    if let Some(list) = document.get_element_by_id("tech-stack") {
        let kids = list.children();
        let mut handles = Vec::new();
        for i in 0..kids.length() {
            let Some(item) = kids.item(i) else {
                continue;
            };
            let handle = motion.register(&item);
            motion.set(handle, Prop::Opacity, 0.0);
            motion.set(handle, Prop::TranslateX, -REVEAL_SHIFT_PX);
            handles.push(handle);
        }
        let motion_tech = motion.clone();
        observe_once(&list, "0px 0px -15% 0px", move || {
            for (i, &handle) in handles.iter().enumerate() {
                let delay = i as f32 * REVEAL_TECH_STAGGER_SEC;
                motion_tech.begin(
                    handle,
                    TweenSpec {
                        prop: Prop::Opacity,
                        to: 1.0,
                        duration: REVEAL_TECH_SEC,
                        easing: Easing::QuadOut,
                    },
                    delay,
                );
                motion_tech.begin(
                    handle,
                    TweenSpec {
                        prop: Prop::TranslateX,
                        to: 0.0,
                        duration: REVEAL_TECH_SEC,
                        easing: Easing::QuadOut,
                    },
                    delay,
                );
            }
        });
    }
}

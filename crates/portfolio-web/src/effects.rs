//! Pointer effect wiring: magnetic buttons, per-card hover choreography and
//! the proximity-deformed hero title. The geometry lives in
//! `portfolio_core::interact`; this module only reads rects, wires listeners
//! and feeds the motion driver.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use portfolio_core::content;
use portfolio_core::interact;
use rand::rngs::StdRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::celebrate;
use crate::motion::Motion;

fn rect_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    )
}

/// Pointer position normalized to [0, 1] across the element face.
fn rect_uv(el: &web::Element, ev: &web::PointerEvent) -> (f32, f32) {
    let rect = el.get_bounding_client_rect();
    let u = (ev.client_x() as f64 - rect.left()) / rect.width().max(1.0);
    let v = (ev.client_y() as f64 - rect.top()) / rect.height().max(1.0);
    (u as f32, v as f32)
}

/// Every `.magnetic-btn` leans toward the pointer while hovered and springs
/// back when it leaves.
pub fn attach_magnetic_buttons(document: &web::Document, motion: &Motion) {
    let Ok(buttons) = document.query_selector_all(".magnetic-btn") else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(el) = buttons
            .item(i)
            .and_then(|n| n.dyn_into::<web::Element>().ok())
        else {
            continue;
        };
        let handle = motion.register(&el);
        {
            let el_move = el.clone();
            let motion_move = motion.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let center = rect_center(&el_move);
                let offset = Vec2::new(ev.client_x() as f32, ev.client_y() as f32) - center;
                motion_move.begin_specs(handle, &interact::magnet_enter_specs(offset.x, offset.y), 0.0);
            }) as Box<dyn FnMut(_)>);
            let _ = el.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let motion_leave = motion.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                motion_leave.begin_specs(handle, &interact::magnet_settle_specs(), 0.0);
            }) as Box<dyn FnMut(_)>);
            let _ = el.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

/// Wire each rendered project card to its hover choreography and spark
/// burst. Cards come back in content-table order, so the grid children pair
/// up with `featured_projects`. Returns the card handles for the scroll
/// reveal.
pub fn attach_project_cards(
    document: &web::Document,
    motion: &Motion,
    rng: &Rc<RefCell<StdRng>>,
) -> Vec<u32> {
    let mut handles = Vec::new();
    let Some(grid) = document.get_element_by_id("projects-grid") else {
        return handles;
    };
    let cards = grid.children();
    for (i, project) in content::featured_projects().enumerate() {
        let Some(card) = cards.item(i as u32) else {
            break;
        };
        let handle = motion.register(&card);
        handles.push(handle);
        let hover = project.hover;
        let accent = project.accent;

        // Enter: spark burst plus the choreography aimed at the entry point.
        {
            let card_enter = card.clone();
            let motion_enter = motion.clone();
            let rng_enter = rng.clone();
            let document_enter = document.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                celebrate::hover_burst(
                    &document_enter,
                    &card_enter,
                    accent,
                    &motion_enter,
                    &mut rng_enter.borrow_mut(),
                );
                let (u, v) = rect_uv(&card_enter, &ev);
                motion_enter.begin_specs(handle, &hover.enter_specs(u, v), 0.0);
            }) as Box<dyn FnMut(_)>);
            let _ = card.add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        // Move: retarget the same tweens; the bank replaces in-flight ones.
        {
            let card_move = card.clone();
            let motion_move = motion.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let (u, v) = rect_uv(&card_move, &ev);
                motion_move.begin_specs(handle, &hover.enter_specs(u, v), 0.0);
            }) as Box<dyn FnMut(_)>);
            let _ = card.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        // Leave: spring every touched property back to rest.
        {
            let motion_leave = motion.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                motion_leave.begin_specs(handle, &hover.settle_specs(), 0.0);
            }) as Box<dyn FnMut(_)>);
            let _ = card.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
    handles
}

/// Split the hero title into per-glyph spans and push glyphs away from the
/// pointer. Whitespace stays as plain text nodes so line wrapping survives.
pub fn attach_hero_title(document: &web::Document, motion: &Motion) {
    let Some(title) = document.get_element_by_id("hero-title") else {
        return;
    };
    let text = title.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return;
    }
    title.set_inner_html("");

    let mut glyphs: Vec<(u32, web::Element)> = Vec::new();
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            let space = document.create_text_node(" ");
            let _ = title.append_child(&space);
            continue;
        }
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        span.set_text_content(Some(&ch.to_string()));
        let _ = span.set_attribute("style", "display: inline-block");
        let _ = title.append_child(&span);
        glyphs.push((motion.register(&span), span));
    }

    // Glyphs deform while near the pointer; `hot` remembers which ones are
    // away from rest so distant moves skip them entirely.
    let glyphs: Rc<Vec<(u32, web::Element)>> = Rc::new(glyphs);
    let hot: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(vec![false; glyphs.len()]));
    {
        let glyphs_move = glyphs.clone();
        let hot_move = hot.clone();
        let motion_move = motion.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let mut hot = hot_move.borrow_mut();
            for (i, (handle, span)) in glyphs_move.iter().enumerate() {
                let d = rect_center(span) - pointer;
                let specs = interact::proximity_enter_specs(d.x, d.y);
                let resting = specs.iter().all(|s| s.to == s.prop.identity());
                if resting && !hot[i] {
                    continue;
                }
                hot[i] = !resting;
                motion_move.begin_specs(*handle, &specs, 0.0);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
    // Pointer leaving the viewport gets no further moves, so spring every
    // deformed glyph back to rest.
    {
        let glyphs_leave = glyphs.clone();
        let hot_leave = hot.clone();
        let motion_leave = motion.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let mut hot = hot_leave.borrow_mut();
            for (i, (handle, _)) in glyphs_leave.iter().enumerate() {
                if hot[i] {
                    hot[i] = false;
                    motion_leave.begin_specs(*handle, &interact::proximity_settle_specs(), 0.0);
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

//! Throwaway celebration nodes: the confetti rain for the hidden sequence
//! and the small spark burst a card fires on hover. Every node is created,
//! tweened, then removed by the motion driver once its tweens finish.

use rand::rngs::StdRng;
use web_sys as web;

use portfolio_core::confetti::{confetti_pieces, spark_pieces};
use portfolio_core::constants::{BURST_SPARKS, CONFETTI_COUNT};
use portfolio_core::content::Accent;
use portfolio_core::tween::{Easing, Prop, TweenSpec};

use crate::dom;
use crate::motion::Motion;

/// Rain `CONFETTI_COUNT` pieces from above the viewport to below it.
pub fn burst(document: &web::Document, motion: &Motion, rng: &mut StdRng) {
    let Some(body) = document.body() else {
        return;
    };
    let (_, viewport_h) = dom::viewport_size();
    for piece in confetti_pieces(rng, CONFETTI_COUNT) {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        let style = format!(
            "position: fixed; top: -20px; left: {left:.1}%; width: {w:.1}px; \
             height: {h:.1}px; background: {color}; border-radius: 2px; \
             pointer-events: none; z-index: 9999",
            left = piece.x_frac * 100.0,
            w = piece.size_px,
            h = piece.size_px * 0.45,
            color = piece.color,
        );
        let _ = el.set_attribute("style", &style);
        let _ = body.append_child(&el);

        let handle = motion.register(&el);
        let fall = piece.fall_sec;
        motion.begin(
            handle,
            TweenSpec {
                prop: Prop::TranslateY,
                to: viewport_h + 80.0,
                duration: fall,
                easing: Easing::QuadIn,
            },
            piece.delay_sec,
        );
        motion.begin(
            handle,
            TweenSpec {
                prop: Prop::TranslateX,
                to: piece.drift_px,
                duration: fall,
                easing: Easing::QuadOut,
            },
            piece.delay_sec,
        );
        motion.begin(
            handle,
            TweenSpec {
                prop: Prop::Rotate,
                to: piece.spin_deg,
                duration: fall,
                easing: Easing::Linear,
            },
            piece.delay_sec,
        );
        motion.begin(
            handle,
            TweenSpec {
                prop: Prop::Opacity,
                to: 0.0,
                duration: fall,
                easing: Easing::QuadIn,
            },
            piece.delay_sec,
        );
        motion.remove_when_done(handle);
    }
}

/// Radiate `BURST_SPARKS` accent-colored dots from the center of `card`.
pub fn hover_burst(
    document: &web::Document,
    card: &web::Element,
    accent: Accent,
    motion: &Motion,
    rng: &mut StdRng,
) {
    for spark in spark_pieces(rng, BURST_SPARKS) {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        let style = format!(
            "position: absolute; left: 50%; top: 50%; width: {size:.1}px; \
             height: {size:.1}px; background: {color}; border-radius: 9999px; \
             pointer-events: none",
            size = spark.size_px,
            color = accent.css(),
        );
        let _ = el.set_attribute("style", &style);
        let _ = card.append_child(&el);

        let handle = motion.register(&el);
        motion.begin(
            handle,
            TweenSpec {
                prop: Prop::TranslateX,
                to: spark.angle_rad.cos() * spark.dist_px,
                duration: spark.life_sec,
                easing: Easing::CubicOut,
            },
            0.0,
        );
        motion.begin(
            handle,
            TweenSpec {
                prop: Prop::TranslateY,
                to: spark.angle_rad.sin() * spark.dist_px,
                duration: spark.life_sec,
                easing: Easing::CubicOut,
            },
            0.0,
        );
        motion.begin(
            handle,
            TweenSpec {
                prop: Prop::Opacity,
                to: 0.0,
                duration: spark.life_sec,
                easing: Easing::QuadIn,
            },
            0.0,
        );
        motion.remove_when_done(handle);
    }
}

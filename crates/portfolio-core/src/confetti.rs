//! Randomized parameters for the celebration confetti and the small hover
//! burst sparks. Generation is pure given an RNG so the bounds are testable;
//! the frontend turns each piece into a throwaway DOM node plus tweens.

use rand::rngs::StdRng;
use rand::Rng;

use crate::constants::{
    CONFETTI_DRIFT_PX, CONFETTI_FALL_MAX_SEC, CONFETTI_FALL_MIN_SEC, CONFETTI_SIZE_MAX_PX,
    CONFETTI_SIZE_MIN_PX, CONFETTI_SPIN_DEG, CONFETTI_STAGGER_SEC, SPARK_DIST_MAX_PX,
    SPARK_DIST_MIN_PX, SPARK_SEC_MAX, SPARK_SEC_MIN, SPARK_SIZE_MAX_PX, SPARK_SIZE_MIN_PX,
};

/// Confetti colours: the star palette plus gold.
pub const CONFETTI_COLORS: [&str; 5] = ["#f9abea", "#6b8af8", "#50f595", "#f5d250", "#ffffff"];

/// One falling confetti piece. `x_frac` is the horizontal start position as a
/// fraction of the viewport width.
#[derive(Clone, Copy, Debug)]
pub struct ConfettiPiece {
    pub x_frac: f32,
    pub size_px: f32,
    pub color: &'static str,
    pub drift_px: f32,
    pub spin_deg: f32,
    pub fall_sec: f32,
    pub delay_sec: f32,
}

pub fn confetti_pieces(rng: &mut StdRng, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            x_frac: rng.gen::<f32>(),
            size_px: rng.gen_range(CONFETTI_SIZE_MIN_PX..CONFETTI_SIZE_MAX_PX),
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            drift_px: rng.gen_range(-CONFETTI_DRIFT_PX..CONFETTI_DRIFT_PX),
            spin_deg: rng.gen_range(-CONFETTI_SPIN_DEG..CONFETTI_SPIN_DEG),
            fall_sec: rng.gen_range(CONFETTI_FALL_MIN_SEC..CONFETTI_FALL_MAX_SEC),
            delay_sec: rng.gen::<f32>() * CONFETTI_STAGGER_SEC,
        })
        .collect()
}

/// One hover burst spark, radiating from the card center. The colour comes
/// from the card's accent, so it is not part of the piece.
#[derive(Clone, Copy, Debug)]
pub struct SparkPiece {
    pub angle_rad: f32,
    pub dist_px: f32,
    pub size_px: f32,
    pub life_sec: f32,
}

pub fn spark_pieces(rng: &mut StdRng, count: usize) -> Vec<SparkPiece> {
    (0..count)
        .map(|_| SparkPiece {
            angle_rad: rng.gen::<f32>() * core::f32::consts::TAU,
            dist_px: rng.gen_range(SPARK_DIST_MIN_PX..SPARK_DIST_MAX_PX),
            size_px: rng.gen_range(SPARK_SIZE_MIN_PX..SPARK_SIZE_MAX_PX),
            life_sec: rng.gen_range(SPARK_SEC_MIN..SPARK_SEC_MAX),
        })
        .collect()
}

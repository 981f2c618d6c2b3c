//! Starfield flythrough simulation.
//!
//! Stars live in a box of lateral extent [`FIELD_SPREAD`] and depth
//! (`FIELD_NEAR`, `FIELD_DEPTH`] in front of the camera. Each frame every
//! star moves toward the camera by `STAR_SPEED * dt`; a star crossing the
//! near threshold is recycled to the far plane with a fresh lateral position,
//! which keeps the flythrough endless without allocating.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{
    FIELD_DEPTH, FIELD_NEAR, FIELD_SPREAD, NARROW_VIEWPORT_PX, STAR_ALPHA, STAR_COUNT,
    STAR_COUNT_NARROW, STAR_PALETTE, STAR_SIZE, STAR_SPEED,
};

/// One star. `depth` is the positive distance in front of the camera; the
/// renderer maps it to world `-z`.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub color: [f32; 3],
}

/// Per-star GPU instance, laid out to match the shader's instance buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

/// How many stars to simulate for a given CSS viewport width.
pub fn particle_count_for_viewport(css_width: f32) -> usize {
    if css_width < NARROW_VIEWPORT_PX {
        STAR_COUNT_NARROW
    } else {
        STAR_COUNT
    }
}

fn sample_palette(rng: &mut StdRng) -> [f32; 3] {
    let total: f32 = STAR_PALETTE.iter().map(|(_, w)| w).sum();
    let mut pick = rng.gen::<f32>() * total;
    for (color, weight) in STAR_PALETTE {
        if pick < weight {
            return color;
        }
        pick -= weight;
    }
    STAR_PALETTE[STAR_PALETTE.len() - 1].0
}

pub struct StarField {
    stars: Vec<Star>,
    rng: StdRng,
}

impl StarField {
    /// Seeded so a given build scatters the same sky every load.
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(-FIELD_SPREAD..FIELD_SPREAD),
                y: rng.gen_range(-FIELD_SPREAD..FIELD_SPREAD),
                depth: rng.gen_range(FIELD_NEAR..FIELD_DEPTH),
                color: sample_palette(&mut rng),
            })
            .collect();
        Self { stars, rng }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Advance the field by `dt` seconds.
    ///
    /// After this returns every depth lies in [`FIELD_NEAR`, `FIELD_DEPTH`];
    /// recycled stars sit exactly at `FIELD_DEPTH` with redrawn x/y and keep
    /// their colour.
    pub fn step(&mut self, dt: f32) {
        for star in &mut self.stars {
            star.depth -= STAR_SPEED * dt;
            if star.depth < FIELD_NEAR {
                star.depth = FIELD_DEPTH;
                star.x = self.rng.gen_range(-FIELD_SPREAD..FIELD_SPREAD);
                star.y = self.rng.gen_range(-FIELD_SPREAD..FIELD_SPREAD);
            }
        }
    }

    /// Rebuild the instance buffer contents in place.
    pub fn fill_instances(&self, out: &mut Vec<StarInstance>) {
        out.clear();
        out.reserve(self.stars.len());
        for star in &self.stars {
            out.push(StarInstance {
                pos: [star.x, star.y, -star.depth],
                size: STAR_SIZE,
                color: star.color,
                alpha: STAR_ALPHA,
            });
        }
    }
}

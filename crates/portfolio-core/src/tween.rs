//! Minimal property tween engine.
//!
//! The bank owns every in-flight tween keyed by `(target, property)`. The
//! frontend steps it once per animation frame and applies the emitted value
//! updates to elements; completions let it tear down throwaway nodes like
//! confetti. Starting a tween for a pair that is already animating replaces
//! the old tween, which never reports completion. That makes rapid pointer
//! retargeting (hover enter, move, leave in quick succession) safe by
//! construction.

use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Animatable style properties. Translations are CSS pixels, rotations
/// degrees, scale and opacity unitless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    TranslateX,
    TranslateY,
    Rotate,
    RotateX,
    RotateY,
    Scale,
    Opacity,
}

impl Prop {
    pub const ALL: [Prop; 7] = [
        Prop::TranslateX,
        Prop::TranslateY,
        Prop::Rotate,
        Prop::RotateX,
        Prop::RotateY,
        Prop::Scale,
        Prop::Opacity,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Value at which the property has no visual effect.
    pub fn identity(self) -> f32 {
        match self {
            Prop::Scale | Prop::Opacity => 1.0,
            _ => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Accelerating, for falling motion.
    QuadIn,
    /// Decelerating, gentle.
    QuadOut,
    /// Decelerating, sharper initial move.
    CubicOut,
    /// Overshoots the target once before settling.
    BackOut,
    /// Springy oscillation into the target.
    ElasticOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve. Clamped outside.
    pub fn sample(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
            Easing::ElasticOut => {
                let c4 = core::f32::consts::TAU / 3.0;
                2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
        }
    }
}

/// A property destination without a bound target, used to describe hover
/// choreography as data.
#[derive(Clone, Copy, Debug)]
pub struct TweenSpec {
    pub prop: Prop,
    pub to: f32,
    pub duration: f32,
    pub easing: Easing,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    delay: f32,
    easing: Easing,
    elapsed: f32,
}

impl Tween {
    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }
}

/// Emitted each step for every tween past its delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenUpdate {
    pub target: u32,
    pub prop: Prop,
    pub value: f32,
}

/// Emitted once when a tween reaches its destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenDone {
    pub target: u32,
    pub prop: Prop,
}

#[derive(Default)]
pub struct TweenBank {
    active: FnvHashMap<(u32, Prop), Tween>,
}

impl TweenBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate `target`'s `prop` from `from` to `to`. Replaces any in-flight
    /// tween on the same pair.
    #[allow(clippy::too_many_arguments)]
    pub fn begin(
        &mut self,
        target: u32,
        prop: Prop,
        from: f32,
        to: f32,
        duration: f32,
        delay: f32,
        easing: Easing,
    ) {
        self.active.insert(
            (target, prop),
            Tween { from, to, duration, delay, easing, elapsed: 0.0 },
        );
    }

    pub fn begin_spec(&mut self, target: u32, from: f32, spec: TweenSpec, delay: f32) {
        self.begin(target, spec.prop, from, spec.to, spec.duration, delay, spec.easing);
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// True while any property of `target` is still animating.
    pub fn has_target(&self, target: u32) -> bool {
        self.active.keys().any(|(t, _)| *t == target)
    }

    /// Advance every tween by `dt` seconds.
    ///
    /// Pushes a value update for each tween past its delay and a completion
    /// for each tween that just finished. Finished tweens leave the bank, so
    /// each completion fires exactly once.
    pub fn step(&mut self, dt: f32, updates: &mut Vec<TweenUpdate>, completed: &mut Vec<TweenDone>) {
        let mut finished: SmallVec<[(u32, Prop); 8]> = SmallVec::new();
        for (&(target, prop), tween) in self.active.iter_mut() {
            tween.elapsed += dt;
            if tween.elapsed < tween.delay {
                continue;
            }
            let t = tween.progress();
            let value = tween.from + (tween.to - tween.from) * tween.easing.sample(t);
            updates.push(TweenUpdate { target, prop, value });
            if t >= 1.0 {
                finished.push((target, prop));
            }
        }
        for key in finished {
            self.active.remove(&key);
            completed.push(TweenDone { target: key.0, prop: key.1 });
        }
    }
}

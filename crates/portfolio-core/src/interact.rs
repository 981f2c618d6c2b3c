//! Pointer interaction math: magnetic pull, card tilt, proximity deformation
//! and the per-card hover choreography. All pure so the geometry is testable
//! without a DOM; the frontend only reads rects and applies styles.

use smallvec::SmallVec;

use crate::constants::{
    MAGNET_PULL, MAGNET_SNAP_SEC, PROXIMITY_RADIUS_PX, PROXIMITY_SCALE_BOOST, PROXIMITY_SHIFT_PX,
    PROXIMITY_SNAP_SEC, SETTLE_SEC, TILT_ENTER_SEC, TILT_LIFT_PX, TILT_MAX_DEG, TILT_SCALE,
};
use crate::tween::{Easing, Prop, TweenSpec};

/// Hover choreography a project card declares in the content table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverMotion {
    /// 3D tilt following the pointer across the card face.
    Tilt,
    /// Straight rise with a slight grow.
    Lift,
    /// Small rotation away from the entry side.
    Swing,
}

/// Short list of property tweens; hover choreography never needs more
/// than four.
pub type SpecList = SmallVec<[TweenSpec; 4]>;

/// Magnetic button displacement for a pointer `offset` from element center.
pub fn magnetic_pull(offset_x: f32, offset_y: f32) -> (f32, f32) {
    (offset_x * MAGNET_PULL, offset_y * MAGNET_PULL)
}

/// Card tilt for normalized pointer coordinates `u`, `v` in [0, 1] across the
/// card face. Returns (rotate_x, rotate_y) in degrees; the center is flat and
/// the edges hit `TILT_MAX_DEG`.
pub fn tilt_angles(u: f32, v: f32) -> (f32, f32) {
    let u = u.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    let rotate_x = (0.5 - v) * 2.0 * TILT_MAX_DEG;
    let rotate_y = (u - 0.5) * 2.0 * TILT_MAX_DEG;
    (rotate_x, rotate_y)
}

/// Quadratic falloff from 1 at the pointer to 0 at `radius`.
pub fn proximity_falloff(dist: f32, radius: f32) -> f32 {
    if radius <= 0.0 || dist >= radius {
        return 0.0;
    }
    let t = 1.0 - dist / radius;
    t * t
}

/// Deformation for a glyph whose center sits at (`dx`, `dy`) relative to the
/// pointer. Returns (shift_x, shift_y, scale): glyphs are pushed away from
/// the pointer and swell as it nears. A glyph directly under the pointer
/// swells without shifting.
pub fn proximity_deform(dx: f32, dy: f32, radius: f32) -> (f32, f32, f32) {
    let dist = (dx * dx + dy * dy).sqrt();
    let strength = proximity_falloff(dist, radius);
    let scale = 1.0 + PROXIMITY_SCALE_BOOST * strength;
    if dist < 1e-3 {
        return (0.0, 0.0, scale);
    }
    let shift = PROXIMITY_SHIFT_PX * strength;
    (dx / dist * shift, dy / dist * shift, scale)
}

impl HoverMotion {
    /// Tweens to run while the pointer is over the card, parametrized by the
    /// normalized pointer position. Called again on every pointer move so the
    /// choreography follows the pointer; replacement in the bank makes that
    /// retargeting cheap.
    pub fn enter_specs(self, u: f32, v: f32) -> SpecList {
        let mut specs = SpecList::new();
        match self {
            HoverMotion::Tilt => {
                let (rx, ry) = tilt_angles(u, v);
                specs.push(TweenSpec {
                    prop: Prop::RotateX,
                    to: rx,
                    duration: TILT_ENTER_SEC,
                    easing: Easing::QuadOut,
                });
                specs.push(TweenSpec {
                    prop: Prop::RotateY,
                    to: ry,
                    duration: TILT_ENTER_SEC,
                    easing: Easing::QuadOut,
                });
                specs.push(TweenSpec {
                    prop: Prop::Scale,
                    to: TILT_SCALE,
                    duration: TILT_ENTER_SEC,
                    easing: Easing::QuadOut,
                });
            }
            HoverMotion::Lift => {
                specs.push(TweenSpec {
                    prop: Prop::TranslateY,
                    to: -TILT_LIFT_PX,
                    duration: TILT_ENTER_SEC,
                    easing: Easing::CubicOut,
                });
                specs.push(TweenSpec {
                    prop: Prop::Scale,
                    to: TILT_SCALE,
                    duration: TILT_ENTER_SEC,
                    easing: Easing::CubicOut,
                });
            }
            HoverMotion::Swing => {
                let side = if u < 0.5 { -1.0 } else { 1.0 };
                specs.push(TweenSpec {
                    prop: Prop::Rotate,
                    to: side * 2.5,
                    duration: TILT_ENTER_SEC,
                    easing: Easing::QuadOut,
                });
                specs.push(TweenSpec {
                    prop: Prop::TranslateY,
                    to: -TILT_LIFT_PX * 0.5,
                    duration: TILT_ENTER_SEC,
                    easing: Easing::QuadOut,
                });
            }
        }
        specs
    }

    /// Tweens that return the card to rest after the pointer leaves. Covers
    /// exactly the properties `enter_specs` touches, so cards cannot drift.
    pub fn settle_specs(self) -> SpecList {
        let mut specs = SpecList::new();
        for &prop in self.touched_props() {
            specs.push(TweenSpec {
                prop,
                to: prop.identity(),
                duration: SETTLE_SEC,
                easing: Easing::ElasticOut,
            });
        }
        specs
    }

    /// Properties this motion animates, shared by enter and settle.
    pub fn touched_props(self) -> &'static [Prop] {
        match self {
            HoverMotion::Tilt => &[Prop::RotateX, Prop::RotateY, Prop::Scale],
            HoverMotion::Lift => &[Prop::TranslateY, Prop::Scale],
            HoverMotion::Swing => &[Prop::Rotate, Prop::TranslateY],
        }
    }
}

/// Tweens pulling a magnetic button toward the pointer.
pub fn magnet_enter_specs(offset_x: f32, offset_y: f32) -> SpecList {
    let (tx, ty) = magnetic_pull(offset_x, offset_y);
    let mut specs = SpecList::new();
    specs.push(TweenSpec {
        prop: Prop::TranslateX,
        to: tx,
        duration: MAGNET_SNAP_SEC,
        easing: Easing::CubicOut,
    });
    specs.push(TweenSpec {
        prop: Prop::TranslateY,
        to: ty,
        duration: MAGNET_SNAP_SEC,
        easing: Easing::CubicOut,
    });
    specs
}

/// Tweens springing a magnetic button back to rest.
pub fn magnet_settle_specs() -> SpecList {
    let mut specs = SpecList::new();
    for prop in [Prop::TranslateX, Prop::TranslateY] {
        specs.push(TweenSpec {
            prop,
            to: 0.0,
            duration: SETTLE_SEC,
            easing: Easing::ElasticOut,
        });
    }
    specs
}

/// Tweens deforming a single glyph whose center sits at (`dx`, `dy`) relative
/// to the pointer. Short durations keep the text tracking the pointer.
pub fn proximity_enter_specs(dx: f32, dy: f32) -> SpecList {
    let (shift_x, shift_y, scale) = proximity_deform(dx, dy, PROXIMITY_RADIUS_PX);
    let mut specs = SpecList::new();
    for (prop, to) in [
        (Prop::TranslateX, shift_x),
        (Prop::TranslateY, shift_y),
        (Prop::Scale, scale),
    ] {
        specs.push(TweenSpec {
            prop,
            to,
            duration: PROXIMITY_SNAP_SEC,
            easing: Easing::QuadOut,
        });
    }
    specs
}

/// Tweens springing a glyph back to rest after the pointer leaves the title.
pub fn proximity_settle_specs() -> SpecList {
    let mut specs = SpecList::new();
    for prop in [Prop::TranslateX, Prop::TranslateY, Prop::Scale] {
        specs.push(TweenSpec {
            prop,
            to: prop.identity(),
            duration: SETTLE_SEC,
            easing: Easing::ElasticOut,
        });
    }
    specs
}

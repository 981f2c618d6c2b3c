//! Camera description and the pointer-driven rig that eases toward it.
//!
//! These types avoid platform-specific APIs so the smoothing behaviour can be
//! exercised on the host. The web frontend feeds pointer offsets in and pulls
//! view/projection matrices out.

use glam::{Mat4, Vec2, Vec3};

use crate::constants::{
    CAMERA_FAR_CLIP, CAMERA_FOV_DEG, CAMERA_LOOK_DEPTH, CAMERA_NEAR_CLIP, CAMERA_PARALLAX,
    CAMERA_TAU_SEC,
};

/// Latest pointer offset from the viewport center, in CSS pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub dx: f32,
    pub dy: f32,
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Frame-rate independent exponential approach of `current` toward `target`.
///
/// `tau` is the time constant: after `tau` seconds roughly 63% of the gap is
/// closed regardless of how the elapsed time is sliced into frames. Never
/// overshoots.
#[inline]
pub fn approach(current: f32, target: f32, dt: f32, tau: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let alpha = 1.0 - (-dt / tau).exp();
    current + (target - current) * alpha
}

/// Eases the camera eye toward the pointer-implied offset each frame.
///
/// The look-at point stays fixed down the field, so lateral eye motion reads
/// as gentle parallax rather than a turn.
#[derive(Clone, Debug, Default)]
pub struct CameraRig {
    offset: Vec2,
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the smoothed offset by `dt` seconds toward the pointer.
    ///
    /// Screen y grows downward while world y grows upward, hence the flip.
    pub fn step(&mut self, pointer: PointerState, dt: f32) {
        let target = Vec2::new(pointer.dx * CAMERA_PARALLAX, -pointer.dy * CAMERA_PARALLAX);
        self.offset.x = approach(self.offset.x, target.x, dt, CAMERA_TAU_SEC);
        self.offset.y = approach(self.offset.y, target.y, dt, CAMERA_TAU_SEC);
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Current camera for the given viewport aspect ratio.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: Vec3::new(self.offset.x, self.offset.y, 0.0),
            target: Vec3::new(0.0, 0.0, -CAMERA_LOOK_DEPTH),
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR_CLIP,
            zfar: CAMERA_FAR_CLIP,
        }
    }
}

pub mod camera;
pub mod confetti;
pub mod constants;
pub mod content;
pub mod interact;
pub mod markup;
pub mod sequence;
pub mod starfield;
pub mod tween;

pub static STARFIELD_WGSL: &str = include_str!("../shaders/starfield.wgsl");

pub use camera::{approach, Camera, CameraRig, PointerState};
pub use constants::*;
pub use interact::HoverMotion;
pub use sequence::{SequenceDetector, SequenceStep, SECRET_SEQUENCE};
pub use starfield::{particle_count_for_viewport, Star, StarField, StarInstance};
pub use tween::{Easing, Prop, TweenBank, TweenDone, TweenSpec, TweenUpdate};

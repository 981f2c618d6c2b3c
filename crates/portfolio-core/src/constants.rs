// Shared tuning constants for the starfield, camera and interaction effects.

// Star field extents (depth is distance in front of the camera)
pub const FIELD_NEAR: f32 = 1.0; // recycle threshold
pub const FIELD_DEPTH: f32 = 400.0; // spawn depth for recycled stars
pub const FIELD_SPREAD: f32 = 320.0; // lateral half-extent for star positions

// Star motion and sizing
pub const STAR_SPEED: f32 = 75.0; // depth units per second toward the camera
pub const STAR_SIZE: f32 = 2.4; // billboard quad edge in world units
pub const STAR_ALPHA: f32 = 0.8;

// Population tiers (narrow viewports get fewer stars)
pub const STAR_COUNT: usize = 1000;
pub const STAR_COUNT_NARROW: usize = 420;
pub const NARROW_VIEWPORT_PX: f32 = 768.0;

// Weighted star palette: rgb plus selection weight
pub const STAR_PALETTE: [([f32; 3], f32); 4] = [
    ([0.976, 0.671, 0.918], 0.40), // pink
    ([0.420, 0.541, 0.973], 0.30), // blue
    ([0.314, 0.961, 0.584], 0.20), // green
    ([0.950, 0.960, 1.000], 0.10), // white accent
];

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR_CLIP: f32 = 0.5;
pub const CAMERA_FAR_CLIP: f32 = 500.0;
pub const CAMERA_LOOK_DEPTH: f32 = 200.0; // fixed look-at point down the field
pub const CAMERA_TAU_SEC: f32 = 0.25; // pointer smoothing time constant
pub const CAMERA_PARALLAX: f32 = 0.06; // pointer px to world-unit offset

// Rendering
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Magnetic buttons
pub const MAGNET_PULL: f32 = 0.3; // fraction of the pointer offset from center
pub const MAGNET_SNAP_SEC: f32 = 0.3;
pub const SETTLE_SEC: f32 = 0.8; // elastic return after pointer leave

// Tilt cards
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_ENTER_SEC: f32 = 0.25;
pub const TILT_LIFT_PX: f32 = 8.0;
pub const TILT_SCALE: f32 = 1.03;

// Proximity text deformation
pub const PROXIMITY_RADIUS_PX: f32 = 140.0;
pub const PROXIMITY_SHIFT_PX: f32 = 14.0;
pub const PROXIMITY_SCALE_BOOST: f32 = 0.35;
pub const PROXIMITY_SNAP_SEC: f32 = 0.2;

// Hover bursts on project cards
pub const BURST_SPARKS: usize = 6;
pub const SPARK_DIST_MIN_PX: f32 = 30.0;
pub const SPARK_DIST_MAX_PX: f32 = 80.0;
pub const SPARK_SIZE_MIN_PX: f32 = 3.0;
pub const SPARK_SIZE_MAX_PX: f32 = 6.0;
pub const SPARK_SEC_MIN: f32 = 0.45;
pub const SPARK_SEC_MAX: f32 = 0.8;

// Confetti celebration
pub const CONFETTI_COUNT: usize = 120;
pub const CONFETTI_SIZE_MIN_PX: f32 = 6.0;
pub const CONFETTI_SIZE_MAX_PX: f32 = 13.0;
pub const CONFETTI_DRIFT_PX: f32 = 220.0; // max lateral drift while falling
pub const CONFETTI_SPIN_DEG: f32 = 720.0; // max total rotation
pub const CONFETTI_FALL_MIN_SEC: f32 = 2.2;
pub const CONFETTI_FALL_MAX_SEC: f32 = 4.0;
pub const CONFETTI_STAGGER_SEC: f32 = 0.6; // max per-piece start delay

// Entrance and scroll reveals
pub const HERO_TITLE_DELAY_SEC: f32 = 0.5;
pub const HERO_TITLE_SEC: f32 = 2.5;
pub const HERO_SUBTITLE_DELAY_SEC: f32 = 1.5;
pub const HERO_SUBTITLE_SEC: f32 = 1.5;
pub const HERO_PILL_DELAY_SEC: f32 = 2.0;
pub const HERO_PILL_SEC: f32 = 1.0;
pub const HERO_PILL_STAGGER_SEC: f32 = 0.2;
pub const ENTRANCE_RISE_PX: f32 = 30.0;
pub const REVEAL_RISE_PX: f32 = 100.0; // project cards rise into place
pub const REVEAL_CARD_SEC: f32 = 1.0;
pub const REVEAL_CARD_STAGGER_SEC: f32 = 0.2;
pub const REVEAL_SHIFT_PX: f32 = 50.0; // tech items slide in from the left
pub const REVEAL_TECH_SEC: f32 = 0.8;
pub const REVEAL_TECH_STAGGER_SEC: f32 = 0.1;

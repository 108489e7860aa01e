//! Starfield tuning constants.
//!
//! These constants express intended behavior (spans, smoothing gains, camera
//! and material parameters) and keep magic numbers out of the code.

// Particle field
pub const PARTICLE_COUNT: usize = 4500;
pub const SPAN_X: f32 = 25.0;
pub const SPAN_Y: f32 = 40.0; // tall field
pub const SPAN_Z: f32 = 20.0;

// Palette selection: c > UPPER picks the first color, c > LOWER the second
pub const COLOR_UPPER_THRESHOLD: f32 = 0.6;
pub const COLOR_LOWER_THRESHOLD: f32 = 0.3;

pub const COLOR_WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const COLOR_CYAN: [f32; 3] = [0.0, 0.94, 1.0];
pub const COLOR_PURPLE: [f32; 3] = [0.44, 0.0, 1.0];

// Pointer-driven rotation
pub const POINTER_SENSITIVITY: f32 = 0.0005; // radians per pixel of offset
pub const ROTATION_GAIN: f32 = 0.02; // per-frame lerp factor
pub const Z_DRIFT_PER_FRAME: f32 = 0.0002;

// Scroll-driven camera travel
pub const SCROLL_SENSITIVITY: f32 = 0.0015; // world units per scrolled pixel
pub const CAMERA_GAIN: f32 = 0.08; // per-frame lerp factor

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 2000.0;
pub const CAMERA_Z: f32 = 2.0;

// Material
pub const POINT_SIZE: f32 = 0.012; // world units, size-attenuated
pub const POINT_MIN_PX: f32 = 1.0;
pub const POINT_OPACITY: f32 = 0.85;

// Fog (exp2), matches the page background
pub const FOG_COLOR: [f32; 3] = [0.0196, 0.0196, 0.0314]; // #050508
pub const FOG_DENSITY: f32 = 0.001;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MSAA_SAMPLES: u32 = 4; // WebGPU allows 1 or 4

// DOM
pub const CONTAINER_ID: &str = "canvas-container";
pub const CONTAINER_STYLE: &str =
    "position:fixed;top:0;left:0;width:100%;height:100%;z-index:-1;pointer-events:none;";

//! Unclamped interpolation helpers for every tweenable value kind.

pub mod functions;

pub use functions::{lerp_color, lerp_f32, lerp_f64, lerp_int, lerp_value, lerp_vec2, lerp_vec3};

//! Interpolation helpers:
//! - lerp_f32 / lerp_f64 (scalars)
//! - lerp_int (f32 step on an f64 base, truncated toward zero)
//! - lerp_vec2 / lerp_vec3 / lerp_color (component-wise)
//!
//! None of these clamp `t`; overshooting curves (Back, Elastic) extrapolate.

use crate::value::{Color, Value};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// The step `(b - a) * t` stays in f32 so the factor is not widened first:
/// widening 0.7f32 gives 0.69999998.., which would truncate 0→10 down to 6.
/// The base stays in f64 so large endpoints keep their precision.
/// `as` saturates on overflow and maps NaN to 0.
#[inline]
pub fn lerp_int(a: i32, b: i32, t: f32) -> i32 {
    let step = (b as f64 - a as f64) as f32 * t;
    (a as f64 + step as f64) as i32
}

#[inline]
pub fn lerp_vec2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

#[inline]
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: lerp_f32(a.r, b.r, t),
        g: lerp_f32(a.g, b.g, t),
        b: lerp_f32(a.b, b.b, t),
        a: lerp_f32(a.a, b.a, t),
    }
}

/// Interpolate across Value kinds. Returns None when the kinds differ or the
/// kind has no continuous path (Bool, Vec4, Text).
pub fn lerp_value(a: &Value, b: &Value, t: f32) -> Option<Value> {
    let v = match (a, b) {
        (Value::Int(va), Value::Int(vb)) => Value::Int(lerp_int(*va, *vb, t)),
        (Value::Float(va), Value::Float(vb)) => Value::Float(lerp_f32(*va, *vb, t)),
        (Value::Double(va), Value::Double(vb)) => Value::Double(lerp_f64(*va, *vb, t as f64)),
        (Value::Vec2(va), Value::Vec2(vb)) => Value::Vec2(lerp_vec2(*va, *vb, t)),
        (Value::Vec3(va), Value::Vec3(vb)) => Value::Vec3(lerp_vec3(*va, *vb, t)),
        (Value::Color(ca), Value::Color(cb)) => Value::Color(lerp_color(*ca, *cb, t)),
        _ => return None,
    };
    Some(v)
}

//! Value kinds the registry stores, and the typed values that map onto them.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Float,
    Double,
    Vec2,
    Vec3,
    Vec4,
    Color,
    Bool,
    Text,
}

impl ValueKind {
    /// Kinds the registry knows how to advance on a tick.
    #[inline]
    pub fn is_tweenable(self) -> bool {
        !matches!(self, ValueKind::Vec4 | ValueKind::Text)
    }
}

/// RGBA color, one f32 per channel.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn from_array(c: [f32; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    /// Largest absolute per-channel difference.
    #[inline]
    pub fn max_channel_delta(self, other: Color) -> f32 {
        let a = self.to_array();
        let b = other.to_array();
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f32::max)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    Int(i32),
    Float(f32),
    Double(f64),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    /// Representable for host bindings, not tweenable.
    Vec4([f32; 4]),
    Color(Color),
    /// Terminal-only: snaps at the end of the tween.
    Bool(bool),
    /// Not tweenable.
    Text(String),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Vec4(_) => ValueKind::Vec4,
            Value::Color(_) => ValueKind::Color,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
        }
    }
}

/// Typed values that can be tweened through a closure accessor pair.
pub trait Animatable: Copy + 'static {
    const KIND: ValueKind;

    fn into_value(self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_animatable {
    ($ty:ty, $variant:ident) => {
        impl Animatable for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            #[inline]
            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            #[inline]
            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            #[inline]
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }
    };
}

impl_animatable!(i32, Int);
impl_animatable!(f32, Float);
impl_animatable!(f64, Double);
impl_animatable!([f32; 2], Vec2);
impl_animatable!([f32; 3], Vec3);
impl_animatable!(Color, Color);
impl_animatable!(bool, Bool);

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<[f32; 4]> for Value {
    fn from(v: [f32; 4]) -> Self {
        Value::Vec4(v)
    }
}

//! Easing library: maps an elapsed fraction to an interpolation factor.
//!
//! Formulas follow the classic Penner reference set. Input is not clamped, so
//! callers may feed fractions outside [0, 1]; the power and trig curves simply
//! extend, while Back and Elastic overshoot by design.

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f32 = (2.0 * PI) / 4.5;
const BOUNCE_N1: f32 = 7.5625;
const BOUNCE_D1: f32 = 2.75;

/// Curve shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Linear,
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Exponential,
    Elastic,
    Circular,
    Bounce,
    Back,
}

impl Transition {
    pub const ALL: [Transition; 11] = [
        Transition::Linear,
        Transition::Sine,
        Transition::Quad,
        Transition::Cubic,
        Transition::Quart,
        Transition::Quint,
        Transition::Exponential,
        Transition::Elastic,
        Transition::Circular,
        Transition::Bounce,
        Transition::Back,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Transition::Linear => "linear",
            Transition::Sine => "sine",
            Transition::Quad => "quad",
            Transition::Cubic => "cubic",
            Transition::Quart => "quart",
            Transition::Quint => "quint",
            Transition::Exponential => "exponential",
            Transition::Elastic => "elastic",
            Transition::Circular => "circular",
            Transition::Bounce => "bounce",
            Transition::Back => "back",
        }
    }
}

/// Which end of the curve accelerates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    In,
    Out,
    InOut,
}

impl Ease {
    pub const ALL: [Ease; 3] = [Ease::In, Ease::Out, Ease::InOut];

    pub fn name(self) -> &'static str {
        match self {
            Ease::In => "in",
            Ease::Out => "out",
            Ease::InOut => "in_out",
        }
    }
}

/// A transition paired with its ease direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Easing {
    pub transition: Transition,
    #[serde(default)]
    pub ease: Ease,
}

impl Easing {
    pub const LINEAR: Easing = Easing::new(Transition::Linear, Ease::In);

    pub const fn new(transition: Transition, ease: Ease) -> Self {
        Self { transition, ease }
    }

    #[inline]
    pub fn factor(self, t: f32) -> f32 {
        factor(t, self.transition, self.ease)
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::LINEAR
    }
}

/// Evaluate the easing curve at elapsed fraction `t`.
///
/// Linear ignores `ease` and returns `t` unchanged.
pub fn factor(t: f32, transition: Transition, ease: Ease) -> f32 {
    use Ease::*;
    use Transition::*;
    match (transition, ease) {
        (Linear, _) => t,

        (Sine, In) => 1.0 - (t * FRAC_PI_2).cos(),
        (Sine, Out) => (t * FRAC_PI_2).sin(),
        (Sine, InOut) => -((PI * t).cos() - 1.0) / 2.0,

        (Quad, In) => t * t,
        (Quad, Out) => 1.0 - (1.0 - t) * (1.0 - t),
        (Quad, InOut) => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }

        (Cubic, In) => t * t * t,
        (Cubic, Out) => 1.0 - (1.0 - t).powi(3),
        (Cubic, InOut) => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }

        (Quart, In) => t.powi(4),
        (Quart, Out) => 1.0 - (1.0 - t).powi(4),
        (Quart, InOut) => {
            if t < 0.5 {
                8.0 * t.powi(4)
            } else {
                1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
            }
        }

        (Quint, In) => t.powi(5),
        (Quint, Out) => 1.0 - (1.0 - t).powi(5),
        (Quint, InOut) => {
            if t < 0.5 {
                16.0 * t.powi(5)
            } else {
                1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
            }
        }

        // 2^(10t - 10) is ~0.001 at t = 0, hence the explicit endpoints.
        (Exponential, In) => {
            if t == 0.0 {
                0.0
            } else {
                2f32.powf(10.0 * t - 10.0)
            }
        }
        (Exponential, Out) => {
            if t == 1.0 {
                1.0
            } else {
                1.0 - 2f32.powf(-10.0 * t)
            }
        }
        (Exponential, InOut) => {
            if t == 0.0 {
                0.0
            } else if t == 1.0 {
                1.0
            } else if t < 0.5 {
                2f32.powf(20.0 * t - 10.0) / 2.0
            } else {
                (2.0 - 2f32.powf(-20.0 * t + 10.0)) / 2.0
            }
        }

        (Elastic, In) => {
            if t == 0.0 || t == 1.0 {
                t
            } else {
                -(2f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
            }
        }
        (Elastic, Out) => {
            if t == 0.0 || t == 1.0 {
                t
            } else {
                2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
            }
        }
        (Elastic, InOut) => {
            if t == 0.0 || t == 1.0 {
                t
            } else if t < 0.5 {
                -(2f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0
            } else {
                (2f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0
                    + 1.0
            }
        }

        (Circular, In) => 1.0 - (1.0 - t * t).sqrt(),
        (Circular, Out) => (1.0 - (t - 1.0) * (t - 1.0)).sqrt(),
        (Circular, InOut) => {
            if t < 0.5 {
                (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
            } else {
                ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
            }
        }

        (Bounce, In) => 1.0 - bounce_out(1.0 - t),
        (Bounce, Out) => bounce_out(t),
        (Bounce, InOut) => {
            if t < 0.5 {
                (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
            } else {
                (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
            }
        }

        (Back, In) => BACK_C3 * t * t * t - BACK_C1 * t * t,
        (Back, Out) => 1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2),
        (Back, InOut) => {
            if t < 0.5 {
                ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
            } else {
                ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2) + 2.0)
                    / 2.0
            }
        }
    }
}

/// Piecewise parabolic staircase shared by every Bounce direction.
#[inline]
fn bounce_out(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

/// Lowercase and drop `_`, `-` and spaces so `InOut`, `in_out` and `in-out` all match.
fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Transition {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match normalize_name(s).as_str() {
            "linear" => Transition::Linear,
            "sine" | "sin" => Transition::Sine,
            "quad" | "quadratic" => Transition::Quad,
            "cubic" => Transition::Cubic,
            "quart" | "quartic" => Transition::Quart,
            "quint" | "quintic" => Transition::Quint,
            "exponential" | "expo" => Transition::Exponential,
            "elastic" => Transition::Elastic,
            "circular" | "circ" => Transition::Circular,
            "bounce" => Transition::Bounce,
            "back" => Transition::Back,
            _ => {
                return Err(TweenError::UnknownTransition {
                    name: s.to_string(),
                })
            }
        };
        Ok(t)
    }
}

impl FromStr for Ease {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "in" => Ok(Ease::In),
            "out" => Ok(Ease::Out),
            "inout" => Ok(Ease::InOut),
            _ => Err(TweenError::UnknownEase {
                name: s.to_string(),
            }),
        }
    }
}

/// Accepts `transition.direction` (e.g. `elastic.in_out`). A bare `linear` is
/// allowed since Linear ignores direction; every other transition needs one.
impl FromStr for Easing {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let (transition, ease) = match (parts.next(), parts.next(), parts.next()) {
            (Some(t), Some(e), None) => (t.parse::<Transition>()?, e.parse::<Ease>()?),
            (Some(t), None, None) => match t.parse::<Transition>()? {
                Transition::Linear => (Transition::Linear, Ease::In),
                _ => {
                    return Err(TweenError::MalformedEasing {
                        input: s.to_string(),
                    })
                }
            },
            _ => {
                return Err(TweenError::MalformedEasing {
                    input: s.to_string(),
                })
            }
        };
        Ok(Easing::new(transition, ease))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.transition, self.ease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn every_curve_starts_at_zero_and_ends_at_one() {
        for transition in Transition::ALL {
            for ease in Ease::ALL {
                approx(factor(0.0, transition, ease), 0.0, 1e-5);
                approx(factor(1.0, transition, ease), 1.0, 1e-5);
            }
        }
    }

    #[test]
    fn exponential_and_elastic_endpoints_are_exact() {
        for transition in [Transition::Exponential, Transition::Elastic] {
            for ease in Ease::ALL {
                assert_eq!(factor(0.0, transition, ease), 0.0, "{transition}.{ease}");
                assert_eq!(factor(1.0, transition, ease), 1.0, "{transition}.{ease}");
            }
        }
    }

    #[test]
    fn linear_is_identity_everywhere() {
        for t in [-1.5f32, -0.25, 0.0, 0.3, 0.5, 1.0, 1.75, 10.0] {
            for ease in Ease::ALL {
                assert_eq!(factor(t, Transition::Linear, ease), t);
            }
        }
    }

    #[test]
    fn in_out_curves_pass_through_midpoint() {
        for transition in Transition::ALL {
            approx(factor(0.5, transition, Ease::InOut), 0.5, 1e-4);
        }
    }

    #[test]
    fn in_and_out_are_mirror_images() {
        for transition in Transition::ALL {
            for i in 0..=20 {
                let t = i as f32 / 20.0;
                let a = factor(t, transition, Ease::In);
                let b = 1.0 - factor(1.0 - t, transition, Ease::Out);
                approx(a, b, 1e-4);
            }
        }
    }

    #[test]
    fn known_values() {
        approx(factor(0.5, Transition::Quad, Ease::In), 0.25, 1e-6);
        approx(factor(0.5, Transition::Cubic, Ease::Out), 0.875, 1e-6);
        approx(factor(0.5, Transition::Quint, Ease::In), 0.03125, 1e-6);
        approx(factor(0.5, Transition::Sine, Ease::Out), 0.70710677, 1e-6);
        approx(factor(0.5, Transition::Exponential, Ease::In), 0.03125, 1e-6);
        approx(factor(0.5, Transition::Bounce, Ease::Out), 0.765625, 1e-6);
    }

    #[test]
    fn back_and_elastic_overshoot() {
        assert!(factor(0.2, Transition::Back, Ease::In) < 0.0);
        assert!(factor(0.8, Transition::Back, Ease::Out) > 1.0);
        let peak = (1..100)
            .map(|i| factor(i as f32 / 100.0, Transition::Elastic, Ease::Out))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn bounce_out_is_bounded_and_ends_at_one() {
        for i in 0..=100 {
            let v = factor(i as f32 / 100.0, Transition::Bounce, Ease::Out);
            assert!((0.0..=1.0 + 1e-5).contains(&v), "bounce out left range: {v}");
        }
    }

    #[test]
    fn deterministic() {
        for transition in Transition::ALL {
            for ease in Ease::ALL {
                let a = factor(0.37, transition, ease);
                let b = factor(0.37, transition, ease);
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("Elastic".parse::<Transition>().unwrap(), Transition::Elastic);
        assert_eq!("quadratic".parse::<Transition>().unwrap(), Transition::Quad);
        assert_eq!("in-out".parse::<Ease>().unwrap(), Ease::InOut);
        assert_eq!(
            "back.InOut".parse::<Easing>().unwrap(),
            Easing::new(Transition::Back, Ease::InOut)
        );
        assert_eq!("linear".parse::<Easing>().unwrap(), Easing::LINEAR);
    }

    #[test]
    fn rejects_unknown_combinations() {
        assert!(matches!(
            "wobble.in".parse::<Easing>(),
            Err(TweenError::UnknownTransition { .. })
        ));
        assert!(matches!(
            "sine.sideways".parse::<Easing>(),
            Err(TweenError::UnknownEase { .. })
        ));
        assert!(matches!(
            "sine".parse::<Easing>(),
            Err(TweenError::MalformedEasing { .. })
        ));
        assert!(matches!(
            "sine.in.out".parse::<Easing>(),
            Err(TweenError::MalformedEasing { .. })
        ));
    }

    #[test]
    fn display_round_trips() {
        for transition in Transition::ALL {
            for ease in Ease::ALL {
                let e = Easing::new(transition, ease);
                assert_eq!(e.to_string().parse::<Easing>().unwrap(), e);
            }
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let e = Easing::new(Transition::Circular, Ease::InOut);
        let json = serde_json::to_value(e).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"transition": "circular", "ease": "in_out"})
        );
        let back: Easing =
            serde_json::from_value(serde_json::json!({"transition": "linear"})).unwrap();
        assert_eq!(back, Easing::LINEAR);
    }
}

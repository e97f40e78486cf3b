//! Vizij Tween Core (engine-agnostic)
//!
//! Tick-driven property tweening. A host owns a `TweenRegistry`, starts tweens
//! against accessor pairs bound to whatever it wants animated, and calls
//! `tick(now)` once per frame or physics step. Each tick eases the elapsed
//! fraction through the easing library, writes the interpolated value through
//! the accessor, and fires completion listeners for tweens that finished.
//!
//! The registry never reads a clock and never spawns threads.

pub mod completion;
pub mod config;
pub mod easing;
pub mod error;
pub mod ids;
pub mod interp;
pub mod outputs;
pub mod property;
pub mod registry;
pub mod value;

// Re-exports for consumers (adapters)
pub use completion::Completion;
pub use config::{Config, UpdateMode};
pub use easing::{factor, Ease, Easing, Transition};
pub use error::{Result, TweenError};
pub use ids::TweenId;
pub use outputs::TickReport;
pub use property::{Accessor, Property};
pub use registry::{TweenHandle, TweenRegistry};
pub use value::{Animatable, Color, Value, ValueKind};

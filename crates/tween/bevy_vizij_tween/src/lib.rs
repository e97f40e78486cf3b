//! Bevy adapter for vizij-tween-core.
//!
//! The plugin owns one `TweenRegistry` and ticks it from the schedule picked by
//! `Config::update_mode`: `Update` for per-frame tweening, `FixedUpdate` for
//! physics-step tweening. Finished and failed tweens are forwarded as events.

use bevy::prelude::*;
use vizij_tween_core::{Config, TweenRegistry, UpdateMode};

pub mod systems;

pub use systems::{tick_tweens_system, TweenFailed, TweenFinished};

/// The registry, stored as a non-send resource since accessors may capture
/// `Rc` state.
pub struct TweenEngine(pub TweenRegistry);

/// Panics in `build` if `config` fails `Config::validate`.
#[derive(Default)]
pub struct VizijTweenPlugin {
    pub config: Config,
}

impl VizijTweenPlugin {
    pub fn fixed_step() -> Self {
        Self {
            config: Config {
                update_mode: UpdateMode::FixedStep,
                ..Config::default()
            },
        }
    }
}

impl Plugin for VizijTweenPlugin {
    fn build(&self, app: &mut App) {
        let registry = TweenRegistry::new(self.config.clone())
            .unwrap_or_else(|err| panic!("VizijTweenPlugin: {err}"));
        app.insert_non_send_resource(TweenEngine(registry))
            .add_event::<TweenFinished>()
            .add_event::<TweenFailed>();
        match self.config.update_mode {
            UpdateMode::Frame => app.add_systems(Update, tick_tweens_system),
            UpdateMode::FixedStep => app.add_systems(FixedUpdate, tick_tweens_system),
        };
    }
}

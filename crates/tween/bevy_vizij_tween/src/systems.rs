use bevy::prelude::*;
use vizij_tween_core::TweenId;

use crate::TweenEngine;

/// A tween reached its end value this tick.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenFinished {
    pub id: TweenId,
}

/// A tween was dropped because it could not be advanced.
#[derive(Event, Clone, Debug)]
pub struct TweenFailed {
    pub id: Option<TweenId>,
    pub message: String,
}

/// Ticks the registry with the schedule's elapsed time and forwards the report.
pub fn tick_tweens_system(
    mut engine: NonSendMut<TweenEngine>,
    time: Res<Time>,
    mut finished: EventWriter<TweenFinished>,
    mut failed: EventWriter<TweenFailed>,
) {
    let report = engine.0.tick(time.elapsed_seconds_f64());
    for id in report.completed {
        finished.send(TweenFinished { id });
    }
    for err in report.failures {
        log::warn!("tween dropped: {err}");
        failed.send(TweenFailed {
            id: err.tween(),
            message: err.to_string(),
        });
    }
}

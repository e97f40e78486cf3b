//! Output of one registry tick.
//!
//! Values are written straight through each tween's accessor, so the report
//! only carries the semantic signals: which tweens finished and which were
//! dropped because they could not be advanced.

use crate::error::TweenError;
use crate::ids::TweenId;

#[derive(Debug, Default)]
pub struct TickReport {
    /// Tweens that reached their end this tick, in start order.
    pub completed: Vec<TweenId>,
    /// Tweens removed without completing, in start order.
    pub failures: Vec<TweenError>,
}

impl TickReport {
    #[inline]
    pub fn clear(&mut self) {
        self.completed.clear();
        self.failures.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.failures.is_empty()
    }

    #[inline]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

//! Registry: owns in-flight tweens and advances them once per host tick.
//!
//! Methods:
//! - start / start_from (dynamic `Property`), tween / tween_from (typed closures)
//! - tick / advance (host clock), stop_all / cancel (no setter call, no notification)
//!
//! Numeric and vector kinds finish when elapsed time reaches the duration.
//! Color finishes when every channel is within `Config::resolution` of the
//! target, or at the latest when elapsed time reaches the duration. Bool never
//! takes an intermediate value and snaps once the elapsed fraction passes
//! `1 - resolution`. A duration that is zero, negative or NaN finishes on the
//! first tick.

use std::fmt;

use crate::completion::Completion;
use crate::config::{Config, UpdateMode};
use crate::easing::Easing;
use crate::error::{Result, TweenError};
use crate::ids::{IdAllocator, TweenId};
use crate::interp::{lerp_color, lerp_value};
use crate::outputs::TickReport;
use crate::property::{Accessor, Property};
use crate::value::{Animatable, Value, ValueKind};

/// Returned from every start call.
#[derive(Clone, Debug)]
pub struct TweenHandle {
    pub id: TweenId,
    pub completion: Completion,
}

impl TweenHandle {
    /// Attach a completion listener; see [`Completion::on_complete`].
    pub fn on_complete(&self, listener: impl FnOnce() + 'static) -> &Self {
        self.completion.on_complete(listener);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.completion.is_complete()
    }
}

/// One active interpolation.
struct Tween {
    id: TweenId,
    property: Box<dyn Property>,
    start: Value,
    end: Value,
    duration: f64,
    start_time: f64,
    easing: Easing,
    completion: Completion,
}

enum Step {
    Continue,
    Finish,
    Fail(TweenError),
}

impl Tween {
    /// Elapsed fraction, or None when the duration cannot produce one.
    #[inline]
    fn fraction(&self, now: f64) -> Option<f64> {
        (self.duration > 0.0).then(|| (now - self.start_time) / self.duration)
    }

    #[inline]
    fn eased(&self, fraction: f64) -> f32 {
        self.easing.factor(fraction as f32)
    }

    fn step(&mut self, now: f64, resolution: f32) -> Step {
        let kind = self.end.kind();
        if !kind.is_tweenable() {
            return Step::Fail(TweenError::UnsupportedType { id: self.id, kind });
        }
        if self.start.kind() != kind {
            return Step::Fail(TweenError::KindMismatch {
                id: self.id,
                expected: kind,
                actual: self.start.kind(),
            });
        }
        let Some(fraction) = self.fraction(now) else {
            return Step::Finish;
        };

        match (&self.start, &self.end) {
            (Value::Color(start), Value::Color(end)) => {
                let current = match self.property.get() {
                    Value::Color(c) => c,
                    other => {
                        return Step::Fail(TweenError::KindMismatch {
                            id: self.id,
                            expected: ValueKind::Color,
                            actual: other.kind(),
                        })
                    }
                };
                let converged = current.max_channel_delta(*end) <= resolution;
                if converged || now - self.start_time >= self.duration {
                    return Step::Finish;
                }
                let value = lerp_color(*start, *end, self.eased(fraction));
                self.property.set(Value::Color(value));
                Step::Continue
            }
            (Value::Bool(_), Value::Bool(_)) => {
                if fraction <= 1.0 - resolution as f64 {
                    Step::Continue
                } else {
                    Step::Finish
                }
            }
            (start, end) => {
                if now - self.start_time >= self.duration {
                    return Step::Finish;
                }
                match lerp_value(start, end, self.eased(fraction)) {
                    Some(value) => {
                        self.property.set(value);
                        Step::Continue
                    }
                    None => Step::Fail(TweenError::UnsupportedType { id: self.id, kind }),
                }
            }
        }
    }

    fn finish(&mut self) {
        self.property.set(self.end.clone());
        self.completion.fire();
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("id", &self.id)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("duration", &self.duration)
            .field("start_time", &self.start_time)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}

/// Registry of active tweens, processed in start order.
pub struct TweenRegistry {
    config: Config,
    clock: f64,
    ids: IdAllocator,
    tweens: Vec<Tween>,
}

impl Default for TweenRegistry {
    fn default() -> Self {
        Self::with_valid_config(Config::default())
    }
}

impl TweenRegistry {
    /// Build a registry, rejecting configs that fail [`Config::validate`].
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: Config) -> Self {
        Self {
            clock: config.start_time,
            config,
            ids: IdAllocator::new(),
            tweens: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.config.update_mode
    }

    /// Last time supplied by the host. New tweens start at this reading.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Move the clock without advancing any tween.
    pub fn set_clock(&mut self, now: f64) {
        self.clock = now;
    }

    /// Start a tween from the property's current value. The setter is not called.
    pub fn start(
        &mut self,
        property: impl Property + 'static,
        end: impl Into<Value>,
        duration: f64,
        easing: Easing,
    ) -> TweenHandle {
        let start = property.get();
        self.register(Box::new(property), start, end.into(), duration, easing)
    }

    /// Start a tween from an explicit value, snapping the property to it now.
    pub fn start_from(
        &mut self,
        mut property: impl Property + 'static,
        start: impl Into<Value>,
        end: impl Into<Value>,
        duration: f64,
        easing: Easing,
    ) -> TweenHandle {
        let start = start.into();
        property.set(start.clone());
        self.register(Box::new(property), start, end.into(), duration, easing)
    }

    /// Typed form of [`start`](Self::start).
    pub fn tween<T: Animatable>(
        &mut self,
        getter: impl Fn() -> T + 'static,
        setter: impl FnMut(T) + 'static,
        end: T,
        duration: f64,
        easing: Easing,
    ) -> TweenHandle {
        self.start(Accessor::new(getter, setter), end.into_value(), duration, easing)
    }

    /// Typed form of [`start_from`](Self::start_from).
    pub fn tween_from<T: Animatable>(
        &mut self,
        getter: impl Fn() -> T + 'static,
        setter: impl FnMut(T) + 'static,
        start: T,
        end: T,
        duration: f64,
        easing: Easing,
    ) -> TweenHandle {
        self.start_from(
            Accessor::new(getter, setter),
            start.into_value(),
            end.into_value(),
            duration,
            easing,
        )
    }

    fn register(
        &mut self,
        property: Box<dyn Property>,
        start: Value,
        end: Value,
        duration: f64,
        easing: Easing,
    ) -> TweenHandle {
        let id = self.ids.alloc_tween();
        let completion = Completion::new();
        log::debug!(
            "{id}: start {:?} over {duration}s ({easing}) at t={}",
            end.kind(),
            self.clock
        );
        self.tweens.push(Tween {
            id,
            property,
            start,
            end,
            duration,
            start_time: self.clock,
            easing,
            completion: completion.clone(),
        });
        TweenHandle { id, completion }
    }

    /// Advance every tween to `now`.
    ///
    /// Finished tweens get their end value, are removed, then notify. Tweens
    /// that cannot be advanced are removed without notification and reported
    /// in `TickReport::failures`; the rest of the tick is unaffected.
    pub fn tick(&mut self, now: f64) -> TickReport {
        self.clock = now;
        let resolution = self.config.resolution;
        let mut report = TickReport::default();

        // Single pass; retain_mut compacts behind the cursor so removals never
        // skip or revisit a neighbour.
        self.tweens.retain_mut(|tween| match tween.step(now, resolution) {
            Step::Continue => true,
            Step::Finish => {
                log::debug!("{}: complete at t={now}", tween.id);
                tween.finish();
                report.completed.push(tween.id);
                false
            }
            Step::Fail(err) => {
                log::error!("{err}; tween removed");
                tween.completion.cancel();
                report.failures.push(err);
                false
            }
        });
        report
    }

    /// Advance the clock by `dt` seconds and tick.
    pub fn advance(&mut self, dt: f64) -> TickReport {
        self.tick(self.clock + dt)
    }

    /// Remove every tween without writing end values or notifying.
    /// Returns how many were removed.
    pub fn stop_all(&mut self) -> usize {
        let count = self.tweens.len();
        for tween in self.tweens.drain(..) {
            tween.completion.cancel();
        }
        if count > 0 {
            log::debug!("stopped {count} tween(s)");
        }
        count
    }

    /// Remove one tween with the same semantics as [`stop_all`](Self::stop_all).
    /// Returns false if it already finished or was never started here.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        match self.tweens.iter().position(|t| t.id == id) {
            Some(idx) => {
                let tween = self.tweens.remove(idx);
                tween.completion.cancel();
                log::debug!("{id}: cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|t| t.id == id)
    }

    /// Active tween ids in start order.
    pub fn ids(&self) -> impl Iterator<Item = TweenId> + '_ {
        self.tweens.iter().map(|t| t.id)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl fmt::Debug for TweenRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenRegistry")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("tweens", &self.tweens)
            .finish()
    }
}

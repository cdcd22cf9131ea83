//! Timer-driven LED countdown state machine.
//!
//! Provides [`Countdown`], which owns the current [`Level`], the LED sink and
//! the one-shot alarm used to step the sequence down every fixed interval.

use crate::command::CountdownAction;
use crate::config::CountdownConfig;
use crate::led::RgbLed;
use crate::platform::OneShotAlarm;
use crate::types::{LedOutputs, Level};

/// Timing information returned by countdown operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepTiming<D> {
    /// An alarm is armed and the next step fires after this delay.
    Delay(D),

    /// The countdown is idle. No alarm is armed.
    Complete,

    /// The callback belonged to an alarm that is no longer armed. Nothing
    /// changed.
    Stale,
}

/// Errors that can occur during countdown operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownError {
    /// Operation called from an invalid level. Nothing was changed.
    InvalidState {
        /// Level the operation requires.
        expected: Level,
        /// The actual current level.
        actual: Level,
    },
}

impl core::fmt::Display for CountdownError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CountdownError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {:?}, but countdown is at {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CountdownError {}

/// Drives three LEDs through a `AllOn -> TwoOn -> OneOn -> Idle` countdown.
///
/// [`trigger`](Self::trigger) starts the sequence from `Idle`; each alarm
/// callback calls [`advance`](Self::advance), which steps down one level and
/// re-arms the alarm until the countdown is idle again. At most one alarm is
/// ever pending.
///
/// Both operations mutate shared state. When the alarm callback runs in an
/// interrupt, keep the countdown in a [`SharedCountdown`](crate::SharedCountdown).
///
/// # Type Parameters
/// * `L` - LED implementation type
/// * `A` - One-shot alarm implementation type
pub struct Countdown<L: RgbLed, A: OneShotAlarm> {
    led: L,
    alarm: A,
    level: Level,
    step_delay: A::Duration,
    pending: Option<A::Handle>,
}

impl<L: RgbLed, A: OneShotAlarm> Countdown<L, A> {
    /// Creates an idle countdown with all LEDs turned off.
    pub fn new(mut led: L, alarm: A, step_delay: A::Duration) -> Self {
        led.set_color(Level::Idle.color());

        Self {
            led,
            alarm,
            level: Level::Idle,
            step_delay,
            pending: None,
        }
    }

    /// Creates an idle countdown using the configured step delay.
    pub fn from_config(led: L, alarm: A, config: &CountdownConfig) -> Self {
        Self::new(led, alarm, config.step_delay())
    }

    /// Handles an action by dispatching to the matching method.
    ///
    /// # Returns
    /// * `Ok(StepTiming)` - Timing after the action
    /// * `Err` - `Press` while the countdown is running
    pub fn handle_action(
        &mut self,
        action: CountdownAction<A::Handle>,
    ) -> Result<StepTiming<A::Duration>, CountdownError> {
        match action {
            CountdownAction::Press => self.trigger(),
            CountdownAction::AlarmFired(fired) => Ok(self.advance(fired)),
            CountdownAction::Reset => {
                self.reset();
                Ok(StepTiming::Complete)
            }
        }
    }

    /// Starts the countdown at `AllOn` and arms the first step.
    ///
    /// Must be called from `Idle`. From any other level this changes nothing
    /// and returns an error.
    pub fn trigger(&mut self) -> Result<StepTiming<A::Duration>, CountdownError> {
        if !self.level.is_idle() {
            #[cfg(feature = "defmt")]
            defmt::debug!("press ignored at {}", self.level);

            return Err(CountdownError::InvalidState {
                expected: Level::Idle,
                actual: self.level,
            });
        }

        self.set_level(Level::AllOn);
        self.arm();
        Ok(StepTiming::Delay(self.step_delay))
    }

    /// Steps the countdown down one level. Call from the alarm callback with
    /// the handle of the alarm that fired.
    ///
    /// Re-arms the alarm unless the new level is `Idle`. A `fired` handle that
    /// is not the pending one (a callback delivered after `reset`, or one
    /// arriving while idle) returns [`StepTiming::Stale`] and changes nothing.
    pub fn advance(&mut self, fired: A::Handle) -> StepTiming<A::Duration> {
        if self.pending != Some(fired) {
            #[cfg(feature = "defmt")]
            defmt::debug!("stale step alarm ignored");

            return StepTiming::Stale;
        }

        // Spent handles cancel harmlessly; this also covers an early callback.
        self.pending = None;
        self.alarm.cancel(fired);

        if self.level.is_idle() {
            return StepTiming::Complete;
        }

        self.set_level(self.level.decay());

        if self.level.is_idle() {
            #[cfg(feature = "defmt")]
            defmt::debug!("countdown complete");

            StepTiming::Complete
        } else {
            self.arm();
            StepTiming::Delay(self.step_delay)
        }
    }

    /// Cancels any pending step and returns to `Idle` with all LEDs off.
    pub fn reset(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.alarm.cancel(handle);
        }
        self.set_level(Level::Idle);
    }

    /// Returns the current level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns true if no countdown is in progress.
    pub fn is_idle(&self) -> bool {
        self.level.is_idle()
    }

    /// Returns true if a step alarm is armed.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the outputs currently applied to the LEDs.
    pub fn outputs(&self) -> LedOutputs {
        self.level.outputs()
    }

    /// Returns the handle of the armed step alarm, if any.
    pub fn pending_handle(&self) -> Option<A::Handle> {
        self.pending
    }

    /// Returns the spacing between steps.
    pub fn step_delay(&self) -> A::Duration {
        self.step_delay
    }

    /// Returns a reference to the LED sink.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Returns a reference to the alarm.
    pub fn alarm(&self) -> &A {
        &self.alarm
    }

    /// Returns a mutable reference to the alarm, e.g. to acknowledge it.
    pub fn alarm_mut(&mut self) -> &mut A {
        &mut self.alarm
    }

    fn set_level(&mut self, level: Level) {
        #[cfg(feature = "defmt")]
        defmt::debug!("level {} -> {}", self.level, level);

        self.level = level;
        self.led.set_color(level.color());
    }

    fn arm(&mut self) {
        if let Some(stale) = self.pending.take() {
            #[cfg(feature = "defmt")]
            defmt::warn!("cancelling stale step alarm");

            self.alarm.cancel(stale);
        }
        self.pending = Some(self.alarm.schedule_once(self.step_delay));
    }
}

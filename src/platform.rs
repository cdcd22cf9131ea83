//! Hardware collaborators the countdown relies on.
//!
//! Implement these for your board's GPIO bank and hardware alarm. The clock is
//! covered by [`TimeSource`](crate::time::TimeSource).

use crate::config::PinId;
use crate::time::TimeDuration;

/// Trait for abstracting a bank of digital pins addressed by number.
pub trait Gpio {
    /// Drives an output pin high (`true`) or low (`false`).
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn set_output(&mut self, pin: PinId, high: bool);

    /// Samples an input pin. Returns `true` when the line is high.
    fn read_input(&mut self, pin: PinId) -> bool;
}

/// Trait for abstracting a one-shot hardware alarm.
///
/// The platform must arrange for the countdown's alarm callback
/// ([`Countdown::advance`](crate::Countdown::advance) or
/// [`SharedCountdown::on_alarm`](crate::SharedCountdown::on_alarm)) to run
/// exactly once, no earlier than `delay` after `schedule_once`, unless the
/// handle is cancelled first. The callback receives the handle that fired so
/// a callback delivered late, after its alarm was cancelled, can be told apart
/// from the current one.
pub trait OneShotAlarm {
    /// Duration type accepted by the alarm.
    type Duration: TimeDuration;

    /// Identifies a scheduled alarm. Handles of distinct alarms must compare
    /// unequal.
    type Handle: Copy + PartialEq;

    /// Schedules the alarm callback to run once after `delay`.
    fn schedule_once(&mut self, delay: Self::Duration) -> Self::Handle;

    /// Cancels a scheduled alarm. Cancelling a spent handle must be harmless.
    fn cancel(&mut self, handle: Self::Handle);
}

//! Countdown shared between the polling loop and the alarm callback.
//!
//! The polling loop presses the countdown while the alarm callback, usually
//! an interrupt handler, advances it. Every access goes through a critical
//! section so the two contexts never interleave inside a level update.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::command::CountdownAction;
use crate::countdown::{Countdown, CountdownError, StepTiming};
use crate::led::RgbLed;
use crate::platform::OneShotAlarm;
use crate::types::Level;

/// Result of dispatching an action to a shared countdown.
pub type SharedResult<D> = Option<Result<StepTiming<D>, CountdownError>>;

/// A [`Countdown`] behind a `critical_section` mutex.
///
/// Can live in a `static`, installed once hardware is initialized:
///
/// ```ignore
/// static COUNTDOWN: SharedCountdown<Led, Alarm> = SharedCountdown::new();
///
/// COUNTDOWN.install(Countdown::from_config(led, alarm, &config));
///
/// // in the alarm interrupt handler
/// COUNTDOWN.on_alarm(fired_alarm_id);
/// ```
///
/// All methods return `None` until a countdown is installed.
pub struct SharedCountdown<L: RgbLed, A: OneShotAlarm> {
    inner: Mutex<RefCell<Option<Countdown<L, A>>>>,
}

impl<L: RgbLed, A: OneShotAlarm> SharedCountdown<L, A> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs a countdown, returning the one it replaces.
    pub fn install(&self, countdown: Countdown<L, A>) -> Option<Countdown<L, A>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(countdown))
    }

    /// Removes the installed countdown.
    pub fn take(&self) -> Option<Countdown<L, A>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Runs `f` with exclusive access to the countdown.
    pub fn with<R>(&self, f: impl FnOnce(&mut Countdown<L, A>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Dispatches an action atomically.
    pub fn dispatch(&self, action: CountdownAction<A::Handle>) -> SharedResult<A::Duration> {
        self.with(|countdown| countdown.handle_action(action))
    }

    /// Starts the countdown if it is idle.
    ///
    /// The idle check and the trigger happen in one critical section. A press
    /// during a running countdown yields `Err(InvalidState)` and changes nothing.
    pub fn press(&self) -> SharedResult<A::Duration> {
        self.dispatch(CountdownAction::Press)
    }

    /// Alarm callback entry point. Steps the countdown down one level.
    ///
    /// A callback for an alarm that was cancelled while its interrupt was
    /// held off returns `StepTiming::Stale` and changes nothing.
    pub fn on_alarm(&self, fired: A::Handle) -> Option<StepTiming<A::Duration>> {
        self.with(|countdown| countdown.advance(fired))
    }

    /// Aborts any running countdown.
    pub fn reset(&self) -> Option<()> {
        self.with(|countdown| countdown.reset())
    }

    /// Returns the current level.
    pub fn level(&self) -> Option<Level> {
        self.with(|countdown| countdown.level())
    }

    /// Returns true if a step alarm is armed.
    pub fn has_pending(&self) -> Option<bool> {
        self.with(|countdown| countdown.has_pending())
    }
}

impl<L: RgbLed, A: OneShotAlarm> Default for SharedCountdown<L, A> {
    fn default() -> Self {
        Self::new()
    }
}

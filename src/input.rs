//! Debounced button input.
//!
//! [`InputGate`] is a time-window gate rather than an edge detector: once the
//! debounce window has elapsed it samples the line again and reports whatever
//! level it finds. A button held down therefore reads as pressed on every open
//! poll; the countdown's idle guard keeps that from retriggering the sequence.

use core::convert::Infallible;

use crate::config::{CountdownConfig, PinId};
use crate::platform::Gpio;
use crate::time::TimeInstant;
use embedded_hal::digital::{ErrorType, InputPin};

/// Debounce gate for a single active-low button.
#[derive(Debug, Clone, Copy)]
pub struct InputGate<I: TimeInstant> {
    debounce: I::Duration,
    last_check: Option<I>,
}

impl<I: TimeInstant> InputGate<I> {
    /// Creates a gate that is open on its first poll.
    pub fn new(debounce: I::Duration) -> Self {
        Self {
            debounce,
            last_check: None,
        }
    }

    /// Creates a gate with the configured debounce window.
    pub fn from_config(config: &CountdownConfig) -> Self {
        Self::new(config.debounce_delay())
    }

    /// Polls the gate with an already sampled line level.
    ///
    /// `line_high` is the raw electrical level; the button pulls the line low
    /// when pressed. Returns true only if the gate is open and the line is low.
    pub fn poll_press(&mut self, now: I, line_high: bool) -> bool {
        self.poll_with(now, || line_high)
    }

    /// Polls the gate, sampling the line through `read_line` only when open.
    ///
    /// While closed this returns false without calling `read_line` and without
    /// touching the recorded check time. When open it records `now` whatever
    /// the line reads. A `now` earlier than the last check counts as zero
    /// elapsed time.
    pub fn poll_with<F>(&mut self, now: I, read_line: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if !self.is_open(now) {
            return false;
        }

        self.last_check = Some(now);
        !read_line()
    }

    /// Returns true if a poll at `now` would sample the line.
    pub fn is_open(&self, now: I) -> bool {
        match self.last_check {
            Some(last) => now.duration_since(last) >= self.debounce,
            None => true,
        }
    }

    /// Time of the last poll that sampled the line.
    pub fn last_check(&self) -> Option<I> {
        self.last_check
    }

    /// Minimum time between two samples of the line.
    pub fn debounce_delay(&self) -> I::Duration {
        self.debounce
    }
}

/// An active-low button on an `embedded-hal` input pin.
pub struct Button<P: InputPin, I: TimeInstant> {
    pin: P,
    gate: InputGate<I>,
}

impl<P: InputPin, I: TimeInstant> Button<P, I> {
    /// Wraps `pin` with a gate of the given debounce window.
    pub fn new(pin: P, debounce: I::Duration) -> Self {
        Self {
            pin,
            gate: InputGate::new(debounce),
        }
    }

    /// Wraps `pin` with the configured debounce window.
    pub fn from_config(pin: P, config: &CountdownConfig) -> Self {
        Self {
            pin,
            gate: InputGate::from_config(config),
        }
    }

    /// Returns true if a press is accepted at `now`.
    ///
    /// The pin is read at most once, and only when the gate is open. A failed
    /// read counts as released.
    pub fn poll(&mut self, now: I) -> bool {
        let Self { pin, gate } = self;
        gate.poll_with(now, || pin.is_high().unwrap_or(true))
    }

    /// Returns the debounce gate.
    pub fn gate(&self) -> &InputGate<I> {
        &self.gate
    }

    /// Consumes the button, returning the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

/// A single [`Gpio`] pin exposed as an `embedded-hal` input.
pub struct GpioLine<G: Gpio> {
    gpio: G,
    pin: PinId,
}

impl<G: Gpio> GpioLine<G> {
    /// Reads `pin` from the `gpio` bank.
    pub fn new(gpio: G, pin: PinId) -> Self {
        Self { gpio, pin }
    }

    /// Returns the pin number.
    pub fn pin(&self) -> PinId {
        self.pin
    }
}

impl<G: Gpio> ErrorType for GpioLine<G> {
    type Error = Infallible;
}

impl<G: Gpio> InputPin for GpioLine<G> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.read_input(self.pin))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.gpio.read_input(self.pin))
    }
}

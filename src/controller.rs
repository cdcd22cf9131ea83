//! Polling loop gluing the button to the shared countdown.

use crate::config::{ConfigError, CountdownConfig};
use crate::countdown::CountdownError;
use crate::input::Button;
use crate::led::RgbLed;
use crate::platform::OneShotAlarm;
use crate::shared::SharedCountdown;
use crate::time::{TimeInstant, TimeSource};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// What a single poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// No press was accepted.
    NoPress,
    /// A press started the countdown.
    Triggered,
    /// A press arrived while the countdown was running, or before a countdown
    /// was installed.
    Ignored,
}

/// Polls the button and presses the countdown on accepted presses.
///
/// # Type Parameters
/// * `'a` - Lifetime of the time source and countdown references
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `P` - Button input pin type
/// * `L` - LED implementation type
/// * `A` - One-shot alarm implementation type
pub struct Controller<'a, I, T, P, L, A>
where
    I: TimeInstant,
    T: TimeSource<I>,
    P: InputPin,
    L: RgbLed,
    A: OneShotAlarm,
{
    button: Button<P, I>,
    time_source: &'a T,
    countdown: &'a SharedCountdown<L, A>,
    poll_interval_ms: u32,
}

impl<'a, I, T, P, L, A> Controller<'a, I, T, P, L, A>
where
    I: TimeInstant,
    T: TimeSource<I>,
    P: InputPin,
    L: RgbLed,
    A: OneShotAlarm,
{
    /// Creates a controller polling at the configured interval.
    ///
    /// # Errors
    /// Returns the first problem [`CountdownConfig::validate`] finds.
    pub fn new(
        button: Button<P, I>,
        time_source: &'a T,
        countdown: &'a SharedCountdown<L, A>,
        config: &CountdownConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            button,
            time_source,
            countdown,
            poll_interval_ms: config.poll_interval_ms,
        })
    }

    /// Runs one iteration of the polling loop.
    pub fn poll(&mut self) -> PollOutcome {
        let now = self.time_source.now();
        if !self.button.poll(now) {
            return PollOutcome::NoPress;
        }

        match self.countdown.press() {
            Some(Ok(_)) => {
                #[cfg(feature = "defmt")]
                defmt::info!("countdown started");

                PollOutcome::Triggered
            }
            Some(Err(CountdownError::InvalidState { .. })) | None => PollOutcome::Ignored,
        }
    }

    /// Polls forever at the configured interval.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> ! {
        loop {
            self.poll();
            delay.delay_ms(self.poll_interval_ms);
        }
    }

    pub fn button(&self) -> &Button<P, I> {
        &self.button
    }

    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms
    }
}

//! Compile-time wiring and timing configuration.

use crate::time::TimeDuration;

/// Spacing between countdown steps.
pub const DEFAULT_STEP_DELAY_MS: u32 = 3_000;

/// Minimum time between two accepted button reads.
pub const DEFAULT_DEBOUNCE_DELAY_MS: u32 = 50;

/// Cadence of the polling loop.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;

/// A GPIO pin number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl From<u8> for PinId {
    fn from(id: u8) -> Self {
        PinId(id)
    }
}

impl From<PinId> for u8 {
    fn from(pin: PinId) -> Self {
        pin.0
    }
}

/// Output pins of the three countdown LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPins {
    pub green: PinId,
    pub blue: PinId,
    pub red: PinId,
}

impl LedPins {
    /// Creates a pin set in green, blue, red order.
    pub const fn new(green: PinId, blue: PinId, red: PinId) -> Self {
        Self { green, blue, red }
    }
}

impl Default for LedPins {
    fn default() -> Self {
        CountdownConfig::new().led_pins
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The same pin is assigned to more than one role.
    DuplicatePin(PinId),

    /// The polling loop would never sleep.
    ZeroPollInterval,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::DuplicatePin(pin) => {
                write!(f, "pin {} is assigned to more than one role", pin.0)
            }
            ConfigError::ZeroPollInterval => {
                write!(f, "poll interval must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Timing and wiring for a countdown controller.
///
/// Defaults match the reference board: LEDs on pins 11 (green), 12 (blue) and
/// 13 (red), the button on pin 5, a 3 s step and a 50 ms debounce window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownConfig {
    /// Spacing between countdown steps, in milliseconds.
    pub step_delay_ms: u32,

    /// Debounce window for the button, in milliseconds.
    pub debounce_delay_ms: u32,

    /// Sleep between polls of the button, in milliseconds.
    pub poll_interval_ms: u32,

    /// LED output pins.
    pub led_pins: LedPins,

    /// Button input pin (active-low).
    pub button_pin: PinId,
}

impl CountdownConfig {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            led_pins: LedPins::new(PinId(11), PinId(12), PinId(13)),
            button_pin: PinId(5),
        }
    }

    /// Sets the spacing between countdown steps.
    pub const fn with_step_delay_ms(mut self, millis: u32) -> Self {
        self.step_delay_ms = millis;
        self
    }

    /// Sets the button debounce window.
    pub const fn with_debounce_delay_ms(mut self, millis: u32) -> Self {
        self.debounce_delay_ms = millis;
        self
    }

    /// Sets the sleep between button polls.
    pub const fn with_poll_interval_ms(mut self, millis: u32) -> Self {
        self.poll_interval_ms = millis;
        self
    }

    /// Sets the LED output pins.
    pub const fn with_led_pins(mut self, led_pins: LedPins) -> Self {
        self.led_pins = led_pins;
        self
    }

    /// Sets the button input pin.
    pub const fn with_button_pin(mut self, pin: PinId) -> Self {
        self.button_pin = pin;
        self
    }

    /// Checks that every pin has a single role and the poll loop can sleep.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }

        let pins = [
            self.led_pins.green,
            self.led_pins.blue,
            self.led_pins.red,
            self.button_pin,
        ];
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::DuplicatePin(*pin));
            }
        }

        Ok(())
    }

    /// Step delay in the platform's duration type.
    pub fn step_delay<D: TimeDuration>(&self) -> D {
        D::from_millis(self.step_delay_ms as u64)
    }

    /// Debounce window in the platform's duration type.
    pub fn debounce_delay<D: TimeDuration>(&self) -> D {
        D::from_millis(self.debounce_delay_ms as u64)
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self::new()
    }
}

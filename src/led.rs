//! LED output sinks.
//!
//! The countdown drives an [`RgbLed`]. Two implementations cover the usual
//! wirings: [`GpioRgbLed`] for a numbered pin bank and [`PinRgbLed`] for three
//! `embedded-hal` output pins.

use crate::config::LedPins;
use crate::platform::Gpio;
use crate::types::LedOutputs;
use embedded_hal::digital::{OutputPin, PinState};
use palette::Srgb;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, etc.) to allow the
/// countdown to control it.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    ///
    /// Color components are in the range 0.0-1.0. The countdown only ever emits
    /// fully on or fully off channels. Handle any hardware errors internally -
    /// this method cannot fail.
    fn set_color(&mut self, color: Srgb);
}

/// Three discrete LEDs on a [`Gpio`] bank.
pub struct GpioRgbLed<G: Gpio> {
    gpio: G,
    pins: LedPins,
}

impl<G: Gpio> GpioRgbLed<G> {
    /// Drives `pins` on the `gpio` bank. Nothing is written until the first
    /// color is set.
    pub fn new(gpio: G, pins: LedPins) -> Self {
        Self { gpio, pins }
    }

    /// Writes discrete outputs to the three pins.
    pub fn set_outputs(&mut self, outputs: LedOutputs) {
        self.gpio.set_output(self.pins.green, outputs.green);
        self.gpio.set_output(self.pins.blue, outputs.blue);
        self.gpio.set_output(self.pins.red, outputs.red);
    }

    /// Returns the pin bank.
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Consumes the LED, returning the pin bank.
    pub fn release(self) -> G {
        self.gpio
    }
}

impl<G: Gpio> RgbLed for GpioRgbLed<G> {
    fn set_color(&mut self, color: Srgb) {
        self.set_outputs(LedOutputs::from_color(color));
    }
}

/// Three discrete LEDs on `embedded-hal` output pins.
///
/// Pins are driven high for "on" (common cathode wiring).
pub struct PinRgbLed<G, B, R>
where
    G: OutputPin,
    B: OutputPin,
    R: OutputPin,
{
    green: G,
    blue: B,
    red: R,
}

impl<G, B, R> PinRgbLed<G, B, R>
where
    G: OutputPin,
    B: OutputPin,
    R: OutputPin,
{
    /// Creates an LED from pins in green, blue, red order.
    pub fn new(green: G, blue: B, red: R) -> Self {
        Self { green, blue, red }
    }

    /// Returns the pins in green, blue, red order.
    pub fn release(self) -> (G, B, R) {
        (self.green, self.blue, self.red)
    }
}

impl<G, B, R> RgbLed for PinRgbLed<G, B, R>
where
    G: OutputPin,
    B: OutputPin,
    R: OutputPin,
{
    fn set_color(&mut self, color: Srgb) {
        let outputs = LedOutputs::from_color(color);
        let _ = self.green.set_state(PinState::from(outputs.green));
        let _ = self.blue.set_state(PinState::from(outputs.blue));
        let _ = self.red.set_state(PinState::from(outputs.red));
    }
}

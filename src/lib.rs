#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Level`**: How many LEDs remain lit (`AllOn`, `TwoOn`, `OneOn`, `Idle`)
//! - **`LedOutputs`**: The green/blue/red on-off mapping of a level
//! - **`Countdown`**: State machine stepping a level down on every alarm
//! - **`SharedCountdown`**: Countdown shared between the poll loop and the alarm interrupt
//! - **`InputGate`**: Time-window debounce gate for an active-low button
//! - **`Button`**: An `embedded-hal` input pin behind an `InputGate`
//! - **`Controller`**: Polling loop pressing the countdown on accepted presses
//! - **`CountdownConfig`**: Step delay, debounce window and pin wiring
//! - **`RgbLed`**: Trait to implement for your LED hardware
//! - **`OneShotAlarm`**, **`Gpio`**: Traits to implement for your alarm and pin bank
//! - **`TimeSource`**: Trait to implement for your timing system

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod time;
pub mod types;
pub mod config;
pub mod platform;
pub mod led;
pub mod input;
pub mod countdown;
pub mod command;
pub mod shared;
pub mod controller;

pub use command::CountdownAction;
pub use config::{ConfigError, CountdownConfig, LedPins, PinId};
pub use controller::{Controller, PollOutcome};
pub use countdown::{Countdown, CountdownError, StepTiming};
pub use input::{Button, GpioLine, InputGate};
pub use led::{GpioRgbLed, PinRgbLed, RgbLed};
pub use platform::{Gpio, OneShotAlarm};
pub use shared::SharedCountdown;
pub use time::{MicrosInstant, Microseconds, TimeDuration, TimeInstant, TimeSource};
pub use types::{LedOutputs, Level};

pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);

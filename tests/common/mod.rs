//! Shared test infrastructure for led-countdown integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use led_countdown::{
    Gpio, LedOutputs, OneShotAlarm, PinId, RgbLed, Srgb, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records all color changes for testing
pub struct MockLed {
    current_color: Srgb,
    color_history: heapless::Vec<Srgb, 32>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current_color: Srgb::new(0.0, 0.0, 0.0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn outputs(&self) -> LedOutputs {
        LedOutputs::from_color(self.current_color)
    }

    pub fn color_history(&self) -> &[Srgb] {
        &self.color_history
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: Srgb) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Alarm
// ============================================================================

/// Handle returned by [`MockAlarm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmHandle(pub u32);

/// Mock one-shot alarm that records scheduling and cancellation
///
/// Tracks the single armed alarm; arming while another is armed counts as an
/// overlap.
pub struct MockAlarm {
    next_id: u32,
    armed: Option<(AlarmHandle, TestDuration)>,
    scheduled: heapless::Vec<TestDuration, 32>,
    cancelled: heapless::Vec<AlarmHandle, 32>,
    overlaps: u32,
}

impl MockAlarm {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            armed: None,
            scheduled: heapless::Vec::new(),
            cancelled: heapless::Vec::new(),
            overlaps: 0,
        }
    }

    /// Marks the armed alarm as fired, returning its handle.
    pub fn fire(&mut self) -> Option<AlarmHandle> {
        self.armed.take().map(|(handle, _)| handle)
    }

    pub fn armed(&self) -> Option<(AlarmHandle, TestDuration)> {
        self.armed
    }

    pub fn scheduled(&self) -> &[TestDuration] {
        &self.scheduled
    }

    pub fn cancelled(&self) -> &[AlarmHandle] {
        &self.cancelled
    }

    pub fn overlaps(&self) -> u32 {
        self.overlaps
    }
}

impl OneShotAlarm for MockAlarm {
    type Duration = TestDuration;
    type Handle = AlarmHandle;

    fn schedule_once(&mut self, delay: TestDuration) -> AlarmHandle {
        if self.armed.is_some() {
            self.overlaps += 1;
        }
        self.next_id += 1;
        let handle = AlarmHandle(self.next_id);
        self.armed = Some((handle, delay));
        let _ = self.scheduled.push(delay);
        handle
    }

    fn cancel(&mut self, handle: AlarmHandle) {
        if matches!(self.armed, Some((armed, _)) if armed == handle) {
            self.armed = None;
        }
        let _ = self.cancelled.push(handle);
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Input pin reading a shared line level
pub struct MockInputPin<'a> {
    level: &'a Cell<bool>,
    reads: &'a Cell<u32>,
}

impl<'a> MockInputPin<'a> {
    pub fn new(level: &'a Cell<bool>, reads: &'a Cell<u32>) -> Self {
        Self { level, reads }
    }
}

impl ErrorType for MockInputPin<'_> {
    type Error = Infallible;
}

impl InputPin for MockInputPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Input pin whose reads always fail
pub struct FaultyInputPin;

#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl ErrorType for FaultyInputPin {
    type Error = PinFault;
}

impl InputPin for FaultyInputPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

/// Output pin writing to a shared level
pub struct MockOutputPin<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockOutputPin<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl ErrorType for MockOutputPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockOutputPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

// ============================================================================
// Mock GPIO Bank
// ============================================================================

/// Pin bank with 32 pins; inputs read back whatever was last set
pub struct MockGpio {
    levels: [bool; 32],
    writes: heapless::Vec<(PinId, bool), 32>,
}

impl MockGpio {
    pub fn new() -> Self {
        Self {
            levels: [false; 32],
            writes: heapless::Vec::new(),
        }
    }

    pub fn level(&self, pin: PinId) -> bool {
        self.levels[pin.0 as usize]
    }

    pub fn drive(&mut self, pin: PinId, high: bool) {
        self.levels[pin.0 as usize] = high;
    }

    pub fn writes(&self) -> &[(PinId, bool)] {
        &self.writes
    }
}

impl Gpio for MockGpio {
    fn set_output(&mut self, pin: PinId, high: bool) {
        self.levels[pin.0 as usize] = high;
        let _ = self.writes.push((pin, high));
    }

    fn read_input(&mut self, pin: PinId) -> bool {
        self.levels[pin.0 as usize]
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Builds outputs from 0/1 flags in green, blue, red order
pub fn outputs(green: u8, blue: u8, red: u8) -> LedOutputs {
    LedOutputs::new(green == 1, blue == 1, red == 1)
}

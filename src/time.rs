//! Time abstraction traits for platform-agnostic timing.
//!
//! Also provides [`MicrosInstant`] and [`Microseconds`], ready-made types for
//! platforms exposing a monotonic 64-bit microsecond counter.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations must return `ZERO` rather than underflow when `earlier`
    /// is actually later than `self`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Duration in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Microseconds(pub u64);

impl TimeDuration for Microseconds {
    const ZERO: Self = Microseconds(0);

    fn as_millis(&self) -> u64 {
        self.0 / 1_000
    }

    fn from_millis(millis: u64) -> Self {
        Microseconds(millis.saturating_mul(1_000))
    }
}

/// Instant read from a monotonic microsecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MicrosInstant(pub u64);

impl MicrosInstant {
    /// Microseconds since the clock's epoch (usually boot).
    pub const fn as_micros(&self) -> u64 {
        self.0
    }
}

impl TimeInstant for MicrosInstant {
    type Duration = Microseconds;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Microseconds(self.0.saturating_sub(earlier.0))
    }
}

//! Countdown levels and their LED output mapping.

use palette::Srgb;

/// How many LEDs remain lit in the countdown.
///
/// Ordered from idle to most active, so `AllOn > TwoOn > OneOn > Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Level {
    /// Resting state. All LEDs off.
    #[default]
    Idle = 0,

    /// Red only.
    OneOn = 1,

    /// Blue and red.
    TwoOn = 2,

    /// Green, blue and red.
    AllOn = 3,
}

impl Level {
    /// Every level, from most active to idle.
    pub const ALL: [Level; 4] = [Level::AllOn, Level::TwoOn, Level::OneOn, Level::Idle];

    /// Returns the level one step below this one.
    ///
    /// `Idle` has no successor and decays to itself.
    pub const fn decay(self) -> Level {
        match self {
            Level::AllOn => Level::TwoOn,
            Level::TwoOn => Level::OneOn,
            Level::OneOn => Level::Idle,
            Level::Idle => Level::Idle,
        }
    }

    /// Returns true for the resting level.
    #[inline]
    pub const fn is_idle(self) -> bool {
        matches!(self, Level::Idle)
    }

    /// Number of LEDs lit at this level.
    #[inline]
    pub const fn lit_count(self) -> u8 {
        self as u8
    }

    /// Per-LED outputs for this level.
    pub const fn outputs(self) -> LedOutputs {
        match self {
            Level::AllOn => LedOutputs::new(true, true, true),
            Level::TwoOn => LedOutputs::new(false, true, true),
            Level::OneOn => LedOutputs::new(false, false, true),
            Level::Idle => LedOutputs::OFF,
        }
    }

    /// Color an RGB LED shows at this level.
    #[inline]
    pub fn color(self) -> Srgb {
        self.outputs().color()
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

/// On/off state of the three countdown LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedOutputs {
    /// Green LED.
    pub green: bool,

    /// Blue LED.
    pub blue: bool,

    /// Red LED.
    pub red: bool,
}

impl LedOutputs {
    /// All LEDs off.
    pub const OFF: Self = Self::new(false, false, false);

    /// Creates outputs in green, blue, red order.
    #[inline]
    pub const fn new(green: bool, blue: bool, red: bool) -> Self {
        Self { green, blue, red }
    }

    /// Number of LEDs switched on.
    pub const fn lit_count(&self) -> u8 {
        self.green as u8 + self.blue as u8 + self.red as u8
    }

    /// Full-intensity color with each lit LED as a saturated channel.
    pub fn color(&self) -> Srgb {
        Srgb::new(channel(self.red), channel(self.green), channel(self.blue))
    }

    /// Thresholds a color back into discrete outputs.
    ///
    /// A channel counts as on when it is at least half intensity. The countdown
    /// only passes the saturated colors [`Level::color`] produces; the
    /// threshold just gives other callers a defined result.
    pub fn from_color(color: Srgb) -> Self {
        Self {
            green: color.green >= 0.5,
            blue: color.blue >= 0.5,
            red: color.red >= 0.5,
        }
    }
}

#[inline]
fn channel(on: bool) -> f32 {
    if on { 1.0 } else { 0.0 }
}

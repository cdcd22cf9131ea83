//! Action-based control for countdowns.

/// Events a countdown reacts to.
///
/// Lets every mutation flow through one entry point,
/// [`Countdown::handle_action`](crate::Countdown::handle_action), for example
/// when presses are forwarded into the context that runs the alarm callback.
///
/// `H` is the alarm's handle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownAction<H> {
    /// A debounced button press. Starts the countdown if idle.
    Press,
    /// The step alarm with this handle fired.
    AlarmFired(H),
    /// Abort any running countdown.
    Reset,
}

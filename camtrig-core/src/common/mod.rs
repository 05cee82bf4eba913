mod freq;

use core::time::Duration;

pub use freq::*;

/// The frequency of the tick source driving the sequencer.
///
/// The scale constants in [`firmware`](crate::firmware) assume this frequency.
pub const TICK_FREQ: Freq<u32> = Freq { freq: 100_000_000 };

/// The period of one tick.
pub const TICK_PERIOD: Duration = TICK_FREQ.period();

/// Converts a number of ticks into a [`Duration`] at [`TICK_FREQ`].
///
/// Saturates at `u64::MAX` nanoseconds.
#[must_use]
pub const fn ticks_to_duration(ticks: u64) -> Duration {
    Duration::from_nanos(ticks.saturating_mul(TICK_PERIOD.as_nanos() as u64))
}

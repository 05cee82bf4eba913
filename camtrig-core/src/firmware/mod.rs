mod diagnosis;
mod error;
mod params;
mod signal;

use core::time::Duration;

use crate::common::ticks_to_duration;

pub use diagnosis::Misconfiguration;
pub use error::TriggerParamsError;
pub use params::TriggerParams;
pub use signal::{GatePolicy, SequencerInput, TriggerOutput};

/// The number of ticks in one coarse unit.
///
/// Pulse width, period and exposure width are given in coarse units.
/// At 100 MHz one coarse unit is 100 µs.
pub const COARSE_TICKS_PER_UNIT: u32 = 10_000;

/// The number of ticks in one fine unit.
///
/// The laser delay is given in fine units.
/// At 100 MHz one fine unit is 10 µs.
pub const FINE_TICKS_PER_UNIT: u32 = 1_000;

/// The duration of one coarse unit.
pub const COARSE_UNIT: Duration = ticks_to_duration(COARSE_TICKS_PER_UNIT as u64);

/// The duration of one fine unit.
pub const FINE_UNIT: Duration = ticks_to_duration(FINE_TICKS_PER_UNIT as u64);

/// The width of the cycle counter in bits.
pub const CYCLE_COUNTER_BITS: u32 = 30;

/// The width of the delay counter in bits.
pub const DELAY_COUNTER_BITS: u32 = 26;

/// The largest scaled coarse parameter.
pub const COARSE_TICKS_MAX: u32 = u16::MAX as u32 * COARSE_TICKS_PER_UNIT;

/// The largest scaled fine parameter.
pub const FINE_TICKS_MAX: u32 = u16::MAX as u32 * FINE_TICKS_PER_UNIT;

const _: () = assert!(COARSE_TICKS_MAX < (1 << CYCLE_COUNTER_BITS));
const _: () = assert!(FINE_TICKS_MAX < (1 << DELAY_COUNTER_BITS));
const _: () = assert!(CYCLE_COUNTER_BITS <= 32 && DELAY_COUNTER_BITS <= 32);

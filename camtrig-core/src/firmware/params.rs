use core::time::Duration;

use getset::CopyGetters;

use super::{
    TriggerParamsError, COARSE_TICKS_PER_UNIT, COARSE_UNIT, FINE_TICKS_PER_UNIT, FINE_UNIT,
};
use crate::common::ticks_to_duration;

/// The four duration parameters of a trigger sequencer.
///
/// `pulse_width`, `period` and `exposure_width` are in coarse units
/// ([`COARSE_TICKS_PER_UNIT`] ticks), `delay` is in fine units ([`FINE_TICKS_PER_UNIT`] ticks).
/// No validation is performed. Use [`TriggerParams::diagnose`] to find configurations that
/// produce a degenerate waveform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerParams {
    #[getset(get_copy = "pub")]
    /// Camera pulse width in coarse units.
    pulse_width: u16,
    #[getset(get_copy = "pub")]
    /// Camera pulse period in coarse units.
    period: u16,
    #[getset(get_copy = "pub")]
    /// Laser pulse width in coarse units.
    exposure_width: u16,
    #[getset(get_copy = "pub")]
    /// Laser pulse offset from the start of the camera pulse in fine units.
    delay: u16,
}

impl TriggerParams {
    /// Creates a new [`TriggerParams`].
    #[must_use]
    pub const fn new(pulse_width: u16, period: u16, exposure_width: u16, delay: u16) -> Self {
        Self {
            pulse_width,
            period,
            exposure_width,
            delay,
        }
    }

    /// Creates a new [`TriggerParams`] from durations.
    ///
    /// `pulse_width`, `period` and `exposure_width` must be multiples of [`COARSE_UNIT`],
    /// and `delay` must be a multiple of [`FINE_UNIT`].
    pub fn from_durations(
        pulse_width: Duration,
        period: Duration,
        exposure_width: Duration,
        delay: Duration,
    ) -> Result<Self, TriggerParamsError> {
        Ok(Self {
            pulse_width: to_units(pulse_width, COARSE_UNIT)?,
            period: to_units(period, COARSE_UNIT)?,
            exposure_width: to_units(exposure_width, COARSE_UNIT)?,
            delay: to_units(delay, FINE_UNIT)?,
        })
    }

    /// Sets the camera pulse width in coarse units.
    #[must_use]
    pub const fn with_pulse_width(mut self, pulse_width: u16) -> Self {
        self.pulse_width = pulse_width;
        self
    }

    /// Sets the camera pulse period in coarse units.
    #[must_use]
    pub const fn with_period(mut self, period: u16) -> Self {
        self.period = period;
        self
    }

    /// Sets the laser pulse width in coarse units.
    #[must_use]
    pub const fn with_exposure_width(mut self, exposure_width: u16) -> Self {
        self.exposure_width = exposure_width;
        self
    }

    /// Sets the laser delay in fine units.
    #[must_use]
    pub const fn with_delay(mut self, delay: u16) -> Self {
        self.delay = delay;
        self
    }

    /// The camera pulse width in ticks.
    #[inline]
    #[must_use]
    pub const fn pulse_ticks(&self) -> u32 {
        self.pulse_width as u32 * COARSE_TICKS_PER_UNIT
    }

    /// The camera pulse period in ticks.
    #[inline]
    #[must_use]
    pub const fn period_ticks(&self) -> u32 {
        self.period as u32 * COARSE_TICKS_PER_UNIT
    }

    /// The laser pulse width in ticks.
    #[inline]
    #[must_use]
    pub const fn exposure_ticks(&self) -> u32 {
        self.exposure_width as u32 * COARSE_TICKS_PER_UNIT
    }

    /// The laser delay in ticks.
    #[inline]
    #[must_use]
    pub const fn delay_ticks(&self) -> u32 {
        self.delay as u32 * FINE_TICKS_PER_UNIT
    }

    /// The tick at which the laser window closes, relative to the start of the period.
    #[inline]
    #[must_use]
    pub const fn laser_end_ticks(&self) -> u32 {
        self.delay_ticks() + self.exposure_ticks()
    }

    /// The camera pulse width.
    #[must_use]
    pub const fn pulse_duration(&self) -> Duration {
        ticks_to_duration(self.pulse_ticks() as _)
    }

    /// The camera pulse period.
    #[must_use]
    pub const fn period_duration(&self) -> Duration {
        ticks_to_duration(self.period_ticks() as _)
    }

    /// The laser pulse width.
    #[must_use]
    pub const fn exposure_duration(&self) -> Duration {
        ticks_to_duration(self.exposure_ticks() as _)
    }

    /// The laser delay.
    #[must_use]
    pub const fn delay_duration(&self) -> Duration {
        ticks_to_duration(self.delay_ticks() as _)
    }
}

fn to_units(duration: Duration, unit: Duration) -> Result<u16, TriggerParamsError> {
    if duration.as_nanos() % unit.as_nanos() != 0 {
        return Err(TriggerParamsError::NotMultipleOfUnit(duration, unit));
    }
    u16::try_from(duration.as_nanos() / unit.as_nanos())
        .map_err(|_| TriggerParamsError::OutOfRange(duration, unit * u16::MAX as u32))
}

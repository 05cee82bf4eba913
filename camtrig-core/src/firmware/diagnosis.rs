use derive_more::Display;

use super::TriggerParams;

/// A parameter combination that produces a degenerate waveform.
///
/// These are not errors. The sequencer produces the waveform the parameters imply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Misconfiguration {
    /// The period is zero, so both counters are cleared on every enabled tick.
    #[display("Period is zero")]
    ZeroPeriod,
    /// The camera pulse width is zero, so the camera never triggers.
    #[display("Camera pulse width is zero")]
    ZeroPulseWidth,
    /// The exposure width is zero, so the laser never triggers.
    #[display("Exposure width is zero")]
    ZeroExposureWidth,
    /// The camera pulse is longer than the period, so the camera never returns low while enabled.
    #[display("Camera pulse ({pulse_ticks} ticks) exceeds period ({period_ticks} ticks)")]
    PulseExceedsPeriod {
        /// The camera pulse width in ticks.
        pulse_ticks: u32,
        /// The period in ticks.
        period_ticks: u32,
    },
    /// The laser window ends after the period, so it is truncated by resynchronization.
    #[display("Laser window end ({end_ticks} ticks) exceeds period ({period_ticks} ticks)")]
    LaserWindowExceedsPeriod {
        /// The tick at which the laser window closes.
        end_ticks: u32,
        /// The period in ticks.
        period_ticks: u32,
    },
    /// The delay is not shorter than the period, so the laser never triggers while enabled.
    #[display("Laser delay ({delay_ticks} ticks) is not shorter than period ({period_ticks} ticks)")]
    DelayExceedsPeriod {
        /// The delay in ticks.
        delay_ticks: u32,
        /// The period in ticks.
        period_ticks: u32,
    },
}

impl TriggerParams {
    /// Lists the degenerate waveform properties of these parameters.
    ///
    /// An empty list means the waveform is well-formed: both pulses are non-empty and fit in one period.
    #[must_use]
    pub fn diagnose(&self) -> Vec<Misconfiguration> {
        let period_ticks = self.period_ticks();
        let mut found = Vec::new();
        if period_ticks == 0 {
            found.push(Misconfiguration::ZeroPeriod);
        }
        if self.pulse_ticks() == 0 {
            found.push(Misconfiguration::ZeroPulseWidth);
        }
        if self.exposure_ticks() == 0 {
            found.push(Misconfiguration::ZeroExposureWidth);
        }
        if self.pulse_ticks() > period_ticks {
            found.push(Misconfiguration::PulseExceedsPeriod {
                pulse_ticks: self.pulse_ticks(),
                period_ticks,
            });
        }
        if self.delay_ticks() >= period_ticks {
            found.push(Misconfiguration::DelayExceedsPeriod {
                delay_ticks: self.delay_ticks(),
                period_ticks,
            });
        } else if self.laser_end_ticks() > period_ticks {
            found.push(Misconfiguration::LaserWindowExceedsPeriod {
                end_ticks: self.laser_end_ticks(),
                period_ticks,
            });
        }
        found
    }
}

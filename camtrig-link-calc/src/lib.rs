pub mod error;
pub mod recording;
pub mod stimulus;

use std::time::Duration;

use camtrig_core::{
    common::TICK_PERIOD,
    firmware::{GatePolicy, TriggerParams},
};
use camtrig_firmware_emulator::TriggerSequencer;
use derive_more::Deref;
use getset::CopyGetters;

use error::CalcError;
use recording::RawRecord;

pub use recording::{ChannelRecord, Pulse, Record, Signal};
pub use stimulus::Stimulus;

/// Drives independent trigger sequencers from one tick source.
#[derive(Deref)]
pub struct Calc {
    #[deref]
    sequencers: Vec<TriggerSequencer>,
    last_params: Vec<Option<TriggerParams>>,
    current: u64,
    record: Option<RawRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, CopyGetters)]
pub struct CalcBuilder {
    #[getset(get_copy = "pub")]
    num_channels: usize,
    #[getset(get_copy = "pub")]
    gate_policy: GatePolicy,
}

impl CalcBuilder {
    #[must_use]
    pub const fn with_num_channels(mut self, num_channels: usize) -> Self {
        self.num_channels = num_channels;
        self
    }

    #[must_use]
    pub const fn with_gate_policy(mut self, gate_policy: GatePolicy) -> Self {
        self.gate_policy = gate_policy;
        self
    }

    #[must_use]
    pub fn build(self) -> Calc {
        tracing::debug!(
            "Opening calc link with {} channel(s), gate policy {}.",
            self.num_channels,
            self.gate_policy
        );
        Calc {
            sequencers: (0..self.num_channels)
                .map(|_| TriggerSequencer::with_gate_policy(self.gate_policy))
                .collect(),
            last_params: vec![None; self.num_channels],
            current: 0,
            record: None,
        }
    }
}

impl Default for CalcBuilder {
    fn default() -> Self {
        Calc::builder()
    }
}

impl Calc {
    #[must_use]
    pub fn new(num_channels: usize) -> Self {
        Self::builder().with_num_channels(num_channels).build()
    }

    #[must_use]
    pub const fn builder() -> CalcBuilder {
        CalcBuilder {
            num_channels: 1,
            gate_policy: GatePolicy::Literal,
        }
    }

    #[must_use]
    pub const fn current_tick(&self) -> u64 {
        self.current
    }

    #[must_use]
    pub const fn is_recording(&self) -> bool {
        self.record.is_some()
    }

    pub fn reset(&mut self) {
        self.sequencers.iter_mut().for_each(TriggerSequencer::reset);
    }

    pub fn tick<S>(&mut self, tick: Duration, stimulus: &mut S) -> Result<(), CalcError>
    where
        S: Stimulus + ?Sized,
    {
        if tick.is_zero() || tick.as_nanos() % TICK_PERIOD.as_nanos() != 0 {
            return Err(CalcError::InvalidTick(tick));
        }
        self.tick_n((tick.as_nanos() / TICK_PERIOD.as_nanos()) as u64, stimulus);
        Ok(())
    }

    /// Advances every channel by `n` ticks.
    ///
    /// # Panics
    ///
    /// Panics if `stimulus` is a slice or array with fewer inputs than channels.
    pub fn tick_n<S>(&mut self, n: u64, stimulus: &mut S)
    where
        S: Stimulus + ?Sized,
    {
        for _ in 0..n {
            let t = self.current;
            for (ch, (seq, last_params)) in self
                .sequencers
                .iter_mut()
                .zip(self.last_params.iter_mut())
                .enumerate()
            {
                let input = stimulus.sample(t, ch);
                if *last_params != Some(input.params) {
                    input.params.diagnose().into_iter().for_each(|m| {
                        tracing::warn!("Channel {} at tick {}: {}.", ch, t, m);
                    });
                    *last_params = Some(input.params);
                }
                let output = seq.tick(&input);
                if let Some(record) = &mut self.record {
                    record.channels[ch].push(output);
                }
            }
            self.current += 1;
        }
    }
}

use std::time::Duration;

use camtrig_core::{common::ticks_to_duration, firmware::TriggerOutput};
use derive_more::{Deref, Display};
use getset::CopyGetters;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Signal {
    #[display("camera")]
    Camera,
    #[display("laser")]
    Laser,
}

impl Signal {
    const fn level(self, output: &TriggerOutput) -> bool {
        match self {
            Signal::Camera => output.camera(),
            Signal::Laser => output.laser(),
        }
    }
}

/// A high interval of a recorded signal.
///
/// `start` is an absolute tick index and `len` is the number of ticks the signal stays high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pulse {
    pub start: u64,
    pub len: u64,
}

impl Pulse {
    /// The first tick after the pulse.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.start + self.len
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        ticks_to_duration(self.len)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, CopyGetters)]
pub struct ChannelRecord {
    pub(crate) outputs: Vec<TriggerOutput>,
    #[getset(get_copy = "pub")]
    pub(crate) start: u64,
}

impl ChannelRecord {
    #[must_use]
    pub fn outputs(&self) -> &[TriggerOutput] {
        &self.outputs
    }

    #[must_use]
    pub fn camera(&self) -> Vec<bool> {
        self.level(Signal::Camera)
    }

    #[must_use]
    pub fn laser(&self) -> Vec<bool> {
        self.level(Signal::Laser)
    }

    #[must_use]
    pub fn level(&self, signal: Signal) -> Vec<bool> {
        self.outputs.iter().map(|o| signal.level(o)).collect()
    }

    /// Collects the high intervals of `signal`.
    ///
    /// A pulse still high at the end of the record is truncated there.
    #[must_use]
    pub fn pulses(&self, signal: Signal) -> Vec<Pulse> {
        let mut pulses = Vec::new();
        let mut current: Option<Pulse> = None;
        self.outputs.iter().enumerate().for_each(|(i, o)| {
            let t = self.start + i as u64;
            match (signal.level(o), &mut current) {
                (true, Some(p)) => p.len += 1,
                (true, None) => current = Some(Pulse { start: t, len: 1 }),
                (false, Some(_)) => pulses.extend(current.take()),
                (false, None) => {}
            }
        });
        pulses.extend(current);
        pulses
    }

    /// Absolute ticks at which `signal` goes from low to high.
    ///
    /// The first sample has no predecessor and is never an edge.
    #[must_use]
    pub fn rising_edges(&self, signal: Signal) -> Vec<u64> {
        self.outputs
            .windows(2)
            .enumerate()
            .filter(|(_, w)| !signal.level(&w[0]) && signal.level(&w[1]))
            .map(|(i, _)| self.start + i as u64 + 1)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deref, CopyGetters)]
pub struct Record {
    #[deref]
    pub(crate) channels: Vec<ChannelRecord>,
    #[getset(get_copy = "pub")]
    pub(crate) start: u64,
    #[getset(get_copy = "pub")]
    pub(crate) end: u64,
}

impl Record {
    #[must_use]
    pub fn duration(&self) -> Duration {
        ticks_to_duration(self.end - self.start)
    }
}

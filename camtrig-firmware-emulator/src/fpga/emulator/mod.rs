mod counter;
mod output;

use camtrig_core::firmware::{
    GatePolicy, SequencerInput, TriggerOutput, CYCLE_COUNTER_BITS, DELAY_COUNTER_BITS,
};

pub use counter::SaturatingCounter;

/// Emulates the camera/laser trigger sequencer.
///
/// Every call to [`TriggerSequencer::tick`] is one clock cycle. The outputs of a tick are
/// derived from the counter values the previous tick produced, then the inputs sampled on
/// this tick decide the next counter values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerSequencer {
    cycle: SaturatingCounter<CYCLE_COUNTER_BITS>,
    delay: SaturatingCounter<DELAY_COUNTER_BITS>,
    gate_policy: GatePolicy,
    ticks: u64,
}

impl TriggerSequencer {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_gate_policy(GatePolicy::Literal)
    }

    #[must_use]
    pub const fn with_gate_policy(gate_policy: GatePolicy) -> Self {
        Self {
            cycle: SaturatingCounter::new(),
            delay: SaturatingCounter::new(),
            gate_policy,
            ticks: 0,
        }
    }

    pub fn tick(&mut self, input: &SequencerInput) -> TriggerOutput {
        let output = self.output(input);

        if input.reset {
            tracing::trace!("External reset at tick {}.", self.ticks);
            self.clear();
        } else if input.enable && self.cycle.value() >= input.params.period_ticks() {
            tracing::trace!(
                "Resynchronized at tick {} (cycle counter = {}).",
                self.ticks,
                self.cycle.value()
            );
            self.clear();
        } else {
            self.cycle.increment();
            self.delay.increment();
        }
        self.ticks = self.ticks.wrapping_add(1);

        output
    }

    pub fn reset(&mut self) {
        tracing::trace!("Software reset at tick {}.", self.ticks);
        self.clear();
    }

    #[must_use]
    pub const fn cycle_counter(&self) -> u32 {
        self.cycle.value()
    }

    #[must_use]
    pub const fn delay_counter(&self) -> u32 {
        self.delay.value()
    }

    #[must_use]
    pub const fn gate_policy(&self) -> GatePolicy {
        self.gate_policy
    }

    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    fn clear(&mut self) {
        self.cycle.clear();
        self.delay.clear();
    }
}

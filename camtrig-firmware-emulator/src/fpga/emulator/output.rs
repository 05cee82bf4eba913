use camtrig_core::firmware::{SequencerInput, TriggerOutput, TriggerParams};

use super::TriggerSequencer;

impl TriggerSequencer {
    #[must_use]
    pub fn output(&self, input: &SequencerInput) -> TriggerOutput {
        self.gate_policy.apply(
            input.enable,
            TriggerOutput::new(self.camera(&input.params), self.laser(&input.params)),
        )
    }

    #[must_use]
    fn camera(&self, params: &TriggerParams) -> bool {
        self.cycle.value() < params.pulse_ticks()
    }

    #[must_use]
    fn laser(&self, params: &TriggerParams) -> bool {
        self.delay.value() > params.delay_ticks()
            && self.cycle.value() < params.laser_end_ticks()
    }
}

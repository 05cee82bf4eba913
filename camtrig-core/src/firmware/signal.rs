use derive_more::Display;

use super::TriggerParams;

/// The inputs sampled by a sequencer once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequencerInput {
    /// Synchronous reset. Both counters are zero on the next tick.
    pub reset: bool,
    /// Enable gate ("start"). Resynchronization only happens while this is asserted.
    pub enable: bool,
    /// The duration parameters.
    pub params: TriggerParams,
}

impl SequencerInput {
    /// Creates an enabled input with the given parameters.
    #[must_use]
    pub const fn enabled(params: TriggerParams) -> Self {
        Self {
            reset: false,
            enable: true,
            params,
        }
    }

    /// Creates a disabled input with the given parameters.
    #[must_use]
    pub const fn disabled(params: TriggerParams) -> Self {
        Self {
            reset: false,
            enable: false,
            params,
        }
    }

    /// Returns a copy of this input with the reset asserted.
    #[must_use]
    pub const fn with_reset(mut self) -> Self {
        self.reset = true;
        self
    }
}

/// The trigger outputs of a sequencer for one tick.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct TriggerOutput(u8);

bitflags::bitflags! {
    impl TriggerOutput : u8 {
        /// Camera trigger line.
        const CAMERA = 1 << 0;
        /// Laser exposure line.
        const LASER  = 1 << 1;
    }
}

impl TriggerOutput {
    /// Creates a new [`TriggerOutput`] from the two line levels.
    #[must_use]
    pub const fn new(camera: bool, laser: bool) -> Self {
        let mut bits = 0;
        if camera {
            bits |= Self::CAMERA.bits();
        }
        if laser {
            bits |= Self::LASER.bits();
        }
        Self(bits)
    }

    /// Level of the camera trigger line.
    #[must_use]
    pub const fn camera(&self) -> bool {
        self.0 & Self::CAMERA.bits() != 0
    }

    /// Level of the laser exposure line.
    #[must_use]
    pub const fn laser(&self) -> bool {
        self.0 & Self::LASER.bits() != 0
    }
}

impl core::fmt::Debug for TriggerOutput {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TriggerOutput")
            .field("camera", &self.camera())
            .field("laser", &self.laser())
            .finish()
    }
}

/// How the enable gate affects the outputs.
///
/// The enable gate always gates resynchronization. Whether it also forces the outputs low is
/// chosen per sequencer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GatePolicy {
    /// Outputs are the raw counter comparisons and can be high while the gate is deasserted.
    #[default]
    Literal,
    /// Outputs are forced low on every tick the gate is deasserted.
    Gated,
}

impl GatePolicy {
    /// Applies the policy to the raw outputs of a tick.
    #[must_use]
    pub const fn apply(self, enable: bool, output: TriggerOutput) -> TriggerOutput {
        match self {
            GatePolicy::Gated if !enable => TriggerOutput::empty(),
            _ => output,
        }
    }
}

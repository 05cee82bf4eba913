use std::time::Duration;

use camtrig_core::common::TICK_PERIOD;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CalcError {
    #[error("Recording is already started")]
    RecordingAlreadyStarted,
    #[error("Recording is not started")]
    RecordingNotStarted,
    #[error("Tick ({0:?}) must be a non-zero multiple of {period:?}", period = TICK_PERIOD)]
    InvalidTick(Duration),
}

use core::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
/// An error produced when converting durations into [`TriggerParams`].
///
/// [`TriggerParams`]: crate::firmware::TriggerParams
pub enum TriggerParamsError {
    /// The duration is not a multiple of its unit.
    #[error("Duration ({0:?}) must be a multiple of {1:?}")]
    NotMultipleOfUnit(Duration, Duration),
    /// The duration does not fit in the 16-bit parameter.
    #[error("Duration ({0:?}) is out of range ([0, {1:?}])")]
    OutOfRange(Duration, Duration),
}

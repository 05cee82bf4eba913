mod record;

pub use record::{ChannelRecord, Pulse, Record, Signal};

use camtrig_core::firmware::TriggerOutput;

use crate::{error::CalcError, Calc};

pub(crate) struct RawRecord {
    pub channels: Vec<Vec<TriggerOutput>>,
    pub start: u64,
}

impl Calc {
    /// Starts recording the outputs of every channel from the current tick.
    ///
    /// The record holds one byte per tick and channel until [`Calc::finish_recording`],
    /// so one second at 100 MHz takes 100 MB per channel.
    pub fn start_recording(&mut self) -> Result<(), CalcError> {
        if self.record.is_some() {
            return Err(CalcError::RecordingAlreadyStarted);
        }
        tracing::debug!("Start recording at tick {}.", self.current);
        self.record = Some(RawRecord {
            channels: vec![Vec::new(); self.sequencers.len()],
            start: self.current,
        });
        Ok(())
    }

    pub fn finish_recording(&mut self) -> Result<Record, CalcError> {
        let Some(RawRecord { channels, start }) = self.record.take() else {
            return Err(CalcError::RecordingNotStarted);
        };
        tracing::debug!(
            "Finish recording at tick {} ({} tick(s) recorded).",
            self.current,
            self.current - start
        );
        Ok(Record {
            channels: channels
                .into_iter()
                .map(|outputs| ChannelRecord { outputs, start })
                .collect(),
            start,
            end: self.current,
        })
    }
}

use camtrig_core::firmware::SequencerInput;

/// A source of sequencer inputs, sampled once per tick for each channel.
///
/// Slices and arrays hold one input per channel and must be at least as long as the number of
/// channels they are sampled for.
pub trait Stimulus {
    fn sample(&mut self, tick: u64, channel: usize) -> SequencerInput;
}

impl Stimulus for SequencerInput {
    fn sample(&mut self, _tick: u64, _channel: usize) -> SequencerInput {
        *self
    }
}

impl Stimulus for [SequencerInput] {
    fn sample(&mut self, _tick: u64, channel: usize) -> SequencerInput {
        assert!(
            channel < self.len(),
            "No input for channel {} ({} input(s) given)",
            channel,
            self.len()
        );
        self[channel]
    }
}

impl<const N: usize> Stimulus for [SequencerInput; N] {
    fn sample(&mut self, tick: u64, channel: usize) -> SequencerInput {
        self.as_mut_slice().sample(tick, channel)
    }
}

pub struct FromFn<F>(F);

impl<F> Stimulus for FromFn<F>
where
    F: FnMut(u64, usize) -> SequencerInput,
{
    fn sample(&mut self, tick: u64, channel: usize) -> SequencerInput {
        (self.0)(tick, channel)
    }
}

/// Creates a [`Stimulus`] whose inputs are computed by a closure of the tick and the channel.
pub const fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(u64, usize) -> SequencerInput,
{
    FromFn(f)
}

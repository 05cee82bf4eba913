/// Frequency in Hz.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Freq<T: Copy> {
    pub(crate) freq: T,
}

impl<T: Copy> core::fmt::Debug for Freq<T>
where
    T: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Hz", self.freq)
    }
}

impl<T: Copy> Freq<T> {
    #[inline]
    /// Returns the frequency in Hz.
    pub const fn hz(&self) -> T {
        self.freq
    }
}

impl Freq<u32> {
    /// Returns the period of one cycle.
    ///
    /// The period is rounded down to the nearest nanosecond.
    #[must_use]
    pub const fn period(&self) -> core::time::Duration {
        core::time::Duration::from_nanos(1_000_000_000 / self.freq as u64)
    }
}

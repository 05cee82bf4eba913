/// An unsigned counter of `BITS` bits that holds at its maximum instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaturatingCounter<const BITS: u32> {
    value: u32,
}

impl<const BITS: u32> SaturatingCounter<BITS> {
    pub const MAX: u32 = if BITS >= u32::BITS {
        u32::MAX
    } else {
        (1 << BITS) - 1
    };

    #[must_use]
    pub const fn new() -> Self {
        const { assert!(BITS >= 1 && BITS <= u32::BITS) };
        Self { value: 0 }
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub const fn is_saturated(&self) -> bool {
        self.value == Self::MAX
    }

    pub fn increment(&mut self) {
        if self.value < Self::MAX {
            self.value += 1;
        }
    }

    pub fn clear(&mut self) {
        self.value = 0;
    }

    #[cfg(test)]
    pub(crate) const fn with_value(value: u32) -> Self {
        assert!(value <= Self::MAX);
        Self { value }
    }
}

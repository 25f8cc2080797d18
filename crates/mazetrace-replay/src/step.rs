/// The replay counter.
///
/// `0` means the replay has not started. While a replay runs the counter only
/// grows; its terminal value is `trace.len() + 1`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display,
)]
pub struct AnimationStep(usize);

impl AnimationStep {
    /// The "not started" step.
    pub const ZERO: Self = Self(0);

    /// Creates a step from a raw counter value.
    #[must_use]
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// The raw counter value.
    #[must_use]
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns `true` once the replay has started.
    #[must_use]
    #[inline]
    pub const fn is_started(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

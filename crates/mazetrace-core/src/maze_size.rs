use serde::{Deserialize, Serialize};

/// Side length of a generated square maze.
///
/// Always within [`MazeSize::MIN`]..=[`MazeSize::MAX`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct MazeSize(u8);

/// Error returned for sizes outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("maze size {_0} is outside {}..={}", MazeSize::MIN, MazeSize::MAX)]
pub struct MazeSizeError(#[error(not(source))] u8);

impl MazeSize {
    /// Smallest supported size.
    pub const MIN: Self = Self(5);
    /// Largest supported size.
    pub const MAX: Self = Self(30);
    /// Size used when nothing else is configured.
    pub const DEFAULT: Self = Self(10);

    /// Creates a size, rejecting values outside the supported range.
    ///
    /// # Errors
    ///
    /// Returns [`MazeSizeError`] if `value` is out of range.
    pub const fn new(value: u8) -> Result<Self, MazeSizeError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(MazeSizeError(value));
        }
        Ok(Self(value))
    }

    /// Creates a size, clamping `value` into the supported range.
    #[must_use]
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The side length.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The side length as a cell count.
    #[must_use]
    #[inline]
    pub const fn cells(self) -> usize {
        self.0 as usize
    }
}

impl Default for MazeSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for MazeSize {
    type Error = MazeSizeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MazeSize> for u8 {
    fn from(size: MazeSize) -> Self {
        size.0
    }
}

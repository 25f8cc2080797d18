use std::{fmt, str::FromStr};

use rand::RngCore as _;

/// A 256-bit seed that fully determines a generated maze.
///
/// Displayed and parsed as 64 lowercase hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSeed([u8; 32]);

/// Errors produced when parsing a [`MazeSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex digits, got {_0} characters")]
    InvalidLength(#[error(not(source))] usize),
    /// The string contains a non-hexadecimal character.
    #[display("seed contains a non-hex digit")]
    InvalidDigit,
}

impl MazeSeed {
    /// Draws a seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// The raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for MazeSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<MazeSeed> for [u8; 32] {
    fn from(seed: MazeSeed) -> Self {
        seed.0
    }
}

impl fmt::Display for MazeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for MazeSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength(s.chars().count()));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SeedParseError::InvalidDigit);
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| SeedParseError::InvalidDigit)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| SeedParseError::InvalidDigit)?;
        }
        Ok(Self(bytes))
    }
}

//! Reproducible generator seeds.

use std::{fmt, str::FromStr};

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generator's output.
///
/// Seeds render as 64 lowercase hex digits and parse back from the same
/// form, so a puzzle can be reproduced from its printed seed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a deterministic seed from human-readable text.
    ///
    /// The phrase is hashed with SHA-256, so any string maps to a valid
    /// seed and equal phrases always produce equal seeds.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        Self(digest.into())
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

/// Errors that can occur when parsing a seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("expected 64 hex digits, found {len}")]
    WrongLength {
        /// The number of characters found.
        len: usize,
    },
    /// The string contains a character that is not a hex digit.
    #[display("invalid character in seed: {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::WrongLength { len });
        }
        let mut bytes = [0; 32];
        for (i, ch) in s.chars().enumerate() {
            let digit = ch
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidCharacter { ch })?;
            #[expect(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            bytes[i / 2] = (bytes[i / 2] << 4) | digit;
        }
        Ok(Self(bytes))
    }
}

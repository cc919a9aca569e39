use std::io;
use thiserror::Error;

/// All configuration errors reported by [`Generator::try_new`].
///
/// [`Generator::try_new`]: crate::Generator::try_new
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The alphabet has fewer than 2 characters, so positional encoding is
    /// not possible.
    #[error("alphabet must contain at least 2 characters, got {len}")]
    AlphabetTooShort {
        /// Number of characters in the rejected alphabet.
        len: usize,
    },

    /// The alphabet has more than 256 characters, which cannot be indexed by
    /// a single random byte under the rejection-sampling scheme.
    #[error("alphabet must contain at most 256 characters, got {len}")]
    AlphabetTooLong {
        /// Number of characters in the rejected alphabet.
        len: usize,
    },

    /// The alphabet contains a repeated character, which would make the
    /// encoding ambiguous.
    #[error("alphabet contains duplicate character {ch:?}")]
    DuplicateAlphabetChar {
        /// The first character found more than once.
        ch: char,
    },

    /// The requested random-character count is negative.
    #[error("number of random characters cannot be negative, got {value}")]
    NegativeRandomChars {
        /// The rejected count.
        value: i32,
    },
}

/// All generation errors reported by [`Generator::try_generate`].
///
/// [`Generator::try_generate`]: crate::Generator::try_generate
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// The current time precedes the configured epoch, so the elapsed tick
    /// count cannot be represented. This can happen with a future-dated
    /// epoch or a stepped-back system clock; whether to retry later is the
    /// caller's decision.
    #[error("current time is before the configured epoch")]
    EpochNotReached,

    /// The underlying random byte stream could not be read.
    #[error("failed to read random bytes")]
    RandomSource(#[source] io::Error),
}

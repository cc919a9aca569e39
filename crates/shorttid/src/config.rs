use crate::{DEFAULT_ALPHABET, MILLISECOND, RandomSource, SystemClock, ThreadRandom, TimeSource};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// The number of random characters appended by [`Config::default`].
pub const DEFAULT_RANDOM_CHARS: i32 = 5;

/// The epoch used by [`Config::default`]: 1970-01-01T00:00:00Z.
pub const DEFAULT_EPOCH: SystemTime = UNIX_EPOCH;

/// An immutable description of how identifiers are generated.
///
/// A config is assembled builder-style: [`Config::new`] returns the fully
/// defaulted value and each setter consumes the config and returns the
/// refined copy, so setters can be chained in any order. Once a config has
/// been handed to a [`Generator`] it is never mutated again.
///
/// The type parameters carry the two pluggable capabilities — a clock and a
/// random byte stream — defaulting to the real [`SystemClock`] and the
/// cryptographically secure [`ThreadRandom`]. Swapping either for a mock
/// makes generation fully deterministic in tests.
///
/// # Example
///
/// ```
/// use shorttid::{Config, Generator, BASE36_ALPHABET, SECOND};
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let config = Config::new()
///     .epoch(UNIX_EPOCH + Duration::from_secs(1_577_836_800)) // 2020-01-01
///     .tick_size(SECOND)
///     .alphabet(BASE36_ALPHABET)
///     .random_chars(4);
///
/// let generator = Generator::try_new(config).unwrap();
/// let id = generator.try_generate().unwrap();
/// assert!(id.chars().all(|c| BASE36_ALPHABET.contains(c)));
/// ```
///
/// [`Generator`]: crate::Generator
#[derive(Clone, Debug)]
pub struct Config<T = SystemClock, R = ThreadRandom> {
    pub(crate) epoch: SystemTime,
    pub(crate) tick_size: Duration,
    pub(crate) alphabet: String,
    pub(crate) random_chars: i32,
    pub(crate) time_source: T,
    pub(crate) random_source: R,
}

impl Default for Config {
    /// Returns the default configuration:
    ///
    /// - epoch: [`DEFAULT_EPOCH`] (Unix epoch)
    /// - tick size: [`MILLISECOND`]
    /// - alphabet: [`DEFAULT_ALPHABET`] (base62)
    /// - random characters: [`DEFAULT_RANDOM_CHARS`]
    /// - time source: [`SystemClock`]
    /// - random source: [`ThreadRandom`]
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            tick_size: MILLISECOND,
            alphabet: DEFAULT_ALPHABET.to_owned(),
            random_chars: DEFAULT_RANDOM_CHARS,
            time_source: SystemClock,
            random_source: ThreadRandom,
        }
    }
}

impl Config {
    /// Returns the default configuration. See [`Config::default`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, R> Config<T, R> {
    /// Sets the epoch: the instant at which the tick count is zero.
    pub fn epoch(mut self, epoch: SystemTime) -> Self {
        self.epoch = epoch;
        self
    }

    /// Sets how much real time one tick of the time segment represents.
    ///
    /// [`Duration::ZERO`] disables the time segment entirely; identifiers
    /// are then random-only.
    pub fn tick_size(mut self, tick_size: Duration) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Sets the ordered alphabet used for both segments.
    ///
    /// Validated when the config is turned into a [`Generator`]: it must
    /// hold between 2 and 256 distinct characters.
    ///
    /// [`Generator`]: crate::Generator
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Sets the number of trailing random characters.
    pub fn random_chars(mut self, random_chars: i32) -> Self {
        self.random_chars = random_chars;
        self
    }

    /// Replaces the time source, e.g. with a fixed clock in tests.
    pub fn time_source<T2: TimeSource>(self, time_source: T2) -> Config<T2, R> {
        Config {
            epoch: self.epoch,
            tick_size: self.tick_size,
            alphabet: self.alphabet,
            random_chars: self.random_chars,
            time_source,
            random_source: self.random_source,
        }
    }

    /// Replaces the random byte stream, e.g. with a deterministic one in
    /// tests.
    pub fn random_source<R2: RandomSource>(self, random_source: R2) -> Config<T, R2> {
        Config {
            epoch: self.epoch,
            tick_size: self.tick_size,
            alphabet: self.alphabet,
            random_chars: self.random_chars,
            time_source: self.time_source,
            random_source,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SECOND;

    #[test]
    fn default_values_match_documented_defaults() {
        let config = Config::new();
        assert_eq!(config.epoch, UNIX_EPOCH);
        assert_eq!(config.tick_size, MILLISECOND);
        assert_eq!(config.alphabet, DEFAULT_ALPHABET);
        assert_eq!(config.random_chars, 5);
    }

    #[test]
    fn setters_chain_and_override() {
        let epoch = UNIX_EPOCH + Duration::from_secs(1_577_836_800);
        let config = Config::new()
            .random_chars(3)
            .alphabet("abc")
            .tick_size(SECOND)
            .epoch(epoch);

        assert_eq!(config.epoch, epoch);
        assert_eq!(config.tick_size, SECOND);
        assert_eq!(config.alphabet, "abc");
        assert_eq!(config.random_chars, 3);
    }

    #[test]
    fn swapping_sources_keeps_the_other_fields() {
        struct FixedTime;
        impl TimeSource for FixedTime {
            fn now(&self) -> SystemTime {
                UNIX_EPOCH
            }
        }

        let config = Config::new().alphabet("01").time_source(FixedTime);
        assert_eq!(config.alphabet, "01");
        assert_eq!(config.time_source.now(), UNIX_EPOCH);
    }
}

use crate::{
    Config, ConfigError, GenerateError, RandomSource, SystemClock, ThreadRandom, TimeSource,
    encode::encode_base_n, random::sample_chars,
};
use std::collections::HashSet;
use std::sync::OnceLock;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Generates short, sortable identifiers from a fixed [`Config`].
///
/// A generator is built once from a validated config and reused for every
/// call. It holds no mutable per-call state, so a shared reference can be
/// used concurrently from any number of threads without locking.
///
/// Each identifier is `[time segment][random segment]`: the time segment is
/// the base-N encoded count of ticks elapsed since the configured epoch, and
/// the random segment is drawn uniformly from the configured alphabet.
/// Because the tick count only grows, identifiers generated more than one
/// tick apart sort lexicographically in generation order (for ASCII-ordered
/// alphabets such as the default base62).
///
/// # Example
///
/// ```
/// use shorttid::{Config, Generator};
///
/// let generator = Generator::try_new(Config::new()).unwrap();
/// let id = generator.try_generate().unwrap();
/// assert!(!id.is_empty());
/// ```
#[derive(Debug)]
pub struct Generator<T = SystemClock, R = ThreadRandom> {
    config: Config<T, R>,
    /// Decoded alphabet, indexed by digit value.
    alphabet: Vec<char>,
    /// Cached alphabet length.
    base: usize,
    /// `config.random_chars` after the non-negative check.
    random_chars: usize,
}

impl<T, R> Generator<T, R>
where
    T: TimeSource,
    R: RandomSource,
{
    /// Creates a generator, validating the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::AlphabetTooShort`] if the alphabet has fewer than 2
    ///   characters
    /// - [`ConfigError::AlphabetTooLong`] if it has more than 256 (a single
    ///   random byte could not index it without bias)
    /// - [`ConfigError::DuplicateAlphabetChar`] if any character repeats
    /// - [`ConfigError::NegativeRandomChars`] if the random-character count
    ///   is negative
    pub fn try_new(config: Config<T, R>) -> Result<Self, ConfigError> {
        let alphabet: Vec<char> = config.alphabet.chars().collect();

        if alphabet.len() < 2 {
            return Err(ConfigError::AlphabetTooShort {
                len: alphabet.len(),
            });
        }
        if alphabet.len() > 256 {
            return Err(ConfigError::AlphabetTooLong {
                len: alphabet.len(),
            });
        }

        let mut seen = HashSet::with_capacity(alphabet.len());
        for &ch in &alphabet {
            if !seen.insert(ch) {
                return Err(ConfigError::DuplicateAlphabetChar { ch });
            }
        }

        if config.random_chars < 0 {
            return Err(ConfigError::NegativeRandomChars {
                value: config.random_chars,
            });
        }
        let random_chars = config.random_chars as usize;

        let base = alphabet.len();
        Ok(Self {
            config,
            alphabet,
            base,
            random_chars,
        })
    }

    /// Creates a generator from a pre-validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid. Use [`Generator::try_new`] to
    /// handle the error instead.
    pub fn new(config: Config<T, R>) -> Self {
        match Self::try_new(config) {
            Ok(generator) => generator,
            Err(e) => panic!("invalid shorttid configuration: {e}"),
        }
    }

    /// Generates one identifier.
    ///
    /// Reads the clock once, quantizes the elapsed time since the epoch into
    /// ticks, encodes the tick count over the alphabet, and appends the
    /// configured number of uniformly sampled random characters. A tick size
    /// of zero skips the time segment (and the epoch check) entirely.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::EpochNotReached`] if the clock reads earlier than
    ///   the configured epoch while a time segment is enabled
    /// - [`GenerateError::RandomSource`] if the random byte stream fails
    ///
    /// No partial identifier is ever returned on failure.
    ///
    /// # Example
    ///
    /// ```
    /// use shorttid::{Config, Generator};
    ///
    /// let generator = Generator::try_new(Config::new()).unwrap();
    /// let a = generator.try_generate().unwrap();
    /// let b = generator.try_generate().unwrap();
    /// assert_ne!(a, b);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_generate(&self) -> Result<String, GenerateError> {
        let mut id = String::new();

        if !self.config.tick_size.is_zero() {
            let now = self.config.time_source.now();
            let elapsed = now
                .duration_since(self.config.epoch)
                .map_err(|_| GenerateError::EpochNotReached)?;

            // Ticks fit u64 for every realistic epoch/tick-size pair; the
            // codec is scoped to 64-bit counts, so saturate at the extreme.
            let ticks = elapsed.as_nanos() / self.config.tick_size.as_nanos();
            let ticks = u64::try_from(ticks).unwrap_or(u64::MAX);

            id.push_str(&encode_base_n(ticks, &self.alphabet));
        }

        if self.random_chars > 0 {
            let random = sample_chars(
                &self.config.random_source,
                &self.alphabet,
                self.random_chars,
            )?;
            id.push_str(&random);
        }

        Ok(id)
    }

    /// Generates one identifier, panicking on failure.
    ///
    /// Intended for call sites with a statically valid setup (past epoch,
    /// working OS randomness) that prefer not to handle an error value on
    /// every call. Use [`Generator::try_generate`] to handle errors instead.
    ///
    /// # Panics
    ///
    /// Panics if the clock reads earlier than the configured epoch or the
    /// random byte stream fails.
    pub fn generate(&self) -> String {
        match self.try_generate() {
            Ok(id) => id,
            Err(e) => panic!("failed to generate identifier: {e}"),
        }
    }

    /// Returns the configuration this generator was built from.
    pub fn config(&self) -> &Config<T, R> {
        &self.config
    }

    /// Returns the alphabet length, cached at construction.
    pub fn base(&self) -> usize {
        self.base
    }
}

/// The process-wide generator behind [`generate`] / [`try_generate`], built
/// from [`Config::default`] on first use.
static DEFAULT_GENERATOR: OnceLock<Generator> = OnceLock::new();

fn default_generator() -> &'static Generator {
    // The default config is valid by construction; failing here is a
    // startup invariant violation, not a runtime error.
    DEFAULT_GENERATOR.get_or_init(|| {
        Generator::try_new(Config::default())
            .expect("shorttid: default generator configuration must be valid")
    })
}

/// Generates one identifier using the shared default generator.
///
/// Defaults: Unix epoch, 1 ms ticks, base62 alphabet, 5 random characters.
///
/// # Errors
///
/// See [`Generator::try_generate`].
///
/// # Example
///
/// ```
/// let id = shorttid::try_generate().unwrap();
/// assert!(id.len() > 5);
/// ```
pub fn try_generate() -> Result<String, GenerateError> {
    default_generator().try_generate()
}

/// Generates one identifier using the shared default generator, panicking on
/// failure.
///
/// The default configuration counts ticks from the Unix epoch, so with a
/// sane system clock this only panics if OS randomness fails.
///
/// # Example
///
/// ```
/// let id = shorttid::generate();
/// assert!(id.len() > 5);
/// ```
pub fn generate() -> String {
    default_generator().generate()
}

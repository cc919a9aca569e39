use crate::GenerateError;
use rand::RngCore;
use std::io;

/// A trait for sources of uniformly distributed random bytes.
///
/// This abstraction allows you to plug in the default cryptographically
/// secure generator or a deterministic stream in tests. Implementations must
/// either fill the entire buffer or return an error; a partial fill is not a
/// valid outcome.
///
/// # Example
///
/// ```
/// use shorttid::RandomSource;
///
/// struct FixedBytes(u8);
/// impl RandomSource for FixedBytes {
///     fn fill_bytes(&self, dest: &mut [u8]) -> std::io::Result<()> {
///         dest.fill(self.0);
///         Ok(())
///     }
/// }
///
/// let mut buf = [0u8; 4];
/// FixedBytes(7).fill_bytes(&mut buf).unwrap();
/// assert_eq!(buf, [7, 7, 7, 7]);
/// ```
pub trait RandomSource {
    /// Fills `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> io::Result<()>;
}

/// A [`RandomSource`] that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads
/// are contention-free and safe. This type does **not** store the RNG itself;
/// it simply accesses the thread-local generator on each call, so it may be
/// freely shared across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> io::Result<()> {
        rand::rng().fill_bytes(dest);
        Ok(())
    }
}

/// Samples `length` characters independently and uniformly from `alphabet`.
///
/// Raw bytes are pulled from `random` in `length`-sized batches. A byte is
/// accepted only if it falls below the largest multiple of `base` that fits
/// in a byte; anything above is discarded so that `byte % base` stays
/// uniform (rejection sampling, no modulo bias). The caller guarantees
/// `2 <= base <= 256`.
///
/// On a read error from `random`, no partial string is returned.
pub(crate) fn sample_chars<R: RandomSource>(
    random: &R,
    alphabet: &[char],
    length: usize,
) -> Result<String, GenerateError> {
    if length == 0 {
        return Ok(String::new());
    }

    let base = alphabet.len();
    let max_valid_byte = ((256 / base) * base - 1) as u8;

    let mut out = String::with_capacity(length);
    let mut accepted = 0;
    let mut batch = vec![0u8; length];

    while accepted < length {
        random
            .fill_bytes(&mut batch)
            .map_err(GenerateError::RandomSource)?;

        for &byte in &batch {
            if byte <= max_valid_byte {
                out.push(alphabet[byte as usize % base]);
                accepted += 1;
                if accepted == length {
                    break;
                }
            }
        }
    }

    Ok(out)
}

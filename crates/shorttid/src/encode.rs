/// Encodes a non-negative integer in positional notation over `alphabet`,
/// most-significant digit first.
///
/// Zero encodes to the single zero digit (alphabet index 0), never to an
/// empty string. The output is not padded: its length grows with the
/// magnitude of `number`, which is what lets the time segment of an
/// identifier shrink for coarse tick sizes.
///
/// The digit buffer is a growable `Vec` sized for the worst case (64 digits
/// at base 2), so encoding succeeds for every `u64` at any base >= 2. The
/// caller guarantees `alphabet.len() >= 2`.
pub(crate) fn encode_base_n(mut number: u64, alphabet: &[char]) -> String {
    if number == 0 {
        return alphabet[0].to_string();
    }

    let base = alphabet.len() as u64;
    let mut digits = Vec::with_capacity(64);

    while number > 0 {
        digits.push(alphabet[(number % base) as usize]);
        number /= base;
    }

    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BASE16_LOWER_ALPHABET, BASE62_ALPHABET};

    fn encode(number: u64, alphabet: &str) -> String {
        let chars: Vec<char> = alphabet.chars().collect();
        encode_base_n(number, &chars)
    }

    #[test]
    fn base62_vectors() {
        assert_eq!(encode(0, BASE62_ALPHABET), "0");
        assert_eq!(encode(10, BASE62_ALPHABET), "A");
        assert_eq!(encode(61, BASE62_ALPHABET), "z");
        assert_eq!(encode(62, BASE62_ALPHABET), "10");
        assert_eq!(encode(1_234_567_890, BASE62_ALPHABET), "1LY7VK");
    }

    #[test]
    fn base16_vectors() {
        assert_eq!(encode(0, BASE16_LOWER_ALPHABET), "0");
        assert_eq!(encode(255, BASE16_LOWER_ALPHABET), "ff");
        assert_eq!(encode(4096, BASE16_LOWER_ALPHABET), "1000");
    }

    #[test]
    fn binary_vectors() {
        assert_eq!(encode(0, "01"), "0");
        assert_eq!(encode(10, "01"), "1010");
    }

    #[test]
    fn base10_matches_decimal_formatting() {
        for n in [0u64, 1, 9, 10, 99, 12_345, u64::MAX] {
            assert_eq!(encode(n, "0123456789"), n.to_string());
        }
    }

    #[test]
    fn max_u64_at_base_2_uses_64_digits() {
        let encoded = encode(u64::MAX, "01");
        assert_eq!(encoded.len(), 64);
        assert!(encoded.chars().all(|c| c == '1'));
    }

    #[test]
    fn max_u64_at_base_62() {
        // 2^64 - 1 in base62.
        assert_eq!(encode(u64::MAX, BASE62_ALPHABET), "LygHa16AHYF");
    }

    #[test]
    fn encoding_is_order_preserving_at_fixed_length() {
        // Same-length encodings compare like the numbers they encode.
        let a = encode(1_000_000, BASE62_ALPHABET);
        let b = encode(1_000_001, BASE62_ALPHABET);
        assert_eq!(a.len(), b.len());
        assert!(a < b);
    }

    #[test]
    fn non_ascii_alphabet_is_supported() {
        // Greek lowercase: digit values map by character, not by byte.
        assert_eq!(encode(0, "αβ"), "α");
        assert_eq!(encode(2, "αβ"), "βα");
    }
}

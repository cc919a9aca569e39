/// The default alphabet used by [`crate::Config::default`]: [`BASE62_ALPHABET`].
pub const DEFAULT_ALPHABET: &str = BASE62_ALPHABET;

/// Standard base62 alphabet (digits, uppercase, lowercase).
pub const BASE62_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Lowercase alphanumeric base36 alphabet.
pub const BASE36_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Lowercase hexadecimal alphabet.
pub const BASE16_LOWER_ALPHABET: &str = "0123456789abcdef";

/// Uppercase hexadecimal alphabet.
pub const BASE16_UPPER_ALPHABET: &str = "0123456789ABCDEF";

/// URL-safe base64 alphabet (alphanumeric plus `-` and `_`).
///
/// Note: this follows the RFC 4648 URL-safe digit ordering, which is **not**
/// ASCII-sorted. Identifiers built from it remain sortable under this
/// alphabet's own ordering, but not under a plain byte comparison.
pub const BASE64_URL_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Crockford base32 alphabet, designed for human readability (excludes the
/// easily confused I, L, O and U).
pub const CROCKFORD_BASE32_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

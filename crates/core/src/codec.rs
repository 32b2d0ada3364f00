//! Low-level text and binary codecs used by the data URL processor.
//!
//! These are the leaf building blocks of parsing and serialization:
//! ASCII whitespace trimming, isomorphic decoding (byte value == code point),
//! lenient percent-decoding, and the forgiving base64 decoder from the
//! WHATWG Infra standard.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use data_url::forgiving_base64::{self, InvalidBase64};
use percent_encoding::percent_decode_str;

// ── Text ────────────────────────────────────────────────────────────────

/// Returns `true` for ASCII whitespace: space, tab, LF, FF, and CR.
pub fn is_ascii_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r')
}

/// Strip leading and trailing ASCII whitespace.
pub fn trim_ascii_whitespace(s: &str) -> &str {
    s.trim_matches(is_ascii_whitespace)
}

/// Decode bytes into a string where every byte becomes the code point of
/// the same numeric value (U+0000..=U+00FF).
pub fn isomorphic_decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

// ── Percent-decoding ────────────────────────────────────────────────────

/// Percent-decode `input` into raw bytes.
///
/// Never fails. A `%` that is not followed by two hex digits is kept as a
/// literal `0x25` byte, and the characters after it are copied through
/// unchanged.
pub fn percent_decode(input: &str) -> Vec<u8> {
    percent_decode_str(input).collect()
}

// ── Base64 ──────────────────────────────────────────────────────────────

/// Encode bytes with the standard base64 alphabet and `=` padding.
pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Forgiving-base64 decode.
///
/// ASCII whitespace is ignored and trailing `=` padding is optional.
/// Anything outside the standard alphabet, or a length that leaves a
/// remainder of one, is an error. Non-zero trailing bits are discarded.
pub fn base64_decode(input: &str) -> Result<Vec<u8>, InvalidBase64> {
    forgiving_base64::decode_to_vec(input.as_bytes())
}

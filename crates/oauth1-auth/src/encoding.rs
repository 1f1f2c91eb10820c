//! Percent-encoding for OAuth 1.0a signatures.
//!
//! OAuth 1.0a (RFC 5849, section 3.6) encodes every byte of the UTF-8
//! representation of a value except the RFC 3986 unreserved characters:
//!
//! ```text
//! ALPHA / DIGIT / "-" / "." / "_" / "~"
//! ```
//!
//! Encoded bytes are written as `%XX` with uppercase hexadecimal digits.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode, utf8_percent_encode};

/// Every byte outside the unreserved set is encoded.
///
/// `AsciiSet` is a 256-bit lookup mask built at compile time. Bytes at or
/// above `0x80` are always encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string using the OAuth 1.0a rules.
///
/// # Examples
///
/// ```
/// use oauth1_auth::encoding::encode;
///
/// assert_eq!(encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(encode("a-b.c_d~e"), "a-b.c_d~e");
/// assert_eq!(encode("\u{2603}"), "%E2%98%83");
/// ```
#[must_use]
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Percent-encode an arbitrary byte slice using the OAuth 1.0a rules.
///
/// # Examples
///
/// ```
/// use oauth1_auth::encoding::encode_bytes;
///
/// assert_eq!(encode_bytes(&[0x00, b'A', 0xFF]), "%00A%FF");
/// ```
#[must_use]
pub fn encode_bytes(value: &[u8]) -> String {
    percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

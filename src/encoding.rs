//! Percent encoding for package URL components.
//!
//! The format deviates from generic form encoding in three deliberate ways:
//! space is always `%20` (never `+`), `:` and `~` stay literal everywhere,
//! and `/` stays literal in every field except the name. The name sits
//! between the namespace and version delimiters, where a literal slash
//! would be mis-read as a namespace separator, so it alone keeps `%2F`.

use crate::error::PackageUrlError;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Characters that never need escaping in any component.
const fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-' | b'*' | b'_' | b':' | b'~')
}

fn percent_encode(value: &str, keep_slash: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for &byte in value.as_bytes() {
        if is_unreserved(byte) || (keep_slash && byte == b'/') {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
        }
    }
    out
}

/// Encodes a name. Slashes are escaped; see the module docs.
pub(crate) fn encode_name(value: &str) -> String {
    percent_encode(value, false)
}

/// Encodes any field other than the name, leaving `/` literal.
pub(crate) fn encode(value: &str) -> String {
    percent_encode(value, true)
}

pub(crate) fn encode_version(value: &str) -> String {
    encode(value)
}

pub(crate) fn encode_segment(value: &str) -> String {
    encode(value)
}

pub(crate) fn encode_qualifier_value(value: &str) -> String {
    encode(value)
}

/// Decodes a percent-encoded value back to text.
///
/// `%XX` escapes become bytes and `+` becomes a space; the result is read
/// as UTF-8 with invalid sequences replaced by U+FFFD. A truncated or
/// non-hex escape fails immediately.
pub(crate) fn decode(value: &str) -> Result<String, PackageUrlError> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_value);
                let lo = bytes.get(i + 2).copied().and_then(hex_value);
                let (Some(hi), Some(lo)) = (hi, lo) else {
                    return Err(PackageUrlError::InvalidPercentEncoding {
                        value: value.to_string(),
                    });
                };
                out.push((hi << 4) | lo);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

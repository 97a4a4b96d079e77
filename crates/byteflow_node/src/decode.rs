// SPDX-License-Identifier: MIT OR Apache-2.0
//! Escape-aware byte string decoding.
//!
//! Turns human-authored text such as `GIF89a\x00\n` into the raw bytes it
//! stands for. Supported escapes are `\a \b \f \n \r \t \v \\` and `\xHH`.

/// Error decoding a byte string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Backslash followed by an unknown escape character
    #[error("Invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// `\x` with fewer than two characters left
    #[error("Truncated hex escape")]
    TruncatedEscape,

    /// `\x` followed by something that is not a hex digit
    #[error("Invalid hex digit '{0}'")]
    InvalidHexDigit(char),
}

/// Decode an escaped string into bytes.
///
/// A trailing lone backslash is dropped.
pub fn decode_byte_string(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut result = Vec::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            result.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        let Some(escape) = chars.next() else {
            break;
        };

        let byte = match escape {
            'a' => 0x07,
            'b' => 0x08,
            'f' => 0x0C,
            'n' => b'\n',
            'r' => b'\r',
            't' => b'\t',
            'v' => 0x0B,
            '\\' => b'\\',
            'x' => {
                let high = chars.next().ok_or(DecodeError::TruncatedEscape)?;
                let low = chars.next().ok_or(DecodeError::TruncatedEscape)?;
                (hex_digit(high)? << 4) | hex_digit(low)?
            }
            other => return Err(DecodeError::InvalidEscape(other)),
        };
        result.push(byte);
    }

    Ok(result)
}

fn hex_digit(c: char) -> Result<u8, DecodeError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(DecodeError::InvalidHexDigit(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(decode_byte_string("abc"), Ok(b"abc".to_vec()));
        assert_eq!(decode_byte_string(""), Ok(vec![]));
    }

    #[test]
    fn test_newline_escape() {
        assert_eq!(decode_byte_string("\\n"), Ok(vec![0x0A]));
        assert_eq!(decode_byte_string("a\\tb"), Ok(vec![b'a', 0x09, b'b']));
    }

    #[test]
    fn test_control_escapes() {
        assert_eq!(
            decode_byte_string("\\a\\b\\f\\r\\v\\\\"),
            Ok(vec![0x07, 0x08, 0x0C, 0x0D, 0x0B, b'\\'])
        );
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(decode_byte_string("\\x00\\xFf\\x7a"), Ok(vec![0x00, 0xFF, 0x7A]));
    }

    #[test]
    fn test_invalid_escapes() {
        assert_eq!(decode_byte_string("\\q"), Err(DecodeError::InvalidEscape('q')));
        assert_eq!(decode_byte_string("\\x4"), Err(DecodeError::TruncatedEscape));
        assert_eq!(decode_byte_string("\\xZZ"), Err(DecodeError::InvalidHexDigit('Z')));
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(decode_byte_string("ab\\"), Ok(b"ab".to_vec()));
    }

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(decode_byte_string("é"), Ok(vec![0xC3, 0xA9]));
    }
}

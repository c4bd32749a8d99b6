//! # Base64 Encoding/Decoding
//!
//! URL-safe base64 without padding. The output only uses `A-Z a-z 0-9 - _`,
//! so it can sit in a query string without percent-encoding.

use base64::{Engine as _, engine::general_purpose};

/// Encode bytes to base64 URL-safe string (no padding).
pub fn b64u_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(content)
}

/// Decode base64 URL-safe string to bytes.
///
/// Surrounding whitespace and trailing `=` padding are tolerated, since
/// hand-edited links sometimes carry them.
pub fn b64u_decode(b64u: &str) -> Result<Vec<u8>, Error> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(b64u.trim().trim_end_matches('='))
        .map_err(|_| Error::FailToB64uDecode)
}

/// Decode base64 URL-safe string to UTF-8 string.
pub fn b64u_decode_to_string(b64u: &str) -> Result<String, Error> {
    b64u_decode(b64u)
        .and_then(|bytes| String::from_utf8(bytes).map_err(|_| Error::FailToB64uDecode))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    FailToB64uDecode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_query_safe() {
        let encoded = b64u_encode("a&b=c#d?e/f+g");
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(b64u_decode_to_string(&encoded).unwrap(), "a&b=c#d?e/f+g");
    }

    #[test]
    fn test_decode_tolerates_padding() {
        assert_eq!(b64u_decode_to_string("aGk=").unwrap(), "hi");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(b64u_decode("not base64!"), Err(Error::FailToB64uDecode));
        // Valid base64 but not UTF-8
        let encoded = b64u_encode([0xff, 0xfe]);
        assert_eq!(b64u_decode_to_string(&encoded), Err(Error::FailToB64uDecode));
    }
}

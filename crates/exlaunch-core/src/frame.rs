//! Console response frame
//!
//! The console answers every request with a single buffer laid out as:
//!
//! | Offset    | Meaning                                  |
//! |-----------|------------------------------------------|
//! | 0         | success flag (nonzero = success)         |
//! | 1..4      | declared content length, big-endian      |
//! | 4..       | content                                  |
//!
//! Decoding is permissive: short buffers never fail, missing regions are
//! treated as empty.

use crate::error::{ExlaunchError, Result};

/// Maximum number of bytes read from the console for one response
pub const RESPONSE_BUFFER_SIZE: usize = 4096;

/// Offset where the content region starts
const CONTENT_OFFSET: usize = 4;

/// A decoded console response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    success: bool,
    declared_length: u32,
    content: Vec<u8>,
}

impl ResponseFrame {
    /// Decode a raw response buffer.
    ///
    /// An empty buffer decodes as a failed response with no content.
    pub fn decode(data: &[u8]) -> Self {
        let success = data.first().is_some_and(|&flag| flag != 0);

        let length_bytes = clamp(data, 1, CONTENT_OFFSET);
        let declared_length = length_bytes
            .iter()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));

        let content = clamp(data, CONTENT_OFFSET, data.len()).to_vec();

        Self {
            success,
            declared_length,
            content,
        }
    }

    /// Whether the console reported success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Length announced by the console (not checked against the content)
    pub fn declared_length(&self) -> u32 {
        self.declared_length
    }

    /// Raw content bytes
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as text, replacing invalid UTF-8
    pub fn content_lossy(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// Strict check that the declared length matches the received content.
    ///
    /// Not applied by the client; callers opt in.
    pub fn validate_length(&self) -> Result<()> {
        if self.declared_length as usize != self.content.len() {
            return Err(ExlaunchError::ProtocolError(format!(
                "declared length {} but received {} content bytes",
                self.declared_length,
                self.content.len()
            )));
        }
        Ok(())
    }
}

/// Slice `data[start..end]`, clamping both bounds to the available data
fn clamp(data: &[u8], start: usize, end: usize) -> &[u8] {
    let end = end.min(data.len());
    let start = start.min(end);
    &data[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_frame() {
        let frame = ResponseFrame::decode(b"\x01\x00\x00\x05hello");

        assert!(frame.is_success());
        assert_eq!(frame.declared_length(), 5);
        assert_eq!(frame.content(), b"hello");
        assert_eq!(frame.content_lossy(), "hello");
        assert!(frame.validate_length().is_ok());
    }

    #[test]
    fn test_decode_single_zero_byte() {
        let frame = ResponseFrame::decode(b"\x00");

        assert!(!frame.is_success());
        assert_eq!(frame.declared_length(), 0);
        assert!(frame.content().is_empty());
    }

    #[test]
    fn test_any_nonzero_flag_is_success() {
        assert!(ResponseFrame::decode(b"\x7f").is_success());
        assert!(ResponseFrame::decode(b"\xff\x00\x00\x00").is_success());
    }

    #[test]
    fn test_decode_empty_buffer() {
        let frame = ResponseFrame::decode(b"");

        assert!(!frame.is_success());
        assert_eq!(frame.declared_length(), 0);
        assert!(frame.content().is_empty());
    }

    #[test]
    fn test_decode_truncated_header() {
        // Only two of the three length bytes arrived
        let frame = ResponseFrame::decode(b"\x01\x01\x02");

        assert!(frame.is_success());
        assert_eq!(frame.declared_length(), 0x0102);
        assert!(frame.content().is_empty());
    }

    #[test]
    fn test_length_is_not_enforced_by_decode() {
        let frame = ResponseFrame::decode(b"\x01\x00\x00\x10abc");

        assert_eq!(frame.declared_length(), 16);
        assert_eq!(frame.content(), b"abc");

        let err = frame.validate_length().unwrap_err();
        assert!(matches!(err, ExlaunchError::ProtocolError(_)));
    }

    #[test]
    fn test_invalid_utf8_content() {
        let frame = ResponseFrame::decode(b"\x01\x00\x00\x02\xff\xfe");

        assert_eq!(frame.content(), b"\xff\xfe");
        assert_eq!(frame.content_lossy(), "\u{fffd}\u{fffd}");
    }
}

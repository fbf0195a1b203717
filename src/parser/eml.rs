//! Reading and parsing individual `.eml` files.

use std::path::Path;

use mail_parser::{Message, MessageParser};

use crate::error::{ExtractError, Result};

/// Read the raw bytes of an `.eml` file.
pub fn read_eml(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExtractError::FileNotFound(path.to_path_buf())
        } else {
            ExtractError::io(path, e)
        }
    })
}

/// Parse raw message bytes read from `path`.
///
/// `path` is only used for error reporting.
pub fn parse_message<'x>(data: &'x [u8], path: &Path) -> Result<Message<'x>> {
    MessageParser::default()
        .parse(strip_envelope(data))
        .ok_or_else(|| ExtractError::Parse(path.to_path_buf()))
}

/// Skip a UTF-8 BOM and a leading MBOX `From ` separator line, which
/// some tools leave in exported `.eml` files.
fn strip_envelope(data: &[u8]) -> &[u8] {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);

    if data.starts_with(b"From ") {
        if let Some(pos) = data.iter().position(|&b| b == b'\n') {
            return &data[pos + 1..];
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_envelope_from_line() {
        let data = b"From user@example.com Thu Jan 01 00:00:00 2024\nSubject: Test\n\nBody\n";
        assert!(strip_envelope(data).starts_with(b"Subject:"));
    }

    #[test]
    fn test_strip_envelope_bom() {
        let data = b"\xEF\xBB\xBFSubject: Test\n\nBody\n";
        assert!(strip_envelope(data).starts_with(b"Subject:"));
    }

    #[test]
    fn test_strip_envelope_untouched() {
        let data = b"From: a@b.com\nSubject: Test\n\nBody\n";
        assert_eq!(strip_envelope(data), data);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_eml("/definitely/not/here.eml").unwrap_err();
        assert!(matches!(err, ExtractError::FileNotFound(_)));
    }

    #[test]
    fn test_parse_message() {
        let data = b"From: a@b.com\r\nSubject: Hi\r\n\r\nBody\r\n";
        let message = parse_message(data, Path::new("hi.eml")).expect("parse");
        assert_eq!(message.subject(), Some("Hi"));
    }
}

//! # File Payload Framing
//!
//! Packs a filename and file bytes into one buffer before encryption, so
//! the filename travels inside the encrypted channel instead of alongside
//! it in cleartext:
//!
//! ```text
//! filename bytes ║ "||" ║ file bytes
//! ```
//!
//! The two-byte delimiter is the separator the receiving side splits on —
//! there is no length prefix, so a filename containing the delimiter would
//! make unframing ambiguous. Framing therefore rejects such filenames up
//! front, and unframing splits at the FIRST occurrence, matching how the
//! receiver parses the buffer.

use crate::error::{Error, Result};

/// Delimiter between filename bytes and file bytes
pub const FRAME_DELIMITER: &[u8] = b"||";

/// Frame a filename and file content into a single buffer.
///
/// ## Errors
///
/// - [`Error::InvalidFilename`] for an empty filename
/// - [`Error::AmbiguousFraming`] when the filename contains the delimiter;
///   the frame could not be split back unambiguously
pub fn frame(filename: &str, content: &[u8]) -> Result<Vec<u8>> {
    if filename.is_empty() {
        return Err(Error::InvalidFilename("filename is empty".to_string()));
    }
    if contains_delimiter(filename.as_bytes()) {
        return Err(Error::AmbiguousFraming(format!(
            "filename {:?} contains the frame delimiter \"||\"",
            filename
        )));
    }

    let name = filename.as_bytes();
    let mut framed = Vec::with_capacity(name.len() + FRAME_DELIMITER.len() + content.len());
    framed.extend_from_slice(name);
    framed.extend_from_slice(FRAME_DELIMITER);
    framed.extend_from_slice(content);
    Ok(framed)
}

/// Split a framed buffer back into filename and file content.
///
/// Splits at the first delimiter occurrence. File content may itself
/// contain `"||"`; only the filename segment is delimiter-free, which
/// [`frame`] guarantees.
///
/// ## Errors
///
/// - [`Error::AmbiguousFraming`] when no delimiter is present
/// - [`Error::InvalidFilename`] when the filename bytes are empty or not
///   valid UTF-8
pub fn unframe(framed: &[u8]) -> Result<(String, Vec<u8>)> {
    let at = find_delimiter(framed).ok_or_else(|| {
        Error::AmbiguousFraming("no frame delimiter in payload".to_string())
    })?;

    let filename = std::str::from_utf8(&framed[..at])
        .map_err(|_| Error::InvalidFilename("filename is not valid UTF-8".to_string()))?;
    if filename.is_empty() {
        return Err(Error::InvalidFilename("filename is empty".to_string()));
    }

    let content = framed[at + FRAME_DELIMITER.len()..].to_vec();
    Ok((filename.to_string(), content))
}

fn contains_delimiter(bytes: &[u8]) -> bool {
    find_delimiter(bytes).is_some()
}

fn find_delimiter(bytes: &[u8]) -> Option<usize> {
    bytes
        .windows(FRAME_DELIMITER.len())
        .position(|window| window == FRAME_DELIMITER)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let framed = frame("report.pdf", b"content bytes").unwrap();
        assert_eq!(framed, b"report.pdf||content bytes");
    }

    #[test]
    fn test_round_trip() {
        let framed = frame("notes.txt", b"hello world").unwrap();
        let (filename, content) = unframe(&framed).unwrap();
        assert_eq!(filename, "notes.txt");
        assert_eq!(content, b"hello world");
    }

    #[test]
    fn test_round_trip_binary_content() {
        let content: Vec<u8> = (0..=255u8).collect();
        let framed = frame("blob.bin", &content).unwrap();
        let (filename, restored) = unframe(&framed).unwrap();
        assert_eq!(filename, "blob.bin");
        assert_eq!(restored, content);
    }

    #[test]
    fn test_round_trip_empty_content() {
        let framed = frame("empty.txt", b"").unwrap();
        let (filename, content) = unframe(&framed).unwrap();
        assert_eq!(filename, "empty.txt");
        assert!(content.is_empty());
    }

    #[test]
    fn test_content_may_contain_delimiter() {
        // Only the filename must be delimiter-free; splitting at the
        // first occurrence keeps content bytes intact.
        let framed = frame("a.txt", b"x||y||z").unwrap();
        let (filename, content) = unframe(&framed).unwrap();
        assert_eq!(filename, "a.txt");
        assert_eq!(content, b"x||y||z");
    }

    #[test]
    fn test_filename_with_delimiter_rejected() {
        assert!(matches!(
            frame("weird||name.txt", b"data"),
            Err(Error::AmbiguousFraming(_))
        ));
    }

    #[test]
    fn test_empty_filename_rejected() {
        assert!(matches!(frame("", b"data"), Err(Error::InvalidFilename(_))));
    }

    #[test]
    fn test_unframe_without_delimiter_rejected() {
        assert!(matches!(
            unframe(b"no delimiter here"),
            Err(Error::AmbiguousFraming(_))
        ));
    }

    #[test]
    fn test_unframe_empty_filename_rejected() {
        assert!(matches!(
            unframe(b"||content"),
            Err(Error::InvalidFilename(_))
        ));
    }

    #[test]
    fn test_unicode_filename() {
        let framed = frame("relatório.pdf", b"data").unwrap();
        let (filename, _) = unframe(&framed).unwrap();
        assert_eq!(filename, "relatório.pdf");
    }
}

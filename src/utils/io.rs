//! File I/O primitives with consistent error handling.
//!
//! Every read takes an explicit [`Decode`] mode instead of assuming a decode
//! policy at the call site. The on-disk encoding is UTF-8 throughout; the
//! mode controls what happens when the bytes are not.

use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// How raw bytes become text.
///
/// `Strict` fails with `internal.decode_error` on invalid UTF-8.
/// `Lossy` substitutes U+FFFD replacement characters instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Decode {
    #[default]
    Strict,
    Lossy,
}

impl Decode {
    /// Decode a byte buffer according to this mode.
    pub fn decode(self, bytes: Vec<u8>, context: &str) -> Result<String> {
        match self {
            Decode::Strict => String::from_utf8(bytes)
                .map_err(|e| Error::internal_decode(e.to_string(), Some(context.to_string()))),
            Decode::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read` + decode with consistent `Error::internal_io` /
/// `Error::internal_decode` formatting.
pub fn read_text(path: &Path, decode: Decode, operation: &str) -> Result<String> {
    let bytes =
        fs::read(path).map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;
    decode.decode(bytes, operation)
}

/// Write content to file with standardized error handling.
///
/// Wraps `fs::write` with consistent `Error::internal_io` formatting.
/// Truncates; the file is created when missing.
pub fn write_text(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file atomically (write to .tmp, then rename).
///
/// Prevents data loss if the process crashes mid-write. The rename is
/// atomic on POSIX filesystems, so readers always see either the old
/// content or the new content — never a partial write.
pub fn write_text_atomic(path: &Path, content: &str, operation: &str) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let filename = path.file_name().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("{} (write temp)", operation)))
    })?;

    fs::rename(&tmp_path, path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} (rename)", operation))))?;

    Ok(())
}

/// Append content at end-of-file without touching existing bytes.
///
/// The file is created when missing.
pub fn append_text(path: &Path, content: &str, operation: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;

    file.write_all(content.as_bytes())
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_text_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_text(temp.path(), Decode::Strict, "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_text_returns_error_for_missing_file() {
        let result = read_text(Path::new("/nonexistent/path.txt"), Decode::Strict, "test read");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn read_text_strict_rejects_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let result = read_text(temp.path(), Decode::Strict, "test read");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code.as_str(), "internal.decode_error");
    }

    #[test]
    fn read_text_lossy_substitutes_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0x66, 0x6f, 0xff]).unwrap();

        let content = read_text(temp.path(), Decode::Lossy, "test read").unwrap();
        assert!(content.starts_with("fo"));
        assert!(content.contains('\u{FFFD}'));
    }

    #[test]
    fn write_text_succeeds_for_valid_path() {
        let temp = NamedTempFile::new().unwrap();
        let result = write_text(temp.path(), "new content", "test write");
        assert!(result.is_ok());

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn write_text_returns_error_for_invalid_path() {
        let result = write_text(
            Path::new("/nonexistent/dir/file.txt"),
            "content",
            "test write",
        );
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn append_text_preserves_existing_content() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "before").unwrap();

        append_text(temp.path(), " after", "test append").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "before after");
    }

    #[test]
    fn append_text_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.txt");

        append_text(&path, "data", "test append").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "data");
    }
}

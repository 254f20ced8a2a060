//! Whole-file text operations.
//!
//! Every operation is keyed by path and does at most one full read and one
//! full write: read the file into memory, transform, write back. Mutating
//! writes go through the atomic tmp+rename path so a crash never leaves a
//! partial file; `append` instead opens in append mode and is strictly
//! additive. Nothing here locks — two callers racing on one path is the
//! caller's problem.
//!
//! Read-based operations require the file to exist; `append` creates it.

use crate::error::Result;
use crate::utils::io::{self, Decode};
use std::path::Path;

/// Replace every non-overlapping occurrence of `old` with `new`.
///
/// The file is rewritten even when nothing matched. Returns the number of
/// substitutions made.
pub fn replace(path: &Path, old: &str, new: &str, decode: Decode) -> Result<usize> {
    let content = io::read_text(path, decode, "replace")?;

    let count = content.matches(old).count();
    let updated = content.replace(old, new);

    io::write_text_atomic(path, &updated, "replace")?;
    Ok(count)
}

/// Truncate the file to empty.
pub fn clear(path: &Path) -> Result<()> {
    io::write_text(path, "", "clear")
}

/// Append `data` at end-of-file, leaving existing content untouched.
pub fn append(path: &Path, data: &str) -> Result<()> {
    io::append_text(path, data, "append")
}

/// Whether `needle` occurs anywhere in the file's text.
pub fn content_exists(path: &Path, needle: &str, decode: Decode) -> Result<bool> {
    let content = io::read_text(path, decode, "content exists")?;
    Ok(content.contains(needle))
}

/// Lines containing `needle`, newline-inclusive, in file order.
pub fn lines_with_content(path: &Path, needle: &str, decode: Decode) -> Result<Vec<String>> {
    let content = io::read_text(path, decode, "filter lines")?;
    Ok(content
        .split_inclusive('\n')
        .filter(|line| line.contains(needle))
        .map(|line| line.to_string())
        .collect())
}

/// Lines not containing `needle`, newline-inclusive, in file order.
///
/// Together with [`lines_with_content`] this partitions the file's lines.
pub fn lines_without_content(path: &Path, needle: &str, decode: Decode) -> Result<Vec<String>> {
    let content = io::read_text(path, decode, "filter lines")?;
    Ok(content
        .split_inclusive('\n')
        .filter(|line| !line.contains(needle))
        .map(|line| line.to_string())
        .collect())
}

/// Drop every line whose stripped content is empty. Returns the number of
/// lines removed.
pub fn remove_empty_lines(path: &Path, decode: Decode) -> Result<usize> {
    let content = io::read_text(path, decode, "remove empty lines")?;

    let total = content.split_inclusive('\n').count();
    let kept: String = content
        .split_inclusive('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();
    let removed = total - kept.split_inclusive('\n').count();

    io::write_text_atomic(path, &kept, "remove empty lines")?;
    Ok(removed)
}

/// Drop the final line when it is blank, then make sure the remaining final
/// line ends with a newline. Returns whether the file changed.
pub fn remove_last_empty_line(path: &Path, decode: Decode) -> Result<bool> {
    let content = io::read_text(path, decode, "trim trailing line")?;

    let mut lines: Vec<&str> = content.split_inclusive('\n').collect();

    if let Some(last) = lines.last() {
        if last.trim().is_empty() {
            lines.pop();
        }
    }

    let mut updated: String = lines.concat();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }

    if updated == content {
        return Ok(false);
    }

    io::write_text_atomic(path, &updated, "trim trailing line")?;
    Ok(true)
}

//! Raw line extraction and UTF-8 decoding.

use std::fs;
use std::path::Path;

use log::debug;

use super::error::Result;

/// Read a project file into decoded text lines.
///
/// The file is read as raw bytes and split on any of the usual newline
/// conventions. Each line must decode as strict UTF-8: the first line
/// that does not marks the start of an embedded binary trailer, and it
/// and everything after it are discarded. This is how binary payloads
/// are skipped without knowing their length in advance. Leading tabs
/// (nesting indentation) are stripped from retained lines.
///
/// # Errors
/// Returns an error only if the file cannot be opened or read. An empty
/// file, or one that is binary from its first line, yields an empty
/// sequence.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let mut lines = Vec::new();
    for raw in split_lines(&bytes) {
        match std::str::from_utf8(raw) {
            Ok(text) => lines.push(text.trim_start_matches('\t').to_string()),
            Err(_) => {
                debug!(
                    "binary trailer after line {} in {}",
                    lines.len(),
                    path.display()
                );
                break;
            }
        }
    }
    debug!("read {} text lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split raw bytes on `\n`, `\r\n` or bare `\r` boundaries.
///
/// A trailing terminator does not produce a final empty line.
fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                out.push(&bytes[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                out.push(&bytes[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        out.push(&bytes[start..]);
    }
    out
}

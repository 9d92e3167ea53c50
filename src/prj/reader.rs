//! High-level project-file reading.

use std::path::Path;

use log::info;

use super::blocks::{self, WalkContext};
use super::error::Result;
use super::lines;
use super::value::Map;

/// The main reader for block-structured project text files.
///
/// Opening a reader performs the one-time line extraction; each call to
/// [`document`](Self::document) or [`keyword`](Self::keyword) then runs
/// an independent traversal over the retained lines with its own
/// cursor, so several sections can be pulled from one file without
/// re-reading it and concurrent parses cannot corrupt each other.
#[derive(Debug)]
pub struct PrjReader {
    lines: Vec<String>,
}

impl PrjReader {
    /// Open a project file and extract its text lines.
    ///
    /// # Errors
    /// Returns an error only if the file cannot be opened or read. A
    /// file that is empty, or binary from its first line, yields a
    /// reader over zero lines.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening project file: {}", path.display());
        let lines = lines::read(path)?;
        Ok(Self { lines })
    }

    /// The decoded text lines, leading tabs stripped.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of retained text lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Parse the whole document from its first `$begin` marker.
    ///
    /// Returns an empty mapping when the file contains no block marker.
    pub fn document(&self) -> Map {
        let mut root = Map::new();
        if let Some(keyword) = blocks::find_root(&self.lines) {
            let mut ctx = WalkContext::new(&self.lines);
            blocks::walk(keyword, &mut root, &mut ctx);
        }
        root
    }

    /// Parse only the named top-level block.
    ///
    /// The returned mapping has `keyword` as its single key; it is
    /// empty when the block is absent.
    pub fn keyword(&self, keyword: &str) -> Map {
        let mut section = Map::new();
        let mut ctx = WalkContext::new(&self.lines);
        blocks::walk(keyword, &mut section, &mut ctx);
        section
    }
}

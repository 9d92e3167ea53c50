//! Core project-file reader module

pub mod error;
pub mod value;
mod blocks;
mod entries;
mod lines;
mod reader;
mod scalar;

use std::path::Path;

pub use error::{PrjError, Result};
pub use reader::PrjReader;
use value::Map;

/// Parse an entire project file into its root mapping.
///
/// The first `$begin` marker in the file names the root block; the
/// returned mapping holds that block under its keyword. A file with no
/// block marker yields an empty mapping.
pub fn load_entire_file(path: impl AsRef<Path>) -> Result<Map> {
    Ok(PrjReader::open(path)?.document())
}

/// Parse only the named top-level block of a project file.
///
/// All other top-level siblings are skipped without being materialized.
/// The returned mapping has `keyword` as its single key, or is empty
/// when the block is absent.
pub fn load_keyword(path: impl AsRef<Path>, keyword: &str) -> Result<Map> {
    Ok(PrjReader::open(path)?.keyword(keyword))
}

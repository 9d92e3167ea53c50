//! # prj-reader
//!
//! A reader for block-structured engineering project text files: the
//! line-oriented `$begin '...'`/`$end '...'` format used to persist
//! design trees, preview metadata and material libraries.
//!
//! **Note:** the format is read-only here; writing it back is not supported.
pub mod prj;

// Re-export the main types for convenience
pub use prj::{
    error::{PrjError, Result},
    load_entire_file, load_keyword,
    value::{Map, Value},
    PrjReader,
};

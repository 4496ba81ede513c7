//! I/O utilities for strip-ifdef.
//!
//! File reading with memory mapping support for large sources, and plain
//! writing for in-place rewrites.

pub mod reader;

pub use reader::{FileReader, read_file, write_file};

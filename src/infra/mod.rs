//! File I/O for vault documents.

mod fs;

pub use fs::{FsError, read_document, scan_vault, write_document};

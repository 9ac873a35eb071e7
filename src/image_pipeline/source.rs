//! Image acquisition module
//!
//! This module provides the sources an image can be grabbed from: an encoded
//! file, an in-memory buffer, or the system clipboard.

mod reader;
mod file_source;
mod clipboard_source;

pub use reader::ImageSource;
pub use file_source::{FileSource, MemorySource};
pub use clipboard_source::ClipboardSource;

//! File I/O for seekable documents.
//!
//! This module loads JSON and YAML documents from disk or stdin, and renders
//! seek results back out as YAML or JSON.

pub mod loader;
pub mod writer;

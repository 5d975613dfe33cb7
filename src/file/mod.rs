//! File I/O for JSON documents.
//!
//! This module loads JSON documents from disk or stdin into memory before
//! parsing. The parser itself never performs I/O; it receives a fully
//! materialized buffer.

pub mod loader;

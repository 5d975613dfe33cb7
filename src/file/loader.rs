//! JSON file loading functionality.
//!
//! This module provides functions to load JSON documents from files or
//! stdin, parsing them into [`JsonTree`] structures. Gzipped files are
//! decompressed transparently, detected by the `.gz` extension on disk and
//! by magic bytes on stdin.

use crate::document::parser::parse_json;
use crate::document::tree::JsonTree;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a JSON file from the filesystem.
///
/// The whole file is read into memory first, then handed to the parser.
/// Files ending in `.gz` are gunzipped before parsing.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read (doesn't exist, permission denied, etc.)
/// - The file is gzipped but corrupted
/// - The contents are not valid JSON
///
/// # Example
///
/// ```no_run
/// use jsonpick::file::loader::load_json_file;
///
/// let tree = load_json_file("config.json").unwrap();
/// assert!(tree.root().is_object());
/// ```
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<JsonTree> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read {}", path_ref.display()))?
    };

    parse_json(&content).context("Failed to parse JSON")
}

/// Loads and parses JSON from standard input.
///
/// Reads stdin to EOF before parsing. Gzip-compressed input is detected by
/// the magic bytes `0x1f 0x8b` and decompressed first.
///
/// # Errors
///
/// Returns an error if reading stdin fails, the input is not valid UTF-8,
/// or the contents are not valid JSON.
pub fn load_json_from_stdin() -> Result<JsonTree> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    parse_json(&content).context("Failed to parse JSON from stdin")
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}

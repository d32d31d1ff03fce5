//! Document loading functionality.
//!
//! This module loads JSON or YAML documents from files or stdin into a
//! `Document` ready to be seeked. Gzip-compressed input is decompressed
//! transparently.

use crate::document::Document;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// The syntax a document is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    /// Unknown extension: JSON is tried first, then YAML.
    Detect,
}

/// Loads and parses a document from the filesystem.
///
/// The format is chosen from the file name: `.json` is JSON, `.yaml` and
/// `.yml` are YAML, anything else is detected. A trailing `.gz` means the
/// file is gzip-compressed and is ignored when choosing the format.
///
/// # Examples
///
/// ```no_run
/// use datadig::file::loader::load_document;
///
/// let document = load_document("config.yaml.gz").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents do not parse in the chosen format
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
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
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    log::debug!(
        "loaded {} bytes from {}",
        content.len(),
        path_ref.display()
    );

    parse_document(&content, determine_format(path_ref))
        .with_context(|| format!("Failed to parse {}", path_ref.display()))
}

/// Loads and parses a document from standard input.
///
/// Gzip input is recognized by its magic bytes. The format is detected:
/// JSON first, then YAML.
pub fn load_document_from_stdin() -> Result<Document> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    // Gzip magic bytes (0x1f 0x8b)
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    parse_document(&content, SourceFormat::Detect).context("Failed to parse document from stdin")
}

/// Parses `content` in the given format.
///
/// With `SourceFormat::Detect`, content that is valid JSON becomes a
/// `Document::Json`; otherwise it is parsed as YAML.
pub fn parse_document(content: &str, format: SourceFormat) -> Result<Document> {
    match format {
        SourceFormat::Json => {
            let value = serde_json::from_str(content).context("Invalid JSON")?;
            Ok(Document::Json(value))
        }
        SourceFormat::Yaml => {
            let value = serde_yaml::from_str(content).context("Invalid YAML")?;
            Ok(Document::Yaml(value))
        }
        SourceFormat::Detect => match serde_json::from_str(content) {
            Ok(value) => Ok(Document::Json(value)),
            Err(err) => {
                log::debug!("input is not JSON ({}), trying YAML", err);
                let value = serde_yaml::from_str(content)
                    .context("Input is neither valid JSON nor valid YAML")?;
                Ok(Document::Yaml(value))
            }
        },
    }
}

/// Determines the document format from the file name, ignoring a `.gz` suffix.
///
/// Examples:
/// - `data.json` → Json
/// - `data.yml.gz` → Yaml
/// - `data.txt` → Detect
fn determine_format<P: AsRef<Path>>(path: P) -> SourceFormat {
    let path_str = path.as_ref().to_string_lossy().to_lowercase();

    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

    if base.ends_with(".json") {
        SourceFormat::Json
    } else if base.ends_with(".yaml") || base.ends_with(".yml") {
        SourceFormat::Yaml
    } else {
        SourceFormat::Detect
    }
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

//! Content-type sniffing over the leading bytes of a file.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use content_inspector::{inspect, ContentType};

use crate::error::{ConvertError, ConvertResult};

/// Number of leading bytes sampled for classification.
pub const SNIFF_LEN: usize = 512;

/// Sample the first bytes of an open file, classify them, and rewind the
/// handle to the start.
pub fn classify(file: &mut File, path: &Path) -> ConvertResult<ContentType> {
    let mut sample = [0u8; SNIFF_LEN];
    let read = file.read(&mut sample).map_err(|source| ConvertError::Sniff {
        path: path.to_path_buf(),
        source,
    })?;
    let kind = inspect(&sample[..read]);
    file.seek(SeekFrom::Start(0))
        .map_err(|source| ConvertError::Seek {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(kind)
}

/// Short label for a sniffed content type, used in skip notices.
pub fn describe(kind: ContentType) -> &'static str {
    match kind {
        ContentType::BINARY => "binary",
        ContentType::UTF_8 => "utf-8",
        ContentType::UTF_8_BOM => "utf-8 with bom",
        ContentType::UTF_16LE => "utf-16le",
        ContentType::UTF_16BE => "utf-16be",
        ContentType::UTF_32LE => "utf-32le",
        ContentType::UTF_32BE => "utf-32be",
    }
}

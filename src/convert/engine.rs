//! The per-file converter: scan for CRLF endings, optionally rewrite.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use content_inspector::ContentType;
use tempfile::NamedTempFile;

use crate::cancel::CancelToken;
use crate::convert::config::{ConvertConfig, ScanMode};
use crate::convert::sniff;
use crate::error::{ConvertError, ConvertResult};
use crate::scan::{LineScanner, CRLF, LF};

/// Per-file result of a conversion pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// No CRLF-terminated line; the file was left untouched.
    Clean,
    /// Contains CRLF endings; reported only (write disabled).
    Found,
    /// Contained CRLF endings and was rewritten in place.
    Converted,
    /// Classified non-text; skipped without scanning.
    NonText(ContentType),
}

/// Converts one file at a time according to its configuration.
pub struct Converter {
    config: ConvertConfig,
    cancel: CancelToken,
}

impl Converter {
    pub fn new(config: ConvertConfig, cancel: CancelToken) -> Self {
        Self { config, cancel }
    }

    /// Process one file.
    ///
    /// Report mode stops reading at the first CRLF-terminated line.
    /// Rewrite mode stages a full converted copy in a scratch file and
    /// replaces the original only when a CRLF ending was actually found;
    /// the scratch file is removed on every path, success or failure.
    pub fn process(&self, path: &Path) -> ConvertResult<Outcome> {
        if self.cancel.is_canceled() {
            return Err(ConvertError::Canceled);
        }

        let mut file = File::open(path).map_err(|source| ConvertError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let kind = sniff::classify(&mut file, path)?;
        if kind == ContentType::BINARY {
            return Ok(Outcome::NonText(kind));
        }

        match self.config.mode {
            ScanMode::Report => {
                let mut scanner = LineScanner::new(file);
                let found = self.scan(path, &mut scanner, None::<&mut io::Sink>)?;
                Ok(if found { Outcome::Found } else { Outcome::Clean })
            }
            ScanMode::Rewrite => {
                let mut scratch =
                    NamedTempFile::new().map_err(|source| ConvertError::Scratch { source })?;
                let mut scanner = LineScanner::new(file);
                let found = self.scan(path, &mut scanner, Some(&mut scratch))?;
                if !found {
                    return Ok(Outcome::Clean);
                }
                // Close the original before truncating it.
                drop(scanner);
                self.replace_original(path, scratch)?;
                Ok(Outcome::Converted)
            }
        }
    }

    /// Single scan routine for both modes.
    ///
    /// With a sink, every token is written through with CRLF endings
    /// rewritten to LF, and the scan runs to completion so the sink holds
    /// a byte-exact converted copy. Without one, the scan stops pulling
    /// tokens as soon as the per-file answer is known.
    fn scan<R: Read, W: Write>(
        &self,
        path: &Path,
        scanner: &mut LineScanner<R>,
        mut sink: Option<&mut W>,
    ) -> ConvertResult<bool> {
        let mut found = false;
        loop {
            if self.cancel.is_canceled() {
                return Err(ConvertError::Canceled);
            }
            let line = match scanner.next_line().map_err(|source| ConvertError::Read {
                path: path.to_path_buf(),
                source,
            })? {
                Some(line) => line,
                None => break,
            };
            let crlf = line.ends_with(CRLF);
            found |= crlf;
            match sink.as_mut() {
                Some(out) => {
                    let written = if crlf {
                        out.write_all(&line[..line.len() - 2])
                            .and_then(|()| out.write_all(&[LF]))
                    } else {
                        out.write_all(line)
                    };
                    written.map_err(|source| ConvertError::ScratchWrite { source })?;
                }
                None => {
                    if found {
                        break;
                    }
                }
            }
        }
        Ok(found)
    }

    /// Truncate-then-fill replacement.
    ///
    /// The destination is recreated first and then filled from the synced
    /// scratch copy; a failure between those two steps leaves the original
    /// truncated (see DESIGN.md for the documented trade-off).
    fn replace_original(&self, path: &Path, mut scratch: NamedTempFile) -> ConvertResult<()> {
        let dest = File::create(path).map_err(|source| ConvertError::Recreate {
            path: path.to_path_buf(),
            source,
        })?;

        scratch
            .flush()
            .and_then(|()| scratch.as_file().sync_all())
            .map_err(|source| ConvertError::ScratchSync { source })?;

        let mut staged = scratch
            .reopen()
            .map_err(|source| ConvertError::Scratch { source })?;
        let mut writer = BufWriter::new(dest);
        io::copy(&mut staged, &mut writer).map_err(|source| ConvertError::Copy {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(|source| ConvertError::Flush {
            path: path.to_path_buf(),
            source,
        })?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|source| ConvertError::Flush {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(())
    }
}

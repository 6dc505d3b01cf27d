//! Configuration for a conversion run.

/// Whether a scan only reports CRLF endings or rewrites them in place.
///
/// The mode drives a single scan routine rather than two code paths:
/// report mode stops pulling tokens once the per-file answer is known,
/// rewrite mode always scans to completion so the scratch copy holds a
/// byte-exact converted image of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Detect and report; files are never modified.
    Report,
    /// Rewrite files that contain CRLF endings.
    Rewrite,
}

/// Conversion options, built once and passed down by reference.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub mode: ScanMode,
}

impl ConvertConfig {
    pub fn new(mode: ScanMode) -> Self {
        Self { mode }
    }

    pub fn from_write_flag(write: bool) -> Self {
        Self::new(if write {
            ScanMode::Rewrite
        } else {
            ScanMode::Report
        })
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(ScanMode::Report)
    }
}

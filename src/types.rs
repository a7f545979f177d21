use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single file selected for the dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpedFile {
    /// Base name of the file.
    pub name: String,
    /// Path as printed in the block header: relative to the scanned root,
    /// or absolute when absolute paths were requested.
    pub path: PathBuf,
    /// The content of the file, or the reason it was left out.
    pub text: FileText,
}

/// Result of reading one file permissively.
///
/// Decoding itself never fails: invalid UTF-8 sequences are replaced. A file
/// only ends up as [`FileText::Skipped`] when a guard fires first (binary
/// sniffing or the size limit) or the bytes cannot be read at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FileText {
    Text(String),
    Skipped(SkipReason),
}

/// Why a file's content was replaced with a placeholder.
///
/// Rendered with `Display` as the bracketed block body, e.g.
/// `[Unrecognized encoding, content omitted]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SkipReason {
    /// Binary sniffing rejected the content.
    Binary,
    /// The file exceeded the configured size limit. Carries the actual size
    /// in bytes.
    TooLarge(u64),
    /// The file could not be read at all.
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Binary => write!(f, "[Unrecognized encoding, content omitted]"),
            SkipReason::TooLarge(size) => {
                write!(f, "[File too large ({size} bytes), content omitted]")
            }
            SkipReason::Unreadable(err) => {
                write!(f, "[Unreadable file, content omitted: {err}]")
            }
        }
    }
}

/// Summary of one completed dump run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpReport {
    /// Where the dump was written.
    pub output: PathBuf,
    /// Number of blocks written, placeholder blocks included.
    pub files: usize,
    /// How many of those blocks are placeholders.
    pub skipped: usize,
}

impl DumpReport {
    pub(crate) fn new(output: &Path) -> Self {
        Self {
            output: output.to_path_buf(),
            files: 0,
            skipped: 0,
        }
    }

    pub(crate) fn record(&mut self, file: &DumpedFile) {
        self.files += 1;
        if matches!(file.text, FileText::Skipped(_)) {
            self.skipped += 1;
        }
    }
}

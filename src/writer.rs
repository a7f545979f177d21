//! Sequential writer for the annotated dump format.
//!
//! Each selected file becomes one block: a blank-line pair, a header naming
//! the file and its path, a rule line, a blank line, then the raw content.
//! The blank-line pair doubles as the separator between consecutive blocks.

use crate::types::{DumpedFile, FileText};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Rule line closing each block header.
const HEADER_RULE: &str = "==============================================";

/// Writes dump blocks to an output stream, in the order they are given.
pub struct DumpWriter<W: Write> {
    out: W,
    comment_prefix: String,
}

impl DumpWriter<BufWriter<File>> {
    /// Creates or truncates the dump file at `path`.
    pub fn create(path: impl AsRef<Path>, comment_prefix: &str) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), comment_prefix))
    }
}

impl<W: Write> DumpWriter<W> {
    pub fn new(out: W, comment_prefix: &str) -> Self {
        Self {
            out,
            comment_prefix: comment_prefix.to_string(),
        }
    }

    /// Writes one header-plus-content block.
    ///
    /// Content is written verbatim, with no trailing newline added. Skipped
    /// files get their bracketed placeholder as the block body instead.
    pub fn write_entry(&mut self, file: &DumpedFile) -> io::Result<()> {
        self.out.write_all(b"\n\n")?;
        writeln!(self.out, "{} === Name: {}", self.comment_prefix, file.name)?;
        writeln!(
            self.out,
            "{} === Path: {}",
            self.comment_prefix,
            file.path.display()
        )?;
        writeln!(self.out, "{} {}", self.comment_prefix, HEADER_RULE)?;
        writeln!(self.out)?;
        match &file.text {
            FileText::Text(body) => self.out.write_all(body.as_bytes()),
            FileText::Skipped(reason) => write!(self.out, "{reason}"),
        }
    }

    /// Flushes buffered output. Call once after the last entry.
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}

//! # srcdump
//!
//! `srcdump` walks a project directory, selects files whose names end in one
//! of the allow-listed extensions, and concatenates their contents into a
//! single annotated text file. Each block opens with a small header naming
//! the file and its path, so the dump stays greppable.
//!
//! Directories named in the skip set (`node_modules`, `.git`, and friends
//! under the default profile) are pruned wherever they appear in the tree.
//! Files are visited in byte-lexicographic path order, so two runs over the
//! same tree produce byte-identical dumps.
//!
//! Content is decoded permissively: invalid UTF-8 is replaced rather than
//! failing the run. Files that trip the binary guard or cannot be read at
//! all are recorded inline as placeholder blocks, and an optional size limit
//! turns oversized files into placeholders too. Only a missing root aborts a
//! run before any output is written.
//!
//! # Features
//!
//! - `streaming`: Enables [`DumpStream`], an iterator yielding dump entries
//!   one by one without writing a file.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use srcdump::{srcdump, DumpBuilder, DumpProfile};
//!
//! let options = DumpBuilder::new("./my-app")
//!     .profile(DumpProfile::Extended)
//!     .output("my-app-dump.txt")
//!     .build();
//!
//! let report = srcdump(options).expect("dump failed");
//! println!(
//!     "{} files written to {} ({} skipped)",
//!     report.files,
//!     report.output.display(),
//!     report.skipped
//! );
//! ```

mod engine;
mod error;
mod filter;
mod options;
mod types;
mod writer;

#[cfg(feature = "streaming")]
pub use engine::DumpStream;
pub use engine::srcdump;
pub use error::DumpError;
pub use filter::FileFilter;
pub use options::{BinaryDetection, DumpBuilder, DumpOptions, DumpProfile};
pub use types::{DumpReport, DumpedFile, FileText, SkipReason};
pub use writer::DumpWriter;

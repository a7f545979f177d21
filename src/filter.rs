//! Extension allow-list and directory skip-set checks.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Decides which files belong in a dump.
///
/// A file is accepted when its name ends in one of the allow-listed
/// extensions. Matching is case sensitive and anchored at the dot, so `.js`
/// accepts `app.js` and `vendor.min.js` but rejects `app.jsx2` and `APP.JS`.
///
/// Skip matching compares whole path segments, never substrings: a skip
/// entry `build` excludes anything below a directory named exactly `build`,
/// while a sibling named `my-build-tool` stays in.
#[derive(Debug, Clone)]
pub struct FileFilter {
    extensions: Vec<String>,
    skip_dirs: HashSet<OsString>,
}

impl FileFilter {
    pub fn new(extensions: &[String], skip_dirs: &[String]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            skip_dirs: skip_dirs.iter().map(OsString::from).collect(),
        }
    }

    /// True when the file name carries an allow-listed extension.
    ///
    /// Names without a dot never match. Matching is on the name's suffix,
    /// which also covers bare dotfiles such as `.env`.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(OsStr::to_str) else {
            return false;
        };
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// True when `segment` names a skipped directory.
    pub fn excludes_segment(&self, segment: &OsStr) -> bool {
        self.skip_dirs.contains(segment)
    }

    /// The full selection contract: allow-listed extension and no skipped
    /// segment anywhere in the path.
    pub fn matches(&self, path: &Path) -> bool {
        self.accepts(path)
            && !path
                .components()
                .any(|c| self.excludes_segment(c.as_os_str()))
    }
}

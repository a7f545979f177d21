use crate::error::DumpError;
use crate::filter::FileFilter;
use crate::options::{BinaryDetection, DumpOptions};
use crate::types::{DumpReport, DumpedFile, FileText, SkipReason};
use crate::writer::DumpWriter;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

// Bytes inspected by the binary guard.
const SNIFF_LEN: usize = 4096;

struct Walker {
    inner: ignore::Walk,
}

impl Walker {
    fn new(options: &DumpOptions, filter: FileFilter) -> Result<Self, DumpError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .git_ignore(options.respect_gitignore)
            .git_global(false)
            .git_exclude(false)
            .ignore(false)
            .parents(false)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .sort_by_file_path(|a, b| a.cmp(b));
        let matcher = if options.exclude_patterns.is_empty() {
            None
        } else {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.exclude_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    DumpError::Pattern(format!("invalid glob '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            Some(glob_builder.build().map_err(|e| {
                DumpError::Pattern(format!("failed to build glob set: {}", e))
            })?)
        };
        // The root itself is exempt from the skip set; only segments below
        // it are candidates.
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            if filter.excludes_segment(entry.file_name()) {
                return false;
            }
            match &matcher {
                Some(m) => !m.is_match(entry.path()),
                None => true,
            }
        });
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn into_files(self) -> impl Iterator<Item = PathBuf> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => {
                if entry.depth() > 0 && entry.file_type().is_some_and(|t| t.is_file()) {
                    Some(entry.into_path())
                } else {
                    None
                }
            }
            Err(_err) => {
                #[cfg(feature = "logging")]
                tracing::debug!("skipping unreadable walk entry: {}", _err);
                None
            }
        })
    }
}

fn read_file_text(
    path: &Path,
    binary_detection: BinaryDetection,
    size_limit: Option<u64>,
) -> FileText {
    if let Some(limit) = size_limit {
        match fs::metadata(path) {
            Ok(meta) if meta.len() > limit => {
                #[cfg(feature = "logging")]
                tracing::debug!(
                    "file too large ({} > {}), writing placeholder: {}",
                    meta.len(),
                    limit,
                    path.display()
                );
                return FileText::Skipped(SkipReason::TooLarge(meta.len()));
            }
            Ok(_) => {}
            Err(e) => return FileText::Skipped(SkipReason::Unreadable(e.to_string())),
        }
    }
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("unreadable file {}: {}", path.display(), e);
            return FileText::Skipped(SkipReason::Unreadable(e.to_string()));
        }
    };
    let sniff = &bytes[..bytes.len().min(SNIFF_LEN)];
    let is_binary = match binary_detection {
        BinaryDetection::Simple => sniff.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(sniff).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        #[cfg(feature = "logging")]
        tracing::debug!("binary file detected: {}", path.display());
        return FileText::Skipped(SkipReason::Binary);
    }
    match String::from_utf8(bytes) {
        Ok(text) => FileText::Text(text),
        Err(e) => FileText::Text(String::from_utf8_lossy(&e.into_bytes()).into_owned()),
    }
}

fn load_entry(path: &Path, options: &DumpOptions) -> DumpedFile {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let display_path = if options.absolute_paths {
        path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
    } else {
        path.strip_prefix(&options.root).unwrap_or(path).to_path_buf()
    };
    let text = read_file_text(path, options.binary_detection, options.file_size_limit);
    DumpedFile {
        name,
        path: display_path,
        text,
    }
}

/// Walks `options.root` and writes one annotated block per selected file to
/// `options.output`, in byte-lexicographic path order.
///
/// The output file is created (or truncated) only after the root is known to
/// exist. Per-file read and decode problems become placeholder blocks; only
/// a missing root, an invalid exclude pattern, or an output write failure
/// abort the run.
pub fn srcdump(options: DumpOptions) -> Result<DumpReport, DumpError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "dumping {} into {}",
        options.root.display(),
        options.output.display()
    );
    if !options.root.exists() {
        return Err(DumpError::RootNotFound(options.root));
    }
    let filter = FileFilter::new(&options.extensions, &options.skip_dirs);
    let walker = Walker::new(&options, filter.clone())?;
    let mut writer = DumpWriter::create(&options.output, &options.comment_prefix)
        .map_err(|e| DumpError::io(&options.output, e))?;
    // Resolved after creation so the dump never swallows its own output file.
    let output_canon = options.output.canonicalize().ok();
    let mut report = DumpReport::new(&options.output);
    for path in walker.into_files() {
        if !filter.accepts(&path) {
            continue;
        }
        if let Some(out) = &output_canon {
            if path.canonicalize().is_ok_and(|p| p == *out) {
                continue;
            }
        }
        let entry = load_entry(&path, &options);
        writer
            .write_entry(&entry)
            .map_err(|e| DumpError::io(&options.output, e))?;
        report.record(&entry);
    }
    writer
        .finish()
        .map_err(|e| DumpError::io(&options.output, e))?;
    Ok(report)
}

#[cfg(feature = "streaming")]
pub struct DumpStream {
    paths: Box<dyn Iterator<Item = PathBuf> + Send>,
    options: DumpOptions,
}
#[cfg(feature = "streaming")]
impl DumpStream {
    /// Lazily yields the entries a dump of `options.root` would contain,
    /// without writing anything.
    pub fn new(options: DumpOptions) -> Result<Self, DumpError> {
        if !options.root.exists() {
            return Err(DumpError::RootNotFound(options.root));
        }
        let filter = FileFilter::new(&options.extensions, &options.skip_dirs);
        let walker = Walker::new(&options, filter.clone())?;
        let paths = Box::new(walker.into_files().filter(move |p| filter.accepts(p)));
        Ok(Self { paths, options })
    }
}
#[cfg(feature = "streaming")]
impl Iterator for DumpStream {
    type Item = DumpedFile;
    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        Some(load_entry(&path, &self.options))
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DumpProfile {
    React,
    Extended,
}
impl DumpProfile {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            DumpProfile::React => &[".js", ".jsx", ".ts", ".tsx", ".css", ".html"],
            DumpProfile::Extended => &[
                ".js", ".jsx", ".ts", ".tsx", ".css", ".scss", ".json", ".html", ".env",
            ],
        }
    }
    pub fn skip_dirs(self) -> &'static [&'static str] {
        match self {
            DumpProfile::React => &[
                "node_modules",
                ".git",
                "build",
                "dist",
                ".next",
                ".parcel-cache",
            ],
            // The extended list deliberately skips nothing; callers narrow it
            // with their own skip set when needed.
            DumpProfile::Extended => &[],
        }
    }
    pub fn default_output_name(self) -> &'static str {
        match self {
            DumpProfile::React => "react_code_dump.txt",
            DumpProfile::Extended => "project_dump.txt",
        }
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub extensions: Vec<String>,
    pub skip_dirs: Vec<String>,
    pub comment_prefix: String,
    pub absolute_paths: bool,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub exclude_patterns: Vec<String>,
    pub file_size_limit: Option<u64>,
    pub binary_detection: BinaryDetection,
}
impl Default for DumpOptions {
    fn default() -> Self {
        let profile = DumpProfile::React;
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(profile.default_output_name()),
            extensions: owned(profile.extensions()),
            skip_dirs: owned(profile.skip_dirs()),
            comment_prefix: "#".to_string(),
            absolute_paths: false,
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
            max_depth: None,
            exclude_patterns: Vec::new(),
            file_size_limit: None,
            binary_detection: BinaryDetection::Simple,
        }
    }
}
fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
#[derive(Debug, Default)]
pub struct DumpBuilder {
    options: DumpOptions,
}
impl DumpBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DumpOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn profile(mut self, profile: DumpProfile) -> Self {
        self.options.extensions = owned(profile.extensions());
        self.options.skip_dirs = owned(profile.skip_dirs());
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.options.extensions = extensions;
        self
    }
    pub fn skip_dirs(mut self, dirs: Vec<String>) -> Self {
        self.options.skip_dirs = dirs;
        self
    }
    pub fn comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.comment_prefix = prefix.into();
        self
    }
    pub fn absolute_paths(mut self, yes: bool) -> Self {
        self.options.absolute_paths = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn file_size_limit(mut self, limit: Option<u64>) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> DumpOptions {
        self.options
    }
}

//! Command-line interface for srcdump.
//!
//! Walks a project tree and concatenates the selected sources into a single
//! annotated text file, then prints a short confirmation line or, with
//! `--json`, a machine-readable run report.

use clap::Parser;
use srcdump::{srcdump, BinaryDetection, DumpBuilder, DumpOptions, DumpProfile};
use std::env;
use std::path::{Path, PathBuf};
use std::process::exit;

/// Concatenate a project's source files into one annotated dump
#[derive(Parser)]
#[command(name = "srcdump", version, about, long_about = None)]
struct Cli {
    /// Project root to scan
    root: PathBuf,

    /// Output file (defaults to a profile-named file next to the executable)
    output: Option<PathBuf>,

    /// Extension and skip-set profile
    #[arg(long, default_value = "react", value_parser = parse_profile)]
    profile: DumpProfile,

    /// Print absolute paths in block headers
    #[arg(long)]
    absolute: bool,

    /// Override the profile's extension allow-list (repeatable, dot optional)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Override the profile's skipped directory names (repeatable)
    #[arg(short = 's', long = "skip-dir", value_name = "NAME")]
    skip_dirs: Vec<String>,

    /// Exclude paths matching a glob (repeatable)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB")]
    ignore_patterns: Vec<String>,

    /// Comment prefix used in block headers
    #[arg(long, default_value = "#")]
    comment_prefix: String,

    /// File size limit in bytes (larger files become placeholder blocks)
    #[arg(long)]
    file_size_limit: Option<u64>,

    /// Binary detection strategy
    #[arg(long, default_value = "simple", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Honor .gitignore files under the root
    #[arg(long)]
    gitignore: bool,

    /// Leave out hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Print the run report as JSON instead of the confirmation line
    #[arg(long)]
    json: bool,
}

/// Parse string into DumpProfile enum.
fn parse_profile(s: &str) -> Result<DumpProfile, String> {
    match s {
        "react" => Ok(DumpProfile::React),
        "extended" => Ok(DumpProfile::Extended),
        _ => Err(format!("invalid profile: {}", s)),
    }
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

/// Default dump location: a profile-named file in the executable's
/// directory, falling back to the current directory.
fn default_output_path(profile: DumpProfile) -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(profile.default_output_name())
}

fn normalize_extension(ext: String) -> String {
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

impl Cli {
    fn into_options(self) -> (DumpOptions, bool) {
        let profile = self.profile;
        let mut builder = DumpBuilder::new(self.root)
            .profile(profile)
            .absolute_paths(self.absolute)
            .comment_prefix(self.comment_prefix)
            .respect_gitignore(self.gitignore)
            .include_hidden(!self.no_hidden)
            .follow_links(self.follow_links)
            .exclude_patterns(self.ignore_patterns)
            .file_size_limit(self.file_size_limit)
            .binary_detection(self.binary_detection);

        if !self.extensions.is_empty() {
            builder = builder.extensions(
                self.extensions
                    .into_iter()
                    .map(normalize_extension)
                    .collect(),
            );
        }
        if !self.skip_dirs.is_empty() {
            builder = builder.skip_dirs(self.skip_dirs);
        }
        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        let output = self
            .output
            .unwrap_or_else(|| default_output_path(profile));
        (builder.output(output).build(), self.json)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, json) = cli.into_options();

    match srcdump(options) {
        Ok(report) => {
            if json {
                let out = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
                    eprintln!("JSON serialization error: {}", e);
                    exit(1);
                });
                println!("{}", out);
            } else {
                println!(
                    "Dump written to {} ({} files, {} skipped)",
                    report.output.display(),
                    report.files,
                    report.skipped
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

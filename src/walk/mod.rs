//! Directory traversal and file-name pattern matching.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::InvalidPattern;

/// Directories never descended into, even under recursion: version
/// control, editor state, and dependency or build managers.
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".idea",
    ".vscode",
    "node_modules",
    "target",
    "vendor",
];

/// Compiled set of the glob patterns supplied on the command line.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<glob::Pattern>,
}

impl PatternSet {
    /// Compile every pattern, collecting all failures so the user sees
    /// each bad pattern at once.
    pub fn compile(raw: &[String]) -> Result<Self, Vec<InvalidPattern>> {
        let mut patterns = Vec::with_capacity(raw.len());
        let mut errors = Vec::new();
        for source in raw {
            match glob::Pattern::new(source) {
                Ok(pattern) => patterns.push(pattern),
                Err(err) => errors.push(InvalidPattern {
                    pattern: source.clone(),
                    source: err,
                }),
            }
        }
        if errors.is_empty() {
            Ok(Self { patterns })
        } else {
            Err(errors)
        }
    }

    /// A file is selected when any pattern matches its relative path or
    /// its bare name.
    pub fn matches(&self, rel_path: &Path, file_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_path(rel_path) || p.matches(file_name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIP_DIRS.contains(&name))
            .unwrap_or(false)
}

/// Regular files under `root` matching the pattern set, in traversal
/// order. Yielded paths are relative to `root`; callers resolve them
/// against it. Traversal errors are yielded in place and do not stop the
/// walk.
pub fn candidate_files<'a>(
    root: &'a Path,
    recursive: bool,
    patterns: &'a PatternSet,
) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> + 'a {
    let depth = if recursive { usize::MAX } else { 1 };
    WalkDir::new(root)
        .max_depth(depth)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err)),
            };
            if !entry.file_type().is_file() {
                return None;
            }
            let rel = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
            let name = entry.file_name().to_string_lossy();
            if patterns.matches(rel, &name) {
                Some(Ok(rel.to_path_buf()))
            } else {
                None
            }
        })
}

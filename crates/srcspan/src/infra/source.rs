//! Line-oriented access to source files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Read access to source lines by 1-based line number.
///
/// Implementations must be stable across calls: extraction assumes the same
/// line number always yields the same text for the lifetime of the source.
pub trait LineSource {
    /// Full text of the given line without its terminator, or `None` when
    /// the source has no such line.
    fn line(&self, number: usize) -> Option<&str>;
}

/// In-memory source file split into lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    lines: Vec<String>,
}

impl SourceBuffer {
    /// Split the provided text into lines. CRLF terminators are normalized,
    /// so lookups behave identically for LF and CRLF sources.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Load a file from disk and split it into lines.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read source file {}", path.display()))?;
        Ok(Self::from_text(&text))
    }

    /// Number of lines in the buffer.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineSource for SourceBuffer {
    fn line(&self, number: usize) -> Option<&str> {
        let index = number.checked_sub(1)?;
        self.lines.get(index).map(String::as_str)
    }
}

/// Lazily loaded per-file source buffers.
///
/// A report generator resolves many node spans against the same file; the
/// cache reads each file once and serves every lookup from memory.
#[derive(Debug, Default)]
pub struct SourceCache {
    files: HashMap<PathBuf, SourceBuffer>,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer for the given path, loading it on first access.
    pub fn buffer(&mut self, path: &Path) -> Result<&SourceBuffer> {
        if !self.files.contains_key(path) {
            let buffer = SourceBuffer::from_path(path)?;
            self.files.insert(path.to_path_buf(), buffer);
        }
        Ok(&self.files[path])
    }

    /// Drop the cached buffer for a path, forcing a reload on next access.
    pub fn invalidate(&mut self, path: &Path) {
        self.files.remove(path);
    }
}

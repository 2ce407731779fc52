//! Classify files on disk as text or binary

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::detect::{classify_bytes, Detection};

/// Configuration for directory scans
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Follow symbolic links while walking
    pub follow_links: bool,
    /// Maximum depth below the root (`None` for unlimited)
    pub max_depth: Option<usize>,
    /// Descend into and report entries whose name starts with `.`
    pub include_hidden: bool,
}

/// One classified file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub path: PathBuf,
    /// Size in bytes
    pub len: u64,
    pub detection: Detection,
}

impl ScanEntry {
    pub fn is_binary(&self) -> bool {
        self.detection.is_binary()
    }
}

/// Error type for scans
#[derive(Debug)]
pub enum ScanError {
    /// Directory traversal failed
    Walk { path: PathBuf, message: String },
    /// A file could not be read
    Read { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Walk { path, message } => {
                write!(f, "Failed to walk {}: {}", path.display(), message)
            }
            ScanError::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Walk { .. } => None,
            ScanError::Read { source, .. } => Some(source),
        }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        ScanError::Walk {
            path: err.path().map(Path::to_path_buf).unwrap_or_default(),
            message: err.to_string(),
        }
    }
}

/// Read and classify a single file
pub fn classify_file(path: &Path) -> Result<ScanEntry, ScanError> {
    let data = fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let detection = classify_bytes(&data);
    trace!(path = %path.display(), len = data.len(), binary = detection.is_binary(), "classified");

    Ok(ScanEntry {
        path: path.to_path_buf(),
        len: data.len() as u64,
        detection,
    })
}

/// Classify every regular file under `root` (or `root` itself if it is a file).
///
/// Entries come back in walk order, sorted by file name within each directory.
pub fn scan_path(root: &Path, options: &ScanOptions) -> Result<Vec<ScanEntry>, ScanError> {
    let mut walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let include_hidden = options.include_hidden;
    let mut entries = Vec::new();

    for entry in walker
        .into_iter()
        .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        entries.push(classify_file(entry.path())?);
    }

    debug!(
        root = %root.display(),
        files = entries.len(),
        binary = entries.iter().filter(|e| e.is_binary()).count(),
        "scan complete"
    );
    Ok(entries)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

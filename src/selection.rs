use ignore::Walk;
use std::fs;
use std::path::{Path, PathBuf};

/// A locally selected file: display name, where to read it from, and its
/// size for the list view. Content is only read once the batch uploads it.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        Self {
            name,
            path: path.to_path_buf(),
            size,
        }
    }
}

/// The ordered set of files queued for the next batch.
///
/// Insertion order is preserved across repeated drops and picker runs, and
/// duplicates are allowed. Files are never filtered by type, size or content;
/// the remote store is the only judge.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    files: Vec<SelectedFile>,
}

impl FileSelection {
    /// Appends a dropped or picked path. Directories are expanded into their
    /// files with a gitignore-aware walk, in walk order.
    pub fn add_path(&mut self, path: &Path) {
        if path.is_dir() {
            for entry in Walk::new(path).flatten() {
                if entry.path().is_file() {
                    self.files.push(SelectedFile::from_path(entry.path()));
                }
            }
        } else {
            self.files.push(SelectedFile::from_path(path));
        }
    }

    /// Removes one entry; later entries shift down. Out-of-range indices are
    /// a no-op.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::BrowseConfig;
use crate::error::{Result, ViewerError};

/// The eligible images of one folder, in name order, plus the opened one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderListing {
    paths: Vec<PathBuf>,
    opened: usize,
}

impl FolderListing {
    /// List the siblings of `path` whose extension is eligible and locate `path` among them.
    ///
    /// Fails with `ImageNotInFolder` if `path` itself is not an eligible file
    /// of its folder.
    pub fn open(path: &Path, browse: &BrowseConfig) -> Result<Self> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ViewerError::NoParentDirectory(path.to_path_buf()))?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            Some(_) => PathBuf::from("."),
            None => return Err(ViewerError::NoParentDirectory(path.to_path_buf())),
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let entry_path = entry.path();
            if entry.file_type()?.is_file() && browse.matches(&entry_path) {
                paths.push(entry_path);
            }
        }
        paths.sort();

        let wanted = file_name.to_string_lossy();
        let opened = paths
            .iter()
            .position(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().eq_ignore_ascii_case(&wanted))
                    .unwrap_or(false)
            })
            .ok_or_else(|| ViewerError::ImageNotInFolder {
                path: path.to_path_buf(),
            })?;

        debug!(dir = %dir.display(), count = paths.len(), opened, "Folder listed");
        Ok(Self { paths, opened })
    }

    /// Build a listing from paths that are already known, e.g. in tests or
    /// from a front end with its own file enumeration.
    pub fn from_paths(paths: Vec<PathBuf>, opened: usize) -> Result<Self> {
        if opened >= paths.len() {
            return Err(ViewerError::ImageNotInFolder {
                path: paths.get(opened).cloned().unwrap_or_default(),
            });
        }
        Ok(Self { paths, opened })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Index of the path the listing was opened with.
    pub fn opened_index(&self) -> usize {
        self.opened
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }
}

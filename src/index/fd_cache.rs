use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::QuiverError;

/// A cache of open file descriptors, bounded by a coarse ceiling.
///
/// Lookups take the shared read lock. On a miss the factory runs outside
/// of any lock, and the result is inserted under the exclusive write
/// lock; when two threads race on the same path the first insertion wins
/// and the loser's descriptor is dropped. Crossing the ceiling drops
/// every cached descriptor at once.
pub struct FdCache {
    files: RwLock<HashMap<PathBuf, Arc<File>>>,
    max_open: usize,
}

impl FdCache {
    /// Creates a cache that keeps at most `max_open` descriptors around.
    pub fn new(max_open: usize) -> FdCache {
        FdCache {
            files: RwLock::new(HashMap::new()),
            max_open,
        }
    }

    /// Returns the cached descriptor for `path`, or opens one with
    /// `factory` and caches it.
    ///
    /// The factory runs at most once per call; its IO errors are
    /// surfaced with the offending path attached.
    pub fn compute_if_absent(
        &self,
        path: &Path,
        factory: impl FnOnce(&Path) -> io::Result<File>,
    ) -> crate::Result<Arc<File>> {
        {
            let files = self.files.read()?;
            if let Some(file) = files.get(path) {
                return Ok(Arc::clone(file));
            }
        }
        let file = Arc::new(
            factory(path)
                .map_err(|io_error| QuiverError::io_with_path(path.to_path_buf(), io_error))?,
        );
        let mut files = self.files.write()?;
        if let Some(raced) = files.get(path) {
            return Ok(Arc::clone(raced));
        }
        if files.len() > self.max_open {
            files.clear();
        }
        files.insert(path.to_path_buf(), Arc::clone(&file));
        Ok(file)
    }
}

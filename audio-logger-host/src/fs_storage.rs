use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use audio_logger_core::models::error::StorageError;
use audio_logger_core::traits::storage::{StorageBackend, StorageFile};

/// Storage backend rooted at a mount directory.
///
/// The recorder names paths absolute-style (`/recording_.../audio_1.wav`),
/// the way an embedded target addresses its storage medium; this backend
/// maps them under `root` instead.
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl StorageBackend for FsStorage {
    type File = FsFile;

    fn create_dir(&mut self, path: &str) -> Result<(), StorageError> {
        fs::create_dir_all(self.resolve(path))
            .map_err(|e| StorageError::CreateDir(format!("{path}: {e}")))
    }

    fn open(&mut self, path: &str) -> Result<FsFile, StorageError> {
        let resolved = self.resolve(path);
        if let Some(parent) = resolved.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::Open(format!("failed to create directory: {e}")))?;
        }
        let file = File::create(&resolved)
            .map_err(|e| StorageError::Open(format!("failed to create file: {e}")))?;
        Ok(FsFile { file })
    }
}

/// An open file on the filesystem.
pub struct FsFile {
    file: File,
}

impl StorageFile for FsFile {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        self.file
            .write_all(bytes)
            .map_err(|e| StorageError::Write(e.to_string()))
    }

    fn close(mut self) -> Result<(), StorageError> {
        self.file
            .flush()
            .map_err(|e| StorageError::Close(e.to_string()))
    }
}

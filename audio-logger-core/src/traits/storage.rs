use crate::models::error::StorageError;

/// An open file on the storage medium.
pub trait StorageFile {
    /// Persist `bytes` as one write call.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), StorageError>;

    /// Flush and close the file.
    fn close(self) -> Result<(), StorageError>
    where
        Self: Sized;
}

/// The storage medium collaborator.
///
/// Paths use the recorder's absolute-style naming (`/recording_.../audio_1.wav`);
/// a backend maps them onto its own mount point.
pub trait StorageBackend {
    type File: StorageFile;

    fn create_dir(&mut self, path: &str) -> Result<(), StorageError>;

    /// Open `path` for writing, truncating anything already there.
    fn open(&mut self, path: &str) -> Result<Self::File, StorageError>;
}

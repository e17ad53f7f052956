use thiserror::Error;

/// Fatal initialization failures.
///
/// This is the only error tier that escapes `SessionController::run`.
/// Everything else is handled where it occurs and the session keeps going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("acquisition init failed: {0}")]
    AcquisitionInit(String),
}

/// Errors surfaced by a sample source.
///
/// Transient variants are logged by the session controller, the affected
/// batch is skipped, and the recording loop continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AcquisitionError {
    #[error("read failed: {0}")]
    ReadFailed(String),

    #[error("stream stalled: no data within {waited_ms} ms")]
    Stalled { waited_ms: u64 },

    #[error("driver install failed: {0}")]
    DriverInstall(String),
}

/// Errors surfaced by the storage collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("mkdir failed: {0}")]
    CreateDir(String),

    #[error("open failed: {0}")]
    Open(String),

    #[error("write failed: {0}")]
    Write(String),

    #[error("close failed: {0}")]
    Close(String),
}

use serde::{Deserialize, Serialize};

/// How a single file cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// All required samples were written and the file closed cleanly.
    Completed,
    /// The file could not be opened; nothing was written and the
    /// session moved on, leaving a gap in the sequence.
    OpenFailed,
    /// A write or close failed mid-file; the partial file was abandoned.
    Aborted,
}

/// Outcome of one file cycle within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub index: u32,
    pub filename: String,
    pub samples_written: u64,
    /// SHA-256 of header + payload bytes, hex. Absent unless completed.
    pub checksum: Option<String>,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_completed(&self) -> bool {
        self.status == FileStatus::Completed
    }
}

/// Aggregate result of a whole session.
///
/// Serializable for the `session.json` manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub folder: String,
    /// RFC 3339 start time, present only when wall-clock time was available.
    pub started_at: Option<String>,
    pub files_planned: u32,
    pub files_completed: u32,
    pub files_failed: u32,
    pub files: Vec<FileOutcome>,
}

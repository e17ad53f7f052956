use std::sync::Arc;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::models::config::RecorderConfig;
use crate::models::error::{RecorderError, StorageError};
use crate::models::state::SessionState;
use crate::models::summary::{FileOutcome, FileStatus, SessionSummary};
use crate::processing::flush_buffer::FlushBuffer;
use crate::processing::wav::WavHeader;
use crate::session::naming;
use crate::traits::sample_source::SampleSource;
use crate::traits::session_delegate::SessionDelegate;
use crate::traits::storage::{StorageBackend, StorageFile};
use crate::traits::wall_clock::WallClock;

/// Samples requested per `next_batch` call. The polled backend returns
/// one regardless; the streaming backend drains up to this many.
const READ_CHUNK: usize = 512;

/// Orchestrates a full recording session.
///
/// Generic over the acquisition backend, storage medium, and time source.
/// One sequential thread of control: acquisition, buffering, and storage
/// writes happen in strict program order, one open file at a time.
///
/// Data flow per file:
/// ```text
/// [SampleSource] → [FlushBuffer] → [StorageFile]
///        ↑ header first: [WavHeader] ─┘
/// ```
///
/// Only initialization failures escape `run`; acquisition errors skip a
/// batch, and per-file storage failures skip that file and move on.
pub struct SessionController<Src, Sto, Clk> {
    config: RecorderConfig,
    source: Src,
    storage: Sto,
    clock: Clk,
    delegate: Option<Arc<dyn SessionDelegate>>,
    state: SessionState,
}

impl<Src, Sto, Clk> SessionController<Src, Sto, Clk>
where
    Src: SampleSource,
    Sto: StorageBackend,
    Clk: WallClock,
{
    pub fn new(
        config: RecorderConfig,
        source: Src,
        storage: Sto,
        clock: Clk,
    ) -> Result<Self, RecorderError> {
        config.validate().map_err(RecorderError::InvalidConfig)?;
        Ok(Self {
            config,
            source,
            storage,
            clock,
            delegate: None,
            state: SessionState::Idle,
        })
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn SessionDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run the session to completion.
    ///
    /// Blocks for the whole session duration. Returns the summary on any
    /// outcome short of an initialization failure.
    pub fn run(&mut self) -> Result<SessionSummary, RecorderError> {
        let file_count = self.config.file_count();
        let truncated = self.config.truncated_secs();
        if truncated != 0 {
            log::warn!(
                "total duration is not a whole number of files, dropping trailing {truncated}s"
            );
        }

        let epoch = self.clock.epoch_seconds();
        if epoch.is_none() {
            log::warn!("wall-clock time unavailable, using boot-relative session name");
        }
        let folder = naming::session_folder(epoch, self.clock.boot_millis());
        self.storage
            .create_dir(&folder)
            .map_err(|e| RecorderError::StorageUnavailable(e.to_string()))?;

        let started_at = epoch
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs as i64, 0))
            .map(|stamp| stamp.to_rfc3339());

        self.set_state(SessionState::SessionStarted { file_count });
        log::info!(
            "session started in {folder}: {file_count} files of {}s at {} Hz",
            self.config.file_duration_secs,
            self.config.sample_rate
        );

        let samples_required = self.config.samples_per_file();
        let mut files = Vec::with_capacity(file_count as usize);
        for index in 1..=file_count {
            let filename = naming::file_path(&folder, index);
            self.set_state(SessionState::FileRecording { index });
            if let Some(delegate) = &self.delegate {
                delegate.on_file_started(index, &filename);
            }

            let outcome = match self.storage.open(&filename) {
                Ok(file) => self.record_file(file, index, filename, samples_required),
                Err(e) => {
                    // Skip-and-continue: the session tolerates a gap in
                    // the file sequence.
                    log::error!("file {index}/{file_count}: open failed, skipping: {e}");
                    FileOutcome {
                        index,
                        filename,
                        samples_written: 0,
                        checksum: None,
                        status: FileStatus::OpenFailed,
                    }
                }
            };

            if outcome.is_completed() {
                log::info!(
                    "file {index}/{file_count} complete: {} samples",
                    outcome.samples_written
                );
            }
            self.set_state(SessionState::FileComplete { index });
            if let Some(delegate) = &self.delegate {
                delegate.on_file_finished(&outcome);
            }
            files.push(outcome);
        }

        let files_completed = files.iter().filter(|f| f.is_completed()).count() as u32;
        let summary = SessionSummary {
            id: uuid::Uuid::new_v4().to_string(),
            folder: folder.clone(),
            started_at,
            files_planned: file_count,
            files_completed,
            files_failed: file_count - files_completed,
            files,
        };

        if self.config.write_manifest {
            self.write_manifest(&folder, &summary);
        }

        self.set_state(SessionState::SessionComplete);
        log::info!(
            "session complete: {}/{} files, {} failed",
            summary.files_completed,
            summary.files_planned,
            summary.files_failed
        );
        if let Some(delegate) = &self.delegate {
            delegate.on_session_finished(&summary);
        }
        Ok(summary)
    }

    /// One file cycle: header, then pull/flush until the required sample
    /// count is reached, then the remainder and close.
    fn record_file(
        &mut self,
        mut file: Sto::File,
        index: u32,
        filename: String,
        samples_required: u64,
    ) -> FileOutcome {
        let header = WavHeader::build(
            self.config.sample_rate,
            self.config.bits_per_sample,
            self.config.channels,
            samples_required as u32,
        );
        let mut hasher = Sha256::new();

        let header_bytes = header.encode();
        if let Err(e) = file.write_all(&header_bytes) {
            log::error!("file {index}: header write failed, abandoning: {e}");
            return FileOutcome {
                index,
                filename,
                samples_written: 0,
                checksum: None,
                status: FileStatus::Aborted,
            };
        }
        hasher.update(header_bytes);

        let mut buffer = FlushBuffer::new(self.config.flush_capacity);
        let mut batch = [0i16; READ_CHUNK];
        let mut samples_written: u64 = 0;

        self.source.begin_file();
        while samples_written < samples_required {
            let want = usize::min(READ_CHUNK, (samples_required - samples_written) as usize);
            let n = match self.source.next_batch(&mut batch[..want]) {
                Ok(n) => n,
                Err(e) => {
                    log::warn!("file {index}: acquisition error, batch skipped: {e}");
                    continue;
                }
            };
            for &sample in &batch[..n] {
                buffer.push(sample);
                if buffer.is_full() {
                    if let Err(e) = Self::flush(&mut buffer, &mut file, &mut hasher) {
                        log::error!("file {index}: write failed, abandoning: {e}");
                        return FileOutcome {
                            index,
                            filename,
                            samples_written,
                            checksum: None,
                            status: FileStatus::Aborted,
                        };
                    }
                }
            }
            samples_written += n as u64;
        }

        if !buffer.is_empty() {
            if let Err(e) = Self::flush(&mut buffer, &mut file, &mut hasher) {
                log::error!("file {index}: final flush failed, abandoning: {e}");
                return FileOutcome {
                    index,
                    filename,
                    samples_written,
                    checksum: None,
                    status: FileStatus::Aborted,
                };
            }
        }

        match file.close() {
            Ok(()) => FileOutcome {
                index,
                filename,
                samples_written,
                checksum: Some(hex_encode(&hasher.finalize())),
                status: FileStatus::Completed,
            },
            Err(e) => {
                log::error!("file {index}: close failed: {e}");
                FileOutcome {
                    index,
                    filename,
                    samples_written,
                    checksum: None,
                    status: FileStatus::Aborted,
                }
            }
        }
    }

    fn flush(
        buffer: &mut FlushBuffer,
        file: &mut Sto::File,
        hasher: &mut Sha256,
    ) -> Result<(), StorageError> {
        let chunk = buffer.drain_bytes();
        hasher.update(&chunk);
        file.write_all(&chunk)
    }

    /// Best-effort: a manifest failure is logged, never fatal.
    fn write_manifest(&mut self, folder: &str, summary: &SessionSummary) {
        let json = match serde_json::to_vec_pretty(summary) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("manifest serialization failed: {e}");
                return;
            }
        };
        let path = format!("{folder}/session.json");
        let result = self.storage.open(&path).and_then(|mut file| {
            file.write_all(&json)?;
            file.close()
        });
        if let Err(e) = result {
            log::warn!("manifest write failed: {e}");
        }
    }

    fn set_state(&mut self, new_state: SessionState) {
        self.state = new_state;
        if let Some(delegate) = &self.delegate {
            delegate.on_state_changed(&self.state);
        }
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

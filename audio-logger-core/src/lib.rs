//! # audio-logger-core
//!
//! Platform-agnostic segmented audio recorder core.
//!
//! Continuously captures a signed 16-bit signal, frames it into standard
//! 44-byte-header WAV files, and rotates files across a long unattended
//! session. Hardware and host collaborators (ADC or DMA-fed stream input,
//! storage medium, wall clock) plug in through the `traits` interfaces;
//! the `audio-logger-host` crate provides host-side implementations.
//!
//! ## Architecture
//!
//! ```text
//! audio-logger-core (this crate)
//! ├── traits/       ← SampleSource, StorageBackend, WallClock, SessionDelegate
//! ├── models/       ← RecorderConfig, SessionState, error taxonomy, SessionSummary
//! ├── sources/      ← PolledSource + SampleScheduler, StreamingSource
//! ├── processing/   ← FlushBuffer, WAV header framing
//! └── session/      ← SessionController (rotation orchestrator), naming
//! ```
//!
//! Data flow per file: the controller builds and writes the WAV header,
//! then pulls sample batches from the source into the flush buffer,
//! draining it to storage one fixed-size chunk at a time until the file's
//! required sample count is reached.

pub mod models;
pub mod processing;
pub mod session;
pub mod sources;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::RecorderConfig;
pub use models::error::{AcquisitionError, RecorderError, StorageError};
pub use models::state::SessionState;
pub use models::summary::{FileOutcome, FileStatus, SessionSummary};
pub use processing::flush_buffer::FlushBuffer;
pub use processing::wav::{WavHeader, WAV_HEADER_SIZE};
pub use session::recorder::SessionController;
pub use sources::polled::{AdcInput, PolledSource};
pub use sources::scheduler::SampleScheduler;
pub use sources::streaming::{StreamInput, StreamingSource};
pub use traits::sample_source::SampleSource;
pub use traits::session_delegate::SessionDelegate;
pub use traits::storage::{StorageBackend, StorageFile};
pub use traits::wall_clock::WallClock;

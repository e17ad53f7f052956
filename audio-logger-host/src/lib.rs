//! # audio-logger-host
//!
//! Host-side backends for `audio-logger-core`.
//!
//! Provides:
//! - `FsStorage` — storage backend mapping the recorder's absolute-style
//!   paths under a mount directory
//! - `SystemClock` — wall clock over `SystemTime` plus a process-boot `Instant`
//! - `stream_queue` — queue-fed stream driver standing in for a DMA-backed
//!   hardware input
//! - `SynthAdc` — deterministic waveform ADC for soak tests and demos
//!
//! ## Usage
//! ```no_run
//! use std::time::Duration;
//!
//! use audio_logger_core::{RecorderConfig, SessionController, StreamingSource};
//! use audio_logger_host::{stream_queue, FsStorage, SystemClock};
//!
//! let (producer, driver) = stream_queue::install(8192);
//! // ... feed `producer` from the capture hardware ...
//! let source = StreamingSource::open(driver, Duration::from_secs(2));
//! let mut session = SessionController::new(
//!     RecorderConfig::default(),
//!     source,
//!     FsStorage::new("/tmp/recordings"),
//!     SystemClock::new(),
//! )
//! .unwrap();
//! let summary = session.run().unwrap();
//! println!("{}/{} files", summary.files_completed, summary.files_planned);
//! ```

pub mod fs_storage;
pub mod stream_queue;
pub mod synth_adc;
pub mod system_clock;

pub use fs_storage::{FsFile, FsStorage};
pub use stream_queue::{QueueDriver, QueueProducer, SampleRing};
pub use synth_adc::SynthAdc;
pub use system_clock::SystemClock;

/// Configuration for a recording session.
///
/// The recorder has no command-line surface; an embedding chooses these
/// values once and hands them to the session controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Acquisition rate in Hz.
    pub sample_rate: u32,

    /// Bit depth of the PCM payload. The pipeline carries `i16` samples,
    /// so only 16 is accepted.
    pub bits_per_sample: u16,

    /// Number of interleaved channels. Mono capture only.
    pub channels: u16,

    /// Duration of each rotated file in seconds.
    pub file_duration_secs: u32,

    /// Total session duration in seconds.
    pub total_duration_secs: u32,

    /// Flush buffer capacity in samples. Balances write-call overhead
    /// against the memory footprint of the accumulator.
    pub flush_capacity: usize,

    /// Write a `session.json` manifest into the session folder on completion.
    pub write_manifest: bool,
}

impl RecorderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate == 0 {
            return Err("sample rate must be positive".into());
        }
        if self.bits_per_sample != 16 {
            return Err(format!("unsupported bit depth: {}", self.bits_per_sample));
        }
        if self.channels != 1 {
            return Err(format!("unsupported channel count: {} (mono only)", self.channels));
        }
        if self.file_duration_secs == 0 {
            return Err("file duration must be positive".into());
        }
        if self.total_duration_secs < self.file_duration_secs {
            return Err("total duration is shorter than one file".into());
        }
        if self.flush_capacity == 0 {
            return Err("flush capacity must be positive".into());
        }
        Ok(())
    }

    /// Number of files in the session. Integer division: a trailing
    /// remainder of seconds is dropped (the controller logs it).
    pub fn file_count(&self) -> u32 {
        self.total_duration_secs / self.file_duration_secs
    }

    /// Seconds of session duration lost to file-count truncation.
    pub fn truncated_secs(&self) -> u32 {
        self.total_duration_secs % self.file_duration_secs
    }

    /// Samples each file must contain.
    pub fn samples_per_file(&self) -> u64 {
        u64::from(self.sample_rate) * u64::from(self.file_duration_secs)
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            bits_per_sample: 16,
            channels: 1,
            file_duration_secs: 600,
            total_duration_secs: 86_400,
            flush_capacity: 4096,
            write_manifest: true,
        }
    }
}

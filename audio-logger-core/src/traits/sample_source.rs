use crate::models::error::AcquisitionError;

/// Interface for acquisition backends.
///
/// Implemented by:
/// - `PolledSource` — software-timed single-value ADC reads
/// - `StreamingSource` — hardware-clocked blocking batch reads
///
/// Both are driven by the same session controller; the backend decides
/// cadence (the polled variant through its scheduler, the streaming
/// variant through the hardware's own clocking).
pub trait SampleSource {
    /// Called at the top of each file cycle. The polled variant resets
    /// its timing origin and sample index here; streaming backends have
    /// no per-file state.
    fn begin_file(&mut self) {}

    /// Fill a prefix of `out` with the next samples, in acquisition order.
    ///
    /// Returns the number of samples written, `1..=out.len()`. A short
    /// batch is a partially drained queue, never end-of-stream. `out`
    /// must be non-empty.
    fn next_batch(&mut self, out: &mut [i16]) -> Result<usize, AcquisitionError>;
}

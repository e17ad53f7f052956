use std::time::Duration;

use crate::models::error::AcquisitionError;
use crate::traits::sample_source::SampleSource;

/// Hardware-clocked batch acquisition (an I2S/DMA-style driver).
///
/// The driver was installed and configured when the implementor was
/// constructed. `read` blocks until samples arrive or `timeout` elapses,
/// returning the count actually delivered; `0` means nothing arrived
/// within the wait.
pub trait StreamInput {
    fn read(&mut self, out: &mut [i16], timeout: Duration) -> Result<usize, AcquisitionError>;
}

/// Hardware-driven acquisition backend.
///
/// No caller-side timing: the backend's internal clocking and queue set
/// the cadence, and `next_batch` simply drains whatever has arrived. A
/// short batch is a partially drained queue, not end-of-stream; an empty
/// wait past the stall bound is surfaced as `Stalled`.
pub struct StreamingSource<D: StreamInput> {
    driver: D,
    stall_timeout: Duration,
}

impl<D: StreamInput> StreamingSource<D> {
    pub fn open(driver: D, stall_timeout: Duration) -> Self {
        Self {
            driver,
            stall_timeout,
        }
    }
}

impl<D: StreamInput> SampleSource for StreamingSource<D> {
    fn next_batch(&mut self, out: &mut [i16]) -> Result<usize, AcquisitionError> {
        debug_assert!(!out.is_empty());
        match self.driver.read(out, self.stall_timeout)? {
            0 => Err(AcquisitionError::Stalled {
                waited_ms: self.stall_timeout.as_millis() as u64,
            }),
            n => Ok(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedDriver {
        batches: Vec<usize>,
    }

    impl StreamInput for ScriptedDriver {
        fn read(&mut self, out: &mut [i16], _timeout: Duration) -> Result<usize, AcquisitionError> {
            let n = self.batches.remove(0).min(out.len());
            out[..n].fill(7);
            Ok(n)
        }
    }

    #[test]
    fn short_batch_is_returned_as_is() {
        let driver = ScriptedDriver {
            batches: vec![300, 512],
        };
        let mut source = StreamingSource::open(driver, Duration::from_millis(500));

        let mut out = [0i16; 512];
        assert_eq!(source.next_batch(&mut out).unwrap(), 300);
        assert_eq!(source.next_batch(&mut out).unwrap(), 512);
    }

    #[test]
    fn batch_never_exceeds_request() {
        let driver = ScriptedDriver {
            batches: vec![512],
        };
        let mut source = StreamingSource::open(driver, Duration::from_millis(500));

        let mut out = [0i16; 128];
        assert_eq!(source.next_batch(&mut out).unwrap(), 128);
    }

    #[test]
    fn empty_wait_surfaces_stall() {
        let driver = ScriptedDriver { batches: vec![0] };
        let mut source = StreamingSource::open(driver, Duration::from_millis(500));

        let mut out = [0i16; 512];
        assert_eq!(
            source.next_batch(&mut out),
            Err(AcquisitionError::Stalled { waited_ms: 500 })
        );
    }
}

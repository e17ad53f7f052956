use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use audio_logger_core::models::error::AcquisitionError;
use audio_logger_core::sources::streaming::StreamInput;

/// Fixed-depth circular sample queue.
///
/// Overflow drops the oldest samples, mirroring a hardware FIFO that
/// keeps the freshest audio when the consumer falls behind.
#[derive(Debug)]
pub struct SampleRing {
    buffer: Vec<i16>,
    write_index: usize,
    read_index: usize,
    available: usize,
    capacity: usize,
}

impl SampleRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity],
            write_index: 0,
            read_index: 0,
            available: 0,
            capacity,
        }
    }

    /// Write samples, returning how many old samples were dropped to
    /// make room.
    pub fn write(&mut self, samples: &[i16]) -> usize {
        if samples.is_empty() {
            return 0;
        }

        // If more data than capacity, only the tail can survive.
        let excess = samples.len().saturating_sub(self.capacity);
        let samples = &samples[excess..];

        let overflow = (self.available + samples.len()).saturating_sub(self.capacity);
        if overflow > 0 {
            self.read_index = (self.read_index + overflow) % self.capacity;
            self.available -= overflow;
        }

        for &sample in samples {
            self.buffer[self.write_index] = sample;
            self.write_index = (self.write_index + 1) % self.capacity;
        }
        self.available += samples.len();

        excess + overflow
    }

    /// Move up to `out.len()` samples out of the queue, oldest first.
    pub fn read_into(&mut self, out: &mut [i16]) -> usize {
        let to_read = out.len().min(self.available);
        for slot in out.iter_mut().take(to_read) {
            *slot = self.buffer[self.read_index];
            self.read_index = (self.read_index + 1) % self.capacity;
        }
        self.available -= to_read;
        to_read
    }

    pub fn count(&self) -> usize {
        self.available
    }

    pub fn is_empty(&self) -> bool {
        self.available == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

struct Shared {
    ring: Mutex<SampleRing>,
    data_ready: Condvar,
}

/// Allocate the fixed-depth queue and hand back both ends. This is the
/// driver "install" step.
pub fn install(depth: usize) -> (QueueProducer, QueueDriver) {
    let shared = Arc::new(Shared {
        ring: Mutex::new(SampleRing::new(depth)),
        data_ready: Condvar::new(),
    });
    (
        QueueProducer {
            shared: Arc::clone(&shared),
        },
        QueueDriver { shared },
    )
}

/// Producer half: the capture hardware's stand-in. Pushed from whatever
/// thread the audio arrives on.
#[derive(Clone)]
pub struct QueueProducer {
    shared: Arc<Shared>,
}

impl QueueProducer {
    pub fn push(&self, samples: &[i16]) {
        let dropped = self.shared.ring.lock().write(samples);
        if dropped > 0 {
            log::warn!("stream queue overflow, dropped {dropped} oldest samples");
        }
        self.shared.data_ready.notify_one();
    }
}

/// Consumer half: blocking batch reads for `StreamingSource`.
pub struct QueueDriver {
    shared: Arc<Shared>,
}

impl StreamInput for QueueDriver {
    fn read(&mut self, out: &mut [i16], timeout: Duration) -> Result<usize, AcquisitionError> {
        let deadline = Instant::now() + timeout;
        let mut ring = self.shared.ring.lock();
        while ring.is_empty() {
            if self
                .shared
                .data_ready
                .wait_until(&mut ring, deadline)
                .timed_out()
            {
                return Ok(0);
            }
        }
        Ok(ring.read_into(out))
    }
}

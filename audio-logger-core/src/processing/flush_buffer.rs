/// Fixed-capacity sample accumulator between acquisition and storage.
///
/// Per-sample storage writes are far too slow for the acquisition cadence,
/// and buffering a whole file is beyond the memory budget; the flush
/// buffer amortizes writes at a fixed cost. The controller drains it as
/// one write call whenever it fills, and once more for the remainder at
/// file end. No sample is ever dropped: the drained total always equals
/// the pushed total.
#[derive(Debug)]
pub struct FlushBuffer {
    samples: Vec<i16>,
    capacity: usize,
}

impl FlushBuffer {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "flush buffer capacity must be positive");
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one sample. The caller must drain a full buffer before
    /// pushing further.
    pub fn push(&mut self, sample: i16) {
        debug_assert!(self.samples.len() < self.capacity);
        self.samples.push(sample);
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Take the buffered samples as one little-endian byte chunk,
    /// leaving the buffer empty.
    pub fn drain_bytes(&mut self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 2);
        for sample in self.samples.drain(..) {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }
}

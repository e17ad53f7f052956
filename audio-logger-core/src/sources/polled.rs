use crate::models::error::AcquisitionError;
use crate::sources::scheduler::SampleScheduler;
use crate::traits::sample_source::SampleSource;

/// Single-value synchronous acquisition hardware (an ADC).
///
/// Readings are raw unsigned values in `[0, 2^resolution - 1]`.
pub trait AdcInput {
    /// Configure the converter's resolution in bits. Called once, at open.
    fn configure_resolution(&mut self, bits: u8) -> Result<(), AcquisitionError>;

    /// One synchronous conversion.
    fn read(&mut self) -> Result<u16, AcquisitionError>;
}

/// Software-timed acquisition backend.
///
/// The hardware has no clock of its own; the scheduler decides when each
/// sample is due, and every `next_batch` call performs exactly one read.
/// Raw readings are recentred around the resolution midpoint and scaled
/// to signed full-range.
pub struct PolledSource<A: AdcInput> {
    adc: A,
    scheduler: SampleScheduler,
    index: u64,
    midpoint: i32,
    gain: i32,
}

impl<A: AdcInput> PolledSource<A> {
    /// Configure the ADC and bind it to a scheduler at `sample_rate`.
    pub fn open(
        mut adc: A,
        sample_rate: u32,
        resolution_bits: u8,
        gain: i32,
    ) -> Result<Self, AcquisitionError> {
        adc.configure_resolution(resolution_bits)?;
        Ok(Self {
            adc,
            scheduler: SampleScheduler::new(sample_rate),
            index: 0,
            midpoint: 1 << (resolution_bits - 1),
            gain,
        })
    }

    fn rescale(&self, raw: u16) -> i16 {
        let centered = i32::from(raw) - self.midpoint;
        (centered * self.gain).clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
    }
}

impl<A: AdcInput> SampleSource for PolledSource<A> {
    fn begin_file(&mut self) {
        self.index = 0;
        self.scheduler.restart();
    }

    fn next_batch(&mut self, out: &mut [i16]) -> Result<usize, AcquisitionError> {
        debug_assert!(!out.is_empty());
        self.scheduler.wait_for(self.index);
        // The timing slot is consumed whether or not the read succeeds;
        // a failed read shifts the file's tail by one period instead of
        // compressing the remaining cadence.
        self.index += 1;
        let raw = self.adc.read()?;
        out[0] = self.rescale(raw);
        Ok(1)
    }
}

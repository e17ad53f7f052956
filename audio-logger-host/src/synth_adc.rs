use audio_logger_core::models::error::AcquisitionError;
use audio_logger_core::sources::polled::AdcInput;

/// Deterministic triangle-wave ADC.
///
/// Stands in for real acquisition hardware in soak tests and demos:
/// sweeps the full unsigned range of the configured resolution up and
/// down, one step per read.
pub struct SynthAdc {
    level: i32,
    step: i32,
    max: i32,
}

impl SynthAdc {
    /// `step` is the per-read increment; larger steps mean a higher
    /// waveform frequency at a given sample rate.
    pub fn new(step: i32) -> Self {
        assert!(step > 0, "step must be positive");
        Self {
            level: 0,
            step,
            max: (1 << 12) - 1,
        }
    }
}

impl AdcInput for SynthAdc {
    fn configure_resolution(&mut self, bits: u8) -> Result<(), AcquisitionError> {
        self.max = (1i32 << bits) - 1;
        self.level = self.max / 2;
        Ok(())
    }

    fn read(&mut self) -> Result<u16, AcquisitionError> {
        let value = self.level;
        self.level += self.step;
        if self.level <= 0 || self.level >= self.max {
            self.level = self.level.clamp(0, self.max);
            self.step = -self.step;
        }
        Ok(value as u16)
    }
}

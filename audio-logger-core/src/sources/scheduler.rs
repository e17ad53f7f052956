use std::hint;
use std::time::{Duration, Instant};

/// Index-based acquisition timing for the polled backend.
///
/// Each sample's target time is computed from the file start and the
/// sample's absolute index, never from the previous sample: timing
/// error cannot accumulate across a file, only jitter within one
/// sample period.
#[derive(Debug)]
pub struct SampleScheduler {
    origin: Instant,
    sample_rate: u32,
}

impl SampleScheduler {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            origin: Instant::now(),
            sample_rate,
        }
    }

    /// Reset the timing origin to now. Called at the top of a file cycle.
    pub fn restart(&mut self) {
        self.origin = Instant::now();
    }

    /// Target offset of sample `index` from the file start, in
    /// milliseconds. Pure function of its arguments.
    pub fn target_offset_ms(sample_rate: u32, index: u64) -> u64 {
        index.saturating_mul(1000) / u64::from(sample_rate)
    }

    /// Block until sample `index` is due. A tight spin, not a sleep:
    /// the sample period is shorter than any sleep granularity the
    /// target platform guarantees.
    pub fn wait_for(&self, index: u64) {
        let target = Duration::from_millis(Self::target_offset_ms(self.sample_rate, index));
        while self.origin.elapsed() < target {
            hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_pure() {
        for _ in 0..3 {
            assert_eq!(SampleScheduler::target_offset_ms(16_000, 160_000), 10_000);
        }
    }

    #[test]
    fn consecutive_deltas_are_floor_or_ceil_of_period() {
        for &rate in &[30u32, 100, 750, 16_000] {
            let floor = 1000 / u64::from(rate);
            let ceil = floor + u64::from(1000 % rate != 0);
            let mut prev = SampleScheduler::target_offset_ms(rate, 0);
            for index in 1..5_000 {
                let next = SampleScheduler::target_offset_ms(rate, index);
                let delta = next - prev;
                assert!(
                    delta == floor || delta == ceil,
                    "rate {rate}, index {index}: delta {delta} outside {{{floor}, {ceil}}}"
                );
                prev = next;
            }
        }
    }

    #[test]
    fn no_cumulative_drift_over_a_long_file() {
        // 24 hours of 16 kHz: the millionth-plus sample still lands on
        // the exact index-derived millisecond.
        let samples_per_day = 16_000u64 * 86_400;
        assert_eq!(
            SampleScheduler::target_offset_ms(16_000, samples_per_day),
            86_400_000
        );
    }

    #[test]
    fn exact_period_rates_step_uniformly() {
        // 40 Hz divides 1000 ms exactly.
        for index in 0..100 {
            assert_eq!(SampleScheduler::target_offset_ms(40, index), index * 25);
        }
    }

    #[test]
    fn wait_blocks_until_target() {
        let begin = Instant::now();
        let scheduler = SampleScheduler::new(100); // 10 ms period
        scheduler.wait_for(2);
        assert!(begin.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn wait_for_due_sample_returns_immediately() {
        let scheduler = SampleScheduler::new(100);
        std::thread::sleep(Duration::from_millis(15));
        let begin = Instant::now();
        scheduler.wait_for(1); // due at 10 ms, already past
        assert!(begin.elapsed() < Duration::from_millis(5));
    }
}

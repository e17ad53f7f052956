use std::time::{Instant, SystemTime, UNIX_EPOCH};

use audio_logger_core::traits::wall_clock::WallClock;

/// Wall clock backed by the host OS.
///
/// "Boot" is the moment this clock was constructed, which on the host
/// stands in for process start.
pub struct SystemClock {
    booted: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            booted: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SystemClock {
    fn epoch_seconds(&mut self) -> Option<u64> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .map(|elapsed| elapsed.as_secs())
    }

    fn boot_millis(&mut self) -> u64 {
        self.booted.elapsed().as_millis() as u64
    }
}

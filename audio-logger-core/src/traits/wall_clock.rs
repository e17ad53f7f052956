/// The time collaborator.
///
/// Wall-clock time comes from an external sync mechanism with a bounded
/// retry budget; when that never succeeded, `epoch_seconds` stays `None`
/// and session naming falls back to the boot-relative counter.
pub trait WallClock {
    /// Seconds since the Unix epoch, if wall-clock time is available.
    fn epoch_seconds(&mut self) -> Option<u64>;

    /// Milliseconds since boot. Always available; monotonic.
    fn boot_millis(&mut self) -> u64;
}

use chrono::{DateTime, Utc};

/// Session folder name.
///
/// `/recording_<YYYYMMDD_HHMMSS>` (UTC) when wall-clock time is
/// available, else `/recording_<bootMillis>`.
pub fn session_folder(epoch_seconds: Option<u64>, boot_millis: u64) -> String {
    match epoch_seconds.and_then(|secs| DateTime::<Utc>::from_timestamp(secs as i64, 0)) {
        Some(stamp) => format!("/recording_{}", stamp.format("%Y%m%d_%H%M%S")),
        None => format!("/recording_{boot_millis}"),
    }
}

/// Audio file path within a session folder. Indices start at 1,
/// no zero-padding.
pub fn file_path(folder: &str, index: u32) -> String {
    format!("{folder}/audio_{index}.wav")
}

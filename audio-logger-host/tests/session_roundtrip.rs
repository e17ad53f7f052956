//! End-to-end sessions through the host backends: real files on disk,
//! both acquisition variants.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use audio_logger_core::{
    PolledSource, RecorderConfig, SessionController, SessionSummary, StreamingSource,
};
use audio_logger_host::{stream_queue, FsStorage, SynthAdc, SystemClock};

fn temp_root(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("audio_logger_it_{}_{}", name, std::process::id()))
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[test]
fn streaming_session_rotates_files_on_disk() {
    let root = temp_root("streaming");
    let _ = std::fs::remove_dir_all(&root);

    // Deep enough to hold the whole session; the feeder never outruns it.
    let (producer, driver) = stream_queue::install(64_000);
    let feeder = thread::spawn(move || {
        let block = [123i16; 512];
        // 2 files × 16000 samples, plus slack.
        for _ in 0..66 {
            producer.push(&block);
        }
    });

    let config = RecorderConfig {
        sample_rate: 16_000,
        file_duration_secs: 1,
        total_duration_secs: 2,
        flush_capacity: 2048,
        ..Default::default()
    };
    let source = StreamingSource::open(driver, Duration::from_secs(2));
    let mut session =
        SessionController::new(config, source, FsStorage::new(&root), SystemClock::new()).unwrap();

    let summary = session.run().unwrap();
    feeder.join().unwrap();

    assert_eq!(summary.files_planned, 2);
    assert_eq!(summary.files_completed, 2);
    assert_eq!(summary.files_failed, 0);

    let folder = root.join(summary.folder.trim_start_matches('/'));
    for index in 1..=2u32 {
        let bytes = std::fs::read(folder.join(format!("audio_{index}.wav"))).unwrap();
        assert_eq!(bytes.len(), 44 + 32_000);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(read_u32(&bytes, 24), 16_000); // sample rate
        assert_eq!(read_u32(&bytes, 40), 32_000); // data size
        assert_eq!(read_u32(&bytes, 4), 32_036); // riff chunk size

        // Payload carries the fed samples verbatim, little-endian.
        assert_eq!(i16::from_le_bytes([bytes[44], bytes[45]]), 123);
    }

    let manifest = std::fs::read(folder.join("session.json")).unwrap();
    let parsed: SessionSummary = serde_json::from_slice(&manifest).unwrap();
    assert_eq!(parsed.files_completed, 2);
    assert!(parsed.files.iter().all(|f| f.checksum.is_some()));
    assert!(parsed.started_at.is_some());

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn polled_session_paces_acquisition_in_real_time() {
    let root = temp_root("polled");
    let _ = std::fs::remove_dir_all(&root);

    let source = PolledSource::open(SynthAdc::new(64), 200, 12, 16).unwrap();
    let config = RecorderConfig {
        sample_rate: 200,
        file_duration_secs: 1,
        total_duration_secs: 2,
        flush_capacity: 128,
        ..Default::default()
    };
    let mut session =
        SessionController::new(config, source, FsStorage::new(&root), SystemClock::new()).unwrap();

    let begin = Instant::now();
    let summary = session.run().unwrap();
    let elapsed = begin.elapsed();

    assert_eq!(summary.files_completed, 2);
    // Two files of 200 scheduled samples at 200 Hz: the last sample of
    // each file is due 995 ms into it, so the session cannot finish
    // meaningfully early.
    assert!(
        elapsed >= Duration::from_millis(1900),
        "session finished in {elapsed:?}, scheduler did not pace acquisition"
    );

    let folder = root.join(summary.folder.trim_start_matches('/'));
    for index in 1..=2u32 {
        let bytes = std::fs::read(folder.join(format!("audio_{index}.wav"))).unwrap();
        assert_eq!(bytes.len(), 44 + 400);
        assert_eq!(read_u32(&bytes, 24), 200);
        assert_eq!(read_u32(&bytes, 40), 400);
    }

    std::fs::remove_dir_all(&root).ok();
}

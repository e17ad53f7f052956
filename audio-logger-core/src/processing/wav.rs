/// WAV container framing.
///
/// The header is built once per file, before the first payload byte,
/// from the intended sample count. The recorder knows every file's
/// size upfront (duration times rate), so nothing is ever patched
/// after the fact.
/// Size of the standard WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// A fully derived 44-byte RIFF/WAVE header. Immutable once built.
///
/// Layout (little-endian):
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    total file size - 8 = 36 + data_size
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16 (PCM format chunk size)
/// [20-21]  1 (PCM format code)
/// [22-23]  channels
/// [24-27]  sample_rate
/// [28-31]  byte_rate = sample_rate * channels * bits / 8
/// [32-33]  block_align = channels * bits / 8
/// [34-35]  bits_per_sample
/// [36-39]  "data"
/// [40-43]  data_size
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub total_file_size: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WavHeader {
    /// Derive a header for a PCM file holding exactly `total_samples`
    /// interleaved samples. Pure; no I/O.
    pub fn build(sample_rate: u32, bits_per_sample: u16, channels: u16, total_samples: u32) -> Self {
        let bytes_per_sample = u32::from(bits_per_sample) / 8;
        let data_size = total_samples * bytes_per_sample * u32::from(channels);
        Self {
            total_file_size: 36 + data_size,
            audio_format: 1, // PCM
            channels,
            sample_rate,
            byte_rate: sample_rate * u32::from(channels) * bytes_per_sample,
            block_align: channels * bits_per_sample / 8,
            bits_per_sample,
            data_size,
        }
    }

    /// Serialize to the bit-exact 44-byte layout.
    pub fn encode(&self) -> [u8; WAV_HEADER_SIZE] {
        let mut header = [0u8; WAV_HEADER_SIZE];

        // RIFF chunk descriptor
        header[0..4].copy_from_slice(b"RIFF");
        header[4..8].copy_from_slice(&self.total_file_size.to_le_bytes());
        header[8..12].copy_from_slice(b"WAVE");

        // fmt sub-chunk
        header[12..16].copy_from_slice(b"fmt ");
        header[16..20].copy_from_slice(&16u32.to_le_bytes()); // PCM format size
        header[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        header[22..24].copy_from_slice(&self.channels.to_le_bytes());
        header[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        header[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        header[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        header[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());

        // data sub-chunk
        header[36..40].copy_from_slice(b"data");
        header[40..44].copy_from_slice(&self.data_size.to_le_bytes());

        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_header_is_44_bytes() {
        let header = WavHeader::build(16_000, 16, 1, 0).encode();
        assert_eq!(header.len(), 44);
    }

    #[test]
    fn header_magic_tags() {
        let header = WavHeader::build(16_000, 16, 1, 0).encode();
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(&header[36..40], b"data");
    }

    #[test]
    fn header_pcm_format() {
        let header = WavHeader::build(16_000, 16, 1, 0).encode();
        assert_eq!(u16::from_le_bytes([header[20], header[21]]), 1);
        assert_eq!(u32::from_le_bytes([header[16], header[17], header[18], header[19]]), 16);
    }

    #[test]
    fn derived_fields_follow_inputs() {
        // 10 minutes of 16 kHz mono 16-bit.
        let header = WavHeader::build(16_000, 16, 1, 160_000);

        assert_eq!(header.data_size, 320_000);
        assert_eq!(header.byte_rate, 32_000);
        assert_eq!(header.block_align, 2);
        assert_eq!(header.total_file_size, 320_036);
    }

    #[test]
    fn data_size_scales_with_width_and_channels() {
        assert_eq!(WavHeader::build(48_000, 16, 2, 100).data_size, 400);
        assert_eq!(WavHeader::build(8_000, 16, 1, 100).data_size, 200);
    }

    #[test]
    fn encode_round_trips_field_bytes() {
        let header = WavHeader::build(16_000, 16, 1, 160_000);
        let bytes = header.encode();

        let sample_rate = u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]);
        assert_eq!(sample_rate, 16_000);

        let byte_rate = u32::from_le_bytes([bytes[28], bytes[29], bytes[30], bytes[31]]);
        assert_eq!(byte_rate, 32_000);

        let block_align = u16::from_le_bytes([bytes[32], bytes[33]]);
        assert_eq!(block_align, 2);

        let data_size = u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]);
        assert_eq!(data_size, 320_000);

        let chunk_size = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        assert_eq!(chunk_size, 320_036);
    }
}

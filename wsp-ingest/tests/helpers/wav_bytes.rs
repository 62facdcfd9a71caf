//! Raw WAV image builder
//!
//! hound refuses to write inconsistent files, so malformed fixtures are
//! assembled byte by byte here.

/// Canonical 44-byte-header WAV with every field overridable
#[derive(Debug, Clone)]
pub struct WavBytes {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub block_align: Option<u16>,
    /// Overrides the data chunk size field; defaults to `data.len()`
    pub declared_data_len: Option<u32>,
    pub data: Vec<u8>,
}

impl WavBytes {
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16, data: Vec<u8>) -> Self {
        Self {
            format_tag: 1,
            channels,
            sample_rate,
            bits_per_sample,
            block_align: None,
            declared_data_len: None,
            data,
        }
    }

    pub fn mono_i16(sample_rate: u32, samples: &[i16]) -> Self {
        let data = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        Self::pcm(1, sample_rate, 16, data)
    }

    pub fn build(&self) -> Vec<u8> {
        let block_align = self
            .block_align
            .unwrap_or(self.channels * (self.bits_per_sample / 8));
        let data_len = self.declared_data_len.unwrap_or(self.data.len() as u32);

        let mut out = Vec::with_capacity(44 + self.data.len());
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&self.format_tag.to_le_bytes());
        out.extend_from_slice(&self.channels.to_le_bytes());
        out.extend_from_slice(&self.sample_rate.to_le_bytes());
        out.extend_from_slice(&(self.sample_rate * block_align as u32).to_le_bytes());
        out.extend_from_slice(&block_align.to_le_bytes());
        out.extend_from_slice(&self.bits_per_sample.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        out.extend_from_slice(&self.data);
        out
    }

    pub fn write_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        std::fs::write(path, self.build())
    }
}

//! WAV I/O collaborator. The core knows nothing about files or channel
//! layout; this module is where that lives, the way `core/wem/src/pcm.rs`
//! owns WAV framing for the teacher's codecs.

use anyhow::{Context, Result};
use std::path::Path;

/// A mono 16-bit PCM buffer plus the sample rate it was read at.
pub struct MonoPcm {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

/// Reads a WAV file and downmixes to mono by keeping the first channel,
/// per the audio contract: "Stereo inputs are downmixed by the collaborator
/// to the first channel before being handed to the core."
pub fn read_mono(path: &Path) -> Result<MonoPcm> {
    let mut reader =
        hound::WavReader::open(path).with_context(|| format!("opening {}", path.display()))?;
    let spec = reader.spec();

    let samples: Vec<i16> = match spec.sample_format {
        hound::SampleFormat::Int if spec.bits_per_sample == 16 => reader
            .samples::<i16>()
            .step_by(spec.channels as usize)
            .collect::<Result<_, _>>()
            .context("reading 16-bit PCM samples")?,
        hound::SampleFormat::Int if spec.bits_per_sample == 8 => reader
            .samples::<i32>()
            .step_by(spec.channels as usize)
            .map(|s| s.map(|v| ((v - 128) << 8) as i16))
            .collect::<Result<_, _>>()
            .context("reading 8-bit PCM samples")?,
        hound::SampleFormat::Int => reader
            .samples::<i32>()
            .step_by(spec.channels as usize)
            .map(|s| s.map(|v| (v >> (spec.bits_per_sample.saturating_sub(16))) as i16))
            .collect::<Result<_, _>>()
            .context("reading and downscaling PCM samples")?,
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(spec.channels as usize)
            .map(|s| s.map(|v| (v.clamp(-1.0, 1.0) * i16::MAX as f32) as i16))
            .collect::<Result<_, _>>()
            .context("reading float PCM samples")?,
    };

    Ok(MonoPcm {
        samples,
        sample_rate: spec.sample_rate,
    })
}

/// Writes a mono 16-bit PCM buffer to a WAV file.
pub fn write_mono(path: &Path, samples: &[i16], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("creating {}", path.display()))?;
    for &sample in samples {
        writer.write_sample(sample).context("writing sample")?;
    }
    writer.finalize().context("finalizing WAV file")?;
    Ok(())
}

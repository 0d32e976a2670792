//! WAV encoding and the clip queue handed to the app's audio player

use std::collections::VecDeque;
use std::io::Cursor;
use std::path::Path;

use super::synth::AudioOutput;

pub const SAMPLE_RATE: u32 = 44_100;

fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

fn to_pcm(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}

/// Encode a mono clip as 16-bit PCM WAV bytes
pub fn encode_wav(clip: &[f32], sample_rate: u32) -> Result<Vec<u8>, String> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, wav_spec(sample_rate))
            .map_err(|e| format!("Failed to start WAV stream: {e}"))?;
        for &sample in clip {
            writer
                .write_sample(to_pcm(sample))
                .map_err(|e| format!("Failed to write WAV sample: {e}"))?;
        }
        writer
            .finalize()
            .map_err(|e| format!("Failed to finish WAV stream: {e}"))?;
    }
    Ok(cursor.into_inner())
}

/// Write a mono clip to a WAV file
pub fn write_wav(path: &Path, clip: &[f32], sample_rate: u32) -> Result<(), String> {
    let mut writer = hound::WavWriter::create(path, wav_spec(sample_rate))
        .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    for &sample in clip {
        writer
            .write_sample(to_pcm(sample))
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    }
    writer
        .finalize()
        .map_err(|e| format!("Failed to finish {}: {e}", path.display()))
}

/// Output that keeps rendered clips until the host drains them for playback
#[derive(Debug, Default)]
pub struct ClipQueue {
    clips: VecDeque<Vec<f32>>,
}

impl ClipQueue {
    pub fn drain(&mut self) -> impl Iterator<Item = Vec<f32>> + '_ {
        self.clips.drain(..)
    }

    pub fn pop(&mut self) -> Option<Vec<f32>> {
        self.clips.pop_front()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl AudioOutput for ClipQueue {
    fn open() -> Result<Self, String> {
        Ok(Self::default())
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn play(&mut self, clip: Vec<f32>) -> Result<(), String> {
        if clip.is_empty() {
            return Err("Refusing to queue an empty clip".to_string());
        }
        self.clips.push_back(clip);
        Ok(())
    }
}

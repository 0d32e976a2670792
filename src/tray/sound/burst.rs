//! Noise bursts shaped by a decay envelope

use rand::Rng;

/// Amplitude envelope applied over a burst
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Envelope {
    /// `(1 - t)^2`, used for the short tumbling clicks
    Quadratic,
    /// `(1 - t)^3`, a heavier fall-off for the settle thud
    Cubic,
}

impl Envelope {
    /// Gain at `t` in `[0, 1]` through the burst
    pub fn gain(&self, t: f32) -> f32 {
        let decay = (1.0 - t).clamp(0.0, 1.0);
        match self {
            Envelope::Quadratic => decay * decay,
            Envelope::Cubic => decay * decay * decay,
        }
    }
}

/// White noise in `[-1, 1]` faded out by `envelope` over `len` samples
pub fn noise_burst(rng: &mut impl Rng, len: usize, envelope: Envelope) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let t = i as f32 / len as f32;
            rng.gen_range(-1.0f32..=1.0) * envelope.gain(t)
        })
        .collect()
}

/// Number of samples covering `seconds` at `sample_rate`
pub fn samples_for(seconds: f32, sample_rate: u32) -> usize {
    (seconds * sample_rate as f32).round() as usize
}

//! Timeline of one roll sound
//!
//! A roll sounds like a run of tumbling clicks that get quieter as the die
//! loses energy, followed by a lower thud when it comes to rest. Every event
//! is generated up front and then mixed into a single clip.

use rand::Rng;

use super::burst::{noise_burst, samples_for, Envelope};
use super::filter::{Biquad, BUTTERWORTH_Q};

/// Total length of the roll sound in seconds
pub const SOUND_DURATION: f32 = 1.2;
/// Share of the duration the clicks are spread across
pub const CLICK_SPAN: f32 = 0.8;
/// Settle thud start, as a share of the duration
pub const SETTLE_AT: f32 = 0.85;

pub const MIN_CLICKS: usize = 8;
pub const MAX_CLICKS: usize = 11;

pub const CLICK_LENGTH: f32 = 0.03;
pub const CLICK_GAIN: f32 = 0.15;
pub const CLICK_MIN_FREQ: f32 = 800.0;
pub const CLICK_MAX_FREQ: f32 = 1200.0;
pub const CLICK_Q: f32 = 1.0;

pub const SETTLE_LENGTH: f32 = 0.05;
pub const SETTLE_GAIN: f32 = 0.2;
pub const SETTLE_CUTOFF: f32 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SoundEventKind {
    /// Band-passed tumbling click
    Click { centre_hz: f32, intensity: f32 },
    /// Low-passed resting thud
    Settle,
}

/// One noise burst placed on the roll timeline
#[derive(Clone, Debug)]
pub struct SoundEvent {
    /// Start time in seconds from the beginning of the clip
    pub offset: f32,
    pub gain: f32,
    pub kind: SoundEventKind,
    pub samples: Vec<f32>,
}

impl SoundEvent {
    fn filter(&self, sample_rate: u32) -> Biquad {
        match self.kind {
            SoundEventKind::Click { centre_hz, .. } => {
                Biquad::band_pass(sample_rate, centre_hz, CLICK_Q)
            }
            SoundEventKind::Settle => Biquad::low_pass(sample_rate, SETTLE_CUTOFF, BUTTERWORTH_Q),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RollSoundPlan {
    pub sample_rate: u32,
    pub events: Vec<SoundEvent>,
}

impl RollSoundPlan {
    pub fn generate(rng: &mut impl Rng, sample_rate: u32) -> Self {
        let clicks = rng.gen_range(MIN_CLICKS..=MAX_CLICKS);
        let click_len = samples_for(CLICK_LENGTH, sample_rate);
        let mut events = Vec::with_capacity(clicks + 1);

        for i in 0..clicks {
            let progress = i as f32 / clicks as f32;
            let intensity = 1.0 - progress * 0.5;
            let centre_hz = CLICK_MIN_FREQ + rng.gen::<f32>() * (CLICK_MAX_FREQ - CLICK_MIN_FREQ);
            let gain = CLICK_GAIN * intensity * (0.7 + rng.gen::<f32>() * 0.3);

            events.push(SoundEvent {
                offset: progress * SOUND_DURATION * CLICK_SPAN,
                gain,
                kind: SoundEventKind::Click {
                    centre_hz,
                    intensity,
                },
                samples: noise_burst(rng, click_len, Envelope::Quadratic),
            });
        }

        events.push(SoundEvent {
            offset: SOUND_DURATION * SETTLE_AT,
            gain: SETTLE_GAIN,
            kind: SoundEventKind::Settle,
            samples: noise_burst(rng, samples_for(SETTLE_LENGTH, sample_rate), Envelope::Cubic),
        });

        Self {
            sample_rate,
            events,
        }
    }

    pub fn click_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, SoundEventKind::Click { .. }))
            .count()
    }

    /// Mix every event into one mono clip
    pub fn render(&self) -> Vec<f32> {
        let clip_len = self
            .events
            .iter()
            .map(|e| samples_for(e.offset, self.sample_rate) + e.samples.len())
            .max()
            .unwrap_or(0)
            .max(samples_for(SOUND_DURATION, self.sample_rate));
        let mut clip = vec![0.0f32; clip_len];

        for event in &self.events {
            let mut burst = event.samples.clone();
            event.filter(self.sample_rate).process_buffer(&mut burst);

            let start = samples_for(event.offset, self.sample_rate);
            for (dst, src) in clip[start..].iter_mut().zip(&burst) {
                *dst += src * event.gain;
            }
        }

        for s in clip.iter_mut() {
            *s = s.clamp(-1.0, 1.0);
        }
        clip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_settle_is_last_and_heavier() {
        let mut rng = StdRng::seed_from_u64(11);
        let plan = RollSoundPlan::generate(&mut rng, 44_100);
        let settle = plan.events.last().map(|e| e.kind);
        assert_eq!(settle, Some(SoundEventKind::Settle));
        assert_eq!(plan.events.len(), plan.click_count() + 1);
    }

    #[test]
    fn test_render_length_covers_duration() {
        let mut rng = StdRng::seed_from_u64(5);
        let plan = RollSoundPlan::generate(&mut rng, 8_000);
        let clip = plan.render();
        assert_eq!(clip.len(), samples_for(SOUND_DURATION, 8_000));
        assert!(clip.iter().any(|s| *s != 0.0));
    }
}

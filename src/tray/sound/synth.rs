//! Roll sound synthesizer
//!
//! Sound is an enhancement: every audio failure is absorbed here and a roll
//! goes ahead regardless.

use bevy::log::debug;
use rand::Rng;

use super::plan::RollSoundPlan;

/// Destination for synthesized roll clips
pub trait AudioOutput: Sized {
    /// Open the output. Called on the first roll that wants sound, never before.
    fn open() -> Result<Self, String>;

    fn sample_rate(&self) -> u32;

    /// Start playing a mono clip right away
    fn play(&mut self, clip: Vec<f32>) -> Result<(), String>;
}

/// Lifecycle of the audio output
#[derive(Debug)]
pub enum SynthState<O> {
    Uninitialized,
    Ready(O),
}

#[derive(Debug)]
pub struct SoundSynthesizer<O> {
    enabled: bool,
    state: SynthState<O>,
}

impl<O: AudioOutput> SoundSynthesizer<O> {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            state: SynthState::Uninitialized,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Affects later rolls only; sound already handed to the output keeps playing
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SynthState::Ready(_))
    }

    pub fn output(&self) -> Option<&O> {
        match &self.state {
            SynthState::Ready(output) => Some(output),
            SynthState::Uninitialized => None,
        }
    }

    pub fn output_mut(&mut self) -> Option<&mut O> {
        match &mut self.state {
            SynthState::Ready(output) => Some(output),
            SynthState::Uninitialized => None,
        }
    }

    /// Synthesize and play one roll sound, if sound is on
    pub fn play_roll(&mut self, rng: &mut impl Rng) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.try_play_roll(rng) {
            debug!("Roll sound skipped: {}", err);
        }
    }

    fn try_play_roll(&mut self, rng: &mut impl Rng) -> Result<(), String> {
        let output = self.ensure_output()?;
        let plan = RollSoundPlan::generate(rng, output.sample_rate());
        output.play(plan.render())
    }

    fn ensure_output(&mut self) -> Result<&mut O, String> {
        if matches!(self.state, SynthState::Uninitialized) {
            self.state = SynthState::Ready(O::open()?);
        }
        self.output_mut()
            .ok_or_else(|| "Audio output is not available".to_string())
    }
}

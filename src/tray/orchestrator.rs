//! Roll orchestration
//!
//! [`DiceTray`] owns everything a session needs: the selection, the faces
//! shown for each die, the history, the busy flag, the sound synthesizer and
//! the timers of an in-flight roll. Results are decided the moment a roll
//! starts; the flicker that follows is cosmetic and the completion timer
//! always writes the decided result last.

use std::collections::BTreeSet;
use std::time::Duration;

use bevy::log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::sound::{AudioOutput, SoundSynthesizer};
use super::timers::{RollTimer, TimerQueue};
use super::types::{DieFace, DieKind, FaceState, HistoryEntry, RollHistory, RollResult};

/// Time from roll start to the committed result
pub const ROLL_DURATION: Duration = Duration::from_millis(1500);
/// Number of equal slices `ROLL_DURATION` is cut into; all but the last flicker
pub const ANIMATION_STEPS: u32 = 10;

pub const ROLL_LABEL: &str = "Roll Dice";
pub const SELECT_LABEL: &str = "Select Dice";

fn step_duration() -> Duration {
    ROLL_DURATION / ANIMATION_STEPS
}

#[derive(Debug)]
pub struct DiceTray<O> {
    selection: BTreeSet<DieKind>,
    faces: Vec<DieFace>,
    history: RollHistory,
    busy: bool,
    in_flight: Vec<RollResult>,
    timers: TimerQueue,
    sound: SoundSynthesizer<O>,
    rng: StdRng,
}

impl<O: AudioOutput> DiceTray<O> {
    pub fn new(sound_enabled: bool) -> Self {
        Self::with_rng(StdRng::from_entropy(), sound_enabled)
    }

    /// Tray with reproducible rolls
    pub fn with_seed(seed: u64, sound_enabled: bool) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), sound_enabled)
    }

    fn with_rng(rng: StdRng, sound_enabled: bool) -> Self {
        Self {
            selection: BTreeSet::new(),
            faces: DieKind::ALL.iter().map(|&kind| DieFace::new(kind)).collect(),
            history: RollHistory::default(),
            busy: false,
            in_flight: Vec::new(),
            timers: TimerQueue::default(),
            sound: SoundSynthesizer::new(sound_enabled),
            rng,
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Add or remove a die from the selection. Ignored mid-roll.
    pub fn toggle_selection(&mut self, kind: DieKind) -> bool {
        if self.busy {
            return false;
        }
        if !self.selection.remove(&kind) {
            self.selection.insert(kind);
        }
        true
    }

    pub fn is_selected(&self, kind: DieKind) -> bool {
        self.selection.contains(&kind)
    }

    /// Selected dice in tray order
    pub fn selection(&self) -> impl Iterator<Item = DieKind> + '_ {
        self.selection.iter().copied()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    // ------------------------------------------------------------------
    // Rolling
    // ------------------------------------------------------------------

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the roll trigger accepts input right now
    pub fn roll_enabled(&self) -> bool {
        !self.busy && !self.selection.is_empty()
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.selection.is_empty() {
            SELECT_LABEL
        } else {
            ROLL_LABEL
        }
    }

    /// Start a roll of every selected die.
    ///
    /// Returns `false` without touching anything when nothing is selected or
    /// a roll is already in flight.
    pub fn start_roll(&mut self) -> bool {
        if self.busy || self.selection.is_empty() {
            return false;
        }
        self.busy = true;

        self.sound.play_roll(&mut self.rng);

        for face in self.faces.iter_mut() {
            if face.state == FaceState::Settled {
                face.state = FaceState::Idle;
            }
        }

        let rng = &mut self.rng;
        let results: Vec<RollResult> = self
            .selection
            .iter()
            .map(|&kind| RollResult::roll(kind, rng))
            .collect();

        for result in &results {
            self.faces[result.kind.index()].state = FaceState::Rolling;
            self.timers.schedule_in(
                step_duration(),
                RollTimer::Flicker {
                    kind: result.kind,
                    step: 1,
                },
            );
        }
        self.timers.schedule_in(ROLL_DURATION, RollTimer::Complete);

        info!(
            "Rolling {}",
            results
                .iter()
                .map(|r| r.kind.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.in_flight = results;
        true
    }

    /// Move the tray clock forward, running every timer that comes due
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timers.now() + elapsed;
        while let Some(timer) = self.timers.pop_due(until) {
            self.fire(timer);
        }
        self.timers.settle_at(until);
    }

    fn fire(&mut self, timer: RollTimer) {
        match timer {
            RollTimer::Flicker { kind, step } => {
                let value = kind.roll(&mut self.rng);
                self.faces[kind.index()].show(value);
                if step + 1 < ANIMATION_STEPS {
                    self.timers.schedule_in(
                        step_duration(),
                        RollTimer::Flicker {
                            kind,
                            step: step + 1,
                        },
                    );
                }
            }
            RollTimer::Complete => self.complete_roll(),
        }
    }

    fn complete_roll(&mut self) {
        let results = std::mem::take(&mut self.in_flight);
        for result in &results {
            let face = &mut self.faces[result.kind.index()];
            face.show(result.value);
            face.state = FaceState::Settled;
        }
        self.busy = false;

        let entry = self.history.push(results);
        info!(
            "Roll #{} settled: {}",
            entry.number,
            entry.result_labels().join(", ")
        );
    }

    /// Results decided for the roll in flight, if any
    pub fn pending_results(&self) -> &[RollResult] {
        &self.in_flight
    }

    // ------------------------------------------------------------------
    // Reset and history
    // ------------------------------------------------------------------

    /// Clear the selection, the faces and the history. Ignored mid-roll.
    pub fn reset(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.selection.clear();
        for face in self.faces.iter_mut() {
            face.restore_default();
        }
        self.history.clear();
        true
    }

    /// Empty the history and restart numbering at #1. Ignored mid-roll.
    pub fn clear_history(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.history.clear();
        true
    }

    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    pub fn latest_entry(&self) -> Option<&HistoryEntry> {
        self.history.latest()
    }

    // ------------------------------------------------------------------
    // Faces and sound
    // ------------------------------------------------------------------

    pub fn face(&self, kind: DieKind) -> &DieFace {
        &self.faces[kind.index()]
    }

    pub fn faces(&self) -> impl Iterator<Item = &DieFace> {
        self.faces.iter()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound.is_enabled()
    }

    pub fn toggle_sound(&mut self) -> bool {
        let enabled = self.sound.toggle();
        info!("Roll sound {}", if enabled { "on" } else { "off" });
        enabled
    }

    pub fn sound(&self) -> &SoundSynthesizer<O> {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut SoundSynthesizer<O> {
        &mut self.sound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tray::sound::ClipQueue;

    fn tray() -> DiceTray<ClipQueue> {
        DiceTray::with_seed(42, false)
    }

    #[test]
    fn test_trigger_label_follows_selection() {
        let mut tray = tray();
        assert_eq!(tray.trigger_label(), SELECT_LABEL);
        assert!(!tray.roll_enabled());

        tray.toggle_selection(DieKind::D8);
        assert_eq!(tray.trigger_label(), ROLL_LABEL);
        assert!(tray.roll_enabled());

        tray.toggle_selection(DieKind::D8);
        assert_eq!(tray.trigger_label(), SELECT_LABEL);
    }

    #[test]
    fn test_selection_is_in_tray_order() {
        let mut tray = tray();
        tray.toggle_selection(DieKind::D100);
        tray.toggle_selection(DieKind::D4);
        tray.toggle_selection(DieKind::D12);
        let order: Vec<DieKind> = tray.selection().collect();
        assert_eq!(order, vec![DieKind::D4, DieKind::D12, DieKind::D100]);
    }

    #[test]
    fn test_results_are_decided_at_start() {
        let mut tray = tray();
        tray.toggle_selection(DieKind::D20);
        assert!(tray.start_roll());

        let decided = tray.pending_results().to_vec();
        assert_eq!(decided.len(), 1);

        tray.advance(ROLL_DURATION);
        assert_eq!(tray.latest_entry().map(|e| e.results.clone()), Some(decided));
        assert!(tray.pending_results().is_empty());
    }

    #[test]
    fn test_faces_roll_then_settle() {
        let mut tray = tray();
        tray.toggle_selection(DieKind::D6);
        tray.start_roll();
        assert_eq!(tray.face(DieKind::D6).state, FaceState::Rolling);
        assert_eq!(tray.face(DieKind::D4).state, FaceState::Idle);

        tray.advance(ROLL_DURATION);
        assert_eq!(tray.face(DieKind::D6).state, FaceState::Settled);

        // The next roll clears the settled look of every die first
        tray.toggle_selection(DieKind::D6);
        tray.toggle_selection(DieKind::D8);
        tray.start_roll();
        assert_eq!(tray.face(DieKind::D6).state, FaceState::Idle);
        assert_eq!(tray.face(DieKind::D8).state, FaceState::Rolling);
    }

    #[test]
    fn test_completion_waits_for_full_duration() {
        let mut tray = tray();
        tray.toggle_selection(DieKind::D12);
        tray.start_roll();

        tray.advance(ROLL_DURATION - Duration::from_millis(1));
        assert!(tray.is_busy());
        assert!(tray.history().is_empty());

        tray.advance(Duration::from_millis(1));
        assert!(!tray.is_busy());
        assert_eq!(tray.history().len(), 1);
    }
}

//! Roll sound synthesis tests

use dicetray::tray::sound::{
    encode_wav, AudioOutput, ClipQueue, RollSoundPlan, SoundEventKind, SoundSynthesizer,
    CLICK_GAIN, CLICK_MAX_FREQ, CLICK_MIN_FREQ, CLICK_SPAN, MAX_CLICKS, MIN_CLICKS,
    SETTLE_AT, SOUND_DURATION,
};
use dicetray::tray::types::DieKind;
use dicetray::tray::{DiceTray, ROLL_DURATION};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct UnavailableOutput;

impl AudioOutput for UnavailableOutput {
    fn open() -> Result<Self, String> {
        Err("no audio device".to_string())
    }

    fn sample_rate(&self) -> u32 {
        44_100
    }

    fn play(&mut self, _clip: Vec<f32>) -> Result<(), String> {
        Ok(())
    }
}

struct RejectingOutput;

impl AudioOutput for RejectingOutput {
    fn open() -> Result<Self, String> {
        Ok(Self)
    }

    fn sample_rate(&self) -> u32 {
        44_100
    }

    fn play(&mut self, _clip: Vec<f32>) -> Result<(), String> {
        Err("playback blocked".to_string())
    }
}

#[test]
fn test_click_schedule() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = RollSoundPlan::generate(&mut rng, 44_100);

        let clicks: Vec<_> = plan
            .events
            .iter()
            .filter_map(|e| match e.kind {
                SoundEventKind::Click {
                    centre_hz,
                    intensity,
                } => Some((e.offset, e.gain, centre_hz, intensity)),
                SoundEventKind::Settle => None,
            })
            .collect();

        assert!((MIN_CLICKS..=MAX_CLICKS).contains(&clicks.len()));
        assert_eq!(clicks[0].0, 0.0);
        assert_eq!(clicks[0].3, 1.0);

        for pair in clicks.windows(2) {
            assert!(pair[1].0 > pair[0].0);
            assert!(pair[1].3 <= pair[0].3);
        }
        for (offset, gain, centre_hz, intensity) in &clicks {
            assert!(*offset < SOUND_DURATION * CLICK_SPAN);
            assert!((CLICK_MIN_FREQ..=CLICK_MAX_FREQ).contains(centre_hz));
            assert!(*intensity > 0.5 && *intensity <= 1.0);
            assert!(*gain <= CLICK_GAIN * intensity + f32::EPSILON);
            assert!(*gain >= CLICK_GAIN * intensity * 0.7 - f32::EPSILON);
        }
    }
}

#[test]
fn test_settle_event() {
    let mut rng = StdRng::seed_from_u64(8);
    let plan = RollSoundPlan::generate(&mut rng, 44_100);
    let settle = plan
        .events
        .iter()
        .find(|e| e.kind == SoundEventKind::Settle)
        .expect("settle event");

    assert!((settle.offset - SOUND_DURATION * SETTLE_AT).abs() < 1e-6);
    // 50 ms settle burst versus 30 ms clicks
    let click_len = plan.events[0].samples.len();
    assert!(settle.samples.len() > click_len);
}

#[test]
fn test_rendered_clip_is_bounded() {
    let mut rng = StdRng::seed_from_u64(21);
    let clip = RollSoundPlan::generate(&mut rng, 44_100).render();
    assert!(clip.iter().all(|s| (-1.0..=1.0).contains(s)));
    assert!(clip.iter().any(|s| s.abs() > 0.001));
}

#[test]
fn test_muted_synth_never_opens() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut synth = SoundSynthesizer::<ClipQueue>::new(false);
    synth.play_roll(&mut rng);
    assert!(!synth.is_ready());

    synth.set_enabled(true);
    synth.play_roll(&mut rng);
    assert!(synth.is_ready());
    assert_eq!(synth.output().map(|q| q.len()), Some(1));
}

#[test]
fn test_open_failure_is_swallowed() {
    let mut tray = DiceTray::<UnavailableOutput>::with_seed(3, true);
    tray.toggle_selection(DieKind::D20);
    assert!(tray.start_roll());
    assert!(!tray.sound().is_ready());

    tray.advance(ROLL_DURATION);
    assert_eq!(tray.history().len(), 1);
}

#[test]
fn test_play_failure_is_swallowed() {
    let mut tray = DiceTray::<RejectingOutput>::with_seed(3, true);
    tray.toggle_selection(DieKind::D6);
    assert!(tray.start_roll());
    assert!(tray.sound().is_ready());

    tray.advance(ROLL_DURATION);
    assert_eq!(tray.history().len(), 1);
}

#[test]
fn test_queued_clip_encodes_as_wav() {
    let mut tray = DiceTray::<ClipQueue>::with_seed(9, true);
    tray.toggle_selection(DieKind::D12);
    tray.start_roll();

    let clip = tray
        .sound_mut()
        .output_mut()
        .and_then(|q| q.pop())
        .expect("queued clip");
    let bytes = encode_wav(&clip, 44_100).expect("encode");
    assert_eq!(&bytes[..4], b"RIFF");
    assert!(bytes.len() > clip.len() * 2);
}

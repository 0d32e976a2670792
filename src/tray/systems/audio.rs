//! Plays synthesized roll sounds through Bevy's audio player

use bevy::audio::{AudioPlayer, AudioSource, PlaybackSettings};
use bevy::prelude::*;

use crate::tray::plugin::RollTray;
use crate::tray::sound::{encode_wav, SAMPLE_RATE};

/// Turn every clip the synthesizer queued into a one-shot audio entity
pub fn play_roll_sounds(
    mut commands: Commands,
    mut tray: ResMut<RollTray>,
    mut sources: ResMut<Assets<AudioSource>>,
) {
    let queued = tray
        .sound()
        .output()
        .is_some_and(|queue| !queue.is_empty());
    if !queued {
        return;
    }
    let Some(queue) = tray.sound_mut().output_mut() else {
        return;
    };
    let clips: Vec<Vec<f32>> = queue.drain().collect();

    for clip in clips {
        match encode_wav(&clip, SAMPLE_RATE) {
            Ok(bytes) => {
                let handle = sources.add(AudioSource {
                    bytes: bytes.into(),
                });
                commands.spawn((AudioPlayer(handle), PlaybackSettings::DESPAWN));
            }
            Err(err) => warn!("Roll sound dropped: {}", err),
        }
    }
}

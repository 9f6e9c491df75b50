//! Sound hookup: one-shots reacting to gameplay events, plus the looping
//! session music. Everything degrades to silence when assets or the audio
//! device are unavailable (headless runs).

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::assets::GameAssets;
use crate::core::config::GameConfig;
use crate::gameplay::events::{FlapEvent, ScoredEvent};

/// Marks the looping music entity so the restart teardown can stop it.
#[derive(Component)]
pub struct MusicLoop;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FlapEvent>()
            .add_event::<ScoredEvent>()
            .add_systems(OnEnter(AppState::Playing), start_music)
            .add_systems(OnEnter(AppState::GameOver), play_crash_sound)
            .add_systems(
                Update,
                (play_flap_sound, play_score_sound).run_if(in_state(AppState::Playing)),
            );
    }
}

/// Music accompanies the whole session, keeps playing through the game-over
/// screen, and is despawned by the restart teardown before this re-arms it.
fn start_music(mut commands: Commands, cfg: Res<GameConfig>, assets: Option<Res<GameAssets>>) {
    if !cfg.audio.enabled {
        return;
    }
    let Some(assets) = assets else { return };
    commands.spawn((
        MusicLoop,
        AudioPlayer::new(assets.audio.music.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(cfg.audio.music_volume)),
    ));
}

fn play_flap_sound(
    mut flaps: EventReader<FlapEvent>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Option<Res<GameAssets>>,
) {
    if flaps.is_empty() {
        return;
    }
    flaps.clear();
    one_shot(&mut commands, &cfg, assets.as_deref(), |a| &a.audio.flap);
}

fn play_score_sound(
    mut scores: EventReader<ScoredEvent>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Option<Res<GameAssets>>,
) {
    if scores.is_empty() {
        return;
    }
    scores.clear();
    one_shot(&mut commands, &cfg, assets.as_deref(), |a| &a.audio.score);
}

/// Runs on the Playing -> GameOver transition, so at most once per life.
fn play_crash_sound(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Option<Res<GameAssets>>,
) {
    one_shot(&mut commands, &cfg, assets.as_deref(), |a| &a.audio.crash);
}

fn one_shot(
    commands: &mut Commands,
    cfg: &GameConfig,
    assets: Option<&GameAssets>,
    pick: impl Fn(&GameAssets) -> &Handle<bevy::audio::AudioSource>,
) {
    if !cfg.audio.enabled {
        return;
    }
    let Some(assets) = assets else { return };
    commands.spawn((
        AudioPlayer::new(pick(assets).clone()),
        PlaybackSettings::DESPAWN.with_volume(Volume::Linear(cfg.audio.effects_volume)),
    ));
}

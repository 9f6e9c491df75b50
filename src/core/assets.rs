//! Centralized asset handles so gameplay code never hardcodes paths.

use bevy::audio::AudioSource;
use bevy::prelude::*;

use crate::core::system::system_order::AssetLoadSet;

#[derive(Resource, Debug, Clone, Default)]
pub struct SpriteAssets {
    pub player: Handle<Image>,
    pub background: Handle<Image>,
    pub top_pipe: Handle<Image>,
    pub bottom_pipe: Handle<Image>,
    pub restart_button: Handle<Image>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct AudioAssets {
    pub flap: Handle<AudioSource>,
    pub score: Handle<AudioSource>,
    pub crash: Handle<AudioSource>,
    pub music: Handle<AudioSource>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameAssets {
    pub sprites: SpriteAssets,
    pub audio: AudioAssets,
}

pub struct GameAssetsPlugin;

impl Plugin for GameAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameAssets>()
            .add_systems(Startup, load_assets.in_set(AssetLoadSet));
    }
}

fn load_assets(mut assets: ResMut<GameAssets>, server: Res<AssetServer>) {
    assets.sprites.player = server.load("sprites/player.png");
    assets.sprites.background = server.load("sprites/background.png");
    assets.sprites.top_pipe = server.load("sprites/top_pipe.png");
    assets.sprites.bottom_pipe = server.load("sprites/bottom_pipe.png");
    assets.sprites.restart_button = server.load("ui/restart_button.png");

    assets.audio.flap = server.load("sounds/flap.ogg");
    assets.audio.score = server.load("sounds/score.ogg");
    assets.audio.crash = server.load("sounds/crash.ogg");
    assets.audio.music = server.load("sounds/music.ogg");
}

use bevy::prelude::*;

use crate::app::game_over::GameOverPlugin;
use crate::app::hud::HudPlugin;
use crate::app::state::AppState;
use crate::core::assets::GameAssetsPlugin;
use crate::core::persist::HighScorePlugin;
use crate::core::system::system_order::{AssetLoadSet, ImpulseSet, InputSet, RulesSet};
use crate::debug::DebugPlugin;
use crate::gameplay::audio::GameAudioPlugin;
use crate::gameplay::pipes::PipesPlugin;
use crate::gameplay::player::PlayerPlugin;
use crate::gameplay::scoring::ScoringPlugin;
use crate::interaction::input::PlayerInputPlugin;
use crate::interaction::session::SessionPlugin;
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::background::BackgroundPlugin;
use crate::rendering::camera::CameraPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .configure_sets(Startup, AssetLoadSet)
            .configure_sets(
                Update,
                (
                    InputSet,
                    ImpulseSet.after(InputSet),
                    RulesSet.after(ImpulseSet),
                ),
            )
            .add_plugins((
                CameraPlugin,
                BackgroundPlugin,
                GameAssetsPlugin,
                PhysicsSetupPlugin,
                PlayerPlugin,
                PipesPlugin,
                ScoringPlugin,
                PlayerInputPlugin,
                GameAudioPlugin,
                HudPlugin,
                GameOverPlugin,
                HighScorePlugin,
                SessionPlugin,
                DebugPlugin,
            ));
    }
}

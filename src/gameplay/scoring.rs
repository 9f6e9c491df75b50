use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::system::system_order::RulesSet;
use crate::gameplay::events::ScoredEvent;
use crate::gameplay::pipes::{Passed, Pipe};
use crate::gameplay::player::Player;

/// Session score. `current` resets on restart; `best` only ever rises and is
/// what gets persisted.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Score {
    pub current: f32,
    pub best: f32,
}

pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_event::<ScoredEvent>()
            .add_systems(
                Update,
                track_passed_pipes
                    .in_set(RulesSet)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

/// Each pipe scores exactly once, the first frame its column falls behind the
/// player's; the `Passed` marker blocks every later frame.
fn track_passed_pipes(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut score: ResMut<Score>,
    mut scored: EventWriter<ScoredEvent>,
    q_player: Query<&Transform, With<Player>>,
    q_pipes: Query<(Entity, &Transform), (With<Pipe>, Without<Passed>)>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    for (entity, tf) in &q_pipes {
        if tf.translation.x < player.translation.x {
            commands.entity(entity).insert(Passed);
            score.current += cfg.scoring.increment;
            if score.current > score.best {
                score.best = score.current;
            }
            scored.write(ScoredEvent {
                total: score.current,
            });
        }
    }
}

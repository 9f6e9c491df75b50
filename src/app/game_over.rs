//! Game-over screen and the restart flow. Restart is a full scene rebuild:
//! teardown here, fresh spawns from the OnEnter(Playing) systems.

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::assets::GameAssets;
use crate::gameplay::audio::MusicLoop;
use crate::gameplay::pipes::Pipe;
use crate::gameplay::player::Player;
use crate::gameplay::scoring::Score;

#[derive(Component)]
struct GameOverUiRoot;

#[derive(Component)]
pub struct RestartButton;

pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::GameOver), spawn_game_over_ui)
            .add_systems(
                Update,
                (restart_button_pressed, restart_key).run_if(in_state(AppState::GameOver)),
            )
            .add_systems(
                OnExit(AppState::GameOver),
                (despawn_game_over_ui, reset_session),
            );
    }
}

fn spawn_game_over_ui(mut commands: Commands, assets: Option<Res<GameAssets>>) {
    let image = match assets.as_ref() {
        Some(a) => a.sprites.restart_button.clone(),
        None => Default::default(),
    };
    commands
        .spawn((
            GameOverUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                RestartButton,
                Button,
                ImageNode::new(image),
                Node {
                    width: Val::Px(160.0),
                    height: Val::Px(80.0),
                    ..default()
                },
            ));
        });
}

fn restart_button_pressed(
    q_button: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for interaction in &q_button {
        if *interaction == Interaction::Pressed {
            info!(target: "flow", "restart requested");
            next_state.set(AppState::Playing);
        }
    }
}

fn restart_key(keys: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<AppState>>) {
    if keys.just_pressed(KeyCode::KeyR) {
        info!(target: "flow", "restart requested (keyboard)");
        next_state.set(AppState::Playing);
    }
}

fn despawn_game_over_ui(mut commands: Commands, q_root: Query<Entity, With<GameOverUiRoot>>) {
    for entity in &q_root {
        commands.entity(entity).despawn();
    }
}

/// Everything session-scoped goes: player, live pipes, music. The spawn
/// timer and a fresh player come back via the OnEnter(Playing) systems.
fn reset_session(
    mut commands: Commands,
    mut score: ResMut<Score>,
    q_session: Query<Entity, Or<(With<Player>, With<Pipe>, With<MusicLoop>)>>,
) {
    score.current = 0.0;
    for entity in &q_session {
        commands.entity(entity).despawn();
    }
    info!(target: "flow", "session reset; high score stands at {}", score.best);
}

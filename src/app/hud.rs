use bevy::prelude::*;

use crate::gameplay::scoring::Score;

#[derive(Component)]
struct ScoreText;
#[derive(Component)]
struct HighScoreText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, refresh_hud);
    }
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        ScoreText,
        Text::new("Score: 0"),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(16.0),
            ..default()
        },
    ));
    commands.spawn((
        HighScoreText,
        Text::new("High Score: 0"),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(50.0),
            ..default()
        },
    ));
}

/// Mirrors both values after every change, including the initial load of the
/// persisted best.
fn refresh_hud(
    score: Res<Score>,
    mut q_score: Query<&mut Text, (With<ScoreText>, Without<HighScoreText>)>,
    mut q_best: Query<&mut Text, (With<HighScoreText>, Without<ScoreText>)>,
) {
    if !score.is_changed() {
        return;
    }
    if let Ok(mut text) = q_score.single_mut() {
        *text = Text::new(format!("Score: {}", score.current));
    }
    if let Ok(mut text) = q_best.single_mut() {
        *text = Text::new(format!("High Score: {}", score.best));
    }
}

use bevy::prelude::*;

use crate::core::assets::GameAssets;
use crate::core::config::GameConfig;
use crate::core::system::system_order::AssetLoadSet;

/// One of the two wrap-around backdrop tiles.
#[derive(Component)]
struct BackgroundTile {
    width: f32,
}

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_background.after(AssetLoadSet))
            .add_systems(Update, scroll_background);
    }
}

fn spawn_background(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Option<Res<GameAssets>>,
) {
    let image = match assets.as_ref() {
        Some(a) => a.sprites.background.clone(),
        None => Default::default(),
    };
    let size = Vec2::new(cfg.window.width, cfg.window.height);
    for i in 0..2 {
        commands.spawn((
            Sprite {
                image: image.clone(),
                custom_size: Some(size),
                ..default()
            },
            // z=-10 keeps the backdrop behind every gameplay sprite.
            Transform::from_translation(Vec3::new(size.x * i as f32, 0.0, -10.0)),
            BackgroundTile { width: size.x },
        ));
    }
}

/// Scrolls in every state; the backdrop keeps drifting behind the game-over
/// screen just like the rest of the scene freezes in front of it.
fn scroll_background(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut q_tiles: Query<(&mut Transform, &BackgroundTile)>,
) {
    let dx = cfg.background.scroll_speed * time.delta_secs();
    for (mut tf, tile) in &mut q_tiles {
        tf.translation.x -= dx;
        if tf.translation.x <= -tile.width {
            tf.translation.x += tile.width * 2.0;
        }
    }
}

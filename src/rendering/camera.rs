use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::config::GameConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// The whole playfield always fits in view; larger windows letterbox rather
/// than reveal extra world.
fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: cfg.window.width,
                min_height: cfg.window.height,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

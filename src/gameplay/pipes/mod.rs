//! Obstacle spawner: a repeating timer emits top/bottom pipe pairs past the
//! right edge; rapier scrolls them left until cleanup despawns them.

pub mod geometry;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::assets::GameAssets;
use crate::core::config::GameConfig;
use crate::core::system::system_order::RulesSet;
use geometry::PairLayout;

#[derive(Component)]
pub struct Pipe;

/// Present once the player has passed this pipe; blocks further increments.
#[derive(Component)]
pub struct Passed;

#[derive(Resource, Deref, DerefMut)]
pub struct PipeSpawnTimer(pub Timer);

pub struct PipesPlugin;

impl Plugin for PipesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), arm_spawn_timer)
            .add_systems(
                Update,
                (spawn_pipe_pairs, despawn_offscreen_pipes)
                    .run_if(in_state(AppState::Playing))
                    .before(RulesSet),
            );
    }
}

/// Fresh timer on every (re)entry into Playing, so a restart never inherits
/// the previous session's phase.
pub fn arm_spawn_timer(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(PipeSpawnTimer(Timer::from_seconds(
        cfg.pipes.spawn_interval,
        TimerMode::Repeating,
    )));
}

pub fn spawn_pipe_pairs(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<PipeSpawnTimer>,
    cfg: Res<GameConfig>,
    assets: Option<Res<GameAssets>>,
) {
    timer.tick(time.delta());
    if !timer.just_finished() {
        return;
    }

    let mut rng = rand::thread_rng();
    let layout = PairLayout::roll(&mut rng, &cfg.pipes, cfg.window.height);
    if layout.is_degenerate() {
        warn!(
            target: "pipes",
            "degenerate pair: gap={:.0} top={:.0} leaves bottom={:.0}",
            layout.gap, layout.top_height, layout.bottom_height
        );
    }

    let field = Vec2::new(cfg.window.width, cfg.window.height);
    let (top_image, bottom_image) = match assets.as_ref() {
        Some(a) => (a.sprites.top_pipe.clone(), a.sprites.bottom_pipe.clone()),
        None => Default::default(),
    };

    for (center, image) in [
        (layout.top_center(&cfg.pipes, field), top_image),
        (layout.bottom_center(&cfg.pipes, field), bottom_image),
    ] {
        commands.spawn((
            Sprite {
                image,
                custom_size: Some(Vec2::new(cfg.pipes.width, cfg.pipes.body_height)),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::KinematicVelocityBased,
            Collider::cuboid(cfg.pipes.width * 0.5, cfg.pipes.body_height * 0.5),
            Velocity::linear(Vec2::new(-cfg.pipes.speed, 0.0)),
            Sensor,
            Pipe,
        ));
    }
}

/// Bounds the live pipe set: anything fully past the left edge is removed.
pub fn despawn_offscreen_pipes(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    q_pipes: Query<(Entity, &Transform), With<Pipe>>,
) {
    let limit = -(cfg.window.width * 0.5 + cfg.pipes.cleanup_margin);
    for (entity, tf) in &q_pipes {
        if tf.translation.x < limit {
            commands.entity(entity).despawn();
        }
    }
}

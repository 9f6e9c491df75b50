use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::assets::GameAssets;
use crate::core::config::GameConfig;
use crate::core::system::system_order::{ImpulseSet, RulesSet};
use crate::gameplay::events::{FlapEvent, GameOverEvent, GameOverReason};
use crate::gameplay::pipes::Pipe;
use crate::gameplay::pipes::geometry::screen_to_world;

#[derive(Component)]
pub struct Player;

/// False once the crash handling for this life has run.
#[derive(Component, Deref, DerefMut)]
pub struct Alive(pub bool);

/// Cosmetic tilt in degrees, nose-up positive. A flap snaps it to the nose-up
/// limit; each frame afterwards it relaxes toward the nose-down limit. This is
/// a stateful easing, independent of the physics body (rotation is locked).
#[derive(Component, Deref, DerefMut)]
pub struct TiltAngle(pub f32);

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FlapEvent>()
            .add_event::<GameOverEvent>()
            // Normally registered by the rapier plugin; headless tests run
            // the collision detector without it.
            .add_event::<CollisionEvent>()
            .add_systems(OnEnter(AppState::Playing), spawn_player)
            .add_systems(
                Update,
                (
                    (relax_tilt, apply_flap, sync_tilt_transform)
                        .chain()
                        .in_set(ImpulseSet),
                    (watch_bounds, detect_pipe_collisions, trigger_game_over)
                        .chain()
                        .in_set(RulesSet),
                )
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnEnter(AppState::GameOver), mark_player_dead);
    }
}

pub fn spawn_player(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Option<Res<GameAssets>>,
) {
    let field = Vec2::new(cfg.window.width, cfg.window.height);
    let start = screen_to_world(Vec2::new(cfg.player.start_x, cfg.player.start_y), field);
    let image = match assets.as_ref() {
        Some(a) => a.sprites.player.clone(),
        None => Default::default(),
    };
    commands.spawn((
        Sprite {
            image,
            ..default()
        },
        // z=5 keeps the player in front of the pipe layer.
        Transform::from_translation(start.extend(5.0)),
        RigidBody::Dynamic,
        Collider::cuboid(cfg.player.hitbox_width * 0.5, cfg.player.hitbox_height * 0.5),
        Velocity::zero(),
        LockedAxes::ROTATION_LOCKED,
        ActiveEvents::COLLISION_EVENTS,
        Player,
        Alive(true),
        TiltAngle(0.0),
    ));
    info!(target: "player", "player spawned at ({:.0}, {:.0})", start.x, start.y);
}

fn apply_flap(
    mut flaps: EventReader<FlapEvent>,
    cfg: Res<GameConfig>,
    mut q_player: Query<(&mut Velocity, &mut TiltAngle, &Alive), With<Player>>,
) {
    if flaps.is_empty() {
        return;
    }
    flaps.clear();
    let Ok((mut vel, mut tilt, alive)) = q_player.single_mut() else {
        return;
    };
    if !alive.0 {
        return;
    }
    // Replaces, not adds to, any existing vertical velocity.
    vel.linvel.y = cfg.player.flap_speed;
    tilt.0 = cfg.player.flap_tilt;
}

/// One degree of tilt lost per frame until the dive limit. Deliberately
/// frame-based rather than time-based; the animation is a fixed-step easing.
fn relax_tilt(cfg: Res<GameConfig>, mut q_tilt: Query<&mut TiltAngle, With<Player>>) {
    for mut tilt in &mut q_tilt {
        tilt.0 = eased_tilt(tilt.0, cfg.player.tilt_step, cfg.player.max_dive_tilt);
    }
}

pub fn eased_tilt(current: f32, step: f32, max_dive: f32) -> f32 {
    (current - step).max(-max_dive)
}

fn sync_tilt_transform(mut q_player: Query<(&mut Transform, &TiltAngle), With<Player>>) {
    for (mut tf, tilt) in &mut q_player {
        tf.rotation = Quat::from_rotation_z(tilt.0.to_radians());
    }
}

/// Leaving the playfield vertically ends the life, same as a collision.
fn watch_bounds(
    cfg: Res<GameConfig>,
    q_player: Query<(&Transform, &Alive), With<Player>>,
    mut out: EventWriter<GameOverEvent>,
) {
    let Ok((tf, alive)) = q_player.single() else {
        return;
    };
    if !alive.0 {
        return;
    }
    let half_h = cfg.window.height * 0.5;
    if tf.translation.y.abs() > half_h {
        out.write(GameOverEvent {
            reason: GameOverReason::OutOfBounds,
        });
    }
}

fn detect_pipe_collisions(
    mut collisions: EventReader<CollisionEvent>,
    q_player: Query<(Entity, &Alive), With<Player>>,
    q_pipes: Query<(), With<Pipe>>,
    mut out: EventWriter<GameOverEvent>,
) {
    let Ok((player, alive)) = q_player.single() else {
        return;
    };
    if !alive.0 {
        return;
    }
    for ev in collisions.read() {
        let CollisionEvent::Started(a, b, _) = ev else {
            continue;
        };
        let other = if *a == player {
            *b
        } else if *b == player {
            *a
        } else {
            continue;
        };
        if q_pipes.contains(other) {
            out.write(GameOverEvent {
                reason: GameOverReason::PipeCollision,
            });
        }
    }
}

/// Collapses any number of same-frame crash reports into one transition.
fn trigger_game_over(
    mut events: EventReader<GameOverEvent>,
    q_player: Query<&Alive, With<Player>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(first) = events.read().next().copied() else {
        return;
    };
    events.clear();
    let Ok(alive) = q_player.single() else {
        return;
    };
    if !alive.0 {
        return;
    }
    info!(target: "flow", "game over: {:?}", first.reason);
    next_state.set(AppState::GameOver);
}

fn mark_player_dead(mut q_player: Query<(&mut Sprite, &mut Alive), With<Player>>) {
    let Ok((mut sprite, mut alive)) = q_player.single_mut() else {
        return;
    };
    alive.0 = false;
    // Crash tint.
    sprite.color = Color::srgb(1.0, 0.0, 0.0);
}

use std::{thread, time::Duration};

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_rapier2d::prelude::Velocity;

use sky_cat::gameplay::pipes::{Pipe, PipesPlugin};
use sky_cat::{AppState, GameConfig};

fn spawner_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<AppState>();
    app.insert_resource(cfg);
    app.add_plugins(PipesPlugin);
    app
}

#[test]
fn pairs_spawn_at_the_configured_column_and_speed() {
    let mut cfg = GameConfig::default();
    cfg.pipes.spawn_interval = 0.01;
    let mut app = spawner_app(cfg);

    app.update(); // arms the timer on entering Playing
    for _ in 0..3 {
        thread::sleep(Duration::from_millis(15));
        app.update();
    }

    let mut q = app.world_mut().query::<(&Transform, &Velocity, &Pipe)>();
    let pipes: Vec<(Vec3, Vec2)> = q
        .iter(app.world())
        .map(|(tf, vel, _)| (tf.translation, vel.linvel))
        .collect();

    assert!(!pipes.is_empty(), "spawner produced no pipes");
    assert_eq!(pipes.len() % 2, 0, "pipes always come in pairs");
    for (pos, vel) in pipes {
        // Screen x=700 over a 600-wide field is world x=400.
        assert_eq!(pos.x, 400.0);
        assert_eq!(vel, Vec2::new(-200.0, 0.0));
    }
}

#[test]
fn offscreen_pipes_are_cleaned_up() {
    let mut cfg = GameConfig::default();
    cfg.pipes.spawn_interval = 1000.0; // keep the spawner quiet
    let mut app = spawner_app(cfg);
    app.update();

    app.world_mut().spawn((Pipe, Transform::from_xyz(-500.0, 0.0, 0.0)));
    app.world_mut().spawn((Pipe, Transform::from_xyz(-300.0, 0.0, 0.0)));
    app.update();

    let mut q = app.world_mut().query_filtered::<&Transform, With<Pipe>>();
    let remaining: Vec<f32> = q.iter(app.world()).map(|tf| tf.translation.x).collect();
    // Cleanup limit is -(300 + 100); only the -500 pipe is past it.
    assert_eq!(remaining, vec![-300.0]);
}

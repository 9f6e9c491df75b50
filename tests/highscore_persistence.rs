use std::fs;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use sky_cat::core::persist::{HighScore, HighScorePlugin, HighScoreStore};
use sky_cat::{AppState, Score};

#[test]
fn save_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HighScoreStore::at(dir.path().join("nested").join("high_score.json"));
    store.save(&HighScore { best: 12.5 }).expect("save");
    assert_eq!(store.load(), HighScore { best: 12.5 });
}

#[test]
fn missing_file_loads_as_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HighScoreStore::at(dir.path().join("high_score.json"));
    assert_eq!(store.load(), HighScore::default());
}

#[test]
fn malformed_file_loads_as_zero_and_can_be_overwritten() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("high_score.json");
    fs::write(&path, "{ not json !").expect("write garbage");
    let store = HighScoreStore::at(&path);
    assert_eq!(store.load(), HighScore::default());

    store.save(&HighScore { best: 3.0 }).expect("save");
    assert_eq!(store.load(), HighScore { best: 3.0 });
}

fn persistence_app(store: HighScoreStore) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<AppState>();
    app.init_resource::<Score>();
    app.insert_resource(store);
    app.add_plugins(HighScorePlugin);
    app
}

#[test]
fn saved_best_seeds_the_session_score() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HighScoreStore::at(dir.path().join("high_score.json"));
    store.save(&HighScore { best: 5.0 }).expect("seed save");

    let mut app = persistence_app(store);
    app.update();

    let score = app.world().resource::<Score>();
    assert_eq!(score.best, 5.0);
    assert_eq!(score.current, 0.0);
}

#[test]
fn game_over_persists_a_new_best_and_never_lowers_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("high_score.json");
    let store = HighScoreStore::at(&path);
    store.save(&HighScore { best: 5.0 }).expect("seed save");

    let mut app = persistence_app(store.clone());
    app.update();

    // A run that beats the saved best.
    {
        let mut score = app.world_mut().resource_mut::<Score>();
        score.current = 7.0;
        score.best = 7.0;
    }
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::GameOver);
    app.update();
    assert_eq!(store.load(), HighScore { best: 7.0 });

    // A second session that scores lower must keep the recorded 7.0.
    let mut app2 = persistence_app(store.clone());
    app2.update();
    assert_eq!(app2.world().resource::<Score>().best, 7.0);
    {
        let mut score = app2.world_mut().resource_mut::<Score>();
        score.current = 2.0; // best stays 7.0
    }
    app2.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::GameOver);
    app2.update();
    assert_eq!(store.load(), HighScore { best: 7.0 });
}

//! High score persistence: one numeric value in a JSON file under the
//! platform data directory.

use anyhow::{Context, Result};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::app::state::AppState;
use crate::gameplay::scoring::Score;

pub const SAVE_FILE: &str = "high_score.json";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: f32,
}

/// Location of the save file. Inserted as a resource once discovered; tests
/// insert their own pointing at a temp directory.
#[derive(Resource, Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn from_project_dirs() -> Result<Self> {
        let dirs =
            ProjectDirs::from("", "", "sky_cat").context("no home directory for save data")?;
        Ok(Self::at(dirs.data_dir().join(SAVE_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means "no high score yet". A malformed file is ignored
    /// with a warning rather than crashing the session.
    pub fn load(&self) -> HighScore {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(_) => return HighScore::default(),
        };
        match serde_json::from_str(&text) {
            Ok(hs) => hs,
            Err(e) => {
                warn!(
                    target: "persist",
                    "ignoring malformed save file {}: {e}",
                    self.path.display()
                );
                HighScore::default()
            }
        }
    }

    pub fn save(&self, hs: &HighScore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create save dir {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(hs).context("encode high score")?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

pub struct HighScorePlugin;

impl Plugin for HighScorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_high_score)
            .add_systems(OnEnter(AppState::GameOver), save_high_score);
    }
}

/// Reads the saved best once at session start. The saved value only ever
/// raises the running best, keeping the high score monotone across sessions.
fn load_high_score(
    mut commands: Commands,
    store: Option<Res<HighScoreStore>>,
    mut score: ResMut<Score>,
) {
    let store = match store {
        Some(s) => (*s).clone(),
        None => match HighScoreStore::from_project_dirs() {
            Ok(s) => {
                commands.insert_resource(s.clone());
                s
            }
            Err(e) => {
                warn!(target: "persist", "high score persistence disabled: {e:#}");
                return;
            }
        },
    };
    let saved = store.load();
    if saved.best > score.best {
        score.best = saved.best;
    }
    info!(
        target: "persist",
        "high score {} (save file {})",
        score.best,
        store.path().display()
    );
}

fn save_high_score(store: Option<Res<HighScoreStore>>, score: Res<Score>) {
    let Some(store) = store else { return };
    match store.save(&HighScore { best: score.best }) {
        Ok(()) => info!(target: "persist", "saved high score {}", score.best),
        Err(e) => warn!(target: "persist", "failed to save high score: {e:#}"),
    }
}

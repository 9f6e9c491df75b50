use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Seconds until the app exits on its own; 0 disables. Used by headless runs.
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            title: "Sky Cat".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -1000.0 }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start position in screen coordinates (origin top-left of the playfield).
    pub start_x: f32,
    pub start_y: f32,
    /// Collision hitbox, deliberately smaller than the sprite.
    pub hitbox_width: f32,
    pub hitbox_height: f32,
    /// Upward velocity applied by one flap, px/s.
    pub flap_speed: f32,
    /// Nose-up tilt snapped on flap, degrees.
    pub flap_tilt: f32,
    /// Maximum nose-down tilt the dive easing relaxes toward, degrees.
    pub max_dive_tilt: f32,
    /// Degrees of tilt lost per frame while diving.
    pub tilt_step: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: 100.0,
            start_y: 300.0,
            hitbox_width: 10.0,
            hitbox_height: 10.0,
            flap_speed: 350.0,
            flap_tilt: 30.0,
            max_dive_tilt: 30.0,
            tilt_step: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PipeConfig {
    /// Seconds between pair spawns.
    pub spawn_interval: f32,
    /// Spawn column in screen coordinates (past the right edge).
    pub spawn_x: f32,
    /// Leftward scroll speed shared by both pipes of a pair, px/s.
    pub speed: f32,
    pub width: f32,
    /// Fixed body length of a pipe sprite; anchored at its gap edge.
    pub body_height: f32,
    pub gap_range: SpawnRange<f32>,
    pub top_height_range: SpawnRange<f32>,
    /// Extra margin past the left edge before an off-screen pipe is despawned.
    pub cleanup_margin: f32,
}
impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            spawn_interval: 1.5,
            spawn_x: 700.0,
            speed: 200.0,
            width: 64.0,
            body_height: 400.0,
            gap_range: SpawnRange {
                min: 100.0,
                max: 200.0,
            },
            top_height_range: SpawnRange {
                min: 50.0,
                max: 200.0,
            },
            cleanup_margin: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Added once per obstacle the instant the player passes it.
    pub increment: f32,
}
impl Default for ScoringConfig {
    fn default() -> Self {
        Self { increment: 0.5 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub effects_volume: f32,
    pub music_volume: f32,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            effects_volume: 1.0,
            music_volume: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Leftward scroll speed of the tiled backdrop, px/s.
    pub scroll_speed: f32,
}
impl Default for BackgroundConfig {
    fn default() -> Self {
        Self { scroll_speed: 240.0 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub player: PlayerConfig,
    pub pipes: PipeConfig,
    pub scoring: ScoringConfig,
    pub audio: AudioConfig,
    pub background: BackgroundConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            player: Default::default(),
            pipes: Default::default(),
            scoring: Default::default(),
            audio: Default::default(),
            background: Default::default(),
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merge any number of RON layers over the defaults. Later layers win per
    /// key. Returns the config, the layers that applied, and accumulated
    /// read/parse errors (never fatal).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        if let Some(val) = merged {
            match val.clone().into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (GameConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (GameConfig::default(), used, errors)
        }
    }

    /// Advisory warnings only; the game always starts.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.auto_close {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.gravity.y >= 0.0 {
            w.push(format!(
                "gravity.y is {} (non-negative); the player will never fall",
                self.gravity.y
            ));
        }
        if self.gravity.y < -5000.0 {
            w.push(format!(
                "gravity.y very large magnitude ({}); flight may be uncontrollable",
                self.gravity.y
            ));
        }
        if self.player.flap_speed <= 0.0 {
            w.push("player.flap_speed must be > 0".into());
        }
        if self.player.hitbox_width <= 0.0 || self.player.hitbox_height <= 0.0 {
            w.push("player hitbox dimensions must be > 0".into());
        }
        if self.player.tilt_step <= 0.0 {
            w.push("player.tilt_step must be > 0 for the dive easing to act".into());
        }
        if self.player.max_dive_tilt < 0.0 || self.player.flap_tilt < 0.0 {
            w.push("tilt angles are magnitudes and must be >= 0".into());
        }
        if self.pipes.spawn_interval <= 0.0 {
            w.push("pipes.spawn_interval must be > 0".into());
        }
        if self.pipes.speed <= 0.0 {
            w.push(format!(
                "pipes.speed {} must be > 0 (pipes scroll leftward)",
                self.pipes.speed
            ));
        }
        if self.pipes.width <= 0.0 || self.pipes.body_height <= 0.0 {
            w.push("pipe dimensions must be > 0".into());
        }
        if self.pipes.spawn_x <= self.window.width {
            w.push(format!(
                "pipes.spawn_x {} inside the visible field (width {}); pairs pop in on-screen",
                self.pipes.spawn_x, self.window.width
            ));
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!(
                    "{label} min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
            if (r.max - r.min).abs() < f32::EPSILON {
                w.push(format!("{label} min == max ({}) -> zero variation", r.min));
            }
        }
        check_range_f32(&mut w, "pipes.gap_range", &self.pipes.gap_range);
        check_range_f32(&mut w, "pipes.top_height_range", &self.pipes.top_height_range);
        if self.pipes.gap_range.min <= 0.0 {
            w.push("pipes.gap_range.min must be > 0".into());
        }
        if self.scoring.increment <= 0.0 {
            w.push("scoring.increment must be > 0".into());
        }
        if !(0.0..=2.0).contains(&self.audio.effects_volume) {
            w.push(format!(
                "audio.effects_volume {} outside 0..2",
                self.audio.effects_volume
            ));
        }
        if !(0.0..=2.0).contains(&self.audio.music_volume) {
            w.push(format!(
                "audio.music_volume {} outside 0..2",
                self.audio.music_volume
            ));
        }
        if self.background.scroll_speed < 0.0 {
            w.push("background.scroll_speed negative -> backdrop scrolls the wrong way".into());
        }
        w
    }
}

pub mod config;

pub use config::{
    AudioConfig, BackgroundConfig, GameConfig, GravityConfig, PipeConfig, PlayerConfig,
    ScoringConfig, SpawnRange, WindowConfig,
};

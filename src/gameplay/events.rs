use bevy::prelude::*;

/// One discrete flap request from the input layer.
#[derive(Event, Debug, Clone, Copy)]
pub struct FlapEvent;

/// Emitted once per obstacle passed, after the score was bumped.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScoredEvent {
    pub total: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    PipeCollision,
    OutOfBounds,
}

/// Requests the Playing -> GameOver transition. May fire from several
/// detectors in one frame; the transition itself happens at most once.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameOverEvent {
    pub reason: GameOverReason,
}

use bevy::prelude::*;

/// Session lifecycle state.
/// Playing -> GameOver on crash; GameOver -> Playing only via the restart affordance.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Active flight: physics running, spawner armed, input accepted.
    #[default]
    Playing,
    /// Terminal state: physics halted, restart button visible, high score saved.
    GameOver,
}

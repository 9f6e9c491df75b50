#[cfg(feature = "debug")]
pub mod logging;

use bevy::prelude::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(feature = "debug")]
        app.add_systems(Update, logging::log_session_stats);
        #[cfg(not(feature = "debug"))]
        let _ = app;
    }
}

//! Rapier wiring: arcade-style gravity from config, and a hard pause of the
//! whole simulation while the game-over screen is up.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;

pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        // World units are pixels; gravity and velocities are configured in
        // px/s² and px/s directly.
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Update, apply_gravity_config)
            .add_systems(OnEnter(AppState::GameOver), halt_simulation)
            .add_systems(OnEnter(AppState::Playing), resume_simulation);

        #[cfg(feature = "debug")]
        {
            let enabled = app
                .world()
                .get_resource::<GameConfig>()
                .map(|c| c.rapier_debug)
                .unwrap_or(false);
            app.add_plugins(RapierDebugRenderPlugin {
                enabled,
                ..Default::default()
            });
        }
    }
}

/// Keeps the rapier context in sync with the config resource. The context
/// entity only exists after plugin init, hence a polling system rather than
/// a Startup hook.
fn apply_gravity_config(cfg: Res<GameConfig>, mut q_rapier: Query<&mut RapierConfiguration>) {
    let Ok(mut rapier_cfg) = q_rapier.single_mut() else {
        return;
    };
    let target = Vect::new(0.0, cfg.gravity.y);
    if rapier_cfg.gravity != target {
        rapier_cfg.gravity = target;
    }
}

/// Stops gravity integration and pipe motion in one switch; entities keep
/// their positions for the game-over tableau.
fn halt_simulation(mut q_rapier: Query<&mut RapierConfiguration>) {
    if let Ok(mut rapier_cfg) = q_rapier.single_mut() {
        rapier_cfg.physics_pipeline_active = false;
    }
}

fn resume_simulation(mut q_rapier: Query<&mut RapierConfiguration>) {
    if let Ok(mut rapier_cfg) = q_rapier.single_mut() {
        rapier_cfg.physics_pipeline_active = true;
    }
}

use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Armed only when `window.auto_close` is positive; lets smoke runs and
/// demo recordings end without input.
#[derive(Resource, Deref, DerefMut)]
struct ExitDeadline(Timer);

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_exit_deadline)
            .add_systems(Update, enforce_exit_deadline);
    }
}

fn arm_exit_deadline(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "session", "exiting automatically after {secs} seconds");
        commands.insert_resource(ExitDeadline(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn enforce_exit_deadline(
    time: Res<Time>,
    mut deadline: Option<ResMut<ExitDeadline>>,
    mut exit: EventWriter<AppExit>,
) {
    if let Some(deadline) = deadline.as_mut() {
        deadline.tick(time.delta());
        if deadline.finished() {
            info!(target: "session", "auto-close deadline reached");
            exit.write(AppExit::Success);
        }
    }
}

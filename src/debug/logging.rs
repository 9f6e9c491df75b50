use bevy::prelude::*;

use crate::app::state::AppState;
use crate::gameplay::pipes::Pipe;
use crate::gameplay::player::Player;
use crate::gameplay::scoring::Score;

/// Once-a-second session summary for soak runs and bug reports.
pub fn log_session_stats(
    time: Res<Time>,
    mut accum: Local<f32>,
    state: Res<State<AppState>>,
    score: Res<Score>,
    q_pipes: Query<(), With<Pipe>>,
    q_player: Query<&Transform, With<Player>>,
) {
    *accum += time.delta_secs();
    if *accum < 1.0 {
        return;
    }
    *accum = 0.0;
    let player_y = q_player
        .single()
        .map(|tf| tf.translation.y)
        .unwrap_or(f32::NAN);
    info!(
        "SIM state={:?} score={} best={} pipes={} player_y={:.0}",
        state.get(),
        score.current,
        score.best,
        q_pipes.iter().count(),
        player_y
    );
}

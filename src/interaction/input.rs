use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::system::system_order::InputSet;
use crate::gameplay::events::FlapEvent;

pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FlapEvent>().add_systems(
            Update,
            flap_input
                .in_set(InputSet)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

/// Mouse click and space are equivalent; both collapse into one intent event.
fn flap_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut out: EventWriter<FlapEvent>,
) {
    if mouse.just_pressed(MouseButton::Left) || keys.just_pressed(KeyCode::Space) {
        out.write(FlapEvent);
    }
}

//! Core plugin that sets up simulation state, phase ordering and events.

use bevy::prelude::*;

use super::config::load_tunables;
use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - The `Playing`/`Paused` simulation state
/// - The chained [`SimSet`] phases inside `Update`
/// - Cross-plugin events (triggers, foot contacts, plate changes)
/// - Tunables loading
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()

            // Register events
            .add_event::<TriggerEvent>()
            .add_event::<FootContact>()
            .add_event::<PlateChanged>()
            .add_event::<DoorOpened>()
            .add_event::<LadderDropped>()

            // One tick = these phases, strictly in order
            .configure_sets(
                Update,
                (
                    SimSet::Input,
                    SimSet::Logic,
                    SimSet::Physics,
                    SimSet::Callbacks,
                    SimSet::Presentation,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )

            .add_systems(PreStartup, load_tunables)

            // Pause/unpause with Escape key
            .add_systems(Update, handle_pause_input);
    }
}

/// Handle Escape key to pause/unpause the simulation.
fn handle_pause_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            GameState::Playing => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::Playing),
        }
    }
}

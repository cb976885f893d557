//! Plate systems - press counting from trigger events and actuator dispatch.

use bevy::prelude::*;

use super::components::PressurePlate;
use super::network::{PlateChange, PlateNetwork};
use crate::core::{ContactPhase, DoorOpened, LadderDropped, PlateChanged, TriggerEvent};
use crate::world::{Door, Ladder};

/// Feed plate trigger events into the network and notify subscribed actuators.
///
/// Notifications are delivered synchronously during each recompute, so an
/// actuator bound to several plates sees the network mid-ripple exactly as
/// the plates change.
#[allow(clippy::too_many_arguments)]
pub fn handle_plate_triggers(
    mut triggers: EventReader<TriggerEvent>,
    plates: Query<&PressurePlate>,
    mut network: ResMut<PlateNetwork>,
    mut doors: Query<&mut Door>,
    mut ladders: Query<&mut Ladder>,
    mut plate_changed: EventWriter<PlateChanged>,
    mut door_opened: EventWriter<DoorOpened>,
    mut ladder_dropped: EventWriter<LadderDropped>,
) {
    for trigger in triggers.read() {
        let Ok(plate) = plates.get(trigger.zone) else {
            continue;
        };

        let mut notify = |subscriber: Entity, change: PlateChange, network: &PlateNetwork| {
            if let Ok(mut door) = doors.get_mut(subscriber) {
                if door.on_plate_changed(network) {
                    info!("Door {:?} opening", subscriber);
                    door_opened.send(DoorOpened { door: subscriber });
                }
            } else if let Ok(mut ladder) = ladders.get_mut(subscriber) {
                if ladder.on_plate_changed(change.state) {
                    info!("Ladder {:?} dropping", subscriber);
                    ladder_dropped.send(LadderDropped { ladder: subscriber });
                }
            } else {
                debug!("Plate {} subscriber {:?} no longer exists", change.plate, subscriber);
            }
        };

        match trigger.phase {
            ContactPhase::Enter => network.press(plate.id, trigger.category, &mut notify),
            ContactPhase::Exit => network.release(plate.id, trigger.category, &mut notify),
        };
    }

    for change in network.take_changes() {
        plate_changed.send(PlateChanged {
            plate: change.plate,
            state: change.state,
        });
    }
}

/// Select each plate's visual slot from its latest broadcast.
pub fn sync_plate_visuals(
    mut changes: EventReader<PlateChanged>,
    mut plates: Query<&mut PressurePlate>,
) {
    for change in changes.read() {
        for mut plate in plates.iter_mut().filter(|plate| plate.id == change.plate) {
            plate.visual_slot = change.state.visual_slot();
        }
    }
}

//! Plate network: solo and combined sensors wired into a propagation tree.
//!
//! Combined plates subscribe to their children, so a single press ripples
//! upward one recompute per level. Actuators subscribe by entity and are
//! notified synchronously through a [`PlateListener`] while the ripple is in
//! progress.

use std::collections::VecDeque;
use std::fmt;

use bevy::prelude::*;
use bevy_rapier2d::prelude::Group;

use super::error::NetworkError;
use super::sensor::{PlateState, Sensor};

/// Index of a sensor inside its [`PlateNetwork`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlateId(usize);

impl PlateId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something notified when a sensor broadcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscriber {
    /// A combined plate that recomputes from its children
    Plate(PlateId),
    /// An actuator entity (door, ladder)
    Actuator(Entity),
}

/// A broadcast: `plate` changed to `state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateChange {
    pub plate: PlateId,
    pub state: PlateState,
}

/// Observer interface for actuator subscribers.
///
/// Called synchronously from inside the recompute that produced `change`.
/// `network` reflects every sensor recomputed so far in this ripple.
pub trait PlateListener {
    fn on_plate_changed(
        &mut self,
        subscriber: Entity,
        change: PlateChange,
        network: &PlateNetwork,
    );
}

impl<F> PlateListener for F
where
    F: FnMut(Entity, PlateChange, &PlateNetwork),
{
    fn on_plate_changed(
        &mut self,
        subscriber: Entity,
        change: PlateChange,
        network: &PlateNetwork,
    ) {
        self(subscriber, change, network)
    }
}

/// All sensors of a scene. Built once by [`PlateNetworkBuilder`].
#[derive(Resource, Debug, Default)]
pub struct PlateNetwork {
    sensors: Vec<Sensor>,
    changes: Vec<PlateChange>,
}

impl PlateNetwork {
    pub fn builder() -> PlateNetworkBuilder {
        PlateNetworkBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn get(&self, id: PlateId) -> Option<&Sensor> {
        self.sensors.get(id.0)
    }

    pub fn state(&self, id: PlateId) -> Option<PlateState> {
        self.get(id).map(Sensor::state)
    }

    /// True if every listed plate is currently `Full`. Unknown ids veto.
    pub fn all_full(&self, plates: &[PlateId]) -> bool {
        plates
            .iter()
            .all(|&id| self.state(id).is_some_and(PlateState::is_full))
    }

    /// Register an actuator to be notified of `plate`'s broadcasts.
    pub fn subscribe(&mut self, plate: PlateId, actuator: Entity) -> Result<(), NetworkError> {
        let sensor = self
            .sensors
            .get_mut(plate.0)
            .ok_or(NetworkError::UnknownPlate(plate))?;
        sensor.subscribers.push(Subscriber::Actuator(actuator));
        Ok(())
    }

    /// A shape of `category` entered `plate`.
    ///
    /// Returns false if the plate is unknown or the press was ignored.
    pub fn press<L>(&mut self, plate: PlateId, category: Group, listener: &mut L) -> bool
    where
        L: PlateListener + ?Sized,
    {
        let Some(sensor) = self.sensors.get_mut(plate.0) else {
            return false;
        };
        let counted = !sensor.is_combined() && category.intersects(sensor.pressing_mask());
        if sensor.register_enter(category) {
            self.recompute(plate, listener);
        }
        counted
    }

    /// A shape of `category` left `plate`.
    pub fn release<L>(&mut self, plate: PlateId, category: Group, listener: &mut L) -> bool
    where
        L: PlateListener + ?Sized,
    {
        let Some(sensor) = self.sensors.get_mut(plate.0) else {
            return false;
        };
        let counted = !sensor.is_combined() && category.intersects(sensor.pressing_mask());
        if sensor.register_exit(category) {
            self.recompute(plate, listener);
        }
        counted
    }

    /// Drain every broadcast made since the last call, in emission order.
    pub fn take_changes(&mut self) -> Vec<PlateChange> {
        std::mem::take(&mut self.changes)
    }

    fn derive(&self, id: PlateId) -> PlateState {
        let sensor = &self.sensors[id.0];
        if !sensor.is_combined() {
            return sensor.solo_state();
        }
        let children = sensor.children();
        let active = children
            .iter()
            .filter(|child| self.sensors[child.0].state().is_full())
            .count();
        PlateState::from_counts(active, children.len())
    }

    fn recompute<L>(&mut self, id: PlateId, listener: &mut L)
    where
        L: PlateListener + ?Sized,
    {
        let derived = self.derive(id);
        let Some(state) = self.sensors[id.0].apply(derived) else {
            return;
        };

        debug!("Plate {} changed to {:?}", id, state);
        let change = PlateChange { plate: id, state };
        self.changes.push(change);

        for i in 0..self.sensors[id.0].subscribers.len() {
            match self.sensors[id.0].subscribers[i] {
                Subscriber::Plate(parent) => self.recompute(parent, listener),
                Subscriber::Actuator(entity) => listener.on_plate_changed(entity, change, self),
            }
        }
    }
}

#[derive(Debug, Clone)]
enum NodeSpec {
    Solo { pressing_mask: Group },
    Combined { children: Vec<PlateId> },
}

/// Declares sensors and their combinations, then validates the result.
#[derive(Debug, Default, Clone)]
pub struct PlateNetworkBuilder {
    nodes: Vec<NodeSpec>,
}

impl PlateNetworkBuilder {
    /// Declare a solo plate pressed by shapes in `pressing_mask`.
    pub fn add_solo(&mut self, pressing_mask: Group) -> PlateId {
        self.nodes.push(NodeSpec::Solo { pressing_mask });
        PlateId(self.nodes.len() - 1)
    }

    /// Declare a combined plate over `children`.
    pub fn add_combined(&mut self, children: impl IntoIterator<Item = PlateId>) -> PlateId {
        self.nodes.push(NodeSpec::Combined {
            children: children.into_iter().collect(),
        });
        PlateId(self.nodes.len() - 1)
    }

    /// Replace the children of an already declared plate, turning it into a
    /// combined plate. Forward references are allowed and checked by
    /// [`Self::build`].
    pub fn set_children(
        &mut self,
        plate: PlateId,
        children: impl IntoIterator<Item = PlateId>,
    ) -> Result<&mut Self, NetworkError> {
        let node = self
            .nodes
            .get_mut(plate.0)
            .ok_or(NetworkError::UnknownPlate(plate))?;
        *node = NodeSpec::Combined {
            children: children.into_iter().collect(),
        };
        Ok(self)
    }

    /// Validate and build the network.
    ///
    /// Every sensor gets its silent initial computation here, children
    /// before parents, so combined plates start from their children's state.
    pub fn build(self) -> Result<PlateNetwork, NetworkError> {
        let count = self.nodes.len();
        let mut parents: Vec<Vec<PlateId>> = vec![Vec::new(); count];
        let mut pending_children = vec![0usize; count];

        for (index, node) in self.nodes.iter().enumerate() {
            let NodeSpec::Combined { children } = node else {
                continue;
            };
            if children.is_empty() {
                return Err(NetworkError::EmptyCombination(PlateId(index)));
            }
            for child in children {
                if child.0 >= count {
                    return Err(NetworkError::UnknownPlate(*child));
                }
                parents[child.0].push(PlateId(index));
                pending_children[index] += 1;
            }
        }

        // Kahn's algorithm over child -> parent edges
        let mut ready: VecDeque<usize> = (0..count).filter(|&i| pending_children[i] == 0).collect();
        let mut order = Vec::with_capacity(count);
        while let Some(index) = ready.pop_front() {
            order.push(PlateId(index));
            for parent in &parents[index] {
                pending_children[parent.0] -= 1;
                if pending_children[parent.0] == 0 {
                    ready.push_back(parent.0);
                }
            }
        }
        if order.len() < count {
            let plates = (0..count)
                .filter(|&i| pending_children[i] > 0)
                .map(PlateId)
                .collect();
            return Err(NetworkError::Cycle { plates });
        }

        let sensors = self
            .nodes
            .into_iter()
            .map(|node| match node {
                NodeSpec::Solo { pressing_mask } => Sensor::solo(pressing_mask),
                NodeSpec::Combined { children } => Sensor::combined(children),
            })
            .collect();
        let mut network = PlateNetwork {
            sensors,
            changes: Vec::new(),
        };

        for (child, plate_parents) in parents.into_iter().enumerate() {
            network.sensors[child]
                .subscribers
                .extend(plate_parents.into_iter().map(Subscriber::Plate));
        }

        let mut silent = |_: Entity, _: PlateChange, _: &PlateNetwork| {};
        for id in order {
            network.recompute(id, &mut silent);
        }

        info!("Built plate network with {} plates", network.len());
        Ok(network)
    }
}

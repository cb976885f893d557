//! Single pressure plate: press counting and state derivation.

use bevy_rapier2d::prelude::Group;

use super::network::{PlateId, Subscriber};
use crate::core::layers;

/// Derived plate state. The discriminant is the broadcast value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PlateState {
    /// Nothing pressed
    #[default]
    Off = 0,
    /// Some but not all children pressed (combined plates only)
    Partial = 1,
    /// Solo plate pressed, or every child fully on
    Full = 2,
}

impl PlateState {
    /// Derive a state from `active` of `total` inputs being on.
    ///
    /// A zero total is treated as `Off` rather than dividing into it.
    pub fn from_counts(active: usize, total: usize) -> Self {
        if total == 0 || active == 0 {
            PlateState::Off
        } else if active >= total {
            PlateState::Full
        } else {
            PlateState::Partial
        }
    }

    /// The integer sent to listeners.
    pub fn as_int(self) -> u8 {
        self as u8
    }

    /// Which of the three fixed visual slots this state shows.
    pub fn visual_slot(self) -> usize {
        self as usize
    }

    pub fn is_full(self) -> bool {
        self == PlateState::Full
    }
}

/// One node of a [`super::PlateNetwork`].
///
/// A sensor without children runs in solo mode and counts presses. A sensor
/// with children runs in combined mode and ignores presses entirely.
#[derive(Debug, Clone)]
pub struct Sensor {
    pressing_mask: Group,
    press_count: u32,
    children: Vec<PlateId>,
    last_state: PlateState,
    initialized: bool,
    pub(super) subscribers: Vec<Subscriber>,
}

impl Sensor {
    pub(super) fn solo(pressing_mask: Group) -> Self {
        Self {
            pressing_mask,
            press_count: 0,
            children: Vec::new(),
            last_state: PlateState::Off,
            initialized: false,
            subscribers: Vec::new(),
        }
    }

    pub(super) fn combined(children: Vec<PlateId>) -> Self {
        Self {
            children,
            ..Self::solo(Group::empty())
        }
    }

    pub fn is_combined(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn children(&self) -> &[PlateId] {
        &self.children
    }

    pub fn pressing_mask(&self) -> Group {
        self.pressing_mask
    }

    pub fn press_count(&self) -> u32 {
        self.press_count
    }

    pub fn state(&self) -> PlateState {
        self.last_state
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    /// Count a qualifying shape entering. Returns true when a recompute is due.
    pub(super) fn register_enter(&mut self, category: Group) -> bool {
        if self.is_combined() || !layers::matches(category, self.pressing_mask) {
            return false;
        }
        self.press_count += 1;
        self.press_count == 1
    }

    /// Count a qualifying shape leaving. Returns true when a recompute is due.
    pub(super) fn register_exit(&mut self, category: Group) -> bool {
        if self.is_combined() || !layers::matches(category, self.pressing_mask) {
            return false;
        }
        let was_pressed = self.press_count > 0;
        self.press_count = self.press_count.saturating_sub(1);
        was_pressed && self.press_count == 0
    }

    /// Solo derivation. Combined sensors are derived by the network.
    pub(super) fn solo_state(&self) -> PlateState {
        if self.press_count > 0 {
            PlateState::Full
        } else {
            PlateState::Off
        }
    }

    /// Store a freshly derived state.
    ///
    /// Returns the state to broadcast, if any. The first call only
    /// initializes and never broadcasts.
    pub(super) fn apply(&mut self, derived: PlateState) -> Option<PlateState> {
        if self.initialized && derived == self.last_state {
            return None;
        }
        self.last_state = derived;

        if self.initialized {
            Some(derived)
        } else {
            self.initialized = true;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layers::{CRATE, GROUND, PLAYER_FOOT};

    #[test]
    fn from_counts_covers_all_ranges() {
        assert_eq!(PlateState::from_counts(0, 3), PlateState::Off);
        assert_eq!(PlateState::from_counts(1, 3), PlateState::Partial);
        assert_eq!(PlateState::from_counts(2, 3), PlateState::Partial);
        assert_eq!(PlateState::from_counts(3, 3), PlateState::Full);
    }

    #[test]
    fn zero_children_never_divides() {
        assert_eq!(PlateState::from_counts(0, 0), PlateState::Off);
        assert_eq!(PlateState::from_counts(1, 0), PlateState::Off);
    }

    #[test]
    fn broadcast_values_are_stable() {
        assert_eq!(PlateState::Off.as_int(), 0);
        assert_eq!(PlateState::Partial.as_int(), 1);
        assert_eq!(PlateState::Full.as_int(), 2);
    }

    #[test]
    fn only_masked_categories_press() {
        let mut sensor = Sensor::solo(PLAYER_FOOT | CRATE);
        assert!(!sensor.register_enter(GROUND));
        assert_eq!(sensor.press_count(), 0);
        assert!(sensor.register_enter(CRATE));
        assert!(!sensor.register_enter(PLAYER_FOOT));
        assert_eq!(sensor.press_count(), 2);
    }

    #[test]
    fn exit_floors_at_zero() {
        let mut sensor = Sensor::solo(CRATE);
        assert!(!sensor.register_exit(CRATE));
        assert_eq!(sensor.press_count(), 0);
        sensor.register_enter(CRATE);
        assert!(sensor.register_exit(CRATE));
        assert!(!sensor.register_exit(CRATE));
        assert_eq!(sensor.press_count(), 0);
    }

    #[test]
    fn first_apply_is_silent() {
        let mut sensor = Sensor::solo(CRATE);
        assert!(!sensor.is_initialized());
        assert_eq!(sensor.apply(PlateState::Off), None);
        assert!(sensor.is_initialized());
        assert_eq!(sensor.apply(PlateState::Off), None);
        assert_eq!(sensor.apply(PlateState::Full), Some(PlateState::Full));
        assert_eq!(sensor.apply(PlateState::Full), None);
    }

    #[test]
    fn combined_sensor_ignores_presses() {
        let mut sensor = Sensor::combined(vec![PlateId::new(0)]);
        assert!(!sensor.register_enter(CRATE));
        assert_eq!(sensor.press_count(), 0);
    }
}

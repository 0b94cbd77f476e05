//! Guest behavior states

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::ResourceKind;
use crate::spatial::area::{Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Drifting around the room
    #[default]
    Wandering,
    /// Standing around; idle like `Wandering` but nothing enters it yet
    Hanging,
    GettingFood,
    GettingDrink,
    /// Reserved; nothing enters or handles it
    PassedOut,
    /// Walking to the door
    Leaving,
    /// Out of the door, dropped from the roster on the next tick
    Left,
}

impl BehaviorState {
    /// States from which needs or a wish to leave can start a new errand
    pub fn is_idle(&self) -> bool {
        matches!(self, BehaviorState::Wandering | BehaviorState::Hanging)
    }

    /// States the per-tick update skips entirely
    pub fn is_departing(&self) -> bool {
        matches!(self, BehaviorState::Leaving | BehaviorState::Left)
    }

    /// State a guest enters when heading for a resource
    pub fn fetching(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Food => BehaviorState::GettingFood,
            ResourceKind::Drinks => BehaviorState::GettingDrink,
        }
    }

    /// Area a guest in this state is walking toward, if any
    pub fn destination<'a>(&self, layout: &'a Layout) -> Option<&'a Rect> {
        match self {
            BehaviorState::GettingFood => Some(&layout.food_station),
            BehaviorState::GettingDrink => Some(&layout.drink_station),
            BehaviorState::Leaving => Some(&layout.door),
            BehaviorState::Wandering
            | BehaviorState::Hanging
            | BehaviorState::PassedOut
            | BehaviorState::Left => None,
        }
    }

    /// State entered once the destination is reached
    pub fn on_arrival(&self) -> Self {
        match self {
            BehaviorState::Leaving => BehaviorState::Left,
            _ => BehaviorState::Wandering,
        }
    }
}

impl fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BehaviorState::Wandering => "wandering",
            BehaviorState::Hanging => "hanging",
            BehaviorState::GettingFood => "getting food",
            BehaviorState::GettingDrink => "getting drink",
            BehaviorState::PassedOut => "passed out",
            BehaviorState::Leaving => "leaving",
            BehaviorState::Left => "left",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_states() {
        assert!(BehaviorState::Wandering.is_idle());
        assert!(BehaviorState::Hanging.is_idle());
        assert!(!BehaviorState::GettingFood.is_idle());
        assert!(!BehaviorState::PassedOut.is_idle());
        assert!(!BehaviorState::Leaving.is_idle());
    }

    #[test]
    fn test_destinations() {
        let layout = Layout::default();
        assert_eq!(
            BehaviorState::GettingFood.destination(&layout),
            Some(&layout.food_station)
        );
        assert_eq!(
            BehaviorState::GettingDrink.destination(&layout),
            Some(&layout.drink_station)
        );
        assert_eq!(BehaviorState::Leaving.destination(&layout), Some(&layout.door));
        assert_eq!(BehaviorState::Wandering.destination(&layout), None);
        assert_eq!(BehaviorState::Hanging.destination(&layout), None);
    }

    #[test]
    fn test_arrival_transitions() {
        assert_eq!(BehaviorState::Leaving.on_arrival(), BehaviorState::Left);
        assert_eq!(BehaviorState::GettingFood.on_arrival(), BehaviorState::Wandering);
        assert_eq!(BehaviorState::GettingDrink.on_arrival(), BehaviorState::Wandering);
    }

    #[test]
    fn test_fetching() {
        assert_eq!(BehaviorState::fetching(ResourceKind::Food), BehaviorState::GettingFood);
        assert_eq!(BehaviorState::fetching(ResourceKind::Drinks), BehaviorState::GettingDrink);
    }
}

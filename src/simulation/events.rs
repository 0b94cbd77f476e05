//! Events produced while the party advances

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{GuestId, ResourceKind, Tick};

/// Why the party ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Fewer than a third of the invited guests are still around
    TooFewGuests,
    /// The party got louder than the neighbor tolerates
    NoiseComplaint,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::TooFewGuests => write!(f, "too many guests went home"),
            GameOverReason::NoiseComplaint => write!(f, "the neighbor complained about the noise"),
        }
    }
}

/// Events generated during a party tick
///
/// Returned by `Party::advance_tick` for the caller's action log. A
/// `GameOver` event tells the caller to stop driving the party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PartyEvent {
    /// A guest went to the food station and took `amount`
    Ate { guest: GuestId, amount: f64 },
    /// A guest went to the drink station and took `amount`
    Drank { guest: GuestId, amount: f64 },
    StartedLeaving { guest: GuestId },
    /// A guest walked out and was dropped from the roster
    Left { guest: GuestId },
    GameOver { tick: Tick, reason: GameOverReason },
}

impl PartyEvent {
    pub fn fetched(guest: GuestId, kind: ResourceKind, amount: f64) -> Self {
        match kind {
            ResourceKind::Food => PartyEvent::Ate { guest, amount },
            ResourceKind::Drinks => PartyEvent::Drank { guest, amount },
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, PartyEvent::GameOver { .. })
    }
}

impl fmt::Display for PartyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyEvent::Ate { guest, amount } => write!(f, "Guest {} ate {:.2}", guest, amount),
            PartyEvent::Drank { guest, amount } => write!(f, "Guest {} drank {:.2}", guest, amount),
            PartyEvent::StartedLeaving { guest } => write!(f, "Guest {} is heading out", guest),
            PartyEvent::Left { guest } => write!(f, "Guest {} left the party", guest),
            PartyEvent::GameOver { tick, reason } => {
                write!(f, "GAME OVER at tick {}: {}", tick, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_maps_kind() {
        let g = GuestId::new(3);
        assert_eq!(
            PartyEvent::fetched(g, ResourceKind::Food, 0.5),
            PartyEvent::Ate { guest: g, amount: 0.5 }
        );
        assert_eq!(
            PartyEvent::fetched(g, ResourceKind::Drinks, 0.5),
            PartyEvent::Drank { guest: g, amount: 0.5 }
        );
    }

    #[test]
    fn test_display() {
        let event = PartyEvent::Ate { guest: GuestId::new(2), amount: 0.25 };
        assert_eq!(event.to_string(), "Guest #2 ate 0.25");

        let over = PartyEvent::GameOver { tick: 12, reason: GameOverReason::NoiseComplaint };
        assert!(over.is_game_over());
        assert!(over.to_string().contains("tick 12"));
    }
}

//! Serializable snapshots of party state for display and JSON output

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{GuestId, Tick};
use crate::entity::state::BehaviorState;
use crate::simulation::events::GameOverReason;
use crate::simulation::party::{Party, RunState};
use crate::spatial::vector::Vector;

/// Aggregate party metrics at one point in time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PartyStatus {
    pub tick: Tick,
    /// Time of day on the 12-hour clock, e.g. `06:10 PM`
    pub time: String,
    pub run_state: RunState,
    pub guests: usize,
    pub original_guests: usize,
    pub music_volume: f64,
    pub mood: f64,
    pub noise_level: f64,
    pub noise_tolerance: f64,
    /// Uncapped; anything above 1.0 is over the neighbor's limit
    pub relative_noise: f64,
    pub relative_food: f64,
    pub relative_drinks: f64,
}

/// Where one guest is and what they are doing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuestSnapshot {
    pub id: GuestId,
    pub name: String,
    pub state: BehaviorState,
    pub position: Vector,
    pub mood: f64,
}

impl PartyStatus {
    pub fn capture(party: &Party) -> Self {
        Self {
            tick: party.current_tick(),
            time: party.current_time().to_12_hour(),
            run_state: party.run_state(),
            guests: party.guest_count(),
            original_guests: party.original_guest_count(),
            music_volume: party.music_volume(),
            mood: party.total_mood(),
            noise_level: party.total_noise_level(),
            noise_tolerance: party.noise_tolerance(),
            relative_noise: party.relative_noise_level(),
            relative_food: party.relative_food_amount(),
            relative_drinks: party.relative_drinks_amount(),
        }
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.run_state {
            RunState::GameOver(reason) => Some(reason),
            RunState::Stopped | RunState::Running => None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// One-line summary for terminal output
    pub fn summary(&self) -> String {
        let state = match self.run_state {
            RunState::Stopped => "stopped",
            RunState::Running => "running",
            RunState::GameOver(_) => "game over",
        };
        format!(
            "[{}] tick {} | {}/{} guests | mood {:.0}% | noise {:.0}% | food {:.0}% | drinks {:.0}% | volume {:.0}% | {}",
            self.time,
            self.tick,
            self.guests,
            self.original_guests,
            self.mood * 100.0,
            self.relative_noise * 100.0,
            self.relative_food * 100.0,
            self.relative_drinks * 100.0,
            self.music_volume * 100.0,
            state,
        )
    }
}

impl GuestSnapshot {
    pub fn roster(party: &Party) -> Vec<Self> {
        party
            .guests()
            .iter()
            .map(|g| Self {
                id: g.id(),
                name: g.name().to_string(),
                state: g.state(),
                position: g.position(),
                mood: g.mood(party.music_volume()),
            })
            .collect()
    }
}

impl Party {
    pub fn status(&self) -> PartyStatus {
        PartyStatus::capture(self)
    }
}

//! Party configuration with documented constants
//!
//! All tunable numbers are collected here. Every section deserializes from
//! TOML with missing keys falling back to the defaults below, so a config file
//! only needs to name what it changes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{PartyError, Result};
use crate::spatial::area::{Layout, Rect};

/// Configuration for one party session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyConfig {
    /// Number of guests invited at the start
    pub guest_count: u32,

    /// Music volume the party opens with (0.0-1.0)
    ///
    /// The party stays stopped until the volume is raised above zero or it
    /// is started explicitly, whatever this value is.
    pub initial_volume: f64,

    /// Volume change applied by a single "up"/"down" command
    pub volume_step: f64,

    /// Food and drink capacity per invited guest
    ///
    /// At 0.5, ten guests share a pantry holding 5.0 of each.
    pub supply_per_guest: f64,

    /// Amount a single restock command adds
    pub restock_amount: f64,

    /// Seed for the party's random stream. `None` draws a fresh one.
    pub seed: Option<u64>,

    pub clock: ClockConfig,
    pub neighbor: NeighborConfig,
    pub needs: NeedConfig,
    pub layout: Layout,
}

/// Mapping from ticks to wall-clock time of day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub minutes_per_tick: u32,
    /// Hour the party starts (24h clock)
    pub start_hour: u32,
    pub start_minute: u32,
}

/// Neighbor noise tolerance curve
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighborConfig {
    /// Tolerance at tick 0, compared against the party's total noise
    pub base_tolerance: f64,

    /// Ticks it takes for the tolerance to fall to half its base
    ///
    /// The decay is linear, so it reaches zero after twice this many ticks.
    pub halving_ticks: f64,
}

/// Per-tick need dynamics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NeedConfig {
    /// Fixed hunger added every tick
    pub hunger_base: f64,
    /// Uniform jitter added on top of `hunger_base`
    pub hunger_jitter: (f64, f64),
    pub thirst_base: f64,
    pub thirst_jitter: (f64, f64),
    /// Intoxication removed every tick, floored at zero
    pub intoxication_decay: f64,
}

impl Default for PartyConfig {
    fn default() -> Self {
        Self {
            guest_count: 15,
            initial_volume: 0.0,
            volume_step: 0.1,
            supply_per_guest: 0.5,
            restock_amount: 1.0,
            seed: None,
            clock: ClockConfig::default(),
            neighbor: NeighborConfig::default(),
            needs: NeedConfig::default(),
            layout: Layout::default(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            minutes_per_tick: 10,
            start_hour: 18,
            start_minute: 0,
        }
    }
}

impl Default for NeighborConfig {
    fn default() -> Self {
        Self {
            base_tolerance: 4.0,
            halving_ticks: 36.0,
        }
    }
}

impl Default for NeedConfig {
    fn default() -> Self {
        // Thirst outpaces hunger: mean +0.05/tick against +0.04/tick
        Self {
            hunger_base: 0.02,
            hunger_jitter: (0.01, 0.03),
            thirst_base: 0.02,
            thirst_jitter: (0.02, 0.04),
            intoxication_decay: 0.01,
        }
    }
}

impl PartyConfig {
    /// Parse a TOML document and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: PartyConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded party config from {}", path.display());
        Ok(config)
    }

    /// Food capacity (and drinks capacity) for a party of `guests`
    pub fn supply_capacity(&self, guests: usize) -> f64 {
        guests as f64 * self.supply_per_guest
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.guest_count == 0 {
            return Err(invalid("guest_count must be at least 1"));
        }

        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(invalid(format!(
                "initial_volume ({}) must be within 0.0-1.0",
                self.initial_volume
            )));
        }

        if self.volume_step <= 0.0 {
            return Err(invalid("volume_step must be positive"));
        }

        if self.supply_per_guest <= 0.0 {
            return Err(invalid("supply_per_guest must be positive"));
        }

        if self.restock_amount < 0.0 {
            return Err(invalid("restock_amount must not be negative"));
        }

        if self.clock.minutes_per_tick == 0 {
            return Err(invalid("clock.minutes_per_tick must be at least 1"));
        }

        if self.clock.start_hour > 23 || self.clock.start_minute > 59 {
            return Err(invalid(format!(
                "clock start {:02}:{:02} is not a time of day",
                self.clock.start_hour, self.clock.start_minute
            )));
        }

        if self.neighbor.base_tolerance <= 0.0 || self.neighbor.halving_ticks <= 0.0 {
            return Err(invalid("neighbor tolerance and halving_ticks must be positive"));
        }

        self.needs.validate()?;

        let areas = [
            ("play_area", &self.layout.play_area),
            ("food_station", &self.layout.food_station),
            ("drink_station", &self.layout.drink_station),
            ("door", &self.layout.door),
        ];
        for (name, rect) in areas {
            if rect.is_degenerate() {
                return Err(invalid(format!("layout.{} has no area", name)));
            }
            if name != "play_area" && !station_inside(&self.layout.play_area, rect) {
                tracing::warn!("layout.{} extends past the play area", name);
            }
        }

        Ok(())
    }
}

impl NeedConfig {
    fn validate(&self) -> Result<()> {
        for (name, (low, high)) in [
            ("hunger_jitter", self.hunger_jitter),
            ("thirst_jitter", self.thirst_jitter),
        ] {
            if low > high {
                return Err(invalid(format!(
                    "needs.{} range is inverted ({} > {})",
                    name, low, high
                )));
            }
        }

        let rates = [
            self.hunger_base,
            self.thirst_base,
            self.hunger_jitter.0,
            self.thirst_jitter.0,
            self.intoxication_decay,
        ];
        if rates.iter().any(|rate| *rate < 0.0) {
            return Err(invalid("need rates must not be negative"));
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> PartyError {
    PartyError::InvalidConfig(msg.into())
}

/// Whether a station rectangle lies fully inside the play area
pub fn station_inside(play_area: &Rect, station: &Rect) -> bool {
    station.x >= play_area.x
        && station.y >= play_area.y
        && station.right() <= play_area.right()
        && station.bottom() <= play_area.bottom()
}

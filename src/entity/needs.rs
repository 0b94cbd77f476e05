//! Guest needs and the mood/noise effects derived from them

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::NeedConfig;
use crate::core::types::ResourceKind;
use crate::spatial::vector::uniform;

/// Floor of the music mood term; also what silence maps to
pub const MUSIC_MOOD_FLOOR: f64 = -0.8;

/// Divisors flattening the unmet-need loudness curves
const HUNGER_LOUDNESS_DIVISOR: f64 = 5.0;
const THIRST_LOUDNESS_DIVISOR: f64 = 4.0;

/// Hunger, thirst and intoxication of a single guest
///
/// All three are unbounded above and never negative. 0.0 = satisfied / sober.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Needs {
    hunger: f64,
    thirst: f64,
    intoxication: f64,
}

impl Needs {
    /// Negative inputs are clamped to zero
    pub fn new(hunger: f64, thirst: f64, intoxication: f64) -> Self {
        Self {
            hunger: hunger.max(0.0),
            thirst: thirst.max(0.0),
            intoxication: intoxication.max(0.0),
        }
    }

    /// Starting needs of a freshly arrived guest
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hunger: uniform(rng, 0.0, 0.1),
            thirst: uniform(rng, 0.0, 0.1),
            intoxication: uniform(rng, 0.0, 0.5),
        }
    }

    pub fn hunger(&self) -> f64 {
        self.hunger
    }

    pub fn thirst(&self) -> f64 {
        self.thirst
    }

    pub fn intoxication(&self) -> f64 {
        self.intoxication
    }

    pub fn get(&self, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::Food => self.hunger,
            ResourceKind::Drinks => self.thirst,
        }
    }

    /// Advance needs by one tick: hunger and thirst grow, intoxication wears off
    pub fn accumulate<R: Rng + ?Sized>(&mut self, config: &NeedConfig, rng: &mut R) {
        let (h_lo, h_hi) = config.hunger_jitter;
        let (t_lo, t_hi) = config.thirst_jitter;

        self.hunger += config.hunger_base + uniform(rng, h_lo, h_hi);
        self.thirst += config.thirst_base + uniform(rng, t_lo, t_hi);
        self.intoxication = (self.intoxication - config.intoxication_decay).max(0.0);

        // Jitter ranges come from config; keep the floor even if they go negative
        self.hunger = self.hunger.max(0.0);
        self.thirst = self.thirst.max(0.0);
    }

    /// Satisfy a need by what was actually consumed
    pub fn satisfy(&mut self, kind: ResourceKind, amount: f64) {
        match kind {
            ResourceKind::Food => self.hunger = (self.hunger - amount).max(0.0),
            ResourceKind::Drinks => self.thirst = (self.thirst - amount).max(0.0),
        }
    }

    pub fn hunger_mood_effect(&self) -> f64 {
        self.hunger.powi(2)
    }

    pub fn thirst_mood_effect(&self) -> f64 {
        self.thirst.powi(2)
    }

    /// Combined mood penalty of hunger and thirst
    pub fn mood_penalty(&self) -> f64 {
        self.hunger_mood_effect() + self.thirst_mood_effect()
    }

    /// Noise from hunger the food on offer cannot cover
    pub fn hunger_loudness(&self, food_available: f64) -> f64 {
        (self.hunger - food_available).max(0.0).powi(5) / HUNGER_LOUDNESS_DIVISOR
    }

    /// Noise from thirst the drinks on offer cannot cover
    pub fn thirst_loudness(&self, drinks_available: f64) -> f64 {
        (self.thirst - drinks_available).max(0.0).powi(5) / THIRST_LOUDNESS_DIVISOR
    }
}

/// Mood contribution of the music at `volume` (0.0-1.0)
///
/// Logarithmic in volume, floored at [`MUSIC_MOOD_FLOOR`]. Silence skips the
/// logarithm and returns the floor directly.
pub fn music_mood_effect(volume: f64) -> f64 {
    if volume <= 0.0 {
        return MUSIC_MOOD_FLOOR;
    }
    (volume.ln() + 1.0).max(MUSIC_MOOD_FLOOR)
}

//! The neighbor next door and how much noise they put up with

use serde::{Deserialize, Serialize};

use crate::core::config::NeighborConfig;
use crate::core::types::Tick;

/// Noise tolerance as a function of how long the party has been going
///
/// Tolerance falls linearly, to half its base after `halving_ticks` and to
/// zero after twice that. It keeps falling below zero afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    base_tolerance: f64,
    halving_ticks: f64,
}

impl Neighbor {
    pub fn new(config: &NeighborConfig) -> Self {
        Self {
            base_tolerance: config.base_tolerance,
            halving_ticks: config.halving_ticks,
        }
    }

    pub fn base_tolerance(&self) -> f64 {
        self.base_tolerance
    }

    pub fn tolerance_at(&self, tick: Tick) -> f64 {
        self.base_tolerance - (self.base_tolerance / 2.0) * (tick as f64 / self.halving_ticks)
    }
}

impl Default for Neighbor {
    fn default() -> Self {
        Self::new(&NeighborConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tolerance_at_start() {
        let neighbor = Neighbor::default();
        assert_eq!(neighbor.tolerance_at(0), 4.0);
    }

    #[test]
    fn test_linear_decay() {
        let neighbor = Neighbor::default();
        assert_eq!(neighbor.tolerance_at(36), 2.0);
        assert_eq!(neighbor.tolerance_at(18), 3.0);
        assert_eq!(neighbor.tolerance_at(72), 0.0);
    }

    #[test]
    fn test_goes_negative_late() {
        let neighbor = Neighbor::default();
        assert!(neighbor.tolerance_at(108) < 0.0);
    }

    #[test]
    fn test_never_increases() {
        let neighbor = Neighbor::default();
        let mut last = neighbor.tolerance_at(0);
        for tick in 1..200 {
            let t = neighbor.tolerance_at(tick);
            assert!(t <= last);
            last = t;
        }
    }
}

//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for guests, stable for the lifetime of a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuestId(pub u32);

impl GuestId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Party tick counter (simulation time unit)
pub type Tick = u64;

/// The two shared consumables guests draw on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Food,
    Drinks,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Food => write!(f, "food"),
            ResourceKind::Drinks => write!(f, "drinks"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_id_display() {
        assert_eq!(GuestId::new(7).to_string(), "#7");
    }

    #[test]
    fn test_resource_kind_display() {
        assert_eq!(ResourceKind::Food.to_string(), "food");
        assert_eq!(ResourceKind::Drinks.to_string(), "drinks");
    }
}

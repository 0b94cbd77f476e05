//! Pantry - the party's shared food and drink supply

use serde::{Deserialize, Serialize};

use crate::core::types::ResourceKind;

/// A single consumable with a fixed capacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    amount: f64,
    capacity: f64,
}

impl Supply {
    /// A full supply; negative capacities are treated as empty
    pub fn full(capacity: f64) -> Self {
        let capacity = capacity.max(0.0);
        Self { amount: capacity, capacity }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Fill level in 0.0-1.0 (0.0 for a zero-capacity supply)
    pub fn relative(&self) -> f64 {
        if self.capacity > 0.0 {
            self.amount / self.capacity
        } else {
            0.0
        }
    }

    /// Try to add, returns amount actually added
    pub fn add(&mut self, amount: f64) -> f64 {
        let space = self.capacity - self.amount;
        let added = amount.max(0.0).min(space);
        self.amount = (self.amount + added).min(self.capacity);
        added
    }

    /// Try to remove, returns amount actually removed
    pub fn withdraw(&mut self, requested: f64) -> f64 {
        let removed = requested.max(0.0).min(self.amount);
        self.amount = (self.amount - removed).max(0.0);
        removed
    }
}

/// Food and drinks shared by every guest at the party
///
/// Guests never write to the pantry directly: they request a withdrawal and
/// get back whatever was available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pantry {
    food: Supply,
    drinks: Supply,
}

impl Pantry {
    /// A fully stocked pantry holding `capacity` of each resource
    pub fn stocked(capacity: f64) -> Self {
        Self {
            food: Supply::full(capacity),
            drinks: Supply::full(capacity),
        }
    }

    pub fn supply(&self, kind: ResourceKind) -> &Supply {
        match kind {
            ResourceKind::Food => &self.food,
            ResourceKind::Drinks => &self.drinks,
        }
    }

    fn supply_mut(&mut self, kind: ResourceKind) -> &mut Supply {
        match kind {
            ResourceKind::Food => &mut self.food,
            ResourceKind::Drinks => &mut self.drinks,
        }
    }

    /// Current amount of a resource
    pub fn get(&self, kind: ResourceKind) -> f64 {
        self.supply(kind).amount()
    }

    /// Capacity for a resource
    pub fn capacity(&self, kind: ResourceKind) -> f64 {
        self.supply(kind).capacity()
    }

    pub fn relative(&self, kind: ResourceKind) -> f64 {
        self.supply(kind).relative()
    }

    /// Restock a resource up to capacity, returns amount actually added
    pub fn add(&mut self, kind: ResourceKind, amount: f64) -> f64 {
        self.supply_mut(kind).add(amount)
    }

    /// Take up to `requested` of a resource, returns amount actually taken
    pub fn withdraw(&mut self, kind: ResourceKind, requested: f64) -> f64 {
        self.supply_mut(kind).withdraw(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pantry_add_withdraw() {
        let mut pantry = Pantry::stocked(5.0);
        assert_eq!(pantry.get(ResourceKind::Food), 5.0);

        assert_eq!(pantry.withdraw(ResourceKind::Food, 2.0), 2.0);
        assert_eq!(pantry.get(ResourceKind::Food), 3.0);

        // Can't exceed capacity
        assert_eq!(pantry.add(ResourceKind::Food, 4.0), 2.0);
        assert_eq!(pantry.get(ResourceKind::Food), 5.0);

        // Drinks untouched
        assert_eq!(pantry.get(ResourceKind::Drinks), 5.0);
    }

    #[test]
    fn test_withdraw_clamps_to_available() {
        let mut pantry = Pantry::stocked(1.0);
        assert_eq!(pantry.withdraw(ResourceKind::Drinks, 0.75), 0.75);
        assert_eq!(pantry.withdraw(ResourceKind::Drinks, 0.75), 0.25);
        assert_eq!(pantry.get(ResourceKind::Drinks), 0.0);
        assert_eq!(pantry.withdraw(ResourceKind::Drinks, 0.75), 0.0);
        assert_eq!(pantry.get(ResourceKind::Drinks), 0.0);
    }

    #[test]
    fn test_negative_amounts_do_nothing() {
        let mut pantry = Pantry::stocked(2.0);
        pantry.withdraw(ResourceKind::Food, 1.0);

        assert_eq!(pantry.add(ResourceKind::Food, -3.0), 0.0);
        assert_eq!(pantry.withdraw(ResourceKind::Food, -3.0), 0.0);
        assert_eq!(pantry.get(ResourceKind::Food), 1.0);
    }

    #[test]
    fn test_relative() {
        let mut pantry = Pantry::stocked(4.0);
        pantry.withdraw(ResourceKind::Food, 1.0);
        assert_eq!(pantry.relative(ResourceKind::Food), 0.75);
        assert_eq!(pantry.relative(ResourceKind::Drinks), 1.0);

        let empty = Supply::full(0.0);
        assert_eq!(empty.relative(), 0.0);
    }
}

// Fred's inventory: six plain counters, no slots or stacking.
//
// `food` doubles as an energy meter and is clamped to [0, 100] on every
// mutation; everything else saturates at zero.

use serde::{Deserialize, Serialize};

pub const MAX_FOOD: i32 = 100;

/// Resource kinds that can be exchanged for coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeItem {
    Wood,
    Fish,
    PurpleBerry,
    PinkBerry,
}

impl TradeItem {
    /// Human-readable name used in status messages.
    pub fn name(&self) -> &'static str {
        match self {
            TradeItem::Wood => "Wood",
            TradeItem::Fish => "Fish",
            TradeItem::PurpleBerry => "Purple Berry",
            TradeItem::PinkBerry => "Pink Berry",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub wood: u32,
    pub fish: u32,
    pub food: i32,
    pub purple_berries: u32,
    pub pink_berries: u32,
    pub coins: u32,
}

impl Inventory {
    /// Starting inventory: full energy, one coin, nothing else.
    pub fn new() -> Self {
        Inventory {
            wood: 0,
            fish: 0,
            food: MAX_FOOD,
            purple_berries: 0,
            pink_berries: 0,
            coins: 1,
        }
    }

    /// Adds (or subtracts) food, clamped to [0, MAX_FOOD].
    pub fn add_food(&mut self, delta: i32) {
        self.food = (self.food + delta).clamp(0, MAX_FOOD);
    }

    /// How many of a tradeable resource Fred holds.
    pub fn count(&self, item: TradeItem) -> u32 {
        match item {
            TradeItem::Wood => self.wood,
            TradeItem::Fish => self.fish,
            TradeItem::PurpleBerry => self.purple_berries,
            TradeItem::PinkBerry => self.pink_berries,
        }
    }

    /// Removes one unit of a tradeable resource. Returns false (and leaves
    /// the inventory untouched) if the counter is already zero.
    pub fn remove_one(&mut self, item: TradeItem) -> bool {
        let counter = match item {
            TradeItem::Wood => &mut self.wood,
            TradeItem::Fish => &mut self.fish,
            TradeItem::PurpleBerry => &mut self.purple_berries,
            TradeItem::PinkBerry => &mut self.pink_berries,
        };
        if *counter == 0 {
            return false;
        }
        *counter -= 1;
        true
    }

    /// Total berries of both kinds (bed purchases accept either).
    pub fn total_berries(&self) -> u32 {
        self.purple_berries + self.pink_berries
    }

    /// Removes `count` berries, taking purple ones first. Returns false if
    /// there aren't enough berries in total.
    pub fn remove_berries(&mut self, count: u32) -> bool {
        if self.total_berries() < count {
            return false;
        }
        let from_purple = count.min(self.purple_berries);
        self.purple_berries -= from_purple;
        self.pink_berries -= count - from_purple;
        true
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_inventory() {
        let inv = Inventory::new();
        assert_eq!(inv.food, 100);
        assert_eq!(inv.coins, 1);
        assert_eq!(inv.wood, 0);
    }

    #[test]
    fn test_food_clamps_at_both_ends() {
        let mut inv = Inventory::new();
        inv.add_food(50);
        assert_eq!(inv.food, 100); // never above max

        inv.food = 5;
        inv.add_food(-10);
        assert_eq!(inv.food, 0); // never below zero

        inv.add_food(30);
        assert_eq!(inv.food, 30);
    }

    #[test]
    fn test_remove_one_saturates() {
        let mut inv = Inventory::new();
        assert!(!inv.remove_one(TradeItem::Wood));
        inv.wood = 2;
        assert!(inv.remove_one(TradeItem::Wood));
        assert_eq!(inv.wood, 1);
    }

    #[test]
    fn test_remove_berries_takes_purple_first() {
        let mut inv = Inventory::new();
        inv.purple_berries = 2;
        inv.pink_berries = 2;
        assert!(inv.remove_berries(3));
        assert_eq!(inv.purple_berries, 0);
        assert_eq!(inv.pink_berries, 1);

        assert!(!inv.remove_berries(2)); // only 1 left
        assert_eq!(inv.pink_berries, 1);
    }
}

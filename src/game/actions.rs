// Economy actions: chop, fish, collect, eat, trade, build, and the pet
// purchase flow.
//
// Every command is a pure transition over the inventory counters plus at
// most one entity-state flip, gated by an eligibility predicate. The
// `can_*` predicates exist separately so a front end can enable/disable
// its buttons with exactly the same rule the command applies. Ineligible
// commands never mutate state; they only overwrite the status message.

use crate::fish::Egg;
use crate::game::types::InteractionTarget;
use crate::game::world::GameWorld;
use crate::inventory::TradeItem;
use crate::pet::PetKind;
use crate::structures::{HOUSE_SITE, House, PetHouse, pet_house_slot};

impl GameWorld {
    // === Chop ===

    /// A chop is possible when the interaction target is an unchopped tree
    /// and Fred is within the interaction radius of it.
    pub fn can_chop(&self) -> bool {
        match self.target {
            InteractionTarget::Tree(i) => {
                let tree = &self.trees[i];
                !tree.chopped
                    && self.fred.is_near(&tree.bounds(), self.config.interaction_radius)
            }
            _ => false,
        }
    }

    pub fn chop_tree(&mut self) {
        if !self.can_chop() {
            return;
        }
        let InteractionTarget::Tree(i) = self.target else {
            return;
        };
        self.trees[i].chopped = true;
        self.inventory.wood += 1;
        self.inventory.add_food(-self.config.chop_food_cost);
        self.set_message("Chopped a tree! Got 1 wood. Energy decreased by 10.");
        if self.inventory.wood >= self.config.house_wood_cost {
            self.set_message("You have enough wood to build a house!");
        }
        self.energy_warnings();
    }

    // === Fish ===

    /// Fishing needs a targeted river and a selected Fred; whether a fish
    /// is actually in reach is only known when the rod comes out.
    pub fn can_fish(&self) -> bool {
        matches!(self.target, InteractionTarget::River(_)) && self.fred.selected
    }

    pub fn catch_fish(&mut self) {
        if !self.can_fish() {
            return;
        }
        let InteractionTarget::River(river_index) = self.target else {
            return;
        };

        let radius = self.config.interaction_radius;
        let catch = self.fish.iter().position(|fish| {
            !fish.caught && fish.river == river_index && self.fred.is_near(&fish.bounds(), radius)
        });

        match catch {
            Some(i) => {
                self.fish[i].caught = true;
                let (x, y) = (self.fish[i].x, self.fish[i].y);
                self.inventory.fish += 1;
                self.inventory.add_food(-self.config.fish_food_cost);
                // The catch leaves an egg behind, keeping the river stocked.
                self.eggs.push(Egg::new(x, y, river_index, self.config.egg_hatch_ticks));
                self.set_message("Caught a fish! Energy decreased by 5. The fish laid an egg!");
                self.energy_warnings();
            }
            None => {
                self.set_message("No fish nearby! Get closer to the fish in the river.");
            }
        }
    }

    // === Collect berries ===

    fn targeted_berry(&self) -> Option<usize> {
        match self.target {
            InteractionTarget::Berry(i)
                if !self.berries[i].collected
                    && self
                        .fred
                        .is_near(&self.berries[i].bounds(), self.config.interaction_radius) =>
            {
                Some(i)
            }
            _ => None,
        }
    }

    fn nearby_berry(&self) -> Option<usize> {
        self.berries.iter().position(|berry| {
            !berry.collected && self.fred.is_near(&berry.bounds(), self.config.interaction_radius)
        })
    }

    pub fn can_collect(&self) -> bool {
        self.targeted_berry().is_some() || (self.fred.selected && self.nearby_berry().is_some())
    }

    pub fn collect_berries(&mut self) {
        // Targeted berry first, then any berry in reach.
        let picked = self.targeted_berry().or_else(|| {
            if self.fred.selected { self.nearby_berry() } else { None }
        });

        match picked {
            Some(i) => {
                self.berries[i].collected = true;
                let kind = self.berries[i].kind;
                match kind {
                    crate::berry::BerryKind::Purple => self.inventory.purple_berries += 1,
                    crate::berry::BerryKind::Pink => self.inventory.pink_berries += 1,
                }
                self.inventory.add_food(self.config.berry_food_gain);
                self.set_message(format!(
                    "Collected a {} berry! Food increased by 5.",
                    kind.name()
                ));
            }
            None => {
                self.set_message("No berries nearby! Get closer to berries to collect them.");
            }
        }
    }

    // === Eat ===

    pub fn can_eat(&self) -> bool {
        self.inventory.fish > 0
    }

    pub fn eat_fish(&mut self) {
        if !self.can_eat() {
            self.set_message("No fish to eat! Catch some fish first.");
            return;
        }
        self.inventory.fish -= 1;
        self.inventory.add_food(self.config.eat_food_gain);
        self.set_message("Ate a fish! Energy restored by 30.");
    }

    // === Trade ===

    /// Toggles the active trade resource. Only non-empty counters can be
    /// selected.
    pub fn select_trade_item(&mut self, item: TradeItem) {
        if self.inventory.count(item) == 0 {
            self.set_message(format!("You don't have any {} to trade!", item.name()));
            return;
        }
        if self.trade_selection == Some(item) {
            self.trade_selection = None;
            self.set_message("Trade item deselected.");
        } else {
            self.trade_selection = Some(item);
            self.set_message(format!(
                "Selected {} for trading. Trade to exchange for 1 coin.",
                item.name()
            ));
        }
    }

    pub fn can_trade(&self) -> bool {
        self.trade_selection
            .map(|item| self.inventory.count(item) > 0)
            .unwrap_or(false)
    }

    pub fn trade_item(&mut self) {
        let Some(item) = self.trade_selection else {
            self.set_message("Select an item from your inventory to trade first!");
            return;
        };
        if !self.inventory.remove_one(item) {
            self.set_message("Select an item from your inventory to trade first!");
            return;
        }
        self.inventory.coins += 1;
        self.set_message(format!("Traded 1 {} for 1 coin!", item.name()));

        // Selection can't outlive the last unit.
        if self.inventory.count(item) == 0 {
            self.trade_selection = None;
        }
    }

    // === Build ===

    pub fn can_build_house(&self) -> bool {
        self.inventory.wood >= self.config.house_wood_cost && self.house.is_none()
    }

    pub fn build_house(&mut self) {
        if !self.can_build_house() {
            return;
        }
        self.inventory.wood -= self.config.house_wood_cost;
        self.house = Some(House::new(HOUSE_SITE.0, HOUSE_SITE.1));
        self.set_message("Congratulations! Fred built his house!");
    }

    pub fn can_build_pet_house(&self) -> bool {
        self.inventory.wood >= self.config.pet_house_wood_cost
    }

    pub fn build_pet_house(&mut self) {
        if !self.can_build_pet_house() {
            self.set_message("You need 5 wood to build a pet house!");
            return;
        }
        self.inventory.wood -= self.config.pet_house_wood_cost;
        let (x, y) = pet_house_slot(self.pet_houses.len());
        self.pet_houses.push(PetHouse::new(x, y));
        self.set_message("Built a pet house! Double-click it to look inside.");
    }

    /// A bed fits when there are at least 3 berries (either kind) and a
    /// free slot on the pet house floor.
    pub fn can_buy_bed(&self, h: usize) -> bool {
        self.inventory.total_berries() >= self.config.bed_berry_cost
            && self.pet_houses[h].beds.len() < self.config.max_beds_per_house
    }

    pub fn buy_bed(&mut self, h: usize) {
        if self.pet_houses[h].beds.len() >= self.config.max_beds_per_house {
            self.set_message("No room for another bed in here!");
            return;
        }
        if !self.inventory.remove_berries(self.config.bed_berry_cost) {
            self.set_message("A bed costs 3 berries!");
            return;
        }
        self.pet_houses[h].add_bed();
        self.set_message("Bought a pet bed! Pets will nap on it.");
    }

    // === Pet purchase (asynchronous name prompt) ===

    /// Starts a purchase: reserves nothing, just asks the host for a name.
    /// The purchase completes in `submit_pet_name` or dies in
    /// `cancel_pet_purchase`.
    pub fn begin_pet_purchase(&mut self, kind: PetKind) {
        if self.inventory.coins < self.config.pet_coin_cost {
            self.set_message(format!(
                "You need 3 coins to buy a {}! Trade some items first.",
                kind.name()
            ));
            return;
        }
        self.pending_purchase = Some(kind);
        self.set_message(format!("What would you like to name your {}?", kind.name()));
    }

    /// Completes a pending purchase. An empty (or whitespace) name cancels
    /// it with no state change.
    pub fn submit_pet_name(&mut self, name: &str) {
        let Some(kind) = self.pending_purchase.take() else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            self.set_message("Pet purchase cancelled - no name provided.");
            return;
        }
        self.inventory.coins -= self.config.pet_coin_cost;
        self.spawn_pet(kind, name.to_string());
        self.set_message(format!("Welcome {} the {}!", name, kind.name()));
    }

    pub fn cancel_pet_purchase(&mut self) {
        if self.pending_purchase.take().is_some() {
            self.set_message("Pet purchase cancelled - no name provided.");
        }
    }
}

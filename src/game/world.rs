// GameWorld: the single owner of every entity and all interaction state.
//
// Nothing in the game lives outside this struct. Cross-entity references
// are indices into the owning vectors (fish -> river, pet -> pet house,
// bed <-> pet), and both sides of the bed/pet pair are always written in
// the same call. One `update()` is one frame tick; the fixed order is
// Fred, fish, trees, berries, pets, then eggs in reverse index order so
// hatched eggs can be removed while iterating.

use crate::berry::{Berry, BerryKind};
use crate::config::WorldConfig;
use crate::fish::{Egg, Fish};
use crate::fred::Fred;
use crate::game::types::{DragState, InteractionTarget, ViewMode};
use crate::inventory::{Inventory, TradeItem};
use crate::pet::{Pet, PetKind};
use crate::river::River;
use crate::structures::{Closet, House, PetHouse};
use crate::tree::Tree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::time::Instant;

pub struct GameWorld {
    pub config: WorldConfig,

    // Entities
    pub fred: Fred,
    pub trees: Vec<Tree>,
    pub rivers: Vec<River>,
    pub fish: Vec<Fish>,
    pub eggs: Vec<Egg>,
    pub berries: Vec<Berry>,
    pub pets: Vec<Pet>,
    pub house: Option<House>,
    pub pet_houses: Vec<PetHouse>,
    pub closet: Closet,

    // Player state
    pub inventory: Inventory,

    // Interaction state
    pub view: ViewMode,
    pub target: InteractionTarget,
    pub trade_selection: Option<TradeItem>,
    pub color_picker_open: bool,
    pub drag: Option<DragState>,
    pub pending_purchase: Option<PetKind>,
    pub last_pet_house_click: Option<(usize, Instant)>,

    /// Current status line, overwritten by every state-changing action.
    pub message: String,

    rng: StdRng,
}

impl GameWorld {
    /// Creates a fresh world: Fred at the clearing, trees and berries
    /// scattered, fish in both rivers. The seed drives all randomness so
    /// tests are deterministic.
    pub fn new(config: WorldConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut trees = Vec::with_capacity(config.tree_count);
        for _ in 0..config.tree_count {
            trees.push(Tree::new(
                rng.gen_range(50.0..750.0),
                rng.gen_range(50.0..450.0),
                config.tree_regrowth_ticks,
            ));
        }

        let mut berries = Vec::with_capacity(config.berry_count);
        for _ in 0..config.berry_count {
            let kind = if rng.gen_bool(0.5) { BerryKind::Purple } else { BerryKind::Pink };
            berries.push(Berry::new(
                rng.gen_range(25.0..775.0),
                rng.gen_range(25.0..475.0),
                kind,
                config.berry_regrowth_ticks,
            ));
        }

        let rivers: Vec<River> = config.rivers.iter().map(|r| River::new(*r)).collect();

        let mut fish = Vec::new();
        for (index, river) in rivers.iter().enumerate() {
            for _ in 0..config.fish_per_river {
                fish.push(Fish::new(
                    river.x + rng.gen_range(0.0..river.width),
                    river.y + rng.gen_range(0.0..river.height),
                    index,
                    rng.gen_range(0.0..TAU),
                    config.fish_speed,
                ));
            }
        }

        let fred = Fred::new(100.0, 300.0, config.fred_speed);

        GameWorld {
            config,
            fred,
            trees,
            rivers,
            fish,
            eggs: Vec::new(),
            berries,
            pets: Vec::new(),
            house: None,
            pet_houses: Vec::new(),
            closet: Closet::new(350.0, 200.0),
            inventory: Inventory::new(),
            view: ViewMode::Outdoors,
            target: InteractionTarget::None,
            trade_selection: None,
            color_picker_open: false,
            drag: None,
            pending_purchase: None,
            last_pet_house_click: None,
            message: "Welcome to the forest! Help Fred build his house!".to_string(),
            rng,
        }
    }

    /// Advances the whole world by one frame tick.
    pub fn update(&mut self) {
        self.fred.update();

        let turn_chance = self.config.fish_turn_chance;
        for i in 0..self.fish.len() {
            let river_index = self.fish[i].river;
            let river = &self.rivers[river_index];
            self.fish[i].update(river, &mut self.rng, turn_chance);
        }

        for tree in &mut self.trees {
            tree.update();
        }

        for berry in &mut self.berries {
            berry.update();
        }

        self.update_pets();

        // Reverse order so removal doesn't shift unvisited eggs.
        for i in (0..self.eggs.len()).rev() {
            if self.eggs[i].update() {
                let egg = self.eggs.remove(i);
                let heading = self.rng.gen_range(0.0..TAU);
                self.fish.push(Fish::new(egg.x, egg.y, egg.river, heading, self.config.fish_speed));
            }
        }
    }

    /// Runs the context-appropriate behavior for every pet.
    fn update_pets(&mut self) {
        let fast = self.config.pet_follow_fast;
        let slow = self.config.pet_follow_slow;
        let wander_speed = self.config.pet_wander_speed;
        let turn_ticks = self.config.pet_turn_ticks;
        let (fx, fy) = self.fred.bounds().center();

        for i in 0..self.pets.len() {
            match self.pets[i].housed_in {
                None => {
                    // Stray pets trail after Fred.
                    self.pets[i].follow(fx, fy, fast, slow);
                }
                Some(h) if self.view != ViewMode::PetHouse(h) => {
                    // A nap keeps counting down while the interior is off
                    // screen; the sleeper stays on its bed. Everyone else
                    // mills about near the house.
                    if self.pets[i].sleeping {
                        self.tick_sleep(i, h);
                    } else {
                        let bounds = self.pet_houses[h].bounds();
                        self.pets[i].wander(
                            &mut self.rng,
                            wander_speed,
                            turn_ticks,
                            bounds.x - 40.0,
                            bounds.x + bounds.w + 40.0,
                            bounds.y - 40.0,
                            bounds.y + bounds.h + 40.0,
                        );
                    }
                }
                Some(h) => {
                    self.update_interior_pet(i, h);
                }
            }
        }
    }

    /// Full behavior for a pet whose interior is on screen: sleep out a
    /// nap, head to a claimed bed, eat from a filled bowl, occasionally
    /// decide to nap, otherwise wander the room.
    fn update_interior_pet(&mut self, i: usize, h: usize) {
        if self.pets[i].sleeping {
            self.tick_sleep(i, h);
            return;
        }

        let walk_speed = self.config.pet_walk_speed;
        let wander_speed = self.config.pet_wander_speed;
        let turn_ticks = self.config.pet_turn_ticks;
        let eat_chance = self.config.bowl_eat_chance;
        let seek_chance = self.config.bed_seek_chance;
        let canvas_w = self.config.canvas_width;
        let canvas_h = self.config.canvas_height;

        let pet = &mut self.pets[i];
        let house = &mut self.pet_houses[h];
        let rng = &mut self.rng;

        // A claimed bed takes priority: walk over and fall asleep on it.
        if let Some(b) = pet.bed {
            let (bx, by) = house.beds[b].bounds().center();
            pet.step_toward(bx, by, walk_speed);
            if pet.distance_to(bx, by) < 1.0 {
                pet.sleeping = true;
                pet.sleep_time = 0;
            }
            return;
        }

        // A filled bowl draws every awake pet.
        if house.bowl.food > 0 {
            let (cx, cy) = house.bowl.bounds().center();
            if pet.distance_to(cx, cy) <= 20.0 {
                if rng.gen_bool(eat_chance) {
                    house.bowl.food -= 1;
                }
            } else {
                pet.step_toward(cx, cy, walk_speed);
            }
            return;
        }

        // Rarely, claim a free bed for a nap.
        if rng.gen_bool(seek_chance) {
            if let Some(b) = house.free_bed() {
                house.beds[b].occupant = Some(i);
                pet.bed = Some(b);
                return;
            }
        }

        pet.wander(
            rng,
            wander_speed,
            turn_ticks,
            50.0,
            canvas_w - 80.0,
            100.0,
            canvas_h - 100.0,
        );
    }

    /// One tick of an in-progress nap. The sleeper never moves; when the
    /// nap runs out the bed is freed on both sides.
    fn tick_sleep(&mut self, i: usize, h: usize) {
        let pet = &mut self.pets[i];
        pet.sleep_time += 1;
        if pet.sleep_time >= self.config.pet_sleep_ticks {
            pet.sleeping = false;
            pet.sleep_time = 0;
            if let Some(b) = pet.bed.take() {
                self.pet_houses[h].beds[b].occupant = None;
            }
        }
    }

    /// Wakes a pet, clearing the bed reference on both sides. Safe to call
    /// on a pet that is merely walking to a claimed bed.
    pub fn wake_pet(&mut self, pet_index: usize) {
        let bed = self.pets[pet_index].bed.take();
        self.pets[pet_index].sleeping = false;
        self.pets[pet_index].sleep_time = 0;
        if let (Some(h), Some(b)) = (self.pets[pet_index].housed_in, bed) {
            self.pet_houses[h].beds[b].occupant = None;
        }
    }

    /// Moves every stray pet into the given pet house. Returns how many
    /// moved in.
    pub fn house_stray_pets(&mut self, h: usize) -> usize {
        let (hx, hy) = self.pet_houses[h].bounds().center();
        let mut count = 0;
        for pet in &mut self.pets {
            if pet.housed_in.is_none() {
                pet.housed_in = Some(h);
                pet.x = hx - pet.width / 2.0;
                pet.y = hy - pet.height / 2.0;
                count += 1;
            }
        }
        count
    }

    /// Turns all residents of a pet house back out at its door, waking any
    /// sleepers. Returns how many were released.
    pub fn release_pets(&mut self, h: usize) -> usize {
        let (door_x, door_y) = self.pet_houses[h].door_position();
        let mut count = 0;
        for i in 0..self.pets.len() {
            if self.pets[i].housed_in == Some(h) {
                self.wake_pet(i);
                let pet = &mut self.pets[i];
                pet.housed_in = None;
                pet.x = door_x;
                pet.y = door_y;
                count += 1;
            }
        }
        count
    }

    /// Spawns a freshly purchased pet just outside the house door.
    pub fn spawn_pet(&mut self, kind: PetKind, name: String) {
        let (x, y) = match &self.house {
            Some(house) => house.door_position(),
            None => (400.0, 300.0),
        };
        let heading = self.rng.gen_range(0.0..TAU);
        self.pets.push(Pet::new(x, y, kind, name, heading));
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Overwrites the message with an energy warning when food is low.
    /// Running out is a soft game over: the message changes, the world
    /// keeps ticking and Fred stays controllable.
    pub(crate) fn energy_warnings(&mut self) {
        if self.inventory.food <= 0 {
            self.set_message("Fred ran out of energy! Game Over.");
        } else if self.inventory.food <= 20 {
            self.set_message("Energy is getting low! Eat some fish or berries to restore energy.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> WorldConfig {
        WorldConfig {
            egg_hatch_ticks: 5,
            pet_sleep_ticks: 10,
            ..WorldConfig::default()
        }
    }

    fn world() -> GameWorld {
        GameWorld::new(small_config(), 42)
    }

    #[test]
    fn test_new_world_population() {
        let world = world();
        assert_eq!(world.trees.len(), 15);
        assert_eq!(world.berries.len(), 20);
        assert_eq!(world.rivers.len(), 2);
        assert_eq!(world.fish.len(), 16);
        assert!(world.eggs.is_empty());
        assert!(world.house.is_none());
        assert!(world.pets.is_empty());
        assert_eq!(world.inventory.coins, 1);
    }

    #[test]
    fn test_scattered_entities_are_on_canvas() {
        let world = world();
        for tree in &world.trees {
            assert!(tree.x >= 50.0 && tree.x < 750.0);
            assert!(tree.y >= 50.0 && tree.y < 450.0);
        }
        for (i, fish) in world.fish.iter().enumerate() {
            let river = &world.rivers[fish.river];
            assert!(
                river.bounds().contains(fish.x, fish.y),
                "fish {} spawned outside its river",
                i
            );
        }
    }

    #[test]
    fn test_egg_hatches_into_exactly_one_fish() {
        let mut world = world();
        let fish_before = world.fish.len();
        world.eggs.push(Egg::new(250.0, 470.0, 0, world.config.egg_hatch_ticks));

        for _ in 0..4 {
            world.update();
            assert_eq!(world.eggs.len(), 1);
        }
        world.update(); // fifth tick hatches
        assert!(world.eggs.is_empty());
        assert_eq!(world.fish.len(), fish_before + 1);

        let hatched = world.fish.last().unwrap();
        assert_eq!(hatched.river, 0);
        assert!(!hatched.caught);
    }

    #[test]
    fn test_sleeping_pet_wakes_after_duration_and_frees_bed() {
        let mut world = world();
        world.pet_houses.push(PetHouse::new(50.0, 50.0));
        world.pet_houses[0].add_bed();
        world.view = ViewMode::PetHouse(0);

        let mut pet = Pet::new(0.0, 0.0, PetKind::Cat, "Mia".into(), 0.0);
        pet.housed_in = Some(0);
        pet.bed = Some(0);
        world.pets.push(pet);
        world.pet_houses[0].beds[0].occupant = Some(0);

        // The pet walks to its claimed bed and falls asleep there.
        for _ in 0..2000 {
            world.update();
            if world.pets[0].sleeping {
                break;
            }
        }
        assert!(world.pets[0].sleeping, "pet never reached its bed");
        assert_eq!(world.pet_houses[0].beds[0].occupant, Some(0));

        // The nap lasts exactly pet_sleep_ticks.
        for _ in 0..world.config.pet_sleep_ticks {
            world.update();
        }
        assert!(!world.pets[0].sleeping);
        assert_eq!(world.pets[0].bed, None);
        assert_eq!(world.pet_houses[0].beds[0].occupant, None);
    }

    #[test]
    fn test_nap_continues_while_interior_is_off_screen() {
        let mut world = world();
        world.pet_houses.push(PetHouse::new(50.0, 50.0));
        world.pet_houses[0].add_bed();
        world.view = ViewMode::Outdoors;

        let mut pet = Pet::new(160.0, 455.0, PetKind::Dog, "Rex".into(), 0.0);
        pet.housed_in = Some(0);
        pet.sleeping = true;
        pet.bed = Some(0);
        world.pets.push(pet);
        world.pet_houses[0].beds[0].occupant = Some(0);
        let (x, y) = (world.pets[0].x, world.pets[0].y);

        // The sleeper holds its spot on the bed while nobody is watching.
        for _ in 0..world.config.pet_sleep_ticks - 1 {
            world.update();
            assert!(world.pets[0].sleeping);
            assert_eq!((world.pets[0].x, world.pets[0].y), (x, y));
        }

        // The nap still ends on schedule and frees the bed.
        world.update();
        assert!(!world.pets[0].sleeping);
        assert_eq!(world.pets[0].bed, None);
        assert_eq!(world.pet_houses[0].beds[0].occupant, None);
    }

    #[test]
    fn test_pet_eats_from_filled_bowl() {
        let mut world = world();
        world.pet_houses.push(PetHouse::new(50.0, 50.0));
        world.pet_houses[0].bowl.food = 3;
        world.view = ViewMode::PetHouse(0);

        let mut pet = Pet::new(200.0, 300.0, PetKind::Dog, "Rex".into(), 0.0);
        pet.housed_in = Some(0);
        world.pets.push(pet);

        for _ in 0..5000 {
            world.update();
            if world.pet_houses[0].bowl.food == 0 {
                break;
            }
        }
        assert_eq!(world.pet_houses[0].bowl.food, 0);
    }

    #[test]
    fn test_house_and_release_pets() {
        let mut world = world();
        world.pet_houses.push(PetHouse::new(50.0, 50.0));
        world.spawn_pet(PetKind::Dog, "Rex".into());
        world.spawn_pet(PetKind::Bird, "Kiwi".into());

        assert_eq!(world.house_stray_pets(0), 2);
        assert!(world.pets.iter().all(|p| p.housed_in == Some(0)));

        // Releasing wakes sleepers and clears their beds.
        world.pet_houses[0].add_bed();
        world.pets[0].bed = Some(0);
        world.pets[0].sleeping = true;
        world.pet_houses[0].beds[0].occupant = Some(0);

        assert_eq!(world.release_pets(0), 2);
        assert!(world.pets.iter().all(|p| p.housed_in.is_none()));
        assert!(!world.pets[0].sleeping);
        assert_eq!(world.pets[0].bed, None);
        assert_eq!(world.pet_houses[0].beds[0].occupant, None);
    }

    #[test]
    fn test_wake_pet_is_safe_for_bed_walkers() {
        let mut world = world();
        world.pet_houses.push(PetHouse::new(50.0, 50.0));
        world.pet_houses[0].add_bed();

        let mut pet = Pet::new(100.0, 100.0, PetKind::Rabbit, "Hops".into(), 0.0);
        pet.housed_in = Some(0);
        pet.bed = Some(0); // claimed, still walking
        world.pets.push(pet);
        world.pet_houses[0].beds[0].occupant = Some(0);

        world.wake_pet(0);
        assert_eq!(world.pets[0].bed, None);
        assert_eq!(world.pet_houses[0].beds[0].occupant, None);
    }

    #[test]
    fn test_energy_warnings() {
        let mut world = world();
        world.inventory.food = 15;
        world.energy_warnings();
        assert!(world.message.contains("getting low"));

        world.inventory.food = 0;
        world.energy_warnings();
        assert!(world.message.contains("Game Over"));
    }
}

// Pointer handling: the priority click dispatcher, the drag-to-replant
// gesture and pet house double-click detection.
//
// A click resolves against exactly one thing. The dispatcher checks in a
// fixed priority order and returns at the first hit:
//
//   1. the color picker overlay (modal - swallows everything)
//   2. house interior objects, when inside the house
//   3. pet house interior objects, when inside a pet house
//   4. Fred himself (selection toggle)
//   5. with Fred selected: buildings, berries, trees, rivers, then bare
//      ground as a plain move order
//
// The raw pointer events feed the drag gesture first; only a release that
// didn't commit a drag becomes a click. `handle_click` takes the event
// time as a parameter so double-click timing is testable.

use crate::game::types::{DragState, InteractionTarget, SHIRT_COLORS, ViewMode, swatch_rect};
use crate::game::world::GameWorld;
use crate::structures::{bed_button_rect, shop_buttons};
use crate::tree::{TREE_HEIGHT, TREE_WIDTH};
use std::time::Instant;

impl GameWorld {
    /// Pointer pressed. Arms a tree drag when the press lands on a
    /// standing tree outdoors; everything else waits for the release.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.view != ViewMode::Outdoors || !self.fred.selected || self.color_picker_open {
            return;
        }
        if let Some(i) = self.trees.iter().position(|t| t.is_clicked(x, y)) {
            self.drag = Some(DragState {
                tree: i,
                origin_x: self.trees[i].x,
                origin_y: self.trees[i].y,
            });
        }
    }

    /// Pointer moved. While a drag is armed the tree rides along under the
    /// pointer, clamped onto the canvas.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let Some(drag) = self.drag {
            let tree = &mut self.trees[drag.tree];
            tree.x = (x - TREE_WIDTH / 2.0).clamp(0.0, self.config.canvas_width - TREE_WIDTH);
            tree.y = (y - TREE_HEIGHT / 2.0).clamp(0.0, self.config.canvas_height - TREE_HEIGHT);
        }
    }

    /// Pointer released. A drag that moved the tree past the replant
    /// threshold commits as a replant and swallows the click; anything
    /// shorter is treated as an ordinary click on whatever is under the
    /// pointer.
    pub fn pointer_up(&mut self, x: f32, y: f32, now: Instant) {
        if let Some(drag) = self.drag.take() {
            let tree = &self.trees[drag.tree];
            let dx = tree.x - drag.origin_x;
            let dy = tree.y - drag.origin_y;
            if (dx * dx + dy * dy).sqrt() > self.config.replant_threshold {
                self.set_message("Replanted the tree!");
                return;
            }
        }
        self.handle_click(x, y, now);
    }

    /// Resolves a click at (x, y). `now` is the event time, used for pet
    /// house double-click detection.
    pub fn handle_click(&mut self, x: f32, y: f32, now: Instant) {
        if self.color_picker_open {
            self.click_color_picker(x, y);
            return;
        }

        match self.view {
            ViewMode::House => self.click_house_interior(x, y),
            ViewMode::PetHouse(h) => self.click_pet_house_interior(h, x, y),
            ViewMode::Outdoors => self.click_outdoors(x, y, now),
        }
    }

    // The picker is modal: a swatch hit changes the shirt, any other
    // click just closes it.
    fn click_color_picker(&mut self, x: f32, y: f32) {
        for (i, color) in SHIRT_COLORS.iter().enumerate() {
            if swatch_rect(i).contains(x, y) {
                self.fred.shirt_color = color.to_string();
                self.color_picker_open = false;
                self.set_message("Fred changed his shirt!");
                return;
            }
        }
        self.color_picker_open = false;
        self.set_message("Closed the closet.");
    }

    fn click_house_interior(&mut self, x: f32, y: f32) {
        if self.closet.is_clicked(x, y) {
            self.color_picker_open = true;
            self.set_message("Pick a new shirt color for Fred!");
            return;
        }

        for button in shop_buttons() {
            if button.rect.contains(x, y) {
                self.begin_pet_purchase(button.kind);
                return;
            }
        }

        // Anywhere else steps back outside through the door.
        self.view = ViewMode::Outdoors;
        if let Some(house) = &self.house {
            let (door_x, door_y) = house.door_position();
            self.fred.x = door_x;
            self.fred.y = door_y;
        }
        self.fred.motion = crate::fred::MotionState::Idle;
        self.set_message("Exited the house!");
    }

    fn click_pet_house_interior(&mut self, h: usize, x: f32, y: f32) {
        if self.pet_houses[h].bag.is_clicked(x, y) {
            self.pet_houses[h].scoop_held = true;
            self.set_message("Grabbed a scoop of pet food! Click the bowl to fill it.");
            return;
        }

        if self.pet_houses[h].bowl.is_clicked(x, y) {
            if self.pet_houses[h].scoop_held {
                self.pet_houses[h].bowl.food = self.config.bowl_capacity;
                self.pet_houses[h].scoop_held = false;
                self.set_message("Filled the food bowl!");
            } else {
                self.set_message("Grab a scoop from the food bag first!");
            }
            return;
        }

        if bed_button_rect().contains(x, y) {
            self.buy_bed(h);
            return;
        }

        // Clicking a sleeping resident wakes it up.
        let sleeper = self
            .pets
            .iter()
            .position(|p| p.housed_in == Some(h) && p.sleeping && p.is_clicked(x, y));
        if let Some(i) = sleeper {
            self.wake_pet(i);
            let name = self.pets[i].name.clone();
            self.set_message(format!("{} woke up!", name));
            return;
        }

        self.view = ViewMode::Outdoors;
        let (door_x, door_y) = self.pet_houses[h].door_position();
        self.fred.x = door_x;
        self.fred.y = door_y;
        self.fred.motion = crate::fred::MotionState::Idle;
        self.set_message("Left the pet house.");
    }

    fn click_outdoors(&mut self, x: f32, y: f32, now: Instant) {
        if self.fred.is_clicked(x, y) {
            self.fred.selected = !self.fred.selected;
            self.target = InteractionTarget::None;
            if self.fred.selected {
                self.set_message("Fred is selected! Click somewhere to move him.");
            } else {
                self.set_message("Fred is no longer selected.");
            }
            return;
        }

        if !self.fred.selected {
            return;
        }

        let radius = self.config.interaction_radius;

        if let Some(house) = &self.house {
            if house.is_clicked(x, y) {
                if self.fred.is_near(&house.bounds(), radius) {
                    self.view = ViewMode::House;
                    self.fred.x = 400.0;
                    self.fred.y = 300.0;
                    self.fred.motion = crate::fred::MotionState::Idle;
                    self.fred.selected = false;
                    self.target = InteractionTarget::None;
                    self.set_message("Entered the house!");
                } else {
                    self.set_message("Get closer to the house to go inside!");
                }
                return;
            }
        }

        for i in 0..self.pet_houses.len() {
            if self.pet_houses[i].is_clicked(x, y) {
                self.click_pet_house(i, x, y, now);
                return;
            }
        }

        for i in 0..self.berries.len() {
            if self.berries[i].is_clicked(x, y) {
                let (bx, by) = self.berries[i].bounds().center();
                self.fred.move_to(bx, by);
                self.target = InteractionTarget::Berry(i);
                self.set_message("Moving to the berries... Collect when close!");
                return;
            }
        }

        for i in 0..self.trees.len() {
            if self.trees[i].is_clicked(x, y) {
                let (tx, ty) = self.trees[i].bounds().center();
                self.fred.move_to(tx, ty);
                self.target = InteractionTarget::Tree(i);
                self.set_message("Moving to the tree... Chop when close!");
                return;
            }
        }

        for i in 0..self.rivers.len() {
            if self.rivers[i].is_clicked(x, y) {
                self.fred.move_to(x, y);
                self.target = InteractionTarget::River(i);
                self.set_message("Moving to the river... Fish when close!");
                return;
            }
        }

        self.fred.move_to(x, y);
        self.target = InteractionTarget::None;
    }

    /// A clicked pet house: a quick second click walks Fred inside, a
    /// single click shoos stray pets in (or, with none around, lets the
    /// residents out).
    fn click_pet_house(&mut self, i: usize, _x: f32, _y: f32, now: Instant) {
        if !self.fred.is_near(&self.pet_houses[i].bounds(), self.config.interaction_radius) {
            self.set_message("Get closer to the pet house!");
            return;
        }

        if let Some((last_index, last_time)) = self.last_pet_house_click {
            let elapsed = now.duration_since(last_time).as_millis();
            if last_index == i && elapsed < self.config.double_click_ms as u128 {
                self.view = ViewMode::PetHouse(i);
                self.fred.x = 400.0;
                self.fred.y = 300.0;
                self.fred.motion = crate::fred::MotionState::Idle;
                self.fred.selected = false;
                self.target = InteractionTarget::None;
                self.last_pet_house_click = None;
                self.set_message("Entered the pet house!");
                return;
            }
        }
        self.last_pet_house_click = Some((i, now));
        self.target = InteractionTarget::PetHouse(i);

        let housed = self.house_stray_pets(i);
        if housed > 0 {
            self.set_message(format!("{} pet(s) went into the pet house!", housed));
            return;
        }
        let released = self.release_pets(i);
        if released > 0 {
            self.set_message(format!("{} pet(s) came back outside!", released));
        } else {
            self.set_message("The pet house is empty. Double-click to look inside.");
        }
    }
}

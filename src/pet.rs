// Pets: bought at the pet shop, named by the player, and autonomous from
// then on.
//
// A pet's behavior is layered by context (decided at the world level,
// since eating and sleeping touch bowls and beds owned by pet houses):
//
// - outdoors and unhoused: follows Fred with distance-banded speed
// - housed while its interior is off-screen: slow wander near the house
// - housed with the interior on screen: eat from a filled bowl, sometimes
//   claim a bed and sleep, otherwise wander the room
//
// This module owns the pet's data and its movement primitives; the world
// decides which one to run each tick.

use crate::collision::Rectf;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

pub const PET_WIDTH: f32 = 30.0;
pub const PET_HEIGHT: f32 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetKind {
    Dog,
    Cat,
    Rabbit,
    Bird,
}

impl PetKind {
    pub fn name(&self) -> &'static str {
        match self {
            PetKind::Dog => "dog",
            PetKind::Cat => "cat",
            PetKind::Rabbit => "rabbit",
            PetKind::Bird => "bird",
        }
    }

    pub fn all() -> [PetKind; 4] {
        [PetKind::Dog, PetKind::Cat, PetKind::Rabbit, PetKind::Bird]
    }
}

pub struct Pet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: PetKind,
    pub name: String,
    /// Index of the pet house this pet lives in, if any.
    pub housed_in: Option<usize>,
    pub sleeping: bool,
    pub sleep_time: u32,
    /// Index of the bed (within the owning pet house) this pet has
    /// claimed. Held from the moment the pet starts walking to the bed
    /// until it wakes up; the bed's `occupant` always mirrors it.
    pub bed: Option<usize>,
    pub heading: f32,
    pub idle_time: u32,
}

impl Pet {
    pub fn new(x: f32, y: f32, kind: PetKind, name: String, heading: f32) -> Self {
        Pet {
            x,
            y,
            width: PET_WIDTH,
            height: PET_HEIGHT,
            kind,
            name,
            housed_in: None,
            sleeping: false,
            sleep_time: 0,
            bed: None,
            heading,
            idle_time: 0,
        }
    }

    pub fn bounds(&self) -> Rectf {
        Rectf::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        self.bounds().contains(px, py)
    }

    /// Distance from the pet's center to a point.
    pub fn distance_to(&self, tx: f32, ty: f32) -> f32 {
        let (cx, cy) = self.bounds().center();
        ((tx - cx).powi(2) + (ty - cy).powi(2)).sqrt()
    }

    /// Moves the pet's center toward a point at the given speed, without
    /// overshooting.
    pub fn step_toward(&mut self, tx: f32, ty: f32, speed: f32) {
        let (cx, cy) = self.bounds().center();
        let dx = tx - cx;
        let dy = ty - cy;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= speed || distance == 0.0 {
            self.x = tx - self.width / 2.0;
            self.y = ty - self.height / 2.0;
        } else {
            self.x += dx / distance * speed;
            self.y += dy / distance * speed;
        }
    }

    /// Follow behavior: fast approach when far from Fred, slow when in the
    /// middle band, idle when close.
    pub fn follow(&mut self, fx: f32, fy: f32, fast: f32, slow: f32) {
        let distance = self.distance_to(fx, fy);
        if distance > 60.0 {
            self.step_toward(fx, fy, fast);
        } else if distance > 30.0 {
            self.step_toward(fx, fy, slow);
        }
        // Inside 30 units the pet just sits with Fred.
    }

    /// Aimless wander: a new random heading every `turn_ticks`, then a
    /// small step, clamped into the given region.
    pub fn wander(
        &mut self,
        rng: &mut StdRng,
        speed: f32,
        turn_ticks: u32,
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
    ) {
        self.idle_time += 1;
        if self.idle_time > turn_ticks {
            self.heading = rng.gen_range(0.0..TAU);
            self.idle_time = 0;
        }

        self.x += self.heading.cos() * speed;
        self.y += self.heading.sin() * speed;

        self.x = self.x.clamp(min_x, max_x);
        self.y = self.y.clamp(min_y, max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_follow_bands() {
        // Far away: moves at the fast speed.
        let mut pet = Pet::new(0.0, 0.0, PetKind::Dog, "Rex".into(), 0.0);
        let before = pet.distance_to(200.0, 12.5);
        pet.follow(200.0, 12.5, 1.5, 0.5);
        let after = pet.distance_to(200.0, 12.5);
        assert!((before - after - 1.5).abs() < 0.001);

        // Middle band: slow speed.
        let mut pet = Pet::new(100.0, 0.0, PetKind::Cat, "Mia".into(), 0.0);
        let target = (155.0, 12.5); // 40 from center (115, 12.5)
        let before = pet.distance_to(target.0, target.1);
        pet.follow(target.0, target.1, 1.5, 0.5);
        let after = pet.distance_to(target.0, target.1);
        assert!((before - after - 0.5).abs() < 0.001);

        // Close: stays put.
        let mut pet = Pet::new(0.0, 0.0, PetKind::Bird, "Kiwi".into(), 0.0);
        let (x, y) = (pet.x, pet.y);
        pet.follow(25.0, 20.0, 1.5, 0.5);
        assert_eq!((pet.x, pet.y), (x, y));
    }

    #[test]
    fn test_step_toward_does_not_overshoot() {
        let mut pet = Pet::new(0.0, 0.0, PetKind::Rabbit, "Hops".into(), 0.0);
        pet.step_toward(16.0, 13.0, 10.0); // center already (15, 12.5)
        let (cx, cy) = pet.bounds().center();
        assert_eq!((cx, cy), (16.0, 13.0));
    }

    #[test]
    fn test_wander_respects_bounds() {
        let mut pet = Pet::new(60.0, 110.0, PetKind::Dog, "Rex".into(), 0.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            pet.wander(&mut rng, 0.3, 120, 50.0, 720.0, 100.0, 500.0);
            assert!(pet.x >= 50.0 && pet.x <= 720.0);
            assert!(pet.y >= 100.0 && pet.y <= 500.0);
        }
    }
}

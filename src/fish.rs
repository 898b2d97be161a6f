// Fish and eggs.
//
// Fish do a random walk inside their owning river: a small chance per tick
// of picking a fresh heading, reflection off the river edges by negating
// the overflowing axis, and a hard position clamp afterwards so a fish can
// never escape the water even on the reflection tick. Caught fish stay in
// the collection but are skipped by updates and hit-testing.
//
// Every caught fish leaves an egg behind; an egg is a pure countdown that
// removes itself and spawns exactly one new fish when it hatches.

use crate::collision::Rectf;
use crate::river::River;
use rand::Rng;
use rand::rngs::StdRng;
use std::f32::consts::TAU;

pub const FISH_SIZE: f32 = 8.0;

pub struct Fish {
    pub x: f32,
    pub y: f32,
    /// Index of the owning river in the world's river list.
    pub river: usize,
    pub caught: bool,
    pub heading: f32,
    pub speed: f32,
}

impl Fish {
    pub fn new(x: f32, y: f32, river: usize, heading: f32, speed: f32) -> Self {
        Fish {
            x,
            y,
            river,
            caught: false,
            heading,
            speed,
        }
    }

    /// One tick of swimming. `river` must be the fish's owning river.
    pub fn update(&mut self, river: &River, rng: &mut StdRng, turn_chance: f64) {
        if self.caught {
            return;
        }

        self.x += self.heading.cos() * self.speed;
        self.y += self.heading.sin() * self.speed;

        if rng.gen_bool(turn_chance) {
            self.heading = rng.gen_range(0.0..TAU);
        }

        // Reflect off the banks, then clamp (reflection alone can leave
        // the position slightly outside on the overflow tick).
        if self.x < river.x || self.x > river.x + river.width {
            self.heading = std::f32::consts::PI - self.heading;
        }
        if self.y < river.y || self.y > river.y + river.height {
            self.heading = -self.heading;
        }
        self.x = self.x.clamp(river.x, river.x + river.width);
        self.y = self.y.clamp(river.y, river.y + river.height);
    }

    /// Catch-range box around the fish, used for the "is Fred close
    /// enough" check when fishing.
    pub fn bounds(&self) -> Rectf {
        Rectf::new(self.x, self.y, 10.0, 10.0)
    }
}

pub struct Egg {
    pub x: f32,
    pub y: f32,
    /// Index of the river the hatched fish will belong to.
    pub river: usize,
    pub hatch_time: u32,
    pub max_hatch_time: u32,
}

impl Egg {
    pub fn new(x: f32, y: f32, river: usize, max_hatch_time: u32) -> Self {
        Egg {
            x,
            y,
            river,
            hatch_time: 0,
            max_hatch_time,
        }
    }

    /// Counts one tick; returns true once the egg is ready to hatch.
    pub fn update(&mut self) -> bool {
        self.hatch_time += 1;
        self.hatch_time >= self.max_hatch_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RiverRect;
    use rand::SeedableRng;

    fn test_river() -> River {
        River::new(RiverRect { x: 100.0, y: 200.0, w: 300.0, h: 80.0 })
    }

    #[test]
    fn test_fish_stays_inside_river() {
        let river = test_river();
        let mut rng = StdRng::seed_from_u64(7);
        let mut fish = Fish::new(110.0, 210.0, 0, 0.3, 0.5);

        for _ in 0..5000 {
            fish.update(&river, &mut rng, 0.02);
            assert!(fish.x >= river.x && fish.x <= river.x + river.width);
            assert!(fish.y >= river.y && fish.y <= river.y + river.height);
        }
    }

    #[test]
    fn test_caught_fish_does_not_move() {
        let river = test_river();
        let mut rng = StdRng::seed_from_u64(7);
        let mut fish = Fish::new(150.0, 230.0, 0, 0.0, 0.5);
        fish.caught = true;

        fish.update(&river, &mut rng, 0.02);
        assert_eq!((fish.x, fish.y), (150.0, 230.0));
    }

    #[test]
    fn test_egg_hatches_exactly_at_max() {
        let mut egg = Egg::new(0.0, 0.0, 0, 180);
        for _ in 0..179 {
            assert!(!egg.update());
        }
        assert!(egg.update());
    }
}

// Fred, the player character.
//
// Movement is a two-state machine: `Idle`, or `Moving` toward a target.
// Each tick while moving Fred advances `speed` units along the normalized
// direction vector; once the remaining distance is within one step he
// snaps exactly onto the target and goes idle. Selection is an independent
// toggle flipped by clicking him.

use crate::collision::{self, Rectf};

pub const FRED_WIDTH: f32 = 40.0;
pub const FRED_HEIGHT: f32 = 40.0;

/// Motion state for the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionState {
    Idle,
    Moving { target_x: f32, target_y: f32 },
}

pub struct Fred {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub motion: MotionState,
    pub selected: bool,
    /// Shirt color as a hex string, changed at the closet.
    pub shirt_color: String,
}

impl Fred {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Fred {
            x,
            y,
            width: FRED_WIDTH,
            height: FRED_HEIGHT,
            speed,
            motion: MotionState::Idle,
            selected: false,
            shirt_color: "#8B4513".to_string(), // default brown shirt
        }
    }

    /// Advances one tick of movement.
    pub fn update(&mut self) {
        if let MotionState::Moving { target_x, target_y } = self.motion {
            let dx = target_x - self.x;
            let dy = target_y - self.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance <= self.speed {
                // Within one step: snap exactly onto the target.
                self.x = target_x;
                self.y = target_y;
                self.motion = MotionState::Idle;
            } else {
                self.x += dx / distance * self.speed;
                self.y += dy / distance * self.speed;
            }
        }
    }

    /// Commands Fred to walk so that his body is centered on the given
    /// point.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.motion = MotionState::Moving {
            target_x: x - self.width / 2.0,
            target_y: y - self.height / 2.0,
        };
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, MotionState::Moving { .. })
    }

    pub fn bounds(&self) -> Rectf {
        Rectf::new(self.x, self.y, self.width, self.height)
    }

    /// Click region: the body plus 20 units of head above it.
    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        Rectf::new(self.x, self.y - 20.0, self.width, self.height + 20.0).contains(px, py)
    }

    /// True when the distance between Fred's center and the rectangle's
    /// center is below the interaction radius.
    pub fn is_near(&self, other: &Rectf, radius: f32) -> bool {
        collision::is_near(&self.bounds(), other, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_converges_and_snaps() {
        let mut fred = Fred::new(0.0, 0.0, 2.0);
        fred.move_to(120.0, 20.0); // body target is (100, 0)
        assert!(fred.is_moving());

        // 100 units at 2 units per tick: exactly 50 ticks to arrive.
        for _ in 0..49 {
            fred.update();
            assert!(fred.is_moving());
        }
        fred.update();
        assert_eq!(fred.motion, MotionState::Idle);
        assert_eq!((fred.x, fred.y), (100.0, 0.0)); // exact snap
    }

    #[test]
    fn test_idle_fred_stays_put() {
        let mut fred = Fred::new(50.0, 50.0, 2.0);
        for _ in 0..10 {
            fred.update();
        }
        assert_eq!((fred.x, fred.y), (50.0, 50.0));
    }

    #[test]
    fn test_click_region_includes_head() {
        let fred = Fred::new(100.0, 100.0, 2.0);
        assert!(fred.is_clicked(120.0, 120.0)); // body
        assert!(fred.is_clicked(120.0, 85.0)); // head, above the body
        assert!(!fred.is_clicked(120.0, 75.0)); // above the head
        assert!(!fred.is_clicked(90.0, 120.0)); // left of the body
    }

    #[test]
    fn test_proximity_radius() {
        let fred = Fred::new(0.0, 0.0, 2.0);
        // Fred's center is (20, 20).
        let near = Rectf::new(60.0, 20.0, 0.0, 0.0); // 40 away
        let far = Rectf::new(100.0, 20.0, 0.0, 0.0); // 80 away
        assert!(fred.is_near(&near, 60.0));
        assert!(!fred.is_near(&far, 60.0));
    }
}

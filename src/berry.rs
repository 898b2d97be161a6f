// Berry bushes. Two kinds, each feeding a separate inventory counter.
// Collected berries regrow on the same counter pattern as trees, just
// faster.

use crate::collision::Rectf;
use serde::{Deserialize, Serialize};

pub const BERRY_SIZE: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BerryKind {
    Purple,
    Pink,
}

impl BerryKind {
    pub fn name(&self) -> &'static str {
        match self {
            BerryKind::Purple => "purple",
            BerryKind::Pink => "pink",
        }
    }
}

pub struct Berry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: BerryKind,
    pub collected: bool,
    pub regrowth_time: u32,
    pub max_regrowth_time: u32,
}

impl Berry {
    pub fn new(x: f32, y: f32, kind: BerryKind, max_regrowth_time: u32) -> Self {
        Berry {
            x,
            y,
            width: BERRY_SIZE,
            height: BERRY_SIZE,
            kind,
            collected: false,
            regrowth_time: 0,
            max_regrowth_time,
        }
    }

    pub fn update(&mut self) {
        if self.collected && self.regrowth_time < self.max_regrowth_time {
            self.regrowth_time += 1;
            if self.regrowth_time >= self.max_regrowth_time {
                self.collected = false;
                self.regrowth_time = 0;
            }
        }
    }

    pub fn bounds(&self) -> Rectf {
        Rectf::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        !self.collected && self.bounds().contains(px, py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collected_berry_regrows() {
        let mut berry = Berry::new(0.0, 0.0, BerryKind::Pink, 50);
        berry.collected = true;

        for _ in 0..49 {
            berry.update();
            assert!(berry.collected);
        }
        berry.update();
        assert!(!berry.collected);
        assert_eq!(berry.regrowth_time, 0);
    }

    #[test]
    fn test_collected_berry_is_not_clickable() {
        let mut berry = Berry::new(10.0, 10.0, BerryKind::Purple, 50);
        assert!(berry.is_clicked(15.0, 15.0));
        berry.collected = true;
        assert!(!berry.is_clicked(15.0, 15.0));
    }
}

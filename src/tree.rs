// Trees: the choppable, regrowing resource.
//
// A chopped tree counts up one regrowth tick per frame; on reaching the
// maximum it flips back to unchopped and the counter resets. Chopped trees
// are invisible to hit-testing so they can't be targeted again while they
// are stumps. Trees are also the only draggable entity (the replant
// gesture, handled by the dispatcher).

use crate::collision::Rectf;

pub const TREE_WIDTH: f32 = 30.0;
pub const TREE_HEIGHT: f32 = 50.0;

pub struct Tree {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub chopped: bool,
    pub regrowth_time: u32,
    pub max_regrowth_time: u32,
}

impl Tree {
    pub fn new(x: f32, y: f32, max_regrowth_time: u32) -> Self {
        Tree {
            x,
            y,
            width: TREE_WIDTH,
            height: TREE_HEIGHT,
            chopped: false,
            regrowth_time: 0,
            max_regrowth_time,
        }
    }

    /// Advances regrowth by one tick while chopped.
    pub fn update(&mut self) {
        if self.chopped && self.regrowth_time < self.max_regrowth_time {
            self.regrowth_time += 1;
            if self.regrowth_time >= self.max_regrowth_time {
                self.chopped = false;
                self.regrowth_time = 0;
            }
        }
    }

    pub fn bounds(&self) -> Rectf {
        Rectf::new(self.x, self.y, self.width, self.height)
    }

    /// Stumps can't be clicked.
    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        !self.chopped && self.bounds().contains(px, py)
    }

    /// Regrowth progress in [0, 1], used by the renderer for the growing
    /// foliage.
    pub fn regrowth_progress(&self) -> f32 {
        if self.max_regrowth_time == 0 {
            return 0.0;
        }
        self.regrowth_time as f32 / self.max_regrowth_time as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regrows_exactly_at_max_not_before() {
        let mut tree = Tree::new(0.0, 0.0, 100);
        tree.chopped = true;

        for tick in 1..100 {
            tree.update();
            assert!(tree.chopped, "tree regrew early at tick {}", tick);
        }
        tree.update(); // tick 100
        assert!(!tree.chopped);
        assert_eq!(tree.regrowth_time, 0);
    }

    #[test]
    fn test_unchopped_tree_does_not_count() {
        let mut tree = Tree::new(0.0, 0.0, 100);
        for _ in 0..50 {
            tree.update();
        }
        assert_eq!(tree.regrowth_time, 0);
    }

    #[test]
    fn test_stump_is_not_clickable() {
        let mut tree = Tree::new(10.0, 10.0, 100);
        assert!(tree.is_clicked(20.0, 30.0));
        tree.chopped = true;
        assert!(!tree.is_clicked(20.0, 30.0));
    }
}

// Geometry helpers for hit-testing and proximity checks.
//
// Game positions are floats, so we use a small float rectangle instead of
// pixel-space rects. Every clickable entity exposes its `Rectf` bounds and
// the dispatcher tests points against them.

/// Axis-aligned rectangle in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectf {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rectf {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rectf { x, y, w, h }
    }

    /// Point-in-rectangle test, inclusive on all edges (matches how the
    /// click handlers treat boundary pixels).
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Distance between the centers of two rectangles.
pub fn center_distance(a: &Rectf, b: &Rectf) -> f32 {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}

/// Proximity predicate used by every interaction: entity centers must be
/// strictly closer than `radius` (60 units for all actions).
pub fn is_near(a: &Rectf, b: &Rectf, radius: f32) -> bool {
    center_distance(a, b) < radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inclusive_edges() {
        let r = Rectf::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(40.0, 60.0));
        assert!(r.contains(25.0, 35.0));
        assert!(!r.contains(9.9, 35.0));
        assert!(!r.contains(40.1, 35.0));
    }

    #[test]
    fn test_center_distance() {
        let a = Rectf::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectf::new(30.0, 0.0, 10.0, 10.0);
        // Centers are (5,5) and (35,5), 30 apart.
        assert_eq!(center_distance(&a, &b), 30.0);
    }

    #[test]
    fn test_is_near_is_strict() {
        let a = Rectf::new(0.0, 0.0, 0.0, 0.0);
        let b = Rectf::new(60.0, 0.0, 0.0, 0.0);
        assert!(!is_near(&a, &b, 60.0)); // exactly 60 is not "near"
        let c = Rectf::new(59.9, 0.0, 0.0, 0.0);
        assert!(is_near(&a, &c, 60.0));
    }
}

// Buildings and furniture: the main house, pet houses and everything
// inside them. All of these are static geometry for hit-testing; the only
// mutable bits are the food bowl's fill level, the bag's scoop flag and
// each bed's occupant.

use crate::collision::Rectf;
use crate::pet::PetKind;

/// Fred's house. At most one exists; built for 10 wood.
pub struct House {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Fixed build site for the main house.
pub const HOUSE_SITE: (f32, f32) = (350.0, 250.0);

impl House {
    pub fn new(x: f32, y: f32) -> Self {
        House { x, y, width: 80.0, height: 60.0 }
    }

    pub fn bounds(&self) -> Rectf {
        Rectf::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        self.bounds().contains(px, py)
    }

    /// Where Fred stands after stepping out the door.
    pub fn door_position(&self) -> (f32, f32) {
        (self.x + 10.0, self.y + 30.0)
    }
}

/// The closet inside the main house; clicking it opens the shirt color
/// picker.
pub struct Closet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Closet {
    pub fn new(x: f32, y: f32) -> Self {
        Closet { x, y, width: 60.0, height: 80.0 }
    }

    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        Rectf::new(self.x, self.y, self.width, self.height).contains(px, py)
    }
}

/// Bag of pet food. Clicking it picks up a scoop; the scoop is spent on
/// the bowl.
pub struct FoodBag {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FoodBag {
    pub fn new(x: f32, y: f32) -> Self {
        FoodBag { x, y, width: 40.0, height: 50.0 }
    }

    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        Rectf::new(self.x, self.y, self.width, self.height).contains(px, py)
    }
}

/// Food bowl holding 0..=capacity units; pets eat one unit at a time.
pub struct FoodBowl {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub food: u32,
}

impl FoodBowl {
    pub fn new(x: f32, y: f32) -> Self {
        FoodBowl { x, y, width: 30.0, height: 20.0, food: 0 }
    }

    pub fn bounds(&self) -> Rectf {
        Rectf::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        self.bounds().contains(px, py)
    }
}

/// A bed slot. `occupant` mirrors the sleeping (or incoming) pet's `bed`
/// index; both sides are always updated together.
pub struct PetBed {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub occupant: Option<usize>,
}

impl PetBed {
    pub fn new(x: f32, y: f32) -> Self {
        PetBed { x, y, width: 50.0, height: 30.0, occupant: None }
    }

    pub fn bounds(&self) -> Rectf {
        Rectf::new(self.x, self.y, self.width, self.height)
    }
}

/// A pet house: a small hut outdoors, with its own interior view holding
/// the food bag, the bowl and up to five beds.
pub struct PetHouse {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub bag: FoodBag,
    pub bowl: FoodBowl,
    pub beds: Vec<PetBed>,
    /// True between clicking the bag and emptying the scoop into the bowl.
    pub scoop_held: bool,
}

impl PetHouse {
    pub fn new(x: f32, y: f32) -> Self {
        PetHouse {
            x,
            y,
            width: 60.0,
            height: 50.0,
            bag: FoodBag::new(100.0, 200.0),
            bowl: FoodBowl::new(300.0, 400.0),
            beds: Vec::new(),
            scoop_held: false,
        }
    }

    pub fn bounds(&self) -> Rectf {
        Rectf::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        self.bounds().contains(px, py)
    }

    pub fn door_position(&self) -> (f32, f32) {
        (self.x + 10.0, self.y + 30.0)
    }

    /// Adds a bed at the next fixed slot and returns its index.
    pub fn add_bed(&mut self) -> usize {
        let (x, y) = bed_slot(self.beds.len());
        self.beds.push(PetBed::new(x, y));
        self.beds.len() - 1
    }

    /// First bed nobody has claimed, if any.
    pub fn free_bed(&self) -> Option<usize> {
        self.beds.iter().position(|bed| bed.occupant.is_none())
    }
}

/// Outdoor build site for the n-th pet house: a left-to-right grid, five
/// per row.
pub fn pet_house_slot(index: usize) -> (f32, f32) {
    let col = (index % 5) as f32;
    let row = (index / 5) as f32;
    (50.0 + col * 140.0, 50.0 + row * 110.0)
}

/// Interior slot for the n-th bed: a single row along the bottom wall.
pub fn bed_slot(index: usize) -> (f32, f32) {
    (150.0 + index as f32 * 120.0, 450.0)
}

/// "Buy bed" button inside a pet house.
pub fn bed_button_rect() -> Rectf {
    Rectf::new(650.0, 60.0, 120.0, 40.0)
}

/// A purchase button in the pet shop corner of the main house.
pub struct ShopButton {
    pub kind: PetKind,
    pub rect: Rectf,
}

/// The four pet shop buttons, laid out two by two.
pub fn shop_buttons() -> [ShopButton; 4] {
    let slot = |col: usize, row: usize| {
        Rectf::new(520.0 + col as f32 * 110.0, 190.0 + row as f32 * 50.0, 100.0, 40.0)
    };
    [
        ShopButton { kind: PetKind::Dog, rect: slot(0, 0) },
        ShopButton { kind: PetKind::Cat, rect: slot(1, 0) },
        ShopButton { kind: PetKind::Rabbit, rect: slot(0, 1) },
        ShopButton { kind: PetKind::Bird, rect: slot(1, 1) },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_house_grid_is_deterministic() {
        assert_eq!(pet_house_slot(0), (50.0, 50.0));
        assert_eq!(pet_house_slot(4), (610.0, 50.0));
        assert_eq!(pet_house_slot(5), (50.0, 160.0)); // wraps to next row
    }

    #[test]
    fn test_bed_slots_and_free_bed() {
        let mut house = PetHouse::new(0.0, 0.0);
        assert_eq!(house.free_bed(), None);

        let first = house.add_bed();
        let second = house.add_bed();
        assert_eq!((first, second), (0, 1));
        assert_eq!(house.beds[1].bounds().x, 270.0);

        house.beds[0].occupant = Some(3);
        assert_eq!(house.free_bed(), Some(1));
        house.beds[1].occupant = Some(4);
        assert_eq!(house.free_bed(), None);
    }

    #[test]
    fn test_shop_buttons_cover_all_kinds() {
        let buttons = shop_buttons();
        for kind in PetKind::all() {
            assert!(buttons.iter().any(|b| b.kind == kind));
        }
        // Buttons must not overlap.
        assert!(buttons[0].rect.x + buttons[0].rect.w < buttons[1].rect.x);
    }
}

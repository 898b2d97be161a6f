// Shared enums and helper structs for the game module.

/// Which scene is on screen. Interiors are modal: while inside a building
/// the outdoor world keeps ticking but clicks only hit interior objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Outdoors,
    /// Inside the main house.
    House,
    /// Inside the pet house with this index.
    PetHouse(usize),
}

/// What the last outdoor click selected as the pending interaction target.
///
/// Commands like chop and fish consult this instead of re-resolving the
/// click, so "clicked a tree, walked over, pressed chop" works even if the
/// pointer has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionTarget {
    None,
    Tree(usize),
    Berry(usize),
    River(usize),
    PetHouse(usize),
}

/// An in-progress tree drag. The origin is kept so the release handler can
/// measure displacement against the replant threshold.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub tree: usize,
    pub origin_x: f32,
    pub origin_y: f32,
}

/// Shirt colors offered by the closet color picker, in swatch order.
pub const SHIRT_COLORS: [&str; 10] = [
    "#8B4513", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF", "#FFA500",
    "#800080", "#008000",
];

/// Geometry of the n-th color swatch in the picker overlay.
pub fn swatch_rect(index: usize) -> crate::collision::Rectf {
    crate::collision::Rectf::new(250.0 + index as f32 * 30.0, 270.0, 25.0, 25.0)
}

// Shape-based rendering for the three scenes.
//
// Everything is drawn with filled rectangles, matching the flat look of
// the game. One entry point, `render_world`, clears the canvas, picks the
// scene from the world's view mode, and lays the color picker overlay on
// top when it is open. All functions return `Result<(), String>` so SDL
// draw errors bubble out of the frame loop with `?`.

use crate::collision::Rectf;
use crate::fish::FISH_SIZE;
use crate::game::types::{SHIRT_COLORS, ViewMode, swatch_rect};
use crate::game::world::GameWorld;
use crate::structures::{PetHouse, bed_button_rect, shop_buttons};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const GRASS: Color = Color::RGB(144, 200, 110);
const WATER: Color = Color::RGB(64, 130, 220);
const TRUNK: Color = Color::RGB(110, 70, 30);
const FOLIAGE: Color = Color::RGB(34, 120, 50);
const WALL: Color = Color::RGB(200, 170, 120);
const ROOF: Color = Color::RGB(150, 60, 40);
const FLOOR: Color = Color::RGB(222, 200, 160);
const SKIN: Color = Color::RGB(255, 215, 180);

/// Parses a "#RRGGBB" hex string. Malformed input falls back to Fred's
/// default brown so a bad config can't kill a frame.
pub fn parse_hex_color(hex: &str) -> Color {
    let fallback = Color::RGB(0x8B, 0x45, 0x13);
    let digits = match hex.strip_prefix('#') {
        Some(d) if d.len() == 6 => d,
        _ => return fallback,
    };
    match (
        u8::from_str_radix(&digits[0..2], 16),
        u8::from_str_radix(&digits[2..4], 16),
        u8::from_str_radix(&digits[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::RGB(r, g, b),
        _ => fallback,
    }
}

fn to_rect(r: &Rectf) -> Rect {
    Rect::new(r.x as i32, r.y as i32, r.w.max(0.0) as u32, r.h.max(0.0) as u32)
}

fn fill(canvas: &mut Canvas<Window>, color: Color, r: &Rectf) -> Result<(), String> {
    canvas.set_draw_color(color);
    canvas.fill_rect(to_rect(r))
}

/// Draws one frame of the current scene.
pub fn render_world(canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
    match world.view {
        ViewMode::Outdoors => render_outdoors(canvas, world)?,
        ViewMode::House => render_house_interior(canvas, world)?,
        ViewMode::PetHouse(h) => render_pet_house_interior(canvas, world, h)?,
    }
    if world.color_picker_open {
        render_color_picker(canvas)?;
    }
    canvas.present();
    Ok(())
}

fn render_outdoors(canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
    canvas.set_draw_color(GRASS);
    canvas.clear();

    for river in &world.rivers {
        fill(canvas, WATER, &river.bounds())?;
    }

    for fish in world.fish.iter().filter(|f| !f.caught) {
        fill(
            canvas,
            Color::RGB(255, 150, 60),
            &Rectf::new(fish.x, fish.y, FISH_SIZE, FISH_SIZE),
        )?;
    }

    for egg in &world.eggs {
        fill(canvas, Color::RGB(250, 250, 230), &Rectf::new(egg.x, egg.y, 6.0, 8.0))?;
    }

    for tree in &world.trees {
        if tree.chopped {
            // Stump, with foliage creeping back as the tree regrows.
            fill(canvas, TRUNK, &Rectf::new(tree.x + 10.0, tree.y + 35.0, 10.0, 15.0))?;
            let regrown = tree.regrowth_progress() * 30.0;
            if regrown >= 1.0 {
                fill(
                    canvas,
                    FOLIAGE,
                    &Rectf::new(tree.x + 15.0 - regrown / 2.0, tree.y + 35.0 - regrown, regrown, regrown),
                )?;
            }
        } else {
            fill(canvas, TRUNK, &Rectf::new(tree.x + 10.0, tree.y + 20.0, 10.0, 30.0))?;
            fill(canvas, FOLIAGE, &Rectf::new(tree.x, tree.y, 30.0, 30.0))?;
        }
    }

    for berry in world.berries.iter().filter(|b| !b.collected) {
        let color = match berry.kind {
            crate::berry::BerryKind::Purple => Color::RGB(150, 60, 200),
            crate::berry::BerryKind::Pink => Color::RGB(250, 110, 170),
        };
        fill(canvas, color, &berry.bounds())?;
    }

    if let Some(house) = &world.house {
        fill(canvas, WALL, &house.bounds())?;
        fill(canvas, ROOF, &Rectf::new(house.x - 5.0, house.y - 15.0, house.width + 10.0, 15.0))?;
        fill(canvas, TRUNK, &Rectf::new(house.x + 5.0, house.y + 20.0, 20.0, 40.0))?; // door
    }

    for pet_house in &world.pet_houses {
        render_pet_house_exterior(canvas, pet_house)?;
    }

    // Outdoor pets: strays plus residents milling near their houses.
    for pet in &world.pets {
        render_pet(canvas, pet)?;
    }

    render_fred(canvas, world)
}

fn render_pet_house_exterior(canvas: &mut Canvas<Window>, pet_house: &PetHouse) -> Result<(), String> {
    fill(canvas, WALL, &pet_house.bounds())?;
    fill(
        canvas,
        ROOF,
        &Rectf::new(pet_house.x - 4.0, pet_house.y - 12.0, pet_house.width + 8.0, 12.0),
    )?;
    fill(canvas, TRUNK, &Rectf::new(pet_house.x + 5.0, pet_house.y + 20.0, 16.0, 30.0))
}

fn render_house_interior(canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
    canvas.set_draw_color(FLOOR);
    canvas.clear();

    // Closet
    fill(
        canvas,
        Color::RGB(120, 80, 50),
        &Rectf::new(world.closet.x, world.closet.y, world.closet.width, world.closet.height),
    )?;

    // Pet shop corner
    for button in shop_buttons() {
        fill(canvas, Color::RGB(90, 140, 220), &button.rect)?;
    }

    render_fred(canvas, world)
}

fn render_pet_house_interior(
    canvas: &mut Canvas<Window>,
    world: &GameWorld,
    h: usize,
) -> Result<(), String> {
    canvas.set_draw_color(FLOOR);
    canvas.clear();

    let pet_house = &world.pet_houses[h];

    let bag_color = if pet_house.scoop_held {
        Color::RGB(240, 200, 90)
    } else {
        Color::RGB(190, 150, 60)
    };
    fill(
        canvas,
        bag_color,
        &Rectf::new(pet_house.bag.x, pet_house.bag.y, pet_house.bag.width, pet_house.bag.height),
    )?;

    fill(canvas, Color::RGB(120, 120, 130), &pet_house.bowl.bounds())?;
    if pet_house.bowl.food > 0 {
        // Fill level shrinks as the pets eat.
        let fraction = pet_house.bowl.food as f32 / world.config.bowl_capacity as f32;
        let depth = pet_house.bowl.height * 0.6 * fraction;
        fill(
            canvas,
            Color::RGB(170, 120, 70),
            &Rectf::new(
                pet_house.bowl.x + 3.0,
                pet_house.bowl.y + pet_house.bowl.height - 3.0 - depth,
                pet_house.bowl.width - 6.0,
                depth,
            ),
        )?;
    }

    for bed in &pet_house.beds {
        fill(canvas, Color::RGB(180, 70, 70), &bed.bounds())?;
        fill(canvas, Color::RGB(240, 240, 240), &Rectf::new(bed.x + 4.0, bed.y + 4.0, 14.0, bed.height - 8.0))?;
    }

    fill(canvas, Color::RGB(90, 180, 110), &bed_button_rect())?;

    for pet in world.pets.iter().filter(|p| p.housed_in == Some(h)) {
        render_pet(canvas, pet)?;
    }

    render_fred(canvas, world)
}

fn render_pet(canvas: &mut Canvas<Window>, pet: &crate::pet::Pet) -> Result<(), String> {
    let color = match pet.kind {
        crate::pet::PetKind::Dog => Color::RGB(180, 140, 90),
        crate::pet::PetKind::Cat => Color::RGB(90, 90, 100),
        crate::pet::PetKind::Rabbit => Color::RGB(230, 230, 230),
        crate::pet::PetKind::Bird => Color::RGB(80, 170, 230),
    };
    fill(canvas, color, &pet.bounds())?;
    if pet.sleeping {
        // Closed-eye strip while napping.
        fill(canvas, Color::RGB(40, 40, 40), &Rectf::new(pet.x + 4.0, pet.y + 6.0, pet.width - 8.0, 3.0))?;
    }
    Ok(())
}

fn render_fred(canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
    let fred = &world.fred;
    let shirt = parse_hex_color(&fred.shirt_color);

    fill(canvas, shirt, &fred.bounds())?;
    fill(canvas, SKIN, &Rectf::new(fred.x + 10.0, fred.y - 20.0, 20.0, 20.0))?;

    if fred.selected {
        // Selection ring drawn as four thin edge strips.
        let ring = Color::RGB(255, 255, 0);
        let b = Rectf::new(fred.x - 3.0, fred.y - 23.0, fred.width + 6.0, fred.height + 26.0);
        fill(canvas, ring, &Rectf::new(b.x, b.y, b.w, 2.0))?;
        fill(canvas, ring, &Rectf::new(b.x, b.y + b.h - 2.0, b.w, 2.0))?;
        fill(canvas, ring, &Rectf::new(b.x, b.y, 2.0, b.h))?;
        fill(canvas, ring, &Rectf::new(b.x + b.w - 2.0, b.y, 2.0, b.h))?;
    }
    Ok(())
}

fn render_color_picker(canvas: &mut Canvas<Window>) -> Result<(), String> {
    canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
    canvas.set_draw_color(Color::RGBA(0, 0, 0, 160));
    canvas.fill_rect(None)?;

    fill(canvas, FLOOR, &Rectf::new(240.0, 255.0, 320.0, 55.0))?;
    for (i, hex) in SHIRT_COLORS.iter().enumerate() {
        fill(canvas, parse_hex_color(hex), &swatch_rect(i))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Color::RGB(255, 0, 0));
        assert_eq!(parse_hex_color("#8B4513"), Color::RGB(0x8B, 0x45, 0x13));
    }

    #[test]
    fn test_parse_hex_color_falls_back_on_garbage() {
        let brown = Color::RGB(0x8B, 0x45, 0x13);
        assert_eq!(parse_hex_color("red"), brown);
        assert_eq!(parse_hex_color("#12"), brown);
        assert_eq!(parse_hex_color("#GGGGGG"), brown);
    }
}

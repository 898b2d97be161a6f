use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use freds_forest::config::WorldConfig;
use freds_forest::game::world::GameWorld;
use freds_forest::input_system::{GameAction, apply_action};
use freds_forest::inventory::TradeItem;
use freds_forest::render::render_world;

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

/// Loads `config.json` from the working directory when present, otherwise
/// the shipped defaults.
fn load_config() -> Result<WorldConfig, String> {
    match std::fs::read_to_string("config.json") {
        Ok(json) => {
            let config = WorldConfig::from_json(&json)?;
            println!("Loaded config.json");
            Ok(config)
        }
        Err(_) => Ok(WorldConfig::default()),
    }
}

/// Blocking name prompt on stdin for a pending pet purchase. An empty
/// line (or a read error) cancels the purchase.
fn prompt_pet_name(world: &GameWorld) -> GameAction {
    println!("{}", world.message);
    print!("> ");
    if io::stdout().flush().is_err() {
        return GameAction::CancelPetName;
    }
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => GameAction::SubmitPetName(line.trim().to_string()),
        Err(_) => GameAction::CancelPetName,
    }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let config = load_config()?;
    let window_width = config.canvas_width as u32;
    let window_height = config.canvas_height as u32;

    let window = video_subsystem
        .window("Fred's Forest", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut world = GameWorld::new(config, seed);

    println!("Controls:");
    println!("Click Fred - Select / deselect him");
    println!("Click (selected) - Walk, or target a tree / river / berry bush");
    println!("Drag a tree - Replant it somewhere else");
    println!("C - Chop the targeted tree");
    println!("F - Fish in the targeted river");
    println!("G - Gather nearby berries");
    println!("E - Eat a fish");
    println!("T - Trade the selected item for a coin");
    println!("H - Build the house (10 wood)");
    println!("P - Build a pet house (5 wood)");
    println!("1-4 - Select wood / fish / purple / pink berries for trading");
    println!("ESC - Quit");

    let mut last_message = String::new();

    'running: loop {
        for event in event_pump.poll_iter() {
            let action = match event {
                Event::Quit { .. } => Some(GameAction::Quit),
                Event::KeyDown { keycode: Some(key), .. } => match key {
                    Keycode::Escape => Some(GameAction::Quit),
                    Keycode::C => Some(GameAction::Chop),
                    Keycode::F => Some(GameAction::CatchFish),
                    Keycode::G => Some(GameAction::Collect),
                    Keycode::E => Some(GameAction::Eat),
                    Keycode::T => Some(GameAction::Trade),
                    Keycode::H => Some(GameAction::BuildHouse),
                    Keycode::P => Some(GameAction::BuildPetHouse),
                    Keycode::Num1 => Some(GameAction::SelectTradeItem(TradeItem::Wood)),
                    Keycode::Num2 => Some(GameAction::SelectTradeItem(TradeItem::Fish)),
                    Keycode::Num3 => Some(GameAction::SelectTradeItem(TradeItem::PurpleBerry)),
                    Keycode::Num4 => Some(GameAction::SelectTradeItem(TradeItem::PinkBerry)),
                    _ => None,
                },
                Event::MouseButtonDown { mouse_btn: MouseButton::Left, x, y, .. } => {
                    Some(GameAction::PointerDown(x as f32, y as f32))
                }
                Event::MouseMotion { x, y, .. } => Some(GameAction::PointerMove(x as f32, y as f32)),
                Event::MouseButtonUp { mouse_btn: MouseButton::Left, x, y, .. } => {
                    Some(GameAction::PointerUp(x as f32, y as f32))
                }
                _ => None,
            };

            if let Some(action) = action {
                if !apply_action(&mut world, action) {
                    break 'running;
                }
            }

            // A shop click leaves a purchase waiting on a name; resolve it
            // on stdin before the next frame.
            if world.pending_purchase.is_some() {
                let action = prompt_pet_name(&world);
                apply_action(&mut world, action);
            }
        }

        world.update();

        if world.message != last_message {
            println!("{}", world.message);
            last_message = world.message.clone();
        }

        render_world(&mut canvas, &world)?;

        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}

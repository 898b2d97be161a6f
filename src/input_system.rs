// Maps host input to game actions.
//
// The front end translates raw events (mouse buttons, key presses, text
// from the name prompt) into `GameAction` values; `apply_action` is the
// single entry point that mutates the world. Keeping the enum in between
// means the whole control surface is testable without a window.

use crate::game::world::GameWorld;
use crate::inventory::TradeItem;
use std::time::Instant;

/// Everything the player can ask the game to do.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    PointerDown(f32, f32),
    PointerMove(f32, f32),
    PointerUp(f32, f32),
    Chop,
    CatchFish,
    Collect,
    Eat,
    Trade,
    BuildHouse,
    BuildPetHouse,
    SelectTradeItem(TradeItem),
    SubmitPetName(String),
    CancelPetName,
    Quit,
}

/// Applies one action to the world. Returns false when the action asks
/// the game to quit.
pub fn apply_action(world: &mut GameWorld, action: GameAction) -> bool {
    match action {
        GameAction::PointerDown(x, y) => world.pointer_down(x, y),
        GameAction::PointerMove(x, y) => world.pointer_move(x, y),
        GameAction::PointerUp(x, y) => world.pointer_up(x, y, Instant::now()),
        GameAction::Chop => world.chop_tree(),
        GameAction::CatchFish => world.catch_fish(),
        GameAction::Collect => world.collect_berries(),
        GameAction::Eat => world.eat_fish(),
        GameAction::Trade => world.trade_item(),
        GameAction::BuildHouse => world.build_house(),
        GameAction::BuildPetHouse => world.build_pet_house(),
        GameAction::SelectTradeItem(item) => world.select_trade_item(item),
        GameAction::SubmitPetName(name) => world.submit_pet_name(&name),
        GameAction::CancelPetName => world.cancel_pet_purchase(),
        GameAction::Quit => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::game::types::InteractionTarget;

    fn world() -> GameWorld {
        GameWorld::new(WorldConfig::default(), 4)
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let mut world = world();
        assert!(apply_action(&mut world, GameAction::Eat));
        assert!(!apply_action(&mut world, GameAction::Quit));
    }

    #[test]
    fn test_pointer_actions_drive_the_dispatcher() {
        let mut world = world();
        let (cx, cy) = world.fred.bounds().center();

        apply_action(&mut world, GameAction::PointerDown(cx, cy));
        apply_action(&mut world, GameAction::PointerUp(cx, cy));
        assert!(world.fred.selected);
    }

    #[test]
    fn test_commands_route_to_the_world() {
        let mut world = world();
        world.inventory.fish = 1;
        world.inventory.food = 50;
        apply_action(&mut world, GameAction::Eat);
        assert_eq!(world.inventory.fish, 0);
        assert_eq!(world.inventory.food, 80);

        world.inventory.wood = 3;
        apply_action(&mut world, GameAction::SelectTradeItem(TradeItem::Wood));
        apply_action(&mut world, GameAction::Trade);
        assert_eq!(world.inventory.coins, 2);
        assert_eq!(world.inventory.wood, 2);
    }

    #[test]
    fn test_chop_action_respects_eligibility() {
        let mut world = world();
        world.target = InteractionTarget::None;
        apply_action(&mut world, GameAction::Chop);
        assert_eq!(world.inventory.wood, 0);
    }
}

// Game module - world aggregate, actions and the interaction dispatcher.
//
// - world.rs: GameWorld struct, entity spawning and the per-tick update pass
// - actions.rs: economy commands (chop, fish, collect, eat, trade, build)
//   and their eligibility predicates
// - events.rs: pointer handling - the priority click dispatcher, the
//   drag-to-replant gesture and double-click detection
// - types.rs: shared enums (view mode, interaction target, drag state)

pub mod actions;
pub mod events;
pub mod types;
pub mod world;

pub use types::*;
pub use world::GameWorld;

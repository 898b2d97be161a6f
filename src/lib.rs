// Fred's Forest - a small simulation/adventure game.
//
// Fred explores a 2D scene, gathers wood, fish and berries, builds a house
// and pet houses, trades resources for coins, and keeps pets that follow
// him around, wander, eat and sleep on their own.
//
// The whole game core is headless: `game::GameWorld` owns every entity,
// clicks go through the dispatcher in `game::events`, and one `update()`
// call advances everything by a single frame tick. The SDL2 front end
// (feature `sdl`) only translates events and draws the current state.

pub mod berry;
pub mod collision;
pub mod config;
pub mod fish;
pub mod fred;
pub mod game;
pub mod input_system;
pub mod inventory;
pub mod pet;
pub mod river;
pub mod structures;
pub mod tree;

#[cfg(feature = "sdl")]
pub mod render;

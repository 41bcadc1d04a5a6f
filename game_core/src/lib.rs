//! Deterministic Pong core
//!
//! Owns the simulation (paddles, ball, scoring), the Menu/Playing/Result
//! state machine and the per-state render routines. Platform code supplies
//! key events, a [`Surface`] to draw on, and calls [`Game::tick`] once per
//! frame.

pub mod bounds;
pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use bounds::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use render::{Color, Surface};
pub use resources::*;

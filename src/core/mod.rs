//! Core engine types: players, ability sources, game state, RNG.
//!
//! These are the collaborators mana effects read from the surrounding
//! rules engine. They carry no rules of their own.

pub mod player;
pub mod source;
pub mod rng;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use source::{AbilitySource, EntityId};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;

//! # ccg-mana
//!
//! Mana production for card game engines: a source that adds a fixed
//! amount of mana, split across a set of colors however its controller
//! likes.
//!
//! ## Two Modes
//!
//! 1. **Planning**: while the engine checks what is affordable, the effect
//!    lists every distinct split (`possible_combinations`) without asking
//!    anyone. All five colors collapse to a single any-color result.
//!
//! 2. **Execution**: on resolution the controller is asked, color by color,
//!    how much goes where (`distribute_mana`). A responder that stops
//!    answering leaves a partial result, never an error.
//!
//! ## Modules
//!
//! - `core`: Players, ability sources, game state view, RNG
//! - `mana`: Colors, mana vectors, color sets, combination enumeration
//! - `effects`: Mana effects, amounts, responders, rule text

pub mod core;
pub mod mana;
pub mod effects;

// Re-export commonly used types
pub use crate::core::{
    AbilitySource, EntityId, GameRng, GameRngState, GameState, PlayerId, PlayerMap,
};

pub use crate::mana::{
    combination_count, possible_combinations, ColorSet, ColorSetError, Mana, ManaColor,
};

pub use crate::effects::{
    describe, distribute_mana, AddManaInAnyCombination, Amount, ManaEffect, ManaResponder,
    RandomResponder, ResponderSource, ScriptedResponder,
};

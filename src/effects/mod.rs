//! Mana production effects.
//!
//! - `ManaEffect`: the interface the rules engine calls
//! - `AddManaInAnyCombination`: N mana split freely across a color set
//! - `Amount`: deferred quantities resolved against game state
//! - `ManaResponder`: whoever answers distribution prompts
//!
//! ## Planning vs Execution
//!
//! While the engine checks playability, `net_mana` enumerates every
//! outcome without asking anyone. On resolution, `produce_mana` walks the
//! controller through the colors and commits one outcome.

mod allocator;
mod amount;
mod any_combination;
mod effect;
mod responder;
mod text;

pub use allocator::{distribute_mana, distribution_prompt};
pub use amount::Amount;
pub use any_combination::AddManaInAnyCombination;
pub use effect::ManaEffect;
pub use responder::{ManaResponder, RandomResponder, ResponderSource, ScriptedResponder};
pub use text::{describe, number_to_text};

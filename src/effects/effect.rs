//! The mana effect interface the rules engine calls.

use tracing::debug;

use super::responder::ResponderSource;
use crate::core::{AbilitySource, GameState};
use crate::mana::Mana;

/// An effect that adds mana.
///
/// The engine asks two different questions of it:
/// - `net_mana`: what could this produce? Used for affordability checks and
///   AI search; must not ask anyone anything.
/// - `produce_mana`: produce it now, consulting the controller for choices.
pub trait ManaEffect {
    /// Possible outcomes for the current query.
    ///
    /// Empty when nothing would be produced.
    fn net_mana(&self, state: &GameState, source: &AbilitySource) -> Vec<Mana>;

    /// Produce one concrete outcome.
    ///
    /// `None` when no acting player can be resolved for `source`.
    fn produce_mana(
        &self,
        state: &GameState,
        source: &AbilitySource,
        responders: &mut dyn ResponderSource,
    ) -> Option<Mana>;

    /// Rule text.
    fn text(&self) -> &str;

    /// Produce mana and add it to the controller's pool.
    ///
    /// Returns what was added, or `None` if nothing could be produced.
    fn apply(
        &self,
        state: &mut GameState,
        source: &AbilitySource,
        responders: &mut dyn ResponderSource,
    ) -> Option<Mana> {
        let controller = source.controller?;
        let mana = self.produce_mana(state, source, responders)?;

        if !state.add_mana(controller, mana) {
            return None;
        }

        debug!(
            target: "mana",
            source = %source.id,
            player = %controller,
            mana = %mana,
            "mana added to pool"
        );
        Some(mana)
    }
}

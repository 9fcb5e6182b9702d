//! "Add N mana in any combination of colors."
//!
//! Two amounts are configured. The net amount answers check-playable
//! queries and the production amount is what resolution actually makes;
//! the engine may cap the former at what is still available.

use tracing::trace;

use super::allocator::distribute_mana;
use super::amount::Amount;
use super::effect::ManaEffect;
use super::responder::ResponderSource;
use super::text::describe;
use crate::core::{AbilitySource, GameState};
use crate::mana::{possible_combinations, ColorSet, Mana};

/// Mana production split freely across a set of colors.
///
/// Immutable once built. Clones share the color list and any dynamic
/// amount computation; nothing in a clone can change the original.
///
/// ```
/// use ccg_mana::effects::{AddManaInAnyCombination, ManaEffect};
/// use ccg_mana::mana::ColorSet;
///
/// let effect = AddManaInAnyCombination::with_colors(2, ColorSet::from_symbols("BU").unwrap());
/// assert_eq!(effect.text(), "Add two mana in any combination of {B} and/or {U}");
/// ```
#[derive(Clone, Debug)]
pub struct AddManaInAnyCombination {
    amount: Amount,
    net_amount: Amount,
    colors: ColorSet,
    text: String,
}

impl AddManaInAnyCombination {
    /// `amount` mana in any combination of colors.
    #[must_use]
    pub fn new(amount: u32) -> Self {
        Self::with_colors(amount, ColorSet::any_color())
    }

    /// `amount` mana in any combination of `colors`.
    #[must_use]
    pub fn with_colors(amount: u32, colors: ColorSet) -> Self {
        Self::dynamic(Amount::Fixed(amount), Amount::Fixed(amount), colors)
    }

    /// Production and net amounts computed from game state.
    #[must_use]
    pub fn dynamic(amount: Amount, net_amount: Amount, colors: ColorSet) -> Self {
        let text = describe(&amount.description(), &colors);
        Self {
            amount,
            net_amount,
            colors,
            text,
        }
    }

    /// Replace the generated rule text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Amount produced on resolution.
    #[must_use]
    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    /// Amount used for check-playable queries.
    #[must_use]
    pub fn net_amount(&self) -> &Amount {
        &self.net_amount
    }

    /// Colors the mana may be split across.
    #[must_use]
    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }
}

impl ManaEffect for AddManaInAnyCombination {
    fn net_mana(&self, state: &GameState, source: &AbilitySource) -> Vec<Mana> {
        if state.in_check_playable_state() {
            let available = self.net_amount.resolve(state, source);
            let combinations = possible_combinations(available, &self.colors);
            trace!(
                target: "mana",
                source = %source.id,
                available,
                combinations = combinations.len(),
                "net mana enumerated"
            );
            return combinations;
        }

        match self.amount.resolve(state, source) {
            0 => Vec::new(),
            left => vec![Mana::any(left)],
        }
    }

    fn produce_mana(
        &self,
        state: &GameState,
        source: &AbilitySource,
        responders: &mut dyn ResponderSource,
    ) -> Option<Mana> {
        let controller = source.controller.filter(|&p| state.has_player(p))?;
        let responder = responders.responder_for(controller)?;

        let total = self.amount.resolve(state, source);
        Some(distribute_mana(total, &self.colors, responder))
    }

    fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntityId, PlayerId, PlayerMap};
    use crate::effects::ScriptedResponder;
    use crate::mana::ManaColor;

    fn source() -> AbilitySource {
        AbilitySource::new(EntityId(20), PlayerId::new(0))
    }

    #[test]
    fn test_default_is_any_color() {
        let effect = AddManaInAnyCombination::new(3);
        assert!(effect.colors().is_any_color());
        assert_eq!(effect.text(), "Add three mana in any combination of colors");
    }

    #[test]
    fn test_custom_text() {
        let effect = AddManaInAnyCombination::new(1).with_text("Add one mana of any color.");
        assert_eq!(effect.text(), "Add one mana of any color.");
    }

    #[test]
    fn test_dynamic_text_uses_description() {
        let effect = AddManaInAnyCombination::dynamic(
            Amount::player_state("lands", "X"),
            Amount::player_state("lands", "X"),
            ColorSet::from_symbols("RG").unwrap(),
        );
        assert_eq!(effect.text(), "Add X mana in any combination of {R} and/or {G}");
    }

    #[test]
    fn test_net_mana_when_checking_playable() {
        let state = GameState::new(2).with_check_playable(true);
        let effect = AddManaInAnyCombination::with_colors(2, ColorSet::from_symbols("BU").unwrap());

        let net = effect.net_mana(&state, &source());
        assert_eq!(net.len(), 3);
        assert!(net.iter().all(|m| m.count() == 2));
    }

    #[test]
    fn test_net_mana_any_color_shortcut() {
        let state = GameState::new(2).with_check_playable(true);
        let effect = AddManaInAnyCombination::new(4);
        assert_eq!(effect.net_mana(&state, &source()), vec![Mana::any(4)]);
    }

    #[test]
    fn test_net_mana_outside_check_playable() {
        let state = GameState::new(2);
        let effect = AddManaInAnyCombination::with_colors(2, ColorSet::from_symbols("BU").unwrap());
        assert_eq!(effect.net_mana(&state, &source()), vec![Mana::any(2)]);

        let nothing = AddManaInAnyCombination::new(0);
        assert!(nothing.net_mana(&state, &source()).is_empty());
    }

    #[test]
    fn test_net_amount_and_amount_are_independent() {
        let mut state = GameState::new(1);
        state.set_player_state(PlayerId::new(0), "available", 1);
        state.set_player_state(PlayerId::new(0), "lands", 3);

        let effect = AddManaInAnyCombination::dynamic(
            Amount::player_state("lands", "X"),
            Amount::player_state("available", "X"),
            ColorSet::from_symbols("WU").unwrap(),
        );

        assert_eq!(effect.net_mana(&state, &source()), vec![Mana::any(3)]);

        state.set_check_playable(true);
        let net = effect.net_mana(&state, &source());
        assert_eq!(
            net,
            vec![Mana::from_color(ManaColor::White), Mana::from_color(ManaColor::Blue)]
        );
    }

    #[test]
    fn test_produce_mana_uses_controller() {
        let state = GameState::new(2);
        let effect = AddManaInAnyCombination::with_colors(3, ColorSet::from_symbols("BUR").unwrap());
        let mut responders = PlayerMap::new(2, |_| ScriptedResponder::new([1, 0, 2]));

        let mana = effect.produce_mana(&state, &source(), &mut responders);
        assert_eq!(
            mana,
            Some(Mana::from_color(ManaColor::Black).with_color(ManaColor::Red, 2))
        );
        assert_eq!(responders[PlayerId::new(1)].prompts().len(), 0);
    }

    #[test]
    fn test_produce_mana_without_controller() {
        let state = GameState::new(2);
        let effect = AddManaInAnyCombination::new(2);
        let mut responders = PlayerMap::new(2, |_| ScriptedResponder::new([2]));

        let orphan = AbilitySource::uncontrolled(EntityId(20));
        assert_eq!(effect.produce_mana(&state, &orphan, &mut responders), None);

        let stranger = AbilitySource::new(EntityId(20), PlayerId::new(5));
        assert_eq!(effect.produce_mana(&state, &stranger, &mut responders), None);
    }

    #[test]
    fn test_produce_zero_is_zero_vector() {
        let state = GameState::new(1);
        let effect = AddManaInAnyCombination::with_colors(0, ColorSet::single(ManaColor::Red));
        let mut responders = PlayerMap::new(1, |_| ScriptedResponder::new([1]));

        assert_eq!(
            effect.produce_mana(&state, &source(), &mut responders),
            Some(Mana::zero())
        );
    }

    #[test]
    fn test_apply_adds_to_pool() {
        let mut state = GameState::new(2);
        let effect = AddManaInAnyCombination::with_colors(2, ColorSet::from_symbols("GW").unwrap());
        let mut responders = PlayerMap::new(2, |_| ScriptedResponder::new([1, 1]));

        let added = effect.apply(&mut state, &source(), &mut responders);
        let expected = Mana::from_color(ManaColor::Green).with_color(ManaColor::White, 1);

        assert_eq!(added, Some(expected));
        assert_eq!(state.mana_pool(PlayerId::new(0)), Some(&expected));
        assert_eq!(state.mana_pool(PlayerId::new(1)), Some(&Mana::zero()));
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AddManaInAnyCombination>();
    }

    #[test]
    fn test_clone_is_independent() {
        let effect = AddManaInAnyCombination::with_colors(2, ColorSet::from_symbols("BU").unwrap());
        let renamed = effect.clone().with_text("custom");
        assert_eq!(effect.text(), "Add two mana in any combination of {B} and/or {U}");
        assert_eq!(renamed.text(), "custom");
        assert_eq!(effect.colors(), renamed.colors());
    }
}

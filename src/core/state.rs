//! The slice of game state mana effects read and write.
//!
//! The rules engine owns the full state. Effects here need three things
//! from it:
//! - whether the current query is a check-playable (planning) query
//! - per-player numeric values that dynamic amounts resolve against
//! - per-player mana pools that produced mana is merged into
//!
//! ## State Values (i64 only)
//!
//! `player_state` uses `FxHashMap<String, i64>`; games define the keys
//! (`"lands"`, `"devotion_black"`, ...).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::mana::Mana;

/// Game state view consumed by mana effects.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    player_count: usize,

    /// Set by the engine while it tests what is castable/affordable.
    /// Effects never change it; the boundary of the mode is the engine's.
    check_playable: bool,

    /// Per-player numeric state - games define keys.
    pub player_state: PlayerMap<FxHashMap<String, i64>>,

    /// Per-player mana pools.
    pub mana_pools: PlayerMap<Mana>,
}

impl GameState {
    /// Create a state for `player_count` players with empty pools.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            check_playable: false,
            player_state: PlayerMap::with_default(player_count),
            mana_pools: PlayerMap::with_default(player_count),
        }
    }

    /// Builder form of [`GameState::set_check_playable`].
    #[must_use]
    pub fn with_check_playable(mut self, check_playable: bool) -> Self {
        self.check_playable = check_playable;
        self
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Check whether `player` is seated in this game.
    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        player.index() < self.player_count
    }

    // === Planning vs execution ===

    /// True while the engine is checking playability rather than resolving.
    #[must_use]
    pub fn in_check_playable_state(&self) -> bool {
        self.check_playable
    }

    /// Enter or leave the check-playable mode.
    pub fn set_check_playable(&mut self, check_playable: bool) {
        self.check_playable = check_playable;
    }

    // === Player State ===

    /// Get a player state value with default.
    ///
    /// Unknown players read as `default`.
    #[must_use]
    pub fn get_player_state(&self, player: PlayerId, key: &str, default: i64) -> i64 {
        self.player_state
            .get(player)
            .and_then(|values| values.get(key).copied())
            .unwrap_or(default)
    }

    /// Set a player state value.
    pub fn set_player_state(&mut self, player: PlayerId, key: impl Into<String>, value: i64) {
        if let Some(values) = self.player_state.get_mut(player) {
            values.insert(key.into(), value);
        }
    }

    // === Mana Pools ===

    /// A player's current mana pool.
    #[must_use]
    pub fn mana_pool(&self, player: PlayerId) -> Option<&Mana> {
        self.mana_pools.get(player)
    }

    /// Merge `mana` into a player's pool.
    ///
    /// Returns `false` if the player is not in the game.
    pub fn add_mana(&mut self, player: PlayerId, mana: Mana) -> bool {
        match self.mana_pools.get_mut(player) {
            Some(pool) => {
                *pool += mana;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mana::ManaColor;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(2);
        assert_eq!(state.player_count(), 2);
        assert!(!state.in_check_playable_state());
        assert_eq!(state.mana_pool(PlayerId::new(0)), Some(&Mana::zero()));
        assert!(state.has_player(PlayerId::new(1)));
        assert!(!state.has_player(PlayerId::new(2)));
    }

    #[test]
    fn test_check_playable_toggle() {
        let mut state = GameState::new(2).with_check_playable(true);
        assert!(state.in_check_playable_state());

        state.set_check_playable(false);
        assert!(!state.in_check_playable_state());
    }

    #[test]
    fn test_player_state_values() {
        let mut state = GameState::new(2);
        state.set_player_state(PlayerId::new(1), "lands", 4);

        assert_eq!(state.get_player_state(PlayerId::new(1), "lands", 0), 4);
        assert_eq!(state.get_player_state(PlayerId::new(0), "lands", -1), -1);
        assert_eq!(state.get_player_state(PlayerId::new(9), "lands", 0), 0);
    }

    #[test]
    fn test_add_mana() {
        let mut state = GameState::new(2);
        let player = PlayerId::new(0);

        assert!(state.add_mana(player, Mana::from_color(ManaColor::Green)));
        assert!(state.add_mana(player, Mana::from_color(ManaColor::Green)));
        assert!(!state.add_mana(PlayerId::new(5), Mana::any(1)));

        assert_eq!(state.mana_pool(player).map(|p| p.get(ManaColor::Green)), Some(2));
        assert_eq!(state.mana_pool(PlayerId::new(1)).map(Mana::count), Some(0));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_zero_players() {
        GameState::new(0);
    }
}

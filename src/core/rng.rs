//! Deterministic random numbers for automated responders.
//!
//! Same seed, same answers: an AI responder seeded from a game seed makes
//! reproducible mana-distribution choices, and its position can be saved and
//! restored for replays.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Independent stream for one player's decisions.
    ///
    /// Streams for different players never share a sequence, and the same
    /// player always gets the same stream from the same seed.
    #[must_use]
    pub fn for_player(&self, player: PlayerId) -> Self {
        let player_seed = self
            .seed
            .wrapping_add((player.0 as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(player_seed)
    }

    /// Uniform integer in the inclusive range `min..=max`.
    ///
    /// Returns `min` when the range is empty or a single value.
    pub fn gen_amount(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

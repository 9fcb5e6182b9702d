//! Deferred amounts: how much mana an effect makes, decided when asked.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::core::{AbilitySource, GameState};

type AmountFn = dyn Fn(&GameState, &AbilitySource) -> i64 + Send + Sync;

/// An amount resolved against game state at query time.
///
/// Resolution never fails; anything at or below zero resolves to 0.
///
/// ```
/// use ccg_mana::core::{AbilitySource, EntityId, GameState, PlayerId};
/// use ccg_mana::effects::Amount;
///
/// let mut state = GameState::new(2);
/// let source = AbilitySource::new(EntityId(10), PlayerId::new(0));
/// state.set_player_state(PlayerId::new(0), "lands", 3);
///
/// assert_eq!(Amount::Fixed(2).resolve(&state, &source), 2);
/// assert_eq!(Amount::player_state("lands", "X").resolve(&state, &source), 3);
/// ```
#[derive(Clone)]
pub enum Amount {
    /// A constant.
    Fixed(u32),

    /// A numeric state value of the source's controller.
    PlayerState {
        key: String,
        /// Rule-text rendering, e.g. `"X"`.
        description: String,
    },

    /// Arbitrary computation over game state.
    Dynamic {
        compute: Arc<AmountFn>,
        description: String,
    },
}

impl Amount {
    /// Amount read from the controller's `key` state value.
    pub fn player_state(key: impl Into<String>, description: impl Into<String>) -> Self {
        Amount::PlayerState {
            key: key.into(),
            description: description.into(),
        }
    }

    /// Amount computed by `compute` each time it is resolved.
    pub fn dynamic(
        description: impl Into<String>,
        compute: impl Fn(&GameState, &AbilitySource) -> i64 + Send + Sync + 'static,
    ) -> Self {
        Amount::Dynamic {
            compute: Arc::new(compute),
            description: description.into(),
        }
    }

    /// Raw value, possibly negative.
    #[must_use]
    pub fn calculate(&self, state: &GameState, source: &AbilitySource) -> i64 {
        match self {
            Amount::Fixed(n) => i64::from(*n),
            Amount::PlayerState { key, .. } => source
                .controller
                .map_or(0, |player| state.get_player_state(player, key, 0)),
            Amount::Dynamic { compute, .. } => compute(state, source),
        }
    }

    /// Value clamped to `0..=u32::MAX`.
    #[must_use]
    pub fn resolve(&self, state: &GameState, source: &AbilitySource) -> u32 {
        self.calculate(state, source).clamp(0, i64::from(u32::MAX)) as u32
    }

    /// How the amount reads in rule text, before number-to-word conversion.
    #[must_use]
    pub fn description(&self) -> Cow<'_, str> {
        match self {
            Amount::Fixed(n) => Cow::Owned(n.to_string()),
            Amount::PlayerState { description, .. } | Amount::Dynamic { description, .. } => {
                Cow::Borrowed(description)
            }
        }
    }
}

impl From<u32> for Amount {
    fn from(n: u32) -> Self {
        Amount::Fixed(n)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Fixed(n) => f.debug_tuple("Fixed").field(n).finish(),
            Amount::PlayerState { key, description } => f
                .debug_struct("PlayerState")
                .field("key", key)
                .field("description", description)
                .finish(),
            Amount::Dynamic { description, .. } => f
                .debug_struct("Dynamic")
                .field("description", description)
                .finish_non_exhaustive(),
        }
    }
}

//! Players answering "how many?" while mana is distributed.
//!
//! A responder is the acting party behind an ability: a human at a UI, an
//! AI, or a script in tests. Losing the ability to respond (the game ended,
//! the player conceded, a script ran out) is how a distribution is cut
//! short; there is no separate cancellation channel.

use smallvec::SmallVec;

use crate::core::{GameRng, GameRngState, PlayerId, PlayerMap};

/// A party that picks amounts during mana distribution.
pub trait ManaResponder {
    /// Whether this party can still make choices.
    fn can_respond(&self) -> bool;

    /// Pick an amount in `min..=max`. `prompt` says what is being asked.
    fn choose_amount(&mut self, min: u32, max: u32, prompt: &str) -> u32;
}

impl<R: ManaResponder + ?Sized> ManaResponder for Box<R> {
    fn can_respond(&self) -> bool {
        (**self).can_respond()
    }

    fn choose_amount(&mut self, min: u32, max: u32, prompt: &str) -> u32 {
        (**self).choose_amount(min, max, prompt)
    }
}

/// Finds the responder acting for a player.
pub trait ResponderSource {
    /// The responder for `player`, or `None` if nobody acts for them.
    fn responder_for(&mut self, player: PlayerId) -> Option<&mut dyn ManaResponder>;
}

impl<R: ManaResponder> ResponderSource for PlayerMap<R> {
    fn responder_for(&mut self, player: PlayerId) -> Option<&mut dyn ManaResponder> {
        self.get_mut(player).map(|r| r as &mut dyn ManaResponder)
    }
}

/// Answers from a fixed list, then stops responding.
///
/// Records every prompt it was shown.
#[derive(Clone, Debug, Default)]
pub struct ScriptedResponder {
    answers: SmallVec<[u32; 8]>,
    next: usize,
    prompts: Vec<String>,
}

impl ScriptedResponder {
    /// Create a responder that gives `answers` in order.
    pub fn new(answers: impl IntoIterator<Item = u32>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            next: 0,
            prompts: Vec::new(),
        }
    }

    /// Prompts received so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not yet given.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len().saturating_sub(self.next)
    }
}

impl ManaResponder for ScriptedResponder {
    fn can_respond(&self) -> bool {
        self.remaining() > 0
    }

    fn choose_amount(&mut self, min: u32, _max: u32, prompt: &str) -> u32 {
        self.prompts.push(prompt.to_string());
        let answer = self.answers.get(self.next).copied().unwrap_or(min);
        self.next += 1;
        answer
    }
}

/// Seeded random choices, for AI opponents and rollouts.
///
/// An optional query budget makes the responder stop after that many
/// answers, modelling a player who times out. `rng_state` and `resume`
/// let a replay pick up the exact same choices from a saved point.
#[derive(Clone, Debug)]
pub struct RandomResponder {
    rng: GameRng,
    budget: Option<u32>,
}

impl RandomResponder {
    /// Create a responder with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            budget: None,
        }
    }

    /// Create a responder drawing from `player`'s stream of `rng`.
    #[must_use]
    pub fn for_player(rng: &GameRng, player: PlayerId) -> Self {
        Self {
            rng: rng.for_player(player),
            budget: None,
        }
    }

    /// Recreate a responder from a saved RNG position.
    #[must_use]
    pub fn resume(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
            budget: None,
        }
    }

    /// Stop responding after `queries` answers.
    #[must_use]
    pub fn with_budget(mut self, queries: u32) -> Self {
        self.budget = Some(queries);
        self
    }

    /// Current RNG position, for saving alongside a game record.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl ManaResponder for RandomResponder {
    fn can_respond(&self) -> bool {
        self.budget != Some(0)
    }

    fn choose_amount(&mut self, min: u32, max: u32, _prompt: &str) -> u32 {
        if let Some(budget) = self.budget.as_mut() {
            *budget = budget.saturating_sub(1);
        }
        self.rng.gen_amount(min, max)
    }
}

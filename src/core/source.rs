//! Ability sources: which object produced an effect and who controls it.
//!
//! The surrounding rules engine owns card objects. This crate only needs
//! an opaque id for logging and the controller for responder lookup.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Opaque identifier for a game object (card, token, emblem).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// The ability an effect belongs to.
///
/// `controller` is `None` when the engine could not resolve an acting
/// player (the source left the game, its controller lost).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySource {
    /// The object the ability is on.
    pub id: EntityId,
    /// The player controlling the ability, if any.
    pub controller: Option<PlayerId>,
}

impl AbilitySource {
    /// Create a source controlled by `controller`.
    #[must_use]
    pub const fn new(id: EntityId, controller: PlayerId) -> Self {
        Self {
            id,
            controller: Some(controller),
        }
    }

    /// Create a source with no resolvable controller.
    #[must_use]
    pub const fn uncontrolled(id: EntityId) -> Self {
        Self {
            id,
            controller: None,
        }
    }
}

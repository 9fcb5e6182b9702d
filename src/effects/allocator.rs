//! Interactive mana distribution.
//!
//! The responder is offered each color in turn and says how many of the
//! remaining mana go to it. Passes repeat over the colors until everything
//! is assigned or the responder can no longer answer.

use tracing::debug;

use super::responder::ManaResponder;
use crate::mana::{ColorSet, Mana, ManaColor};

/// Question shown to the responder for one color.
#[must_use]
pub fn distribution_prompt(done: u32, total: u32, color: ManaColor) -> String {
    format!(
        "Distribute mana by color (done {done} of {total}). How many mana add to {} (enter 0 for pass to next color)?",
        color.name()
    )
}

/// Let `responder` split `total` mana across `colors`.
///
/// Colors are offered in set order on every pass; 0 skips a color. Mana
/// assigned to a color stays there. Answers above what is left are capped.
/// If the responder stops responding before everything is assigned, the
/// mana assigned so far is returned.
pub fn distribute_mana(total: u32, colors: &ColorSet, responder: &mut dyn ManaResponder) -> Mana {
    let offer = colors.colors();
    let mut mana = Mana::zero();
    let mut remaining = total;

    'passes: while remaining > 0 && responder.can_respond() {
        for &color in &offer {
            if !responder.can_respond() {
                break 'passes;
            }

            let prompt = distribution_prompt(mana.count(), total, color);
            let chosen = responder.choose_amount(0, remaining, &prompt).min(remaining);
            if chosen > 0 {
                mana.add_color(color, chosen);
                remaining -= chosen;
            }

            if remaining == 0 {
                break 'passes;
            }
        }
    }

    if remaining > 0 {
        debug!(
            target: "mana",
            total,
            assigned = mana.count(),
            "responder stopped before all mana was distributed"
        );
    }

    mana
}

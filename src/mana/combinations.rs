//! Enumerating every way to split an amount of mana across a color set.
//!
//! Planning code (can this cost be paid from any source?) needs the set of
//! possible outcomes without anyone choosing one. For `n` mana over `k`
//! colors that is the stars-and-bars count `C(n + k - 1, k - 1)`.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::{ColorSet, Mana};

/// Every distinct mana vector obtainable from `amount` mana split across
/// `colors`.
///
/// - `amount == 0` yields nothing.
/// - `AnyColor` yields the single vector `Mana::any(amount)`.
/// - An explicit set is grown one unit per layer: each vector of the
///   previous layer is extended by one unit of each color, duplicates are
///   dropped and first-seen order is kept, so output order is stable.
///
/// ```
/// use ccg_mana::mana::{possible_combinations, ColorSet, Mana, ManaColor};
///
/// let colors = ColorSet::from_symbols("BU").unwrap();
/// let combos = possible_combinations(2, &colors);
///
/// assert_eq!(combos, vec![
///     Mana::zero().with_color(ManaColor::Black, 2),
///     Mana::from_color(ManaColor::Black).with_color(ManaColor::Blue, 1),
///     Mana::zero().with_color(ManaColor::Blue, 2),
/// ]);
/// ```
#[must_use]
pub fn possible_combinations(amount: u32, colors: &ColorSet) -> Vec<Mana> {
    if amount == 0 {
        return Vec::new();
    }

    let colors = match colors {
        ColorSet::AnyColor(_) => return vec![Mana::any(amount)],
        ColorSet::Explicit(_) => colors.colors(),
    };

    let mut layer: Vec<Mana> = colors.iter().map(|&c| Mana::from_color(c)).collect();

    for depth in 1..amount {
        let mut seen: FxHashSet<Mana> = FxHashSet::default();
        let mut next = Vec::with_capacity(layer.len() * colors.len());

        for &color in &colors {
            for previous in &layer {
                let extended = previous.with_color(color, 1);
                if seen.insert(extended) {
                    next.push(extended);
                }
            }
        }

        trace!(target: "mana", depth = depth + 1, size = next.len(), "combination layer built");
        layer = next;
    }

    layer
}

/// Number of vectors [`possible_combinations`] returns for an explicit set
/// of `color_count` colors: `C(amount + color_count - 1, color_count - 1)`.
///
/// Returns `Some(0)` when `amount` or `color_count` is 0, and `None` when
/// the count does not fit in a `u64`.
#[must_use]
pub fn combination_count(amount: u32, color_count: usize) -> Option<u64> {
    if amount == 0 || color_count == 0 {
        return Some(0);
    }

    let n = u128::from(amount) + color_count as u128 - 1;
    let k = (color_count as u128 - 1).min(u128::from(amount));

    // Multiplicative binomial; each intermediate is itself a binomial.
    let count = (0..k).try_fold(1u128, |acc, i| Some(acc.checked_mul(n - i)? / (i + 1)))?;
    u64::try_from(count).ok()
}

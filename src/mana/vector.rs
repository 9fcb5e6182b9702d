//! Mana vectors: counts per color plus an "any color" slot.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use super::ManaColor;

/// An amount of mana, tagged by color.
///
/// `any` holds mana whose color is not yet fixed; planning queries use it to
/// say "N mana of any color is obtainable" without listing every split.
///
/// ```
/// use ccg_mana::mana::{Mana, ManaColor};
///
/// let mana = Mana::from_color(ManaColor::Black) + Mana::from_color(ManaColor::Blue);
/// assert_eq!(mana.count(), 2);
/// assert_eq!(mana.to_string(), "{U}{B}");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mana {
    colored: [u32; 5],
    any: u32,
}

impl Mana {
    /// No mana.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            colored: [0; 5],
            any: 0,
        }
    }

    /// Exactly one mana of `color`.
    #[must_use]
    pub fn from_color(color: ManaColor) -> Self {
        Self::zero().with_color(color, 1)
    }

    /// `amount` mana of any color.
    #[must_use]
    pub const fn any(amount: u32) -> Self {
        Self {
            colored: [0; 5],
            any: amount,
        }
    }

    /// Copy of `self` with `amount` more mana of `color`.
    #[must_use]
    pub fn with_color(mut self, color: ManaColor, amount: u32) -> Self {
        self.add_color(color, amount);
        self
    }

    /// Add `amount` mana of `color` in place.
    pub fn add_color(&mut self, color: ManaColor, amount: u32) {
        let slot = &mut self.colored[color.index()];
        *slot = slot.saturating_add(amount);
    }

    /// Mana of one color.
    #[must_use]
    pub fn get(&self, color: ManaColor) -> u32 {
        self.colored[color.index()]
    }

    /// Mana in the any-color slot.
    #[must_use]
    pub const fn any_count(&self) -> u32 {
        self.any
    }

    /// Mana across all colors, not counting `any`. Saturates at `u32::MAX`.
    #[must_use]
    pub fn colored_count(&self) -> u32 {
        self.colored.iter().fold(0, |acc, &n| acc.saturating_add(n))
    }

    /// Total mana, including `any`.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.colored_count().saturating_add(self.any)
    }

    /// True when there is no mana at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Add for Mana {
    type Output = Mana;

    fn add(mut self, rhs: Mana) -> Mana {
        self += rhs;
        self
    }
}

impl AddAssign for Mana {
    fn add_assign(&mut self, rhs: Mana) {
        for (lhs, rhs) in self.colored.iter_mut().zip(rhs.colored) {
            *lhs = lhs.saturating_add(rhs);
        }
        self.any = self.any.saturating_add(rhs.any);
    }
}

impl std::iter::Sum for Mana {
    fn sum<I: Iterator<Item = Mana>>(iter: I) -> Mana {
        iter.fold(Mana::zero(), Add::add)
    }
}

impl std::fmt::Display for Mana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for color in ManaColor::ALL {
            for _ in 0..self.get(color) {
                write!(f, "{}", color)?;
            }
        }
        for _ in 0..self.any {
            f.write_str("{Any}")?;
        }
        Ok(())
    }
}

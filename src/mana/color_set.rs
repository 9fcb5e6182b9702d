//! Which colors a production rule may split its mana across.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ManaColor;

/// Offer order of [`ColorSet::any_color`].
const ANY_COLOR_ORDER: [ManaColor; 5] = [
    ManaColor::Black,
    ManaColor::Blue,
    ManaColor::Red,
    ManaColor::White,
    ManaColor::Green,
];

/// Errors from building a [`ColorSet`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorSetError {
    /// No colors were given.
    #[error("a color set needs at least one color")]
    Empty,

    /// The same color was listed twice.
    #[error("color {0:?} is listed more than once")]
    Duplicate(ManaColor),

    /// A symbol that names no color.
    #[error("unknown mana symbol '{0}'")]
    UnknownSymbol(char),
}

/// An ordered set of distinct colors.
///
/// Naming all five colors collapses to `AnyColor`; enumeration and text
/// rendering treat that case as "any color" rather than listing colors.
/// `AnyColor` still remembers the order the colors were given in, since
/// interactive distribution offers them in that order.
/// The explicit list is a persistent vector, so cloning a rule shares it.
///
/// ```
/// use ccg_mana::mana::{ColorSet, ManaColor};
///
/// let set = ColorSet::from_symbols("BU").unwrap();
/// assert_eq!(set.colors().as_slice(), &[ManaColor::Black, ManaColor::Blue]);
///
/// assert!(ColorSet::from_symbols("WUBRG").unwrap().is_any_color());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ManaColor>", into = "Vec<ManaColor>")]
pub enum ColorSet {
    /// Every color is allowed, offered in this order.
    AnyColor([ManaColor; 5]),
    /// Only these colors, in this order.
    Explicit(Vector<ManaColor>),
}

impl ColorSet {
    /// Build a set from colors in the order given.
    pub fn new(colors: impl IntoIterator<Item = ManaColor>) -> Result<Self, ColorSetError> {
        let mut seen: Vector<ManaColor> = Vector::new();
        for color in colors {
            if seen.contains(&color) {
                return Err(ColorSetError::Duplicate(color));
            }
            seen.push_back(color);
        }

        match seen.len() {
            0 => Err(ColorSetError::Empty),
            n if n == ManaColor::ALL.len() => {
                let mut order = ANY_COLOR_ORDER;
                for (slot, color) in order.iter_mut().zip(seen.iter()) {
                    *slot = *color;
                }
                Ok(ColorSet::AnyColor(order))
            }
            _ => Ok(ColorSet::Explicit(seen)),
        }
    }

    /// Every color, offered Black, Blue, Red, White, Green.
    #[must_use]
    pub const fn any_color() -> Self {
        ColorSet::AnyColor(ANY_COLOR_ORDER)
    }

    /// Build a set from mana symbol letters, e.g. `"BUR"`.
    pub fn from_symbols(symbols: &str) -> Result<Self, ColorSetError> {
        let colors = symbols
            .chars()
            .map(|c| ManaColor::from_symbol(c).ok_or(ColorSetError::UnknownSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// A set with a single color.
    #[must_use]
    pub fn single(color: ManaColor) -> Self {
        ColorSet::Explicit(Vector::unit(color))
    }

    /// True for the all-colors wildcard.
    #[must_use]
    pub fn is_any_color(&self) -> bool {
        matches!(self, ColorSet::AnyColor(_))
    }

    /// Colors in offer order.
    #[must_use]
    pub fn colors(&self) -> SmallVec<[ManaColor; 5]> {
        match self {
            ColorSet::AnyColor(order) => SmallVec::from_buf(*order),
            ColorSet::Explicit(colors) => colors.iter().copied().collect(),
        }
    }

    /// Number of colors in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ColorSet::AnyColor(order) => order.len(),
            ColorSet::Explicit(colors) => colors.len(),
        }
    }

    /// Always false; a set holds at least one color.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `color` is allowed.
    #[must_use]
    pub fn contains(&self, color: ManaColor) -> bool {
        match self {
            ColorSet::AnyColor(_) => true,
            ColorSet::Explicit(colors) => colors.contains(&color),
        }
    }
}

impl TryFrom<Vec<ManaColor>> for ColorSet {
    type Error = ColorSetError;

    fn try_from(colors: Vec<ManaColor>) -> Result<Self, Self::Error> {
        ColorSet::new(colors)
    }
}

impl From<ColorSet> for Vec<ManaColor> {
    fn from(set: ColorSet) -> Self {
        set.colors().into_vec()
    }
}

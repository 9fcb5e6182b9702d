//! The five mana colors.

use serde::{Deserialize, Serialize};

/// A color of mana.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ManaColor {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl ManaColor {
    /// All colors in WUBRG order.
    pub const ALL: [ManaColor; 5] = [
        ManaColor::White,
        ManaColor::Blue,
        ManaColor::Black,
        ManaColor::Red,
        ManaColor::Green,
    ];

    /// Single-letter mana symbol (`U` for blue).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            ManaColor::White => 'W',
            ManaColor::Blue => 'U',
            ManaColor::Black => 'B',
            ManaColor::Red => 'R',
            ManaColor::Green => 'G',
        }
    }

    /// Human-readable color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ManaColor::White => "White",
            ManaColor::Blue => "Blue",
            ManaColor::Black => "Black",
            ManaColor::Red => "Red",
            ManaColor::Green => "Green",
        }
    }

    /// Parse a mana symbol letter.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.symbol() == symbol.to_ascii_uppercase())
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ManaColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.symbol())
    }
}

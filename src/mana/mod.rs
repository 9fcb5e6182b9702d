//! Mana values and the arithmetic planning code runs on.
//!
//! - `ManaColor`: the five colors
//! - `Mana`: counts per color plus an any-color slot
//! - `ColorSet`: the colors a rule may produce, or any color
//! - `possible_combinations`: every split of an amount across a color set

mod color;
mod color_set;
mod combinations;
mod vector;

pub use color::ManaColor;
pub use color_set::{ColorSet, ColorSetError};
pub use combinations::{combination_count, possible_combinations};
pub use vector::Mana;

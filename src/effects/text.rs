//! Rule text for mana production effects.

use crate::mana::ColorSet;

const SMALL_NUMBERS: [&str; 21] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Render an amount in words where card text would.
///
/// Integers up to twenty and round tens below a hundred become words;
/// anything else (`"X"`, `"101"`) is returned as is.
#[must_use]
pub fn number_to_text(amount: &str) -> String {
    let Ok(n) = amount.trim().parse::<usize>() else {
        return amount.to_string();
    };

    match n {
        0..=20 => SMALL_NUMBERS[n].to_string(),
        21..=99 if n % 10 == 0 => TENS[n / 10].to_string(),
        _ => n.to_string(),
    }
}

/// Rule text for adding `amount` mana in any combination of `colors`.
///
/// ```
/// use ccg_mana::effects::describe;
/// use ccg_mana::mana::ColorSet;
///
/// let colors = ColorSet::from_symbols("BR").unwrap();
/// assert_eq!(describe("2", &colors), "Add two mana in any combination of {B} and/or {R}");
/// assert_eq!(describe("X", &ColorSet::any_color()), "Add X mana in any combination of colors");
/// ```
#[must_use]
pub fn describe(amount: &str, colors: &ColorSet) -> String {
    let mut text = format!("Add {} mana in any combination of ", number_to_text(amount));

    match colors {
        ColorSet::AnyColor(_) => text.push_str("colors"),
        ColorSet::Explicit(list) => {
            let symbols: Vec<String> = list.iter().map(ToString::to_string).collect();
            text.push_str(&symbols.join(" and/or "));
        }
    }

    text
}

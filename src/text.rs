//! Text formatting helpers for the inventory display
//!
//! Quantities are shortened so large stacks fit in a slot label, and stat
//! labels are rewritten in place as `"<Label>: <value>"`.

/// Below this a quantity is shown in full
const THOUSANDS_THRESHOLD: u32 = 100_000;

/// At or above this a quantity is shown in millions
const MILLIONS_THRESHOLD: u32 = 10_000_000;

/// Shortens a stack quantity into a compact label
///
/// - `< 100,000` prints the whole number (`"99999"`)
/// - `< 10,000,000` prints whole thousands (`"100K"`, `"9999K"`)
/// - otherwise whole millions (`"10M"`)
///
/// # Example
///
/// ```rust
/// use pocket_rogue::text::shorten_quantity;
///
/// assert_eq!(shorten_quantity(5), "5");
/// assert_eq!(shorten_quantity(250_000), "250K");
/// assert_eq!(shorten_quantity(12_345_678), "12M");
/// ```
pub fn shorten_quantity(quantity: u32) -> String {
    if quantity < THOUSANDS_THRESHOLD {
        quantity.to_string()
    } else if quantity < MILLIONS_THRESHOLD {
        format!("{}K", quantity / 1_000)
    } else {
        format!("{}M", quantity / 1_000_000)
    }
}

/// Replaces the value part of a `"Label: value"` string
///
/// Text without a `:` separator is returned unchanged.
pub fn replace_label_value(label: &str, value: impl std::fmt::Display) -> String {
    match label.find(':') {
        Some(index) => format!("{}: {}", &label[..index], value),
        None => label.to_string(),
    }
}

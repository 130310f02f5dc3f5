//! Element ids the widget reads and writes
//!
//! The page markup is fixed, so these are compile-time constants.

/// Bill amount `<input>`
pub const AMOUNT_ID: &str = "amount";
/// Tip percentage `<input>`
pub const TIP_ID: &str = "tip";
/// Party size `<select>`
pub const PEOPLE_ID: &str = "people";
/// Display target for the tip amount
pub const TIP_AMOUNT_ID: &str = "tip-amount";
/// Display target for the per-person share
pub const PER_PERSON_ID: &str = "per-person";
/// Button that runs the calculation
pub const CALCULATE_ID: &str = "calculate";
/// Button that flips the theme
pub const TOGGLE_THEME_ID: &str = "toggle-theme";

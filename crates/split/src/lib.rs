//! Host-independent logic for the bill-split widget
//!
//! Parses the raw strings read from the page, computes the tip and
//! per-person share, and formats them for display. Nothing in this crate
//! touches the DOM, so it builds and tests natively.

pub mod config;
pub mod currency;
pub mod parse;
pub mod people;
pub mod split;
pub mod theme;

pub use currency::{format_currency, RUPEE};
pub use parse::{parse_decimal, parse_integer, ParseError};
pub use people::{needs_population, people_options, PeopleOption};
pub use split::{BillInputs, Split};
pub use theme::{Theme, DARK_MODE_CLASS};

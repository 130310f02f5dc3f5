//! Choices offered by the people dropdown

/// Smallest party size offered
pub const MIN_PEOPLE: u32 = 1;
/// Largest party size offered
pub const MAX_PEOPLE: u32 = 10;
/// Choice selected after the dropdown is filled
pub const DEFAULT_SELECTION: u32 = 2;

/// One `<option>` of the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeopleOption {
    pub value: String,
    pub label: String,
}

/// Options for every offered party size, ascending
pub fn people_options() -> Vec<PeopleOption> {
    (MIN_PEOPLE..=MAX_PEOPLE)
        .map(|n| PeopleOption {
            value: n.to_string(),
            label: n.to_string(),
        })
        .collect()
}

/// The dropdown is only filled while it has no options at all
pub const fn needs_population(existing_options: u32) -> bool {
    existing_options == 0
}

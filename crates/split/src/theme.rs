/// Class set on the document body while dark mode is active
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Display mode of the widget
///
/// The page owns the flag (as [`DARK_MODE_CLASS`] on the body); this is the
/// typed view of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Text shown on the theme toggle control
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

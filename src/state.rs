//! Page-lifetime view flags.
//!
//! DESIGN
//! ======
//! The flags live in one explicit struct owned by [`crate::page::Page`] and
//! passed to controllers by reference, so each behavior can be exercised
//! without a live document.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Flags that survive across events until the page unloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub menu_open: bool,
    pub dark_mode: bool,
}

impl ViewState {
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark_mode)
    }
}

/// Visual mode as persisted in storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"light"` / `"dark"` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

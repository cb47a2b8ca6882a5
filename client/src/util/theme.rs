//! Light/dark theme preference for the profile page toggle.
//!
//! Reads the stored preference from `localStorage` (falling back to the
//! system color scheme) and applies it as a `dark` class on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; native builds always
//! report the light theme and applying is a no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "fyp_supervisor_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Icon for the toggle button: the theme it switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Read the stored theme, else the system preference.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(theme) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(Theme::parse) {
                return theme;
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Set or clear the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.class_list().toggle_with_force("dark", theme == Theme::Dark);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Switch theme, apply it, and persist the choice.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next
}

use log::Level;

/// localStorage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Added to the scroll offset so a section counts as active slightly before
/// its top edge reaches the viewport top (roughly the fixed nav height).
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

pub const CONTACT_PLACEHOLDER: &str = "Contact form integration with your backend required";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

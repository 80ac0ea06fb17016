use log::{info, warn};
use web_sys::Storage;

use crate::config::{DARK_CLASS, THEME_STORAGE_KEY};
use crate::error::StoreError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the exact string `"dark"` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Key-value store that survives reloads.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The element carrying the global dark-mode class.
pub trait StyleRoot {
    fn set_dark(&self, dark: bool);
}

/// `window.localStorage`, looked up on each call so a store that appears or
/// disappears mid-session is handled.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StoreError::Read(key.to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::Write(key.to_string()))
    }
}

/// `document.documentElement`, i.e. `<html>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl StyleRoot for DocumentRoot {
    fn set_dark(&self, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let classes = root.class_list();
        let result = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(err) = result {
            warn!("Failed to update root class list: {:?}", err);
        }
    }
}

/// Applies and persists the theme. Holds no theme state of its own; the page
/// component owns the current value.
pub struct ThemeController<S, R> {
    store: S,
    root: R,
}

impl ThemeController<LocalStore, DocumentRoot> {
    pub fn browser() -> Self {
        Self::new(LocalStore, DocumentRoot)
    }
}

impl<S: PreferenceStore, R: StyleRoot> ThemeController<S, R> {
    pub fn new(store: S, root: R) -> Self {
        Self { store, root }
    }

    /// Reads the saved preference on first load. Dark is applied to the root;
    /// anything else leaves both the root and the store untouched.
    pub fn restore(&self) -> Theme {
        let stored = match self.store.read(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!("Theme preference unreadable, defaulting to light: {}", err);
                None
            }
        };

        let theme = Theme::from_stored(stored.as_deref());
        if theme.is_dark() {
            info!("Restoring dark theme");
            self.root.set_dark(true);
        }
        theme
    }

    /// Flips `current`, applies it and saves it. Returns the new theme even if
    /// saving failed.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.root.set_dark(next.is_dark());
        if let Err(err) = self.store.write(THEME_STORAGE_KEY, next.as_str()) {
            warn!("Theme preference not saved: {}", err);
        }
        info!("Theme switched to {}", next.as_str());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        items: Rc<RefCell<HashMap<String, String>>>,
        writes: Rc<Cell<usize>>,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.items.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.get(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.writes.set(self.writes.get() + 1);
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write(key.to_string()))
        }
    }

    /// `None` until the controller touches it.
    #[derive(Clone, Default)]
    struct FakeRoot {
        dark: Rc<Cell<Option<bool>>>,
    }

    impl StyleRoot for FakeRoot {
        fn set_dark(&self, dark: bool) {
            self.dark.set(Some(dark));
        }
    }

    #[test]
    fn stored_dark_is_applied_on_load() {
        let store = MemoryStore::with("theme", "dark");
        let root = FakeRoot::default();
        let controller = ThemeController::new(store.clone(), root.clone());

        assert_eq!(controller.restore(), Theme::Dark);
        assert_eq!(root.dark.get(), Some(true));
        assert_eq!(store.writes.get(), 0);
    }

    #[test]
    fn missing_or_other_values_default_to_light_without_side_effects() {
        for stored in [None, Some("light"), Some("DARK"), Some(" dark"), Some("")] {
            let store = match stored {
                Some(value) => MemoryStore::with("theme", value),
                None => MemoryStore::default(),
            };
            let root = FakeRoot::default();
            let controller = ThemeController::new(store.clone(), root.clone());

            assert_eq!(controller.restore(), Theme::Light, "stored = {:?}", stored);
            assert_eq!(root.dark.get(), None);
            assert_eq!(store.writes.get(), 0);
            assert_eq!(store.get("theme").as_deref(), stored);
        }
    }

    #[test]
    fn toggle_persists_each_state() {
        let store = MemoryStore::default();
        let root = FakeRoot::default();
        let controller = ThemeController::new(store.clone(), root.clone());

        let theme = controller.toggle(controller.restore());
        assert_eq!(theme, Theme::Dark);
        assert_eq!(root.dark.get(), Some(true));
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        let theme = controller.toggle(theme);
        assert_eq!(theme, Theme::Light);
        assert_eq!(root.dark.get(), Some(false));
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn unreadable_store_means_light() {
        let root = FakeRoot::default();
        let controller = ThemeController::new(BrokenStore, root.clone());

        assert_eq!(controller.restore(), Theme::Light);
        assert_eq!(root.dark.get(), None);
    }

    #[test]
    fn failed_write_still_switches_the_page() {
        let root = FakeRoot::default();
        let controller = ThemeController::new(BrokenStore, root.clone());

        assert_eq!(controller.toggle(Theme::Light), Theme::Dark);
        assert_eq!(root.dark.get(), Some(true));
    }

    #[test]
    fn stored_values_parse_strictly() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}

//! Persisted visitor preferences: quiet mode and colour theme.
//!
//! Values are read once at startup and written back on every mutation. Any
//! storage failure is swallowed here and the value is kept in memory instead,
//! so the rest of the page never has to care whether persistence works.

use super::constants::{STORAGE_KEY_QUIET, STORAGE_KEY_THEME};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage rejected access to `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Neon,
    Dark,
}

impl Theme {
    /// Anything that is not exactly `"dark"` falls back to neon.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "dark" => Theme::Dark,
            _ => Theme::Neon,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Neon => "neon",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Neon => Theme::Dark,
            Theme::Dark => Theme::Neon,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub quiet: bool,
    pub theme: Theme,
}

impl Preferences {
    pub fn quiet_label(&self) -> String {
        format!("Quiet: {}", if self.quiet { "ON" } else { "OFF" })
    }

    pub fn theme_label(&self) -> String {
        format!(
            "Theme: {}",
            if self.theme == Theme::Neon { "NEON" } else { "DARK" }
        )
    }

    /// `aria-pressed` for the theme button reflects "neon is on".
    pub fn theme_pressed(&self) -> bool {
        self.theme == Theme::Neon
    }
}

#[inline]
fn parse_quiet(raw: &str) -> bool {
    matches!(raw, "1" | "true")
}

type Subscriber = Box<dyn FnMut(&Preferences)>;

pub struct PreferenceStore {
    storage: Box<dyn Storage>,
    fallback: MemoryStorage,
    prefs: Preferences,
    reduced_motion: bool,
    subscribers: Vec<Subscriber>,
}

impl PreferenceStore {
    pub fn load(storage: Box<dyn Storage>, reduced_motion: bool) -> Self {
        let mut store = Self {
            storage,
            fallback: MemoryStorage::default(),
            prefs: Preferences::default(),
            reduced_motion,
            subscribers: Vec::new(),
        };
        let theme = store
            .read(STORAGE_KEY_THEME)
            .map(|v| Theme::parse(&v))
            .unwrap_or_default();
        let quiet = store
            .read(STORAGE_KEY_QUIET)
            .map(|v| parse_quiet(&v))
            .unwrap_or(false);
        store.prefs = Preferences {
            quiet: quiet || reduced_motion,
            theme,
        };
        log::debug!(
            "[prefs] loaded quiet={} theme={}",
            store.prefs.quiet,
            store.prefs.theme.as_str()
        );
        store
    }

    pub fn prefs(&self) -> Preferences {
        self.prefs
    }

    pub fn quiet(&self) -> bool {
        self.prefs.quiet
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Preferences) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Reduced motion pins quiet on regardless of the requested value.
    pub fn set_quiet(&mut self, quiet: bool) -> bool {
        let quiet = quiet || self.reduced_motion;
        self.prefs.quiet = quiet;
        self.write(STORAGE_KEY_QUIET, if quiet { "1" } else { "0" });
        self.notify();
        quiet
    }

    pub fn toggle_quiet(&mut self) -> bool {
        self.set_quiet(!self.prefs.quiet)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Theme {
        self.prefs.theme = theme;
        self.write(STORAGE_KEY_THEME, theme.as_str());
        self.notify();
        theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.prefs.theme.toggled())
    }

    fn notify(&mut self) {
        let prefs = self.prefs;
        for s in &mut self.subscribers {
            s(&prefs);
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[prefs] read failed, using in-memory value: {}", e);
                self.fallback.get(key).ok().flatten()
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            log::warn!("[prefs] write failed, keeping value in memory: {}", e);
            _ = self.fallback.set(key, value);
        }
    }
}

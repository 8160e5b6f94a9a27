//! # Preference store
//!
//! Two user preferences survive a reload: language and theme. The store
//! has a two-phase lifecycle:
//!
//! 1. *created* — in-memory defaults only; `get()` is answerable but
//!    provisional.
//! 2. *restored* — `restore()` has adopted whatever valid values the
//!    storage slot held and pushed both into the environment sink.
//!
//! Consumers that render differently per preference must gate on
//! `is_restored()`; rendering a preference-dependent branch before the
//! restore pass is the flicker bug this contract exists to prevent.
//! A missing or unrecognized persisted value is the expected case on
//! first visit and silently keeps the default.

use std::cell::RefCell;
use std::rc::Rc;

use marquee_i18n::Language;

mod env;
mod storage;

pub use env::{EnvironmentSink, NullSink};
pub use storage::{FileStorage, MemoryStorage, PrefStorage};

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn token(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_token(token: &str) -> Option<Theme> {
        match token {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Preference {
    pub language: Language,
    pub theme: Theme,
}

struct State {
    language: Language,
    theme: Theme,
    restored: bool,
}

pub struct PreferenceStore {
    storage: Rc<dyn PrefStorage>,
    sink: Rc<dyn EnvironmentSink>,
    state: RefCell<State>,
}

impl PreferenceStore {
    pub fn new(storage: Rc<dyn PrefStorage>, sink: Rc<dyn EnvironmentSink>) -> Self {
        Self {
            storage,
            sink,
            state: RefCell::new(State {
                language: Language::default(),
                theme: Theme::default(),
                restored: false,
            }),
        }
    }

    pub fn get(&self) -> Preference {
        let s = self.state.borrow();
        Preference {
            language: s.language,
            theme: s.theme,
        }
    }

    pub fn language(&self) -> Language {
        self.state.borrow().language
    }

    pub fn theme(&self) -> Theme {
        self.state.borrow().theme
    }

    /// The hydration gate: false until `restore()` has run.
    pub fn is_restored(&self) -> bool {
        self.state.borrow().restored
    }

    /// Reads the persisted slots once. A persisted value wins over the
    /// default only when it parses to a recognized member; anything
    /// else is discarded without complaint. Later calls are no-ops.
    pub fn restore(&self) {
        {
            let mut s = self.state.borrow_mut();
            if s.restored {
                log::debug!("preference restore already ran; ignoring");
                return;
            }
            if let Some(raw) = self.storage.load(LANGUAGE_KEY) {
                match Language::from_code(&raw) {
                    Some(lang) => s.language = lang,
                    None => log::debug!("discarding unrecognized persisted language {raw:?}"),
                }
            }
            if let Some(raw) = self.storage.load(THEME_KEY) {
                match Theme::from_token(&raw) {
                    Some(theme) => s.theme = theme,
                    None => log::debug!("discarding unrecognized persisted theme {raw:?}"),
                }
            }
            s.restored = true;
        }
        let s = self.state.borrow();
        self.sink.set_locale(s.language);
        self.sink.set_color_scheme(s.theme);
    }

    pub fn set_language(&self, language: Language) {
        self.state.borrow_mut().language = language;
        self.storage.store(LANGUAGE_KEY, language.code());
        self.sink.set_locale(language);
    }

    pub fn set_theme(&self, theme: Theme) {
        self.state.borrow_mut().theme = theme;
        self.storage.store(THEME_KEY, theme.token());
        self.sink.set_color_scheme(theme);
    }

    pub fn toggle_theme(&self) {
        let next = self.theme().toggled();
        self.set_theme(next);
    }
}

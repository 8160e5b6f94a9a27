//! # Dictionaries and content
//!
//! Static trilingual text for the site. Two lookups live here:
//!
//! - `translate(lang, key)` — flat dictionary lookup. A missing key is
//!   never an error: the key itself is returned verbatim and a warning
//!   is logged, so rendering always has something to show.
//! - `content::portfolio_content(lang)` — the typed per-language
//!   portfolio tables (timeline, skills, achievements, education) the
//!   tab sections render.

use std::collections::HashMap;
use std::sync::OnceLock;

pub mod content;
mod en;
mod ru;
mod uz;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    Uz,
    Ru,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Uz, Language::Ru, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }
}

type Dict = HashMap<&'static str, &'static str>;

fn dictionary(lang: Language) -> &'static Dict {
    static UZ: OnceLock<Dict> = OnceLock::new();
    static RU: OnceLock<Dict> = OnceLock::new();
    static EN: OnceLock<Dict> = OnceLock::new();

    let (cell, entries) = match lang {
        Language::Uz => (&UZ, uz::ENTRIES),
        Language::Ru => (&RU, ru::ENTRIES),
        Language::En => (&EN, en::ENTRIES),
    };
    cell.get_or_init(|| entries.iter().copied().collect())
}

/// Looks `key` up in `lang`'s dictionary. Falls back to the raw key
/// (with a warning) when the key is missing, so a typo degrades to
/// visible-but-safe output instead of a failure.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    match dictionary(lang).get(key) {
        Some(text) => text,
        None => {
            log::warn!("translation key {key:?} not found in [{}]", lang.code());
            key
        }
    }
}

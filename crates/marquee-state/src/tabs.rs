use std::cell::Cell;

/// The portfolio's fixed section set.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Tab {
    #[default]
    Experience,
    Skills,
    Achievements,
    Education,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Experience, Tab::Skills, Tab::Achievements, Tab::Education];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Experience => "experience",
            Tab::Skills => "skills",
            Tab::Achievements => "achievements",
            Tab::Education => "education",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Exclusive choice over the section set. No history, no guards, no
/// side effects; the presentation layer maps `active` to content.
#[derive(Default)]
pub struct TabSelection {
    active: Cell<Tab>,
}

impl TabSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active.get()
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active.get() == tab
    }

    pub fn select(&self, tab: Tab) {
        self.active.set(tab);
    }

    /// Unknown keys are ignored without complaint.
    pub fn select_key(&self, key: &str) {
        if let Some(tab) = Tab::from_key(key) {
            self.active.set(tab);
        }
    }
}

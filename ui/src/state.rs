use yewdux::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Global UI state. Deliberately small: endpoint data is never cached here,
/// each consumer polls independently.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub theme_mode: ThemeMode,
    pub system_prefers_dark: bool,
}

impl State {
    pub fn is_dark_mode(&self) -> bool {
        match self.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => self.system_prefers_dark,
        }
    }
}

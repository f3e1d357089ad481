//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{FormFields, Settings};
use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{AlertState, App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // Load settings first to initialize locale correctly
        let settings = Settings::load();
        let locale = {
            let lang = if settings.display.language == "en" {
                Language::English
            } else {
                Language::Spanish
            };
            Locale::new(lang)
        };

        let app = Self {
            core: CoreState::new(settings, locale),
            form: FormFields::default(),
            ui: UiState::new(),
        };

        (app, Task::none())
    }

    /// Application theme from the persisted dark mode flag
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

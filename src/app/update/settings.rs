//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::{Language, Locale};

impl App {
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                tracing::info!("Dark mode: {}", enabled);
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }
            Message::UpdateAppLanguage(language) => {
                self.core.settings.display.language = language.clone();
                // Update locale for i18n
                let lang = if language == "en" {
                    Language::English
                } else {
                    Language::Spanish
                };
                self.core.locale = Locale::new(lang);
                tracing::info!("Language changed to: {}", language);
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }
            Message::SaveSettings => {
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                } else {
                    tracing::info!("Settings saved successfully");
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CoreState, UiState};
    use crate::features::{FormFields, Settings};

    fn test_app() -> App {
        App {
            core: CoreState::new(Settings::default(), Locale::default()),
            form: FormFields::default(),
            ui: UiState::new(),
        }
    }

    #[test]
    fn dark_mode_update_flips_the_flag() {
        let mut app = test_app();
        assert!(!app.core.settings.display.dark_mode);

        let task = app.handle_settings(&Message::UpdateDarkMode(true));
        assert!(task.is_some(), "handler must schedule a settings save");
        assert!(app.core.settings.display.dark_mode);

        let _ = app.handle_settings(&Message::UpdateDarkMode(false));
        assert!(!app.core.settings.display.dark_mode);
    }

    #[test]
    fn language_update_switches_the_locale() {
        let mut app = test_app();
        assert_eq!(app.core.locale.language, Language::Spanish);

        let task = app.handle_settings(&Message::UpdateAppLanguage("en".to_string()));
        assert!(task.is_some(), "handler must schedule a settings save");
        assert_eq!(app.core.settings.display.language, "en");
        assert_eq!(app.core.locale.language, Language::English);

        let _ = app.handle_settings(&Message::UpdateAppLanguage("es".to_string()));
        assert_eq!(app.core.locale.language, Language::Spanish);
    }

    #[test]
    fn unknown_language_codes_fall_back_to_spanish() {
        let mut app = test_app();
        let _ = app.handle_settings(&Message::UpdateAppLanguage("fr".to_string()));
        assert_eq!(app.core.locale.language, Language::Spanish);
    }

    #[test]
    fn form_messages_are_not_handled_here() {
        let mut app = test_app();
        assert!(app.handle_settings(&Message::SubmitForm).is_none());
        assert!(app.handle_settings(&Message::DismissAlert).is_none());
    }
}

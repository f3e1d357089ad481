//! Internationalization (i18n) support
//! Supports multiple languages with easy extensibility
//!
//! Structure:
//! - mod.rs: Core types (Language, Key, Locale) and translation lookup
//! - es.rs: Spanish translations (the product's canonical strings)
//! - en.rs: English translations

mod en;
mod es;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Spanish => "Español",
            Language::English => "English",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::Spanish, Language::English]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Form page
    FormTitle,
    FieldNumberLabel,
    FieldNumberPlaceholder,
    FieldAmountLabel,
    FieldAmountPlaceholder,
    FieldMessageLabel,
    FieldMessagePlaceholder,
    SubmitButton,

    // Alerts
    AlertErrorTitle,
    AlertMissingRequired,
    AlertSentTitle,
    AlertDismiss,

    // Submission summary labels
    SummaryNumber,
    SummaryAmount,
    SummaryMessage,

    // Settings bar
    SettingsDarkMode,
    SettingsLanguage,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::Spanish => es::translations(),
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [Key; 18] = [
        Key::AppName,
        Key::FormTitle,
        Key::FieldNumberLabel,
        Key::FieldNumberPlaceholder,
        Key::FieldAmountLabel,
        Key::FieldAmountPlaceholder,
        Key::FieldMessageLabel,
        Key::FieldMessagePlaceholder,
        Key::SubmitButton,
        Key::AlertErrorTitle,
        Key::AlertMissingRequired,
        Key::AlertSentTitle,
        Key::AlertDismiss,
        Key::SummaryNumber,
        Key::SummaryAmount,
        Key::SummaryMessage,
        Key::SettingsDarkMode,
        Key::SettingsLanguage,
    ];

    #[test]
    fn every_key_resolves_in_every_language() {
        for lang in Language::all() {
            for key in ALL_KEYS {
                assert_ne!(
                    t(*lang, key),
                    "???",
                    "missing translation for {:?} in {:?}",
                    key,
                    lang
                );
            }
        }
    }

    #[test]
    fn spanish_is_the_default() {
        let locale = Locale::default();
        assert_eq!(locale.language, Language::Spanish);
    }

    #[test]
    fn spanish_carries_the_fixed_strings() {
        let locale = Locale::new(Language::Spanish);
        assert_eq!(locale.get(Key::FormTitle), "Formulario de Ejemplo");
        assert_eq!(locale.get(Key::SubmitButton), "ENVIAR");
        assert_eq!(locale.get(Key::AlertErrorTitle), "Error");
        assert_eq!(
            locale.get(Key::AlertMissingRequired),
            "Por favor complete los campos requeridos"
        );
        assert_eq!(locale.get(Key::AlertSentTitle), "Formulario Enviado");
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::all() {
            let matched = if lang.code() == "en" {
                Language::English
            } else {
                Language::Spanish
            };
            assert_eq!(*lang, matched);
        }
    }
}

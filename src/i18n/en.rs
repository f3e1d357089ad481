//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Formulario");

    // Form page
    m.insert(Key::FormTitle, "Example Form");
    m.insert(Key::FieldNumberLabel, "Number:");
    m.insert(Key::FieldNumberPlaceholder, "Enter a number");
    m.insert(Key::FieldAmountLabel, "Amount S/:");
    m.insert(Key::FieldAmountPlaceholder, "Enter the amount");
    m.insert(Key::FieldMessageLabel, "Message:");
    m.insert(Key::FieldMessagePlaceholder, "Write your message");
    m.insert(Key::SubmitButton, "SEND");

    // Alerts
    m.insert(Key::AlertErrorTitle, "Error");
    m.insert(Key::AlertMissingRequired, "Please fill in the required fields");
    m.insert(Key::AlertSentTitle, "Form Sent");
    m.insert(Key::AlertDismiss, "OK");

    // Submission summary labels
    m.insert(Key::SummaryNumber, "Number");
    m.insert(Key::SummaryAmount, "Amount");
    m.insert(Key::SummaryMessage, "Message");

    // Settings bar
    m.insert(Key::SettingsDarkMode, "Dark mode");
    m.insert(Key::SettingsLanguage, "Language");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}

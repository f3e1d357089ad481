//! Spanish translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Formulario");

    // Form page
    m.insert(Key::FormTitle, "Formulario de Ejemplo");
    m.insert(Key::FieldNumberLabel, "Número:");
    m.insert(Key::FieldNumberPlaceholder, "Ingrese un número");
    m.insert(Key::FieldAmountLabel, "Monto S/:");
    m.insert(Key::FieldAmountPlaceholder, "Ingrese el monto");
    m.insert(Key::FieldMessageLabel, "Mensaje:");
    m.insert(Key::FieldMessagePlaceholder, "Escriba su mensaje");
    m.insert(Key::SubmitButton, "ENVIAR");

    // Alerts
    m.insert(Key::AlertErrorTitle, "Error");
    m.insert(
        Key::AlertMissingRequired,
        "Por favor complete los campos requeridos",
    );
    m.insert(Key::AlertSentTitle, "Formulario Enviado");
    m.insert(Key::AlertDismiss, "OK");

    // Submission summary labels
    m.insert(Key::SummaryNumber, "Número");
    m.insert(Key::SummaryAmount, "Monto");
    m.insert(Key::SummaryMessage, "Mensaje");

    // Settings bar
    m.insert(Key::SettingsDarkMode, "Modo oscuro");
    m.insert(Key::SettingsLanguage, "Idioma");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}

//! Application messages

use crate::features::Field;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Form ============
    /// A field's text was edited
    FieldChanged(Field, String),
    /// Submit requested (button press or Enter in a required field)
    SubmitForm,
    /// Active alert acknowledged (button or backdrop click)
    DismissAlert,

    // ============ Settings ============
    /// Update display settings
    UpdateDarkMode(bool),
    UpdateAppLanguage(String),
    /// Save settings
    SaveSettings,
}

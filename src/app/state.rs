// src/app/state.rs
//! Application state definitions

use crate::features::{FormFields, Settings, Submission};
use crate::i18n::Locale;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, locale)
    pub core: CoreState,
    /// The form being edited
    pub form: FormFields,
    /// UI state (active overlays)
    pub ui: UiState,
}

/// Core infrastructure and services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
}

impl CoreState {
    /// Initialize core state with loaded settings
    pub fn new(settings: Settings, locale: Locale) -> Self {
        Self { settings, locale }
    }
}

/// UI state
pub struct UiState {
    /// Currently shown modal alert, if any
    pub alert: Option<AlertState>,
}

impl UiState {
    pub fn new() -> Self {
        Self { alert: None }
    }
}

/// Which alert is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertState {
    /// Validation failed: a required field is missing
    MissingFields,
    /// Submission accepted; carries what was sent
    Sent(Submission),
}

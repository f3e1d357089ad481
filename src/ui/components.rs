//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic. They are the
//! only UI layer that should import from `crate::app`.

pub mod alert;
pub mod settings_bar;

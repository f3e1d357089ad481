//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod form;
pub mod settings;

pub use form::{Field, FormFields, Submission, SubmitOutcome};
pub use settings::Settings;

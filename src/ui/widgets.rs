//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app`
//! directly; callbacks stay generic over the message type.

mod labeled_input;

pub use labeled_input::labeled_input;

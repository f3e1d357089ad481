//! UI module for the form application
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Full-screen views composed from the layers below

pub mod components;
pub mod pages;
pub mod theme;
pub mod widgets;

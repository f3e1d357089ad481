// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, stack};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, pages};

impl App {
    /// Build the application view
    pub fn view(&self) -> Element<'_, Message> {
        let settings_bar = components::settings_bar::view(&self.core.settings, self.core.locale);
        let form_page = pages::form::view(&self.form, self.core.locale);

        let main_layout: Element<'_, Message> = column![settings_bar, form_page]
            .width(Fill)
            .height(Fill)
            .into();

        // Alert overlay (empty space if not visible)
        let alert_overlay: Element<'_, Message> = if let Some(alert) = &self.ui.alert {
            components::alert::view(alert, self.core.locale)
        } else {
            Space::new().width(0).height(0).into()
        };

        stack![main_layout, alert_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}

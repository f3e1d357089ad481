//! Settings bar component
//!
//! Compact row above the form: language selection and dark mode.

use iced::widget::{Space, pick_list, row, text, toggler};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Settings;
use crate::i18n::{Key, Language, Locale};
use crate::ui::theme;

/// Build the settings bar
pub fn view(settings: &Settings, locale: Locale) -> Element<'static, Message> {
    let current_language = if settings.display.language == "en" {
        Language::English
    } else {
        Language::Spanish
    };

    let language_pick = pick_list(
        Language::all().to_vec(),
        Some(current_language),
        |lang: Language| Message::UpdateAppLanguage(lang.code().to_string()),
    )
    .text_size(13)
    .padding([6, 10])
    .style(theme::settings_pick_list)
    .menu_style(theme::settings_pick_list_menu);

    let language_label = text(locale.get(Key::SettingsLanguage).to_string())
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::settings_label(theme)),
        });

    let dark_mode_label = text(locale.get(Key::SettingsDarkMode).to_string())
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::settings_label(theme)),
        });

    let dark_mode_toggle = toggler(settings.display.dark_mode)
        .on_toggle(Message::UpdateDarkMode)
        .size(24);

    row![
        language_label,
        Space::new().width(8),
        language_pick,
        Space::new().width(Fill),
        dark_mode_label,
        Space::new().width(8),
        dark_mode_toggle,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(12.0).left(20.0).right(20.0))
    .into()
}

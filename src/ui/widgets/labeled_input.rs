//! Labeled text input widget
//!
//! A field label stacked over a styled text input. Generic over the
//! message type so it stays free of application wiring.

use iced::widget::{Space, column, text, text_input};
use iced::Element;

use crate::ui::theme;

/// Build a label + input pair
///
/// `on_submit` is delivered when Enter is pressed inside the input;
/// pass `None` for fields where Enter should do nothing.
pub fn labeled_input<'a, Message>(
    label: &str,
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let label_widget = text(label.to_string())
        .size(16)
        .style(|theme| text::Style {
            color: Some(theme::field_label(theme)),
        })
        .font(iced::Font {
            weight: theme::MEDIUM_WEIGHT,
            ..Default::default()
        });

    let mut input = text_input(placeholder, value)
        .on_input(on_input)
        .padding(10)
        .size(16)
        .style(theme::form_input);
    if let Some(message) = on_submit {
        input = input.on_submit(message);
    }

    column![label_widget, Space::new().height(5), input].into()
}

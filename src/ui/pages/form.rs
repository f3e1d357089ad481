//! Form page
//!
//! The single screen of the application: a centered title and a raised
//! card with the three fields and the submit button.

use iced::widget::{Space, button, column, container, scrollable, text};
use iced::{Element, Fill};

use crate::app::Message;
use crate::features::{Field, FormFields};
use crate::i18n::{Key, Locale};
use crate::ui::{theme, widgets};

/// Build the form page
pub fn view(fields: &FormFields, locale: Locale) -> Element<'static, Message> {
    let title = text(locale.get(Key::FormTitle).to_string())
        .size(24)
        .style(|theme| text::Style {
            color: Some(theme::form_title(theme)),
        })
        .font(iced::Font {
            weight: theme::BOLD_WEIGHT,
            ..Default::default()
        });

    let number_input = widgets::labeled_input(
        locale.get(Key::FieldNumberLabel),
        locale.get(Key::FieldNumberPlaceholder),
        fields.get(Field::Number),
        |value| Message::FieldChanged(Field::Number, value),
        Some(Message::SubmitForm),
    );

    let amount_input = widgets::labeled_input(
        locale.get(Key::FieldAmountLabel),
        locale.get(Key::FieldAmountPlaceholder),
        fields.get(Field::Amount),
        |value| Message::FieldChanged(Field::Amount, value),
        Some(Message::SubmitForm),
    );

    let message_input = widgets::labeled_input(
        locale.get(Key::FieldMessageLabel),
        locale.get(Key::FieldMessagePlaceholder),
        fields.get(Field::Message),
        |value| Message::FieldChanged(Field::Message, value),
        None,
    );

    let submit_btn = button(
        container(
            text(locale.get(Key::SubmitButton).to_string())
                .size(16)
                .font(iced::Font {
                    weight: theme::BOLD_WEIGHT,
                    ..Default::default()
                }),
        )
        .width(Fill)
        .center_x(Fill),
    )
    .width(Fill)
    .padding(15)
    .style(theme::submit_button)
    .on_press(Message::SubmitForm);

    let form_card = container(
        column![
            number_input,
            Space::new().height(15),
            amount_input,
            Space::new().height(15),
            message_input,
            Space::new().height(25),
            submit_btn,
        ]
        .width(Fill),
    )
    .width(Fill)
    .padding(20)
    .style(theme::form_card);

    let content = column![
        Space::new().height(16),
        container(title).width(Fill).center_x(Fill),
        Space::new().height(16),
        form_card,
        Space::new().height(20),
    ]
    .width(Fill)
    .padding(20);

    container(scrollable(content).width(Fill).height(Fill))
        .width(Fill)
        .height(Fill)
        .style(theme::page)
        .into()
}

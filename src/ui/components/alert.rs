//! Modal alert dialog component
//!
//! A single-button acknowledgement dialog stacked over the form, used
//! for both the validation error and the submission confirmation.
//! Clicking the backdrop dismisses it, like every other overlay.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Color, Element, Fill};

use crate::app::{AlertState, Message};
use crate::features::Submission;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Body text for the confirmation alert
///
/// One line per field, amount prefixed with the currency marker.
/// Values appear exactly as submitted, surrounding whitespace included.
pub fn sent_body(submission: &Submission, locale: Locale) -> String {
    format!(
        "{}: {}\n{}: S/ {}\n{}: {}",
        locale.get(Key::SummaryNumber),
        submission.number,
        locale.get(Key::SummaryAmount),
        submission.amount,
        locale.get(Key::SummaryMessage),
        submission.message,
    )
}

/// Build the alert dialog overlay
pub fn view(alert: &AlertState, locale: Locale) -> Element<'static, Message> {
    let (title, body) = match alert {
        AlertState::MissingFields => (
            locale.get(Key::AlertErrorTitle).to_string(),
            locale.get(Key::AlertMissingRequired).to_string(),
        ),
        AlertState::Sent(submission) => (
            locale.get(Key::AlertSentTitle).to_string(),
            sent_body(submission, locale),
        ),
    };

    let title = text(title)
        .size(18)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: theme::BOLD_WEIGHT,
            ..Default::default()
        });

    let body = text(body).size(14).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    let dismiss_btn = button(
        text(locale.get(Key::AlertDismiss).to_string())
            .size(14)
            .color(Color::WHITE),
    )
    .padding([10, 24])
    .style(theme::dialog_button)
    .on_press(Message::DismissAlert);

    let buttons = row![Space::new().width(Fill), dismiss_btn];

    let dialog_content = column![
        title,
        Space::new().height(8),
        body,
        Space::new().height(20),
        buttons,
    ]
    .width(320)
    .padding(24);

    let dialog_box = container(dialog_content).style(theme::dialog);

    // Backdrop with event interception
    let backdrop_content = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::overlay_backdrop(theme, 0.5))),
            ..Default::default()
        });

    // mouse_area with interaction set to Idle to reset cursor
    // on_press to capture click events (clicking backdrop dismisses)
    let event_blocker = mouse_area(backdrop_content)
        .interaction(Interaction::Idle)
        .on_press(Message::DismissAlert);

    // opaque to block all mouse button events from propagating
    opaque(event_blocker).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn submission(number: &str, amount: &str, message: &str) -> Submission {
        Submission {
            number: number.to_string(),
            amount: amount.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn sent_body_lists_every_field() {
        let body = sent_body(
            &submission("123", "45.50", "hola"),
            Locale::new(Language::Spanish),
        );
        assert_eq!(body, "Número: 123\nMonto: S/ 45.50\nMensaje: hola");
    }

    #[test]
    fn amount_carries_the_currency_marker() {
        let body = sent_body(
            &submission("1", "99.90", ""),
            Locale::new(Language::Spanish),
        );
        assert!(body.contains("S/ 99.90"));
    }

    #[test]
    fn values_are_rendered_untrimmed() {
        let body = sent_body(
            &submission("  7  ", "1", ""),
            Locale::new(Language::Spanish),
        );
        assert!(body.contains("Número:   7  \n"));
    }

    #[test]
    fn empty_message_renders_as_blank_line() {
        let body = sent_body(&submission("5", "2", ""), Locale::new(Language::Spanish));
        assert!(body.ends_with("Mensaje: "));
    }

    #[test]
    fn english_locale_translates_the_labels() {
        let body = sent_body(
            &submission("123", "45.50", "hola"),
            Locale::new(Language::English),
        );
        assert_eq!(body, "Number: 123\nAmount: S/ 45.50\nMessage: hola");
    }
}

//! Form update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{AlertState, App};
use crate::features::SubmitOutcome;

impl App {
    pub fn handle_form(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            // The overlay blocks the pointer but not the keyboard; drop
            // form input while an alert is up.
            Message::FieldChanged(field, value) if self.ui.alert.is_none() => {
                self.form.set(*field, value.clone());
                Some(Task::none())
            }
            Message::SubmitForm if self.ui.alert.is_none() => {
                match self.form.submit() {
                    SubmitOutcome::MissingFields => {
                        self.ui.alert = Some(AlertState::MissingFields);
                    }
                    SubmitOutcome::Sent(submission) => {
                        tracing::info!(
                            "Formulario enviado: numero={:?} monto={:?} mensaje={:?}",
                            submission.number,
                            submission.amount,
                            submission.message
                        );
                        self.ui.alert = Some(AlertState::Sent(submission));
                    }
                }
                Some(Task::none())
            }
            Message::DismissAlert => {
                self.ui.alert = None;
                Some(Task::none())
            }
            _ => None,
        }
    }
}

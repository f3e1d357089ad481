//! Form state and submission logic
//!
//! Pure state handling for the example form: three free-form text
//! fields, presence-validation on the two required ones, and the
//! submit transition. No UI types in here.

/// The three editable fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// "Número" - intended numeric, stored as free text
    Number,
    /// "Monto" - intended currency amount in soles, stored as free text
    Amount,
    /// "Mensaje" - optional free-form text
    Message,
}

/// Current form field values
///
/// Values are stored exactly as typed. Trimming happens only inside
/// the submit check, never against the stored text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub number: String,
    pub amount: String,
    pub message: String,
}

/// A successfully submitted set of field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub number: String,
    pub amount: String,
    pub message: String,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was empty or whitespace-only; fields untouched
    MissingFields,
    /// Validation passed; fields were taken into the submission and reset
    Sent(Submission),
}

impl FormFields {
    /// Get the current text of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Number => &self.number,
            Field::Amount => &self.amount,
            Field::Message => &self.message,
        }
    }

    /// Overwrite a field with new text (last write wins)
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Number => self.number = value,
            Field::Amount => self.amount = value,
            Field::Message => self.message = value,
        }
    }

    /// True when both required fields contain non-whitespace text
    pub fn is_complete(&self) -> bool {
        !self.number.trim().is_empty() && !self.amount.trim().is_empty()
    }

    /// Attempt to submit the form
    ///
    /// On success the untrimmed values move into the returned
    /// [`Submission`] and all fields reset to empty in the same step.
    /// On failure the fields are left exactly as they were.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_complete() {
            return SubmitOutcome::MissingFields;
        }

        SubmitOutcome::Sent(Submission {
            number: std::mem::take(&mut self.number),
            amount: std::mem::take(&mut self.amount),
            message: std::mem::take(&mut self.message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(number: &str, amount: &str, message: &str) -> FormFields {
        FormFields {
            number: number.to_string(),
            amount: amount.to_string(),
            message: message.to_string(),
        }
    }

    mod field_edits {
        use super::*;

        #[test]
        fn starts_empty() {
            let fields = FormFields::default();
            assert_eq!(fields.get(Field::Number), "");
            assert_eq!(fields.get(Field::Amount), "");
            assert_eq!(fields.get(Field::Message), "");
        }

        #[test]
        fn set_then_get_round_trips() {
            let mut fields = FormFields::default();
            for (field, value) in [
                (Field::Number, "123"),
                (Field::Amount, "45.50"),
                (Field::Message, "hola"),
            ] {
                fields.set(field, value.to_string());
                assert_eq!(fields.get(field), value);
            }
        }

        #[test]
        fn last_write_wins() {
            let mut fields = FormFields::default();
            fields.set(Field::Number, "1".to_string());
            fields.set(Field::Number, "12".to_string());
            fields.set(Field::Number, "123".to_string());
            assert_eq!(fields.number, "123");
        }

        #[test]
        fn edits_do_not_touch_other_fields() {
            let mut fields = filled("1", "2", "3");
            fields.set(Field::Amount, "9.99".to_string());
            assert_eq!(fields.number, "1");
            assert_eq!(fields.message, "3");
        }
    }

    mod submit_validation {
        use super::*;

        #[test]
        fn empty_number_is_rejected() {
            let mut fields = filled("", "10.00", "hi");
            let before = fields.clone();
            assert_eq!(fields.submit(), SubmitOutcome::MissingFields);
            assert_eq!(fields, before, "failed submit must not change state");
        }

        #[test]
        fn whitespace_number_is_rejected() {
            let mut fields = filled("   ", "10.00", "hi");
            let before = fields.clone();
            assert_eq!(fields.submit(), SubmitOutcome::MissingFields);
            assert_eq!(fields, before);
        }

        #[test]
        fn empty_amount_is_rejected() {
            let mut fields = filled("42", "", "hi");
            let before = fields.clone();
            assert_eq!(fields.submit(), SubmitOutcome::MissingFields);
            assert_eq!(fields, before);
        }

        #[test]
        fn whitespace_amount_is_rejected() {
            let mut fields = filled("42", " \t ", "");
            let before = fields.clone();
            assert_eq!(fields.submit(), SubmitOutcome::MissingFields);
            assert_eq!(fields, before);
        }

        #[test]
        fn both_missing_is_rejected() {
            let mut fields = FormFields::default();
            assert_eq!(fields.submit(), SubmitOutcome::MissingFields);
        }

        #[test]
        fn message_is_optional() {
            let mut fields = filled("1", "2", "");
            assert!(matches!(fields.submit(), SubmitOutcome::Sent(_)));
        }
    }

    mod submit_success {
        use super::*;

        #[test]
        fn values_move_into_submission_and_fields_reset() {
            let mut fields = filled("123", "45.50", "hola");
            match fields.submit() {
                SubmitOutcome::Sent(submission) => {
                    assert_eq!(submission.number, "123");
                    assert_eq!(submission.amount, "45.50");
                    assert_eq!(submission.message, "hola");
                }
                SubmitOutcome::MissingFields => panic!("complete form must submit"),
            }
            assert_eq!(fields, FormFields::default());
        }

        #[test]
        fn stored_values_are_not_trimmed() {
            // Whitespace passes the presence check but is kept verbatim
            let mut fields = filled("  7  ", "1", "");
            match fields.submit() {
                SubmitOutcome::Sent(submission) => {
                    assert_eq!(submission.number, "  7  ");
                }
                SubmitOutcome::MissingFields => panic!("\"  7  \" must pass the trim check"),
            }
        }

        #[test]
        fn repeated_submissions_behave_identically() {
            let mut fields = FormFields::default();
            for _ in 0..2 {
                fields.set(Field::Number, "9".to_string());
                fields.set(Field::Amount, "0.50".to_string());
                fields.set(Field::Message, "otra vez".to_string());
                match fields.submit() {
                    SubmitOutcome::Sent(submission) => {
                        assert_eq!(submission.number, "9");
                        assert_eq!(submission.amount, "0.50");
                        assert_eq!(submission.message, "otra vez");
                    }
                    SubmitOutcome::MissingFields => panic!("complete form must submit"),
                }
                assert_eq!(fields, FormFields::default());
            }
        }

        #[test]
        fn failed_then_fixed_submission_succeeds() {
            let mut fields = filled("", "3.00", "pendiente");
            assert_eq!(fields.submit(), SubmitOutcome::MissingFields);
            assert_eq!(fields.message, "pendiente");

            fields.set(Field::Number, "8".to_string());
            assert!(matches!(fields.submit(), SubmitOutcome::Sent(_)));
            assert_eq!(fields, FormFields::default());
        }
    }
}

use crate::model::ValidationError;
use crate::sheets::SubmitError;

use super::step::Step;

/// Why a wizard transition did not happen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The requested action is not available on the current step.
    #[error("cannot {action} from {from}")]
    NotAllowed { from: Step, action: &'static str },

    /// Required fields are missing.
    #[error("{}", describe(.0))]
    Validation(Vec<ValidationError>),

    /// The row could not be appended.
    #[error("Failed to submit data: {0}")]
    Submit(#[from] SubmitError),
}

fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    #[test]
    fn validation_joins_messages() {
        let err = TransitionError::Validation(vec![
            ValidationError::Required(Field::Email),
            ValidationError::Required(Field::LotCode),
        ]);
        assert_eq!(err.to_string(), "email is required; lot code is required");
    }

    #[test]
    fn submit_prefixes_message() {
        let err = TransitionError::from(SubmitError::Transport("network unreachable".into()));
        assert_eq!(err.to_string(), "Failed to submit data: network unreachable");
    }

    #[test]
    fn not_allowed_names_step() {
        let err = TransitionError::NotAllowed {
            from: Step::Success,
            action: "go back",
        };
        assert_eq!(err.to_string(), "cannot go back from step 4");
    }
}

use std::fmt;

/// Number of data-entry steps before the terminal one.
pub const ENTRY_STEPS: u8 = 3;

/// The four states of the inspection wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    /// Inspector and lot identification.
    #[default]
    Identification,
    /// Dimensions and bundling.
    Dimensions,
    /// Visual inspection, photos and final submit.
    VisualInspection,
    /// Terminal confirmation after a successful submit.
    Success,
}

impl Step {
    /// The step's cursor value, 1 to 4.
    pub fn cursor(self) -> u8 {
        match self {
            Self::Identification => 1,
            Self::Dimensions => 2,
            Self::VisualInspection => 3,
            Self::Success => 4,
        }
    }

    /// Completed fraction of the wizard: `(cursor - 1) / 3`.
    pub fn progress(self) -> f64 {
        f64::from(self.cursor() - 1) / f64::from(ENTRY_STEPS)
    }

    /// Screen title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Identification => "Step 1: Inspection Identification",
            Self::Dimensions => "Step 2: Dimensions and Bundling",
            Self::VisualInspection => "Step 3: Visual Inspection and Submit",
            Self::Success => "Inspection Recorded",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.cursor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identification() {
        assert_eq!(Step::default(), Step::Identification);
        assert_eq!(Step::default().cursor(), 1);
    }

    #[test]
    fn cursors_follow_step_order() {
        let cursors: Vec<u8> = [
            Step::Identification,
            Step::Dimensions,
            Step::VisualInspection,
            Step::Success,
        ]
        .into_iter()
        .map(Step::cursor)
        .collect();
        assert_eq!(cursors, vec![1, 2, 3, 4]);
    }

    #[test]
    fn progress_is_linear() {
        assert_eq!(Step::Identification.progress(), 0.0);
        assert!((Step::Dimensions.progress() - 1.0 / 3.0).abs() < f64::EPSILON);
        assert!((Step::VisualInspection.progress() - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(Step::Success.progress(), 1.0);
    }
}

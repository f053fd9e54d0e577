use std::fmt;

/// Outcome of one visual-defect check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rating {
    #[default]
    Conforming,
    NonConforming,
    NotApplicable,
}

static ALL_RATINGS: &[Rating] = &[
    Rating::Conforming,
    Rating::NonConforming,
    Rating::NotApplicable,
];

impl Rating {
    /// Returns all ratings in display order.
    pub fn all() -> &'static [Rating] {
        ALL_RATINGS
    }

    /// The value written to the worksheet. Matches the vocabulary already in
    /// the shared spreadsheet, which is kept in Portuguese.
    pub fn sheet_value(&self) -> &'static str {
        match self {
            Rating::Conforming => "Conforme",
            Rating::NonConforming => "Não Conforme",
            Rating::NotApplicable => "Não Aplicável",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rating::Conforming => "Conforming",
            Rating::NonConforming => "Non-Conforming",
            Rating::NotApplicable => "Not Applicable",
        })
    }
}

/// The six visual defects checked in step 3, in worksheet column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Defect {
    Bluestain,
    Crook,
    DeadKnot,
    Wane,
    SpikeKnot,
    ToolMarks,
}

static ALL_DEFECTS: &[Defect] = &[
    Defect::Bluestain,
    Defect::Crook,
    Defect::DeadKnot,
    Defect::Wane,
    Defect::SpikeKnot,
    Defect::ToolMarks,
];

impl Defect {
    /// Returns all defects in column order.
    pub fn all() -> &'static [Defect] {
        ALL_DEFECTS
    }
}

#[mutants::skip]
impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Defect::Bluestain => "Bluestain",
            Defect::Crook => "Crook",
            Defect::DeadKnot => "Dead knot",
            Defect::Wane => "Wane",
            Defect::SpikeKnot => "Spike knot",
            Defect::ToolMarks => "Tool marks",
        })
    }
}

/// Step 3 answers that are not stored between steps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisualInspection {
    /// One rating per [`Defect`], indexed in [`Defect::all`] order.
    pub ratings: [Rating; 6],
    /// Final score, 0 to 100.
    pub final_score: u8,
}

/// Returns the rating after `current`, wrapping around.
pub fn cycle_rating(current: Rating, forward: bool) -> Rating {
    let items = Rating::all();
    let pos = items.iter().position(|&r| r == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_conforming() {
        assert_eq!(Rating::default(), Rating::Conforming);
    }

    #[test]
    fn sheet_values_match_worksheet_vocabulary() {
        assert_eq!(Rating::Conforming.sheet_value(), "Conforme");
        assert_eq!(Rating::NonConforming.sheet_value(), "Não Conforme");
        assert_eq!(Rating::NotApplicable.sheet_value(), "Não Aplicável");
    }

    #[test]
    fn cycle_forward_wraps() {
        assert_eq!(cycle_rating(Rating::Conforming, true), Rating::NonConforming);
        assert_eq!(
            cycle_rating(Rating::NonConforming, true),
            Rating::NotApplicable
        );
        assert_eq!(cycle_rating(Rating::NotApplicable, true), Rating::Conforming);
    }

    #[test]
    fn cycle_backward_wraps() {
        assert_eq!(cycle_rating(Rating::Conforming, false), Rating::NotApplicable);
    }

    #[test]
    fn six_defects() {
        assert_eq!(Defect::all().len(), 6);
    }
}

use chrono::NaiveDateTime;

use crate::model::{
    Field, FieldValue, FormStore, InspectionDraft, Photo, SubmissionRow, ValidationError,
    VisualInspection,
};
use crate::sheets::RowSink;

use super::error::TransitionError;
use super::input::{Dimensions, Identification};
use super::step::Step;

/// One inspector's pass through the wizard: the answers so far plus the cursor.
///
/// Every transition checks the current step first; a rejected transition
/// leaves both store and cursor untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    store: FormStore,
    step: Step,
}

impl Session {
    /// Starts on step 1 with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// The current cursor value, 1 to 4.
    pub fn cursor(&self) -> u8 {
        self.step.cursor()
    }

    /// Completed fraction of the wizard.
    pub fn progress(&self) -> f64 {
        self.step.progress()
    }

    /// The answers stored so far.
    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// Step 1 → 2. Stores the identification if all required fields are set.
    pub fn confirm_identification(&mut self, id: &Identification) -> Result<(), TransitionError> {
        self.expect(Step::Identification, "confirm identification")?;
        let errors = id.validate();
        if !errors.is_empty() {
            return Err(TransitionError::Validation(errors));
        }
        self.store.update(id.entries());
        self.move_to(Step::Dimensions);
        Ok(())
    }

    /// Step 2 → 1. Keeps whatever step 2 entries the screen could read.
    ///
    /// Entries for fields outside step 2 are ignored.
    pub fn back_from_dimensions<I>(&mut self, entries: I) -> Result<(), TransitionError>
    where
        I: IntoIterator<Item = (Field, FieldValue)>,
    {
        self.expect(Step::Dimensions, "go back")?;
        for (field, value) in entries.into_iter().filter(|(f, _)| f.is_dimension()) {
            tracing::debug!(field = field.key(), "keeping step 2 entry");
            self.store.update([(field, value)]);
        }
        self.move_to(Step::Identification);
        Ok(())
    }

    /// Step 2 → 3. Always accepted.
    pub fn confirm_dimensions(&mut self, dims: &Dimensions) -> Result<(), TransitionError> {
        self.expect(Step::Dimensions, "confirm dimensions")?;
        self.store.update(dims.entries());
        self.move_to(Step::VisualInspection);
        Ok(())
    }

    /// Step 3 → 2. The store is left as is.
    pub fn back_from_inspection(&mut self) -> Result<(), TransitionError> {
        self.expect(Step::VisualInspection, "go back")?;
        self.move_to(Step::Dimensions);
        Ok(())
    }

    /// Step 3 → 4 on success, 3 → 3 on failure.
    ///
    /// Builds the row stamped with `at` and appends it through `sink` exactly
    /// once. On success the store is cleared; on failure it is untouched so
    /// the inspector can retry. Returns the row that was appended.
    pub fn submit(
        &mut self,
        inspection: &VisualInspection,
        photos: Vec<Photo>,
        at: NaiveDateTime,
        sink: &dyn RowSink,
    ) -> Result<SubmissionRow, TransitionError> {
        self.expect(Step::VisualInspection, "submit")?;

        let draft = InspectionDraft::assemble(&self.store, inspection, photos);
        if !draft.is_submittable() {
            let missing: Vec<_> = Field::all()
                .iter()
                .filter(|f| f.is_required() && self.store.text(**f).trim().is_empty())
                .inspect(|f| tracing::warn!(field = f.key(), "required field missing at submit"))
                .map(|f| ValidationError::Required(*f))
                .collect();
            return Err(TransitionError::Validation(missing));
        }

        let row = SubmissionRow::build(&draft, at);
        tracing::info!(
            lot = %draft.lot_code,
            photos = draft.photos.len(),
            "submitting inspection"
        );
        sink.append_row(&row)?;

        self.store.clear();
        self.move_to(Step::Success);
        Ok(row)
    }

    /// Step 4 → 1 with an empty store.
    pub fn restart(&mut self) -> Result<(), TransitionError> {
        self.expect(Step::Success, "restart")?;
        self.store.clear();
        self.move_to(Step::Identification);
        Ok(())
    }

    fn expect(&self, step: Step, action: &'static str) -> Result<(), TransitionError> {
        if self.step == step {
            Ok(())
        } else {
            Err(TransitionError::NotAllowed {
                from: self.step,
                action,
            })
        }
    }

    fn move_to(&mut self, step: Step) {
        tracing::debug!(from = self.step.cursor(), to = step.cursor(), "step change");
        self.step = step;
    }
}

//! Actions returned by screen event handlers.

use std::path::PathBuf;

use crossterm::event::KeyEvent;

use crate::model::{Field, FieldValue, VisualInspection};
use crate::wizard::{Dimensions, Identification};

/// Everything the visual inspection screen hands over on submit.
///
/// Photo paths are resolved by the [`App`](super::App) so that the capture
/// can be named after the submit timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitRequest {
    pub inspection: VisualInspection,
    /// Direct capture, attached first when present.
    pub capture: Option<PathBuf>,
    /// Gallery photos in the order given.
    pub gallery: Vec<PathBuf>,
}

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` applies these to the wizard [`Session`](crate::wizard::Session).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Leave step 1 with the given answers.
    ConfirmIdentification(Identification),
    /// Return to step 1, keeping whichever step 2 fields parsed.
    BackFromDimensions(Vec<(Field, FieldValue)>),
    /// Leave step 2 with the given answers.
    ConfirmDimensions(Dimensions),
    /// Return to step 2.
    BackFromInspection,
    /// Attach photos, build the row and append it.
    Submit(SubmitRequest),
    /// Start a new inspection from the success screen.
    Restart,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}

//! Reusable TUI widgets.

pub mod form;
pub mod progress;

pub use form::{Form, FormField, draw_form};
pub use progress::{draw_progress, progress_label};

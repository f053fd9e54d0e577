//! TUI screen implementations, one per wizard step.

pub mod dimensions;
pub mod identification;
pub mod success;
pub mod visual_inspection;

pub use dimensions::{DimensionsState, draw_dimensions};
pub use identification::{IdentificationState, draw_identification};
pub use success::{SuccessState, draw_success};
pub use visual_inspection::{VisualInspectionState, draw_visual_inspection};

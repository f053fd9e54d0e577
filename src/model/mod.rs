mod draft;
mod field;
mod photo;
mod rating;
mod row;
mod store;
mod validation;

pub use draft::InspectionDraft;
pub use field::{Field, FieldValue};
pub use photo::{
    Photo, PhotoError, PhotoSource, capture_filename, load_capture, load_gallery,
    split_gallery_paths,
};
pub use rating::{Defect, Rating, VisualInspection, cycle_rating};
pub use row::{CellValue, NO_PHOTOS, ROW_WIDTH, SubmissionRow, photo_references};
pub use store::FormStore;
pub use validation::{
    MOISTURE_MAX, SCORE_MAX, ValidationError, parse_decimal, parse_score, validate_required,
};

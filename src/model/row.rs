use chrono::NaiveDateTime;
use serde::Serialize;

use super::draft::InspectionDraft;

/// Photo column value when nothing was attached.
pub const NO_PHOTOS: &str = "Nenhuma foto enviada";

/// Number of worksheet columns a row fills.
pub const ROW_WIDTH: usize = 25;

/// One worksheet cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Integer(i64),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// The fixed-order row appended to the worksheet for one submission.
///
/// Column order: timestamp, date, time, the 21 draft fields, photo names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionRow {
    cells: Vec<CellValue>,
}

impl SubmissionRow {
    /// Flattens `draft` submitted at `at` into worksheet order.
    pub fn build(draft: &InspectionDraft, at: NaiveDateTime) -> Self {
        let mut cells: Vec<CellValue> = Vec::with_capacity(ROW_WIDTH);
        cells.push(at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string().into());
        cells.push(at.format("%Y-%m-%d").to_string().into());
        cells.push(at.format("%H:%M:%S").to_string().into());

        for text in [
            &draft.email,
            &draft.responsible_name,
            &draft.lot_code,
            &draft.planer_info,
            &draft.piece_count_layer,
            &draft.piece_dimensions,
        ] {
            cells.push(text.as_str().into());
        }

        cells.extend(draft.thickness.iter().map(|&v| CellValue::from(v)));
        cells.extend(draft.width.iter().map(|&v| CellValue::from(v)));
        cells.push(draft.length.into());
        cells.push(draft.moisture_percent.into());

        cells.extend(draft.ratings.iter().map(|r| CellValue::from(r.sheet_value())));
        cells.push(CellValue::Integer(i64::from(draft.final_score)));
        cells.push(photo_references(draft).into());

        Self { cells }
    }

    /// Returns the cells in column order.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Comma-joined photo filenames in attachment order, or [`NO_PHOTOS`].
pub fn photo_references(draft: &InspectionDraft) -> String {
    if draft.photos.is_empty() {
        NO_PHOTOS.to_string()
    } else {
        draft
            .photos
            .iter()
            .map(|p| p.filename.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

//! Typed answers handed from the step screens to the [`Session`](super::Session).

use crate::model::{Field, FieldValue, MOISTURE_MAX, ValidationError, validate_required};

/// Step 1 answers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identification {
    pub email: String,
    pub responsible_name: String,
    pub lot_code: String,
    pub planer_info: String,
}

impl Identification {
    /// Checks the three required fields, reporting every missing one.
    pub fn validate(&self) -> Vec<ValidationError> {
        [
            (Field::Email, &self.email),
            (Field::ResponsibleName, &self.responsible_name),
            (Field::LotCode, &self.lot_code),
        ]
        .into_iter()
        .filter_map(|(field, value)| validate_required(field, value).err())
        .collect()
    }

    /// Trimmed store entries for all four fields.
    pub fn entries(&self) -> [(Field, FieldValue); 4] {
        [
            (Field::Email, self.email.trim().into()),
            (Field::ResponsibleName, self.responsible_name.trim().into()),
            (Field::LotCode, self.lot_code.trim().into()),
            (Field::PlanerInfo, self.planer_info.trim().into()),
        ]
    }
}

/// Step 2 answers. Measurements are in mm; moisture in percent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dimensions {
    pub piece_count_layer: String,
    pub piece_dimensions: String,
    pub thickness: [f64; 3],
    pub width: [f64; 3],
    pub length: f64,
    pub moisture_percent: f64,
}

impl Dimensions {
    /// Store entries for all ten fields, moisture clamped to `[0, 100]`.
    pub fn entries(&self) -> [(Field, FieldValue); 10] {
        [
            (Field::PieceCountLayer, self.piece_count_layer.as_str().into()),
            (Field::PieceDimensions, self.piece_dimensions.as_str().into()),
            (Field::ThicknessIn, self.thickness[0].into()),
            (Field::ThicknessMid, self.thickness[1].into()),
            (Field::ThicknessOut, self.thickness[2].into()),
            (Field::WidthIn, self.width[0].into()),
            (Field::WidthMid, self.width[1].into()),
            (Field::WidthOut, self.width[2].into()),
            (Field::Length, self.length.into()),
            (
                Field::MoisturePercent,
                self.moisture_percent.clamp(0.0, MOISTURE_MAX).into(),
            ),
        ]
    }
}

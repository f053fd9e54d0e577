use super::field::Field;
use super::photo::Photo;
use super::rating::{Rating, VisualInspection};
use super::store::FormStore;

/// A complete inspection record, ready to be flattened into a row.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionDraft {
    pub email: String,
    pub responsible_name: String,
    pub lot_code: String,
    pub planer_info: String,
    pub piece_count_layer: String,
    pub piece_dimensions: String,
    /// E1, E2, E3 in mm.
    pub thickness: [f64; 3],
    /// L1, L2, L3 in mm.
    pub width: [f64; 3],
    pub length: f64,
    pub moisture_percent: f64,
    pub ratings: [Rating; 6],
    pub final_score: u8,
    pub photos: Vec<Photo>,
}

impl InspectionDraft {
    /// Assembles a draft from the stored answers plus the step 3 inputs.
    ///
    /// Unset text reads as `""` and unset measurements as `0.0`.
    pub fn assemble(store: &FormStore, inspection: &VisualInspection, photos: Vec<Photo>) -> Self {
        Self {
            email: store.text(Field::Email).to_string(),
            responsible_name: store.text(Field::ResponsibleName).to_string(),
            lot_code: store.text(Field::LotCode).to_string(),
            planer_info: store.text(Field::PlanerInfo).to_string(),
            piece_count_layer: store.text(Field::PieceCountLayer).to_string(),
            piece_dimensions: store.text(Field::PieceDimensions).to_string(),
            thickness: [
                store.decimal(Field::ThicknessIn),
                store.decimal(Field::ThicknessMid),
                store.decimal(Field::ThicknessOut),
            ],
            width: [
                store.decimal(Field::WidthIn),
                store.decimal(Field::WidthMid),
                store.decimal(Field::WidthOut),
            ],
            length: store.decimal(Field::Length),
            moisture_percent: store.decimal(Field::MoisturePercent),
            ratings: inspection.ratings,
            final_score: inspection.final_score,
            photos,
        }
    }

    /// Returns `true` once email, responsible name and lot code are all set.
    pub fn is_submittable(&self) -> bool {
        [&self.email, &self.responsible_name, &self.lot_code]
            .iter()
            .all(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::model::PhotoSource;

    fn filled_store() -> FormStore {
        let mut store = FormStore::new();
        store.update([
            (Field::Email, "a@b.com".into()),
            (Field::ResponsibleName, "Jane Doe".into()),
            (Field::LotCode, "2025/33".into()),
            (Field::ThicknessMid, 20.5.into()),
            (Field::WidthOut, 101.0.into()),
            (Field::MoisturePercent, 12.0.into()),
        ]);
        store
    }

    #[test]
    fn assemble_reads_store_and_step3() {
        let inspection = VisualInspection {
            ratings: [Rating::NonConforming; 6],
            final_score: 87,
        };
        let photo = Photo {
            filename: "a.png".into(),
            content: Bytes::new(),
            source: PhotoSource::Gallery,
        };
        let draft = InspectionDraft::assemble(&filled_store(), &inspection, vec![photo]);
        assert_eq!(draft.email, "a@b.com");
        assert_eq!(draft.planer_info, "");
        assert_eq!(draft.thickness, [0.0, 20.5, 0.0]);
        assert_eq!(draft.width, [0.0, 0.0, 101.0]);
        assert_eq!(draft.moisture_percent, 12.0);
        assert_eq!(draft.ratings, [Rating::NonConforming; 6]);
        assert_eq!(draft.final_score, 87);
        assert_eq!(draft.photos.len(), 1);
    }

    #[test]
    fn submittable_requires_identification() {
        let draft =
            InspectionDraft::assemble(&filled_store(), &VisualInspection::default(), vec![]);
        assert!(draft.is_submittable());

        let empty =
            InspectionDraft::assemble(&FormStore::new(), &VisualInspection::default(), vec![]);
        assert!(!empty.is_submittable());
    }
}

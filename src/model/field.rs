use std::fmt;

/// A field collected by steps 1 and 2 and kept in the [`FormStore`](super::FormStore).
///
/// Step 3 values (ratings, score, photos) never enter the store; they are
/// read straight from the visual inspection screen at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    ResponsibleName,
    LotCode,
    PlanerInfo,
    PieceCountLayer,
    PieceDimensions,
    ThicknessIn,
    ThicknessMid,
    ThicknessOut,
    WidthIn,
    WidthMid,
    WidthOut,
    Length,
    MoisturePercent,
}

static ALL_FIELDS: &[Field] = &[
    Field::Email,
    Field::ResponsibleName,
    Field::LotCode,
    Field::PlanerInfo,
    Field::PieceCountLayer,
    Field::PieceDimensions,
    Field::ThicknessIn,
    Field::ThicknessMid,
    Field::ThicknessOut,
    Field::WidthIn,
    Field::WidthMid,
    Field::WidthOut,
    Field::Length,
    Field::MoisturePercent,
];

impl Field {
    /// Returns all fields in row order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Stable snake_case key used as a log field value.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::ResponsibleName => "responsible_name",
            Field::LotCode => "lot_code",
            Field::PlanerInfo => "planer_info",
            Field::PieceCountLayer => "piece_count_layer",
            Field::PieceDimensions => "piece_dimensions",
            Field::ThicknessIn => "thickness_in",
            Field::ThicknessMid => "thickness_mid",
            Field::ThicknessOut => "thickness_out",
            Field::WidthIn => "width_in",
            Field::WidthMid => "width_mid",
            Field::WidthOut => "width_out",
            Field::Length => "length",
            Field::MoisturePercent => "moisture_percent",
        }
    }

    /// Returns `true` for fields holding a measurement rather than free text.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Field::ThicknessIn
                | Field::ThicknessMid
                | Field::ThicknessOut
                | Field::WidthIn
                | Field::WidthMid
                | Field::WidthOut
                | Field::Length
                | Field::MoisturePercent
        )
    }

    /// Returns `true` for the fields collected by step 2.
    pub fn is_dimension(&self) -> bool {
        self.is_numeric() || matches!(self, Field::PieceCountLayer | Field::PieceDimensions)
    }

    /// Returns `true` for the identification fields that gate step 1.
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Email | Field::ResponsibleName | Field::LotCode)
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Email => "email",
            Field::ResponsibleName => "responsible name",
            Field::LotCode => "lot code",
            Field::PlanerInfo => "planer",
            Field::PieceCountLayer => "pieces per layer",
            Field::PieceDimensions => "piece dimensions",
            Field::ThicknessIn => "E1",
            Field::ThicknessMid => "E2",
            Field::ThicknessOut => "E3",
            Field::WidthIn => "L1",
            Field::WidthMid => "L2",
            Field::WidthOut => "L3",
            Field::Length => "length",
            Field::MoisturePercent => "moisture",
        };
        f.write_str(label)
    }
}

/// A value held in the [`FormStore`](super::FormStore).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Decimal(f64),
}

impl FieldValue {
    /// Returns the text, or `None` for a decimal.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Decimal(_) => None,
        }
    }

    /// Returns the decimal, or `None` for text.
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(v) => Some(*v),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

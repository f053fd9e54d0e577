//! Step 2: dimensions and bundling.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, FieldValue, FormStore, parse_decimal};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::wizard::{Dimensions, Step};

/// Form order of the step 2 fields.
const FIELDS: [Field; 10] = [
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

/// State for the dimensions screen.
#[derive(Debug, Clone)]
pub struct DimensionsState {
    form: Form,
    general_error: Option<String>,
    edited: bool,
}

impl Default for DimensionsState {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionsState {
    /// Creates an empty dimensions form.
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Pieces per layer", false),
                FormField::new("Piece dimensions", false),
                FormField::new("E1 thickness (mm)", false),
                FormField::new("E2 thickness (mm)", false),
                FormField::new("E3 thickness (mm)", false),
                FormField::new("L1 width (mm)", false),
                FormField::new("L2 width (mm)", false),
                FormField::new("L3 width (mm)", false),
                FormField::new("Length (mm)", false),
                FormField::new("Moisture (%)", false),
            ]),
            general_error: None,
            edited: false,
        }
    }

    /// Pre-populates the form from values already in the store.
    ///
    /// Measurements that were never stored are left blank.
    pub fn load(&mut self, store: &FormStore) {
        self.reset();
        for (index, field) in FIELDS.into_iter().enumerate() {
            if !store.contains(field) {
                continue;
            }
            let text = if field.is_numeric() {
                store.decimal(field).to_string()
            } else {
                store.text(field).to_string()
            };
            self.form.set_value(index, text);
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Sets a general error message not tied to any specific field.
    pub fn set_error(&mut self, msg: String) {
        self.general_error = Some(msg);
    }

    /// Returns the general error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Returns `true` once the inspector has typed into the form since the
    /// last [`load`](Self::load) or [`reset`](Self::reset).
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Resets the form to its initial empty state.
    pub fn reset(&mut self) {
        self.form.reset();
        self.general_error = None;
        self.edited = false;
    }

    /// Entries for every field whose current text is acceptable.
    ///
    /// Used when leaving backwards. Text that does not parse stays on the
    /// screen but is not stored.
    pub fn parsed_entries(&self) -> Vec<(Field, FieldValue)> {
        FIELDS
            .into_iter()
            .enumerate()
            .filter_map(|(index, field)| {
                let raw = self.form.value(index);
                if field.is_numeric() {
                    parse_decimal(field, raw).ok().map(|v| (field, v.into()))
                } else {
                    Some((field, raw.trim().into()))
                }
            })
            .collect()
    }

    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.general_error = None;

        let mut numbers = [0.0_f64; 10];
        for (index, field) in FIELDS.into_iter().enumerate() {
            if !field.is_numeric() {
                continue;
            }
            match parse_decimal(field, self.form.value(index)) {
                Ok(v) => numbers[index] = v,
                Err(e) => self.form.set_error(index, e.to_string()),
            }
        }

        if self.form.has_errors() {
            return Action::None;
        }

        Action::ConfirmDimensions(Dimensions {
            piece_count_layer: self.form.value(0).trim().to_string(),
            piece_dimensions: self.form.value(1).trim().to_string(),
            thickness: [numbers[2], numbers[3], numbers[4]],
            width: [numbers[5], numbers[6], numbers[7]],
            length: numbers[8],
            moisture_percent: numbers[9],
        })
    }
}

impl ScreenState for DimensionsState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                self.edited = true;
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                self.edited = true;
                Action::None
            }
            KeyCode::Esc => Action::BackFromDimensions(self.parsed_entries()),
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }
}

/// Renders the dimensions screen.
#[mutants::skip]
pub fn draw_dimensions(state: &DimensionsState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", Step::Dimensions.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, error_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(30),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: next  Esc: back",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

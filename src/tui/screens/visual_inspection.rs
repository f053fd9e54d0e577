//! Step 3: defect ratings, final score, photos and submit.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use crate::model::{
    Defect, Rating, VisualInspection, cycle_rating, parse_score, split_gallery_paths,
};
use crate::tui::action::{Action, ScreenState, SubmitRequest};
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::wizard::Step;

/// Number of defect rows above the form.
const RATING_ROWS: usize = 6;
/// Form index for the final score.
const SCORE: usize = 0;
/// Form index for the direct capture path.
const CAPTURE: usize = 1;
/// Form index for the `;`-separated gallery paths.
const GALLERY: usize = 2;
/// Rating rows plus form fields.
const FOCUS_SLOTS: usize = RATING_ROWS + 3;

/// State for the visual inspection screen.
#[derive(Debug, Clone)]
pub struct VisualInspectionState {
    ratings: [Rating; RATING_ROWS],
    form: Form,
    focus: usize,
    general_error: Option<String>,
}

impl Default for VisualInspectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualInspectionState {
    /// Creates the screen with every defect rated conforming.
    pub fn new() -> Self {
        let mut form = Form::new(vec![
            FormField::new("Final score (0-100)", false),
            FormField::new("Camera capture (file path)", false),
            FormField::new("Gallery photos (paths separated by ;)", false),
        ]);
        form.set_active(false);
        Self {
            ratings: [Rating::default(); RATING_ROWS],
            form,
            focus: 0,
            general_error: None,
        }
    }

    /// Returns the rating shown for each defect, in [`Defect::all`] order.
    pub fn ratings(&self) -> &[Rating; RATING_ROWS] {
        &self.ratings
    }

    /// Returns the focused slot: `0..6` are rating rows, then the form fields.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Sets a general error message not tied to any specific field.
    pub fn set_error(&mut self, msg: String) {
        self.general_error = Some(msg);
    }

    /// Drops the general error message.
    pub fn clear_error(&mut self) {
        self.general_error = None;
    }

    /// Returns the general error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Resets ratings, score and photo paths.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn move_focus(&mut self, forward: bool) {
        self.focus = if forward {
            (self.focus + 1) % FOCUS_SLOTS
        } else {
            (self.focus + FOCUS_SLOTS - 1) % FOCUS_SLOTS
        };
        let in_form = self.focus >= RATING_ROWS;
        self.form.set_active(in_form);
        if in_form {
            self.form.set_focus(self.focus - RATING_ROWS);
        }
    }

    fn cycle_focused(&mut self, forward: bool) {
        if let Some(rating) = self.ratings.get_mut(self.focus) {
            *rating = cycle_rating(*rating, forward);
        }
    }

    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.general_error = None;

        let final_score = match parse_score(self.form.value(SCORE)) {
            Ok(score) => score,
            Err(e) => {
                self.form.set_error(SCORE, e.to_string());
                return Action::None;
            }
        };

        let capture = self.form.value(CAPTURE).trim();
        let capture = (!capture.is_empty()).then(|| PathBuf::from(capture));

        Action::Submit(SubmitRequest {
            inspection: VisualInspection {
                ratings: self.ratings,
                final_score,
            },
            capture,
            gallery: split_gallery_paths(self.form.value(GALLERY)),
        })
    }
}

impl ScreenState for VisualInspectionState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        let on_rating = self.focus < RATING_ROWS;
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                Action::None
            }
            KeyCode::Right | KeyCode::Char(' ') if on_rating => {
                self.cycle_focused(true);
                Action::None
            }
            KeyCode::Left if on_rating => {
                self.cycle_focused(false);
                Action::None
            }
            KeyCode::Char(ch) if !on_rating => {
                self.form.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace if !on_rating => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Esc => Action::BackFromInspection,
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }
}

/// Renders the visual inspection screen.
#[mutants::skip]
pub fn draw_visual_inspection(state: &VisualInspectionState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", Step::VisualInspection.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [ratings_area, form_area, error_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(RATING_ROWS as u16 + 2),
        Constraint::Length(9),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let items: Vec<ListItem> = Defect::all()
        .iter()
        .zip(state.ratings())
        .enumerate()
        .map(|(i, (defect, rating))| {
            let style = if i == state.focus() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let color = match rating {
                Rating::Conforming => Color::Green,
                Rating::NonConforming => Color::Red,
                Rating::NotApplicable => Color::DarkGray,
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", defect.to_string()), style),
                Span::styled(format!("< {rating} >"), Style::default().fg(color)),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title("Defects")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, ratings_area);

    draw_form(state.form(), frame, form_area);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Left/Right: change rating  Enter: submit  Esc: back",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

//! Step 1: inspector and lot identification.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, FormStore, ValidationError};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::wizard::{Identification, Step};

/// Field index for the inspector's email.
const EMAIL: usize = 0;
/// Field index for the responsible person.
const RESPONSIBLE: usize = 1;
/// Field index for the lot code.
const LOT_CODE: usize = 2;
/// Field index for the planer description.
const PLANER: usize = 3;

/// Shown beneath the form when a required field is empty.
pub const REQUIRED_WARNING: &str = "Fields marked * are required.";

/// State for the identification screen.
#[derive(Debug, Clone)]
pub struct IdentificationState {
    form: Form,
    general_error: Option<String>,
}

impl Default for IdentificationState {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentificationState {
    /// Creates an empty identification form.
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Email", true),
                FormField::new("Responsible name", true),
                FormField::new("Lot code", true),
                FormField::new("Planer", false),
            ]),
            general_error: None,
        }
    }

    /// Pre-populates the form from values already in the store.
    pub fn load(&mut self, store: &FormStore) {
        self.reset();
        for (index, field) in Self::fields() {
            self.form.set_value(index, store.text(field));
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

    /// Resets the form to its initial empty state.
    pub fn reset(&mut self) {
        self.form.reset();
        self.general_error = None;
    }

    fn fields() -> [(usize, Field); 4] {
        [
            (EMAIL, Field::Email),
            (RESPONSIBLE, Field::ResponsibleName),
            (LOT_CODE, Field::LotCode),
            (PLANER, Field::PlanerInfo),
        ]
    }

    fn answers(&self) -> Identification {
        Identification {
            email: self.form.value(EMAIL).to_string(),
            responsible_name: self.form.value(RESPONSIBLE).to_string(),
            lot_code: self.form.value(LOT_CODE).to_string(),
            planer_info: self.form.value(PLANER).to_string(),
        }
    }

    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.general_error = None;

        let answers = self.answers();
        let errors = answers.validate();
        if errors.is_empty() {
            return Action::ConfirmIdentification(answers);
        }

        for err in &errors {
            if let ValidationError::Required(field) = err
                && let Some((index, _)) = Self::fields().into_iter().find(|(_, f)| f == field)
            {
                self.form.set_error(index, err.to_string());
            }
        }
        self.general_error = Some(REQUIRED_WARNING.to_string());
        Action::None
    }
}

impl ScreenState for IdentificationState {
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
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }
}

/// Renders the identification screen.
#[mutants::skip]
pub fn draw_identification(state: &IdentificationState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", Step::Identification.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, error_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(12),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: next  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut IdentificationState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn fill_required(state: &mut IdentificationState) {
        type_string(state, "a@b.com");
        state.handle_key(press(KeyCode::Tab));
        type_string(state, "Jane Doe");
        state.handle_key(press(KeyCode::Tab));
        type_string(state, "2025/33");
    }

    mod typing {
        use super::*;

        #[test]
        fn chars_fill_focused_field() {
            let mut state = IdentificationState::new();
            type_string(&mut state, "ab");
            assert_eq!(state.form().value(EMAIL), "ab");
        }

        #[test]
        fn case_is_preserved() {
            let mut state = IdentificationState::new();
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "Jane");
            assert_eq!(state.form().value(RESPONSIBLE), "Jane");
        }

        #[test]
        fn backspace_deletes_char() {
            let mut state = IdentificationState::new();
            type_string(&mut state, "ab");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.form().value(EMAIL), "a");
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn tab_cycles_through_four_fields() {
            let mut state = IdentificationState::new();
            for expected in [RESPONSIBLE, LOT_CODE, PLANER, EMAIL] {
                state.handle_key(press(KeyCode::Tab));
                assert_eq!(state.form().focus(), expected);
            }
        }

        #[test]
        fn backtab_wraps_to_planer() {
            let mut state = IdentificationState::new();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.form().focus(), PLANER);
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn valid_answers_confirm() {
            let mut state = IdentificationState::new();
            fill_required(&mut state);
            match state.handle_key(press(KeyCode::Enter)) {
                Action::ConfirmIdentification(id) => {
                    assert_eq!(id.email, "a@b.com");
                    assert_eq!(id.responsible_name, "Jane Doe");
                    assert_eq!(id.lot_code, "2025/33");
                    assert_eq!(id.planer_info, "");
                }
                other => panic!("expected ConfirmIdentification, got {other:?}"),
            }
        }

        #[test]
        fn empty_submit_marks_required_fields() {
            let mut state = IdentificationState::new();
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert!(state.form().fields()[EMAIL].error.is_some());
            assert!(state.form().fields()[RESPONSIBLE].error.is_some());
            assert!(state.form().fields()[LOT_CODE].error.is_some());
            assert!(state.form().fields()[PLANER].error.is_none());
            assert_eq!(state.general_error(), Some(REQUIRED_WARNING));
        }

        #[test]
        fn whitespace_only_is_missing() {
            let mut state = IdentificationState::new();
            fill_required(&mut state);
            state.form.set_value(RESPONSIBLE, "   ");
            assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::None);
            assert_eq!(
                state.form().fields()[RESPONSIBLE].error.as_deref(),
                Some("responsible name is required")
            );
        }

        #[test]
        fn errors_cleared_on_resubmit() {
            let mut state = IdentificationState::new();
            state.handle_key(press(KeyCode::Enter));
            fill_required(&mut state);
            let action = state.handle_key(press(KeyCode::Enter));
            assert!(matches!(action, Action::ConfirmIdentification(_)));
            assert!(!state.form().has_errors());
            assert_eq!(state.general_error(), None);
        }

        #[test]
        fn esc_quits() {
            let mut state = IdentificationState::new();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }
    }

    mod load {
        use super::*;

        #[test]
        fn populates_from_store() {
            let mut store = FormStore::new();
            store.update([
                (Field::Email, "a@b.com".into()),
                (Field::LotCode, "L-7".into()),
            ]);
            let mut state = IdentificationState::new();
            state.load(&store);
            assert_eq!(state.form().value(EMAIL), "a@b.com");
            assert_eq!(state.form().value(RESPONSIBLE), "");
            assert_eq!(state.form().value(LOT_CODE), "L-7");
        }

        #[test]
        fn empty_store_clears_form() {
            let mut state = IdentificationState::new();
            fill_required(&mut state);
            state.set_error("old".into());
            state.load(&FormStore::new());
            assert_eq!(state.form().values(), vec!["", "", "", ""]);
            assert_eq!(state.general_error(), None);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render(state: &IdentificationState) -> String {
            let backend = TestBackend::new(70, 20);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_identification(state, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_title_and_labels() {
            let output = render(&IdentificationState::new());
            assert!(output.contains("Inspection Identification"));
            assert!(output.contains("Email *"));
            assert!(output.contains("Lot code *"));
            assert!(output.contains("Planer"));
        }

        #[test]
        fn renders_required_warning() {
            let mut state = IdentificationState::new();
            state.handle_key(press(KeyCode::Enter));
            let output = render(&state);
            assert!(output.contains(REQUIRED_WARNING));
        }
    }
}

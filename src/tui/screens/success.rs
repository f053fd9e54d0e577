//! Terminal screen shown after a row was appended.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{CellValue, SubmissionRow};
use crate::tui::action::{Action, ScreenState};
use crate::wizard::Step;

/// State for the success screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccessState {
    photos: Option<String>,
}

impl SuccessState {
    /// Creates the screen with nothing recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers the photo references of the row just appended.
    pub fn record(&mut self, row: &SubmissionRow) {
        self.photos = match row.cells().last() {
            Some(CellValue::Text(refs)) => Some(refs.clone()),
            _ => None,
        };
    }

    /// Photo references of the last appended row, if any.
    pub fn photos(&self) -> Option<&str> {
        self.photos.as_deref()
    }

    /// Forgets the last appended row.
    pub fn reset(&mut self) {
        self.photos = None;
    }
}

impl ScreenState for SuccessState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => Action::Restart,
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the success screen.
#[mutants::skip]
pub fn draw_success(state: &SuccessState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", Step::Success.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "Data submitted successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(photos) = state.photos() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Photos: {photos}")));
    }
    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, body_area);

    let footer = Paragraph::new(Line::from("Enter: new inspection  Esc: quit"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::{FormStore, InspectionDraft, NO_PHOTOS, VisualInspection};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn empty_row() -> SubmissionRow {
        let draft =
            InspectionDraft::assemble(&FormStore::new(), &VisualInspection::default(), vec![]);
        let at = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap();
        SubmissionRow::build(&draft, at)
    }

    #[test]
    fn enter_restarts() {
        let mut state = SuccessState::new();
        assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::Restart);
    }

    #[test]
    fn esc_quits() {
        let mut state = SuccessState::new();
        assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn other_keys_ignored() {
        let mut state = SuccessState::new();
        assert_eq!(state.handle_key(press(KeyCode::Tab)), Action::None);
    }

    #[test]
    fn record_keeps_photo_references() {
        let mut state = SuccessState::new();
        state.record(&empty_row());
        assert_eq!(state.photos(), Some(NO_PHOTOS));
        state.reset();
        assert_eq!(state.photos(), None);
    }

    #[test]
    fn renders_confirmation() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let mut state = SuccessState::new();
        state.record(&empty_row());
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_success(&state, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                output.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
        }
        assert!(output.contains("Data submitted successfully!"));
        assert!(output.contains("Enter: new inspection"));
    }
}

use chrono::{Local, NaiveDateTime};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::model::{Photo, PhotoError, load_capture, load_gallery};
use crate::sheets::RowSink;
use crate::wizard::{Session, Step};

use super::action::{Action, ScreenState, SubmitRequest};
use super::error::AppError;
use super::screens::{
    DimensionsState, IdentificationState, SuccessState, VisualInspectionState, draw_dimensions,
    draw_identification, draw_success, draw_visual_inspection,
};
use super::widgets::draw_progress;

/// Title shown on the header line.
const APP_TITLE: &str = "Quality Inspection";

/// Top-level application state.
///
/// Owns the wizard [`Session`] and one state per step screen. The screen
/// drawn and fed keys is always the one matching the session's step.
pub struct App {
    session: Session,
    sink: Box<dyn RowSink>,
    identification: IdentificationState,
    dimensions: DimensionsState,
    inspection: VisualInspectionState,
    success: SuccessState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on step 1, appending rows through `sink`.
    pub fn new(sink: Box<dyn RowSink>) -> Self {
        Self {
            session: Session::new(),
            sink,
            identification: IdentificationState::new(),
            dimensions: DimensionsState::new(),
            inspection: VisualInspectionState::new(),
            success: SuccessState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the header, progress gauge and current step screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [header_area, progress_area, screen_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(frame.area());

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Ctrl+C: quit", Style::default().fg(Color::DarkGray)),
        ]));
        frame.render_widget(header, header_area);

        let step = self.session.step();
        draw_progress(step, frame, progress_area);

        match step {
            Step::Identification => draw_identification(&self.identification, frame, screen_area),
            Step::Dimensions => draw_dimensions(&self.dimensions, frame, screen_area),
            Step::VisualInspection => draw_visual_inspection(&self.inspection, frame, screen_area),
            Step::Success => draw_success(&self.success, frame, screen_area),
        }
    }

    /// Handles a key event: Ctrl+C first, then the current step's screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = self.current_screen().handle_key(key);
        self.apply(action);
    }

    /// Returns the wizard session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn current_screen(&mut self) -> &mut dyn ScreenState {
        match self.session.step() {
            Step::Identification => &mut self.identification,
            Step::Dimensions => &mut self.dimensions,
            Step::VisualInspection => &mut self.inspection,
            Step::Success => &mut self.success,
        }
    }

    /// Applies a screen action to the session. Failures stay on the screen
    /// that raised them.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::ConfirmIdentification(id) => {
                match self.session.confirm_identification(&id) {
                    Ok(()) if self.dimensions.is_edited() => {}
                    Ok(()) => self.dimensions.load(self.session.store()),
                    Err(e) => self.identification.set_error(e.to_string()),
                }
            }
            Action::BackFromDimensions(entries) => {
                match self.session.back_from_dimensions(entries) {
                    Ok(()) => self.identification.load(self.session.store()),
                    Err(e) => self.dimensions.set_error(e.to_string()),
                }
            }
            Action::ConfirmDimensions(dims) => {
                if let Err(e) = self.session.confirm_dimensions(&dims) {
                    self.dimensions.set_error(e.to_string());
                }
            }
            Action::BackFromInspection => match self.session.back_from_inspection() {
                Ok(()) => {
                    self.inspection.clear_error();
                    self.dimensions.load(self.session.store());
                }
                Err(e) => self.inspection.set_error(e.to_string()),
            },
            Action::Submit(request) => self.submit(request),
            Action::Restart => match self.session.restart() {
                Ok(()) => self.reset_screens(),
                Err(e) => tracing::warn!(error = %e, "restart rejected"),
            },
            Action::Quit => self.should_quit = true,
        }
    }

    fn submit(&mut self, request: SubmitRequest) {
        let at = Local::now().naive_local();
        let photos = match load_photos(&request, at) {
            Ok(photos) => photos,
            Err(e) => {
                tracing::warn!(error = %e, "photo rejected");
                self.inspection.set_error(e.to_string());
                return;
            }
        };

        match self
            .session
            .submit(&request.inspection, photos, at, self.sink.as_ref())
        {
            Ok(row) => {
                self.reset_screens();
                self.success.record(&row);
            }
            Err(e) => {
                tracing::error!(error = %e, "submission failed");
                self.inspection.set_error(e.to_string());
            }
        }
    }

    fn reset_screens(&mut self) {
        self.identification.reset();
        self.dimensions.reset();
        self.inspection.reset();
        self.success.reset();
    }
}

/// Reads the attached photos, the direct capture first.
fn load_photos(request: &SubmitRequest, at: NaiveDateTime) -> Result<Vec<Photo>, PhotoError> {
    let mut photos = Vec::with_capacity(request.gallery.len() + 1);
    if let Some(path) = &request.capture {
        photos.push(load_capture(path, at)?);
    }
    for path in &request.gallery {
        photos.push(load_gallery(path)?);
    }
    Ok(photos)
}

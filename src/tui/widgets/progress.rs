//! Progress gauge shown above every step.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Gauge;

use crate::wizard::{ENTRY_STEPS, Step};

/// Text drawn inside the gauge.
///
/// - Entry steps: `Step 2 of 3`
/// - Success: `Complete`
pub fn progress_label(step: Step) -> String {
    match step {
        Step::Success => "Complete".to_string(),
        other => format!("Step {} of {ENTRY_STEPS}", other.cursor()),
    }
}

/// Renders a one-line gauge filled to [`Step::progress`].
#[mutants::skip]
pub fn draw_progress(step: Step, frame: &mut Frame, area: Rect) {
    let color = if step == Step::Success {
        Color::Green
    } else {
        Color::Cyan
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(step.progress())
        .label(progress_label(step));
    frame.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
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

    fn render_progress(step: Step, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_progress(step, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn labels_entry_steps() {
        assert_eq!(progress_label(Step::Identification), "Step 1 of 3");
        assert_eq!(progress_label(Step::Dimensions), "Step 2 of 3");
        assert_eq!(progress_label(Step::VisualInspection), "Step 3 of 3");
    }

    #[test]
    fn labels_success() {
        assert_eq!(progress_label(Step::Success), "Complete");
    }

    #[test]
    fn renders_label_for_every_step() {
        for step in [
            Step::Identification,
            Step::Dimensions,
            Step::VisualInspection,
            Step::Success,
        ] {
            let output = render_progress(step, 40);
            assert!(
                output.contains(&progress_label(step)),
                "{step} should render its label"
            );
        }
    }
}

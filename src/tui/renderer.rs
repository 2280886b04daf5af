//! Drawing the assessment form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::theme::Theme;
use crate::core::{DiscTrait, ROW_COUNT};
use crate::profiles::profile;

const CELL_WIDTH: usize = 7;

/// Render the full form
pub fn render_form(frame: &mut Frame, app: &App) {
    let theme = Theme::default_theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),                    // Title + progress
            Constraint::Length(ROW_COUNT as u16 + 3), // Grid
            Constraint::Length(6),                    // Live bars
            Constraint::Min(2),                       // Status + help
        ])
        .split(frame.area());

    render_header(frame, app, &theme, chunks[0]);
    render_grid(frame, app, &theme, chunks[1]);
    render_live_bars(frame, app, &theme, chunks[2]);
    render_footer(frame, app, &theme, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let progress = app.snapshot.progress;
    let bar_width = (area.width as usize).saturating_sub(16).min(40);
    let lines = vec![
        Line::from(Span::styled("DISC assessment", theme.title_style())),
        Line::from(Span::styled(
            format!(
                "{} {}% complete",
                render_progress_bar(progress, bar_width),
                progress
            ),
            theme.progress_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_grid(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut header = vec![Span::raw(format!("{:<8}", ""))];
    for t in DiscTrait::ALL {
        header.push(Span::styled(
            format!("{:^width$}", t.code(), width = CELL_WIDTH),
            theme.header_style(t),
        ));
    }

    let mut lines = vec![Line::from(header)];
    for row in 0..ROW_COUNT {
        let mut spans = vec![Span::raw(format!("{:<8}", format!("Row {}", row + 1)))];
        for t in DiscTrait::ALL {
            let cell = t.index();
            let text = app.cell_text(row, cell);
            let shown = if text.is_empty() { "_" } else { text };
            let focused = app.cursor == (row, cell);
            let invalid = app.snapshot.invalid[row][cell];
            spans.push(Span::styled(
                format!("{:^width$}", shown, width = CELL_WIDTH),
                theme.cell_style(focused, invalid),
            ));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Rank each row 1-4 ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_live_bars(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let bar_width = (area.width as usize).saturating_sub(22).min(30);
    let lines: Vec<Line> = app
        .snapshot
        .percentages
        .iter()
        .map(|(t, pct)| {
            Line::from(vec![
                Span::styled(format!("{:<14}", profile(*t).title), theme.header_style(*t)),
                Span::styled(
                    render_progress_bar(*pct, bar_width),
                    theme.header_style(*t),
                ),
                Span::raw(format!(" {:>3}%", pct)),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::TOP).title(" Live scores ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let status = match &app.alert {
        Some(message) => Line::from(Span::styled(message.as_str(), theme.alert_style())),
        None if app.snapshot.submit_enabled => Line::from(Span::styled(
            "Ready: press Enter to see your profile",
            theme.submit_style(true),
        )),
        None => Line::from(Span::styled(
            "Submit disabled until every row uses 1, 2, 3 and 4 once",
            theme.submit_style(false),
        )),
    };
    let help = Line::from(Span::styled(
        "arrows/tab move  digits enter  backspace/del clear  enter submit  r reset  q quit",
        theme.hint_style(),
    ));
    frame.render_widget(Paragraph::new(vec![status, help]), area);
}

/// Render a text progress bar
fn render_progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "▓".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| render_form(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_form_renders_grid_and_disabled_submit() {
        let app = App::new();
        let text = screen_text(&app);
        assert!(text.contains("DISC assessment"));
        assert!(text.contains("0% complete"));
        assert!(text.contains("Row 5"));
        assert!(text.contains("Submit disabled"));
        assert!(text.contains("Conscientious"));
    }

    #[test]
    fn test_alert_is_shown_after_failed_submit() {
        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        let text = screen_text(&app);
        assert!(text.contains("Each row must use 1, 2, 3, and 4 exactly once."));
    }

    #[test]
    fn test_progress_bar_text() {
        assert_eq!(render_progress_bar(50, 4), "▓▓░░");
        assert_eq!(render_progress_bar(0, 3), "░░░");
    }
}

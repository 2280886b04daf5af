//! Interactive form state: a cursor over the grid plus the form controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::assessment::{FormController, FormEffect, FormEvent, FormSnapshot};
use crate::core::{CELLS_PER_ROW, ROW_COUNT};
use crate::errors::Result;
use crate::handoff::ResultPayload;

/// Outcome of one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
    Submitted(ResultPayload),
}

pub struct App {
    controller: FormController,
    pub cursor: (usize, usize),
    pub snapshot: FormSnapshot,
    pub alert: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_controller(FormController::new())
    }

    pub fn with_controller(controller: FormController) -> Self {
        let snapshot = controller.snapshot();
        Self {
            controller,
            cursor: (0, 0),
            snapshot,
            alert: None,
        }
    }

    /// Raw text of a cell for display.
    pub fn cell_text(&self, row: usize, cell: usize) -> &str {
        self.controller
            .assessment()
            .row(row)
            .and_then(|r| r.value(cell))
            .unwrap_or("")
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<AppAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(AppAction::Quit);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(AppAction::Quit),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::BackTab => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Tab => self.move_cursor(0, 1),
            KeyCode::Char('r') => return self.dispatch(FormEvent::ResetClicked),
            KeyCode::Enter => return self.dispatch(FormEvent::SubmitClicked),
            KeyCode::Backspace => {
                let mut text = self.current_text();
                text.pop();
                return self.edit(text);
            }
            KeyCode::Delete => return self.edit(String::new()),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                let mut text = self.current_text();
                text.push(c);
                let action = self.edit(text)?;
                // A single digit is a complete rank; advance to the next cell.
                if self.current_text().len() == 1 && c.is_ascii_digit() {
                    self.move_cursor(0, 1);
                }
                return Ok(action);
            }
            _ => {}
        }
        Ok(AppAction::Continue)
    }

    fn current_text(&self) -> String {
        self.cell_text(self.cursor.0, self.cursor.1).to_string()
    }

    fn edit(&mut self, value: String) -> Result<AppAction> {
        let (row, cell) = self.cursor;
        self.dispatch(FormEvent::InputChanged { row, cell, value })
    }

    fn dispatch(&mut self, event: FormEvent) -> Result<AppAction> {
        debug!(?event, "form event");
        match self.controller.handle_event(event)? {
            FormEffect::Refreshed(snapshot) => {
                self.snapshot = snapshot;
                self.alert = None;
            }
            FormEffect::Cleared(snapshot) => {
                self.snapshot = snapshot;
                self.alert = None;
                self.cursor = (0, 0);
            }
            FormEffect::Alert(message) => {
                self.snapshot = self.controller.snapshot();
                self.alert = Some(message);
            }
            FormEffect::Navigate(payload) => return Ok(AppAction::Submitted(payload)),
        }
        Ok(AppAction::Continue)
    }

    /// Move within the grid. Vertical moves stay in the column; horizontal
    /// moves wrap across row ends.
    fn move_cursor(&mut self, d_row: isize, d_cell: isize) {
        let (row, cell) = self.cursor;
        if d_row != 0 {
            let row = (row as isize + d_row).clamp(0, ROW_COUNT as isize - 1) as usize;
            self.cursor = (row, cell);
            return;
        }

        let total = (ROW_COUNT * CELLS_PER_ROW) as isize;
        let flat = ((row * CELLS_PER_ROW + cell) as isize + d_cell).clamp(0, total - 1) as usize;
        self.cursor = (flat / CELLS_PER_ROW, flat % CELLS_PER_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_row(app: &mut App, digits: &str) {
        for c in digits.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_digit_advances_cursor() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.cell_text(0, 0), "3");
        assert_eq!(app.cursor, (0, 1));
        assert_eq!(app.snapshot.progress, 5);
    }

    #[test]
    fn test_cursor_wraps_rows_and_clamps() {
        let mut app = App::new();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, (0, 0));
        for _ in 0..4 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, (1, 0));
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor, (4, 0));
    }

    #[test]
    fn test_backspace_edits_current_cell() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.cell_text(0, 0), "");
        assert_eq!(app.snapshot.progress, 0);
    }

    #[test]
    fn test_enter_on_incomplete_form_alerts() {
        let mut app = App::new();
        assert_eq!(press(&mut app, KeyCode::Enter), AppAction::Continue);
        assert_eq!(
            app.alert.as_deref(),
            Some("Each row must use 1, 2, 3, and 4 exactly once.")
        );
        assert!(app.snapshot.invalid.iter().all(|row| row.iter().all(|f| *f)));
    }

    #[test]
    fn test_full_form_submits_payload() {
        let mut app = App::new();
        for _ in 0..ROW_COUNT {
            type_row(&mut app, "4321");
        }
        assert!(app.snapshot.submit_enabled);
        match press(&mut app, KeyCode::Enter) {
            AppAction::Submitted(payload) => {
                assert_eq!(payload.to_query_string(), "type=D&D=20&I=15&S=10&C=5");
            }
            other => panic!("expected submission, got {:?}", other),
        }
    }

    #[test]
    fn test_reset_key_clears_form() {
        let mut app = App::new();
        type_row(&mut app, "12");
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.cursor, (0, 0));
        assert_eq!(app.snapshot.progress, 0);
        assert_eq!(app.cell_text(0, 1), "");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
    }
}

//! Interactive terminal form for taking the assessment.
//!
//! ```rust,no_run
//! use discprofile::tui::FormTui;
//!
//! let mut tui = FormTui::new()?;
//! if let Some(payload) = tui.run()? {
//!     println!("{}", payload.to_query_string());
//! }
//! // Terminal is restored on drop
//! # Ok::<(), discprofile::errors::DiscError>(())
//! ```

pub mod app;
pub mod renderer;
pub mod theme;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::debug;

use crate::errors::Result;
use crate::handoff::ResultPayload;
use crate::observability::{set_phase, set_tui_active, SessionPhase};
use app::{App, AppAction};
use renderer::render_form;

/// Owns the terminal while the form is on screen
pub struct FormTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl FormTui {
    /// Switch the terminal to raw mode and the alternate screen
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        set_tui_active(true);
        set_phase(SessionPhase::FormEntry);

        Ok(Self {
            terminal,
            app: App::new(),
        })
    }

    /// Run until the user submits a valid form or quits.
    ///
    /// Returns the handoff payload on submit, `None` on quit.
    pub fn run(&mut self) -> Result<Option<ResultPayload>> {
        loop {
            self.terminal.draw(|f| render_form(f, &self.app))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match self.app.handle_key(key)? {
                AppAction::Continue => {}
                AppAction::Quit => {
                    debug!("form closed without submitting");
                    return Ok(None);
                }
                AppAction::Submitted(payload) => return Ok(Some(payload)),
            }
        }
    }

    /// Restore the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for FormTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

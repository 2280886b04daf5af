//! Tracing subscriber setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer. While the
//! interactive form owns the terminal, output is dropped so log lines do not
//! corrupt the alternate screen.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mark whether the interactive form currently owns the terminal.
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "discprofile=warn",
        1 => "discprofile=info",
        2 => "discprofile=debug",
        _ => "discprofile=trace",
    }
}

fn make_writer() -> Box<dyn Write> {
    if is_tui_active() {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(make_writer)
        .try_init();
}

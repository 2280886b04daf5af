//! Custom panic hook for readable crash reports.
//!
//! The hook leaves TUI mode (alternate screen, raw mode) before printing so
//! the report is visible after a crash inside the interactive form.

use super::context::current_phase;
use super::tracing::set_tui_active;
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    exit_tui_mode();

    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    eprintln!();
    eprintln!("discprofile crashed");
    eprintln!("  Version:  {}", VERSION);
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!("  Time:     {}", timestamp);
    eprintln!("  Phase:    {}", current_phase());
    eprintln!("  Panic:    {}", extract_panic_message(info));
    if let Some(location) = info.location() {
        eprintln!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
}

fn exit_tui_mode() {
    set_tui_active(false);

    // Ignore errors - we're already panicking
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen);
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

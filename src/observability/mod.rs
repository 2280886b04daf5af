//! Logging setup and crash reporting.

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{current_phase, set_phase, SessionPhase};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{init_tracing, is_tui_active, set_tui_active};

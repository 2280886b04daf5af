//! Process-wide session context for crash reports.

use std::sync::atomic::{AtomicU8, Ordering};

static CURRENT_PHASE: AtomicU8 = AtomicU8::new(0);

/// What the program was doing, recorded for the crash report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Startup,
    /// Interactive form is collecting rankings
    FormEntry,
    /// Validating and scoring a submitted assessment
    Scoring,
    /// Writing the result view
    Rendering,
}

impl SessionPhase {
    fn to_u8(self) -> u8 {
        match self {
            Self::Startup => 0,
            Self::FormEntry => 1,
            Self::Scoring => 2,
            Self::Rendering => 3,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::FormEntry,
            2 => Self::Scoring,
            3 => Self::Rendering,
            _ => Self::Startup,
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Startup => write!(f, "startup"),
            Self::FormEntry => write!(f, "form_entry"),
            Self::Scoring => write!(f, "scoring"),
            Self::Rendering => write!(f, "rendering"),
        }
    }
}

pub fn set_phase(phase: SessionPhase) {
    CURRENT_PHASE.store(phase.to_u8(), Ordering::SeqCst);
}

pub fn current_phase() -> SessionPhase {
    SessionPhase::from_u8(CURRENT_PHASE.load(Ordering::SeqCst))
}

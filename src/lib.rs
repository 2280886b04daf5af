// Export modules for library usage
pub mod assessment;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod handoff;
pub mod io;
pub mod observability;
pub mod profiles;
pub mod result;
pub mod scoring;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{DiscTrait, ScoreTally, MAX_POSSIBLE_SCORE};

pub use crate::assessment::{
    Assessment, FormController, FormEffect, FormEvent, FormSnapshot, RankingRow,
};

pub use crate::errors::{DiscError, RowIssue, PERMUTATION_MESSAGE};

pub use crate::handoff::{ResultPayload, ResultState};

pub use crate::result::{
    compute_percentage, parse_result_state, render_summary, ResultSummary, TraitBar,
};

pub use crate::io::output::{create_writer, OutputFormat, ResultWriter};

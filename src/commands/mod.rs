//! CLI command implementations.
//!
//! - **take**: interactive form, then the result
//! - **score**: score answers given on the command line or in a file
//! - **result**: render a result from a handoff query string
//! - **init**: write a default `.discprofile.toml`

pub mod init;
pub mod render;
pub mod result;
pub mod score;
pub mod take;

pub use init::{init_config, init_config_in};
pub use render::{emit_summary, emit_text, CommandContext};
pub use result::show_result;
pub use score::{load_answer_file, parse_row_args, score_answers, ScoreConfig};
pub use take::take_assessment;

use anyhow::Result;
use clap::Parser;
use discprofile::cli::{Cli, Commands};
use discprofile::commands::{self, CommandContext, ScoreConfig};
use discprofile::observability::{init_tracing, install_panic_hook, set_phase, SessionPhase};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_tracing(cli.verbosity);
    set_phase(SessionPhase::Startup);

    let load_context = || CommandContext::load(cli.config.as_deref(), cli.plain);

    match cli.command {
        Commands::Take {
            print_query,
            ref output,
        } => commands::take_assessment(print_query, output, &load_context()?),
        Commands::Score {
            ref rows,
            ref file,
            query,
            ref output,
        } => {
            let config = ScoreConfig {
                rows: rows.clone(),
                file: file.clone(),
                query,
                output: output.clone(),
            };
            commands::score_answers(config, &load_context()?)
        }
        Commands::Result {
            ref query,
            ref output,
        } => commands::show_result(query, output, &load_context()?),
        Commands::Init { force } => commands::init_config(force),
    }
}

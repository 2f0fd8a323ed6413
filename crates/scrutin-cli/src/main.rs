//! # scrutin CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// scrutin — single-authority voting workflow driver.
///
/// Runs an owner-controlled ballot in memory: voter admission, proposal
/// collection, one vote per voter, and the final tally.
#[derive(Parser, Debug)]
#[command(name = "scrutin", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the full happy-path workflow with generated identities.
    Demo,
    /// Apply a JSON session script and print the emitted events.
    Replay(scrutin_cli::session::ReplayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => scrutin_cli::demo::run_demo(),
        Commands::Replay(args) => scrutin_cli::session::run_replay(&args),
    }
}

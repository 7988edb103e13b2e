//! # pesel CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// PESEL toolkit — decode and check Polish national identification numbers.
#[derive(Parser, Debug)]
#[command(name = "pesel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Decode a PESEL and print its fields.
    Inspect(pesel_cli::inspect::InspectArgs),
    /// Verify a PESEL's check digit.
    Check(pesel_cli::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for --json.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => pesel_cli::inspect::run(&args),
        Commands::Check(args) => {
            // The verdict is already on stdout (or suppressed); report a
            // mismatch through the exit status only.
            if !pesel_cli::check::run(&args)? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

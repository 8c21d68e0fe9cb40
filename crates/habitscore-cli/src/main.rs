use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habitscore", version, about = "Habit score CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Performance report: last week, this week, today and all-time
    Report(commands::report::ReportArgs),
    /// All-time score only
    Score(commands::score::ScoreArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    // RUST_LOG=debug shows per-window scoring
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // clap renders its own "error: ..." line plus usage
            let _ = e.print();
            std::process::exit(1);
        }
    };
    let result = match cli.command {
        Commands::Report(args) => commands::report::run(args),
        Commands::Score(args) => commands::score::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

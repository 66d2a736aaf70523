use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "tasklane-cli", version, about = "Tasklane CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the slots of a working day
    Slots(commands::slots::SlotsArgs),
    /// Check whether a task can start at a given slot
    Check(commands::check::CheckArgs),
    /// Report placed tasks that conflict
    Overlaps(commands::overlaps::OverlapsArgs),
    /// Assign side-by-side display lanes to placed tasks
    Layout(commands::overlaps::LayoutArgs),
    /// Auto-arrange every unlocked task
    Optimize(commands::optimize::OptimizeArgs),
    /// Task file management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    // stdout carries JSON output, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Slots(args) => commands::slots::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Overlaps(args) => commands::overlaps::run_overlaps(args),
        Commands::Layout(args) => commands::overlaps::run_layout(args),
        Commands::Optimize(args) => commands::optimize::run(args),
        Commands::Task { action } => commands::task::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

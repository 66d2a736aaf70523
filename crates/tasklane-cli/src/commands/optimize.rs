use clap::Args;
use std::path::PathBuf;
use tasklane_core::{Config, PlacementOptimizer};

use super::{print_json, read_tasks, write_tasks, CliResult, HoursArgs};

#[derive(Args)]
pub struct OptimizeArgs {
    /// JSON task list
    #[arg(long)]
    tasks: PathBuf,
    /// Write the optimized task list back to this file
    #[arg(long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    hours: HoursArgs,
}

pub fn run(args: OptimizeArgs) -> CliResult {
    let config = Config::load_or_default();
    let hours = args.hours.resolve(&config)?;
    let tasks = read_tasks(&args.tasks)?;

    let result = PlacementOptimizer::new().optimize(&tasks, &hours);

    for task in result.unplaced() {
        tracing::warn!(
            "Task {} ({}) does not fit between {} and {}",
            task.id,
            task.name,
            hours.start,
            hours.end
        );
    }
    if let Some(path) = &args.output {
        write_tasks(path, &result.optimized_tasks)?;
    }

    print_json(&result, &config)
}

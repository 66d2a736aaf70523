use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tasklane_core::{
    calculate_task_overlap_layout, find_overlapping_tasks, find_overlapping_tasks_with_work_time,
    Config,
};

use super::{print_json, read_tasks, CliResult};

#[derive(Args)]
pub struct OverlapsArgs {
    /// JSON task list
    #[arg(long)]
    tasks: PathBuf,
    /// Compare whole durations instead of work time only
    #[arg(long)]
    whole_duration: bool,
}

#[derive(Args)]
pub struct LayoutArgs {
    /// JSON task list
    #[arg(long)]
    tasks: PathBuf,
}

#[derive(Serialize)]
struct OverlapReport {
    overlapping: BTreeSet<String>,
}

pub fn run_overlaps(args: OverlapsArgs) -> CliResult {
    let config = Config::load_or_default();
    let tasks = read_tasks(&args.tasks)?;

    let overlapping = if args.whole_duration {
        find_overlapping_tasks(&tasks)
    } else {
        find_overlapping_tasks_with_work_time(&tasks)
    };
    print_json(&OverlapReport { overlapping }, &config)
}

pub fn run_layout(args: LayoutArgs) -> CliResult {
    let config = Config::load_or_default();
    let tasks = read_tasks(&args.tasks)?;
    print_json(&calculate_task_overlap_layout(&tasks), &config)
}

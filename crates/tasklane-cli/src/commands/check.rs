//! Placement check, the CLI counterpart of one drag-hover step.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tasklane_core::{
    can_place_task_with_work_time, generate_time_slots, get_work_time_slots, occupied_work_slots,
    Config, Task,
};

use super::{print_json, read_tasks, CliResult, HoursArgs};

#[derive(Args)]
pub struct CheckArgs {
    /// Candidate start slot (HH:MM)
    #[arg(long)]
    start: String,
    /// Total duration in minutes
    #[arg(long)]
    duration: u32,
    /// Work time in minutes
    #[arg(long)]
    work: Option<u32>,
    /// Wait time in minutes
    #[arg(long)]
    wait: Option<u32>,
    /// JSON task list already on the timeline
    #[arg(long)]
    tasks: Option<PathBuf>,
    /// Id of the task being moved; its own slots do not count as occupied
    #[arg(long)]
    move_id: Option<String>,
    #[command(flatten)]
    hours: HoursArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    can_place: bool,
    work_slots: Vec<String>,
}

pub fn run(args: CheckArgs) -> CliResult {
    let config = Config::load_or_default();
    let hours = args.hours.resolve(&config)?;

    let candidate_id = args.move_id.clone().unwrap_or_else(|| "candidate".to_string());
    let mut candidate = Task::new(candidate_id, "", args.duration);
    candidate.work_time_minutes = args.work;
    candidate.wait_time_minutes = args.wait;
    candidate.start_time = Some(args.start.clone());
    candidate.validate()?;

    let tasks = match &args.tasks {
        Some(path) => read_tasks(path)?,
        None => Vec::new(),
    };

    let occupied = occupied_work_slots(&tasks, args.move_id.as_deref());
    let available = generate_time_slots(&hours);

    let report = CheckReport {
        can_place: can_place_task_with_work_time(
            &args.start,
            args.duration,
            args.work,
            args.wait,
            &occupied,
            &available,
        ),
        work_slots: get_work_time_slots(&args.start, args.duration, args.work, args.wait),
    };
    print_json(&report, &config)
}

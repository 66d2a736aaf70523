//! Task file management commands for CLI.

use clap::Subcommand;
use std::path::PathBuf;
use tasklane_core::{Config, Task};
use uuid::Uuid;

use super::{print_json, read_tasks, write_tasks, CliResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new unplaced task
    New {
        /// Display name
        name: String,
        /// Total duration in minutes (multiple of 15)
        #[arg(long)]
        duration: u32,
        /// Work time in minutes
        #[arg(long)]
        work: Option<u32>,
        /// Wait time in minutes
        #[arg(long)]
        wait: Option<u32>,
        /// Resource tag; repeat for several
        #[arg(long = "resource")]
        resources: Vec<String>,
        /// Append the task to this JSON task list (created if missing)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List tasks in a JSON task list
    List {
        /// JSON task list
        #[arg(long)]
        tasks: PathBuf,
    },
    /// Return a task to the unplaced pool
    Unplace {
        /// JSON task list, rewritten in place
        #[arg(long)]
        tasks: PathBuf,
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> CliResult {
    let config = Config::load_or_default();

    match action {
        TaskAction::New {
            name,
            duration,
            work,
            wait,
            resources,
            file,
        } => {
            let mut task = Task::new(Uuid::new_v4().to_string(), name, duration);
            task.work_time_minutes = work;
            task.wait_time_minutes = wait;
            task.resource_types = resources;
            task.validate()?;

            if let Some(path) = file {
                let mut tasks = if path.exists() {
                    read_tasks(&path)?
                } else {
                    Vec::new()
                };
                tasks.push(task.clone());
                write_tasks(&path, &tasks)?;
            }
            print_json(&task, &config)?;
        }
        TaskAction::List { tasks } => {
            let tasks = read_tasks(&tasks)?;
            if tasks.is_empty() {
                println!("No tasks found.");
            }
            for task in &tasks {
                let status = match (task.placement(), task.is_locked) {
                    (Some(start), true) => format!("{start} (locked)"),
                    (Some(start), false) => start.to_string(),
                    (None, _) => "unplaced".to_string(),
                };
                println!(
                    "{}  {}  {} min ({} work / {} wait)  {}",
                    task.id,
                    task.name,
                    task.duration_minutes,
                    task.effective_work_time(),
                    task.effective_wait_time(),
                    status
                );
            }
        }
        TaskAction::Unplace { tasks: path, id } => {
            let mut tasks = read_tasks(&path)?;
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| format!("task not found: {id}"))?;
            *task = task.clone().into_unplaced();
            write_tasks(&path, &tasks)?;
            println!("Task {id} unplaced.");
        }
    }
    Ok(())
}

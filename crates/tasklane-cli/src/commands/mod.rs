//! Subcommands and the helpers they share.

pub mod check;
pub mod config;
pub mod optimize;
pub mod overlaps;
pub mod slots;
pub mod task;

use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tasklane_core::{validate_tasks, BusinessHours, Config, Task, TimeRange};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Business hours overrides shared by every command that needs a day.
#[derive(Args, Debug, Default)]
pub struct HoursArgs {
    /// Working window as HH:MM-HH:MM (default: from config)
    #[arg(long, value_name = "HH:MM-HH:MM")]
    pub hours: Option<String>,
    /// Break window as HH:MM-HH:MM; repeat for several. Replaces configured breaks.
    #[arg(long = "break", value_name = "HH:MM-HH:MM")]
    pub breaks: Vec<String>,
}

impl HoursArgs {
    /// Resolve against the config and validate.
    pub fn resolve(&self, config: &Config) -> Result<BusinessHours, Box<dyn std::error::Error>> {
        let mut hours = config.business_hours.clone();

        if let Some(window) = &self.hours {
            let range = parse_range(window)?;
            hours.start = range.start;
            hours.end = range.end;
        }
        if !self.breaks.is_empty() {
            hours.breaks = self
                .breaks
                .iter()
                .map(|b| parse_range(b))
                .collect::<Result<_, _>>()?;
        }

        hours.validate()?;
        Ok(hours)
    }
}

/// Parse `HH:MM-HH:MM`.
pub fn parse_range(value: &str) -> Result<TimeRange, Box<dyn std::error::Error>> {
    let (start, end) = value
        .split_once('-')
        .ok_or_else(|| format!("expected HH:MM-HH:MM, got '{value}'"))?;
    Ok(TimeRange::new(start.trim(), end.trim()))
}

/// Read and validate a JSON task list. `-` reads stdin.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?
    };

    let tasks: Vec<Task> = serde_json::from_str(&content)?;
    validate_tasks(&tasks)?;
    tracing::debug!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Write a task list as pretty JSON.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> CliResult {
    std::fs::write(path, serde_json::to_string_pretty(tasks)?)?;
    Ok(())
}

/// Print a value as JSON, pretty or compact per config.
pub fn print_json<T: Serialize>(value: &T, config: &Config) -> CliResult {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

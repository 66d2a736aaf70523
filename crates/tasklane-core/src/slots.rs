//! Slot generation and occupancy.
//!
//! A slot is the canonical `HH:MM` start of a 15-minute interval. Two notions
//! of occupancy coexist:
//! - work-time slots: what blocks placement of other tasks
//! - whole-duration slots: what a task visually spans on the timeline
//!
//! A task's wait time never blocks another task from placing work there.

use std::collections::HashSet;

use crate::model::{effective_work_time, BusinessHours, Task};
use crate::time::{minutes_to_time, time_to_minutes, SLOT_MINUTES};

/// Enumerate slot start times in `[start, end)`, skipping break windows.
pub fn generate_time_slots(hours: &BusinessHours) -> Vec<String> {
    let start = time_to_minutes(&hours.start);
    let end = time_to_minutes(&hours.end);

    (start..end)
        .step_by(SLOT_MINUTES as usize)
        .filter(|m| !hours.is_break(*m))
        .map(minutes_to_time)
        .collect()
}

/// Slots spanned by the whole duration, work and wait alike.
pub fn get_task_slots(start_time: &str, duration: u32) -> Vec<String> {
    slot_range(start_time, 0, slot_count(duration))
}

/// Slots spanned by the work portion only.
pub fn get_work_time_slots(
    start_time: &str,
    duration: u32,
    work_time: Option<u32>,
    wait_time: Option<u32>,
) -> Vec<String> {
    let work = effective_work_time(duration, work_time, wait_time);
    slot_range(start_time, 0, slot_count(work))
}

/// Slots after the work portion up to the end of the duration.
pub fn get_wait_time_slots(
    start_time: &str,
    duration: u32,
    work_time: Option<u32>,
    wait_time: Option<u32>,
) -> Vec<String> {
    let work = effective_work_time(duration, work_time, wait_time);
    slot_range(start_time, slot_count(work), slot_count(duration))
}

/// Work-time slots of every placed task, except `exclude_task_id`.
///
/// Pass the id of a task being moved so it does not collide with itself.
pub fn occupied_work_slots(tasks: &[Task], exclude_task_id: Option<&str>) -> HashSet<String> {
    tasks
        .iter()
        .filter(|t| Some(t.id.as_str()) != exclude_task_id)
        .filter_map(|t| t.placement().map(|start| task_work_slots(t, start)))
        .flatten()
        .collect()
}

/// Work-time slots of `task` if it started at `start`
pub(crate) fn task_work_slots(task: &Task, start: &str) -> Vec<String> {
    get_work_time_slots(
        start,
        task.duration_minutes,
        task.work_time_minutes,
        task.wait_time_minutes,
    )
}

/// Wait-time slots of `task` if it started at `start`
pub(crate) fn task_wait_slots(task: &Task, start: &str) -> Vec<String> {
    get_wait_time_slots(
        start,
        task.duration_minutes,
        task.work_time_minutes,
        task.wait_time_minutes,
    )
}

fn slot_count(minutes: u32) -> u32 {
    minutes.div_ceil(SLOT_MINUTES)
}

fn slot_range(start_time: &str, from: u32, to: u32) -> Vec<String> {
    let base = time_to_minutes(start_time);
    (from..to)
        .map(|i| minutes_to_time(base.saturating_add(i * SLOT_MINUTES)))
        .collect()
}

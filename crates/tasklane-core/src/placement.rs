//! Placement legality checks.
//!
//! The validator knows nothing about which task is being moved. When checking
//! a move, the caller removes that task's own slots from `occupied` first
//! (see [`occupied_work_slots`] with an `exclude_task_id`), so the same check
//! serves both new placements and moves.

use std::collections::HashSet;

use crate::model::{BusinessHours, Task};
use crate::slots::{
    generate_time_slots, get_task_slots, get_work_time_slots, occupied_work_slots,
};

/// Whether a task's work time can start at `start_time`.
///
/// Every work-time slot must be available and unoccupied. A task with no
/// effective work time never collides.
pub fn can_place_task_with_work_time(
    start_time: &str,
    duration: u32,
    work_time: Option<u32>,
    wait_time: Option<u32>,
    occupied: &HashSet<String>,
    available: &[String],
) -> bool {
    let slots = get_work_time_slots(start_time, duration, work_time, wait_time);
    slots_are_free(&slots, occupied, available)
}

/// Whole-duration legality check: wait time counts as occupied as well.
///
/// Kept for callers that treat a task as blocking its entire span.
pub fn can_place_task(
    start_time: &str,
    duration: u32,
    occupied: &HashSet<String>,
    available: &[String],
) -> bool {
    let slots = get_task_slots(start_time, duration);
    slots_are_free(&slots, occupied, available)
}

/// Whether the task `task_id` may move to `new_start`.
///
/// Excludes the task's own slots before checking. Unknown ids are never
/// movable.
pub fn can_move_task(tasks: &[Task], task_id: &str, new_start: &str, hours: &BusinessHours) -> bool {
    let Some(task) = tasks.iter().find(|t| t.id == task_id) else {
        return false;
    };

    let occupied = occupied_work_slots(tasks, Some(task_id));
    let available = generate_time_slots(hours);

    can_place_task_with_work_time(
        new_start,
        task.duration_minutes,
        task.work_time_minutes,
        task.wait_time_minutes,
        &occupied,
        &available,
    )
}

fn slots_are_free(slots: &[String], occupied: &HashSet<String>, available: &[String]) -> bool {
    slots
        .iter()
        .all(|slot| available.contains(slot) && !occupied.contains(slot))
}

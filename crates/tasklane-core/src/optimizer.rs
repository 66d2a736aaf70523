//! Auto-arrange: greedy placement of every unlocked task.
//!
//! The optimizer shortens the day by interleaving tasks: one task's work time
//! goes into another task's wait time wherever possible.
//!
//! - Locked, placed tasks are fixed input and seed the occupied slots
//! - Remaining tasks are placed most-constrained first (see [`placement_order`])
//! - Each task takes the slot whose work overlaps the most already-placed wait
//!   time, earliest slot on ties
//! - A task that fits nowhere is returned unplaced
//!
//! The search is greedy and never backtracks, so input order only matters
//! where the ordering heuristic ties.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::model::{BusinessHours, Task};
use crate::placement::can_place_task_with_work_time;
use crate::slots::{generate_time_slots, task_wait_slots, task_work_slots};
use crate::time::{minutes_to_time, SLOT_MINUTES};

/// Outcome of one auto-arrange pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Every input task in input order, with new placements applied
    pub optimized_tasks: Vec<Task>,
    /// Latest end over all placed tasks (`HH:MM`); business-hours start if none
    pub earliest_end_time: String,
    /// Minutes of work placed inside other tasks' wait time
    pub total_wait_time_reduction: u32,
}

impl OptimizationResult {
    /// Tasks the optimizer could not fit anywhere
    pub fn unplaced(&self) -> impl Iterator<Item = &Task> {
        self.optimized_tasks.iter().filter(|t| !t.is_placed)
    }
}

/// Best start found for one task
#[derive(Debug, Clone)]
struct Candidate {
    start: String,
    overlapped_work_time: u32,
}

/// Slot state accumulated while placing tasks
#[derive(Debug, Default)]
struct Occupancy {
    work: HashSet<String>,
    wait: HashSet<String>,
}

impl Occupancy {
    fn commit(&mut self, task: &Task, start: &str) {
        self.work.extend(task_work_slots(task, start));
        self.wait.extend(task_wait_slots(task, start));
    }
}

/// Stateless auto-arrange engine
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementOptimizer;

impl PlacementOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Compute a placement for every task that is not locked in place.
    ///
    /// Never fails: tasks that do not fit are returned with `is_placed = false`,
    /// no start time and the lock cleared.
    pub fn optimize(&self, tasks: &[Task], hours: &BusinessHours) -> OptimizationResult {
        let available = generate_time_slots(hours);
        let mut occupancy = Occupancy::default();
        let mut optimized = tasks.to_vec();

        let mut pending = Vec::new();
        for (index, task) in tasks.iter().enumerate() {
            match task.placement() {
                Some(start) if task.is_locked => occupancy.commit(task, start),
                _ => pending.push(index),
            }
        }
        pending.sort_by(|&a, &b| placement_order(&tasks[a], &tasks[b]));

        let mut total_wait_time_reduction = 0;

        for index in pending {
            let task = &tasks[index];
            optimized[index] = match best_candidate(task, &available, &occupancy) {
                Some(candidate) => {
                    tracing::debug!(
                        "Placing task {} at {} ({} min in wait time)",
                        task.id,
                        candidate.start,
                        candidate.overlapped_work_time
                    );
                    occupancy.commit(task, &candidate.start);
                    total_wait_time_reduction += candidate.overlapped_work_time;
                    task.clone().with_placement(candidate.start)
                }
                None => {
                    tracing::debug!("No slot fits task {}, leaving it unplaced", task.id);
                    task.clone().into_unplaced()
                }
            };
        }

        let earliest_end_time = optimized
            .iter()
            .filter_map(Task::end_minutes)
            .max()
            .map(minutes_to_time)
            .unwrap_or_else(|| hours.start.clone());

        tracing::info!(
            "Arranged {} tasks: day ends at {}, {} min of wait time reused",
            optimized.iter().filter(|t| t.is_placed).count(),
            earliest_end_time,
            total_wait_time_reduction
        );

        OptimizationResult {
            optimized_tasks: optimized,
            earliest_end_time,
            total_wait_time_reduction,
        }
    }
}

/// Convenience function to run the optimizer
pub fn optimize_task_placement(tasks: &[Task], hours: &BusinessHours) -> OptimizationResult {
    PlacementOptimizer::new().optimize(tasks, hours)
}

/// Most-constrained-first ordering.
///
/// Tasks with wait time come first, larger wait first; then larger work time.
/// Stable sorting keeps input order for full ties.
pub fn placement_order(a: &Task, b: &Task) -> Ordering {
    let (wait_a, wait_b) = (a.effective_wait_time(), b.effective_wait_time());
    let (work_a, work_b) = (a.effective_work_time(), b.effective_work_time());

    match (wait_a > 0, wait_b > 0) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => wait_b.cmp(&wait_a).then_with(|| work_b.cmp(&work_a)),
    }
}

fn best_candidate(task: &Task, available: &[String], occupancy: &Occupancy) -> Option<Candidate> {
    let work_slots = task.effective_work_time().div_ceil(SLOT_MINUTES) as usize;
    if work_slots > available.len() {
        return None;
    }

    let mut best: Option<Candidate> = None;

    for slot in available {
        let fits = can_place_task_with_work_time(
            slot,
            task.duration_minutes,
            task.work_time_minutes,
            task.wait_time_minutes,
            &occupancy.work,
            available,
        );
        if !fits {
            continue;
        }

        let overlapped_work_time = task_work_slots(task, slot)
            .iter()
            .filter(|s| occupancy.wait.contains(*s))
            .count() as u32
            * SLOT_MINUTES;

        // Slots are ascending, so strict > keeps the earliest start on ties.
        let better = best
            .as_ref()
            .map_or(true, |b| overlapped_work_time > b.overlapped_work_time);
        if better {
            best = Some(Candidate {
                start: slot.clone(),
                overlapped_work_time,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(result: &'a OptimizationResult, id: &str) -> &'a Task {
        result
            .optimized_tasks
            .iter()
            .find(|t| t.id == id)
            .unwrap()
    }

    #[test]
    fn test_ordering_puts_wait_tasks_first() {
        let mut tasks = vec![
            Task::new("short", "Short", 30),
            Task::new("long", "Long", 120),
            Task::new("small-wait", "Small wait", 60).with_split(45, 15),
            Task::new("big-wait", "Big wait", 60).with_split(15, 45),
            Task::new("big-wait-more-work", "Big wait", 90).with_split(45, 45),
        ];
        tasks.sort_by(placement_order);

        let order: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            order,
            vec!["big-wait-more-work", "big-wait", "small-wait", "long", "short"]
        );
    }

    #[test]
    fn test_work_goes_into_wait_window() {
        let tasks = vec![
            Task::new("a", "A", 30),
            Task::new("b", "B", 60).with_split(30, 30),
        ];
        let result = optimize_task_placement(&tasks, &BusinessHours::default());

        assert_eq!(find(&result, "b").start_time.as_deref(), Some("09:00"));
        assert_eq!(find(&result, "a").start_time.as_deref(), Some("09:30"));
        assert_eq!(result.earliest_end_time, "10:00");
        assert_eq!(result.total_wait_time_reduction, 30);
    }

    #[test]
    fn test_preserves_input_order() {
        let tasks = vec![
            Task::new("a", "A", 30),
            Task::new("b", "B", 60).with_split(30, 30),
        ];
        let result = optimize_task_placement(&tasks, &BusinessHours::default());
        let ids: Vec<&str> = result.optimized_tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_unplaced_locked_task_is_optimized() {
        let mut ghost = Task::new("a", "A", 30).with_lock();
        ghost.start_time = Some("15:00".to_string());
        let result = optimize_task_placement(&[ghost], &BusinessHours::default());

        let task = find(&result, "a");
        assert!(task.is_placed);
        assert_eq!(task.start_time.as_deref(), Some("09:00"));
    }

    #[test]
    fn test_locked_task_blocks_its_work_slots() {
        let tasks = vec![
            Task::new("fixed", "Fixed", 60).with_placement("09:00").with_lock(),
            Task::new("free", "Free", 30),
        ];
        let result = optimize_task_placement(&tasks, &BusinessHours::default());
        assert_eq!(find(&result, "free").start_time.as_deref(), Some("10:00"));
    }

    #[test]
    fn test_empty_input_ends_at_opening_time() {
        let result = optimize_task_placement(&[], &BusinessHours::new("08:30", "17:00"));
        assert!(result.optimized_tasks.is_empty());
        assert_eq!(result.earliest_end_time, "08:30");
        assert_eq!(result.total_wait_time_reduction, 0);
    }

    #[test]
    fn test_task_longer_than_day_is_unplaced() {
        let tasks = vec![Task::new("huge", "Huge", 600).with_placement("09:00")];
        let result = optimize_task_placement(&tasks, &BusinessHours::default());

        let task = find(&result, "huge");
        assert!(!task.is_placed);
        assert_eq!(task.start_time, None);
        assert_eq!(result.unplaced().count(), 1);
        assert_eq!(result.earliest_end_time, "09:00");
    }

    #[test]
    fn test_oversized_task_is_unplaced_without_overflow() {
        let tasks = vec![
            Task::new("huge", "Huge", 4_294_967_280).with_placement("09:00"),
            Task::new("small", "Small", 30),
        ];
        let result = optimize_task_placement(&tasks, &BusinessHours::default());
        assert!(!find(&result, "huge").is_placed);
        assert_eq!(find(&result, "small").placement(), Some("09:00"));
        assert_eq!(result.earliest_end_time, "09:30");
    }

    #[test]
    fn test_result_serializes_in_camel_case() {
        let result = optimize_task_placement(&[Task::new("a", "A", 15)], &BusinessHours::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["earliestEndTime"], "09:15");
        assert_eq!(json["totalWaitTimeReduction"], 0);
        assert_eq!(json["optimizedTasks"][0]["startTime"], "09:00");
    }
}

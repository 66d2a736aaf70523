//! Overlap detection and side-by-side lane layout for placed tasks.
//!
//! Overlap is a display concern, separate from placement legality: a task can
//! be legally placed in another task's wait time and still be flagged here
//! when the whole-duration variant is used.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::Task;

/// A placed task's interval in minutes since midnight, `[start, end)`
#[derive(Debug, Clone, Copy)]
struct Interval<'a> {
    task: &'a Task,
    start: u32,
    end: u32,
}

impl Interval<'_> {
    fn overlaps(&self, other: &Interval<'_>) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Ids of placed tasks whose work-time intervals collide with another's.
///
/// Tasks with no work time cannot collide.
pub fn find_overlapping_tasks_with_work_time(tasks: &[Task]) -> BTreeSet<String> {
    let intervals = placed_intervals(tasks, |t| t.effective_work_time());
    colliding_ids(&intervals)
}

/// Ids of placed tasks whose whole-duration intervals collide with another's.
pub fn find_overlapping_tasks(tasks: &[Task]) -> BTreeSet<String> {
    let intervals = placed_intervals(tasks, |t| t.duration_minutes);
    colliding_ids(&intervals)
}

fn placed_intervals<F>(tasks: &[Task], length: F) -> Vec<Interval<'_>>
where
    F: Fn(&Task) -> u32,
{
    tasks
        .iter()
        .filter_map(|task| {
            let start = task.start_minutes()?;
            let len = length(task);
            (len > 0).then_some(Interval {
                task,
                start,
                end: start.saturating_add(len),
            })
        })
        .collect()
}

fn colliding_ids(intervals: &[Interval<'_>]) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();

    for (i, a) in intervals.iter().enumerate() {
        for b in &intervals[i + 1..] {
            if a.overlaps(b) && a.task.shares_resource_with(b.task) {
                ids.insert(a.task.id.clone());
                ids.insert(b.task.id.clone());
            }
        }
    }

    ids
}

/// Display lane for one placed task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneAssignment {
    pub task_id: String,
    /// Zero-based lane within the task's cluster
    pub lane: usize,
    /// Number of lanes the cluster is split into
    pub lane_count: usize,
}

/// Split placed tasks into side-by-side lanes.
///
/// Tasks whose whole-duration intervals overlap, directly or through a chain
/// of overlaps, form a cluster. Inside a cluster, tasks ordered by start time
/// (ties by id) take lanes `0..n`. A task that overlaps nothing gets lane 0
/// of 1. Results are ordered by start time, then id.
pub fn calculate_task_overlap_layout(tasks: &[Task]) -> Vec<LaneAssignment> {
    let mut intervals = placed_intervals(tasks, |t| t.duration_minutes.max(1));
    intervals.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.task.id.cmp(&b.task.id)));

    let mut layout = Vec::with_capacity(intervals.len());
    let mut cluster: Vec<&Interval<'_>> = Vec::new();
    let mut cluster_end = 0;

    for interval in &intervals {
        if !cluster.is_empty() && interval.start >= cluster_end {
            flush_cluster(&mut cluster, &mut layout);
        }
        cluster_end = if cluster.is_empty() {
            interval.end
        } else {
            cluster_end.max(interval.end)
        };
        cluster.push(interval);
    }
    flush_cluster(&mut cluster, &mut layout);

    layout
}

fn flush_cluster(cluster: &mut Vec<&Interval<'_>>, layout: &mut Vec<LaneAssignment>) {
    let lane_count = cluster.len();
    layout.extend(cluster.drain(..).enumerate().map(|(lane, interval)| LaneAssignment {
        task_id: interval.task.id.clone(),
        lane,
        lane_count,
    }));
}
